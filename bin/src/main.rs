//! tapeline CLI - OHLCV resampling and paced replay of market data rows.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "tapeline")]
#[command(about = "OHLCV resampling and paced replay of market data rows", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resample a row file into OHLCV bars
    Resample {
        /// Input file (.csv, .tsv, .ndjson, .jsonl or .json)
        input: PathBuf,

        /// Bar timeframe (1m, 5m, 15m, 1h, 1d, 1w, 1mo)
        #[arg(short, long)]
        timeframe: String,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format. Defaults to the output extension, else csv.
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Query month-partitioned rows and print the JSON response
    Query {
        /// Partition root directory
        root: PathBuf,

        /// Instrument symbol
        symbol: String,

        /// Window start (RFC 3339 or YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Window end (RFC 3339 or YYYY-MM-DD)
        #[arg(short, long)]
        end: String,

        /// Query mode (ticks or bars)
        #[arg(short, long, default_value = "bars")]
        mode: String,

        /// Bar size, required in bars mode
        #[arg(short, long)]
        bar_size: Option<String>,

        /// Maximum number of rows taken from the window
        #[arg(short, long, default_value_t = tapeline_lib::DEFAULT_LIMIT)]
        limit: usize,

        /// Partition file format
        #[arg(long, value_enum, default_value = "csv")]
        partition_format: Format,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },

    /// Replay a row file as paced NDJSON on stdout
    Replay {
        /// Input file (.csv, .tsv, .ndjson, .jsonl or .json)
        input: PathBuf,

        /// Resample to this timeframe before replaying
        #[arg(short, long)]
        timeframe: Option<String>,

        /// Speed multiplier (2.0 replays twice as fast as real time)
        #[arg(long, default_value_t = 1.0)]
        speed: f64,

        /// Skip rows before this time (RFC 3339 or YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Skip rows after this time (RFC 3339 or YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,

        /// Cap on any single wait, in milliseconds
        #[arg(long)]
        max_delay_ms: Option<u64>,
    },

    /// List supported timeframes
    Timeframes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    display::init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Resample {
            input,
            timeframe,
            output,
            format,
        } => commands::resample::resample(&input, &timeframe, output, format, cli.quiet),
        Commands::Query {
            root,
            symbol,
            start,
            end,
            mode,
            bar_size,
            limit,
            partition_format,
            pretty,
        } => commands::query::query(
            &root,
            &symbol,
            &start,
            &end,
            &mode,
            bar_size.as_deref(),
            limit,
            partition_format,
            pretty,
        ),
        Commands::Replay {
            input,
            timeframe,
            speed,
            start,
            end,
            max_delay_ms,
        } => {
            commands::replay::replay(
                &input,
                timeframe.as_deref(),
                speed,
                start.as_deref(),
                end.as_deref(),
                max_delay_ms,
            )
            .await
        }
        Commands::Timeframes => {
            commands::timeframes::list_timeframes();
            Ok(())
        }
    }
}
