//! Paced replay stream.

use chrono::{DateTime, Utc};
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tapeline_types::{Result, Timestamped};
use tracing::{debug, trace};

use crate::{ReplayConfig, ReplayHandle};

/// Returns how long to wait between a row at `prev` and a row at `next`.
///
/// The gap is divided by `speed`; negative gaps (out-of-order rows) clamp
/// to zero and gaps too large to represent saturate at [`Duration::MAX`].
#[must_use]
pub fn pacing_delay(prev: DateTime<Utc>, next: DateTime<Utc>, speed: f64) -> Duration {
    let Ok(gap) = (next - prev).to_std() else {
        return Duration::ZERO;
    };
    let scaled = gap.as_secs_f64() / speed;
    if scaled.is_nan() || scaled <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(scaled).unwrap_or(Duration::MAX)
}

/// A one-shot stream that replays rows spaced by their timestamp gaps.
///
/// The first row is yielded immediately. Dropping the stream, or cancelling
/// its [`ReplayHandle`], abandons any wait in progress and yields nothing
/// further.
pub struct Replay<T> {
    inner: BoxStream<'static, T>,
    handle: ReplayHandle,
}

impl<T> Replay<T>
where
    T: Timestamped + Send + 'static,
{
    /// Creates a replay of `rows` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TapelineError::InvalidSpeed`] if the configured speed is not
    /// greater than zero. No row is yielded in that case.
    ///
    /// [`TapelineError::InvalidSpeed`]: tapeline_types::TapelineError::InvalidSpeed
    pub fn new<I>(rows: I, config: ReplayConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        let config = config.validated()?;
        let handle = ReplayHandle::new();
        let state = ReplayState {
            rows: rows.into_iter(),
            prev: None,
            config,
            handle: handle.clone(),
            emitted: 0,
        };

        debug!(speed = config.speed, "starting paced replay");
        let inner = stream::unfold(state, ReplayState::advance).fuse().boxed();
        Ok(Self { inner, handle })
    }
}

impl<T> Replay<T> {
    /// Returns a handle that cancels this replay.
    #[must_use]
    pub fn handle(&self) -> ReplayHandle {
        self.handle.clone()
    }

    /// Cancels this replay.
    pub fn cancel(&self) {
        self.handle.cancel();
    }
}

impl<T> Stream for Replay<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.inner.poll_next_unpin(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> std::fmt::Debug for Replay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Replay")
            .field("cancelled", &self.handle.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// Creates a replay of `rows` at `speed` times real time.
///
/// # Errors
///
/// Returns [`TapelineError::InvalidSpeed`] if `speed` is zero, negative or NaN.
///
/// [`TapelineError::InvalidSpeed`]: tapeline_types::TapelineError::InvalidSpeed
pub fn paced_replay<I>(rows: I, speed: f64) -> Result<Replay<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Timestamped + Send + 'static,
{
    Replay::new(rows, ReplayConfig::default().with_speed(speed))
}

/// Cursor of one replay.
struct ReplayState<I> {
    rows: I,
    prev: Option<DateTime<Utc>>,
    config: ReplayConfig,
    handle: ReplayHandle,
    emitted: usize,
}

impl<I> ReplayState<I>
where
    I: Iterator,
    I::Item: Timestamped,
{
    /// Waits out the gap before the next row and yields it.
    async fn advance(mut self) -> Option<(I::Item, Self)> {
        if self.handle.is_cancelled() {
            debug!(emitted = self.emitted, "replay cancelled");
            return None;
        }

        let Some(row) = self.rows.next() else {
            debug!(emitted = self.emitted, "replay finished");
            return None;
        };
        let ts = row.timestamp();

        if let Some(prev) = self.prev {
            let delay = self.delay_between(prev, ts);
            if !delay.is_zero() {
                trace!(?delay, "waiting before next row");
                tokio::select! {
                    biased;
                    () = self.handle.cancelled() => {
                        debug!(emitted = self.emitted, "replay cancelled while waiting");
                        return None;
                    }
                    () = tokio::time::sleep(delay) => {}
                }
            }
            if self.handle.is_cancelled() {
                debug!(emitted = self.emitted, "replay cancelled");
                return None;
            }
        }

        self.prev = Some(ts);
        self.emitted += 1;
        trace!(timestamp = %ts, emitted = self.emitted, "emitting row");
        Some((row, self))
    }

    fn delay_between(&self, prev: DateTime<Utc>, next: DateTime<Utc>) -> Duration {
        let delay = pacing_delay(prev, next, self.config.speed);
        match self.config.max_delay {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }
}
