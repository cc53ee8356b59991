//! CLI command implementations.

pub(crate) mod query;
pub(crate) mod replay;
pub(crate) mod resample;
pub(crate) mod timeframes;
