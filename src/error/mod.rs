pub mod parse;
pub mod runtime;
pub mod snapshot;

/// Marker for every error type surfaced by this crate.
pub trait IntcodeError: std::error::Error {}
