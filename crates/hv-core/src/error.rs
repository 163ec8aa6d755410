//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `HvError` as one variant
//! where they forward configuration failures.

use thiserror::Error;

/// The top-level error type for `hv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} range is empty: [{min}, {max})")]
    EmptyRange {
        what: &'static str,
        min:  f32,
        max:  f32,
    },
}

/// Shorthand result type for all `hv-*` crates.
pub type HvResult<T> = Result<T, HvError>;
