//! Resource-field error type.

use thiserror::Error;

use hv_core::ResourceId;

/// Errors produced by `hv-field`.
///
/// Harvesting itself never fails: extracting from a missing node yields zero.
/// These variants cover explicit lookups and spawner setup.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("resource {0} not found in field")]
    NotFound(ResourceId),

    #[error("invalid scatter parameters: {0}")]
    Scatter(String),
}

pub type FieldResult<T> = Result<T, FieldError>;
