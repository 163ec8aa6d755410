use hv_core::HvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(#[from] HvError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
