use hv_behavior::BehaviorError;
use hv_core::HvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] HvError),

    #[error("behavior setup failed: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("{what} is {got}, expected {expected}")]
    Mismatch {
        what:     &'static str,
        expected: String,
        got:      String,
    },
}

pub type SimResult<T> = Result<T, SimError>;
