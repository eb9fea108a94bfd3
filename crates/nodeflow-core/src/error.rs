//! Unified Error Model
use crate::stage::StageError;
use thiserror::Error;

/// Input outside a stage's mathematical domain (ex: negative square root).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("DOMAIN/{stage}: {value} is outside the real domain")]
pub struct DomainError {
    pub stage: &'static str,
    pub value: f64,
}

#[derive(Error, Debug)]
pub enum NodeflowError {
    #[error("STAGE/{stage}")]
    Stage {
        stage: String,
        #[source]
        source: StageError,
    },
}

impl NodeflowError {
    /// Id of the stage that halted the run.
    pub fn stage(&self) -> &str {
        match self {
            Self::Stage { stage, .. } => stage,
        }
    }
}
