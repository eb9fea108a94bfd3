//! Stage Trait: the single contract every stage implements
use crate::data_model::Scalar;
use crate::error::DomainError;
use thiserror::Error;

/// Contract of one pipeline stage
pub trait Stage: Send + Sync {
    /// Unique stage id (ex: "node1.increment.v1")
    fn id(&self) -> &'static str;

    /// Whether the stage is deterministic (default: true)
    fn deterministic(&self) -> bool {
        true
    }

    /// Runs the stage
    fn run(
        &self,
        input: Scalar,
        ctx: &crate::context::ExecutionContext,
    ) -> Result<Scalar, StageError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StageError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}
