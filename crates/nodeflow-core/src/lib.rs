//! Nodeflow Core: Stage trait, Runner, and Data Model
//!
//! Generic stage-by-stage core: every stage takes one [`Scalar`], returns a
//! new one, and declares whether it is deterministic. The runner chains
//! stages strictly in order and records a proof per stage.

pub mod stage;
pub mod runner;
pub mod data_model;
pub mod error;
pub mod context;

pub use stage::{Stage, StageError};
pub use runner::PipelineRunner;
pub use data_model::{RunReport, Scalar, StageProof};
pub use context::ExecutionContext;
pub use error::{DomainError, NodeflowError};
