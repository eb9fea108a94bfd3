//! Nodeflow Stages: the three numeric nodes and the default pipeline.
//!
//! # Pipeline Flow
//!
//! ```text
//! 10 → increment → double → square root → report
//!          ↓          ↓           ↓
//!         11         22      4.69041575982343
//! ```

mod double;
mod increment;
mod square_root;

pub use double::{double, DoubleStage};
pub use increment::{increment, IncrementStage};
pub use square_root::{square_root, SquareRootStage};

use nodeflow_core::{ExecutionContext, NodeflowError, PipelineRunner, RunReport, Scalar};

/// Fixed value the default pipeline starts from.
pub const SEED: Scalar = Scalar::new(10.0);

/// increment → double → square root
pub fn default_pipeline() -> PipelineRunner {
    PipelineRunner::new(vec![
        Box::new(IncrementStage),
        Box::new(DoubleStage),
        Box::new(SquareRootStage),
    ])
}

/// Runs the default pipeline from [`SEED`].
pub fn run_default(ctx: &ExecutionContext) -> Result<RunReport, NodeflowError> {
    default_pipeline().run(SEED, ctx)
}
