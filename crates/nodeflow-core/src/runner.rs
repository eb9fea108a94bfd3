//! Pipeline Runner: chains stages in order and records a proof per stage
use crate::context::ExecutionContext;
use crate::data_model::{RunReport, Scalar, StageProof};
use crate::error::NodeflowError;
use crate::stage::Stage;
use std::time::Instant;
use tracing::{debug, info_span, warn};

pub struct PipelineRunner {
    stages: Vec<Box<dyn Stage>>,
    pipeline_id: String,
}

impl PipelineRunner {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        let pipeline_id = stages
            .iter()
            .map(|s| s.id().split('.').next().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("→");

        Self { stages, pipeline_id }
    }

    /// Feeds `seed` through every stage. The first failing stage halts the
    /// run; stages after it are never invoked.
    pub fn run(&self, seed: Scalar, ctx: &ExecutionContext) -> Result<RunReport, NodeflowError> {
        let span = info_span!(
            "pipeline",
            pipeline_id = %self.pipeline_id,
            trace_id = %ctx.trace_id
        );
        let _enter = span.enter();

        let mut current = seed;
        let mut proofs = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let start = Instant::now();
            let in_hash = self.hash_scalar(current);

            let result = stage.run(current, ctx).map_err(|e| {
                warn!(stage = stage.id(), input = %current, error = %e, "stage failed");
                NodeflowError::Stage {
                    stage: stage.id().to_string(),
                    source: e,
                }
            })?;

            let latency_us = start.elapsed().as_micros() as u64;
            debug!(stage = stage.id(), input = %current, output = %result, latency_us, "stage completed");

            proofs.push(StageProof {
                id: stage.id().to_string(),
                input: current,
                output: result,
                in_hash,
                out_hash: self.hash_scalar(result),
                deterministic: stage.deterministic(),
                latency_us,
            });

            current = result;
        }

        Ok(RunReport {
            pipeline_id: self.pipeline_id.clone(),
            trace_id: ctx.trace_id.clone(),
            output: current,
            stages: proofs,
        })
    }

    fn hash_scalar(&self, value: Scalar) -> String {
        format!("blake3:{}", blake3::hash(&value.to_le_bytes()))
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
