use nodeflow_core::{ExecutionContext, Scalar, Stage, StageError};

pub fn increment(x: Scalar) -> Scalar {
    x + 1.0
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IncrementStage;

impl Stage for IncrementStage {
    fn id(&self) -> &'static str {
        "node1.increment.v1"
    }

    fn run(&self, input: Scalar, _ctx: &ExecutionContext) -> Result<Scalar, StageError> {
        Ok(increment(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment() {
        assert_eq!(increment(Scalar::from(10)), Scalar::from(11));
        assert_eq!(increment(Scalar::from(-1)), Scalar::from(0));
        assert_eq!(increment(Scalar::new(0.5)), Scalar::new(1.5));
    }
}
