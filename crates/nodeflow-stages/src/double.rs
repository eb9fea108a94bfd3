use nodeflow_core::{ExecutionContext, Scalar, Stage, StageError};

pub fn double(x: Scalar) -> Scalar {
    x * 2.0
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleStage;

impl Stage for DoubleStage {
    fn id(&self) -> &'static str {
        "node2.double.v1"
    }

    fn run(&self, input: Scalar, _ctx: &ExecutionContext) -> Result<Scalar, StageError> {
        Ok(double(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double() {
        assert_eq!(double(Scalar::from(11)), Scalar::from(22));
        assert_eq!(double(Scalar::from(-3)), Scalar::from(-6));
        assert_eq!(double(Scalar::from(0)), Scalar::from(0));
    }
}
