//! Principal square root, defined only on the non-negative reals.
use nodeflow_core::{DomainError, ExecutionContext, Scalar, Stage, StageError};

const STAGE_ID: &str = "node3.sqrt.v1";

/// Returns the principal square root of `x`.
///
/// Negative and NaN inputs have no real square root and produce a
/// [`DomainError`] instead of a NaN value.
pub fn square_root(x: Scalar) -> Result<Scalar, DomainError> {
    let value = x.value();
    if value.is_nan() || value < 0.0 {
        return Err(DomainError {
            stage: STAGE_ID,
            value,
        });
    }
    Ok(Scalar::new(value.sqrt()))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SquareRootStage;

impl Stage for SquareRootStage {
    fn id(&self) -> &'static str {
        STAGE_ID
    }

    fn run(&self, input: Scalar, _ctx: &ExecutionContext) -> Result<Scalar, StageError> {
        Ok(square_root(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_root_of_perfect_squares() {
        assert_eq!(square_root(Scalar::from(0)).unwrap(), Scalar::from(0));
        assert_eq!(square_root(Scalar::from(16)).unwrap(), Scalar::from(4));
        assert_eq!(square_root(Scalar::new(0.25)).unwrap(), Scalar::new(0.5));
    }

    #[test]
    fn test_negative_zero_is_in_domain() {
        let root = square_root(Scalar::new(-0.0)).unwrap();
        assert_eq!(root.value(), 0.0);
    }

    #[test]
    fn test_negative_input_is_domain_error() {
        let err = square_root(Scalar::from(-4)).unwrap_err();
        assert_eq!(err.stage, STAGE_ID);
        assert_eq!(err.value, -4.0);
    }

    #[test]
    fn test_nan_is_domain_error() {
        assert!(square_root(Scalar::new(f64::NAN)).is_err());
    }

    #[test]
    fn test_stage_wraps_domain_error() {
        let err = SquareRootStage
            .run(Scalar::from(-1), &ExecutionContext::new())
            .unwrap_err();
        assert!(matches!(err, StageError::Domain(DomainError { value, .. }) if value == -1.0));
    }
}
