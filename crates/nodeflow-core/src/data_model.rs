//! Data Model: Scalar, StageProof, RunReport
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// The single numeric value flowing between stages.
///
/// Stages never mutate a `Scalar`; each one returns a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(f64);

impl Scalar {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Canonical byte form, used for stage hashes.
    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Scalar> for f64 {
    fn from(scalar: Scalar) -> Self {
        scalar.0
    }
}

impl Add<f64> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: f64) -> Scalar {
        Scalar(self.0 + rhs)
    }
}

impl Mul<f64> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: f64) -> Scalar {
        Scalar(self.0 * rhs)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageProof {
    pub id: String,
    pub input: Scalar,
    pub output: Scalar,
    pub in_hash: String,
    pub out_hash: String,
    pub deterministic: bool,
    pub latency_us: u64,
}

/// Outcome of one complete pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub pipeline_id: String,
    pub trace_id: String,
    pub output: Scalar,
    pub stages: Vec<StageProof>,
}

impl RunReport {
    /// The one line the driver prints: `Final output: <value>`.
    pub fn summary_line(&self) -> String {
        format!("Final output: {}", self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_shortest_float_form() {
        assert_eq!(Scalar::from(22).to_string(), "22");
        assert_eq!(Scalar::new(22f64.sqrt()).to_string(), "4.69041575982343");
        assert_eq!(Scalar::new(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn test_arithmetic_returns_new_value() {
        let x = Scalar::from(10);
        let y = x + 1.0;
        assert_eq!(x.value(), 10.0);
        assert_eq!(y.value(), 11.0);
        assert_eq!((y * 2.0).value(), 22.0);
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&Scalar::new(2.5)).unwrap();
        assert_eq!(json, "2.5");
        let back: Scalar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Scalar::new(2.5));
    }

    #[test]
    fn test_summary_line() {
        let report = RunReport {
            pipeline_id: "node1".to_string(),
            trace_id: "t".to_string(),
            output: Scalar::new(4.5),
            stages: vec![],
        };
        assert_eq!(report.summary_line(), "Final output: 4.5");
    }
}
