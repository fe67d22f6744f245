//! Conversion from likelihood scores to particle weights.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How a likelihood score becomes an (unnormalized) particle weight.
///
/// There is no default: the right transform depends on the metric, and a
/// distance fed to `Similarity` (or the reverse) silently inverts tracking.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeightTransform {
    /// `exp(-lambda * d)`
    NegExp { lambda: f64 },
    /// `exp(-d^2 / (2 sigma^2))`
    Gaussian { sigma: f64 },
    /// `1 / (d + epsilon)`
    Inverse { epsilon: f64 },
    /// The score is already a similarity; negative values are clipped to 0.
    Similarity,
}

impl WeightTransform {
    /// Weight for one score. Non-finite scores get weight 0.
    #[inline]
    pub fn weight(&self, score: f64) -> f64 {
        if !score.is_finite() {
            return 0.0;
        }
        let weight = match *self {
            WeightTransform::NegExp { lambda } => (-lambda * score).exp(),
            WeightTransform::Gaussian { sigma } => (-(score * score) / (2.0 * sigma * sigma)).exp(),
            WeightTransform::Inverse { epsilon } => 1.0 / (score.max(0.0) + epsilon),
            WeightTransform::Similarity => score.max(0.0),
        };
        if weight.is_finite() {
            weight
        } else {
            0.0
        }
    }

    /// Weight for a score that may have failed to compute.
    pub fn weight_or_zero(&self, score: Option<f64>) -> f64 {
        score.map_or(0.0, |s| self.weight(s))
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            WeightTransform::NegExp { lambda } if !(lambda.is_finite() && lambda > 0.0) => Err(
                Error::InvalidConfig(format!("neg_exp lambda must be positive, got {}", lambda)),
            ),
            WeightTransform::Gaussian { sigma } if !(sigma.is_finite() && sigma > 0.0) => Err(
                Error::InvalidConfig(format!("gaussian sigma must be positive, got {}", sigma)),
            ),
            WeightTransform::Inverse { epsilon } if !(epsilon.is_finite() && epsilon > 0.0) => Err(
                Error::InvalidConfig(format!("inverse epsilon must be positive, got {}", epsilon)),
            ),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_decrease_with_distance() {
        let transforms = [
            WeightTransform::NegExp { lambda: 5.0 },
            WeightTransform::Gaussian { sigma: 0.3 },
            WeightTransform::Inverse { epsilon: 1e-3 },
        ];
        for transform in transforms {
            assert!(transform.weight(0.1) > transform.weight(0.5), "{:?}", transform);
        }
    }

    #[test]
    fn test_weight_values() {
        assert_relative_eq!(WeightTransform::NegExp { lambda: 2.0 }.weight(0.5), (-1.0f64).exp());
        assert_relative_eq!(WeightTransform::Gaussian { sigma: 1.0 }.weight(0.0), 1.0);
        assert_relative_eq!(WeightTransform::Inverse { epsilon: 0.5 }.weight(1.5), 0.5);
        assert_eq!(WeightTransform::Similarity.weight(0.8), 0.8);
        assert_eq!(WeightTransform::Similarity.weight(-0.2), 0.0);
    }

    #[test]
    fn test_non_finite_scores_get_zero_weight() {
        let transform = WeightTransform::NegExp { lambda: 1.0 };
        assert_eq!(transform.weight(f64::INFINITY), 0.0);
        assert_eq!(transform.weight(f64::NAN), 0.0);
        assert_eq!(transform.weight_or_zero(None), 0.0);
        assert_eq!(WeightTransform::Similarity.weight(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(WeightTransform::NegExp { lambda: 0.0 }.validate().is_err());
        assert!(WeightTransform::Gaussian { sigma: -1.0 }.validate().is_err());
        assert!(WeightTransform::Inverse { epsilon: f64::NAN }.validate().is_err());
        assert!(WeightTransform::Similarity.validate().is_ok());
    }

    #[test]
    fn test_serde_tagged() {
        let t: WeightTransform = serde_json::from_str(r#"{"type": "neg_exp", "lambda": 20.0}"#).unwrap();
        assert_eq!(t, WeightTransform::NegExp { lambda: 20.0 });
        let t: WeightTransform = serde_json::from_str(r#"{"type": "similarity"}"#).unwrap();
        assert_eq!(t, WeightTransform::Similarity);
    }
}
