//! Motion model trait.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Screen axis a history belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Trait for particle motion models.
///
/// A motion model predicts the next position on one axis from that axis'
/// recent history (oldest first). The prediction is deterministic; the
/// stochastic perturbation is added by the caller from an injected noise
/// source.
pub trait MotionModel: Send + Sync {
    /// Number of past samples the prediction needs.
    fn order(&self) -> usize;

    /// Predict the next position on `axis`.
    ///
    /// # Errors
    /// `Error::InsufficientHistory` if `history` is shorter than `order()`.
    fn predict(&self, axis: Axis, history: &[f64]) -> Result<f64>;
}
