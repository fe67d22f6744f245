//! Autoregressive motion model.
//!
//! The next position is a weighted sum of the recent positions on the same
//! axis. See http://demonstrations.wolfram.com/AutoRegressiveSimulationSecondOrder/
//! for the behaviour of second-order models.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use super::traits::{Axis, MotionModel};
use crate::{Error, Result};

/// Default second-order coefficients.
///
/// They sum to one, so a particle at rest stays at rest, and damp the
/// velocity by 0.8 per frame: `x_t - x_{t-1} = 0.8 (x_{t-1} - x_{t-2})`.
pub const DEFAULT_COEFFICIENTS: [f64; 2] = [1.8, -0.8];

/// Autoregressive model with one coefficient vector per axis.
///
/// Coefficient `k` multiplies the sample at lag `k + 1`, i.e. index 0 is
/// applied to the newest position:
///
/// `x_t = sum_k c[k] * x_{t-1-k}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoRegressive {
    x_coefficients: Vec<f64>,
    y_coefficients: Vec<f64>,
}

fn check_coefficients(coefficients: &[f64]) -> Result<()> {
    if coefficients.is_empty() {
        return Err(Error::InvalidConfig(
            "autoregressive model needs at least one coefficient".to_string(),
        ));
    }
    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(Error::InvalidConfig(format!(
            "autoregressive coefficients must be finite, got {:?}",
            coefficients
        )));
    }
    Ok(())
}

impl AutoRegressive {
    /// Model using the same coefficients on both axes.
    pub fn new(coefficients: Vec<f64>) -> Result<Self> {
        check_coefficients(&coefficients)?;
        Ok(Self {
            y_coefficients: coefficients.clone(),
            x_coefficients: coefficients,
        })
    }

    /// Model with separate coefficients per axis.
    pub fn per_axis(x_coefficients: Vec<f64>, y_coefficients: Vec<f64>) -> Result<Self> {
        check_coefficients(&x_coefficients)?;
        check_coefficients(&y_coefficients)?;
        Ok(Self {
            x_coefficients,
            y_coefficients,
        })
    }

    /// Learn per-axis coefficients from observed x and y trajectories.
    pub fn fit_trajectory(xs: &[f64], ys: &[f64], order: usize) -> Result<Self> {
        Self::per_axis(Self::fit(xs, order)?, Self::fit(ys, order)?)
    }

    /// Least-squares estimate of AR coefficients from one observed sequence.
    ///
    /// Builds one regression row per sample after the first `order`:
    /// `obs[t] ~ sum_k c[k] * obs[t-1-k]`, and solves it with an SVD so
    /// rank-deficient data yields the minimum-norm solution.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if `order` is zero,
    /// `Error::InsufficientHistory` if there are not more observations than
    /// the order.
    pub fn fit(observations: &[f64], order: usize) -> Result<Vec<f64>> {
        if order == 0 {
            return Err(Error::InvalidConfig(
                "autoregressive order must be positive".to_string(),
            ));
        }
        if observations.len() <= order {
            return Err(Error::InsufficientHistory {
                required: order + 1,
                got: observations.len(),
            });
        }

        let rows = observations.len() - order;
        let design = DMatrix::from_fn(rows, order, |r, k| observations[r + order - 1 - k]);
        let target = DVector::from_fn(rows, |r, _| observations[r + order]);

        let coefficients = design
            .svd(true, true)
            .solve(&target, 1e-12)
            .map_err(|e| Error::InvalidConfig(format!("autoregressive fit failed: {}", e)))?;

        let coefficients: Vec<f64> = coefficients.iter().copied().collect();
        check_coefficients(&coefficients)?;
        log::debug!("fitted AR({}) coefficients {:?} from {} samples", order, coefficients, observations.len());
        Ok(coefficients)
    }

    /// Re-check the coefficients, e.g. after deserialization.
    pub fn validate(&self) -> Result<()> {
        check_coefficients(&self.x_coefficients)?;
        check_coefficients(&self.y_coefficients)
    }

    pub fn coefficients(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x_coefficients,
            Axis::Y => &self.y_coefficients,
        }
    }
}

impl Default for AutoRegressive {
    fn default() -> Self {
        Self {
            x_coefficients: DEFAULT_COEFFICIENTS.to_vec(),
            y_coefficients: DEFAULT_COEFFICIENTS.to_vec(),
        }
    }
}

impl MotionModel for AutoRegressive {
    fn order(&self) -> usize {
        self.x_coefficients.len().max(self.y_coefficients.len())
    }

    #[inline]
    fn predict(&self, axis: Axis, history: &[f64]) -> Result<f64> {
        let coefficients = self.coefficients(axis);
        if history.len() < coefficients.len() {
            return Err(Error::InsufficientHistory {
                required: coefficients.len(),
                got: history.len(),
            });
        }
        Ok(coefficients
            .iter()
            .zip(history.iter().rev())
            .map(|(c, h)| c * h)
            .sum())
    }
}
