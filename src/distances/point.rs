//! Point-to-point distances between two equal-length sequences.

use super::kernel::{
    absolute_difference, geometric_mean_term, hellinger_term, inner_product, product,
    squared_difference,
};
use super::DistanceMetric;
use crate::histogram::validate_bins;
use crate::{Error, Result};

#[inline(always)]
fn sum(acc: f64, term: f64) -> f64 {
    acc + term
}

/// Check that two sequences can be compared element by element.
#[inline]
pub fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// `f64::max` that lets NaN through instead of dropping it.
#[inline(always)]
fn nan_max(acc: f64, term: f64) -> f64 {
    if acc.is_nan() || term.is_nan() {
        f64::NAN
    } else {
        acc.max(term)
    }
}

/// Distance (or similarity) between two sequences.
///
/// Metrics:
/// - `DotProduct`: `sum_i x_i*y_i`
/// - `Euclidean`: `sqrt(sum_i (x_i-y_i)^2)`
/// - `Manhattan`: `sum_i |x_i-y_i|`
/// - `Chebyshev`: `max_i |x_i-y_i|`
/// - `Bhattacharyya`: `-ln(sum_i sqrt(x_i*y_i))`, `+inf` when the coefficient is 0
/// - `BhattacharyyaCoefficient`: `sum_i sqrt(x_i*y_i)`
/// - `Hellinger`: `sqrt(sum_i (sqrt(x_i)-sqrt(y_i))^2) / sqrt(2)`
/// - `SquaredHellinger`: `sqrt(1 - sum_i sqrt(x_i*y_i))`
///
/// `DotProduct` and `BhattacharyyaCoefficient` are similarities: higher
/// means closer. The bin-based metrics reject negative and non-finite
/// elements; the vector metrics propagate NaN.
///
/// # Errors
/// `Error::LengthMismatch` if the sequences differ in length,
/// `Error::NegativeBin` for negative input to a bin-based metric,
/// `Error::InvalidHistogram` for non-finite input to a bin-based metric.
pub fn distance(a: &[f64], b: &[f64], metric: DistanceMetric) -> Result<f64> {
    check_lengths(a, b)?;
    if metric.requires_non_negative() {
        validate_bins(a)?;
        validate_bins(b)?;
    }

    let value = match metric {
        DistanceMetric::DotProduct => inner_product(a, b, 0.0, sum, product),
        DistanceMetric::Euclidean => inner_product(a, b, 0.0, sum, squared_difference).sqrt(),
        DistanceMetric::Manhattan => inner_product(a, b, 0.0, sum, absolute_difference),
        DistanceMetric::Chebyshev => inner_product(a, b, 0.0, nan_max, absolute_difference),
        DistanceMetric::Bhattacharyya => {
            let coefficient = inner_product(a, b, 0.0, sum, geometric_mean_term);
            if coefficient <= 0.0 {
                f64::INFINITY
            } else {
                -coefficient.ln()
            }
        }
        DistanceMetric::BhattacharyyaCoefficient => {
            inner_product(a, b, 0.0, sum, geometric_mean_term)
        }
        DistanceMetric::Hellinger => {
            inner_product(a, b, 0.0, sum, hellinger_term).sqrt() / std::f64::consts::SQRT_2
        }
        DistanceMetric::SquaredHellinger => {
            // Rounding can push the coefficient of identical histograms just above 1.
            let coefficient = inner_product(a, b, 0.0, sum, geometric_mean_term);
            (1.0 - coefficient).max(0.0).sqrt()
        }
    };

    Ok(value)
}
