//! Histogram contract and normalization helpers.

use crate::image::Region;
use crate::{Error, Result};

/// Tolerance used when checking that a histogram sums to one.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Source of appearance histograms for image regions.
///
/// This is the boundary to the image/histogram utility: given a region it
/// returns a histogram or fails, e.g. when the region is not inside the
/// image. Implementations must allow concurrent reads.
pub trait HistogramSource: Sync {
    /// Histogram of the pixels inside `region`.
    ///
    /// # Errors
    /// `Error::RegionOutOfBounds` when the region is partly or fully outside
    /// the image. Implementations must not clamp the region.
    fn region_histogram(&self, region: &Region) -> Result<Vec<f64>>;
}

impl<T: HistogramSource + ?Sized> HistogramSource for &T {
    fn region_histogram(&self, region: &Region) -> Result<Vec<f64>> {
        (**self).region_histogram(region)
    }
}

/// Check that every bin is finite and non-negative.
pub fn validate_bins(bins: &[f64]) -> Result<()> {
    for (index, &value) in bins.iter().enumerate() {
        if !value.is_finite() {
            return Err(Error::InvalidHistogram(format!(
                "bin {} is not finite ({})",
                index, value
            )));
        }
        if value < 0.0 {
            return Err(Error::NegativeBin { index, value });
        }
    }
    Ok(())
}

/// Whether the bins sum to one within `NORMALIZATION_TOLERANCE`.
pub fn is_normalized(bins: &[f64]) -> bool {
    (bins.iter().sum::<f64>() - 1.0).abs() <= NORMALIZATION_TOLERANCE
}

/// Scale the bins in place so they sum to one.
///
/// # Errors
/// `Error::NegativeBin` or `Error::InvalidHistogram` for invalid bins,
/// `Error::InvalidHistogram` when the total mass is zero.
pub fn normalize(bins: &mut [f64]) -> Result<()> {
    validate_bins(bins)?;
    let total: f64 = bins.iter().sum();
    if total <= 0.0 {
        return Err(Error::InvalidHistogram(
            "histogram has no mass and cannot be normalized".to_string(),
        ));
    }
    for bin in bins.iter_mut() {
        *bin /= total;
    }
    Ok(())
}

/// Normalized copy of `bins`, skipping the division when already normalized.
pub fn normalized(mut bins: Vec<f64>) -> Result<Vec<f64>> {
    validate_bins(&bins)?;
    if !is_normalized(&bins) {
        normalize(&mut bins)?;
    }
    Ok(bins)
}
