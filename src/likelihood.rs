//! Histogram likelihood evaluation.
//!
//! A particle is scored by extracting the appearance histogram under its
//! region and measuring its distance to the reference histogram. The
//! evaluator only reports the distance; turning it into a weight is the job
//! of `WeightTransform`.

use std::sync::Arc;

use crate::distances::{distance, DistanceMetric};
use crate::histogram::{self, HistogramSource};
use crate::state::ParticleState;
use crate::{Error, Result};

/// Result of scoring one particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Likelihood {
    /// Distance (or similarity, depending on the metric) to the reference.
    pub distance: f64,

    /// Normalized histogram observed under the particle region.
    pub histogram: Arc<[f64]>,
}

/// Compares region histograms against a fixed reference histogram.
#[derive(Clone, Debug)]
pub struct HistogramLikelihood {
    reference: Arc<[f64]>,
    metric: DistanceMetric,
}

impl HistogramLikelihood {
    /// Create an evaluator. The reference is validated and normalized.
    ///
    /// # Errors
    /// `Error::InvalidHistogram` if the reference is empty or has no mass,
    /// `Error::NegativeBin` if a bin is negative.
    pub fn new(reference: Vec<f64>, metric: DistanceMetric) -> Result<Self> {
        if reference.is_empty() {
            return Err(Error::InvalidHistogram(
                "reference histogram has no bins".to_string(),
            ));
        }
        let reference = histogram::normalized(reference)?;
        Ok(Self {
            reference: reference.into(),
            metric,
        })
    }

    pub fn reference(&self) -> &[f64] {
        &self.reference
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Score a particle against the reference.
    ///
    /// # Errors
    /// `Error::InvalidPosition` if the particle position does not map to a
    /// pixel, whatever the source reports for the particle region (typically
    /// `Error::RegionOutOfBounds`), `Error::LengthMismatch` if the source
    /// produces histograms of a different length than the reference.
    pub fn evaluate<H: HistogramSource + ?Sized>(
        &self,
        state: &ParticleState,
        source: &H,
    ) -> Result<Likelihood> {
        let observed = source.region_histogram(&state.region()?)?;
        self.score(observed)
    }

    /// Score an already extracted histogram.
    pub fn score(&self, observed: Vec<f64>) -> Result<Likelihood> {
        let observed = histogram::normalized(observed)?;
        let distance = distance(&observed, &self.reference, self.metric)?;
        Ok(Likelihood {
            distance,
            histogram: observed.into(),
        })
    }
}
