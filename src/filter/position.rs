//! Position/size/appearance particle model.

use serde::{Deserialize, Serialize};

use super::cloud::ParticleCloud;
use super::traits::ParticleModel;
use crate::histogram::HistogramSource;
use crate::likelihood::{HistogramLikelihood, Likelihood};
use crate::motion::{self, MotionModel, MotionModelEnum};
use crate::noise::NoiseSource;
use crate::state::ParticleState;
use crate::{Error, Result};

/// Weighted mean of the particle regions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Particle model tracking a rectangular region by its color histogram.
///
/// Transition: autoregressive prediction of the top-left corner plus
/// Gaussian noise, size unchanged. Likelihood: histogram distance between
/// the particle region and the reference.
#[derive(Clone, Debug)]
pub struct PositionParticleFilter {
    motion: MotionModelEnum,
    likelihood: HistogramLikelihood,
}

impl PositionParticleFilter {
    pub fn new(motion: MotionModelEnum, likelihood: HistogramLikelihood) -> Self {
        Self { motion, likelihood }
    }

    pub fn motion(&self) -> &MotionModelEnum {
        &self.motion
    }

    pub fn likelihood_model(&self) -> &HistogramLikelihood {
        &self.likelihood
    }

    /// Swap the likelihood evaluator, e.g. after the reference changed.
    pub fn set_likelihood(&mut self, likelihood: HistogramLikelihood) {
        self.likelihood = likelihood;
    }

    /// History length particles need for this motion model.
    pub fn order(&self) -> usize {
        self.motion.order()
    }

    /// Move a particle drawing the perturbation from `noise`.
    pub fn transition_with(&self, state: &mut ParticleState, noise: &mut dyn NoiseSource) -> Result<()> {
        motion::do_transition(&self.motion, state, noise)
    }

    /// Weighted mean region of the cloud. `None` for an empty cloud.
    pub fn estimate(cloud: &ParticleCloud<ParticleState>) -> Option<Estimate> {
        if cloud.is_empty() {
            return None;
        }
        Some(Estimate {
            x: cloud.weighted_sum(|p| p.position().0),
            y: cloud.weighted_sum(|p| p.position().1),
            width: cloud.weighted_sum(|p| p.width as f64),
            height: cloud.weighted_sum(|p| p.height as f64),
        })
    }
}

impl ParticleModel for PositionParticleFilter {
    type State = ParticleState;

    fn noise_dim(&self) -> usize {
        2
    }

    fn transition(&self, state: &mut ParticleState, noise: &[f64]) -> Result<()> {
        match noise {
            [nx, ny, ..] => motion::apply_transition(&self.motion, state, *nx, *ny),
            _ => Err(Error::LengthMismatch {
                left: noise.len(),
                right: self.noise_dim(),
            }),
        }
    }

    fn likelihood<H: HistogramSource + ?Sized>(
        &self,
        state: &ParticleState,
        source: &H,
    ) -> Result<Likelihood> {
        self.likelihood.evaluate(state, source)
    }
}
