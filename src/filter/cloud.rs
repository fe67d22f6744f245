//! Weighted particle container.

use rand::Rng;

use crate::{Error, Result};

/// A cloud of particles with one weight each.
///
/// Weights are kept non-negative. After `normalize_weights` or `resample`
/// they sum to one.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleCloud<S> {
    particles: Vec<S>,
    weights: Vec<f64>,
}

impl<S: Clone> ParticleCloud<S> {
    /// Cloud with uniform weights.
    pub fn new(particles: Vec<S>) -> Self {
        let n = particles.len();
        let weight = if n > 0 { 1.0 / n as f64 } else { 0.0 };
        Self {
            particles,
            weights: vec![weight; n],
        }
    }

    /// Cloud with explicit weights.
    ///
    /// # Errors
    /// `Error::LengthMismatch` if the lengths differ.
    pub fn with_weights(particles: Vec<S>, weights: Vec<f64>) -> Result<Self> {
        if particles.len() != weights.len() {
            return Err(Error::LengthMismatch {
                left: particles.len(),
                right: weights.len(),
            });
        }
        Ok(Self { particles, weights })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[S] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [S] {
        &mut self.particles
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> + '_ {
        self.particles.iter().zip(self.weights.iter().copied())
    }

    /// Swap in a new generation of particles and weights at once.
    ///
    /// # Errors
    /// `Error::LengthMismatch` if the lengths differ; the cloud is unchanged.
    pub fn replace(&mut self, particles: Vec<S>, weights: Vec<f64>) -> Result<()> {
        if particles.len() != weights.len() {
            return Err(Error::LengthMismatch {
                left: particles.len(),
                right: weights.len(),
            });
        }
        self.particles = particles;
        self.weights = weights;
        Ok(())
    }

    /// Replace the weights only.
    pub fn set_weights(&mut self, weights: Vec<f64>) -> Result<()> {
        if weights.len() != self.particles.len() {
            return Err(Error::LengthMismatch {
                left: self.particles.len(),
                right: weights.len(),
            });
        }
        self.weights = weights;
        Ok(())
    }

    pub fn reset_uniform(&mut self) {
        let n = self.weights.len();
        if n > 0 {
            self.weights.fill(1.0 / n as f64);
        }
    }

    /// Scale the weights to sum to one. Negative or non-finite weights
    /// count as zero.
    ///
    /// # Errors
    /// `Error::DegenerateWeights` if the total mass is zero; the weights are
    /// left unchanged.
    pub fn normalize_weights(&mut self) -> Result<()> {
        let total: f64 = self.weights.iter().map(|&w| sanitize(w)).sum();
        if !(total.is_finite() && total > 0.0) {
            return Err(Error::DegenerateWeights);
        }
        for w in self.weights.iter_mut() {
            *w = sanitize(*w) / total;
        }
        Ok(())
    }

    /// Systematic resampling.
    ///
    /// One uniform draw `u0` in `[0, 1/n)` places `n` evenly spaced
    /// pointers on the cumulative weight; each pointer selects the particle
    /// whose interval it falls into. Weights are uniform afterwards.
    ///
    /// # Errors
    /// `Error::DegenerateWeights` if the weights cannot be normalized.
    pub fn resample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let n = self.particles.len();
        if n == 0 {
            return Ok(());
        }
        self.normalize_weights()?;

        let step = 1.0 / n as f64;
        let start = rng.gen::<f64>() * step;
        let mut resampled = Vec::with_capacity(n);
        let mut cumulative = self.weights[0];
        let mut j = 0;
        for i in 0..n {
            let pointer = start + i as f64 * step;
            while pointer >= cumulative && j + 1 < n {
                j += 1;
                cumulative += self.weights[j];
            }
            resampled.push(self.particles[j].clone());
        }

        self.particles = resampled;
        self.reset_uniform();
        Ok(())
    }

    /// Particle with the largest weight (first one on ties).
    pub fn best(&self) -> Option<(&S, f64)> {
        self.iter()
            .fold(None, |best: Option<(&S, f64)>, (p, w)| match best {
                Some((_, bw)) if bw >= w => best,
                _ => Some((p, w)),
            })
    }

    /// Weighted sum of a per-particle quantity. Zero-weight particles are
    /// skipped, so a diverged particle cannot turn the sum into NaN.
    pub fn weighted_sum<F: Fn(&S) -> f64>(&self, f: F) -> f64 {
        self.iter()
            .filter(|&(_, w)| w > 0.0)
            .map(|(p, w)| w * f(p))
            .sum()
    }
}

#[inline]
fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}
