//! Per-particle state: position history, region size and appearance handle.

use std::sync::Arc;

use crate::image::{Region, RegionSize};
use crate::{Error, Result};

/// One hypothesis of the particle cloud.
///
/// `x` and `y` hold the most recent positions, oldest first and newest last.
/// Both windows have the same fixed length, which must cover the motion
/// model order. The newest position is the top-left corner of the region
/// scored by the likelihood.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleState {
    /// Recent x positions (oldest first).
    pub x: Vec<f64>,

    /// Recent y positions (oldest first).
    pub y: Vec<f64>,

    /// Region width in pixels.
    pub width: u32,

    /// Region height in pixels.
    pub height: u32,

    /// Appearance last observed for this particle, if it has been scored.
    ///
    /// Shared between resampled copies of the same particle.
    pub appearance: Option<Arc<[f64]>>,
}

impl ParticleState {
    /// Create a particle from explicit position histories.
    ///
    /// # Errors
    /// `Error::InsufficientHistory` if either history is shorter than
    /// `order` or the two differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>, size: RegionSize, order: usize) -> Result<Self> {
        let shortest = x.len().min(y.len());
        if shortest < order || x.len() != y.len() {
            return Err(Error::InsufficientHistory {
                required: order.max(x.len().max(y.len())),
                got: shortest,
            });
        }
        Ok(Self {
            x,
            y,
            width: size.width,
            height: size.height,
            appearance: None,
        })
    }

    /// Particle that has been standing still at `(x, y)` for `order` frames.
    pub fn stationary(x: f64, y: f64, size: RegionSize, order: usize) -> Self {
        Self {
            x: vec![x; order],
            y: vec![y; order],
            width: size.width,
            height: size.height,
            appearance: None,
        }
    }

    /// Number of samples in each history window.
    pub fn history_len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    /// Fail unless both windows hold at least `order` samples.
    pub fn check_history(&self, order: usize) -> Result<()> {
        let got = self.history_len();
        if got < order {
            return Err(Error::InsufficientHistory { required: order, got });
        }
        Ok(())
    }

    /// Newest position `(x, y)`.
    pub fn position(&self) -> (f64, f64) {
        (
            self.x.last().copied().unwrap_or(f64::NAN),
            self.y.last().copied().unwrap_or(f64::NAN),
        )
    }

    pub fn size(&self) -> RegionSize {
        RegionSize::new(self.width, self.height)
    }

    pub fn set_size(&mut self, size: RegionSize) {
        self.width = size.width;
        self.height = size.height;
    }

    /// Region covered by this particle at its newest position.
    ///
    /// # Errors
    /// `Error::InvalidPosition` if the newest position is not finite or
    /// too large to address a pixel.
    pub fn region(&self) -> Result<Region> {
        let (x, y) = self.position();
        Region::at(x, y, self.size())
    }

    /// Slide both windows: drop the oldest sample and append the new one.
    pub fn push_position(&mut self, x: f64, y: f64) {
        slide(&mut self.x, x);
        slide(&mut self.y, y);
    }
}

fn slide(window: &mut [f64], value: f64) {
    if let Some(last) = window.len().checked_sub(1) {
        window.rotate_left(1);
        window[last] = value;
    }
}
