//! Random-walk motion model.
//!
//! Baseline without dynamics: the prediction is the last position, so the
//! particle only moves by the injected noise.

use serde::{Deserialize, Serialize};

use super::traits::{Axis, MotionModel};
use crate::{Error, Result};

/// Random-walk model keeping a history window of `window` samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomWalk {
    #[serde(default = "default_window")]
    pub window: usize,
}

fn default_window() -> usize {
    1
}

impl RandomWalk {
    pub fn new() -> Self {
        Self { window: 1 }
    }

    /// Random walk whose particles still carry `window` past positions.
    pub fn with_window(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionModel for RandomWalk {
    fn order(&self) -> usize {
        self.window.max(1)
    }

    #[inline]
    fn predict(&self, _axis: Axis, history: &[f64]) -> Result<f64> {
        history.last().copied().ok_or(Error::InsufficientHistory {
            required: self.order(),
            got: 0,
        })
    }
}
