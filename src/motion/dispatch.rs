//! Enum-based motion model dispatch for static (non-virtual) calls.
//!
//! `MotionModelEnum` wraps the supported models so the per-particle hot path
//! avoids vtable lookups, and doubles as the serializable configuration of
//! the motion model.

use serde::{Deserialize, Serialize};

use super::autoregressive::AutoRegressive;
use super::random_walk::RandomWalk;
use super::traits::{Axis, MotionModel};
use crate::Result;

/// Enum-based motion model for static dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MotionModelEnum {
    AutoRegressive(AutoRegressive),
    RandomWalk(RandomWalk),
}

impl Default for MotionModelEnum {
    fn default() -> Self {
        MotionModelEnum::AutoRegressive(AutoRegressive::default())
    }
}

impl MotionModelEnum {
    /// Check the wrapped model's parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            MotionModelEnum::AutoRegressive(m) => m.validate(),
            MotionModelEnum::RandomWalk(_) => Ok(()),
        }
    }
}

impl From<AutoRegressive> for MotionModelEnum {
    fn from(model: AutoRegressive) -> Self {
        MotionModelEnum::AutoRegressive(model)
    }
}

impl From<RandomWalk> for MotionModelEnum {
    fn from(model: RandomWalk) -> Self {
        MotionModelEnum::RandomWalk(model)
    }
}

impl MotionModel for MotionModelEnum {
    #[inline(always)]
    fn order(&self) -> usize {
        match self {
            MotionModelEnum::AutoRegressive(m) => m.order(),
            MotionModelEnum::RandomWalk(m) => m.order(),
        }
    }

    #[inline(always)]
    fn predict(&self, axis: Axis, history: &[f64]) -> Result<f64> {
        match self {
            MotionModelEnum::AutoRegressive(m) => m.predict(axis, history),
            MotionModelEnum::RandomWalk(m) => m.predict(axis, history),
        }
    }
}
