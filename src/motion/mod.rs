//! Particle motion models.
//!
//! This module provides:
//! - `MotionModel` - trait for deterministic next-position prediction
//! - `AutoRegressive` - fixed or least-squares fitted AR model (default)
//! - `RandomWalk` - baseline without dynamics
//! - `MotionModelEnum` - static dispatch and serializable configuration
//! - `next_position` / `do_transition` - prediction plus injected noise

mod traits;
mod autoregressive;
mod random_walk;
mod dispatch;

pub use traits::{Axis, MotionModel};
pub use autoregressive::{AutoRegressive, DEFAULT_COEFFICIENTS};
pub use random_walk::RandomWalk;
pub use dispatch::MotionModelEnum;

use crate::noise::NoiseSource;
use crate::state::ParticleState;
use crate::Result;

/// Predicted next position on one axis plus one noise draw.
pub fn next_position<M: MotionModel + ?Sized>(
    model: &M,
    axis: Axis,
    history: &[f64],
    noise: &mut dyn NoiseSource,
) -> Result<f64> {
    let predicted = model.predict(axis, history)?;
    Ok(predicted + noise.sample())
}

/// Move a particle with pre-drawn perturbations `(noise_x, noise_y)`.
///
/// Both axes are predicted before anything is written, so on error the
/// particle is left untouched. Width and height are not changed.
pub fn apply_transition<M: MotionModel + ?Sized>(
    model: &M,
    particle: &mut ParticleState,
    noise_x: f64,
    noise_y: f64,
) -> Result<()> {
    particle.check_history(model.order())?;
    let x = model.predict(Axis::X, &particle.x)? + noise_x;
    let y = model.predict(Axis::Y, &particle.y)? + noise_y;
    particle.push_position(x, y);
    Ok(())
}

/// Move a particle in place: predict both axes, perturb, and slide the
/// history windows.
///
/// # Errors
/// `Error::InsufficientHistory` if the particle carries fewer samples than
/// the model order; the particle is not modified in that case.
pub fn do_transition<M: MotionModel + ?Sized>(
    model: &M,
    particle: &mut ParticleState,
    noise: &mut dyn NoiseSource,
) -> Result<()> {
    particle.check_history(model.order())?;
    let noise_x = noise.sample();
    let noise_y = noise.sample();
    apply_transition(model, particle, noise_x, noise_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RegionSize;
    use crate::noise::{GaussianNoise, ZeroNoise};
    use crate::Error;

    #[test]
    fn test_next_position_without_noise() {
        let model = AutoRegressive::new(vec![1.5, -0.7]).unwrap();
        let x = next_position(&model, Axis::X, &[10.0, 12.0], &mut ZeroNoise).unwrap();
        assert_eq!(x, 11.0);
    }

    #[test]
    fn test_do_transition_slides_history() {
        let model = AutoRegressive::new(vec![1.5, -0.7]).unwrap();
        let mut particle =
            ParticleState::new(vec![10.0, 12.0], vec![0.0, 0.0], RegionSize::new(8, 6), 2).unwrap();
        do_transition(&model, &mut particle, &mut ZeroNoise).unwrap();
        assert_eq!(particle.x, vec![12.0, 11.0]);
        assert_eq!(particle.y, vec![0.0, 0.0]);
        assert_eq!((particle.width, particle.height), (8, 6));
    }

    #[test]
    fn test_do_transition_rejects_short_history() {
        let model = AutoRegressive::new(vec![1.5, -0.7]).unwrap();
        let mut particle = ParticleState::stationary(5.0, 5.0, RegionSize::new(1, 1), 1);
        let before = particle.clone();
        let result = do_transition(&model, &mut particle, &mut ZeroNoise);
        assert!(matches!(result, Err(Error::InsufficientHistory { required: 2, got: 1 })));
        assert_eq!(particle, before);
    }

    #[test]
    fn test_noisy_transition_is_reproducible() {
        let model = MotionModelEnum::default();
        let start = ParticleState::stationary(50.0, 50.0, RegionSize::new(4, 4), 2);

        let mut a = start.clone();
        let mut b = start.clone();
        let mut noise_a = GaussianNoise::seeded(1.5, 99);
        let mut noise_b = GaussianNoise::seeded(1.5, 99);
        for _ in 0..10 {
            do_transition(&model, &mut a, &mut noise_a).unwrap();
            do_transition(&model, &mut b, &mut noise_b).unwrap();
        }
        assert_eq!(a, b);
        assert_ne!(a.position(), start.position());
    }

    #[test]
    fn test_random_walk_moves_by_noise_only() {
        let model = RandomWalk::new();
        let mut particle = ParticleState::stationary(3.0, 4.0, RegionSize::new(1, 1), 1);
        apply_transition(&model, &mut particle, 0.5, -1.0).unwrap();
        assert_eq!(particle.position(), (3.5, 3.0));
    }
}
