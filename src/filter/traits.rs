//! Particle model trait for the filtering system.

use crate::histogram::HistogramSource;
use crate::likelihood::Likelihood;
use crate::Result;

/// Model side of a particle filter.
///
/// A model knows how to move one particle and how to score it against an
/// observation. Everything else (weights, normalization, resampling) lives
/// in `ParticleCloud`, so any model can be driven by the same loop.
///
/// Both methods take `&self` and touch a single particle, which lets the
/// caller evaluate particles concurrently.
pub trait ParticleModel: Send + Sync {
    /// Per-particle state.
    type State: Clone + Send + Sync;

    /// Number of noise samples one transition consumes.
    fn noise_dim(&self) -> usize;

    /// Move `state` one frame forward using pre-drawn `noise`
    /// (`noise_dim()` samples).
    ///
    /// On error the state must be left unchanged.
    fn transition(&self, state: &mut Self::State, noise: &[f64]) -> Result<()>;

    /// Score `state` against the current observation.
    fn likelihood<H: HistogramSource + ?Sized>(
        &self,
        state: &Self::State,
        source: &H,
    ) -> Result<Likelihood>;
}
