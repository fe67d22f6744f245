//! Particle filter building blocks.
//!
//! This module provides:
//! - `ParticleModel` - the model side of a particle filter (transition + likelihood)
//! - `PositionParticleFilter` - position/size/appearance model over histograms
//! - `ParticleCloud` - weighted particles with normalization and systematic resampling

mod traits;
mod cloud;
mod position;

pub use traits::ParticleModel;
pub use cloud::ParticleCloud;
pub use position::{Estimate, PositionParticleFilter};
