//! # pftrack - Histogram Particle Filter Tracking
//!
//! Single-object tracker that follows a region of a video stream with a
//! particle filter. Every particle carries a short position history, a region
//! size and an appearance handle; particles move with an autoregressive motion
//! model and are scored by comparing the color histogram under their region to
//! a reference histogram.
//!
//! ## Features
//!
//! - Distance library over numeric sequences (Euclidean, Manhattan, Chebyshev,
//!   Bhattacharyya, Hellinger, ...) plus point-to-set and set-to-set distances
//! - Sequence transforms (attraction/repulsion, running integrals, circular
//!   convolution)
//! - Autoregressive motion model, fixed or fitted by least squares
//! - Histogram likelihood with explicit distance-to-weight conversion
//! - Optional parallel particle evaluation (`rayon` feature)
//!
//! ## Example
//!
//! ```rust,ignore
//! use pftrack::{Tracker, TrackerConfig, Seeding, WeightTransform};
//! use pftrack::image::{Image, ImageHistogramSource};
//!
//! let config = TrackerConfig::new(WeightTransform::NegExp { lambda: 20.0 });
//! let mut tracker = Tracker::new(config).unwrap();
//!
//! let source = ImageHistogramSource::new(&frame, 8).unwrap();
//! let reference = source.histogram_at(120, 80, 24, 24).unwrap();
//! tracker.init(reference, Seeding::Around { x: 120.0, y: 80.0, spread: 10.0 }).unwrap();
//!
//! let report = tracker.step(&ImageHistogramSource::new(&next_frame, 8).unwrap()).unwrap();
//! println!("object at ({}, {})", report.estimate.x, report.estimate.y);
//! ```

// Public modules
pub mod distances;
pub mod transforms;
pub mod state;
pub mod noise;
pub mod motion;
pub mod image;
pub mod histogram;
pub mod likelihood;
pub mod weighting;
pub mod filter;
pub mod tracker;
pub mod utils;

// Re-exports for convenience
pub use distances::{distance, distance_to_point, distance_to_set, DistanceMetric, SetDistanceMetric};
pub use state::ParticleState;
pub use motion::{AutoRegressive, MotionModel, MotionModelEnum, RandomWalk};
pub use noise::{GaussianNoise, NoiseSource, ZeroNoise};
pub use likelihood::HistogramLikelihood;
pub use weighting::WeightTransform;
pub use filter::{Estimate, ParticleCloud, ParticleModel, PositionParticleFilter};
pub use tracker::{Seeding, StepReport, Tracker, TrackerConfig};

// Error types
pub use crate::error::{Error, Result};

mod error {
    use thiserror::Error;

    /// Errors that can occur in the tracking library
    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Sequence length mismatch: {left} vs {right}")]
        LengthMismatch { left: usize, right: usize },

        #[error("Unsupported distance metric: {0}")]
        UnsupportedMetric(String),

        #[error("Not implemented: {0}")]
        NotImplemented(String),

        #[error("Step size must satisfy 0 < mu <= 1, got {0}")]
        InvalidStepSize(f64),

        #[error("Insufficient history: model order is {required}, got {got} samples")]
        InsufficientHistory { required: usize, got: usize },

        #[error("Tracker is not initialized")]
        NotInitialized,

        #[error("Invalid configuration: {0}")]
        InvalidConfig(String),

        #[error("Region ({x}, {y}, {width}x{height}) is outside the {image_width}x{image_height} image")]
        RegionOutOfBounds {
            x: i64,
            y: i64,
            width: u32,
            height: u32,
            image_width: usize,
            image_height: usize,
        },

        #[error("Particle position ({x}, {y}) does not map to a pixel")]
        InvalidPosition { x: f64, y: f64 },

        #[error("Invalid histogram: {0}")]
        InvalidHistogram(String),

        #[error("Negative bin value {value} at index {index}")]
        NegativeBin { index: usize, value: f64 },

        #[error("Point set is empty")]
        EmptySet,

        #[error("All particle weights are zero or non-finite")]
        DegenerateWeights,

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration parse error: {0}")]
        Json(#[from] serde_json::Error),
    }

    impl Error {
        /// Whether this is a data error a caller can absorb by assigning a
        /// minimal weight, as opposed to a programming error.
        pub fn is_data_error(&self) -> bool {
            matches!(
                self,
                Error::RegionOutOfBounds { .. }
                    | Error::InvalidPosition { .. }
                    | Error::InvalidHistogram(_)
                    | Error::NegativeBin { .. }
                    | Error::EmptySet
                    | Error::DegenerateWeights
            )
        }
    }

    /// Result type for tracking operations
    pub type Result<T> = std::result::Result<T, Error>;
}
