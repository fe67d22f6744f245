//! Main tracker implementation.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::distances::DistanceMetric;
use crate::filter::{Estimate, ParticleCloud, ParticleModel, PositionParticleFilter};
use crate::histogram::{self, HistogramSource};
use crate::image::RegionSize;
use crate::likelihood::{HistogramLikelihood, Likelihood};
use crate::motion::MotionModelEnum;
use crate::noise::{GaussianNoise, NoiseSource};
use crate::state::ParticleState;
use crate::transforms;
use crate::utils::warn_once;
use crate::weighting::WeightTransform;
use crate::{Error, Result};

fn default_num_particles() -> usize {
    100
}

fn default_metric() -> DistanceMetric {
    DistanceMetric::Bhattacharyya
}

fn default_noise_sigma() -> f64 {
    2.0
}

fn default_region_size() -> RegionSize {
    RegionSize::new(24, 24)
}

fn default_resample() -> bool {
    true
}

/// Configuration for the tracker.
///
/// Every field but `weighting` has a default, so a minimal JSON
/// configuration is `{"weighting": {"type": "neg_exp", "lambda": 20.0}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Number of particles in the cloud.
    #[serde(default = "default_num_particles")]
    pub num_particles: usize,

    /// Metric comparing region histograms to the reference.
    #[serde(default = "default_metric")]
    pub metric: DistanceMetric,

    /// Conversion from metric value to particle weight.
    pub weighting: WeightTransform,

    /// Motion model (enum-based static dispatch).
    #[serde(default)]
    pub motion: MotionModelEnum,

    /// Standard deviation of the per-axis transition noise, in pixels.
    #[serde(default = "default_noise_sigma")]
    pub noise_sigma: f64,

    /// Seed for all randomness; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Size of the tracked region.
    #[serde(default = "default_region_size")]
    pub region_size: RegionSize,

    /// Resample after every step.
    #[serde(default = "default_resample")]
    pub resample: bool,
}

impl TrackerConfig {
    /// Create a configuration with default settings and the given weighting.
    pub fn new(weighting: WeightTransform) -> Self {
        Self {
            num_particles: default_num_particles(),
            metric: default_metric(),
            weighting,
            motion: MotionModelEnum::default(),
            noise_sigma: default_noise_sigma(),
            seed: None,
            region_size: default_region_size(),
            resample: default_resample(),
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check all settings.
    pub fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(Error::InvalidConfig(
                "num_particles must be positive".to_string(),
            ));
        }
        if !(self.noise_sigma.is_finite() && self.noise_sigma >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "noise_sigma must be finite and non-negative, got {}",
                self.noise_sigma
            )));
        }
        check_region_size(self.region_size)?;
        self.motion.validate()?;
        self.weighting.validate()?;

        // Pairing a similarity with a decreasing transform (or the reverse)
        // is legal but makes the tracker prefer the worst regions.
        let similarity_weighting = self.weighting == WeightTransform::Similarity;
        if self.metric.is_similarity() != similarity_weighting {
            warn_once(&format!(
                "metric {} combined with weighting {:?}: check the weight direction",
                self.metric, self.weighting
            ));
        }
        Ok(())
    }
}

fn check_region_size(size: RegionSize) -> Result<()> {
    if size.width == 0 || size.height == 0 {
        return Err(Error::InvalidConfig(format!(
            "region size must be non-empty, got {}x{}",
            size.width, size.height
        )));
    }
    Ok(())
}

/// Initial placement of the particle cloud.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Seeding {
    /// Uniformly over a `width x height` frame, keeping regions inside it.
    Uniform { width: f64, height: f64 },
    /// Normally distributed around `(x, y)` with standard deviation `spread`.
    Around { x: f64, y: f64, spread: f64 },
}

impl Seeding {
    fn validate(&self) -> Result<()> {
        let ok = match *self {
            Seeding::Uniform { width, height } => {
                width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0
            }
            Seeding::Around { x, y, spread } => {
                x.is_finite() && y.is_finite() && spread.is_finite() && spread >= 0.0
            }
        };
        if !ok {
            return Err(Error::InvalidConfig(format!("invalid seeding {:?}", self)));
        }
        Ok(())
    }
}

/// Outcome of one tracking step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    /// Weighted mean region before resampling.
    pub estimate: Estimate,

    /// Best metric value among the scored particles (lowest distance or
    /// highest similarity), `None` if every region failed.
    pub best_distance: Option<f64>,

    /// Particles whose region could not be scored this step.
    pub failed_regions: usize,
}

struct Session {
    filter: PositionParticleFilter,
    cloud: ParticleCloud<ParticleState>,
    /// Metric value per particle from the last likelihood pass.
    distances: Vec<Option<f64>>,
}

/// Single-object particle filter tracker.
///
/// Uninitialized after `new`; `init` installs a reference histogram and a
/// particle cloud, after which `step` can be called once per frame.
pub struct Tracker {
    config: TrackerConfig,
    rng: StdRng,
    noise: GaussianNoise,
    session: Option<Session>,
}

impl Tracker {
    /// Create a new tracker with the given configuration.
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let noise = GaussianNoise::from_seed(
            config.noise_sigma,
            config.seed.map(|s| s.wrapping_add(1)),
        );
        Ok(Self {
            config,
            rng,
            noise,
            session: None,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Current particle cloud, if initialized.
    pub fn cloud(&self) -> Option<&ParticleCloud<ParticleState>> {
        self.session.as_ref().map(|s| &s.cloud)
    }

    /// Current reference histogram, if initialized.
    pub fn reference(&self) -> Option<&[f64]> {
        self.session
            .as_ref()
            .map(|s| s.filter.likelihood_model().reference())
    }

    /// Metric values from the last likelihood pass (`None` = failed region).
    pub fn last_distances(&self) -> Option<&[Option<f64>]> {
        self.session.as_ref().map(|s| s.distances.as_slice())
    }

    /// Start (or restart) tracking with `reference` as target appearance.
    ///
    /// Particles get a full, stationary position history.
    pub fn init(&mut self, reference: Vec<f64>, seeding: Seeding) -> Result<()> {
        seeding.validate()?;
        let likelihood = HistogramLikelihood::new(reference, self.config.metric)?;
        let filter = PositionParticleFilter::new(self.config.motion.clone(), likelihood);

        let size = self.config.region_size;
        let order = filter.order();
        let n = self.config.num_particles;
        let particles: Vec<ParticleState> = match seeding {
            Seeding::Uniform { width, height } => {
                let max_x = (width - size.width as f64).max(0.0);
                let max_y = (height - size.height as f64).max(0.0);
                (0..n)
                    .map(|_| {
                        let x = self.rng.gen::<f64>() * max_x;
                        let y = self.rng.gen::<f64>() * max_y;
                        ParticleState::stationary(x, y, size, order)
                    })
                    .collect()
            }
            Seeding::Around { x, y, spread } => {
                let mut scatter = GaussianNoise::seeded(spread, self.rng.gen());
                (0..n)
                    .map(|_| {
                        let px = x + scatter.sample();
                        let py = y + scatter.sample();
                        ParticleState::stationary(px, py, size, order)
                    })
                    .collect()
            }
        };

        log::debug!("initialized {} particles with {:?}", n, seeding);
        self.session = Some(Session {
            filter,
            cloud: ParticleCloud::new(particles),
            distances: vec![None; n],
        });
        Ok(())
    }

    /// Move every particle one frame forward.
    ///
    /// Either all particles move or none does.
    pub fn transition_all(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(Error::NotInitialized)?;
        let next = propagate(&session.filter, session.cloud.particles(), &mut self.noise)?;
        let weights = session.cloud.weights().to_vec();
        session.cloud.replace(next, weights)
    }

    /// Score every particle against `source` and update the weights.
    ///
    /// Returns the number of particles whose region failed (weight 0).
    pub fn likelihood_all<H: HistogramSource + ?Sized>(&mut self, source: &H) -> Result<usize> {
        let session = self.session.as_mut().ok_or(Error::NotInitialized)?;
        let scores = score(&session.filter, session.cloud.particles(), source)?;
        let particles = session.cloud.particles().to_vec();
        commit_scores(session, particles, scores, self.config.weighting)
    }

    /// Process one frame: transition, likelihood, weighting, estimate and
    /// (if configured) resampling.
    ///
    /// The cloud is only modified when the transition and likelihood
    /// phases both succeed.
    pub fn step<H: HistogramSource + ?Sized>(&mut self, source: &H) -> Result<StepReport> {
        let session = self.session.as_mut().ok_or(Error::NotInitialized)?;

        let next = propagate(&session.filter, session.cloud.particles(), &mut self.noise)?;
        let scores = score(&session.filter, &next, source)?;
        let failed_regions = commit_scores(session, next, scores, self.config.weighting)?;

        let estimate = PositionParticleFilter::estimate(&session.cloud).ok_or(Error::NotInitialized)?;
        let best_distance = best_distance(&session.distances, self.config.metric);

        if self.config.resample {
            session.cloud.resample(&mut self.rng)?;
        }

        log::debug!(
            "step: estimate ({:.1}, {:.1}) best {:?}, {} failed regions",
            estimate.x,
            estimate.y,
            best_distance,
            failed_regions
        );
        Ok(StepReport {
            estimate,
            best_distance,
            failed_regions,
        })
    }

    /// Change the region size of the configuration and every particle.
    pub fn set_region_size(&mut self, size: RegionSize) -> Result<()> {
        check_region_size(size)?;
        self.config.region_size = size;
        if let Some(session) = self.session.as_mut() {
            for particle in session.cloud.particles_mut() {
                particle.set_size(size);
            }
        }
        Ok(())
    }

    /// Replace the reference histogram, keeping the particle cloud.
    pub fn reseed_reference(&mut self, reference: Vec<f64>) -> Result<()> {
        let session = self.session.as_mut().ok_or(Error::NotInitialized)?;
        let likelihood = HistogramLikelihood::new(reference, self.config.metric)?;
        session.filter.set_likelihood(likelihood);
        log::debug!("reference histogram replaced");
        Ok(())
    }

    /// Blend `observed` into the reference: `ref + mu * (observed - ref)`.
    ///
    /// # Errors
    /// `Error::InvalidStepSize` unless `0 < mu <= 1`, `Error::LengthMismatch`
    /// if the histogram lengths differ.
    pub fn adapt_reference(&mut self, observed: &[f64], mu: f64) -> Result<()> {
        let session = self.session.as_mut().ok_or(Error::NotInitialized)?;
        let observed = histogram::normalized(observed.to_vec())?;
        let mut reference = session.filter.likelihood_model().reference().to_vec();
        transforms::move_toward(&mut reference, &observed, mu)?;
        let likelihood = HistogramLikelihood::new(reference, self.config.metric)?;
        session.filter.set_likelihood(likelihood);
        Ok(())
    }
}

/// Transitioned copies of `particles`. Noise is drawn up front in particle
/// order so the outcome does not depend on scheduling.
fn propagate(
    filter: &PositionParticleFilter,
    particles: &[ParticleState],
    noise: &mut GaussianNoise,
) -> Result<Vec<ParticleState>> {
    let dim = filter.noise_dim();
    let draws: Vec<f64> = (0..particles.len() * dim).map(|_| noise.sample()).collect();
    let mut next = particles.to_vec();

    #[cfg(feature = "rayon")]
    {
        next.par_iter_mut()
            .zip(draws.par_chunks(dim))
            .try_for_each(|(particle, n)| filter.transition(particle, n))?;
    }

    #[cfg(not(feature = "rayon"))]
    {
        next.iter_mut()
            .zip(draws.chunks(dim))
            .try_for_each(|(particle, n)| filter.transition(particle, n))?;
    }

    Ok(next)
}

/// Score every particle. Data errors (e.g. a region leaving the image)
/// become `None`; anything else aborts the pass.
fn score<H: HistogramSource + ?Sized>(
    filter: &PositionParticleFilter,
    particles: &[ParticleState],
    source: &H,
) -> Result<Vec<Option<Likelihood>>> {
    #[cfg(feature = "rayon")]
    let results: Vec<Result<Likelihood>> = particles
        .par_iter()
        .map(|p| filter.likelihood(p, source))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let results: Vec<Result<Likelihood>> = particles
        .iter()
        .map(|p| filter.likelihood(p, source))
        .collect();

    results
        .into_iter()
        .enumerate()
        .map(|(i, result)| match result {
            Ok(likelihood) => Ok(Some(likelihood)),
            Err(e) if e.is_data_error() => {
                log::trace!("particle {} not scored: {}", i, e);
                Ok(None)
            }
            Err(e) => Err(e),
        })
        .collect()
}

/// Install scored particles and their weights. Returns the failure count.
fn commit_scores(
    session: &mut Session,
    mut particles: Vec<ParticleState>,
    scores: Vec<Option<Likelihood>>,
    weighting: WeightTransform,
) -> Result<usize> {
    let prior = session.cloud.weights();
    let mut weights = Vec::with_capacity(scores.len());
    let mut distances = Vec::with_capacity(scores.len());
    let mut failed = 0;
    for ((particle, scored), &prior_weight) in particles.iter_mut().zip(scores).zip(prior) {
        match scored {
            Some(likelihood) => {
                weights.push(prior_weight * weighting.weight(likelihood.distance));
                distances.push(Some(likelihood.distance));
                particle.appearance = Some(likelihood.histogram);
            }
            None => {
                weights.push(0.0);
                distances.push(None);
                failed += 1;
            }
        }
    }

    session.cloud.replace(particles, weights)?;
    session.distances = distances;

    if failed > 0 {
        log::warn!("{} of {} particle regions could not be scored", failed, session.cloud.len());
    }
    if let Err(Error::DegenerateWeights) = session.cloud.normalize_weights() {
        log::warn!("all particle weights are zero, resetting to uniform");
        session.cloud.reset_uniform();
    }
    Ok(failed)
}

fn best_distance(distances: &[Option<f64>], metric: DistanceMetric) -> Option<f64> {
    let scored = distances.iter().flatten().copied().filter(|d| !d.is_nan());
    if metric.is_similarity() {
        scored.fold(None, |best: Option<f64>, d| Some(best.map_or(d, |b| b.max(d))))
    } else {
        scored.fold(None, |best: Option<f64>, d| Some(best.map_or(d, |b| b.min(d))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Image, ImageHistogramSource, Region};
    use crate::motion::{AutoRegressive, RandomWalk};
    use approx::assert_relative_eq;

    fn config() -> TrackerConfig {
        let mut config = TrackerConfig::new(WeightTransform::NegExp { lambda: 10.0 });
        config.num_particles = 50;
        config.seed = Some(42);
        config.region_size = RegionSize::new(8, 8);
        config
    }

    fn scene() -> Image {
        let mut image = Image::filled(64, 64, &[10, 10, 10]);
        image.fill_region(&Region::new(20, 20, 8, 8), &[200, 30, 30]);
        image
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config = TrackerConfig::from_json_str(r#"{"weighting": {"type": "neg_exp", "lambda": 20.0}}"#).unwrap();
        assert_eq!(config.num_particles, 100);
        assert_eq!(config.metric, DistanceMetric::Bhattacharyya);
        assert_eq!(config.motion, MotionModelEnum::default());
        assert_eq!(config.region_size, RegionSize::new(24, 24));
        assert!(config.resample);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_requires_weighting() {
        let result = TrackerConfig::from_json_str(r#"{"num_particles": 10}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_config_validation() {
        let mut bad = config();
        bad.num_particles = 0;
        assert!(matches!(Tracker::new(bad), Err(Error::InvalidConfig(_))));

        let mut bad = config();
        bad.noise_sigma = -1.0;
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.region_size = RegionSize::new(0, 4);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_operations_before_init() {
        let image = scene();
        let source = ImageHistogramSource::new(&image, 4).unwrap();
        let mut tracker = Tracker::new(config()).unwrap();
        assert!(!tracker.is_initialized());
        assert!(matches!(tracker.step(&source), Err(Error::NotInitialized)));
        assert!(matches!(tracker.transition_all(), Err(Error::NotInitialized)));
        assert!(matches!(tracker.likelihood_all(&source), Err(Error::NotInitialized)));
        assert!(matches!(tracker.reseed_reference(vec![1.0]), Err(Error::NotInitialized)));
        assert!(matches!(tracker.adapt_reference(&[1.0], 0.5), Err(Error::NotInitialized)));
    }

    #[test]
    fn test_init_seeds_full_history() {
        let mut tracker = Tracker::new(config()).unwrap();
        tracker
            .init(vec![1.0, 1.0], Seeding::Uniform { width: 64.0, height: 64.0 })
            .unwrap();
        let cloud = tracker.cloud().unwrap();
        assert_eq!(cloud.len(), 50);
        for particle in cloud.particles() {
            assert_eq!(particle.history_len(), 2);
            let (x, y) = particle.position();
            assert!((0.0..=56.0).contains(&x) && (0.0..=56.0).contains(&y));
            assert_eq!(particle.size(), RegionSize::new(8, 8));
        }
        assert_eq!(tracker.reference().unwrap(), &[0.5, 0.5]);
    }

    #[test]
    fn test_init_rejects_bad_input() {
        let mut tracker = Tracker::new(config()).unwrap();
        let bad_seed = Seeding::Around { x: 1.0, y: 1.0, spread: -2.0 };
        assert!(tracker.init(vec![1.0], bad_seed).is_err());
        let seeding = Seeding::Around { x: 1.0, y: 1.0, spread: 2.0 };
        assert!(tracker.init(vec![0.0, 0.0], seeding).is_err());
        assert!(!tracker.is_initialized());
    }

    #[test]
    fn test_transition_all_moves_particles() {
        let mut tracker = Tracker::new(config()).unwrap();
        tracker.init(vec![1.0], Seeding::Around { x: 30.0, y: 30.0, spread: 0.0 }).unwrap();
        tracker.transition_all().unwrap();
        let cloud = tracker.cloud().unwrap();
        assert!(cloud.particles().iter().any(|p| p.position() != (30.0, 30.0)));
        for particle in cloud.particles() {
            assert_eq!(particle.x[0], 30.0);
        }
    }

    #[test]
    fn test_likelihood_all_counts_failures() {
        let image = scene();
        let source = ImageHistogramSource::new(&image, 4).unwrap();
        // Mixed reference, so every in-bounds region gets a finite distance.
        let reference = source.histogram_at(16, 16, 16, 16).unwrap();

        let mut tracker = Tracker::new(config()).unwrap();
        // Half of the cloud sits off the right edge of the 64 pixel image.
        tracker.init(reference, Seeding::Uniform { width: 120.0, height: 56.0 }).unwrap();
        let failed = tracker.likelihood_all(&source).unwrap();
        let distances = tracker.last_distances().unwrap();
        assert_eq!(distances.iter().filter(|d| d.is_none()).count(), failed);
        assert!(failed > 0 && failed < 50);

        let cloud = tracker.cloud().unwrap();
        assert_relative_eq!(cloud.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-9);
        for ((particle, weight), distance) in cloud.iter().zip(distances) {
            if distance.is_none() {
                assert_eq!(weight, 0.0);
                assert!(particle.appearance.is_none());
            } else {
                assert!(particle.appearance.is_some());
            }
        }
    }

    #[test]
    fn test_all_regions_failing_resets_to_uniform() {
        let image = scene();
        let source = ImageHistogramSource::new(&image, 4).unwrap();
        let mut tracker = Tracker::new(config()).unwrap();
        tracker
            .init(vec![1.0; 64], Seeding::Around { x: 500.0, y: 500.0, spread: 1.0 })
            .unwrap();
        let report = tracker.step(&source).unwrap();
        assert_eq!(report.failed_regions, 50);
        assert_eq!(report.best_distance, None);
        for &w in tracker.cloud().unwrap().weights() {
            assert_relative_eq!(w, 1.0 / 50.0);
        }
    }

    #[test]
    fn test_diverging_motion_keeps_stepping() {
        let image = scene();
        let source = ImageHistogramSource::new(&image, 4).unwrap();
        let mut config = config();
        config.motion = AutoRegressive::new(vec![3.0]).unwrap().into();
        let mut tracker = Tracker::new(config).unwrap();
        tracker
            .init(vec![1.0; 64], Seeding::Around { x: 1000.0, y: 1000.0, spread: 1.0 })
            .unwrap();

        // Positions pass the i64 range after a few dozen steps and reach
        // infinity after a few hundred.
        for _ in 0..700 {
            let report = tracker.step(&source).unwrap();
            assert_eq!(report.failed_regions, 50);
        }
        let (x, _) = tracker.cloud().unwrap().particles()[0].position();
        assert!(x.is_infinite());
    }

    #[test]
    fn test_step_is_transactional_on_contract_error() {
        let image = scene();
        let source = ImageHistogramSource::new(&image, 4).unwrap();
        let mut tracker = Tracker::new(config()).unwrap();
        // Reference of the wrong length: every score is a LengthMismatch.
        tracker.init(vec![1.0; 3], Seeding::Around { x: 20.0, y: 20.0, spread: 2.0 }).unwrap();
        let before = tracker.cloud().unwrap().clone();
        assert!(matches!(tracker.step(&source), Err(Error::LengthMismatch { .. })));
        assert_eq!(tracker.cloud().unwrap(), &before);
    }

    #[test]
    fn test_step_locks_on_target() {
        let image = scene();
        let source = ImageHistogramSource::new(&image, 4).unwrap();
        let reference = source.histogram_at(20, 20, 8, 8).unwrap();

        let mut config = config();
        config.num_particles = 200;
        config.motion = RandomWalk::new().into();
        config.noise_sigma = 1.5;
        let mut tracker = Tracker::new(config).unwrap();
        tracker.init(reference, Seeding::Around { x: 24.0, y: 17.0, spread: 3.0 }).unwrap();

        let mut report = tracker.step(&source).unwrap();
        for _ in 0..10 {
            report = tracker.step(&source).unwrap();
        }
        assert!((report.estimate.x - 20.0).abs() < 2.0, "x = {}", report.estimate.x);
        assert!((report.estimate.y - 20.0).abs() < 2.0, "y = {}", report.estimate.y);
        assert!(report.best_distance.unwrap() < 0.2);
    }

    #[test]
    fn test_set_region_size_updates_particles() {
        let mut tracker = Tracker::new(config()).unwrap();
        tracker.init(vec![1.0], Seeding::Around { x: 5.0, y: 5.0, spread: 1.0 }).unwrap();
        tracker.set_region_size(RegionSize::new(12, 6)).unwrap();
        assert_eq!(tracker.config().region_size, RegionSize::new(12, 6));
        assert!(tracker
            .cloud()
            .unwrap()
            .particles()
            .iter()
            .all(|p| p.size() == RegionSize::new(12, 6)));
        assert!(tracker.set_region_size(RegionSize::new(0, 0)).is_err());
    }

    #[test]
    fn test_reference_updates() {
        let mut tracker = Tracker::new(config()).unwrap();
        tracker.init(vec![1.0, 0.0], Seeding::Around { x: 5.0, y: 5.0, spread: 1.0 }).unwrap();

        tracker.adapt_reference(&[0.0, 1.0], 0.25).unwrap();
        let reference = tracker.reference().unwrap();
        assert_relative_eq!(reference[0], 0.75);
        assert_relative_eq!(reference[1], 0.25);

        assert!(matches!(tracker.adapt_reference(&[0.0, 1.0], 0.0), Err(Error::InvalidStepSize(_))));
        assert!(matches!(
            tracker.adapt_reference(&[0.2, 0.3, 0.5], 0.5),
            Err(Error::LengthMismatch { .. })
        ));

        tracker.reseed_reference(vec![3.0, 1.0]).unwrap();
        assert_eq!(tracker.reference().unwrap(), &[0.75, 0.25]);
    }

    #[test]
    fn test_best_distance_direction() {
        let distances = [Some(0.4), None, Some(0.1), Some(0.7)];
        assert_eq!(best_distance(&distances, DistanceMetric::Hellinger), Some(0.1));
        assert_eq!(best_distance(&distances, DistanceMetric::BhattacharyyaCoefficient), Some(0.7));
        assert_eq!(best_distance(&[None, None], DistanceMetric::Hellinger), None);
    }
}
