//! Tracker benchmarks using Criterion.
//!
//! Run with: cargo bench
//! Parallel variant: cargo bench --features rayon

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pftrack::distances::distance;
use pftrack::image::{Image, ImageHistogramSource, Region, RegionSize};
use pftrack::transforms::circular_convolution;
use pftrack::{DistanceMetric, RandomWalk, Seeding, Tracker, TrackerConfig, WeightTransform};

fn create_test_scene() -> Image {
    let mut image = Image::filled(320, 240, &[30, 60, 30]);
    image.fill_region(&Region::new(150, 100, 24, 24), &[220, 40, 40]);
    image
}

fn create_tracker(num_particles: usize, metric: DistanceMetric, reference: Vec<f64>) -> Tracker {
    let mut config = TrackerConfig::new(WeightTransform::NegExp { lambda: 20.0 });
    config.num_particles = num_particles;
    config.metric = metric;
    config.seed = Some(42);
    config.region_size = RegionSize::new(24, 24);

    let mut tracker = Tracker::new(config).expect("valid tracker");
    tracker
        .init(reference, Seeding::Around { x: 150.0, y: 100.0, spread: 5.0 })
        .expect("valid reference");
    tracker
}

fn bench_step(c: &mut Criterion, name: &str, num_particles: usize, metric: DistanceMetric) {
    let image = create_test_scene();
    let source = ImageHistogramSource::new(&image, 8).expect("valid bins");
    let reference = source.histogram_at(150, 100, 24, 24).expect("region inside image");
    let mut tracker = create_tracker(num_particles, metric, reference);

    c.bench_function(name, |b| {
        b.iter(|| {
            tracker.step(black_box(&source)).expect("step succeeds");
        })
    });
}

fn benchmark_tracker_step_100_particles(c: &mut Criterion) {
    bench_step(c, "tracker_step_100_particles", 100, DistanceMetric::Bhattacharyya);
}

fn benchmark_tracker_step_500_particles(c: &mut Criterion) {
    bench_step(c, "tracker_step_500_particles", 500, DistanceMetric::Bhattacharyya);
}

fn benchmark_tracker_step_1000_particles(c: &mut Criterion) {
    bench_step(c, "tracker_step_1000_particles", 1000, DistanceMetric::Bhattacharyya);
}

fn benchmark_tracker_step_500_particles_hellinger(c: &mut Criterion) {
    bench_step(c, "tracker_step_500_particles_hellinger", 500, DistanceMetric::Hellinger);
}

fn benchmark_tracker_step_500_particles_random_walk(c: &mut Criterion) {
    let image = create_test_scene();
    let source = ImageHistogramSource::new(&image, 8).expect("valid bins");
    let reference = source.histogram_at(150, 100, 24, 24).expect("region inside image");

    let mut config = TrackerConfig::new(WeightTransform::NegExp { lambda: 20.0 });
    config.num_particles = 500;
    config.seed = Some(42);
    config.motion = RandomWalk::new().into();
    let mut tracker = Tracker::new(config).expect("valid tracker");
    tracker
        .init(reference, Seeding::Uniform { width: 320.0, height: 240.0 })
        .expect("valid reference");

    c.bench_function("tracker_step_500_particles_random_walk", |b| {
        b.iter(|| {
            tracker.step(black_box(&source)).expect("step succeeds");
        })
    });
}

fn benchmark_histogram_distances(c: &mut Criterion) {
    let image = create_test_scene();
    let source = ImageHistogramSource::new(&image, 8).expect("valid bins");
    let a = source.histogram_at(150, 100, 24, 24).unwrap();
    let b = source.histogram_at(140, 95, 24, 24).unwrap();

    for metric in [DistanceMetric::Bhattacharyya, DistanceMetric::Hellinger, DistanceMetric::Euclidean] {
        c.bench_function(&format!("distance_512_bins_{}", metric), |bench| {
            bench.iter(|| distance(black_box(&a), black_box(&b), metric).unwrap())
        });
    }
}

fn benchmark_circular_convolution(c: &mut Criterion) {
    let a: Vec<f64> = (0..256).map(|i| (i as f64).sin().abs()).collect();
    let b: Vec<f64> = (0..256).map(|i| (i as f64 * 0.5).cos().abs()).collect();

    c.bench_function("circular_convolution_256", |bench| {
        bench.iter(|| circular_convolution(black_box(&a), black_box(&b), 1).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_tracker_step_100_particles,
    benchmark_tracker_step_500_particles,
    benchmark_tracker_step_1000_particles,
    benchmark_tracker_step_500_particles_hellinger,
    benchmark_tracker_step_500_particles_random_walk,
    benchmark_histogram_distances,
    benchmark_circular_convolution,
);
criterion_main!(benches);
