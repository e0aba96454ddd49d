//! Property tests for the training building blocks
//!
//! - Batches cover a dataset exactly once, in order, with one ragged tail
//! - Pixel scaling and one-hot targets are exact
//! - Running averages match the naive mean
//! - Learning rate decay follows its closed form and respects the floor
//! - Shuffling and splitting never separate an image from its label

use approx::assert_relative_eq;
use imgtrain::data::{Dataset, Geometry, Image, Sample};
use imgtrain::train::{
    accuracy, argmax, moving_average, one_hot, scale_pixel, BatchEncoder, ExponentialDecayLR,
    LRScheduler, RunningMetric,
};
use ndarray::Array2;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Dataset whose first pixel encodes the sample index, labels in [0, classes)
fn indexed_dataset(labels: &[usize]) -> Dataset {
    let geometry = Geometry::new(1, 1, 2);
    let samples = labels
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let pixels = vec![(i % 256) as u8, (label * 10) as u8];
            Sample::new(Image::new(pixels, geometry).unwrap(), label)
        })
        .collect();
    Dataset::new(samples).unwrap()
}

fn labels(classes: usize, len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<usize>> {
    vec(0..classes, len)
}

// =============================================================================
// Batch Encoding Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_batches_cover_dataset_once(
        labels in labels(10, 1..200),
        batch_size in 1usize..64,
    ) {
        let dataset = indexed_dataset(&labels);
        let encoder = BatchEncoder::new(10);
        let batches: Vec<_> = encoder
            .batches(&dataset, batch_size)
            .collect::<Result<_, _>>()
            .unwrap();

        let sizes: Vec<usize> = batches.iter().map(|b| b.size()).collect();
        let full = labels.len() / batch_size;
        let tail = labels.len() % batch_size;
        prop_assert_eq!(sizes.len(), full + usize::from(tail > 0));
        prop_assert!(sizes[..full].iter().all(|&s| s == batch_size));
        if tail > 0 {
            prop_assert_eq!(sizes[full], tail);
        }

        let seen: Vec<usize> = batches.iter().flat_map(|b| b.labels.clone()).collect();
        prop_assert_eq!(seen, labels);
    }

    #[test]
    fn prop_encode_past_end_is_none(len in 1usize..50, extra in 0usize..10) {
        let dataset = indexed_dataset(&vec![0; len]);
        let encoder = BatchEncoder::new(2);
        prop_assert!(encoder.encode(&dataset, len + extra, 4).unwrap().is_none());
    }

    #[test]
    fn prop_targets_round_trip_labels(labels in labels(7, 1..40)) {
        let dataset = indexed_dataset(&labels);
        let batch = BatchEncoder::new(7).encode(&dataset, 0, labels.len()).unwrap().unwrap();
        for (row, &label) in batch.targets.outer_iter().zip(&labels) {
            prop_assert_eq!(argmax(&row.to_vec()), label);
            prop_assert_eq!(row.sum(), 1.0);
        }
    }

    #[test]
    fn prop_scale_pixel_exact(v in any::<u8>()) {
        let scaled = scale_pixel(v);
        prop_assert!((0.0..=1.0).contains(&scaled));
        prop_assert_eq!(scaled, f32::from(v) / 255.0);
    }

    #[test]
    fn prop_one_hot_rejects_out_of_range(classes in 1usize..20, over in 0usize..5) {
        prop_assert!(one_hot(classes + over, classes).is_err());
    }
}

// =============================================================================
// Metric Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_running_mean_matches_naive(values in vec(-50.0f32..50.0, 1..1000)) {
        let mut metric = RunningMetric::new();
        for &v in &values {
            metric.update(v);
        }
        let naive = values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64;
        prop_assert!((f64::from(metric.value()) - naive).abs() < 1e-3);
    }

    #[test]
    fn prop_moving_average_first_value(v in -100.0f32..100.0, current in -5.0f32..5.0) {
        prop_assert!((moving_average(current, 1, v) - v).abs() < 1e-4);
    }

    #[test]
    fn prop_accuracy_bounded(
        rows in 1usize..30,
        cols in 2usize..6,
        seed in any::<u64>(),
    ) {
        use rand::Rng;
        let mut rng = StdRng::seed_from_u64(seed);
        let predictions = Array2::from_shape_fn((rows, cols), |_| rng.random::<f32>());
        let targets = Array2::from_shape_fn((rows, cols), |(_, c)| if c == 0 { 1.0 } else { 0.0 });
        let acc = accuracy(&predictions, &targets);
        prop_assert!((0.0..=1.0).contains(&acc));
        prop_assert_eq!(accuracy(&targets, &targets), 1.0);
    }
}

// =============================================================================
// Learning Rate Decay Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_decay_closed_form(steps in 0usize..60) {
        let mut scheduler = ExponentialDecayLR::new(0.1, 0.8, 0.001);
        for _ in 0..steps {
            scheduler.step();
        }
        let expected = (0.1f64 * 0.8f64.powi(steps as i32)).max(0.001);
        assert_relative_eq!(f64::from(scheduler.get_lr()), expected, max_relative = 1e-4);
    }

    #[test]
    fn prop_decay_never_below_floor(
        lr in 0.001f32..1.0,
        decay in 0.01f32..1.0,
        steps in 0usize..200,
    ) {
        let floor = lr / 10.0;
        let mut scheduler = ExponentialDecayLR::new(lr, decay, floor);
        let mut previous = scheduler.get_lr();
        for _ in 0..steps {
            scheduler.step();
            let current = scheduler.get_lr();
            prop_assert!(current >= floor);
            prop_assert!(current <= previous);
            previous = current;
        }
    }
}

// =============================================================================
// Shuffle / Split Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_shuffle_then_split_keeps_pairs(
        labels in labels(10, 1..120),
        fraction in 0.05f64..0.95,
        seed in any::<u64>(),
    ) {
        let mut dataset = indexed_dataset(&labels);
        dataset.shuffle(&mut StdRng::seed_from_u64(seed)).unwrap();
        let (train, validation) = dataset.split(fraction);

        prop_assert_eq!(train.len() + validation.len(), labels.len());
        prop_assert_eq!(train.len(), (labels.len() as f64 * fraction).floor() as usize);
        for sample in train.samples().iter().chain(validation.samples()) {
            let pixels = sample.image.pixels();
            prop_assert_eq!(usize::from(pixels[1]), sample.label * 10);
        }
    }
}
