//! Classification accuracy over prediction rows

use ndarray::{Array2, ArrayView1};

/// Index of the maximum of `row`
///
/// Scans left to right and moves to `i` whenever `row[i] >= row[best]`, so
/// ties resolve to the **last** maximal index: `[0.5, 0.5]` gives 1. An empty
/// row gives 0.
pub fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    for (i, &value) in row.iter().enumerate() {
        if value >= row[best] {
            best = i;
        }
    }
    best
}

fn argmax_view(row: ArrayView1<'_, f32>) -> usize {
    match row.as_slice() {
        Some(slice) => argmax(slice),
        None => argmax(&row.to_vec()),
    }
}

/// Number of rows whose predicted class equals the integer label
pub fn correct_count(predictions: &Array2<f32>, labels: &[usize]) -> usize {
    assert_eq!(
        predictions.nrows(),
        labels.len(),
        "Predictions and labels must have same number of rows"
    );
    predictions
        .outer_iter()
        .zip(labels)
        .filter(|(row, label)| argmax_view(row.view()) == **label)
        .count()
}

/// Fraction of rows where `argmax(prediction) == argmax(target)`
///
/// # Example
///
/// ```
/// use imgtrain::train::accuracy;
/// use ndarray::array;
///
/// let predictions = array![[0.1, 0.9], [0.8, 0.2]];
/// let targets = array![[0.0, 1.0], [0.0, 1.0]];
/// assert_eq!(accuracy(&predictions, &targets), 0.5);
/// ```
pub fn accuracy(predictions: &Array2<f32>, targets: &Array2<f32>) -> f32 {
    assert_eq!(
        predictions.dim(),
        targets.dim(),
        "Predictions and targets must have same shape"
    );
    let total = predictions.nrows();
    if total == 0 {
        return 0.0;
    }
    let correct = predictions
        .outer_iter()
        .zip(targets.outer_iter())
        .filter(|(p, t)| argmax_view(p.view()) == argmax_view(t.view()))
        .count();
    correct as f32 / total as f32
}
