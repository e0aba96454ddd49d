//! Running average of a per-batch scalar

/// Fold `new_value` into the mean of the previous `index - 1` values
///
/// `index` is the 1-based position of `new_value` in the sequence. The update
/// is expressed as a correction to the current mean, so the magnitude of the
/// intermediate terms never grows with `index`.
///
/// # Panics
///
/// Panics if `index` is 0.
#[inline]
pub fn moving_average(current: f32, index: usize, new_value: f32) -> f32 {
    assert!(index > 0, "moving_average index is 1-based");
    current + (new_value - current) / index as f32
}

/// Mean of the values seen since the last reset
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningMetric {
    value: f32,
    count: usize,
}

impl RunningMetric {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation and return the updated mean
    pub fn update(&mut self, new_value: f32) -> f32 {
        self.count += 1;
        self.value = moving_average(self.value, self.count, new_value);
        self.value
    }

    /// Start a new window
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
