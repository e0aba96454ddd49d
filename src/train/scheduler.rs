//! Learning rate schedulers

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f32;

    /// Step the scheduler (called once at the end of each epoch)
    fn step(&mut self);
}

/// Exponential decay with a floor
///
/// Each step applies `lr = max(lr * decay_rate, min_lr)`, so after `k` steps
/// the rate is `max(lr_initial * decay_rate^k, min_lr)` and never drops below
/// `min_lr`.
#[derive(Clone, Debug)]
pub struct ExponentialDecayLR {
    lr: f32,
    decay_rate: f32,
    min_lr: f32,
}

impl ExponentialDecayLR {
    /// # Arguments
    /// * `lr_initial` - Starting learning rate
    /// * `decay_rate` - Multiplicative factor applied per step
    /// * `min_lr` - Lower bound on the learning rate
    pub fn new(lr_initial: f32, decay_rate: f32, min_lr: f32) -> Self {
        Self {
            lr: lr_initial,
            decay_rate,
            min_lr,
        }
    }

    pub fn min_lr(&self) -> f32 {
        self.min_lr
    }
}

impl LRScheduler for ExponentialDecayLR {
    fn get_lr(&self) -> f32 {
        self.lr
    }

    fn step(&mut self) {
        self.lr = (self.lr * self.decay_rate).max(self.min_lr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_lr() {
        let s = ExponentialDecayLR::new(0.1, 0.8, 0.001);
        assert_eq!(s.get_lr(), 0.1);
    }

    #[test]
    fn test_decay_matches_closed_form() {
        let mut s = ExponentialDecayLR::new(0.1, 0.8, 0.001);
        for k in 1..=40 {
            s.step();
            let expected = (0.1f64 * 0.8f64.powi(k)).max(0.001) as f32;
            assert_relative_eq!(s.get_lr(), expected, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_pinned_at_floor() {
        let mut s = ExponentialDecayLR::new(0.1, 0.8, 0.001);
        for _ in 0..21 {
            s.step();
        }
        // 0.1 * 0.8^21 ~= 0.00092
        assert_eq!(s.get_lr(), s.min_lr());
        for _ in 0..100 {
            s.step();
            assert_eq!(s.get_lr(), s.min_lr());
        }
        assert_eq!(s.min_lr(), 0.001);
    }

    #[test]
    fn test_above_floor_before_crossing() {
        let mut s = ExponentialDecayLR::new(0.1, 0.8, 0.001);
        for _ in 0..20 {
            s.step();
        }
        // 0.1 * 0.8^20 ~= 0.00115
        assert!(s.get_lr() > 0.001);
    }

    #[test]
    fn test_no_decay_when_rate_is_one() {
        let mut s = ExponentialDecayLR::new(0.05, 1.0, 0.001);
        s.step();
        s.step();
        assert_eq!(s.get_lr(), 0.05);
    }
}
