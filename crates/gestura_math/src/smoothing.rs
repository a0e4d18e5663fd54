//! Exponential smoothing
//!
//! The whole engine suppresses detector jitter with the same primitive:
//! `value += (target - value) * coefficient` once per tick. With a
//! coefficient in (0,1) the value approaches a constant target
//! monotonically and never overshoots it.

/// One smoothing step toward `target`.
#[inline]
pub fn approach(current: f32, target: f32, coefficient: f32) -> f32 {
    current + (target - current) * coefficient
}

/// A low-pass-filtered scalar.
///
/// Stateful wrapper around [`approach`] for signals that keep their own
/// history, like the particle field's expansion factor.
#[derive(Clone, Copy, Debug)]
pub struct ExpSmoother {
    value: f32,
    coefficient: f32,
}

impl ExpSmoother {
    /// Create a smoother starting at 0.0.
    ///
    /// `coefficient` must be in (0,1); at a ~60 Hz drive rate 0.1 balances
    /// responsiveness against jitter suppression.
    pub fn new(coefficient: f32) -> Self {
        Self { value: 0.0, coefficient }
    }

    /// Create a smoother with an explicit starting value.
    pub fn with_value(coefficient: f32, value: f32) -> Self {
        Self { value, coefficient }
    }

    /// Advance one tick toward `target`, returning the new value.
    pub fn step(&mut self, target: f32) -> f32 {
        self.value = approach(self.value, target, self.coefficient);
        self.value
    }

    /// Current filtered value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step() {
        let mut s = ExpSmoother::with_value(0.1, 1.0);
        // new = 1.0 + (0 - 1.0) * 0.1 = 0.9
        assert!((s.step(0.0) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_no_overshoot() {
        let mut s = ExpSmoother::new(0.1);
        let target = 0.7;
        let mut prev = s.value();
        // 100 steps: the per-step increment stays well above f32 ulp, so
        // strict inequality is meaningful throughout
        for _ in 0..100 {
            let v = s.step(target);
            assert!(v > prev, "must strictly approach the target");
            assert!(v < target, "must never overshoot");
            prev = v;
        }
        assert!((s.value() - target).abs() < 1e-3);
    }

    #[test]
    fn test_converges_to_zero_and_stays() {
        let mut s = ExpSmoother::with_value(0.1, 1.0);
        for _ in 0..200 {
            s.step(0.0);
        }
        assert!(s.value().abs() < 1e-6);
        s.step(0.0);
        assert!(s.value().abs() < 1e-6);
    }

    #[test]
    fn test_approach_is_linear_in_error() {
        assert_eq!(approach(0.0, 1.0, 0.1), 0.1);
        assert_eq!(approach(0.5, 0.5, 0.1), 0.5);
    }
}
