//! Inclusive numeric ranges for synthesis parameters.

/// Inclusive range a synthesis parameter is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Lower bound (inclusive).
    pub low: f32,
    /// Upper bound (inclusive).
    pub high: f32,
}

impl ParamRange {
    /// Create new range.
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Clamp `value` into the range. NaN collapses to the lower bound.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.low;
        }
        value.clamp(self.low, self.high)
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: f32) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Accepted pitch multiplier range.
pub const PITCH_RANGE: ParamRange = ParamRange::new(0.1, 2.0);

/// Accepted speaking-rate multiplier range.
pub const RATE_RANGE: ParamRange = ParamRange::new(0.5, 2.0);

/// Accepted volume range.
pub const VOLUME_RANGE: ParamRange = ParamRange::new(0.0, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(PITCH_RANGE.clamp(3.0), 2.0);
        assert_eq!(PITCH_RANGE.clamp(0.0), 0.1);
        assert_eq!(RATE_RANGE.clamp(1.2), 1.2);
        assert_eq!(VOLUME_RANGE.clamp(f32::NAN), 0.0);
    }

    #[test]
    fn contains_is_inclusive() {
        assert!(RATE_RANGE.contains(0.5));
        assert!(RATE_RANGE.contains(2.0));
        assert!(!RATE_RANGE.contains(2.01));
    }
}
