use crate::error::{ControlError, ensure_finite};

/// Inclusive bounds of the slider value. `minimum < maximum` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    minimum: f64,
    maximum: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
        }
    }
}

impl ValueRange {
    pub fn new(minimum: f64, maximum: f64) -> Result<Self, ControlError> {
        let minimum = ensure_finite("value minimum", minimum)?;
        let maximum = ensure_finite("value maximum", maximum)?;
        if minimum >= maximum {
            return Err(ControlError::EmptyRange {
                min: minimum,
                max: maximum,
            });
        }
        ensure_finite("value range span", maximum - minimum)?;
        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Width of the range, `maximum - minimum`.
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    pub fn midpoint(&self) -> f64 {
        self.minimum + self.span() / 2.0
    }

    /// `min(max(minimum, v), maximum)`. A NaN input resolves to `minimum`.
    pub fn clamp(&self, value: f64) -> f64 {
        self.minimum.max(value).min(self.maximum)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.clamp(value) == value
    }

    /// Position of `value` inside the range, `0.0` at `minimum` and `1.0` at `maximum`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.minimum) / self.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let range = ValueRange::new(0.0, 100.0).unwrap();
        let cases = vec![(150.0, 100.0), (-10.0, 0.0), (42.5, 42.5), (0.0, 0.0), (100.0, 100.0)];

        for (input, expected) in cases {
            assert_eq!(range.clamp(input), expected);
        }
    }

    #[test]
    fn test_clamp_nan_resolves_to_minimum() {
        let range = ValueRange::new(-5.0, 5.0).unwrap();
        assert_eq!(range.clamp(f64::NAN), -5.0);
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_rejects_empty_and_inverted_ranges() {
        assert_eq!(
            ValueRange::new(1.0, 1.0),
            Err(ControlError::EmptyRange { min: 1.0, max: 1.0 })
        );
        assert!(ValueRange::new(2.0, 1.0).is_err());
        assert!(matches!(
            ValueRange::new(0.0, f64::INFINITY),
            Err(ControlError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_rejects_range_wider_than_f64() {
        assert_eq!(
            ValueRange::new(-f64::MAX, f64::MAX),
            Err(ControlError::NonFinite {
                name: "value range span",
                value: f64::INFINITY
            })
        );
        assert!(ValueRange::new(-f64::MAX, 0.0).is_ok());
    }

    #[test]
    fn test_default_is_unit_range() {
        let range = ValueRange::default();
        assert_eq!(range.minimum(), 0.0);
        assert_eq!(range.maximum(), 1.0);
        assert_eq!(range.midpoint(), 0.5);
        assert_eq!(range.normalize(0.25), 0.25);
    }
}
