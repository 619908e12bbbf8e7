use thiserror::Error;

/// Rejected configuration. Nothing is applied when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error("track angle span is empty: min {min} must be less than max {max}")]
    EmptySpan { min: f64, max: f64 },
    #[error("value range is empty: minimum {min} must be less than maximum {max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    NegativeSize { name: &'static str, value: f64 },
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ControlError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ControlError::NonFinite { name, value })
    }
}

pub(crate) fn ensure_size(name: &'static str, value: f64) -> Result<f64, ControlError> {
    let value = ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(ControlError::NegativeSize { name, value });
    }
    Ok(value)
}
