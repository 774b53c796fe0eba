use thiserror::Error;

/// Failures surfaced by walker construction and stepping.
///
/// `Configuration` is raised eagerly when a walker is built and is never
/// recovered internally.  `Sampling` means a distribution produced a value
/// the engine cannot use (non-finite, or a negative trip distance); it
/// propagates to whoever called `advance_one_tick`.
#[derive(Debug, Error, PartialEq)]
pub enum WalkerError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("sampling error: {what} produced {value}")]
    Sampling {
        what:  &'static str,
        value: f64,
    },
}

pub type WalkerResult<T> = Result<T, WalkerError>;

// ── Validation helpers ────────────────────────────────────────────────────────

pub(crate) fn ensure_positive(name: &str, value: f64) -> WalkerResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WalkerError::Configuration(format!("{name} must be finite and > 0, got {value}")))
    }
}

pub(crate) fn ensure_non_negative(name: &str, value: f64) -> WalkerResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WalkerError::Configuration(format!("{name} must be finite and >= 0, got {value}")))
    }
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> WalkerResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WalkerError::Configuration(format!("{name} must be finite, got {value}")))
    }
}

pub(crate) fn ensure_probability(name: &str, value: f64) -> WalkerResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(WalkerError::Configuration(format!("{name} must lie in [0, 1], got {value}")))
    }
}
