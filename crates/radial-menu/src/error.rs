use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu page has no center button to change to")]
    MissingCenter,
    #[error("Invalid {name}: {value} is not a finite number")]
    InvalidDimension { name: &'static str, value: f64 },
}

/// Rejects NaN and infinities before they reach the layout.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, MenuError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MenuError::InvalidDimension { name, value })
    }
}
