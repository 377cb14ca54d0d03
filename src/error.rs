use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;

/// Reject latitudes outside [-90, 90] and non-finite values.
pub(crate) fn check_latitude(lat: f64) -> Result<()> {
    if !lat.is_finite() || lat.abs() > 90.0 {
        log::debug!("rejecting latitude {lat}");
        return Err(GeoError::InvalidArgument(format!(
            "latitude {lat} not in [-90, 90]"
        )));
    }
    Ok(())
}

pub(crate) fn check_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        log::debug!("rejecting non-finite {name}");
        return Err(GeoError::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(())
}
