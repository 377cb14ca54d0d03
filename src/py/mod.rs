use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::GeoError;

mod ellipsoid;
mod transform;

/// Register all Python-visible types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<transform::PyGeoLocalTransform>()?;
    m.add_class::<ellipsoid::PyEllipsoid>()?;
    Ok(())
}

impl From<GeoError> for PyErr {
    fn from(err: GeoError) -> PyErr {
        match err {
            GeoError::InvalidState(_) => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}
