//! PyO3 binding for reference ellipsoids.

use pyo3::prelude::*;

use crate::proj::ellipsoid::{Ellipsoid, GRS80, WGS84};

/// Reference ellipsoid given by its semi-major axis `a` (metres) and
/// flattening `f`.
#[pyclass(name = "Ellipsoid", module = "geolocaltransform", frozen)]
#[derive(Clone)]
pub struct PyEllipsoid {
    pub(crate) inner: Ellipsoid,
}

#[pymethods]
impl PyEllipsoid {
    #[new]
    fn new(a: f64, f: f64) -> PyResult<Self> {
        Ok(Self {
            inner: Ellipsoid::try_new(a, f)?,
        })
    }

    #[staticmethod]
    #[pyo3(name = "WGS84")]
    fn wgs84() -> Self {
        Self { inner: WGS84 }
    }

    #[staticmethod]
    #[pyo3(name = "GRS80")]
    fn grs80() -> Self {
        Self { inner: GRS80 }
    }

    #[getter]
    fn a(&self) -> f64 {
        self.inner.a
    }

    #[getter]
    fn f(&self) -> f64 {
        self.inner.f
    }

    /// Semi-minor axis in metres.
    #[getter]
    fn b(&self) -> f64 {
        self.inner.b
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!("Ellipsoid(a={}, f={})", self.inner.a, self.inner.f)
    }
}
