//! PyO3 binding for the `GeoLocalTransform` class.

use ndarray::Array2;
use numpy::{PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::geodesic;
use crate::local_cartesian::LocalCartesian;
use crate::proj::ellipsoid::WGS84;
use crate::py::ellipsoid::PyEllipsoid;
use crate::utm::{self, UtmZone};

/// Local East-North-Up frame around a geodetic origin, plus static UTM and
/// geodesic helpers on WGS84.
///
/// Args:
///     lat: Origin latitude in degrees. Omit together with `lon` to create a
///         transform without an origin; call `Reset` before converting.
///     lon: Origin longitude in degrees.
///     height: Origin height in metres above the ellipsoid. Defaults to 0.
///     ellipsoid: Optional `Ellipsoid`. Defaults to WGS84.
#[pyclass(name = "GeoLocalTransform", module = "geolocaltransform")]
pub struct PyGeoLocalTransform {
    inner: LocalCartesian,
}

#[pymethods]
impl PyGeoLocalTransform {
    #[new]
    #[pyo3(signature = (lat=None, lon=None, height=None, *, ellipsoid=None))]
    fn new(
        lat: Option<f64>,
        lon: Option<f64>,
        height: Option<f64>,
        ellipsoid: Option<PyEllipsoid>,
    ) -> PyResult<Self> {
        let ellipsoid = ellipsoid.map_or(WGS84, |e| e.inner);
        let inner = match (lat, lon, height) {
            (None, None, None) => LocalCartesian::with_ellipsoid(ellipsoid),
            (Some(lat), Some(lon), height) => {
                LocalCartesian::with_origin_on(ellipsoid, lat, lon, height.unwrap_or(0.0))?
            }
            _ => {
                return Err(PyTypeError::new_err(
                    "GeoLocalTransform takes no arguments or lat, lon and optional height",
                ))
            }
        };
        Ok(Self { inner })
    }

    /// Move the origin to (lat, lon, height).
    #[pyo3(name = "Reset", signature = (lat, lon, height=0.0))]
    fn reset(&mut self, lat: f64, lon: f64, height: f64) -> PyResult<()> {
        self.inner.reset(lat, lon, height)?;
        Ok(())
    }

    /// Geodetic point to local (x, y, z) = (east, north, up) in metres.
    #[pyo3(name = "Forward", signature = (lat, lon, height=0.0))]
    fn forward<'py>(
        &self,
        py: Python<'py>,
        lat: f64,
        lon: f64,
        height: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let p = self.inner.forward(lat, lon, height)?;
        Ok(PyArray1::from_slice(py, &p.to_array()))
    }

    /// Local (x, y, z) back to (lat, lon, height).
    #[pyo3(name = "Reverse", signature = (x, y, z=0.0))]
    fn reverse<'py>(
        &self,
        py: Python<'py>,
        x: f64,
        y: f64,
        z: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let p = self.inner.reverse(x, y, z)?;
        Ok(PyArray1::from_slice(py, &p.to_array()))
    }

    /// Forward-transform an (N, 3) array of (lat, lon, height) rows.
    ///
    /// Returns:
    ///     (N, 3) array of (x, y, z) rows.
    #[pyo3(name = "ForwardBatch")]
    fn forward_batch<'py>(
        &self,
        py: Python<'py>,
        points: PyReadonlyArray2<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let mut coords = rows_of(&points)?;
        let inner = &self.inner;
        py.allow_threads(|| inner.forward_batch(&mut coords))?;
        Ok(PyArray2::from_owned_array(py, Array2::from(coords)))
    }

    /// Reverse-transform an (N, 3) array of (x, y, z) rows.
    ///
    /// Returns:
    ///     (N, 3) array of (lat, lon, height) rows.
    #[pyo3(name = "ReverseBatch")]
    fn reverse_batch<'py>(
        &self,
        py: Python<'py>,
        points: PyReadonlyArray2<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let mut coords = rows_of(&points)?;
        let inner = &self.inner;
        py.allow_threads(|| inner.reverse_batch(&mut coords))?;
        Ok(PyArray2::from_owned_array(py, Array2::from(coords)))
    }

    /// Current origin as (lat, lon, height), or None before the first Reset.
    #[getter]
    fn origin<'py>(&self, py: Python<'py>) -> Option<Bound<'py, PyArray1<f64>>> {
        self.inner
            .origin()
            .map(|o| PyArray1::from_slice(py, &o.to_array()))
    }

    #[getter]
    fn ellipsoid(&self) -> PyEllipsoid {
        PyEllipsoid {
            inner: *self.inner.ellipsoid(),
        }
    }

    fn __repr__(&self) -> String {
        match self.inner.origin() {
            Some(o) => format!(
                "GeoLocalTransform(lat={}, lon={}, height={})",
                o.lat, o.lon, o.height
            ),
            None => "GeoLocalTransform()".to_string(),
        }
    }

    /// Standard UTM zone (1-60) of a point; 0 for the polar UPS regions.
    #[staticmethod]
    #[pyo3(name = "UTMStandardZone")]
    fn utm_standard_zone(lat: f64, lon: f64) -> PyResult<i32> {
        Ok(utm::utm_standard_zone(lat, lon)?)
    }

    /// Project (lat, lon) into its standard zone.
    ///
    /// Returns:
    ///     (easting, northing, 0). Zone and hemisphere are not returned; use
    ///     `UTMForwardZoned` when they are needed.
    #[staticmethod]
    #[pyo3(name = "UTMForward")]
    fn utm_forward<'py>(py: Python<'py>, lat: f64, lon: f64) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let p = utm::utm_forward(lat, lon)?;
        Ok(PyArray1::from_slice(py, &p.to_array()))
    }

    /// Invert (x, y) using the zone and hemisphere of the hint point (lat, lon).
    ///
    /// The hint must lie in the same zone and hemisphere as the true
    /// location. `UTMReverseZoned` takes the zone explicitly.
    ///
    /// Returns:
    ///     (lat, lon, 0).
    #[staticmethod]
    #[pyo3(name = "UTMReverse")]
    fn utm_reverse<'py>(
        py: Python<'py>,
        x: f64,
        y: f64,
        lat: f64,
        lon: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let p = utm::utm_reverse(x, y, lat, lon)?;
        Ok(PyArray1::from_slice(py, &p.to_array()))
    }

    /// Project (lat, lon) into its standard zone.
    ///
    /// Returns:
    ///     (zone, northp, easting, northing, gamma, k) with the meridian
    ///     convergence gamma in degrees and the point scale k.
    #[staticmethod]
    #[pyo3(name = "UTMForwardZoned")]
    fn utm_forward_zoned(lat: f64, lon: f64) -> PyResult<(i32, bool, f64, f64, f64, f64)> {
        let c = utm::utm_forward_zoned(lat, lon)?;
        Ok((
            c.zone.number(),
            c.north,
            c.easting,
            c.northing,
            c.convergence,
            c.scale,
        ))
    }

    /// Invert (x, y) in an explicit zone (0 for UPS) and hemisphere.
    ///
    /// Returns:
    ///     (lat, lon, gamma, k).
    #[staticmethod]
    #[pyo3(name = "UTMReverseZoned")]
    fn utm_reverse_zoned(zone: i32, northp: bool, x: f64, y: f64) -> PyResult<(f64, f64, f64, f64)> {
        let zone = UtmZone::from_number(zone)?;
        let r = utm::utm_reverse_zoned(zone, northp, x, y)?;
        Ok((r.lat, r.lon, r.convergence, r.scale))
    }

    /// Geodesic distance and azimuths between two points.
    ///
    /// Returns:
    ///     (s12, azi1, azi2): distance in metres, azimuths in degrees.
    #[staticmethod]
    #[pyo3(name = "GeodesicInverse", signature = (lat1, lon1, lat2, lon2, *, ellipsoid=None))]
    fn geodesic_inverse<'py>(
        py: Python<'py>,
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
        ellipsoid: Option<PyEllipsoid>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let ellipsoid = ellipsoid.map_or(WGS84, |e| e.inner);
        let seg = geodesic::geodesic_inverse_on(&ellipsoid, lat1, lon1, lat2, lon2)?;
        Ok(PyArray1::from_slice(py, &seg.to_array()))
    }

    /// Destination after travelling s12 metres from (lat1, lon1) on azimuth azi1.
    ///
    /// Returns:
    ///     (lat2, lon2, azi2) in degrees.
    #[staticmethod]
    #[pyo3(name = "GeodesicDirect", signature = (lat1, lon1, azi1, s12, *, ellipsoid=None))]
    fn geodesic_direct<'py>(
        py: Python<'py>,
        lat1: f64,
        lon1: f64,
        azi1: f64,
        s12: f64,
        ellipsoid: Option<PyEllipsoid>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let ellipsoid = ellipsoid.map_or(WGS84, |e| e.inner);
        let ray = geodesic::geodesic_direct_on(&ellipsoid, lat1, lon1, azi1, s12)?;
        Ok(PyArray1::from_slice(py, &ray.to_array()))
    }
}

/// Copy an (N, 3) array into owned rows.
fn rows_of(points: &PyReadonlyArray2<'_, f64>) -> PyResult<Vec<[f64; 3]>> {
    let view = points.as_array();
    if view.ncols() != 3 {
        return Err(PyValueError::new_err(format!(
            "expected an (N, 3) array, got shape {:?}",
            view.shape()
        )));
    }
    Ok(view.rows().into_iter().map(|r| [r[0], r[1], r[2]]).collect())
}
