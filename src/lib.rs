use pyo3::prelude::*;

pub mod error;
pub mod geocentric;
pub mod geodesic;
pub mod local_cartesian;
pub mod point;
pub mod proj;
pub mod utm;
mod py;

pub use error::{GeoError, ProjError, Result};
pub use geodesic::{
    geodesic_direct, geodesic_direct_on, geodesic_inverse, geodesic_inverse_on, GeodesicRay,
    GeodesicSegment,
};
pub use local_cartesian::LocalCartesian;
pub use point::{GeodeticPoint, LocalPoint, UtmPoint};
pub use proj::ellipsoid::{Ellipsoid, GRS80, WGS84};
pub use utm::{
    utm_forward, utm_forward_in, utm_forward_zoned, utm_reverse, utm_reverse_zoned,
    utm_standard_zone, UtmCoordinate, UtmReverse, UtmZone,
};

/// A Python module implemented in Rust.
#[pymodule]
fn geolocaltransform(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
