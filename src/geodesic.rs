//! Geodesic inverse and direct problems, solved by `geographiclib-rs`.

use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

use crate::error::{check_finite, check_latitude, Result};
use crate::proj::ellipsoid::{Ellipsoid, WGS84};

/// Solution of the inverse problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicSegment {
    /// Distance between the points (metres).
    pub s12: f64,
    /// Azimuth at the first point (degrees clockwise from north).
    pub azi1: f64,
    /// Forward azimuth at the second point (degrees).
    pub azi2: f64,
}

impl GeodesicSegment {
    pub fn to_array(self) -> [f64; 3] {
        [self.s12, self.azi1, self.azi2]
    }
}

/// Solution of the direct problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicRay {
    pub lat2: f64,
    pub lon2: f64,
    /// Forward azimuth at the destination (degrees).
    pub azi2: f64,
}

impl GeodesicRay {
    pub fn to_array(self) -> [f64; 3] {
        [self.lat2, self.lon2, self.azi2]
    }
}

fn solver(ellipsoid: &Ellipsoid) -> Geodesic {
    if *ellipsoid == WGS84 {
        Geodesic::wgs84()
    } else {
        Geodesic::new(ellipsoid.a, ellipsoid.f)
    }
}

/// Shortest path between two points on WGS84.
pub fn geodesic_inverse(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<GeodesicSegment> {
    geodesic_inverse_on(&WGS84, lat1, lon1, lat2, lon2)
}

pub fn geodesic_inverse_on(
    ellipsoid: &Ellipsoid,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<GeodesicSegment> {
    check_latitude(lat1)?;
    check_latitude(lat2)?;
    check_finite("lon1", lon1)?;
    check_finite("lon2", lon2)?;

    let (s12, azi1, azi2): (f64, f64, f64) = solver(ellipsoid).inverse(lat1, lon1, lat2, lon2);
    Ok(GeodesicSegment { s12, azi1, azi2 })
}

/// Destination after travelling `s12` metres from `(lat1, lon1)` on
/// azimuth `azi1`, on WGS84.
pub fn geodesic_direct(lat1: f64, lon1: f64, azi1: f64, s12: f64) -> Result<GeodesicRay> {
    geodesic_direct_on(&WGS84, lat1, lon1, azi1, s12)
}

pub fn geodesic_direct_on(
    ellipsoid: &Ellipsoid,
    lat1: f64,
    lon1: f64,
    azi1: f64,
    s12: f64,
) -> Result<GeodesicRay> {
    check_latitude(lat1)?;
    check_finite("lon1", lon1)?;
    check_finite("azi1", azi1)?;
    check_finite("s12", s12)?;

    let (lat2, lon2, azi2): (f64, f64, f64) = solver(ellipsoid).direct(lat1, lon1, azi1, s12);
    Ok(GeodesicRay { lat2, lon2, azi2 })
}
