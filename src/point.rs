//! Plain coordinate triples exchanged by the transforms.

use crate::error::{check_finite, check_latitude, Result};
use crate::proj::common::ang_normalize;

/// Latitude/longitude in degrees, height in metres above the ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GeodeticPoint {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

impl GeodeticPoint {
    pub fn new(lat: f64, lon: f64, height: f64) -> Self {
        Self { lat, lon, height }
    }

    /// Validate the point and reduce its longitude to (-180, 180].
    pub fn normalized(self) -> Result<Self> {
        check_latitude(self.lat)?;
        check_finite("longitude", self.lon)?;
        check_finite("height", self.height)?;
        Ok(Self {
            lon: ang_normalize(self.lon),
            ..self
        })
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.lat, self.lon, self.height]
    }
}

/// East/north/up offsets in metres from a tangent-plane origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LocalPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// UTM easting/northing. `z` is always 0 and only keeps the triple shape.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct UtmPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl UtmPoint {
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
