//! Local tangent-plane (East-North-Up) transform around a movable origin.

use crate::error::{check_finite, GeoError, Result};
use crate::geocentric::{ecef_to_geodetic, geodetic_to_ecef, Ecef};
use crate::point::{GeodeticPoint, LocalPoint};
use crate::proj::ellipsoid::{Ellipsoid, WGS84};

/// Origin-dependent constants of a tangent plane.
#[derive(Clone, Copy, Debug, PartialEq)]
struct TangentFrame {
    origin: GeodeticPoint,
    origin_ecef: Ecef,
    /// Rows are the east, north and up unit vectors in ECEF.
    rotation: [[f64; 3]; 3],
}

impl TangentFrame {
    fn new(ellipsoid: &Ellipsoid, origin: GeodeticPoint) -> Result<Self> {
        let origin = origin.normalized()?;
        let (sin_lat, cos_lat) = origin.lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = origin.lon.to_radians().sin_cos();

        Ok(Self {
            origin,
            origin_ecef: geodetic_to_ecef(ellipsoid, &origin),
            rotation: [
                [-sin_lon, cos_lon, 0.0],
                [-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat],
                [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat],
            ],
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
enum FrameState {
    Uninitialized,
    Ready(TangentFrame),
}

/// Converts between geodetic coordinates and a local ENU frame.
///
/// A transform built with [`LocalCartesian::new`] has no origin until
/// [`reset`](LocalCartesian::reset) is called; converting before that
/// returns [`GeoError::InvalidState`].
#[derive(Clone, Debug, PartialEq)]
pub struct LocalCartesian {
    ellipsoid: Ellipsoid,
    state: FrameState,
}

impl Default for LocalCartesian {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalCartesian {
    /// Uninitialized transform on WGS84.
    pub fn new() -> Self {
        Self::with_ellipsoid(WGS84)
    }

    /// Uninitialized transform on a custom ellipsoid.
    pub fn with_ellipsoid(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            state: FrameState::Uninitialized,
        }
    }

    /// WGS84 transform anchored at `(lat, lon, height)`.
    pub fn with_origin(lat: f64, lon: f64, height: f64) -> Result<Self> {
        Self::with_origin_on(WGS84, lat, lon, height)
    }

    pub fn with_origin_on(ellipsoid: Ellipsoid, lat: f64, lon: f64, height: f64) -> Result<Self> {
        let mut lc = Self::with_ellipsoid(ellipsoid);
        lc.reset(lat, lon, height)?;
        Ok(lc)
    }

    /// Move the origin. On error the previous origin stays in effect.
    pub fn reset(&mut self, lat: f64, lon: f64, height: f64) -> Result<()> {
        let frame = TangentFrame::new(&self.ellipsoid, GeodeticPoint::new(lat, lon, height))?;
        log::debug!(
            "local frame origin set to ({}, {}, {})",
            frame.origin.lat,
            frame.origin.lon,
            frame.origin.height
        );
        self.state = FrameState::Ready(frame);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, FrameState::Ready(_))
    }

    /// Current origin, longitude reduced to (-180, 180].
    pub fn origin(&self) -> Option<GeodeticPoint> {
        match &self.state {
            FrameState::Ready(frame) => Some(frame.origin),
            FrameState::Uninitialized => None,
        }
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn frame(&self) -> Result<&TangentFrame> {
        match &self.state {
            FrameState::Ready(frame) => Ok(frame),
            FrameState::Uninitialized => Err(GeoError::InvalidState(
                "local transform has no origin; call reset first".into(),
            )),
        }
    }

    /// Geodetic point to east/north/up offsets from the origin.
    pub fn forward(&self, lat: f64, lon: f64, height: f64) -> Result<LocalPoint> {
        let frame = self.frame()?;
        let p = GeodeticPoint::new(lat, lon, height).normalized()?;

        let ecef = geodetic_to_ecef(&self.ellipsoid, &p);
        let d = [
            ecef[0] - frame.origin_ecef[0],
            ecef[1] - frame.origin_ecef[1],
            ecef[2] - frame.origin_ecef[2],
        ];
        let [east, north, up] = frame.rotation.map(|row| dot(&row, &d));
        Ok(LocalPoint::new(east, north, up))
    }

    /// East/north/up offsets from the origin back to a geodetic point.
    pub fn reverse(&self, x: f64, y: f64, z: f64) -> Result<GeodeticPoint> {
        let frame = self.frame()?;
        check_finite("x", x)?;
        check_finite("y", y)?;
        check_finite("z", z)?;

        let r = &frame.rotation;
        let ecef = [
            frame.origin_ecef[0] + r[0][0] * x + r[1][0] * y + r[2][0] * z,
            frame.origin_ecef[1] + r[0][1] * x + r[1][1] * y + r[2][1] * z,
            frame.origin_ecef[2] + r[0][2] * x + r[1][2] * y + r[2][2] * z,
        ];
        Ok(ecef_to_geodetic(&self.ellipsoid, &ecef))
    }

    /// In-place forward of `[lat, lon, height]` rows into `[x, y, z]` rows.
    pub fn forward_batch(&self, coords: &mut [[f64; 3]]) -> Result<()> {
        for c in coords.iter_mut() {
            *c = self.forward(c[0], c[1], c[2])?.to_array();
        }
        Ok(())
    }

    /// In-place reverse of `[x, y, z]` rows into `[lat, lon, height]` rows.
    pub fn reverse_batch(&self, coords: &mut [[f64; 3]]) -> Result<()> {
        for c in coords.iter_mut() {
            *c = self.reverse(c[0], c[1], c[2])?.to_array();
        }
        Ok(())
    }
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
