use crate::error::{GeoError, Result};

/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// 1 - e^2
    pub e2m: f64,
    /// Third flattening: f / (2 - f)
    pub n: f64,
}

impl Ellipsoid {
    /// Build an ellipsoid without validation, usable in const contexts.
    pub const fn new(a: f64, f: f64) -> Self {
        let e2 = 2.0 * f - f * f;
        Self {
            a,
            f,
            b: a * (1.0 - f),
            e2,
            e2m: 1.0 - e2,
            n: f / (2.0 - f),
        }
    }

    /// Build an ellipsoid from user-supplied parameters.
    ///
    /// Oblate and prolate ellipsoids are both accepted as long as the
    /// semi-major axis is positive and the flattening is below 1.
    pub fn try_new(a: f64, f: f64) -> Result<Self> {
        if !a.is_finite() || a <= 0.0 {
            return Err(GeoError::InvalidArgument(format!(
                "semi-major axis must be positive, got {a}"
            )));
        }
        if !f.is_finite() || f >= 1.0 {
            return Err(GeoError::InvalidArgument(format!(
                "flattening must be below 1, got {f}"
            )));
        }
        Ok(Self::new(a, f))
    }

    /// First eccentricity. Signed for prolate ellipsoids (e^2 < 0).
    pub fn eccentricity(&self) -> f64 {
        self.e2.signum() * self.e2.abs().sqrt()
    }

    /// Prime vertical radius of curvature at geodetic latitude `phi` (radians).
    pub fn prime_vertical_radius(&self, phi: f64) -> f64 {
        let s = phi.sin();
        self.a / (1.0 - self.e2 * s * s).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);
