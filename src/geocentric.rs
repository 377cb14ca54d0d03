//! Geodetic <-> Earth-centred Earth-fixed (ECEF) conversion.

use crate::point::GeodeticPoint;
use std::f64::consts::FRAC_PI_2;

use crate::proj::ellipsoid::Ellipsoid;

const MAX_ITERATIONS: usize = 20;

/// ECEF coordinates in metres.
pub type Ecef = [f64; 3];

/// Convert geodetic degrees/metres to ECEF.
pub fn geodetic_to_ecef(ellipsoid: &Ellipsoid, p: &GeodeticPoint) -> Ecef {
    let (sin_lat, cos_lat) = p.lat.to_radians().sin_cos();
    let (sin_lon, cos_lon) = p.lon.to_radians().sin_cos();

    let n = ellipsoid.prime_vertical_radius(p.lat.to_radians());
    let r = (n + p.height) * cos_lat;

    [
        r * cos_lon,
        r * sin_lon,
        (n * ellipsoid.e2m + p.height) * sin_lat,
    ]
}

/// Convert ECEF to geodetic degrees/metres.
///
/// Latitude is the root of `g(φ) = p sin φ - z cos φ - e² N sin φ cos φ`,
/// found by Newton's method. The start value is exact on the surface and
/// `g'` is close to the meridian radius there, so convergence is quadratic
/// for any flattening. Height uses the form that stays well conditioned at
/// the poles.
pub fn ecef_to_geodetic(ellipsoid: &Ellipsoid, ecef: &Ecef) -> GeodeticPoint {
    let [x, y, z] = *ecef;
    let p = x.hypot(y);
    let (a, e2) = (ellipsoid.a, ellipsoid.e2);

    let mut lat = z.atan2(p * ellipsoid.e2m);
    for _ in 0..MAX_ITERATIONS {
        let (s, c) = lat.sin_cos();
        let w2 = 1.0 - e2 * s * s;
        let w = w2.sqrt();
        let g = p * s - z * c - e2 * a * s * c / w;
        let dg = p * c + z * s - e2 * a * ((c * c - s * s) / w + e2 * s * s * c * c / (w * w2));
        if dg == 0.0 {
            break;
        }
        let step = g / dg;
        lat = (lat - step).clamp(-FRAC_PI_2, FRAC_PI_2);
        if step.abs() < 1e-15 {
            break;
        }
    }

    let (sin_lat, cos_lat) = lat.sin_cos();
    let height = p * cos_lat + z * sin_lat - ellipsoid.a * (1.0 - e2 * sin_lat * sin_lat).sqrt();

    GeodeticPoint {
        lat: lat.to_degrees(),
        lon: y.atan2(x).to_degrees(),
        height,
    }
}
