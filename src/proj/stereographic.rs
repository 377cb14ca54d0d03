//! Polar Stereographic projection, as used by the Universal Polar
//! Stereographic (UPS) system north of 84°N and south of 80°S.

use crate::error::ProjError;
use crate::proj::common::{phi_from_ts, tsfn};
use crate::proj::ellipsoid::{Ellipsoid, WGS84};
use crate::proj::Projection;

/// UPS scale factor at the pole.
pub const UPS_K0: f64 = 0.994;
/// UPS false easting and false northing (metres).
pub const UPS_FALSE_ORIGIN: f64 = 2_000_000.0;

/// Polar Stereographic projection with the central meridian at 0°.
pub struct PolarStereographic {
    ellipsoid: Ellipsoid,
    north: bool,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
    // a * 2 * k0 / sqrt((1+e)^(1+e) * (1-e)^(1-e))
    akm: f64,
}

impl PolarStereographic {
    pub fn new(
        ellipsoid: Ellipsoid,
        north: bool,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let e = ellipsoid.eccentricity();
        let ep = (1.0 + e).powf(1.0 + e) * (1.0 - e).powf(1.0 - e);
        Self {
            ellipsoid,
            north,
            k0,
            false_easting,
            false_northing,
            akm: ellipsoid.a * 2.0 * k0 / ep.sqrt(),
        }
    }

    /// WGS84 UPS for the given hemisphere.
    pub fn ups(north: bool) -> Self {
        Self::new(WGS84, north, UPS_K0, UPS_FALSE_ORIGIN, UPS_FALSE_ORIGIN)
    }

    fn rho(&self, lat: f64) -> f64 {
        let lat_adj = if self.north { lat } else { -lat };
        self.akm * tsfn(lat_adj, self.ellipsoid.eccentricity())
    }
}

impl Projection for PolarStereographic {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let rho = self.rho(lat);
        let x = rho * lon.sin() + self.false_easting;
        let y = if self.north { -rho } else { rho } * lon.cos() + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let dx = x - self.false_easting;
        let dy = y - self.false_northing;

        let t = dx.hypot(dy) / self.akm;
        let lat_adj = phi_from_ts(t, self.ellipsoid.eccentricity());
        let lat = if self.north { lat_adj } else { -lat_adj };
        let lon = dx.atan2(if self.north { -dy } else { dy });

        Ok((lon, lat))
    }

    fn convergence_and_scale(&self, lon: f64, lat: f64) -> (f64, f64) {
        let gamma = if self.north { lon } else { -lon };
        let rho = self.rho(lat);
        if rho == 0.0 {
            return (gamma, self.k0);
        }
        let cos_phi = lat.cos();
        let k = rho / self.ellipsoid.a / cos_phi
            * (self.ellipsoid.e2m + self.ellipsoid.e2 * cos_phi * cos_phi).sqrt();
        (gamma, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pole_maps_to_false_origin() {
        let north = PolarStereographic::ups(true);
        let (x, y) = north.forward(0.0, 90.0_f64.to_radians()).unwrap();
        assert_relative_eq!(x, UPS_FALSE_ORIGIN, epsilon = 1e-6);
        assert_relative_eq!(y, UPS_FALSE_ORIGIN, epsilon = 1e-6);

        let south = PolarStereographic::ups(false);
        let (x, y) = south.forward(0.0, (-90.0_f64).to_radians()).unwrap();
        assert_relative_eq!(x, UPS_FALSE_ORIGIN, epsilon = 1e-6);
        assert_relative_eq!(y, UPS_FALSE_ORIGIN, epsilon = 1e-6);
    }

    #[test]
    fn test_grid_north_orientation() {
        // Grid north points along 180°E in the north zone and 0°E in the south
        let north = PolarStereographic::ups(true);
        let (x, y) = north.forward(0.0, 85.0_f64.to_radians()).unwrap();
        assert_relative_eq!(x, UPS_FALSE_ORIGIN, epsilon = 1e-6);
        assert!(y > 1_430_000.0 && y < 1_460_000.0, "northing = {y}");

        let south = PolarStereographic::ups(false);
        let (_, y) = south.forward(0.0, (-85.0_f64).to_radians()).unwrap();
        assert!(y > 2_540_000.0 && y < 2_570_000.0, "northing = {y}");
    }

    #[test]
    fn test_roundtrip() {
        for north in [true, false] {
            let ps = PolarStereographic::ups(north);
            let sign = if north { 1.0 } else { -1.0 };
            for &(lon_deg, lat_deg) in &[(0.0_f64, 85.0_f64), (45.0, 87.5), (-120.0, 81.0), (179.0, 89.0)] {
                let lon = lon_deg.to_radians();
                let lat = (sign * lat_deg).to_radians();
                let (x, y) = ps.forward(lon, lat).unwrap();
                let (lon2, lat2) = ps.inverse(x, y).unwrap();
                assert_relative_eq!(lon2, lon, epsilon = 1e-11);
                assert_relative_eq!(lat2, lat, epsilon = 1e-11);
            }
        }
    }

    #[test]
    fn test_scale_at_pole_and_convergence() {
        let ps = PolarStereographic::ups(true);
        let (gamma, k) = ps.convergence_and_scale(0.3, 90.0_f64.to_radians());
        assert_relative_eq!(gamma, 0.3);
        assert_relative_eq!(k, UPS_K0, epsilon = 1e-9);

        // Scale grows away from the pole
        let (_, k) = ps.convergence_and_scale(0.0, 84.0_f64.to_radians());
        assert!(k > UPS_K0 && k < 1.0, "k = {k}");
    }
}
