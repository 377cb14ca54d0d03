//! UTM/UPS projection on WGS84.
//!
//! Zone selection follows the standard convention: 6° longitude bands,
//! the Norway and Svalbard exceptions, and UPS (zone 0) for latitudes at or
//! above 84°N or below 80°S.
//!
//! [`utm_reverse`] takes the zone and hemisphere of the inverse from a hint
//! point `(lat, lon)` near the true location, because every `(x, y)` is a
//! valid coordinate in every zone. [`utm_forward_zoned`] and
//! [`utm_reverse_zoned`] carry zone and hemisphere explicitly instead.

use crate::error::{check_finite, GeoError, ProjError, Result};
use crate::point::{GeodeticPoint, UtmPoint};
use crate::proj::common::ang_normalize;
use crate::proj::stereographic::PolarStereographic;
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::Projection;

/// Zone of the UTM/UPS system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UtmZone {
    /// Universal Polar Stereographic, zone number 0.
    Ups,
    /// Transverse Mercator zone 1..=60.
    Utm(u8),
}

impl UtmZone {
    pub fn number(self) -> i32 {
        match self {
            UtmZone::Ups => 0,
            UtmZone::Utm(zone) => i32::from(zone),
        }
    }

    pub fn from_number(zone: i32) -> Result<Self> {
        match zone {
            0 => Ok(UtmZone::Ups),
            1..=60 => Ok(UtmZone::Utm(zone as u8)),
            _ => Err(ProjError::InvalidParameter(format!("zone {zone} not in [0, 60]")).into()),
        }
    }

    /// Reject `Utm` zones outside 1..=60.
    fn checked(self) -> Result<Self> {
        match self {
            UtmZone::Utm(zone) if !(1..=60).contains(&zone) => {
                Err(ProjError::InvalidParameter(format!("UTM zone {zone} not in [1, 60]")).into())
            }
            _ => Ok(self),
        }
    }

    fn projection(self, north: bool) -> Box<dyn Projection> {
        match self {
            UtmZone::Ups => Box::new(PolarStereographic::ups(north)),
            UtmZone::Utm(zone) => Box::new(TransverseMercator::utm_zone(zone, north)),
        }
    }

    /// Valid easting/northing window with a 100 km margin.
    fn limits(self, north: bool) -> (f64, f64, f64, f64) {
        match (self, north) {
            (UtmZone::Ups, true) => (1_200_000.0, 2_800_000.0, 1_200_000.0, 2_800_000.0),
            (UtmZone::Ups, false) => (700_000.0, 3_300_000.0, 700_000.0, 3_300_000.0),
            (UtmZone::Utm(_), true) => (0.0, 1_000_000.0, -100_000.0, 9_600_000.0),
            (UtmZone::Utm(_), false) => (0.0, 1_000_000.0, 900_000.0, 10_100_000.0),
        }
    }
}

/// Projected coordinate together with the zone it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UtmCoordinate {
    pub zone: UtmZone,
    pub north: bool,
    pub easting: f64,
    pub northing: f64,
    /// Meridian convergence in degrees.
    pub convergence: f64,
    pub scale: f64,
}

/// Geographic position recovered from a zoned UTM/UPS coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UtmReverse {
    pub lat: f64,
    pub lon: f64,
    /// Meridian convergence in degrees.
    pub convergence: f64,
    pub scale: f64,
}

/// Standard UTM/UPS zone for a point.
pub fn standard_zone(lat: f64, lon: f64) -> Result<UtmZone> {
    let p = GeodeticPoint::new(lat, lon, 0.0).normalized()?;

    let ilat = p.lat.floor() as i32;
    if !(-80..84).contains(&ilat) {
        log::trace!("latitude {lat} falls in UPS");
        return Ok(UtmZone::Ups);
    }

    let mut ilon = p.lon.floor() as i32;
    if ilon == 180 {
        ilon = -180;
    }
    let mut zone = (ilon + 186) / 6;
    let band = latitude_band(ilat);
    if band == 7 && zone == 31 && ilon >= 3 {
        // Norway
        zone = 32;
    } else if band == 9 && (0..42).contains(&ilon) {
        // Svalbard
        zone = 2 * ((ilon + 183) / 12) + 1;
    }
    Ok(UtmZone::Utm(zone as u8))
}

/// MGRS latitude band index, -10 (C) ..= 9 (X).
fn latitude_band(ilat: i32) -> i32 {
    ((ilat + 80) / 8 - 10).clamp(-10, 9)
}

/// Standard zone number: 1..=60 for UTM, 0 for UPS.
pub fn utm_standard_zone(lat: f64, lon: f64) -> Result<i32> {
    standard_zone(lat, lon).map(UtmZone::number)
}

/// Project a point into its standard zone.
pub fn utm_forward_zoned(lat: f64, lon: f64) -> Result<UtmCoordinate> {
    let zone = standard_zone(lat, lon)?;
    utm_forward_in(zone, lat >= 0.0, lat, lon)
}

/// Project a point into a caller-chosen zone and hemisphere.
pub fn utm_forward_in(zone: UtmZone, north: bool, lat: f64, lon: f64) -> Result<UtmCoordinate> {
    let zone = zone.checked()?;
    let p = GeodeticPoint::new(lat, lon, 0.0).normalized()?;
    let proj = zone.projection(north);
    let (lam, phi) = (p.lon.to_radians(), p.lat.to_radians());

    let (easting, northing) = proj.forward(lam, phi)?;
    check_coords(zone, north, easting, northing)?;
    let (gamma, scale) = proj.convergence_and_scale(lam, phi);

    Ok(UtmCoordinate {
        zone,
        north,
        easting,
        northing,
        convergence: gamma.to_degrees(),
        scale,
    })
}

/// Invert a coordinate in an explicit zone and hemisphere.
pub fn utm_reverse_zoned(zone: UtmZone, north: bool, x: f64, y: f64) -> Result<UtmReverse> {
    let zone = zone.checked()?;
    check_finite("easting", x)?;
    check_finite("northing", y)?;
    check_coords(zone, north, x, y)?;

    let proj = zone.projection(north);
    let (lam, phi) = proj.inverse(x, y)?;
    let (gamma, scale) = proj.convergence_and_scale(lam, phi);

    Ok(UtmReverse {
        lat: phi.to_degrees(),
        lon: ang_normalize(lam.to_degrees()),
        convergence: gamma.to_degrees(),
        scale,
    })
}

/// Project to easting/northing in the point's own standard zone; `z` is 0.
pub fn utm_forward(lat: f64, lon: f64) -> Result<UtmPoint> {
    let c = utm_forward_zoned(lat, lon)?;
    Ok(UtmPoint {
        x: c.easting,
        y: c.northing,
        z: 0.0,
    })
}

/// Invert `(x, y)` in the zone and hemisphere of the hint point
/// `(lat, lon)`. The returned height is 0.
pub fn utm_reverse(x: f64, y: f64, lat: f64, lon: f64) -> Result<GeodeticPoint> {
    let zone = standard_zone(lat, lon)?;
    let r = utm_reverse_zoned(zone, lat >= 0.0, x, y)?;
    Ok(GeodeticPoint::new(r.lat, r.lon, 0.0))
}

fn check_coords(zone: UtmZone, north: bool, x: f64, y: f64) -> Result<()> {
    let (min_e, max_e, min_n, max_n) = zone.limits(north);
    let hemi = if north { 'N' } else { 'S' };
    if !(min_e..=max_e).contains(&x) {
        log::debug!("easting {x} outside zone {}{hemi}", zone.number());
        return Err(GeoError::from(ProjError::OutOfRange(format!(
            "easting {x} not in [{min_e}, {max_e}] for zone {}{hemi}",
            zone.number()
        ))));
    }
    if !(min_n..=max_n).contains(&y) {
        log::debug!("northing {y} outside zone {}{hemi}", zone.number());
        return Err(GeoError::from(ProjError::OutOfRange(format!(
            "northing {y} not in [{min_n}, {max_n}] for zone {}{hemi}",
            zone.number()
        ))));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_zones() {
        assert_eq!(utm_standard_zone(0.0, 0.0).unwrap(), 31);
        assert_eq!(utm_standard_zone(37.0, -122.0).unwrap(), 10);
        assert_eq!(utm_standard_zone(40.7, -74.0).unwrap(), 18);
        assert_eq!(utm_standard_zone(-33.9, 151.0).unwrap(), 56);
        assert_eq!(utm_standard_zone(0.0, -180.0).unwrap(), 1);
        assert_eq!(utm_standard_zone(0.0, 180.0).unwrap(), 1);
        assert_eq!(utm_standard_zone(0.0, 179.9).unwrap(), 60);
    }

    #[test]
    fn test_norway_and_svalbard_exceptions() {
        assert_eq!(utm_standard_zone(60.0, 5.0).unwrap(), 32);
        assert_eq!(utm_standard_zone(60.0, 2.0).unwrap(), 31);
        assert_eq!(utm_standard_zone(78.0, 5.0).unwrap(), 31);
        assert_eq!(utm_standard_zone(78.0, 10.0).unwrap(), 33);
        assert_eq!(utm_standard_zone(78.0, 20.0).unwrap(), 33);
        assert_eq!(utm_standard_zone(78.0, 25.0).unwrap(), 35);
        assert_eq!(utm_standard_zone(78.0, 40.0).unwrap(), 37);
    }

    #[test]
    fn test_polar_latitudes_use_ups() {
        assert_eq!(utm_standard_zone(84.0, 0.0).unwrap(), 0);
        assert_eq!(utm_standard_zone(83.99, 0.0).unwrap(), 31);
        assert_eq!(utm_standard_zone(-80.0, 0.0).unwrap(), 31);
        assert_eq!(utm_standard_zone(-80.01, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_zone_range_over_grid() {
        let mut lat = -80.0;
        while lat < 84.0 {
            let mut lon = -180.0;
            while lon < 180.0 {
                let zone = utm_standard_zone(lat, lon).unwrap();
                assert!((1..=60).contains(&zone), "zone {zone} at ({lat}, {lon})");
                lon += 7.5;
            }
            lat += 5.5;
        }
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(matches!(
            utm_standard_zone(91.0, 0.0),
            Err(GeoError::InvalidArgument(_))
        ));
        assert!(utm_forward(-90.5, 0.0).is_err());
    }

    #[test]
    fn test_forward_reverse_with_hint() {
        let p = utm_forward(37.0, -122.0).unwrap();
        assert_eq!(p.z, 0.0);
        let g = utm_reverse(p.x, p.y, 37.0, -122.0).unwrap();
        assert_relative_eq!(g.lat, 37.0, epsilon = 1e-10);
        assert_relative_eq!(g.lon, -122.0, epsilon = 1e-10);
        assert_eq!(g.height, 0.0);
    }

    #[test]
    fn test_hint_selects_hemisphere() {
        // The same easting/northing means different places in the two hemispheres
        let p = utm_forward(-10.0, 15.0).unwrap();
        let south = utm_reverse(p.x, p.y, -10.0, 15.0).unwrap();
        assert_relative_eq!(south.lat, -10.0, epsilon = 1e-10);

        let north = utm_reverse(p.x, p.y, 10.0, 15.0).unwrap();
        assert!(north.lat > 70.0, "lat = {}", north.lat);
    }

    #[test]
    fn test_zoned_roundtrip_utm_and_ups() {
        for &(lat, lon) in &[(52.0, 15.0), (-33.9, 151.0), (60.0, 5.0), (86.0, 30.0), (-85.0, -60.0)] {
            let c = utm_forward_zoned(lat, lon).unwrap();
            assert_eq!(c.north, lat >= 0.0);
            let r = utm_reverse_zoned(c.zone, c.north, c.easting, c.northing).unwrap();
            assert_relative_eq!(r.lat, lat, epsilon = 1e-9);
            assert_relative_eq!(r.lon, lon, epsilon = 1e-9);
            assert_relative_eq!(r.convergence, c.convergence, epsilon = 1e-9);
            assert_relative_eq!(r.scale, c.scale, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zoned_forward_on_central_meridian() {
        let c = utm_forward_zoned(45.0, 15.0).unwrap();
        assert_eq!(c.zone, UtmZone::Utm(33));
        assert_relative_eq!(c.easting, 500_000.0, epsilon = 1e-6);
        assert_relative_eq!(c.convergence, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.scale, 0.9996, epsilon = 1e-10);
    }

    #[test]
    fn test_reverse_rejects_out_of_range() {
        assert!(matches!(
            utm_reverse_zoned(UtmZone::Utm(10), true, 2_000_000.0, 4_000_000.0),
            Err(GeoError::Projection(ProjError::OutOfRange(_)))
        ));
        assert!(utm_reverse_zoned(UtmZone::Ups, true, 0.0, 0.0).is_err());
        assert!(utm_reverse(f64::NAN, 0.0, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_forward_in_foreign_zone() {
        // Forcing a neighbouring zone still round-trips
        let c = utm_forward_in(UtmZone::Utm(32), true, 52.0, 15.0).unwrap();
        assert!(c.easting > 800_000.0);
        let r = utm_reverse_zoned(UtmZone::Utm(32), true, c.easting, c.northing).unwrap();
        assert_relative_eq!(r.lon, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zoned_calls_reject_bad_zone_numbers() {
        for zone in [UtmZone::Utm(0), UtmZone::Utm(61)] {
            assert!(matches!(
                utm_forward_in(zone, true, 0.0, -177.0),
                Err(GeoError::Projection(ProjError::InvalidParameter(_)))
            ));
            assert!(matches!(
                utm_reverse_zoned(zone, true, 500_000.0, 0.0),
                Err(GeoError::Projection(ProjError::InvalidParameter(_)))
            ));
        }
        assert!(utm_forward_in(UtmZone::Utm(1), true, 0.0, -177.0).is_ok());
    }

    #[test]
    fn test_zone_numbers() {
        assert_eq!(UtmZone::from_number(0).unwrap(), UtmZone::Ups);
        assert_eq!(UtmZone::from_number(60).unwrap().number(), 60);
        assert!(UtmZone::from_number(61).is_err());
        assert!(UtmZone::from_number(-1).is_err());
    }
}
