pub mod common;
pub mod ellipsoid;
pub mod stereographic;
pub mod transverse_mercator;

use crate::error::ProjError;

/// Conformal grid projection used by the UTM/UPS system.
///
/// Angles are radians; grid coordinates are metres including false origin.
pub trait Projection: Send + Sync {
    /// (lon, lat) -> (easting, northing)
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError>;

    /// (easting, northing) -> (lon, lat)
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError>;

    /// Meridian convergence γ and point scale k at (lon, lat).
    fn convergence_and_scale(&self, lon: f64, lat: f64) -> (f64, f64);
}
