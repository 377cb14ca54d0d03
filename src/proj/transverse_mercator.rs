//! Ellipsoidal transverse Mercator after Karney (2011): Krüger series to
//! order n⁶, with meridian convergence and point scale. Every UTM zone is
//! one of these.

use crate::error::ProjError;
use crate::proj::common::{taupf, tauf};
use crate::proj::ellipsoid::{Ellipsoid, WGS84};
use crate::proj::Projection;

/// UTM central scale factor.
pub const UTM_K0: f64 = 0.9996;
/// UTM false easting (metres).
pub const UTM_FALSE_EASTING: f64 = 500_000.0;
/// UTM false northing for the southern hemisphere (metres).
pub const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    lon0: f64,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
    /// Rectifying radius a/(1+n) (1 + n²/4 + n⁴/64).
    a_hat: f64,
    alpha: [f64; 6],
    beta: [f64; 6],
}

impl TransverseMercator {
    /// Projection with origin latitude on the equator.
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let n = ellipsoid.n;
        let n2 = n * n;
        let n4 = n2 * n2;
        let a_hat = ellipsoid.a / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);

        Self {
            ellipsoid,
            lon0,
            k0,
            false_easting,
            false_northing,
            a_hat,
            alpha: Self::alpha_coefficients(n),
            beta: Self::beta_coefficients(n),
        }
    }

    /// WGS84 UTM zone `zone` (1..=60).
    pub fn utm_zone(zone: u8, north: bool) -> Self {
        let false_northing = if north { 0.0 } else { UTM_FALSE_NORTHING_SOUTH };
        Self::new(
            WGS84,
            utm_central_meridian(zone).to_radians(),
            UTM_K0,
            UTM_FALSE_EASTING,
            false_northing,
        )
    }

    /// Forward series coefficients α₁..α₆ (Krüger, 6th order).
    fn alpha_coefficients(n: f64) -> [f64; 6] {
        let [n2, n3, n4, n5, n6] = powers(n);
        [
            n / 2.0 - 2.0 / 3.0 * n2 + 5.0 / 16.0 * n3 + 41.0 / 180.0 * n4 - 127.0 / 288.0 * n5
                + 7891.0 / 37800.0 * n6,
            13.0 / 48.0 * n2 - 3.0 / 5.0 * n3 + 557.0 / 1440.0 * n4 + 281.0 / 630.0 * n5
                - 1983433.0 / 1935360.0 * n6,
            61.0 / 240.0 * n3 - 103.0 / 140.0 * n4
                + 15061.0 / 26880.0 * n5
                + 167603.0 / 181440.0 * n6,
            49561.0 / 161280.0 * n4 - 179.0 / 168.0 * n5 + 6601661.0 / 7257600.0 * n6,
            34729.0 / 80640.0 * n5 - 3418889.0 / 1995840.0 * n6,
            212378941.0 / 319334400.0 * n6,
        ]
    }

    /// Inverse series coefficients β₁..β₆ (Krüger, 6th order).
    fn beta_coefficients(n: f64) -> [f64; 6] {
        let [n2, n3, n4, n5, n6] = powers(n);
        [
            n / 2.0 - 2.0 / 3.0 * n2 + 37.0 / 96.0 * n3 - 1.0 / 360.0 * n4 - 81.0 / 512.0 * n5
                + 96199.0 / 604800.0 * n6,
            1.0 / 48.0 * n2 + 1.0 / 15.0 * n3 - 437.0 / 1440.0 * n4 + 46.0 / 105.0 * n5
                - 1118711.0 / 3870720.0 * n6,
            17.0 / 480.0 * n3 - 37.0 / 840.0 * n4 - 209.0 / 4480.0 * n5 + 5569.0 / 90720.0 * n6,
            4397.0 / 161280.0 * n4 - 11.0 / 504.0 * n5 - 830251.0 / 7257600.0 * n6,
            4583.0 / 161280.0 * n5 - 108847.0 / 3991680.0 * n6,
            20648693.0 / 638668800.0 * n6,
        ]
    }

    /// Gauss-Schreiber coordinates (ξ', η') of a point on the conformal sphere,
    /// together with the geodetic and conformal tangents.
    fn conformal_coords(&self, lon: f64, lat: f64) -> (f64, f64, f64, f64, f64) {
        let dlam = lon - self.lon0;
        let e = self.ellipsoid.eccentricity();

        let tau = lat.tan();
        let tau_prime = taupf(tau, e);
        let cos_lam = dlam.cos().max(0.0);

        let xi_prime = tau_prime.atan2(cos_lam);
        let eta_prime = (dlam.sin() / tau_prime.hypot(cos_lam)).asinh();
        (xi_prime, eta_prime, tau, tau_prime, dlam)
    }
}

fn powers(n: f64) -> [f64; 5] {
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;
    [n2, n3, n4, n4 * n, n4 * n2]
}

/// Central meridian of a UTM zone in degrees.
pub fn utm_central_meridian(zone: u8) -> f64 {
    f64::from(zone) * 6.0 - 183.0
}

/// Σ c_j sin(2jξ) cosh(2jη) and Σ c_j cos(2jξ) sinh(2jη), the real and
/// imaginary parts of Σ c_j sin(2jζ) for ζ = ξ + iη.
fn sin_series(coeffs: &[f64; 6], xi: f64, eta: f64) -> (f64, f64) {
    coeffs
        .iter()
        .zip(1u32..)
        .fold((0.0, 0.0), |(re, im), (&c, j)| {
            let m = 2.0 * f64::from(j);
            (
                re + c * (m * xi).sin() * (m * eta).cosh(),
                im + c * (m * xi).cos() * (m * eta).sinh(),
            )
        })
}

impl Projection for TransverseMercator {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let (xi_p, eta_p, _, _, _) = self.conformal_coords(lon, lat);
        let (dxi, deta) = sin_series(&self.alpha, xi_p, eta_p);

        let scale = self.k0 * self.a_hat;
        Ok((
            self.false_easting + scale * (eta_p + deta),
            self.false_northing + scale * (xi_p + dxi),
        ))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let scale = self.k0 * self.a_hat;
        let xi = (y - self.false_northing) / scale;
        let eta = (x - self.false_easting) / scale;

        let (dxi, deta) = sin_series(&self.beta, xi, eta);
        let (xi_p, eta_p) = (xi - dxi, eta - deta);

        let (sinh_eta, cos_xi) = (eta_p.sinh(), xi_p.cos());
        let tau_p = xi_p.sin() / sinh_eta.hypot(cos_xi);
        let phi = tauf(tau_p, self.ellipsoid.eccentricity()).atan();

        Ok((self.lon0 + sinh_eta.atan2(cos_xi), phi))
    }

    fn convergence_and_scale(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (xi_p, eta_p, tau, tau_p, dlam) = self.conformal_coords(lon, lat);
        let cos_lam = dlam.cos().max(0.0);
        let e2 = self.ellipsoid.e2;
        let cos_phi2 = 1.0 / (1.0 + tau * tau);

        // Gauss-Schreiber convergence and scale
        let gamma = (dlam.sin() * tau_p).atan2(cos_lam * tau_p.hypot(1.0));
        let k = (self.ellipsoid.e2m + e2 * cos_phi2).sqrt() * tau.hypot(1.0) / tau_p.hypot(cos_lam);

        // dζ/dζ' = 1 + Σ 2jα_j cos(2jζ')
        let (re, im) = self.alpha.iter().zip(1u32..).fold((1.0, 0.0), |(re, im), (&a, j)| {
            let m = 2.0 * f64::from(j);
            (
                re + m * a * (m * xi_p).cos() * (m * eta_p).cosh(),
                im - m * a * (m * xi_p).sin() * (m * eta_p).sinh(),
            )
        });

        let b1 = self.a_hat / self.ellipsoid.a;
        (gamma - im.atan2(re), self.k0 * k * b1 * re.hypot(im))
    }
}
