//! Common helpers for projection math (conformal latitude, angle reduction).

/// Reduce an angle in degrees to the range (-180, 180].
pub fn ang_normalize(deg: f64) -> f64 {
    let y = deg % 360.0;
    if y > 180.0 {
        y - 360.0
    } else if y <= -180.0 {
        y + 360.0
    } else {
        y
    }
}

/// Geodetic tangent τ = tan(φ) to conformal tangent τ'.
pub fn taupf(tau: f64, e: f64) -> f64 {
    let tau1 = (1.0 + tau * tau).sqrt(); // = sec(φ) = hypot(1, τ)
    let sigma = (e * (e * tau / tau1).atanh()).sinh();
    tau * (1.0 + sigma * sigma).sqrt() - sigma * tau1
}

/// Conformal tangent τ' back to geodetic tangent τ via Newton iteration.
pub fn tauf(tau_prime: f64, e: f64) -> f64 {
    let e2m = 1.0 - e * e;
    let mut tau = tau_prime / e2m;

    for _ in 0..15 {
        let tau1 = (1.0 + tau * tau).sqrt();
        let tau_prime_est = taupf(tau, e);
        let dtau = (tau_prime - tau_prime_est) * (1.0 + e2m * tau * tau)
            / (e2m * tau1 * (1.0 + tau_prime_est * tau_prime_est).sqrt());
        tau += dtau;
        if dtau.abs() < 1e-14 * (1.0 + tau.abs()) {
            break;
        }
    }
    tau
}

/// Isometric function t(φ) used by the stereographic family (Snyder 15-9).
pub fn tsfn(phi: f64, e: f64) -> f64 {
    let es = e * phi.sin();
    (std::f64::consts::FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - es) / (1.0 + es)).powf(e / 2.0)
}

/// Invert [`tsfn`] by fixed-point iteration (Snyder 7-9).
pub fn phi_from_ts(ts: f64, e: f64) -> f64 {
    let mut phi = std::f64::consts::FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..30 {
        let es = e * phi.sin();
        let next =
            std::f64::consts::FRAC_PI_2 - 2.0 * (ts * ((1.0 - es) / (1.0 + es)).powf(e / 2.0)).atan();
        let done = (next - phi).abs() < 1e-15;
        phi = next;
        if done {
            break;
        }
    }
    phi
}
