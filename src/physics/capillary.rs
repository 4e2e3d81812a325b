use crate::base::ParamCapillaryPressure;

/// Calculates the capillary entry pressure of a throat
///
/// # Input
///
/// * `model` -- the entry pressure model
/// * `radius` -- throat radius (> 0)
/// * `sigma` -- interfacial tension
/// * `theta` -- contact angle in degrees
///
/// # Washburn
///
/// ```text
///        -2 σ cos(θ)
/// Pc = ——————————————
///            r
/// ```
///
/// # Purcell
///
/// The throat walls are a toroid of radius R. The meniscus reaches its maximum curvature
/// at the filling angle α given by:
///
/// ```text
/// α = θ - 180° + asin(sin(θ) / (1 + r/R))
///
///        -2 σ         cos(θ - α)
/// Pc = ——————— ・ ———————————————————————
///         r        1 + (R/r)・(1 - cos α)
/// ```
///
/// # Reference
///
/// * Purcell WR (1950) Interpretation of capillary pressure data,
///   Journal of Petroleum Technology, 2(8):11-12
pub fn calc_entry_pressure(model: &ParamCapillaryPressure, radius: f64, sigma: f64, theta: f64) -> f64 {
    let th = theta.to_radians();
    match *model {
        ParamCapillaryPressure::Washburn => -2.0 * sigma * f64::cos(th) / radius,
        ParamCapillaryPressure::Purcell { r_toroid } => {
            let alpha = th - std::f64::consts::PI + f64::asin(f64::sin(th) / (1.0 + radius / r_toroid));
            let den = 1.0 + (r_toroid / radius) * (1.0 - f64::cos(alpha));
            (-2.0 * sigma / radius) * f64::cos(th - alpha) / den
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
