use crate::base::{ParamDiffusiveConductance, ParamHydraulicConductance};
use std::f64::consts::PI;

/// Calculates the hydraulic conductance of a throat
///
/// ```text
///         π r⁴
/// gh = ——————————      (Hagen-Poiseuille)
///       8 μ L
/// ```
pub fn calc_hydraulic_conductance(model: &ParamHydraulicConductance, radius: f64, length: f64, viscosity: f64) -> f64 {
    match model {
        ParamHydraulicConductance::HagenPoiseuille => PI * f64::powi(radius, 4) / (8.0 * viscosity * length),
    }
}

/// Calculates the diffusive conductance of a throat
///
/// ```text
///       D A
/// gd = —————     with    A = π r²      (bulk diffusion)
///        L
/// ```
pub fn calc_diffusive_conductance(model: &ParamDiffusiveConductance, radius: f64, length: f64, diffusivity: f64) -> f64 {
    match model {
        ParamDiffusiveConductance::BulkDiffusion => diffusivity * PI * radius * radius / length,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{calc_diffusive_conductance, calc_hydraulic_conductance};
    use crate::base::{ParamDiffusiveConductance, ParamHydraulicConductance};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn hagen_poiseuille_works() {
        let model = ParamHydraulicConductance::HagenPoiseuille;
        let g = calc_hydraulic_conductance(&model, 1e-5, 1e-4, 1e-3);
        assert_relative_eq!(g, PI * 1e-20 / (8.0 * 1e-3 * 1e-4), max_relative = 1e-14);
        // doubling the radius multiplies the conductance by 16
        let g2 = calc_hydraulic_conductance(&model, 2e-5, 1e-4, 1e-3);
        assert_relative_eq!(g2 / g, 16.0, max_relative = 1e-14);
    }

    #[test]
    fn bulk_diffusion_works() {
        let model = ParamDiffusiveConductance::BulkDiffusion;
        let g = calc_diffusive_conductance(&model, 1e-5, 1e-4, 2e-5);
        assert_relative_eq!(g, 2e-5 * PI * 1e-10 / 1e-4, max_relative = 1e-14);
        let g2 = calc_diffusive_conductance(&model, 1e-5, 2e-4, 2e-5);
        assert_relative_eq!(g / g2, 2.0, max_relative = 1e-14);
    }
}
