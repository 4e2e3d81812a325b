use crate::base::{ParamContactAngle, ParamDiffusivity, ParamMolarDensity, ParamSurfaceTension, ParamViscosity};
use crate::base::{PnmError, Result, ThermoState};

/// Calculates the viscosity
///
/// ```text
/// Reynolds: μ = uo・exp(-b・T)
/// ```
pub fn calc_viscosity(param: &ParamViscosity, state: &ThermoState) -> Result<f64> {
    match *param {
        ParamViscosity::Constant { value } => positive(value, "constant viscosity"),
        ParamViscosity::Reynolds { uo, b } => {
            positive(uo, "uo parameter of the Reynolds viscosity model")?;
            finite(b, "b parameter of the Reynolds viscosity model")?;
            positive(uo * f64::exp(-b * state.temperature), "viscosity from the Reynolds model")
        }
    }
}

/// Calculates the binary diffusion coefficient
///
/// The Fuller correlation uses molecular weights in kg/mol and the pressure in bar:
///
/// ```text
///                  1.43e-7・T^1.75
/// D = ———————————————————————————————————————     with    MAB = 2 / (1/MA + 1/MB)  [g/mol]
///      P・√MAB・(vA^(1/3) + vB^(1/3))²
/// ```
///
/// # Reference
///
/// * Fuller EN, Schettler PD, Giddings JC (1966) A new method for prediction of binary gas-phase
///   diffusion coefficients, Industrial & Engineering Chemistry, 58(5):18-27
pub fn calc_diffusivity(param: &ParamDiffusivity, state: &ThermoState) -> Result<f64> {
    match *param {
        ParamDiffusivity::Constant { value } => positive(value, "constant diffusivity"),
        ParamDiffusivity::Fuller { ma, mb, va, vb } => {
            positive(ma, "MA parameter of the Fuller model")?;
            positive(mb, "MB parameter of the Fuller model")?;
            positive(va, "vA parameter of the Fuller model")?;
            positive(vb, "vB parameter of the Fuller model")?;
            let mab = 2.0 / (1.0 / ma + 1.0 / mb) * 1e3;
            let p_bar = state.pressure * 1e-5;
            let sum = f64::cbrt(va) + f64::cbrt(vb);
            let value = 1.43e-7 * f64::powf(state.temperature, 1.75) / (p_bar * f64::sqrt(mab) * sum * sum);
            positive(value, "diffusivity from the Fuller model")
        }
    }
}

/// Calculates the molar density
///
/// ```text
/// IdealGas: ρm = P / (R・T)
/// ```
pub fn calc_molar_density(param: &ParamMolarDensity, state: &ThermoState) -> Result<f64> {
    match *param {
        ParamMolarDensity::Constant { value } => positive(value, "constant molar density"),
        ParamMolarDensity::IdealGas { r } => {
            positive(r, "R parameter of the ideal gas model")?;
            Ok(state.pressure / (r * state.temperature))
        }
    }
}

/// Calculates the surface tension
///
/// ```text
///                  k・(Tc - T)
/// Eötvös:    σ = ——————————————     with    Vm = 1/ρm
///                    Vm^(2/3)
/// ```
pub fn calc_surface_tension(
    param: &ParamSurfaceTension,
    state: &ThermoState,
    tc: f64,
    molar_density: f64,
) -> Result<f64> {
    match *param {
        ParamSurfaceTension::Constant { value } => positive(value, "constant surface tension"),
        ParamSurfaceTension::Eotvos { k } => {
            positive(k, "k parameter of the Eötvös model")?;
            if state.temperature >= tc {
                return Err(PnmError::config(format!(
                    "the Eötvös model requires T < Tc; T = {:?} and Tc = {:?}",
                    state.temperature, tc
                )));
            }
            let vm = 1.0 / molar_density;
            Ok(k * (tc - state.temperature) / f64::powf(vm, 2.0 / 3.0))
        }
    }
}

/// Calculates the contact angle in degrees
pub fn calc_contact_angle(param: &ParamContactAngle) -> Result<f64> {
    match *param {
        ParamContactAngle::Constant { value } => {
            if !(value >= 0.0 && value <= 180.0) {
                return Err(PnmError::config(format!(
                    "contact angle must be in [0, 180] degrees; {:?} was given",
                    value
                )));
            }
            Ok(value)
        }
    }
}

fn positive(value: f64, what: &str) -> Result<f64> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(PnmError::config(format!("{} must be > 0.0; {:?} was given", what, value)));
    }
    Ok(value)
}

fn finite(value: f64, what: &str) -> Result<f64> {
    if !value.is_finite() {
        return Err(PnmError::config(format!("{} must be finite", what)));
    }
    Ok(value)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
