use super::{calc_contact_angle, calc_diffusivity, calc_molar_density, calc_surface_tension, calc_viscosity};
use crate::base::{ParamFluid, PnmError, Result, ThermoState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the resolved properties of a fluid
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct FluidProperties {
    /// Dynamic viscosity
    pub viscosity: f64,

    /// Diffusivity
    pub diffusivity: f64,

    /// Molar density
    pub molar_density: f64,

    /// Surface tension, if modelled
    pub surface_tension: Option<f64>,

    /// Contact angle in degrees, if modelled
    pub contact_angle: Option<f64>,
}

impl FluidProperties {
    /// Returns a property by name
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "viscosity" => Some(self.viscosity),
            "diffusivity" => Some(self.diffusivity),
            "molar_density" => Some(self.molar_density),
            "surface_tension" => self.surface_tension,
            "contact_angle" => self.contact_angle,
            _ => None,
        }
    }
}

/// Implements a fluid with properties resolved from correlations
///
/// The properties do not depend on the network; they are evaluated at a uniform
/// thermodynamic state and may be regenerated if the state changes.
#[derive(Clone, Debug)]
pub struct Fluid {
    /// Parameters (constants and correlation methods)
    param: ParamFluid,

    /// Thermodynamic state used to evaluate the correlations
    state: ThermoState,

    /// Resolved properties
    props: FluidProperties,
}

impl Fluid {
    /// Allocates a new instance and resolves all properties
    pub fn new(param: &ParamFluid, state: ThermoState) -> Result<Self> {
        if param.name.is_empty() {
            return Err(PnmError::config("fluid name must not be empty"));
        }
        for (value, what) in [(param.pc, "critical pressure"), (param.tc, "critical temperature"), (param.mw, "molecular weight")] {
            if !(value > 0.0) {
                return Err(PnmError::config(format!("{} of {} must be > 0.0", what, param.name)));
            }
        }
        let props = resolve(param, &state)?;
        log::info!("fluid {} resolved at {}: {:?}", param.name, state, props);
        Ok(Fluid {
            param: param.clone(),
            state,
            props,
        })
    }

    /// Re-evaluates all properties at a new thermodynamic state
    pub fn regenerate(&mut self, state: ThermoState) -> Result<()> {
        self.props = resolve(&self.param, &state)?;
        self.state = state;
        Ok(())
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.param.name
    }

    /// Returns the critical pressure
    pub fn critical_pressure(&self) -> f64 {
        self.param.pc
    }

    /// Returns the critical temperature
    pub fn critical_temperature(&self) -> f64 {
        self.param.tc
    }

    /// Returns the molecular weight
    pub fn molecular_weight(&self) -> f64 {
        self.param.mw
    }

    /// Returns the thermodynamic state
    pub fn state(&self) -> &ThermoState {
        &self.state
    }

    /// Returns the resolved properties
    pub fn properties(&self) -> &FluidProperties {
        &self.props
    }
}

impl fmt::Display for Fluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}\n", self.param.name, self.state)?;
        write!(f, "viscosity = {:e}\n", self.props.viscosity)?;
        write!(f, "diffusivity = {:e}\n", self.props.diffusivity)?;
        write!(f, "molar_density = {:e}\n", self.props.molar_density)?;
        if let Some(sigma) = self.props.surface_tension {
            write!(f, "surface_tension = {:e}\n", sigma)?;
        }
        if let Some(theta) = self.props.contact_angle {
            write!(f, "contact_angle = {:?}\n", theta)?;
        }
        Ok(())
    }
}

/// Evaluates every correlation; the surface tension may depend on the molar density
fn resolve(param: &ParamFluid, state: &ThermoState) -> Result<FluidProperties> {
    let viscosity = calc_viscosity(&param.viscosity, state)?;
    let diffusivity = calc_diffusivity(&param.diffusivity, state)?;
    let molar_density = calc_molar_density(&param.molar_density, state)?;
    let surface_tension = match &param.surface_tension {
        Some(p) => Some(calc_surface_tension(p, state, param.tc, molar_density)?),
        None => None,
    };
    let contact_angle = match &param.contact_angle {
        Some(p) => Some(calc_contact_angle(p)?),
        None => None,
    };
    Ok(FluidProperties {
        viscosity,
        diffusivity,
        molar_density,
        surface_tension,
        contact_angle,
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
