use super::{calc_diffusive_conductance, calc_entry_pressure, calc_hydraulic_conductance};
use crate::base::{ParamPhysics, PnmError, Result};
use crate::fluids::{Fluid, FluidProperties};
use crate::geometry::Geometry;
use crate::network::Network;
use rayon::prelude::*;

/// Holds the pore-scale transport coefficients of one fluid
///
/// All values are computed once per throat at construction and cannot be modified.
#[derive(Clone, Debug)]
pub struct Physics {
    /// Name of the fluid
    fluid_name: String,

    /// Capillary entry pressure of each throat (if modelled)
    entry_pressure: Option<Vec<f64>>,

    /// Hydraulic conductance of each throat
    hydraulic_conductance: Vec<f64>,

    /// Diffusive conductance of each throat
    diffusive_conductance: Vec<f64>,
}

impl Physics {
    /// Allocates a new instance and evaluates the models for every throat
    pub fn new(network: &Network, geometry: &Geometry, fluid: &Fluid, param: &ParamPhysics) -> Result<Self> {
        if geometry.n_pores() != network.n_pores() || geometry.n_throats() != network.n_throats() {
            return Err(PnmError::config("geometry does not match the network"));
        }
        let radii: Vec<f64> = geometry.throats().iter().map(|t| t.radius()).collect();
        let lengths: Vec<f64> = geometry.throats().iter().map(|t| t.length).collect();
        Physics::from_throats(fluid.name(), fluid.properties(), &radii, &lengths, param)
    }

    /// Allocates a new instance from throat radii and lengths
    ///
    /// # Errors
    ///
    /// A physics error identifies the first throat with a non-positive radius, length,
    /// viscosity, or diffusivity.
    pub fn from_throats(
        fluid_name: &str,
        props: &FluidProperties,
        radii: &[f64],
        lengths: &[f64],
        param: &ParamPhysics,
    ) -> Result<Self> {
        if radii.len() != lengths.len() {
            return Err(PnmError::config("the numbers of throat radii and lengths differ"));
        }
        let wetting = match param.capillary_pressure {
            Some(model) => {
                let sigma = props.surface_tension.ok_or_else(|| {
                    PnmError::config(format!("capillary pressure requires the surface tension of {}", fluid_name))
                })?;
                let theta = props.contact_angle.ok_or_else(|| {
                    PnmError::config(format!("capillary pressure requires the contact angle of {}", fluid_name))
                })?;
                Some((model, sigma, theta))
            }
            None => None,
        };
        let (mu, dab) = (props.viscosity, props.diffusivity);
        let values = radii
            .par_iter()
            .zip(lengths.par_iter())
            .enumerate()
            .map(|(t, (&r, &len))| {
                if !(r > 0.0) {
                    return Err(PnmError::throat_physics(t, format!("radius {:e} must be > 0.0", r)));
                }
                if !(len > 0.0) {
                    return Err(PnmError::throat_physics(t, format!("length {:e} must be > 0.0", len)));
                }
                if !(mu > 0.0) {
                    return Err(PnmError::throat_physics(t, format!("viscosity {:e} must be > 0.0", mu)));
                }
                if !(dab > 0.0) {
                    return Err(PnmError::throat_physics(t, format!("diffusivity {:e} must be > 0.0", dab)));
                }
                let pc = match wetting {
                    Some((model, sigma, theta)) => calc_entry_pressure(&model, r, sigma, theta),
                    None => f64::NAN,
                };
                let gh = calc_hydraulic_conductance(&param.hydraulic_conductance, r, len, mu);
                let gd = calc_diffusive_conductance(&param.diffusive_conductance, r, len, dab);
                Ok((pc, gh, gd))
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>>>()?;
        let physics = Physics {
            fluid_name: fluid_name.to_string(),
            entry_pressure: wetting.map(|_| values.iter().map(|v| v.0).collect()),
            hydraulic_conductance: values.iter().map(|v| v.1).collect(),
            diffusive_conductance: values.iter().map(|v| v.2).collect(),
        };
        log::info!(
            "physics of {} evaluated for {} throats (entry pressure: {})",
            physics.fluid_name,
            values.len(),
            physics.entry_pressure.is_some()
        );
        Ok(physics)
    }

    /// Returns the name of the fluid
    pub fn fluid_name(&self) -> &str {
        &self.fluid_name
    }

    /// Returns the capillary entry pressures, if modelled
    pub fn entry_pressure(&self) -> Option<&[f64]> {
        self.entry_pressure.as_deref()
    }

    /// Returns the hydraulic conductances
    pub fn hydraulic_conductance(&self) -> &[f64] {
        &self.hydraulic_conductance
    }

    /// Returns the diffusive conductances
    pub fn diffusive_conductance(&self) -> &[f64] {
        &self.diffusive_conductance
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
