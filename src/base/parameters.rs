use super::{PnmError, Result};
use serde::{Deserialize, Serialize};

/// Holds parameters for the generation of seeds in [0,1)
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamSeed {
    /// Independent uniform draw
    Random,

    /// Minimum of the seeds of the two incident pores (throats only)
    NeighborMin,

    /// Maximum of the seeds of the two incident pores (throats only)
    NeighborMax,

    /// Mean of the seeds of the two incident pores (throats only)
    NeighborMean,
}

/// Holds parameters for statistical distributions mapping seeds to diameters
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ParamDistribution {
    /// Weibull (minimum) distribution
    ///
    /// ```text
    /// ppf(q) = loc + scale・(-ln(1 - q))^(1/shape)
    /// ```
    WeibullMin {
        /// Shape parameter (k > 0)
        shape: f64,

        /// Location parameter
        loc: f64,

        /// Scale parameter (λ > 0)
        scale: f64,
    },

    /// Uniform distribution between lower and upper
    Uniform {
        /// Lower bound
        lower: f64,

        /// Upper bound
        upper: f64,
    },
}

/// Holds parameters for the pore volume model
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamPoreVolume {
    /// Sphere with the pore diameter: V = π d³ / 6
    Sphere,

    /// Cube with side equal to the pore diameter: V = d³
    Cube,
}

/// Holds parameters for the throat volume model
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamThroatVolume {
    /// Cylinder: V = π d² L / 4
    Cylinder,

    /// Square cuboid: V = d² L
    Cuboid,
}

/// Holds parameters for the throat length model
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamThroatLength {
    /// Distance between pore centres minus the two pore radii
    Straight {
        /// Positive lower bound for lengths of nearly touching pores
        min_length: f64,
    },
}

/// Holds parameters for the geometry (stick-and-ball style) of a network
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamGeometry {
    /// Seed of the random number generator
    #[serde(default)]
    pub rng_seed: u64,

    /// Seed model for pores (only `Random` is allowed)
    pub pore_seed: ParamSeed,

    /// Seed model for throats
    pub throat_seed: ParamSeed,

    /// Distribution mapping pore seeds to pore diameters
    pub pore_diameter: ParamDistribution,

    /// Distribution mapping throat seeds to throat diameters
    pub throat_diameter: ParamDistribution,

    /// Pore volume model
    pub pore_volume: ParamPoreVolume,

    /// Throat volume model
    pub throat_volume: ParamThroatVolume,

    /// Throat length model
    pub throat_length: ParamThroatLength,
}

impl ParamGeometry {
    /// Returns the stick-and-ball parameters with Weibull distributed diameters
    pub fn sample_stick_and_ball() -> Self {
        let weibull = ParamDistribution::WeibullMin {
            shape: 2.5,
            loc: 6e-6,
            scale: 2e-5,
        };
        ParamGeometry {
            rng_seed: 0,
            pore_seed: ParamSeed::Random,
            throat_seed: ParamSeed::NeighborMin,
            pore_diameter: weibull,
            throat_diameter: weibull,
            pore_volume: ParamPoreVolume::Sphere,
            throat_volume: ParamThroatVolume::Cylinder,
            throat_length: ParamThroatLength::Straight { min_length: 1e-12 },
        }
    }

    /// Parses the parameters from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Holds parameters for viscosity models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamViscosity {
    /// Constant viscosity
    Constant { value: f64 },

    /// Reynolds model μ = uo・exp(-b・T)
    Reynolds { uo: f64, b: f64 },
}

/// Holds parameters for diffusivity models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamDiffusivity {
    /// Constant diffusivity
    Constant { value: f64 },

    /// Fuller correlation for the binary diffusion of gases A and B
    Fuller {
        /// Molecular weight of A [kg/mol]
        #[serde(alias = "MA")]
        ma: f64,

        /// Molecular weight of B [kg/mol]
        #[serde(alias = "MB")]
        mb: f64,

        /// Diffusion volume of A
        #[serde(alias = "vA")]
        va: f64,

        /// Diffusion volume of B
        #[serde(alias = "vB")]
        vb: f64,
    },
}

/// Holds parameters for molar density models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamMolarDensity {
    /// Constant molar density
    Constant { value: f64 },

    /// Ideal gas law ρ = P / (R・T)
    IdealGas {
        /// Universal gas constant
        #[serde(alias = "R")]
        r: f64,
    },
}

/// Holds parameters for surface tension models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamSurfaceTension {
    /// Constant surface tension
    Constant { value: f64 },

    /// Eötvös rule σ = k・(Tc - T) / Vm^(2/3) with Vm = 1/ρm
    Eotvos { k: f64 },
}

/// Holds parameters for contact angle models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamContactAngle {
    /// Constant contact angle in degrees
    Constant { value: f64 },
}

/// Holds parameters for a fluid
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamFluid {
    /// Name of the fluid
    pub name: String,

    /// Critical pressure
    #[serde(alias = "Pc")]
    pub pc: f64,

    /// Critical temperature
    #[serde(alias = "Tc")]
    pub tc: f64,

    /// Molecular weight [kg/mol]
    #[serde(alias = "MW")]
    pub mw: f64,

    /// Viscosity model
    pub viscosity: ParamViscosity,

    /// Diffusivity model
    pub diffusivity: ParamDiffusivity,

    /// Molar density model
    pub molar_density: ParamMolarDensity,

    /// Surface tension model (wetting-sensitive fluids only)
    #[serde(default)]
    pub surface_tension: Option<ParamSurfaceTension>,

    /// Contact angle model (wetting-sensitive fluids only)
    #[serde(default)]
    pub contact_angle: Option<ParamContactAngle>,
}

impl ParamFluid {
    /// Returns the parameters for air diffusing oxygen
    pub fn sample_air() -> Self {
        ParamFluid {
            name: "air".to_string(),
            pc: 3.771e6,
            tc: 132.65,
            mw: 0.0291,
            viscosity: ParamViscosity::Reynolds { uo: 0.001, b: 0.1 },
            diffusivity: ParamDiffusivity::Fuller {
                ma: 0.03199,
                mb: 0.0291,
                va: 16.3,
                vb: 19.7,
            },
            molar_density: ParamMolarDensity::IdealGas { r: 8.314 },
            surface_tension: None,
            contact_angle: None,
        }
    }

    /// Returns the parameters for water on a hydrophobic solid
    pub fn sample_water() -> Self {
        ParamFluid {
            name: "water".to_string(),
            pc: 2.206e6,
            tc: 647.0,
            mw: 0.0181,
            viscosity: ParamViscosity::Constant { value: 0.001 },
            diffusivity: ParamDiffusivity::Constant { value: 1e-12 },
            molar_density: ParamMolarDensity::Constant { value: 44445.0 },
            surface_tension: Some(ParamSurfaceTension::Constant { value: 0.072 }),
            contact_angle: Some(ParamContactAngle::Constant { value: 110.0 }),
        }
    }

    /// Parses the parameters from a JSON string
    ///
    /// Unknown method names or missing fields yield a configuration error.
    pub fn from_json(json: &str) -> Result<Self> {
        let param: ParamFluid = serde_json::from_str(json)?;
        if param.name.is_empty() {
            return Err(PnmError::config("fluid name must not be empty"));
        }
        Ok(param)
    }
}

/// Holds parameters for capillary entry pressure models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamCapillaryPressure {
    /// Washburn (straight cylinder) model
    Washburn,

    /// Purcell toroidal meniscus model
    Purcell {
        /// Radius of the toroid describing the throat walls
        r_toroid: f64,
    },
}

/// Holds parameters for hydraulic conductance models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamHydraulicConductance {
    /// Hagen-Poiseuille flow in a cylinder
    HagenPoiseuille,
}

/// Holds parameters for diffusive conductance models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ParamDiffusiveConductance {
    /// Bulk diffusion through the throat cross-section
    BulkDiffusion,
}

/// Holds parameters for the pore-scale physics of one fluid
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamPhysics {
    /// Capillary entry pressure model (invading fluids only)
    #[serde(default)]
    pub capillary_pressure: Option<ParamCapillaryPressure>,

    /// Hydraulic conductance model
    pub hydraulic_conductance: ParamHydraulicConductance,

    /// Diffusive conductance model
    pub diffusive_conductance: ParamDiffusiveConductance,
}

impl ParamPhysics {
    /// Returns the standard physics for water with the Purcell entry pressure
    pub fn sample_standard_water() -> Self {
        ParamPhysics {
            capillary_pressure: Some(ParamCapillaryPressure::Purcell { r_toroid: 1e-5 }),
            hydraulic_conductance: ParamHydraulicConductance::HagenPoiseuille,
            diffusive_conductance: ParamDiffusiveConductance::BulkDiffusion,
        }
    }

    /// Returns the standard physics for air (no entry pressure)
    pub fn sample_standard_air() -> Self {
        ParamPhysics {
            capillary_pressure: None,
            hydraulic_conductance: ParamHydraulicConductance::HagenPoiseuille,
            diffusive_conductance: ParamDiffusiveConductance::BulkDiffusion,
        }
    }

    /// Parses the parameters from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluid_recipe_from_json_works() {
        let json = r#"{
            "name": "air",
            "Pc": 3.771e6,
            "Tc": 132.65,
            "MW": 0.0291,
            "diffusivity": {"method": "fuller", "MA": 0.03199, "MB": 0.0291, "vA": 16.3, "vB": 19.7},
            "viscosity": {"method": "reynolds", "uo": 0.001, "b": 0.1},
            "molar_density": {"method": "ideal_gas", "R": 8.314}
        }"#;
        let param = ParamFluid::from_json(json).unwrap();
        assert_eq!(param, ParamFluid::sample_air());
    }

    #[test]
    fn unknown_method_is_a_configuration_error() {
        let json = r#"{
            "name": "water",
            "pc": 2.206e6,
            "tc": 647.0,
            "mw": 0.0181,
            "diffusivity": {"method": "constant", "value": 1e-12},
            "viscosity": {"method": "sutherland", "value": 0.001},
            "molar_density": {"method": "constant", "value": 44445.0}
        }"#;
        let err = ParamFluid::from_json(json).unwrap_err();
        assert!(err.is_configuration());

        let err = ParamPhysics::from_json(r#"{"hydraulic_conductance": {"method": "hagen_poiseuille"}}"#).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn empty_fluid_name_is_captured() {
        let mut param = ParamFluid::sample_water();
        param.name = String::new();
        let json = serde_json::to_string(&param).unwrap();
        assert_eq!(
            ParamFluid::from_json(&json).err().map(|e| e.to_string()),
            Some("configuration error: fluid name must not be empty".to_string())
        );
    }

    #[test]
    fn geometry_recipe_from_json_works() {
        let json = r#"{
            "pore_seed": {"method": "random"},
            "throat_seed": {"method": "neighbor_min"},
            "pore_diameter": {"name": "weibull_min", "shape": 2.5, "loc": 6e-6, "scale": 2e-5},
            "throat_diameter": {"name": "weibull_min", "shape": 2.5, "loc": 6e-6, "scale": 2e-5},
            "pore_volume": {"method": "sphere"},
            "throat_volume": {"method": "cylinder"},
            "throat_length": {"method": "straight", "min_length": 1e-12}
        }"#;
        let param = ParamGeometry::from_json(json).unwrap();
        assert_eq!(param, ParamGeometry::sample_stick_and_ball());
    }

    #[test]
    fn physics_recipe_from_json_works() {
        let json = r#"{
            "capillary_pressure": {"method": "purcell", "r_toroid": 1e-5},
            "hydraulic_conductance": {"method": "hagen_poiseuille"},
            "diffusive_conductance": {"method": "bulk_diffusion"}
        }"#;
        assert_eq!(ParamPhysics::from_json(json).unwrap(), ParamPhysics::sample_standard_water());
        let json = r#"{
            "hydraulic_conductance": {"method": "hagen_poiseuille"},
            "diffusive_conductance": {"method": "bulk_diffusion"}
        }"#;
        assert_eq!(ParamPhysics::from_json(json).unwrap(), ParamPhysics::sample_standard_air());
    }
}
