//! Pnmsim simulates capillary drainage in pore networks
//!
//! A simulation builds a cubic lattice of pores and throats, assigns random sizes to the
//! pores and then to the throats, resolves the fluid properties from correlations, derives
//! the throat entry pressures and conductances, and finally runs ordinary percolation
//! (with optional trapping) to obtain the capillary pressure curve.
//!
//! # Example
//!
//! ```
//! use pnmsim::prelude::*;
//! use pnmsim::Result;
//!
//! fn main() -> Result<()> {
//!     let mut cubic = Cubic::new([4, 4, 4], &[1e-4])?;
//!     cubic.boundary(BoundaryRule::new(Axis::X, Side::Below, 5e-5, Label::Inlet));
//!     let network = cubic.generate()?;
//!     let geometry = Geometry::new(&network, &ParamGeometry::sample_stick_and_ball())?;
//!     let air = Fluid::new(&ParamFluid::sample_air(), ThermoState::default())?;
//!     let water = Fluid::new(&ParamFluid::sample_water(), ThermoState::default())?;
//!     let physics = Physics::new(&network, &geometry, &water, &ParamPhysics::sample_standard_water())?;
//!     let mut alg = OrdinaryPercolation::new(&network, &geometry, &physics, &air)?;
//!     alg.set_inlets(&network.pores_with(&Label::Inlet))?;
//!     let drainage = alg.run(&Thresholds::Linear { npts: 25 })?;
//!     assert_eq!(drainage.curve().len(), 25);
//!     Ok(())
//! }
//! ```

pub mod algorithms;
pub mod base;
pub mod fluids;
pub mod geometry;
pub mod network;
pub mod physics;
pub mod prelude;

pub use crate::base::{PnmError, Result};
