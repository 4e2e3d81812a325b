//! Makes available common structures needed to run a simulation
//!
//! You may write `use pnmsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::algorithms::{Curve, Drainage, OrdinaryPercolation, PoreState, Thresholds};
pub use crate::base::{Axis, BoundaryRule, Label, Side, ThermoState};
pub use crate::base::{ParamFluid, ParamGeometry, ParamPhysics};
pub use crate::fluids::Fluid;
pub use crate::geometry::Geometry;
pub use crate::network::{Cubic, Network};
pub use crate::physics::Physics;
