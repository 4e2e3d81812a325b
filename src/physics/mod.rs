//! Implements the pore-scale physics: capillary entry pressures and throat conductances

mod capillary;
mod conductance;
mod physics;
pub use crate::physics::capillary::*;
pub use crate::physics::conductance::*;
pub use crate::physics::physics::*;
