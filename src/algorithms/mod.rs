//! Implements the percolation algorithms: ordinary percolation with trapping

mod curve;
mod disjoint_set;
mod drainage;
mod ordinary_percolation;
mod thresholds;
pub use crate::algorithms::curve::*;
pub use crate::algorithms::disjoint_set::*;
pub use crate::algorithms::drainage::*;
pub use crate::algorithms::ordinary_percolation::*;
pub use crate::algorithms::thresholds::*;
