//! Implements fluids and the correlations for their bulk properties

mod correlations;
mod fluid;
pub use crate::fluids::correlations::*;
pub use crate::fluids::fluid::*;
