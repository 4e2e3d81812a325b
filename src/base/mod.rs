//! Implements the base structures shared by the network, models, and algorithms

mod conditions;
mod constants;
mod enums;
mod error;
mod parameters;
pub use crate::base::conditions::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::error::*;
pub use crate::base::parameters::*;
