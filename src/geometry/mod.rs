//! Implements the assignment of pore and throat sizes

mod distribution;
mod geometry;
pub use crate::geometry::distribution::*;
pub use crate::geometry::geometry::*;
