//! Implements the pore network topology and the lattice builder

mod cubic;
mod network;
pub use crate::network::cubic::*;
pub use crate::network::network::*;
