use super::Curve;
use crate::network::{PoreId, ThroatId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the state of a pore at a given threshold
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum PoreState {
    /// Filled by the invading fluid
    Invaded,

    /// Filled by the defending fluid, which can still escape through an outlet
    Defending,

    /// Filled by defending fluid that can no longer escape
    Trapped,
}

/// Holds the partition of the pore volume at a given threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeSplit {
    pub invaded: f64,
    pub defending: f64,
    pub trapped: f64,
}

impl VolumeSplit {
    /// Returns the sum of all parts
    pub fn total(&self) -> f64 {
        self.invaded + self.defending + self.trapped
    }
}

/// Holds the trapping report of a drainage run with outlets
#[derive(Clone, Debug)]
pub struct Trapping {
    /// Outlet pores
    pub(crate) outlets: Vec<PoreId>,

    /// Index of the first threshold at which each pore is trapped
    pub(crate) trap_step: Vec<Option<usize>>,

    /// Trapped volume at each threshold
    pub(crate) trapped_volume: Vec<f64>,
}

impl Trapping {
    /// Returns the outlet pores
    pub fn outlets(&self) -> &[PoreId] {
        &self.outlets
    }

    /// Returns the index of the first threshold at which the pore is trapped
    pub fn trap_step(&self, p: PoreId) -> Option<usize> {
        self.trap_step[p]
    }

    /// Returns the pores trapped by the end of the run
    pub fn trapped_pores(&self) -> Vec<PoreId> {
        (0..self.trap_step.len()).filter(|&p| self.trap_step[p].is_some()).collect()
    }

    /// Returns the trapped volume at the end of the run
    pub fn trapped_volume(&self) -> f64 {
        self.trapped_volume.last().copied().unwrap_or(0.0)
    }

    /// Returns the trapped volume at each threshold
    pub fn trapped_volume_history(&self) -> &[f64] {
        &self.trapped_volume
    }
}

/// Holds the results of an ordinary percolation (drainage) run
///
/// Steps are indices into the list of thresholds. An element with no step was never invaded.
/// When outlets are given, trapped pores and the throats next to them are never invaded, and
/// the curve accounts for that.
#[derive(Clone, Debug)]
pub struct Drainage {
    pub(crate) invading: String,
    pub(crate) defending: String,
    pub(crate) thresholds: Vec<f64>,
    pub(crate) entry_pressure: Vec<f64>,
    pub(crate) pore_volume: Vec<f64>,
    pub(crate) throat_step: Vec<Option<usize>>,
    pub(crate) pore_step: Vec<Option<usize>>,
    pub(crate) trapping: Option<Trapping>,
    pub(crate) curve: Curve,
}

impl Drainage {
    /// Computes the curve from the invasion steps
    pub(crate) fn update_curve(&mut self) {
        let total: f64 = self.pore_volume.iter().sum();
        let mut invaded_at = vec![0.0; self.thresholds.len()];
        for (p, step) in self.pore_step.iter().enumerate() {
            if let Some(k) = step {
                invaded_at[*k] += self.pore_volume[p];
            }
        }
        let mut invaded: f64 = 0.0;
        let saturations: Vec<f64> = invaded_at
            .iter()
            .map(|v| {
                invaded += *v;
                f64::min(invaded / total, 1.0)
            })
            .collect();
        self.curve = Curve::new(&self.thresholds, &saturations);
    }

    /// Returns the name of the invading fluid
    pub fn invading(&self) -> &str {
        &self.invading
    }

    /// Returns the name of the defending fluid
    pub fn defending(&self) -> &str {
        &self.defending
    }

    /// Returns the capillary pressure curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Returns the thresholds
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns the number of thresholds
    pub fn n_steps(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns the index of the threshold at which the throat is invaded
    pub fn throat_step(&self, t: ThroatId) -> Option<usize> {
        self.throat_step[t]
    }

    /// Returns the index of the threshold at which the pore is invaded
    pub fn pore_step(&self, p: PoreId) -> Option<usize> {
        self.pore_step[p]
    }

    /// Returns the pressure at which the throat is invaded
    pub fn throat_invasion_pressure(&self, t: ThroatId) -> Option<f64> {
        self.throat_step[t].map(|k| self.thresholds[k])
    }

    /// Returns the pressure at which the pore is invaded
    pub fn pore_invasion_pressure(&self, p: PoreId) -> Option<f64> {
        self.pore_step[p].map(|k| self.thresholds[k])
    }

    /// Indicates whether the throat is invaded at the k-th threshold
    pub fn is_throat_invaded_at(&self, t: ThroatId, k: usize) -> bool {
        matches!(self.throat_step[t], Some(s) if s <= k)
    }

    /// Returns the state of a pore at the k-th threshold
    pub fn pore_state_at(&self, p: PoreId, k: usize) -> PoreState {
        if let Some(trapping) = &self.trapping {
            if matches!(trapping.trap_step[p], Some(s) if s <= k) {
                return PoreState::Trapped;
            }
        }
        match self.pore_step[p] {
            Some(s) if s <= k => PoreState::Invaded,
            _ => PoreState::Defending,
        }
    }

    /// Returns the state of all pores at the k-th threshold
    pub fn pore_states_at(&self, k: usize) -> Vec<PoreState> {
        (0..self.pore_step.len()).map(|p| self.pore_state_at(p, k)).collect()
    }

    /// Returns the state of all pores at the last threshold
    pub fn final_pore_states(&self) -> Vec<PoreState> {
        self.pore_states_at(self.thresholds.len() - 1)
    }

    /// Returns the invaded throats sorted by invasion step, entry pressure, and id
    pub fn invasion_order(&self) -> Vec<ThroatId> {
        let mut order: Vec<ThroatId> = (0..self.throat_step.len())
            .filter(|&t| self.throat_step[t].is_some())
            .collect();
        order.sort_by(|&a, &b| {
            self.throat_step[a]
                .cmp(&self.throat_step[b])
                .then(self.entry_pressure[a].total_cmp(&self.entry_pressure[b]))
                .then(a.cmp(&b))
        });
        order
    }

    /// Returns the saturation at an arbitrary applied pressure
    ///
    /// A pore counts as invaded if it was invaded at a threshold not above the given pressure.
    pub fn saturation_at(&self, pressure: f64) -> f64 {
        let total: f64 = self.pore_volume.iter().sum();
        let invaded: f64 = (0..self.pore_step.len())
            .filter(|&p| matches!(self.pore_invasion_pressure(p), Some(pc) if pc <= pressure))
            .map(|p| self.pore_volume[p])
            .sum();
        f64::min(invaded / total, 1.0)
    }

    /// Returns the partition of the pore volume at the k-th threshold
    pub fn volumes_at(&self, k: usize) -> VolumeSplit {
        let mut split = VolumeSplit {
            invaded: 0.0,
            defending: 0.0,
            trapped: 0.0,
        };
        for (p, volume) in self.pore_volume.iter().enumerate() {
            match self.pore_state_at(p, k) {
                PoreState::Invaded => split.invaded += volume,
                PoreState::Defending => split.defending += volume,
                PoreState::Trapped => split.trapped += volume,
            }
        }
        split
    }

    /// Returns the trapping report, if outlets were given
    pub fn trapping(&self) -> Option<&Trapping> {
        self.trapping.as_ref()
    }
}

impl fmt::Display for Drainage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n_invaded = self.pore_step.iter().filter(|s| s.is_some()).count();
        write!(f, "{} displacing {}\n", self.invading, self.defending)?;
        write!(f, "invaded pores = {} of {}\n", n_invaded, self.pore_step.len())?;
        if let Some(trapping) = &self.trapping {
            write!(f, "trapped pores = {}\n", trapping.trapped_pores().len())?;
            write!(f, "trapped volume = {:e}\n", trapping.trapped_volume())?;
        }
        write!(f, "{}", self.curve)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
