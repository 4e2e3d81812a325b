use super::{Curve, DisjointSet, Drainage, Thresholds, Trapping};
use crate::base::{PnmError, Result, MIN_PORES_FOR_INVASION};
use crate::fluids::Fluid;
use crate::geometry::Geometry;
use crate::network::{Network, PoreId, ThroatId};
use crate::physics::Physics;

/// Implements ordinary percolation (quasi-static drainage) with optional trapping
///
/// The throats are sorted once by entry pressure. A single forward walk over the ascending
/// thresholds merges the throats into a disjoint set holding the pores and a synthetic inlet
/// root; the set is never rebuilt. When outlets are given, a reverse walk over the thresholds
/// with a second disjoint set (defending phase plus a synthetic outlet root) finds the pores
/// that can no longer be displaced.
///
/// With access limitation (the default), a throat is invaded only if it connects to the
/// cluster grown from the inlets. Without it, every throat whose entry pressure does not
/// exceed the threshold is invaded.
#[derive(Debug)]
pub struct OrdinaryPercolation<'a> {
    network: &'a Network,
    invading: String,
    defending: String,
    pore_volume: Vec<f64>,
    entry_pressure: Vec<f64>,
    sorted_throats: Vec<ThroatId>,
    inlets: Vec<PoreId>,
    outlets: Option<Vec<PoreId>>,
    access_limited: bool,
}

impl<'a> OrdinaryPercolation<'a> {
    /// Allocates a new instance for the invading fluid described by its physics
    pub fn new(network: &'a Network, geometry: &Geometry, invading: &Physics, defending: &Fluid) -> Result<Self> {
        let entry_pressure = invading.entry_pressure().ok_or_else(|| {
            PnmError::config(format!("the entry pressure of {} is not modelled", invading.fluid_name()))
        })?;
        let mut alg = OrdinaryPercolation::from_entry_pressure(network, geometry, entry_pressure)?;
        alg.invading = invading.fluid_name().to_string();
        alg.defending = defending.name().to_string();
        Ok(alg)
    }

    /// Allocates a new instance from the throat entry pressures
    pub fn from_entry_pressure(network: &'a Network, geometry: &Geometry, entry_pressure: &[f64]) -> Result<Self> {
        if network.n_pores() < MIN_PORES_FOR_INVASION {
            return Err(PnmError::topology(format!(
                "the network must have at least {} pores",
                MIN_PORES_FOR_INVASION
            )));
        }
        if geometry.n_pores() != network.n_pores() || geometry.n_throats() != network.n_throats() {
            return Err(PnmError::config("geometry does not match the network"));
        }
        if entry_pressure.len() != network.n_throats() {
            return Err(PnmError::config("the number of entry pressures must equal the number of throats"));
        }
        if let Some(t) = entry_pressure.iter().position(|pc| !pc.is_finite()) {
            return Err(PnmError::config(format!("the entry pressure of throat {} is missing", t)));
        }
        let mut sorted_throats: Vec<ThroatId> = (0..network.n_throats()).collect();
        sorted_throats.sort_by(|&a, &b| entry_pressure[a].total_cmp(&entry_pressure[b]).then(a.cmp(&b)));
        Ok(OrdinaryPercolation {
            network,
            invading: "invading".to_string(),
            defending: "defending".to_string(),
            pore_volume: geometry.pore_volumes(),
            entry_pressure: entry_pressure.to_vec(),
            sorted_throats,
            inlets: Vec::new(),
            outlets: None,
            access_limited: true,
        })
    }

    /// Sets the inlet pores
    pub fn set_inlets(&mut self, pores: &[PoreId]) -> Result<&mut Self> {
        self.inlets = self.check_pores(pores, "inlet")?;
        Ok(self)
    }

    /// Sets the inlet pores from a mask over all pores
    pub fn set_inlets_from_mask(&mut self, mask: &[bool]) -> Result<&mut Self> {
        let pores = self.network.pores_from_mask(mask)?;
        self.set_inlets(&pores)
    }

    /// Sets the outlet pores and enables trapping
    pub fn set_outlets(&mut self, pores: &[PoreId]) -> Result<&mut Self> {
        self.outlets = Some(self.check_pores(pores, "outlet")?);
        Ok(self)
    }

    /// Sets the outlet pores from a mask over all pores and enables trapping
    pub fn set_outlets_from_mask(&mut self, mask: &[bool]) -> Result<&mut Self> {
        let pores = self.network.pores_from_mask(mask)?;
        self.set_outlets(&pores)
    }

    /// Disables trapping
    pub fn clear_outlets(&mut self) -> &mut Self {
        self.outlets = None;
        self
    }

    /// Enables or disables access limitation
    pub fn set_access_limited(&mut self, flag: bool) -> &mut Self {
        self.access_limited = flag;
        self
    }

    /// Returns the inlet pores
    pub fn inlets(&self) -> &[PoreId] {
        &self.inlets
    }

    /// Returns the throats sorted by entry pressure (ties broken by id)
    pub fn sorted_throats(&self) -> &[ThroatId] {
        &self.sorted_throats
    }

    /// Returns the smallest and largest entry pressures
    pub fn entry_pressure_range(&self) -> Option<(f64, f64)> {
        let first = self.sorted_throats.first()?;
        let last = self.sorted_throats.last()?;
        Some((self.entry_pressure[*first], self.entry_pressure[*last]))
    }

    /// Runs the drainage simulation
    pub fn run(&self, thresholds: &Thresholds) -> Result<Drainage> {
        if self.inlets.is_empty() {
            return Err(PnmError::config("inlet pores must be set before running"));
        }
        if self.inlets.iter().all(|&p| self.network.pore_throats(p).is_empty()) {
            return Err(PnmError::topology("none of the inlet pores is connected to a throat"));
        }
        let (min, max) = self
            .entry_pressure_range()
            .ok_or_else(|| PnmError::topology("the network has no throats"))?;
        let pressures = thresholds.generate(min, max)?;

        let mut throat_step = self.throat_steps(&pressures);
        let mut pore_step = self.pore_steps(&throat_step);

        let trapping = match &self.outlets {
            Some(outlets) => {
                let trap_step = self.trap_steps(&pore_step, outlets, pressures.len());
                for (p, step) in trap_step.iter().enumerate() {
                    if step.is_some() {
                        pore_step[p] = None;
                    }
                }
                for (t, [a, b]) in self.network.connections().iter().enumerate() {
                    if trap_step[*a].is_some() || trap_step[*b].is_some() {
                        throat_step[t] = None;
                    }
                }
                let mut trapped_at = vec![0.0; pressures.len()];
                for (p, step) in trap_step.iter().enumerate() {
                    if let Some(k) = step {
                        trapped_at[*k] += self.pore_volume[p];
                    }
                }
                let mut trapped: f64 = 0.0;
                let trapped_volume = trapped_at
                    .iter()
                    .map(|v| {
                        trapped += *v;
                        trapped
                    })
                    .collect();
                Some(Trapping {
                    outlets: outlets.clone(),
                    trap_step,
                    trapped_volume,
                })
            }
            None => None,
        };

        let mut drainage = Drainage {
            invading: self.invading.clone(),
            defending: self.defending.clone(),
            thresholds: pressures,
            entry_pressure: self.entry_pressure.clone(),
            pore_volume: self.pore_volume.clone(),
            throat_step,
            pore_step,
            trapping,
            curve: Curve::new(&[], &[]),
        };
        drainage.update_curve();

        for point in drainage.curve().points() {
            log::debug!("pc = {:e}: saturation = {}", point.pressure, point.saturation);
        }
        log::info!(
            "{} displacing {}: {} thresholds, final saturation = {}",
            drainage.invading(),
            drainage.defending(),
            drainage.n_steps(),
            drainage.curve().final_saturation()
        );
        if let Some(trapping) = drainage.trapping() {
            log::info!(
                "{} pores trapped, trapped volume = {:e}",
                trapping.trapped_pores().len(),
                trapping.trapped_volume()
            );
        }
        Ok(drainage)
    }

    /// Checks and sorts a set of pores
    fn check_pores(&self, pores: &[PoreId], what: &str) -> Result<Vec<PoreId>> {
        if pores.is_empty() {
            return Err(PnmError::config(format!("the set of {} pores must not be empty", what)));
        }
        if let Some(p) = pores.iter().find(|&&p| p >= self.network.n_pores()) {
            return Err(PnmError::config(format!("{} pore {} is out of range", what, p)));
        }
        let mut sorted = pores.to_vec();
        sorted.sort();
        sorted.dedup();
        Ok(sorted)
    }

    /// Finds the threshold index at which each throat is invaded (forward walk)
    fn throat_steps(&self, pressures: &[f64]) -> Vec<Option<usize>> {
        let (n, nt) = (self.network.n_pores(), self.network.n_throats());
        let mut entry_step = vec![None; nt];
        let mut next = 0;

        if !self.access_limited {
            for (k, &pk) in pressures.iter().enumerate() {
                self.admit(pk, &mut next, |t| entry_step[t] = Some(k));
            }
            return entry_step;
        }

        let root = n;
        let mut set = DisjointSet::new(n + 1);
        let mut connected: Vec<Option<usize>> = vec![None; n];
        for &p in &self.inlets {
            set.union(p, root);
            connected[p] = Some(0);
        }
        let mut pending: Vec<PoreId> = (0..n).filter(|&p| connected[p].is_none()).collect();
        for (k, &pk) in pressures.iter().enumerate() {
            self.admit(pk, &mut next, |t| {
                let [a, b] = self.network.throat_pores(t);
                entry_step[t] = Some(k);
                set.union(a, b);
            });
            let r = set.find(root);
            pending.retain(|&p| {
                if set.find(p) == r {
                    connected[p] = Some(k);
                    false
                } else {
                    true
                }
            });
            log::trace!("threshold {}: {} pores not connected to the inlets", k, pending.len());
        }

        (0..nt)
            .map(|t| {
                let [a, b] = self.network.throat_pores(t);
                match (entry_step[t], earliest(connected[a], connected[b])) {
                    (Some(ke), Some(kc)) => Some(usize::max(ke, kc)),
                    _ => None,
                }
            })
            .collect()
    }

    /// Visits the not yet admitted throats with entry pressure ≤ pk
    fn admit(&self, pk: f64, next: &mut usize, mut visit: impl FnMut(ThroatId)) {
        while *next < self.sorted_throats.len() && self.entry_pressure[self.sorted_throats[*next]] <= pk {
            visit(self.sorted_throats[*next]);
            *next += 1;
        }
    }

    /// Finds the threshold index at which each pore is invaded (earliest incident throat)
    fn pore_steps(&self, throat_step: &[Option<usize>]) -> Vec<Option<usize>> {
        (0..self.network.n_pores())
            .map(|p| {
                self.network
                    .pore_throats(p)
                    .iter()
                    .fold(None, |acc, &t| earliest(acc, throat_step[t]))
            })
            .collect()
    }

    /// Finds the threshold index at which each defending pore becomes trapped (reverse walk)
    ///
    /// A pore defends at threshold k if it is invaded after k (or never); a throat defends if
    /// both of its pores do. Walking backwards, the defending phase only grows, thus it can
    /// be built with unions alone.
    fn trap_steps(&self, pore_step: &[Option<usize>], outlets: &[PoreId], nk: usize) -> Vec<Option<usize>> {
        let n = self.network.n_pores();
        let root = n;
        let index = |step: Option<usize>| step.unwrap_or(nk);
        let mut pores_by_step = vec![Vec::new(); nk + 1];
        for p in 0..n {
            pores_by_step[index(pore_step[p])].push(p);
        }
        let mut throats_by_step = vec![Vec::new(); nk + 1];
        for (t, [a, b]) in self.network.connections().iter().enumerate() {
            throats_by_step[index(earliest(pore_step[*a], pore_step[*b]))].push(t);
        }
        let mut is_outlet = vec![false; n];
        for &p in outlets {
            is_outlet[p] = true;
        }

        let mut set = DisjointSet::new(n + 1);
        let mut defending: Vec<PoreId> = Vec::new();
        let mut trap_step = vec![None; n];
        for k in (0..nk).rev() {
            for &p in &pores_by_step[k + 1] {
                if is_outlet[p] {
                    set.union(p, root);
                }
                defending.push(p);
            }
            for &t in &throats_by_step[k + 1] {
                let [a, b] = self.network.throat_pores(t);
                set.union(a, b);
            }
            let r = set.find(root);
            for &p in &defending {
                if set.find(p) != r {
                    trap_step[p] = Some(k);
                }
            }
        }
        trap_step
    }
}

/// Returns the earliest of two optional steps (None means never)
fn earliest(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(usize::min(x, y)),
        (x, None) => x,
        (None, y) => y,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
