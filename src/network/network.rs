use crate::base::{BoundaryRule, Label, PnmError, Result};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Defines the index of a pore
pub type PoreId = usize;

/// Defines the index of a throat
pub type ThroatId = usize;

/// Holds the topology of a pore network
///
/// Pores are nodes with coordinates and a set of region labels. Throats are undirected
/// edges connecting two distinct pores. The connectivity is fixed once the network is built;
/// only the labels may be modified afterwards.
#[derive(Clone, Debug)]
pub struct Network {
    /// Coordinates of pore centres
    coords: Vec<[f64; 3]>,

    /// Region labels of each pore
    labels: Vec<BTreeSet<Label>>,

    /// Pairs of pores connected by each throat
    connections: Vec<[PoreId; 2]>,

    /// Throats incident to each pore (adjacency)
    pore_throats: Vec<Vec<ThroatId>>,
}

impl Network {
    /// Allocates a new instance from pore coordinates and throat connections
    ///
    /// # Errors
    ///
    /// Returns a topology error if a throat references a non-existent pore, connects a pore
    /// to itself, or duplicates another throat (in either direction).
    pub fn new(coords: Vec<[f64; 3]>, connections: Vec<[PoreId; 2]>) -> Result<Self> {
        let npore = coords.len();
        let mut pore_throats = vec![Vec::new(); npore];
        let mut pairs = HashSet::with_capacity(connections.len());
        for (t, &[a, b]) in connections.iter().enumerate() {
            if a >= npore || b >= npore {
                return Err(PnmError::topology(format!(
                    "throat {} references pore {} but there are only {} pores",
                    t,
                    usize::max(a, b),
                    npore
                )));
            }
            if a == b {
                return Err(PnmError::topology(format!("throat {} connects pore {} to itself", t, a)));
            }
            if !pairs.insert((usize::min(a, b), usize::max(a, b))) {
                return Err(PnmError::topology(format!(
                    "throat {} duplicates the connection between pores {} and {}",
                    t, a, b
                )));
            }
            pore_throats[a].push(t);
            pore_throats[b].push(t);
        }
        Ok(Network {
            coords,
            labels: vec![BTreeSet::new(); npore],
            connections,
            pore_throats,
        })
    }

    /// Returns the number of pores
    pub fn n_pores(&self) -> usize {
        self.coords.len()
    }

    /// Returns the number of throats
    pub fn n_throats(&self) -> usize {
        self.connections.len()
    }

    /// Returns the coordinates of a pore centre
    pub fn pore_coords(&self, p: PoreId) -> &[f64; 3] {
        &self.coords[p]
    }

    /// Returns the two pores connected by a throat
    pub fn throat_pores(&self, t: ThroatId) -> [PoreId; 2] {
        self.connections[t]
    }

    /// Returns all throat connections
    pub fn connections(&self) -> &[[PoreId; 2]] {
        &self.connections
    }

    /// Returns the throats incident to a pore
    pub fn pore_throats(&self, p: PoreId) -> &[ThroatId] {
        &self.pore_throats[p]
    }

    /// Returns the pores adjacent to a pore
    pub fn pore_neighbors(&self, p: PoreId) -> Vec<PoreId> {
        self.pore_throats[p]
            .iter()
            .map(|&t| {
                let [a, b] = self.connections[t];
                if a == p {
                    b
                } else {
                    a
                }
            })
            .collect()
    }

    /// Returns the distance between the centres of the two pores of a throat
    pub fn throat_span(&self, t: ThroatId) -> f64 {
        let [a, b] = self.connections[t];
        let (xa, xb) = (&self.coords[a], &self.coords[b]);
        let mut sum = 0.0;
        for i in 0..3 {
            sum += (xb[i] - xa[i]) * (xb[i] - xa[i]);
        }
        f64::sqrt(sum)
    }

    /// Returns the labels of a pore
    pub fn labels(&self, p: PoreId) -> &BTreeSet<Label> {
        &self.labels[p]
    }

    /// Indicates whether a pore has a label
    pub fn has_label(&self, p: PoreId, label: &Label) -> bool {
        self.labels[p].contains(label)
    }

    /// Adds a label to a list of pores
    pub fn add_label(&mut self, pores: &[PoreId], label: Label) -> Result<&mut Self> {
        if let Some(&p) = pores.iter().find(|&&p| p >= self.n_pores()) {
            return Err(PnmError::config(format!("cannot label non-existent pore {}", p)));
        }
        for &p in pores {
            self.labels[p].insert(label.clone());
        }
        Ok(self)
    }

    /// Adds a label to every pore
    pub fn add_label_all(&mut self, label: Label) -> &mut Self {
        for set in &mut self.labels {
            set.insert(label.clone());
        }
        self
    }

    /// Applies a boundary rule and returns the number of pores it selected
    pub fn set_label_where(&mut self, rule: &BoundaryRule) -> usize {
        let mut count = 0;
        for p in 0..self.n_pores() {
            if rule.selects(&self.coords[p]) {
                self.labels[p].insert(rule.label.clone());
                count += 1;
            }
        }
        count
    }

    /// Removes a label from every pore
    pub fn clear_label(&mut self, label: &Label) -> &mut Self {
        for set in &mut self.labels {
            set.remove(label);
        }
        self
    }

    /// Returns the (sorted) pores with a given label
    pub fn pores_with(&self, label: &Label) -> Vec<PoreId> {
        (0..self.n_pores()).filter(|&p| self.labels[p].contains(label)).collect()
    }

    /// Returns a boolean mask of the pores with a given label
    pub fn label_mask(&self, label: &Label) -> Vec<bool> {
        self.labels.iter().map(|set| set.contains(label)).collect()
    }

    /// Converts a boolean mask with one entry per pore into a list of pores
    pub fn pores_from_mask(&self, mask: &[bool]) -> Result<Vec<PoreId>> {
        if mask.len() != self.n_pores() {
            return Err(PnmError::config(format!(
                "mask has {} entries but the network has {} pores",
                mask.len(),
                self.n_pores()
            )));
        }
        Ok((0..mask.len()).filter(|&p| mask[p]).collect())
    }

    /// Returns the minimum and maximum coordinates of the pore centres
    pub fn bounding_box(&self) -> ([f64; 3], [f64; 3]) {
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for x in &self.coords {
            for i in 0..3 {
                min[i] = f64::min(min[i], x[i]);
                max[i] = f64::max(max[i], x[i]);
            }
        }
        (min, max)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pore network\n")?;
        write!(f, "============\n")?;
        write!(f, "number of pores = {}\n", self.n_pores())?;
        write!(f, "number of throats = {}\n", self.n_throats())?;
        let mut all: BTreeSet<&Label> = BTreeSet::new();
        for set in &self.labels {
            all.extend(set.iter());
        }
        for label in all {
            write!(f, "{} pores = {}\n", label.name(), self.pores_with(label).len())?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
