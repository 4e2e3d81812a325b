use super::Network;
use crate::base::{BoundaryRule, Label, PnmError, Result};

/// Builds regular 3D lattices of pores connected to their six nearest neighbours
///
/// The pore with lattice indices `(i,j,k)` has id `i + nx・(j + ny・k)` and its centre at
/// `((i+½)・sx, (j+½)・sy, (k+½)・sz)`. Thus, the lattice fills the box
/// `[0, nx・sx] × [0, ny・sy] × [0, nz・sz]`.
///
/// ```text
///  nthroat = nx・ny・(nz-1) + nx・(ny-1)・nz + (nx-1)・ny・nz
/// ```
#[derive(Clone, Debug)]
pub struct Cubic {
    /// Number of pores along each axis
    divisions: [usize; 3],

    /// Distance between neighbouring pores along each axis
    spacing: [f64; 3],

    /// Rules to label boundary pores after the lattice is built
    rules: Vec<BoundaryRule>,
}

impl Cubic {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `divisions` -- number of pores along x, y, and z (each ≥ 1)
    /// * `spacing` -- one value (same for all axes) or three values (each > 0)
    pub fn new(divisions: [usize; 3], spacing: &[f64]) -> Result<Self> {
        for (i, &n) in divisions.iter().enumerate() {
            if n < 1 {
                return Err(PnmError::config(format!("division count along axis {} must be ≥ 1", i)));
            }
        }
        let spacing = match spacing.len() {
            1 => [spacing[0]; 3],
            3 => [spacing[0], spacing[1], spacing[2]],
            n => {
                return Err(PnmError::config(format!(
                    "lattice spacing must have 1 or 3 values; {} were given",
                    n
                )))
            }
        };
        if spacing.iter().any(|&s| !(s > 0.0) || !s.is_finite()) {
            return Err(PnmError::config("lattice spacing must be > 0.0"));
        }
        Ok(Cubic {
            divisions,
            spacing,
            rules: Vec::new(),
        })
    }

    /// Adds a rule to label boundary pores
    pub fn boundary(&mut self, rule: BoundaryRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Returns the number of pores
    pub fn n_pores(&self) -> usize {
        let [nx, ny, nz] = self.divisions;
        nx * ny * nz
    }

    /// Returns the number of throats
    pub fn n_throats(&self) -> usize {
        let [nx, ny, nz] = self.divisions;
        nx * ny * (nz - 1) + nx * (ny - 1) * nz + (nx - 1) * ny * nz
    }

    /// Returns the size of the box enclosing the lattice
    pub fn domain_size(&self) -> [f64; 3] {
        [
            self.divisions[0] as f64 * self.spacing[0],
            self.divisions[1] as f64 * self.spacing[1],
            self.divisions[2] as f64 * self.spacing[2],
        ]
    }

    /// Returns the id of the pore with lattice indices (i,j,k)
    pub fn pore_id(&self, i: usize, j: usize, k: usize) -> usize {
        let [nx, ny, _] = self.divisions;
        i + nx * (j + ny * k)
    }

    /// Generates the network
    ///
    /// Every pore is labelled `Internal`; pores on the faces of the lattice are also labelled
    /// `External`; the boundary rules are applied last.
    pub fn generate(&self) -> Result<Network> {
        let [nx, ny, nz] = self.divisions;
        let [sx, sy, sz] = self.spacing;
        let mut coords = Vec::with_capacity(self.n_pores());
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    coords.push([
                        (i as f64 + 0.5) * sx,
                        (j as f64 + 0.5) * sy,
                        (k as f64 + 0.5) * sz,
                    ]);
                }
            }
        }
        let mut connections = Vec::with_capacity(self.n_throats());
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let p = self.pore_id(i, j, k);
                    if i + 1 < nx {
                        connections.push([p, self.pore_id(i + 1, j, k)]);
                    }
                    if j + 1 < ny {
                        connections.push([p, self.pore_id(i, j + 1, k)]);
                    }
                    if k + 1 < nz {
                        connections.push([p, self.pore_id(i, j, k + 1)]);
                    }
                }
            }
        }
        let mut network = Network::new(coords, connections)?;
        network.add_label_all(Label::Internal);
        let external: Vec<_> = (0..nz)
            .flat_map(|k| (0..ny).flat_map(move |j| (0..nx).map(move |i| (i, j, k))))
            .filter(|&(i, j, k)| i == 0 || j == 0 || k == 0 || i + 1 == nx || j + 1 == ny || k + 1 == nz)
            .map(|(i, j, k)| self.pore_id(i, j, k))
            .collect();
        network.add_label(&external, Label::External)?;
        for rule in &self.rules {
            let count = network.set_label_where(rule);
            log::debug!("boundary rule {:?} labelled {} pores", rule, count);
        }
        log::info!(
            "generated cubic lattice {}×{}×{} with {} pores and {} throats",
            nx,
            ny,
            nz,
            network.n_pores(),
            network.n_throats()
        );
        Ok(network)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
