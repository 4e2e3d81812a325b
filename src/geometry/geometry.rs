use super::Distribution;
use crate::base::{ParamGeometry, ParamPoreVolume, ParamSeed, ParamThroatLength, ParamThroatVolume};
use crate::base::{PnmError, Result};
use crate::network::Network;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Holds the size attributes of a pore
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoreGeometry {
    /// Seed in [0,1) mapped through the distribution
    pub seed: f64,

    /// Diameter
    pub diameter: f64,

    /// Volume
    pub volume: f64,
}

/// Holds the size attributes of a throat
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThroatGeometry {
    /// Seed in [0,1) mapped through the distribution
    pub seed: f64,

    /// Diameter
    pub diameter: f64,

    /// Length between the surfaces of the two pores
    pub length: f64,

    /// Volume
    pub volume: f64,
}

impl ThroatGeometry {
    /// Returns the radius
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Returns the area of the (circular) cross-section
    pub fn area(&self) -> f64 {
        PI * self.diameter * self.diameter / 4.0
    }
}

/// Holds the minimum, mean, and maximum of a set of sizes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl SizeStats {
    /// Computes the statistics of a non-empty set of values
    fn from_values(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut count: usize = 0;
        let (mut min, mut max, mut sum) = (f64::MAX, f64::MIN, 0.0);
        for x in values {
            min = f64::min(min, x);
            max = f64::max(max, x);
            sum += x;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(SizeStats {
            min,
            mean: sum / count as f64,
            max,
        })
    }
}

/// Holds the geometry of a network (stick-and-ball model)
///
/// The assignment happens in two phases: all pores are computed first and collected into an
/// immutable vector; then the throats are derived from the frozen pores (seeds and diameters).
/// Within each phase, elements are processed in parallel. The random seeds are drawn
/// sequentially from a ChaCha8 generator, thus the geometry is fully reproducible.
#[derive(Clone, Debug)]
pub struct Geometry {
    pores: Vec<PoreGeometry>,
    throats: Vec<ThroatGeometry>,
}

impl Geometry {
    /// Allocates a new instance by drawing seeds and mapping them through the distributions
    pub fn new(network: &Network, param: &ParamGeometry) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(param.rng_seed);
        let pore_dist = Distribution::new(&param.pore_diameter)?;
        let throat_dist = Distribution::new(&param.throat_diameter)?;

        // pores
        let pore_seeds: Vec<f64> = match param.pore_seed {
            ParamSeed::Random => (0..network.n_pores()).map(|_| rng.gen::<f64>()).collect(),
            _ => return Err(PnmError::config("pore seeds must use the random method")),
        };
        let pore_diameters: Vec<f64> = pore_seeds.par_iter().map(|&q| pore_dist.ppf(q)).collect();
        let pores = assign_pores(&pore_seeds, &pore_diameters, param.pore_volume)?;

        // throats
        let throat_seeds: Vec<f64> = match param.throat_seed {
            ParamSeed::Random => (0..network.n_throats()).map(|_| rng.gen::<f64>()).collect(),
            rule => network
                .connections()
                .par_iter()
                .map(|&[a, b]| {
                    let (sa, sb) = (pores[a].seed, pores[b].seed);
                    match rule {
                        ParamSeed::NeighborMin => f64::min(sa, sb),
                        ParamSeed::NeighborMax => f64::max(sa, sb),
                        _ => (sa + sb) / 2.0,
                    }
                })
                .collect(),
        };
        let throat_diameters: Vec<f64> = throat_seeds.par_iter().map(|&q| throat_dist.ppf(q)).collect();
        let throats = assign_throats(network, &pores, &throat_seeds, &throat_diameters, param)?;

        let geometry = Geometry { pores, throats };
        log::info!(
            "assigned geometry to {} pores and {} throats; total pore volume = {:e}",
            geometry.pores.len(),
            geometry.throats.len(),
            geometry.total_pore_volume()
        );
        Ok(geometry)
    }

    /// Allocates a new instance with prescribed pore and throat diameters
    ///
    /// The seeds are set to zero; volumes and lengths follow the models in `param`.
    pub fn from_diameters(
        network: &Network,
        pore_diameters: &[f64],
        throat_diameters: &[f64],
        param: &ParamGeometry,
    ) -> Result<Self> {
        if pore_diameters.len() != network.n_pores() {
            return Err(PnmError::config(format!(
                "{} pore diameters were given but the network has {} pores",
                pore_diameters.len(),
                network.n_pores()
            )));
        }
        if throat_diameters.len() != network.n_throats() {
            return Err(PnmError::config(format!(
                "{} throat diameters were given but the network has {} throats",
                throat_diameters.len(),
                network.n_throats()
            )));
        }
        let pores = assign_pores(&vec![0.0; network.n_pores()], pore_diameters, param.pore_volume)?;
        let throat_seeds = vec![0.0; network.n_throats()];
        let throats = assign_throats(network, &pores, &throat_seeds, throat_diameters, param)?;
        Ok(Geometry { pores, throats })
    }

    /// Returns the number of pores
    pub fn n_pores(&self) -> usize {
        self.pores.len()
    }

    /// Returns the number of throats
    pub fn n_throats(&self) -> usize {
        self.throats.len()
    }

    /// Returns the attributes of a pore
    pub fn pore(&self, p: usize) -> &PoreGeometry {
        &self.pores[p]
    }

    /// Returns the attributes of a throat
    pub fn throat(&self, t: usize) -> &ThroatGeometry {
        &self.throats[t]
    }

    /// Returns the attributes of all throats
    pub fn throats(&self) -> &[ThroatGeometry] {
        &self.throats
    }

    /// Returns all pore volumes
    pub fn pore_volumes(&self) -> Vec<f64> {
        self.pores.iter().map(|p| p.volume).collect()
    }

    /// Returns all pore diameters
    pub fn pore_diameters(&self) -> Vec<f64> {
        self.pores.iter().map(|p| p.diameter).collect()
    }

    /// Returns all throat diameters
    pub fn throat_diameters(&self) -> Vec<f64> {
        self.throats.iter().map(|t| t.diameter).collect()
    }

    /// Returns the statistics of the pore diameters (None if there are no pores)
    pub fn pore_diameter_stats(&self) -> Option<SizeStats> {
        SizeStats::from_values(self.pores.iter().map(|p| p.diameter))
    }

    /// Returns the statistics of the throat diameters (None if there are no throats)
    pub fn throat_diameter_stats(&self) -> Option<SizeStats> {
        SizeStats::from_values(self.throats.iter().map(|t| t.diameter))
    }

    /// Returns the sum of pore volumes
    pub fn total_pore_volume(&self) -> f64 {
        self.pores.iter().map(|p| p.volume).sum()
    }

    /// Returns the sum of throat volumes
    pub fn total_throat_volume(&self) -> f64 {
        self.throats.iter().map(|t| t.volume).sum()
    }

    /// Returns the porosity (pore plus throat volume over the bulk volume)
    pub fn porosity(&self, bulk_volume: f64) -> Result<f64> {
        if !(bulk_volume > 0.0) {
            return Err(PnmError::config("bulk volume must be > 0.0"));
        }
        Ok((self.total_pore_volume() + self.total_throat_volume()) / bulk_volume)
    }
}

/// Computes the pore attributes (first phase)
///
/// The results are gathered before checking, thus the reported error is the one with the lowest id.
fn assign_pores(seeds: &[f64], diameters: &[f64], model: ParamPoreVolume) -> Result<Vec<PoreGeometry>> {
    seeds
        .par_iter()
        .zip(diameters.par_iter())
        .enumerate()
        .map(|(p, (&seed, &diameter))| {
            if !(diameter > 0.0) {
                return Err(PnmError::pore_geometry(p, format!("diameter {:e} must be > 0.0", diameter)));
            }
            let volume = match model {
                ParamPoreVolume::Sphere => PI * diameter * diameter * diameter / 6.0,
                ParamPoreVolume::Cube => diameter * diameter * diameter,
            };
            Ok(PoreGeometry { seed, diameter, volume })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Computes the throat attributes from the frozen pores (second phase)
fn assign_throats(
    network: &Network,
    pores: &[PoreGeometry],
    seeds: &[f64],
    diameters: &[f64],
    param: &ParamGeometry,
) -> Result<Vec<ThroatGeometry>> {
    let ParamThroatLength::Straight { min_length } = param.throat_length;
    if !(min_length > 0.0) {
        return Err(PnmError::config("minimum throat length must be > 0.0"));
    }
    seeds
        .par_iter()
        .zip(diameters.par_iter())
        .enumerate()
        .map(|(t, (&seed, &diameter))| {
            if !(diameter > 0.0) {
                return Err(PnmError::throat_geometry(t, format!("diameter {:e} must be > 0.0", diameter)));
            }
            let [a, b] = network.throat_pores(t);
            let raw = network.throat_span(t) - (pores[a].diameter + pores[b].diameter) / 2.0;
            if !(raw > 0.0) {
                return Err(PnmError::throat_geometry(
                    t,
                    format!("length {:e} must be > 0.0 (pores {} and {} overlap)", raw, a, b),
                ));
            }
            let length = if raw < min_length {
                log::warn!("length of throat {} raised from {:e} to {:e}", t, raw, min_length);
                min_length
            } else {
                raw
            };
            let volume = match param.throat_volume {
                ParamThroatVolume::Cylinder => PI * diameter * diameter * length / 4.0,
                ParamThroatVolume::Cuboid => diameter * diameter * length,
            };
            Ok(ThroatGeometry {
                seed,
                diameter,
                length,
                volume,
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Geometry;
    use crate::base::{ParamDistribution, ParamGeometry, ParamPoreVolume, ParamSeed, ParamThroatLength};
    use crate::base::{ParamThroatVolume, PnmError};
    use crate::network::{Cubic, Network};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn two_pores(distance: f64) -> Network {
        Network::new(vec![[0.0, 0.0, 0.0], [distance, 0.0, 0.0]], vec![[0, 1]]).unwrap()
    }

    #[test]
    fn new_captures_wrong_input() {
        let net = two_pores(1e-4);
        let mut param = ParamGeometry::sample_stick_and_ball();
        param.pore_seed = ParamSeed::NeighborMin;
        assert_eq!(
            Geometry::new(&net, &param).err().map(|e| e.to_string()),
            Some("configuration error: pore seeds must use the random method".to_string())
        );

        let mut param = ParamGeometry::sample_stick_and_ball();
        param.throat_length = ParamThroatLength::Straight { min_length: 0.0 };
        assert!(Geometry::new(&net, &param).unwrap_err().is_configuration());

        let mut param = ParamGeometry::sample_stick_and_ball();
        param.pore_diameter = ParamDistribution::Uniform {
            lower: -2e-5,
            upper: -1e-5,
        };
        assert!(matches!(Geometry::new(&net, &param), Err(PnmError::Geometry { id: 0, .. })));
    }

    #[test]
    fn overlapping_pores_are_captured() {
        let net = two_pores(1e-5);
        let param = ParamGeometry::sample_stick_and_ball();
        assert_eq!(
            Geometry::from_diameters(&net, &[1e-5, 1e-5], &[4e-6], &param)
                .err()
                .map(|e| e.to_string()),
            Some("geometry error at throat 0: length 0e0 must be > 0.0 (pores 0 and 1 overlap)".to_string())
        );
        assert!(matches!(
            Geometry::from_diameters(&net, &[1e-6, 1e-6], &[0.0], &param),
            Err(PnmError::Geometry { id: 0, .. })
        ));
        assert!(Geometry::from_diameters(&net, &[1e-6], &[1e-6], &param).is_err());
    }

    #[test]
    fn short_throats_are_clamped() {
        let net = two_pores(1.0);
        let mut param = ParamGeometry::sample_stick_and_ball();
        param.throat_length = ParamThroatLength::Straight { min_length: 0.1 };
        let geo = Geometry::from_diameters(&net, &[0.96, 0.96], &[0.5], &param).unwrap();
        assert_eq!(geo.throat(0).length, 0.1);
    }

    #[test]
    fn from_diameters_works() {
        let net = two_pores(1e-4);
        let mut param = ParamGeometry::sample_stick_and_ball();
        let geo = Geometry::from_diameters(&net, &[1e-5, 2e-5], &[1e-5], &param).unwrap();
        assert_relative_eq!(geo.pore(0).volume, PI * 1e-15 / 6.0, max_relative = 1e-12);
        assert_relative_eq!(geo.throat(0).length, 1e-4 - 1.5e-5, max_relative = 1e-12);
        assert_relative_eq!(geo.throat(0).volume, PI * 1e-10 / 4.0 * 8.5e-5, max_relative = 1e-12);
        assert_relative_eq!(geo.throat(0).radius(), 5e-6);
        assert_relative_eq!(geo.throat(0).area(), PI * 25e-12, max_relative = 1e-12);

        param.pore_volume = ParamPoreVolume::Cube;
        param.throat_volume = ParamThroatVolume::Cuboid;
        let geo = Geometry::from_diameters(&net, &[1e-5, 2e-5], &[1e-5], &param).unwrap();
        assert_relative_eq!(geo.pore(1).volume, 8e-15, max_relative = 1e-12);
        assert_relative_eq!(geo.throat(0).volume, 1e-10 * 8.5e-5, max_relative = 1e-12);
        assert_relative_eq!(geo.total_pore_volume(), 9e-15, max_relative = 1e-12);

        let stats = geo.pore_diameter_stats().unwrap();
        assert_eq!(stats.min, 1e-5);
        assert_eq!(stats.max, 2e-5);
        assert_relative_eq!(stats.mean, 1.5e-5, max_relative = 1e-12);
        let stats = geo.throat_diameter_stats().unwrap();
        assert_eq!((stats.min, stats.max), (1e-5, 1e-5));
    }

    #[test]
    fn neighbor_min_seeds_work() {
        let net = Cubic::new([4, 4, 4], &[1e-4]).unwrap().generate().unwrap();
        let param = ParamGeometry::sample_stick_and_ball();
        let geo = Geometry::new(&net, &param).unwrap();
        for t in 0..net.n_throats() {
            let [a, b] = net.throat_pores(t);
            let seed = f64::min(geo.pore(a).seed, geo.pore(b).seed);
            assert_eq!(geo.throat(t).seed, seed);
            // same distribution, thus the throat is not wider than its smaller pore
            let d_min = f64::min(geo.pore(a).diameter, geo.pore(b).diameter);
            assert_eq!(geo.throat(t).diameter, d_min);
            assert!(geo.throat(t).length > 0.0);
        }
        for p in 0..net.n_pores() {
            let seed = geo.pore(p).seed;
            assert!(seed >= 0.0 && seed < 1.0);
            assert!(geo.pore(p).diameter >= 6e-6);
        }
    }

    #[test]
    fn other_seed_rules_work() {
        let net = Cubic::new([3, 2, 1], &[1e-4]).unwrap().generate().unwrap();
        let mut param = ParamGeometry::sample_stick_and_ball();
        param.throat_seed = ParamSeed::NeighborMax;
        let geo = Geometry::new(&net, &param).unwrap();
        for t in 0..net.n_throats() {
            let [a, b] = net.throat_pores(t);
            assert_eq!(geo.throat(t).seed, f64::max(geo.pore(a).seed, geo.pore(b).seed));
        }
        param.throat_seed = ParamSeed::NeighborMean;
        let geo = Geometry::new(&net, &param).unwrap();
        for t in 0..net.n_throats() {
            let [a, b] = net.throat_pores(t);
            assert_eq!(geo.throat(t).seed, (geo.pore(a).seed + geo.pore(b).seed) / 2.0);
        }
        param.throat_seed = ParamSeed::Random;
        let geo = Geometry::new(&net, &param).unwrap();
        assert_eq!(geo.n_throats(), net.n_throats());
    }

    #[test]
    fn geometry_is_deterministic() {
        let net = Cubic::new([5, 5, 5], &[1e-4]).unwrap().generate().unwrap();
        let mut param = ParamGeometry::sample_stick_and_ball();
        param.rng_seed = 42;
        let a = Geometry::new(&net, &param).unwrap();
        let b = Geometry::new(&net, &param).unwrap();
        assert_eq!(a.pore_diameters(), b.pore_diameters());
        assert_eq!(a.throat_diameters(), b.throat_diameters());
        param.rng_seed = 43;
        let c = Geometry::new(&net, &param).unwrap();
        assert_ne!(a.pore_diameters(), c.pore_diameters());
    }

    #[test]
    fn porosity_works() {
        let net = two_pores(1.0);
        let param = ParamGeometry::sample_stick_and_ball();
        let geo = Geometry::from_diameters(&net, &[0.5, 0.5], &[0.2], &param).unwrap();
        let expected = 2.0 * PI * 0.125 / 6.0 + PI * 0.04 * 0.5 / 4.0;
        assert_relative_eq!(geo.porosity(1.0).unwrap(), expected, epsilon = 1e-15);
        assert!(geo.porosity(0.0).is_err());
    }
}
