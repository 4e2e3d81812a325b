use pnmsim::algorithms::{OrdinaryPercolation, PoreState, Thresholds};
use pnmsim::base::{Axis, BoundaryRule, Label, ParamGeometry, Side};
use pnmsim::geometry::Geometry;
use pnmsim::network::{Cubic, Network};
use proptest::prelude::*;

// 4×4×3 lattice with 104 throats; inlets at x = 0 and outlets at x = 3.5e-4
fn lattice() -> (Network, Geometry) {
    let mut cubic = Cubic::new([4, 4, 3], &[1e-4]).unwrap();
    cubic
        .boundary(BoundaryRule::new(Axis::X, Side::Below, 5e-5, Label::Inlet))
        .boundary(BoundaryRule::new(Axis::X, Side::Above, 3e-4, Label::Outlet));
    let network = cubic.generate().unwrap();
    let geometry = Geometry::new(&network, &ParamGeometry::sample_stick_and_ball()).unwrap();
    (network, geometry)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: the saturation never decreases and invaded elements stay invaded
    #[test]
    fn drainage_is_monotone(
        entry in prop::collection::vec(100.0f64..10000.0, 104),
        npts in 1usize..15,
        access_limited in any::<bool>(),
    ) {
        let (network, geometry) = lattice();
        let mut alg = OrdinaryPercolation::from_entry_pressure(&network, &geometry, &entry).unwrap();
        alg.set_inlets(&network.pores_with(&Label::Inlet)).unwrap();
        alg.set_access_limited(access_limited);
        let drainage = alg.run(&Thresholds::Linear { npts }).unwrap();
        let saturations = drainage.curve().saturations();
        prop_assert_eq!(saturations.len(), npts);
        prop_assert!(saturations.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(saturations.iter().all(|&s| (0.0..=1.0).contains(&s)));
        for k in 1..drainage.n_steps() {
            for p in 0..network.n_pores() {
                if drainage.pore_state_at(p, k - 1) == PoreState::Invaded {
                    prop_assert_eq!(drainage.pore_state_at(p, k), PoreState::Invaded);
                }
            }
        }
        // an invaded throat has entry pressure not above its invasion pressure
        for t in 0..network.n_throats() {
            if let Some(pc) = drainage.throat_invasion_pressure(t) {
                prop_assert!(entry[t] <= pc);
            }
        }
    }

    /// Property: with trapping, the pore volume splits into invaded, defending, and trapped parts
    #[test]
    fn trapping_conserves_volume(
        entry in prop::collection::vec(100.0f64..10000.0, 104),
        npts in 2usize..15,
    ) {
        let (network, geometry) = lattice();
        let total = geometry.total_pore_volume();
        let mut alg = OrdinaryPercolation::from_entry_pressure(&network, &geometry, &entry).unwrap();
        alg.set_inlets(&network.pores_with(&Label::Inlet)).unwrap();
        let free = alg.run(&Thresholds::Linear { npts }).unwrap();
        alg.set_outlets(&network.pores_with(&Label::Outlet)).unwrap();
        let drainage = alg.run(&Thresholds::Linear { npts }).unwrap();
        let trapping = drainage.trapping().unwrap();
        for k in 0..drainage.n_steps() {
            let split = drainage.volumes_at(k);
            prop_assert!((split.total() - total).abs() < 1e-12 * total);
            prop_assert!(drainage.curve().saturations()[k] <= free.curve().saturations()[k] + 1e-14);
        }
        for p in trapping.trapped_pores() {
            prop_assert_eq!(drainage.pore_step(p), None);
            prop_assert!(!network.has_label(p, &Label::Outlet));
            // once trapped, always trapped
            let first = trapping.trap_step(p).unwrap();
            for k in first..drainage.n_steps() {
                prop_assert_eq!(drainage.pore_state_at(p, k), PoreState::Trapped);
            }
        }
    }
}
