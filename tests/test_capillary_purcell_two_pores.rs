use approx::assert_relative_eq;
use pnmsim::algorithms::{OrdinaryPercolation, PoreState, Thresholds};
use pnmsim::base::{ParamFluid, ParamGeometry, ParamPhysics, ThermoState};
use pnmsim::fluids::Fluid;
use pnmsim::geometry::Geometry;
use pnmsim::network::Network;
use pnmsim::physics::Physics;
use pnmsim::PnmError;

#[test]
fn test_capillary_purcell_two_pores() -> Result<(), PnmError> {
    // two pores with radius 5e-6 joined by a throat with radius 5e-6
    //
    //   (0)=======(1)
    //    |<-1e-4->|
    let network = Network::new(vec![[0.0, 0.0, 0.0], [1e-4, 0.0, 0.0]], vec![[0, 1]])?;
    let geometry = Geometry::from_diameters(&network, &[1e-5, 1e-5], &[1e-5], &ParamGeometry::sample_stick_and_ball())?;
    assert_relative_eq!(geometry.throat(0).length, 9e-5, max_relative = 1e-12);

    // water: σ = 0.072, θ = 110°; Purcell toroid R = 1e-5
    let water = Fluid::new(&ParamFluid::sample_water(), ThermoState::default())?;
    let air = Fluid::new(&ParamFluid::sample_air(), ThermoState::default())?;
    let physics = Physics::new(&network, &geometry, &water, &ParamPhysics::sample_standard_water())?;

    // closed-form expression
    let (r, rr, sigma, theta) = (5e-6_f64, 1e-5_f64, 0.072_f64, 110.0_f64.to_radians());
    let alpha = theta - std::f64::consts::PI + f64::asin(f64::sin(theta) / (1.0 + r / rr));
    let correct = (-2.0 * sigma / r) * f64::cos(theta - alpha) / (1.0 + rr / r * (1.0 - f64::cos(alpha)));
    let pc = physics.entry_pressure().ok_or(PnmError::config("entry pressure is missing"))?;
    assert_relative_eq!(pc[0], correct, max_relative = 1e-14);
    assert_relative_eq!(pc[0], 17409.005482083565, max_relative = 1e-10);

    // the throat is invaded exactly at its entry pressure
    let mut alg = OrdinaryPercolation::new(&network, &geometry, &physics, &air)?;
    alg.set_inlets(&[0])?;
    let drainage = alg.run(&Thresholds::Explicit {
        values: vec![0.99 * pc[0], pc[0]],
    })?;
    println!("{}", drainage);
    assert_eq!(drainage.invading(), "water");
    assert_eq!(drainage.defending(), "air");
    assert_eq!(drainage.curve().saturations(), &[0.0, 1.0]);
    assert_eq!(drainage.throat_invasion_pressure(0), Some(pc[0]));
    assert_eq!(drainage.pore_states_at(0), &[PoreState::Defending, PoreState::Defending]);
    assert_eq!(drainage.pore_states_at(1), &[PoreState::Invaded, PoreState::Invaded]);
    Ok(())
}

#[test]
fn test_capillary_requires_entry_pressure() -> Result<(), PnmError> {
    let network = Network::new(vec![[0.0, 0.0, 0.0], [1e-4, 0.0, 0.0]], vec![[0, 1]])?;
    let geometry = Geometry::from_diameters(&network, &[1e-5, 1e-5], &[1e-5], &ParamGeometry::sample_stick_and_ball())?;
    let air = Fluid::new(&ParamFluid::sample_air(), ThermoState::default())?;
    let physics = Physics::new(&network, &geometry, &air, &ParamPhysics::sample_standard_air())?;
    assert_eq!(
        OrdinaryPercolation::new(&network, &geometry, &physics, &air)
            .err()
            .map(|e| e.to_string()),
        Some("configuration error: the entry pressure of air is not modelled".to_string())
    );
    Ok(())
}
