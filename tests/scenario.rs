//! Scenario tests for the field update loop.

use approx::assert_relative_eq;
use yee1d::prelude::*;
use yee1d::fdtd::components::{GaussianPlaneWave, HarmonicPlaneWave, Medium};

const EPS: f32 = 6.0;

fn harmonic(amplitude: f32) -> HarmonicPlaneWave {
    HarmonicPlaneWave {
        amplitude,
        cells_per_wavelength: 500.0,
        phase: 0.0,
        courant: 1.0,
        permittivity: EPS,
        permeability: 1.0,
    }
}

fn simulation(
    npoints: usize,
    source: Box<dyn PlaneWave>,
    source_position: usize,
    probe_positions: Vec<usize>,
) -> Simulation<FdtdSolver> {
    let constants = PhysicalConstants::default();
    let medium = Medium::uniform(npoints, EPS, 1.0);
    let sim_params = SimulationParameters::from_phase_velocity(
        1e-3,
        1.0,
        medium.phase_velocity(constants.speed_of_light),
    );

    Simulation::new(SimulationDescriptor {
        solver: FdtdSolver::standard(medium, source, source_position, 1.0, constants).unwrap(),
        sim_params,
        probe_positions,
        init_state: None,
    }).unwrap()
}

fn max_abs<'a, I: IntoIterator<Item = &'a f32>>(values: I) -> f32 {
    values.into_iter().fold(0.0, |m, v| m.max(v.abs()))
}

#[test]
fn nothing_propagates_faster_than_one_cell_per_step() {
    let source_position = 150;
    let mut simulation = simulation(300, Box::new(harmonic(1.0)), source_position, vec![]);

    for n in 1..=100 {
        simulation.step();
        let e = &simulation.state().e_field;
        for i in 0..(source_position - n) {
            assert_eq!(e[i], 0.0, "E[{}] after {} steps", i, n);
        }
    }
    assert!(simulation.state().e_field[source_position] != 0.0);
}

#[test]
fn right_edge_is_always_zero() {
    let mut simulation = simulation(120, Box::new(harmonic(1.0)), 20, vec![]);
    let sim_params = simulation.sim_params();
    let mut recorder = SnapshotRecorder::new(DisplayDescriptor {
        delta_x: sim_params.delta_x,
        delta_t: sim_params.delta_t,
        npoints: 120,
        y_min: -1.1,
        y_max: 1.1,
        y_label: "Ez, V/m".to_string(),
    });

    simulation.run(RunDescriptor {
        nsteps: 800,
        verbose: false,
        speed_refresh: 1,
        display_field: DisplayField::E,
    }, &mut recorder);

    assert_eq!(recorder.snapshots().len(), 800);
    for (_, field) in recorder.snapshots() {
        assert_eq!(field[119], 0.0);
    }
    // the wave did reach the right edge and bounced back
    assert!(max_abs(recorder.snapshots()[799].1.iter().take(20)) > 0.0);
}

#[test]
fn left_edge_absorbs_reflected_pulse() {
    let pulse = GaussianPlaneWave {
        amplitude: 1.0,
        delay: 150.0,
        width: 50.0,
        courant: 1.0,
        permittivity: EPS,
        permeability: 1.0,
    };
    let mut simulation = simulation(400, Box::new(pulse), 200, vec![100]);

    simulation.run(RunDescriptor {
        nsteps: 2200,
        verbose: false,
        speed_refresh: 0,
        display_field: DisplayField::E,
    }, &mut NullDisplay);

    // the pulse bounced off the fixed right edge and passed the probe on its way left
    let incident = max_abs(simulation.probes()[0].e());
    assert!(incident > 0.8, "incident peak {}", incident);

    // once it left through the Mur boundary, hardly anything remains
    let remaining = max_abs(simulation.state().e_field.iter());
    assert!(remaining < 0.01 * incident, "remaining {}", remaining);
}

#[test]
fn lab_scenario_sizes() {
    let c = physical_constants::SPEED_OF_LIGHT_IN_VACUUM as f32;
    let constants = PhysicalConstants {
        speed_of_light: c,
        ..PhysicalConstants::default()
    };
    let (dx, courant, max_time_s, max_size_m) = (1e-3f32, 1.0f32, 80e-9f32, 2.5f32);

    let velocity = c / EPS.sqrt();
    let dt = dx * courant / velocity;
    let sim_params = SimulationParameters::from_phase_velocity(dx, courant, velocity);
    assert_relative_eq!(sim_params.delta_t, dt);

    let max_time = sim_params.steps_for(max_time_s);
    let max_size = sim_params.cells_for(max_size_m);
    assert_eq!(max_time, (max_time_s / dt + 0.5).floor() as usize);
    assert_eq!(max_size, (max_size_m / dx + 0.5).floor() as usize);
    assert_eq!(max_size, 2500);

    let source_position = sim_params.cells_for(max_size_m / 2.0);
    let probe_position = sim_params.cells_for(1.0);
    let mut simulation = Simulation::new(SimulationDescriptor {
        solver: FdtdSolver::standard(
            Medium::uniform(max_size, EPS, 1.0),
            Box::new(harmonic(0.5)),
            source_position,
            courant,
            constants,
        ).unwrap(),
        sim_params,
        probe_positions: vec![probe_position],
        init_state: None,
    }).unwrap();

    simulation.run(RunDescriptor {
        nsteps: max_time,
        verbose: false,
        speed_refresh: 50,
        display_field: DisplayField::E,
    }, &mut NullDisplay);

    let probe = &simulation.probes()[0];
    assert_eq!(probe.e().len(), max_time);
    assert_eq!(probe.h().len(), max_time);
    assert_eq!(simulation.state().time_step, max_time);
    assert_eq!(simulation.state().e_field[max_size - 1], 0.0);

    let spectrum = Spectrum::from_signal(probe.e(), sim_params.delta_t).unwrap();
    assert_eq!(spectrum.magnitudes.len(), max_time);
    assert!(spectrum.magnitudes.iter().all(|m| m.is_finite() && *m <= 1.0));
}
