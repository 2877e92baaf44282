use yee1d::prelude::*;
use yee1d::fdtd::components;

fn main() {
    let constants = PhysicalConstants::default();

    let courant = 1.0;
    let max_time_s = 80e-9; // [s]
    let max_size_m = 2.5; // [m]
    let delta_x = 1e-3; // [m]
    let speed_refresh = 50;

    let permittivity = 6.0;
    let permeability = 1.0;

    let velocity = constants.speed_of_light / f32::sqrt(permittivity * permeability);
    let sim_params = SimulationParameters::from_phase_velocity(delta_x, courant, velocity);

    let max_time = sim_params.steps_for(max_time_s);
    let max_size = sim_params.cells_for(max_size_m);
    let source_position = sim_params.cells_for(max_size_m / 2.0);
    let probe_position = sim_params.cells_for(1.0);

    let source = components::HarmonicPlaneWave {
        amplitude: 0.5,
        cells_per_wavelength: 500.0,
        phase: 0.0,
        courant,
        permittivity,
        permeability,
    };

    let mut simulation = Simulation::new(SimulationDescriptor {
        solver: FdtdSolver::standard(
            components::Medium::uniform(max_size, permittivity, permeability),
            Box::new(source),
            source_position,
            courant,
            constants,
        ).unwrap(),
        sim_params,
        probe_positions: vec![probe_position],
        init_state: None,
    }).unwrap();

    println!(
        "\n-- General Simulation Info --\n\
        # of points:  {}\n\
        Δx:           {:<9.2e} m\n\
        Δt:           {:<9.2e} s\n\
        source:       {:<9.2e} Hz\n",
        max_size,
        sim_params.delta_x,
        sim_params.delta_t,
        source.frequency(sim_params.delta_t),
    );

    let mut display = SnapshotRecorder::new(DisplayDescriptor {
        delta_x: sim_params.delta_x,
        delta_t: sim_params.delta_t,
        npoints: max_size,
        y_min: -1.1,
        y_max: 1.1,
        y_label: "Ez, V/m".to_string(),
    });

    simulation.run(RunDescriptor {
        nsteps: max_time,
        verbose: true,
        speed_refresh,
        display_field: DisplayField::E,
    }, &mut display);

    let probe = &simulation.probes()[0];
    let spectrum = Spectrum::from_signal(probe.e(), sim_params.delta_t).unwrap();

    println!(
        "\n-- Results --\n\
        snapshots:    {}\n\
        clipped:      {}\n\
        probe at:     {} m\n\
        peak:         {:<9.2e} Hz\n\
        resolution:   {:<9.2e} Hz",
        display.snapshots().len(),
        display.out_of_range(),
        display.position_of(probe.position()),
        spectrum.peak_frequency().abs(),
        spectrum.resolution(),
    );
}
