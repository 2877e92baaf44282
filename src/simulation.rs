use std::f32::consts::PI;

use crate::{Error, Sampler, Solver};
use crate::display::{DisplayField, FieldDisplay};
use crate::probe::Probe;

/// Physical constants used by the update equations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Wave impedance of free space, in ohms.
    pub wave_impedance: f32,
    /// Speed of light in vacuum, in m/s.
    pub speed_of_light: f32,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            wave_impedance: 120.0 * PI,
            speed_of_light: 299_792_458.0,
        }
    }
}

/// Simulation specific parameters.
#[derive(Copy, Clone, Debug)]
pub struct SimulationParameters {
    /// The physical size of each spacial step.
    pub delta_x: f32,
    /// The length of each temperal step in the simulation.
    pub delta_t: f32,
    /// The Courant number of the update equations.
    pub courant: f32,
}

impl SimulationParameters {
    /// Derives the time step from the phase velocity of the wave in the medium.
    pub fn from_phase_velocity(delta_x: f32, courant: f32, velocity: f32) -> Self {
        Self {
            delta_x,
            delta_t: delta_x * courant / velocity,
            courant,
        }
    }

    /// Number of time steps covering `duration` seconds.
    pub fn steps_for(&self, duration: f32) -> usize {
        Sampler::new(self.delta_t).sample_index(duration).unwrap_or(0)
    }

    /// Number of cells covering `length` meters.
    pub fn cells_for(&self, length: f32) -> usize {
        Sampler::new(self.delta_x).sample_index(length).unwrap_or(0)
    }

    /// Times of the first `nsteps` steps.
    pub fn time_axis(&self, nsteps: usize) -> ndarray::Array1<f32> {
        (0..nsteps).map(|n| n as f32 * self.delta_t).collect()
    }
}

/// Describes the field state at the current time step.
#[derive(Clone, Debug)]
pub struct SimulationState {
    /// Number of time steps done so far.
    pub time_step: usize,
    /// The electric field at each grid point.
    pub e_field: ndarray::Array1<f32>,
    /// The magnetic field between each pair of grid points.
    pub h_field: ndarray::Array1<f32>,
}

/// Describes a simulation.
pub struct SimulationDescriptor<S: Solver> {
    /// The `Solver` for the simulation.
    pub solver: S,
    /// The parameters for the simulation.
    pub sim_params: SimulationParameters,
    /// Grid indices of the probes, in registration order.
    pub probe_positions: Vec<usize>,
    /// The state that the simulation starts in.
    pub init_state: Option<SimulationState>,
}

/// Describes a simulation run.
#[derive(Copy, Clone, Debug)]
pub struct RunDescriptor {
    /// How many time steps to compute.
    pub nsteps: usize,
    /// Whether or not to print information to the console.
    pub verbose: bool,
    /// A snapshot is pushed to the display every `speed_refresh` steps, `0` disables it.
    pub speed_refresh: usize,
    /// Which field the display receives.
    pub display_field: DisplayField,
}

/// The main `struct` of the framework.
pub struct Simulation<S: Solver> {
    solver: S,
    sim_params: SimulationParameters,
    state: SimulationState,
    probes: Vec<Probe>,
}

impl<S: Solver> Simulation<S> {
    /// Creates a new `Simulation` instance.
    pub fn new(desc: SimulationDescriptor<S>) -> Result<Self, Error> {
        let npoints = desc.solver.npoints();
        if npoints < 3 {
            return Err(Error::BadGrid { npoints });
        }

        // create arrays for initial data
        let state = desc.init_state.unwrap_or(SimulationState {
            time_step: 0,
            e_field: ndarray::Array1::<f32>::zeros(npoints),
            h_field: ndarray::Array1::<f32>::zeros(npoints - 1),
        });
        if state.e_field.len() != npoints {
            return Err(Error::BadInit {
                array_name: "E".to_string(),
                input_length: state.e_field.len(),
                expected_length: npoints,
            })
        }
        if state.h_field.len() != npoints - 1 {
            return Err(Error::BadInit {
                array_name: "H".to_string(),
                input_length: state.h_field.len(),
                expected_length: npoints - 1,
            })
        }

        // H is only defined up to npoints - 2
        let probes = desc.probe_positions.iter()
            .map(|&position| {
                if position < npoints - 1 {
                    Ok(Probe::new(position))
                } else {
                    Err(Error::BadProbePosition { position, npoints })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut solver = desc.solver;
        solver.init(&state);

        Ok(Self {
            solver,
            sim_params: desc.sim_params,
            state,
            probes,
        })
    }

    /// Advances the simulation by one time step and records the probes.
    #[inline]
    pub fn step(&mut self) {
        self.solver.step(&mut self.state);
        for probe in self.probes.iter_mut() {
            probe.add_data(self.state.e_field.view(), self.state.h_field.view());
        }
    }

    /// Does a computational run.
    pub fn run(&mut self, desc: RunDescriptor, display: &mut dyn FieldDisplay) {
        // setup output if verbose
        let bar = if desc.verbose {
            println!("# of time steps: {}", desc.nsteps);
            Some(indicatif::ProgressBar::new(desc.nsteps as u64))
        } else {
            None
        };

        display.activate();
        display.draw_probes(&self.probe_positions());
        display.draw_sources(&self.solver.source_positions());

        for _ in 0..desc.nsteps {
            let t = self.state.time_step;
            self.step();

            if desc.speed_refresh > 0 && t % desc.speed_refresh == 0 {
                let field = match desc.display_field {
                    DisplayField::E => self.state.e_field.view(),
                    DisplayField::H => self.state.h_field.view(),
                };
                display.update_data(field, t);
            }

            if let Some(ref bar) = bar {
                bar.inc(1)
            }
        }

        display.stop();
        if let Some(ref bar) = bar {
            bar.finish();
        }
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn sim_params(&self) -> SimulationParameters {
        self.sim_params
    }

    /// Probes in registration order.
    #[inline]
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    pub fn probe_positions(&self) -> Vec<usize> {
        self.probes.iter().map(Probe::position).collect()
    }
}
