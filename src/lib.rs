//! A framework for simulating 1-dimensional electromagnetic waves with the FDTD method.
//!
//! The electric field `E` lives on `N` cells and the magnetic field `H` on the `N - 1`
//! half cells between them. A plane wave is injected with the total-field/scattered-field
//! technique, the left edge is terminated by a first order Mur absorbing boundary and the
//! right edge is held at zero.
//!
//! To get started, refer to the `demos` directory in the main repository.

mod sampler;
mod simulation;

pub mod curve;
pub mod display;
pub mod fdtd;
pub mod prelude;
pub mod probe;
pub mod spectrum;

pub use sampler::Sampler;
pub use simulation::{
    PhysicalConstants, RunDescriptor, Simulation, SimulationDescriptor, SimulationParameters,
    SimulationState,
};

/// Represents an error in the simulation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Init {array_name} array does not have expected length \
        ( {array_name} array length: {input_length}, \
        expected length: {expected_length} )")]
    BadInit {
        array_name: String,
        input_length: usize,
        expected_length: usize,
    },
    #[error("Medium {array_name} array does not have expected length \
        ( {array_name} array length: {input_length}, \
        expected length: {expected_length} )")]
    BadMedium {
        array_name: String,
        input_length: usize,
        expected_length: usize,
    },
    #[error("Grid needs at least 3 points, got {npoints}")]
    BadGrid { npoints: usize },
    #[error("Source position {position} is outside the grid interior ( grid points: {npoints} )")]
    BadSourcePosition { position: usize, npoints: usize },
    #[error("Probe position {position} is outside the grid ( grid points: {npoints} )")]
    BadProbePosition { position: usize, npoints: usize },
    #[error("Cannot compute the spectrum of an empty signal")]
    EmptySignal,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
}

/// Manages actual computations.
pub trait Solver {
    /// Advances `state` by a single time step.
    fn step(&mut self, state: &mut SimulationState);

    /// Synchronizes any boundary memory with `state` before stepping begins.
    fn init(&mut self, state: &SimulationState);

    /// Number of electric field points on the grid.
    fn npoints(&self) -> usize;

    /// Grid indices of the injected sources.
    fn source_positions(&self) -> Vec<usize>;
}
