//! Includes commonly used library components.

pub use crate::{
    Error,
    PhysicalConstants,
    RunDescriptor,
    Sampler,
    Simulation,
    SimulationDescriptor,
    SimulationParameters,
    SimulationState,
    Solver,
};
pub use crate::display::{DisplayDescriptor, DisplayField, FieldDisplay, NullDisplay, SnapshotRecorder};
pub use crate::fdtd::{FdtdSolver, FdtdSolverDescriptor, PlaneWave, Terminator};
pub use crate::probe::Probe;
pub use crate::spectrum::Spectrum;
