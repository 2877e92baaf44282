pub mod components;

mod fdtd_solver;

pub use fdtd_solver::{FdtdSolver, FdtdSolverDescriptor};

/// An incident plane wave, evaluated analytically for total-field/scattered-field injection.
pub trait PlaneWave {
    /// Field of the incident wave at discrete position `m` and discrete time `q`.
    ///
    /// Both arguments may be fractional, half steps are used to line the incident
    /// field up with the staggered grid.
    fn field(&self, m: f32, q: f32) -> f32;
}

/// Handles the electric field at one end of the grid, representing a physical boundary.
pub trait Terminator {
    /// Returns the next value of the edge cell.
    ///
    /// `edge` is the current edge value and `inner` the already updated value of its
    /// neighbour.
    fn next_e(&mut self, edge: f32, inner: f32) -> f32;

    /// Resets any memory to the inner neighbour value of a fresh state.
    fn reset(&mut self, inner: f32);
}
