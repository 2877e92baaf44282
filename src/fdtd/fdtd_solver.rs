use crate::{Error, PhysicalConstants, SimulationState, Solver};
use crate::fdtd::{PlaneWave, Terminator};
use crate::fdtd::components::{FixedTerminator, Medium, MurTerminator};

/// Describes the composition of a `FdtdSolver`.
pub struct FdtdSolverDescriptor {
    pub medium: Medium,
    pub source: Box<dyn PlaneWave>,
    /// Index of the first total field `E` point.
    pub source_position: usize,
    pub courant: f32,
    pub constants: PhysicalConstants,
    pub left: Box<dyn Terminator>,
    pub right: Box<dyn Terminator>,
}

/// Does single threaded leapfrog updates on the CPU.
///
/// The Courant number inside the medium, `courant / sqrt(eps * mu)`, must not exceed 1
/// anywhere on the grid. This is not checked, violating it makes the fields diverge.
pub struct FdtdSolver {
    source: Box<dyn PlaneWave>,
    source_position: usize,
    left: Box<dyn Terminator>,
    right: Box<dyn Terminator>,
    h_coefficients: ndarray::Array1<f32>,
    e_coefficients: ndarray::Array1<f32>,
    h_source_coefficient: f32,
    e_source_coefficient: f32,
}

impl FdtdSolver {
    pub fn new(desc: FdtdSolverDescriptor) -> Result<Self, Error> {
        let npoints = desc.medium.npoints();
        if npoints < 3 {
            return Err(Error::BadGrid { npoints });
        }
        if desc.source_position < 1 || desc.source_position > npoints - 2 {
            return Err(Error::BadSourcePosition {
                position: desc.source_position,
                npoints,
            });
        }

        let w0 = desc.constants.wave_impedance;
        let courant = desc.courant;
        let eps = desc.medium.permittivity();
        let mu = desc.medium.permeability();

        let h_coefficients = mu.mapv(|mu| courant / (w0 * mu));
        let e_coefficients = eps.mapv(|eps| courant * w0 / eps);
        let h_source_coefficient = h_coefficients[desc.source_position - 1];
        let e_source_coefficient = courant
            / f32::sqrt(eps[desc.source_position] * mu[desc.source_position - 1]);

        Ok(Self {
            source: desc.source,
            source_position: desc.source_position,
            left: desc.left,
            right: desc.right,
            h_coefficients,
            e_coefficients,
            h_source_coefficient,
            e_source_coefficient,
        })
    }

    /// A solver with a Mur boundary on the left and a fixed boundary on the right.
    pub fn standard(
        medium: Medium,
        source: Box<dyn PlaneWave>,
        source_position: usize,
        courant: f32,
        constants: PhysicalConstants,
    ) -> Result<Self, Error> {
        if medium.npoints() < 3 {
            return Err(Error::BadGrid { npoints: medium.npoints() });
        }
        let left = MurTerminator::new(
            courant,
            medium.permittivity()[0],
            medium.permeability()[0],
        );

        Self::new(FdtdSolverDescriptor {
            medium,
            source,
            source_position,
            courant,
            constants,
            left: Box::new(left),
            right: Box::new(FixedTerminator),
        })
    }
}

impl Solver for FdtdSolver {
    /// Updates `H` completely, then `E` completely, then the edges.
    fn step(&mut self, state: &mut SimulationState) {
        let q = state.time_step as f32;
        let src = self.source_position;
        let SimulationState { e_field, h_field, .. } = &mut *state;

        // magnetic field
        ndarray::Zip::from(h_field.view_mut())
            .and(e_field.windows(2))
            .and(&self.h_coefficients)
            .for_each(|h, e, &c| {
                *h += (e[1] - e[0]) * c;
            });
        // scattered field correction
        h_field[src - 1] -= self.h_source_coefficient * self.source.field(0.0, q);

        // electric field, edges excluded
        ndarray::Zip::from(e_field.slice_mut(ndarray::s![1..-1]))
            .and(h_field.windows(2))
            .and(self.e_coefficients.slice(ndarray::s![1..-1]))
            .for_each(|e, h, &c| {
                *e += (h[1] - h[0]) * c;
            });
        // total field correction
        e_field[src] += self.e_source_coefficient * self.source.field(-0.5, q + 0.5);

        let last = e_field.len() - 1;
        e_field[last] = self.right.next_e(e_field[last], e_field[last - 1]);
        e_field[0] = self.left.next_e(e_field[0], e_field[1]);

        state.time_step += 1;
    }

    fn init(&mut self, state: &SimulationState) {
        let n = state.e_field.len();
        self.left.reset(state.e_field[1]);
        self.right.reset(state.e_field[n - 2]);
    }

    fn npoints(&self) -> usize {
        self.e_coefficients.len()
    }

    fn source_positions(&self) -> Vec<usize> {
        vec![self.source_position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fdtd::components::{GaussianPlaneWave, HarmonicPlaneWave};

    fn pulse(amplitude: f32) -> Box<dyn PlaneWave> {
        Box::new(GaussianPlaneWave {
            amplitude,
            delay: 60.0,
            width: 10.0,
            courant: 1.0,
            permittivity: 1.0,
            permeability: 1.0,
        })
    }

    fn fresh_state(npoints: usize) -> SimulationState {
        SimulationState {
            time_step: 0,
            e_field: ndarray::Array1::zeros(npoints),
            h_field: ndarray::Array1::zeros(npoints - 1),
        }
    }

    #[test]
    fn rejects_small_grids() {
        let result = FdtdSolver::standard(
            Medium::uniform(2, 1.0, 1.0),
            pulse(1.0),
            1,
            1.0,
            PhysicalConstants::default(),
        );
        assert!(matches!(result, Err(Error::BadGrid { npoints: 2 })));
    }

    #[test]
    fn rejects_source_on_edge() {
        for position in [0, 9] {
            let result = FdtdSolver::standard(
                Medium::uniform(10, 1.0, 1.0),
                pulse(1.0),
                position,
                1.0,
                PhysicalConstants::default(),
            );
            assert!(matches!(result, Err(Error::BadSourcePosition { npoints: 10, .. })));
        }
    }

    #[test]
    fn vacuum_tfsf_is_one_directional() {
        let mut solver = FdtdSolver::standard(
            Medium::uniform(200, 1.0, 1.0),
            pulse(1.0),
            50,
            1.0,
            PhysicalConstants::default(),
        ).unwrap();
        let mut state = fresh_state(200);
        solver.init(&state);

        for _ in 0..100 {
            solver.step(&mut state);
        }

        assert_eq!(state.time_step, 100);
        // the magic time step makes the incident field exact, nothing leaks left
        let leaked = state.e_field.slice(ndarray::s![..50]).iter().fold(0.0f32, |m, e| m.max(e.abs()));
        assert!(leaked < 1e-5, "leaked {}", leaked);
        // the pulse peak sits 40 cells right of the source
        let peak = state.e_field.iter().fold(0.0f32, |m, e| m.max(e.abs()));
        assert!((peak - 1.0).abs() < 1e-2, "peak {}", peak);
        assert!(state.e_field[90].abs() > 0.9);
    }

    #[test]
    fn harmonic_source_starts_from_zero_field() {
        let mut solver = FdtdSolver::standard(
            Medium::uniform(20, 1.0, 1.0),
            Box::new(HarmonicPlaneWave {
                amplitude: 1.0,
                cells_per_wavelength: 10.0,
                phase: 0.0,
                courant: 1.0,
                permittivity: 1.0,
                permeability: 1.0,
            }),
            10,
            1.0,
            PhysicalConstants::default(),
        ).unwrap();
        let mut state = fresh_state(20);
        solver.init(&state);
        solver.step(&mut state);

        assert_eq!(solver.npoints(), 20);
        assert_eq!(solver.source_positions(), vec![10]);
        // only the E correction at the source is non zero after one step
        for (i, e) in state.e_field.iter().enumerate() {
            if i == 10 {
                assert!(e.abs() > 0.0);
            } else {
                assert_eq!(*e, 0.0);
            }
        }
    }
}
