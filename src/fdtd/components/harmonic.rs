use std::f32::consts::PI;

use crate::fdtd::PlaneWave;

/// A harmonic plane wave.
#[derive(Copy, Clone, Debug)]
pub struct HarmonicPlaneWave {
    /// Amplitude of the wave.
    pub amplitude: f32,
    /// Number of cells per wavelength.
    pub cells_per_wavelength: f32,
    /// Initial phase in radians.
    pub phase: f32,
    /// Courant number of the simulation.
    pub courant: f32,
    /// Relative permittivity of the medium the source sits in.
    pub permittivity: f32,
    /// Relative permeability of the medium the source sits in.
    pub permeability: f32,
}

impl HarmonicPlaneWave {
    /// Frequency of the wave for a time step of `delta_t`.
    ///
    /// One period lasts `cells_per_wavelength / courant` time steps.
    #[inline]
    pub fn frequency(&self, delta_t: f32) -> f32 {
        self.courant / (self.cells_per_wavelength * delta_t)
    }
}

impl PlaneWave for HarmonicPlaneWave {
    #[inline]
    fn field(&self, m: f32, q: f32) -> f32 {
        let refraction = f32::sqrt(self.permeability * self.permittivity);

        self.amplitude * f32::sin(
            2.0 * PI / self.cells_per_wavelength * (self.courant * q - refraction * m)
                + self.phase
        )
    }
}
