use crate::fdtd::PlaneWave;

/// A gaussian pulse plane wave.
#[derive(Copy, Clone, Debug)]
pub struct GaussianPlaneWave {
    pub amplitude: f32,
    /// Time step of the pulse maximum at `m = 0`.
    pub delay: f32,
    /// Width of the pulse in time steps.
    pub width: f32,
    pub courant: f32,
    pub permittivity: f32,
    pub permeability: f32,
}

impl PlaneWave for GaussianPlaneWave {
    #[inline]
    fn field(&self, m: f32, q: f32) -> f32 {
        let retarded = q - m * f32::sqrt(self.permittivity * self.permeability) / self.courant;

        self.amplitude * f32::exp(-((retarded - self.delay) / self.width).powi(2))
    }
}
