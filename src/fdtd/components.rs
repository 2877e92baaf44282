//! Sources, boundaries and media.

mod gaussian;
mod harmonic;
mod medium;
mod terminator;

pub use gaussian::GaussianPlaneWave;
pub use harmonic::HarmonicPlaneWave;
pub use medium::{Medium, MediumDescriptor};
pub use terminator::{FixedTerminator, MurTerminator};
