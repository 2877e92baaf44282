//! Frequency spectrum of a recorded signal.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::Error;

/// Normalized magnitude spectrum, zero frequency centered.
#[derive(Clone, Debug)]
pub struct Spectrum {
    /// Frequency of each bin in Hz, from `-n/2 * df` upwards.
    pub frequencies: ndarray::Array1<f32>,
    /// `|FFT|` divided by its maximum.
    pub magnitudes: ndarray::Array1<f32>,
}

impl Spectrum {
    /// Computes the spectrum of `signal` sampled every `delta_t` seconds.
    pub fn from_signal(signal: &[f32], delta_t: f32) -> Result<Self, Error> {
        let n = signal.len();
        if n == 0 {
            return Err(Error::EmptySignal);
        }

        let mut buffer: Vec<Complex<f32>> = signal.iter()
            .map(|&re| Complex::new(re, 0.0))
            .collect();
        FftPlanner::<f32>::new().plan_fft_forward(n).process(&mut buffer);

        let mut magnitudes: Vec<f32> = buffer.iter().map(|c| c.norm()).collect();
        // zero frequency to the middle
        magnitudes.rotate_right(n / 2);

        let max = magnitudes.iter().cloned().fold(0.0, f32::max);
        if max > 0.0 {
            magnitudes.iter_mut().for_each(|m| *m /= max);
        }

        let df = 1.0 / (n as f32 * delta_t);
        let half = (n / 2) as f32;
        let frequencies = (0..n).map(|i| (i as f32 - half) * df).collect();

        Ok(Self {
            frequencies,
            magnitudes: ndarray::Array1::from(magnitudes),
        })
    }

    /// Frequency resolution.
    pub fn resolution(&self) -> f32 {
        if self.frequencies.len() > 1 {
            self.frequencies[1] - self.frequencies[0]
        } else {
            0.0
        }
    }

    /// Frequency of the strongest bin, the lowest one on ties.
    pub fn peak_frequency(&self) -> f32 {
        let mut peak = 0;
        for (i, &m) in self.magnitudes.iter().enumerate() {
            if m > self.magnitudes[peak] {
                peak = i;
            }
        }
        self.frequencies[peak]
    }
}
