use crate::Error;

pub struct MediumDescriptor<Fe: Fn(f32) -> f32, Fm: Fn(f32) -> f32> {
    /// Number of electric field points.
    pub npoints: usize,
    /// Spatial step, used to turn indices into positions.
    pub delta_x: f32,
    /// Relative permittivity as a function of position.
    pub permittivity_fn: Fe,
    /// Relative permeability as a function of position.
    pub permeability_fn: Fm,
}

/// Relative material constants along the grid.
///
/// Permittivity is sampled at the `E` points, permeability at the `H` half points.
#[derive(Clone, Debug)]
pub struct Medium {
    permittivity: ndarray::Array1<f32>,
    permeability: ndarray::Array1<f32>,
}

impl Medium {
    pub fn new<Fe: Fn(f32) -> f32, Fm: Fn(f32) -> f32>(desc: MediumDescriptor<Fe, Fm>) -> Self {
        let npoints = desc.npoints;

        Self {
            permittivity: (0..npoints)
                .map(|n| (desc.permittivity_fn)(n as f32 * desc.delta_x))
                .collect(),
            permeability: (0..npoints.saturating_sub(1))
                .map(|n| (desc.permeability_fn)((n as f32 + 0.5) * desc.delta_x))
                .collect(),
        }
    }

    /// A medium with the same constants everywhere.
    pub fn uniform(npoints: usize, permittivity: f32, permeability: f32) -> Self {
        Self {
            permittivity: ndarray::Array1::from_elem(npoints, permittivity),
            permeability: ndarray::Array1::from_elem(npoints.saturating_sub(1), permeability),
        }
    }

    /// Builds a medium from explicit arrays, `permeability` must be one shorter.
    pub fn from_arrays(
        permittivity: ndarray::Array1<f32>,
        permeability: ndarray::Array1<f32>,
    ) -> Result<Self, Error> {
        let expected_length = permittivity.len().saturating_sub(1);
        if permeability.len() != expected_length {
            return Err(Error::BadMedium {
                array_name: "Permeability".to_string(),
                input_length: permeability.len(),
                expected_length,
            });
        }

        Ok(Self { permittivity, permeability })
    }

    #[inline]
    pub fn npoints(&self) -> usize {
        self.permittivity.len()
    }

    #[inline]
    pub fn permittivity(&self) -> ndarray::ArrayView1<f32> {
        self.permittivity.view()
    }

    #[inline]
    pub fn permeability(&self) -> ndarray::ArrayView1<f32> {
        self.permeability.view()
    }

    /// Fastest phase velocity found in the medium for a vacuum speed of light `c`.
    pub fn phase_velocity(&self, c: f32) -> f32 {
        self.permittivity.iter().zip(self.permeability.iter())
            .map(|(eps, mu)| c / f32::sqrt(eps * mu))
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn staggered_lengths() {
        let medium = Medium::uniform(10, 6.0, 1.0);
        assert_eq!(medium.npoints(), 10);
        assert_eq!(medium.permittivity().len(), 10);
        assert_eq!(medium.permeability().len(), 9);
    }

    #[test]
    fn samples_closures_at_cell_positions() {
        let medium = Medium::new(MediumDescriptor {
            npoints: 4,
            delta_x: 0.5,
            permittivity_fn: |x| if x < 1.0 { 1.0 } else { 4.0 },
            permeability_fn: |x| 1.0 + x,
        });
        assert_eq!(medium.permittivity().to_vec(), vec![1.0, 1.0, 4.0, 4.0]);
        assert_eq!(medium.permeability().to_vec(), vec![1.25, 1.75, 2.25]);
    }

    #[test]
    fn rejects_mismatched_arrays() {
        let result = Medium::from_arrays(ndarray::Array1::ones(5), ndarray::Array1::ones(5));
        assert!(matches!(
            result,
            Err(Error::BadMedium { input_length: 5, expected_length: 4, .. })
        ));
    }

    #[test]
    fn phase_velocity_of_fastest_cell() {
        let medium = Medium::new(MediumDescriptor {
            npoints: 3,
            delta_x: 1.0,
            permittivity_fn: |x| if x < 0.5 { 4.0 } else { 9.0 },
            permeability_fn: |_| 1.0,
        });
        assert_relative_eq!(medium.phase_velocity(3.0), 1.5);
    }
}
