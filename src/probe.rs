//! Field probes.

/// Records the field values at a fixed grid point on every time step.
#[derive(Clone, Debug)]
pub struct Probe {
    position: usize,
    e: Vec<f32>,
    h: Vec<f32>,
}

impl Probe {
    #[inline]
    pub fn new(position: usize) -> Self {
        Self {
            position,
            e: Vec::new(),
            h: Vec::new(),
        }
    }

    /// Appends `e_field[position]` and `h_field[position]`.
    ///
    /// `position` must be a valid index of both arrays.
    #[inline]
    pub fn add_data(&mut self, e_field: ndarray::ArrayView1<f32>, h_field: ndarray::ArrayView1<f32>) {
        self.e.push(e_field[self.position]);
        self.h.push(h_field[self.position]);
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Recorded electric field, one sample per step.
    #[inline]
    pub fn e(&self) -> &[f32] {
        &self.e
    }

    /// Recorded magnetic field, one sample per step.
    #[inline]
    pub fn h(&self) -> &[f32] {
        &self.h
    }
}
