use crate::fdtd::Terminator;

/// First order Mur absorbing boundary.
#[derive(Copy, Clone, Debug)]
pub struct MurTerminator {
    coefficient: f32,
    old_inner: f32,
}

impl MurTerminator {
    /// Creates a boundary for the edge medium described by `permittivity` and
    /// `permeability`.
    pub fn new(courant: f32, permittivity: f32, permeability: f32) -> Self {
        let s = courant / f32::sqrt(permittivity * permeability);

        Self {
            coefficient: (s - 1.0) / (s + 1.0),
            old_inner: 0.0,
        }
    }

    #[inline]
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }
}

impl Terminator for MurTerminator {
    #[inline]
    fn next_e(&mut self, edge: f32, inner: f32) -> f32 {
        let next = self.old_inner + self.coefficient * (inner - edge);
        self.old_inner = inner;
        next
    }

    #[inline]
    fn reset(&mut self, inner: f32) {
        self.old_inner = inner;
    }
}

/// Short circuit termination, the edge field is always zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct FixedTerminator;

impl Terminator for FixedTerminator {
    #[inline]
    fn next_e(&mut self, _edge: f32, _inner: f32) -> f32 {
        0.0
    }

    #[inline]
    fn reset(&mut self, _inner: f32) {}
}
