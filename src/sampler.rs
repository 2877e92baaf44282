/// Converts continuous coordinates into grid indices.
///
/// The same sampler is used for the spatial axis (with `delta_x`) and the time axis
/// (with `delta_t`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sampler {
    discrete: f32,
}

impl Sampler {
    #[inline]
    pub fn new(discrete: f32) -> Self {
        Self { discrete }
    }

    /// The discretization step.
    #[inline]
    pub fn discrete(&self) -> f32 {
        self.discrete
    }

    /// Nearest grid index of `x`, rounding half up.
    #[inline]
    pub fn sample(&self, x: f32) -> isize {
        (x / self.discrete + 0.5).floor() as isize
    }

    /// Like [`Sampler::sample`] but `None` for coordinates left of the origin.
    #[inline]
    pub fn sample_index(&self, x: f32) -> Option<usize> {
        usize::try_from(self.sample(x)).ok()
    }
}
