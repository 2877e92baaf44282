//! Sinks for periodic field snapshots.
//!
//! The numerical core only talks to a [`FieldDisplay`], rendering is left to the
//! implementor.

/// Which field array is pushed to a display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DisplayField {
    #[default]
    E,
    H,
}

/// What a display needs to know about the grid it shows.
#[derive(Clone, Debug)]
pub struct DisplayDescriptor {
    pub delta_x: f32,
    pub delta_t: f32,
    pub npoints: usize,
    pub y_min: f32,
    pub y_max: f32,
    pub y_label: String,
}

/// Receives snapshots of the field while a simulation runs.
pub trait FieldDisplay {
    fn activate(&mut self);
    fn draw_probes(&mut self, positions: &[usize]);
    fn draw_sources(&mut self, positions: &[usize]);
    fn update_data(&mut self, field: ndarray::ArrayView1<f32>, time_step: usize);
    fn stop(&mut self);
}

/// Discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullDisplay;

impl FieldDisplay for NullDisplay {
    fn activate(&mut self) {}
    fn draw_probes(&mut self, _positions: &[usize]) {}
    fn draw_sources(&mut self, _positions: &[usize]) {}
    fn update_data(&mut self, _field: ndarray::ArrayView1<f32>, _time_step: usize) {}
    fn stop(&mut self) {}
}

/// Keeps every snapshot in memory.
pub struct SnapshotRecorder {
    desc: DisplayDescriptor,
    active: bool,
    probe_positions: Vec<usize>,
    source_positions: Vec<usize>,
    snapshots: Vec<(usize, ndarray::Array1<f32>)>,
    out_of_range: usize,
}

impl SnapshotRecorder {
    pub fn new(desc: DisplayDescriptor) -> Self {
        Self {
            desc,
            active: false,
            probe_positions: Vec::new(),
            source_positions: Vec::new(),
            snapshots: Vec::new(),
            out_of_range: 0,
        }
    }

    #[inline]
    pub fn descriptor(&self) -> &DisplayDescriptor {
        &self.desc
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn probe_positions(&self) -> &[usize] {
        &self.probe_positions
    }

    #[inline]
    pub fn source_positions(&self) -> &[usize] {
        &self.source_positions
    }

    /// Snapshots with the time step they were taken at.
    #[inline]
    pub fn snapshots(&self) -> &[(usize, ndarray::Array1<f32>)] {
        &self.snapshots
    }

    /// Number of recorded samples outside `[y_min, y_max]`.
    ///
    /// A growing count usually means the Courant condition is violated.
    #[inline]
    pub fn out_of_range(&self) -> usize {
        self.out_of_range
    }

    /// Position in meters of grid index `index`.
    #[inline]
    pub fn position_of(&self, index: usize) -> f32 {
        index as f32 * self.desc.delta_x
    }

    /// Time in seconds of time step `time_step`.
    #[inline]
    pub fn time_of(&self, time_step: usize) -> f32 {
        time_step as f32 * self.desc.delta_t
    }
}

impl FieldDisplay for SnapshotRecorder {
    fn activate(&mut self) {
        self.active = true;
    }

    fn draw_probes(&mut self, positions: &[usize]) {
        self.probe_positions = positions.to_vec();
    }

    fn draw_sources(&mut self, positions: &[usize]) {
        self.source_positions = positions.to_vec();
    }

    fn update_data(&mut self, field: ndarray::ArrayView1<f32>, time_step: usize) {
        let (y_min, y_max) = (self.desc.y_min, self.desc.y_max);
        self.out_of_range += field.iter().filter(|&&v| !(y_min..=y_max).contains(&v)).count();
        self.snapshots.push((time_step, field.to_owned()));
    }

    fn stop(&mut self) {
        self.active = false;
    }
}
