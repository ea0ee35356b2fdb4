//! # Frame sampler
//!
//! Reduces an arbitrarily long time series to a bounded number of animation
//! frames by **uniform striding**: every `stride`-th original sample is kept,
//! always starting at index 0, so frame 0 of playback corresponds to
//! simulation start and relative temporal spacing is preserved. There is no
//! interpolation and no resampling; selection is O(1) per kept sample, which
//! bounds playback cost on arbitrarily long inputs.
//!
//! Contract
//! -----------------
//! * `N ≤ max_frames` → output identical to input (stride 1).
//! * `N > max_frames` → `stride = max(1, N / max_frames)` (integer division),
//!   output length `⌈N / stride⌉`. The count may miss the budget by a few
//!   frames either way; it is never truncated or padded to hit it exactly.
//! * `N = 0` → an empty series; the playback session reports frame count 0.
//!
//! The sampler also performs the meters → display-unit conversion, so the
//! sampled series is the only copy of the data the playback session keeps.

use nalgebra::Vector2;

use crate::constants::{DisplayUnit, Seconds};
use crate::conversion::meters_to_display;
use crate::ephemeris::EphemerisTable;

/// Compute the sampling stride for `sample_count` rows under a frame budget.
pub(crate) fn stride_for(sample_count: usize, max_frames: usize) -> usize {
    let budget = max_frames.max(1);
    if sample_count > budget {
        (sample_count / budget).max(1)
    } else {
        1
    }
}

/// The downsampled, display-unit time series a playback session replays.
///
/// Positions are stored per body, contiguous over frames, so a trail window is
/// a plain subslice of a body's column.
#[derive(Debug, Clone)]
pub struct SampledSeries {
    times: Vec<Seconds>,
    /// Indexed `[body][frame]`, in display units.
    positions: Vec<Vec<Vector2<DisplayUnit>>>,
    stride: usize,
}

impl SampledSeries {
    /// Convert and downsample a raw table.
    ///
    /// Arguments
    /// ---------
    /// * `table`: the loaded ephemeris (positions in meters)
    /// * `unit_scale`: meters per display unit
    /// * `max_frames`: frame-count budget
    pub(crate) fn build(table: &EphemerisTable, unit_scale: f64, max_frames: usize) -> Self {
        let stride = stride_for(table.sample_count(), max_frames);

        let times = table.times().iter().copied().step_by(stride).collect();
        let positions = (0..table.schema().body_count())
            .map(|body| {
                table
                    .body_positions(body)
                    .iter()
                    .step_by(stride)
                    .map(|&raw| meters_to_display(raw, unit_scale))
                    .collect()
            })
            .collect();

        Self {
            times,
            positions,
            stride,
        }
    }

    /// Number of animation frames.
    pub fn frame_count(&self) -> usize {
        self.times.len()
    }

    /// Number of bodies.
    pub fn body_count(&self) -> usize {
        self.positions.len()
    }

    /// The stride used during downsampling (1 when no downsampling occurred).
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Simulation time (seconds) at a frame.
    pub fn time(&self, frame: usize) -> Seconds {
        self.times[frame]
    }

    /// Display-unit position of a body at a frame.
    pub fn position(&self, body: usize, frame: usize) -> Vector2<DisplayUnit> {
        self.positions[body][frame]
    }

    /// Display-unit positions of a body over `start..=end`, oldest first.
    pub fn window(&self, body: usize, start: usize, end: usize) -> &[Vector2<DisplayUnit>] {
        &self.positions[body][start..=end]
    }

    /// All display-unit positions of a body, frame-ordered.
    pub fn body_track(&self, body: usize) -> &[Vector2<DisplayUnit>] {
        &self.positions[body]
    }
}
