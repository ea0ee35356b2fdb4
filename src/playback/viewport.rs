//! # Viewport planner
//!
//! Computes the coordinate bounds of the two rendering panels. The close-in
//! panel keeps a **fixed** configured radius so its scale stays comparable
//! across runs; the full-extent panel derives its radius from the maximum
//! radial distance observed anywhere in the sampled series, widened by a
//! safety margin and clamped to a floor value. Both bounds are computed once
//! per session and are static for the whole animation.

use crate::playback::sampler::SampledSeries;

/// Static coordinate bounds of the two panels, in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Fixed half-extent of the close-in panel.
    pub inner_radius: f64,
    /// Derived half-extent of the full-extent panel.
    pub outer_radius: f64,
}

impl Viewport {
    /// Plan both viewports for a sampled series.
    ///
    /// Arguments
    /// ---------
    /// * `series`: the sampled, display-unit series
    /// * `inner_radius`: fixed close-in radius
    /// * `outer_margin`: safety factor on the maximum observed radial distance
    /// * `outer_floor`: lower bound of the outer radius
    ///
    /// The outer radius is `max(outer_floor, ⌈max‖p‖ × outer_margin⌉)` over all
    /// bodies and all sampled frames. An empty series leaves it at the floor.
    pub(crate) fn plan(
        series: &SampledSeries,
        inner_radius: f64,
        outer_margin: f64,
        outer_floor: f64,
    ) -> Self {
        let max_radius = (0..series.body_count())
            .flat_map(|body| series.body_track(body))
            .fold(0.0_f64, |acc, position| acc.max(position.norm()));

        Self {
            inner_radius,
            outer_radius: outer_floor.max((max_radius * outer_margin).ceil()),
        }
    }

    /// `(min, max)` bounds of the close-in panel, identical on both axes.
    pub fn inner_extent(&self) -> (f64, f64) {
        (-self.inner_radius, self.inner_radius)
    }

    /// `(min, max)` bounds of the full-extent panel, identical on both axes.
    pub fn outer_extent(&self) -> (f64, f64) {
        (-self.outer_radius, self.outer_radius)
    }
}
