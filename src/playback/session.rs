//! # Playback session and per-frame query
//!
//! The playback driver. A [`PlaybackSession`] is built once from a loaded
//! [`EphemerisTable`] and a validated [`PlaybackParams`]; construction runs
//! the whole leaf-to-root pipeline (unit conversion → frame sampling →
//! viewport planning → body classification) and the session then owns the
//! read-only results for the lifetime of one playback.
//!
//! ## Per-frame contract
//! -----------------
//! [`PlaybackSession::query`] is the single per-frame state transition an
//! external renderer consumes. It is a **pure function** of the sampled series
//! and the frame index: no hidden state, no mutation, so repeated queries at
//! the same index return identical output, which is what makes scrubbing,
//! looping replay, and deterministic testing possible. Advancing the frame
//! index is the caller's job; whether playback wraps to 0 or halts at the last
//! frame is caller policy, and the session exposes no clock of its own.
//!
//! ## Concurrency
//! -----------------
//! `query` is synchronous and non-suspending, safe to call on every tick of an
//! external rendering timer. Nothing mutates the session after construction,
//! so no locking is needed for sequential use.

use nalgebra::Vector2;

use crate::bodies::{assign_styles, Body};
use crate::constants::{DisplayUnit, PanelSet, Seconds, Years};
use crate::conversion::seconds_to_years;
use crate::ephemeris::EphemerisTable;
use crate::orrery_errors::OrreryError;
use crate::playback::classifier::classify_inner;
use crate::playback::params::PlaybackParams;
use crate::playback::sampler::SampledSeries;
use crate::playback::viewport::Viewport;

/// One playback run over a loaded ephemeris.
///
/// Owns the sampled display-unit series, the static viewports, the panel
/// classification, and the per-body display styles. Read-only after
/// construction; the renderer owns nothing beyond the values each
/// [`query`](PlaybackSession::query) returns.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    bodies: Vec<Body>,
    series: SampledSeries,
    viewport: Viewport,
    inner_set: PanelSet,
    trail_length: usize,
}

/// Per-frame state of one body: where it is now and the trail behind it.
#[derive(Debug, Clone, Copy)]
pub struct BodyFrame<'a> {
    /// Index of the body in [`PlaybackSession::bodies`] order.
    pub body: usize,
    /// Current display-unit position.
    pub position: Vector2<DisplayUnit>,
    /// Trail positions over `[max(0, f − trail_length), f]`, oldest first.
    /// The last element equals `position`.
    pub trail: &'a [Vector2<DisplayUnit>],
}

/// The full state of one animation frame, returned by
/// [`PlaybackSession::query`] and owned transiently by the renderer.
#[derive(Debug, Clone)]
pub struct FrameState<'a> {
    /// The queried frame index.
    pub frame: usize,
    /// Simulation time at this frame, in seconds.
    pub time: Seconds,
    /// Per-body state, in discovery order (one entry per discovered body).
    pub bodies: Vec<BodyFrame<'a>>,
}

impl FrameState<'_> {
    /// Simulation time in years, for the running time readout.
    pub fn years(&self) -> Years {
        seconds_to_years(self.time)
    }
}

impl PlaybackSession {
    /// Build a session from a loaded table.
    ///
    /// Arguments
    /// ---------
    /// * `table`: the raw ephemeris (positions in meters)
    /// * `params`: playback configuration; re-validated here so values coming
    ///   from a config file get the same checks as builder-built ones
    ///
    /// Return
    /// ----------
    /// * `Err(OrreryError::InvalidPlaybackParameter)` on inconsistent params;
    ///   schema and load errors have already been surfaced by the table.
    pub fn new(table: &EphemerisTable, params: &PlaybackParams) -> Result<Self, OrreryError> {
        params.validate()?;

        let series = SampledSeries::build(table, params.unit_scale, params.max_frames);
        let viewport = Viewport::plan(
            &series,
            params.inner_radius,
            params.outer_margin,
            params.outer_floor,
        );
        let inner_set = classify_inner(&series, params.inner_radius);

        let names = table.schema().body_names();
        let bodies = names
            .iter()
            .zip(assign_styles(names))
            .map(|(name, style)| Body {
                name: name.clone(),
                style,
            })
            .collect();

        Ok(Self {
            bodies,
            series,
            viewport,
            inner_set,
            trail_length: params.trail_length,
        })
    }

    /// Number of playable frames. 0 means "nothing to play" and makes every
    /// `query` call invalid.
    pub fn frame_count(&self) -> usize {
        self.series.frame_count()
    }

    /// Number of discovered bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// The discovered bodies with their resolved display styles, in discovery
    /// order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// The static panel bounds.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Indices of the bodies shown in the close-in panel. Never empty for a
    /// table with at least one body.
    pub fn inner_set(&self) -> &[usize] {
        &self.inner_set
    }

    /// Indices of the bodies shown in the full-extent panel: always all of
    /// them.
    pub fn outer_set(&self) -> std::ops::Range<usize> {
        0..self.bodies.len()
    }

    /// The stride the frame sampler applied (1 when the table fit the budget).
    pub fn stride(&self) -> usize {
        self.series.stride()
    }

    /// The downsampled display-unit series backing this session.
    pub fn series(&self) -> &SampledSeries {
        &self.series
    }

    /// Query the state of one animation frame.
    ///
    /// Arguments
    /// ---------
    /// * `frame`: frame index in `0..frame_count()`
    ///
    /// Return
    /// ----------
    /// * The [`FrameState`] at `frame`: every body's current position, its
    ///   trail window `[max(0, frame − trail_length), frame]` (oldest first),
    ///   and the simulation time. Purely a function of the sampled series and
    ///   `frame`; two calls with the same index return identical output.
    ///
    /// Panics
    /// ----------
    /// * If `frame ≥ frame_count()`. An out-of-range index is a caller
    ///   programming error (contract violation), not a recoverable condition.
    pub fn query(&self, frame: usize) -> FrameState<'_> {
        assert!(
            frame < self.frame_count(),
            "frame index {frame} out of range for {} playable frames",
            self.frame_count()
        );

        let trail_start = frame.saturating_sub(self.trail_length);
        let bodies = (0..self.bodies.len())
            .map(|body| BodyFrame {
                body,
                position: self.series.position(body, frame),
                trail: self.series.window(body, trail_start, frame),
            })
            .collect();

        FrameState {
            frame,
            time: self.series.time(frame),
            bodies,
        }
    }
}

#[cfg(test)]
mod session_test {
    use super::*;

    use approx::assert_relative_eq;

    use crate::constants::{AU, SECONDS_PER_YEAR};

    /// Two bodies: one at the origin, one circling at `radius_au` with one
    /// sample per day.
    fn two_body_table(rows: usize, radius_au: f64) -> EphemerisTable {
        let times: Vec<f64> = (0..rows).map(|i| i as f64 * 86_400.0).collect();
        let sol = vec![Vector2::new(0.0, 0.0); rows];
        let orbiter = (0..rows)
            .map(|i| {
                let angle = i as f64 * 0.01;
                Vector2::new(
                    radius_au * AU * angle.cos(),
                    radius_au * AU * angle.sin(),
                )
            })
            .collect();
        EphemerisTable::from_parts(
            vec!["Sol".to_string(), "Tierra".to_string()],
            times,
            vec![sol, orbiter],
        )
        .unwrap()
    }

    #[test]
    fn test_query_returns_current_position_and_time() {
        let table = two_body_table(100, 1.0);
        let session = PlaybackSession::new(&table, &PlaybackParams::default()).unwrap();

        let state = session.query(10);
        assert_eq!(state.frame, 10);
        assert_eq!(state.time, 10.0 * 86_400.0);
        assert_relative_eq!(state.years(), 10.0 * 86_400.0 / SECONDS_PER_YEAR);

        let earth = &state.bodies[1];
        assert_relative_eq!(earth.position.norm(), 1.0, epsilon = 1e-9);
        assert_eq!(earth.trail.last().copied().unwrap(), earth.position);
    }

    #[test]
    fn test_trail_window_grows_then_saturates() {
        let table = two_body_table(700, 1.0);
        let params = PlaybackParams::builder()
            .max_frames(1000)
            .trail_length(150)
            .build()
            .unwrap();
        let session = PlaybackSession::new(&table, &params).unwrap();

        // Early frame: the window still reaches back to frame 0.
        assert_eq!(session.query(50).bodies[0].trail.len(), 51);
        // Late frame: the window is saturated at trail_length + 1.
        assert_eq!(session.query(500).bodies[0].trail.len(), 151);
        assert_eq!(
            session.query(500).bodies[1].trail.first().copied().unwrap(),
            session.series().position(1, 350)
        );
    }

    #[test]
    fn test_query_is_idempotent() {
        let table = two_body_table(300, 1.0);
        let session = PlaybackSession::new(&table, &PlaybackParams::default()).unwrap();

        let first = session.query(123);
        let second = session.query(123);
        assert_eq!(first.time, second.time);
        for (a, b) in first.bodies.iter().zip(second.bodies.iter()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.trail, b.trail);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_query_out_of_range_panics() {
        let table = two_body_table(10, 1.0);
        let session = PlaybackSession::new(&table, &PlaybackParams::default()).unwrap();
        session.query(10);
    }

    #[test]
    fn test_empty_table_has_nothing_to_play() {
        let table = EphemerisTable::from_parts(
            vec!["Sol".to_string()],
            vec![],
            vec![vec![]],
        )
        .unwrap();
        let session = PlaybackSession::new(&table, &PlaybackParams::default()).unwrap();
        assert_eq!(session.frame_count(), 0);
        // The inner panel still has its fallback body list.
        assert_eq!(session.inner_set(), &[0]);
    }

    #[test]
    fn test_outer_set_is_all_bodies() {
        let table = two_body_table(10, 39.0);
        let session = PlaybackSession::new(&table, &PlaybackParams::default()).unwrap();
        assert_eq!(session.outer_set(), 0..2);
        // The distant body is excluded from the close-in panel.
        assert_eq!(session.inner_set(), &[0]);
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let table = two_body_table(10, 1.0);
        let mut params = PlaybackParams::default();
        params.unit_scale = 0.0;
        assert!(matches!(
            PlaybackSession::new(&table, &params),
            Err(OrreryError::InvalidPlaybackParameter(_))
        ));
    }
}
