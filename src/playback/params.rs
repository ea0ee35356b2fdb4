//! # Playback parameters
//!
//! This module defines the [`PlaybackParams`] struct and its builder, which
//! control how a [`PlaybackSession`](crate::playback::session::PlaybackSession)
//! downsamples, frames, and classifies a loaded ephemeris.
//!
//! ## Overview
//! -----------------
//! * `max_frames` – frame-count budget for the frame sampler.
//! * `trail_length` – how many trailing frames each body's trail keeps.
//! * `inner_radius` – fixed radius of the close-in viewport (display units).
//! * `outer_margin` / `outer_floor` – derivation of the full-extent viewport.
//! * `unit_scale` – meters per display unit.
//!
//! Defaults
//! -----------------
//! The [`Default`] implementation provides a solid starting point:
//!
//! * `max_frames`: 600
//! * `trail_length`: 150
//! * `inner_radius`: 2.0
//! * `outer_margin`: 1.1
//! * `outer_floor`: 32.0
//! * `unit_scale`: [`AU`](crate::constants::AU) (1.496 × 10¹¹ m)
//!
//! The struct is `serde`-deserializable with per-field defaults, so a partial
//! JSON config overrides only what it names:
//!
//! ```rust
//! use orrery::playback::params::PlaybackParams;
//!
//! let params: PlaybackParams = serde_json::from_str(r#"{"max_frames": 900}"#).unwrap();
//! assert_eq!(params.max_frames, 900);
//! assert_eq!(params.trail_length, 150);
//! ```
//!
//! Validation
//! -----------------
//! * `max_frames ≥ 1`
//! * `inner_radius > 0`, finite
//! * `outer_margin ≥ 1`, finite
//! * `outer_floor > 0`, finite
//! * `unit_scale > 0`, finite
//!
//! [`PlaybackParamsBuilder::build`] applies these rules; deserialized values
//! are re-checked when the session is constructed.

use std::cmp::Ordering::{Equal, Greater};

use serde::Deserialize;

use crate::constants::AU;
use crate::orrery_errors::OrreryError;

/// Tunable knobs of a playback session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackParams {
    /// Maximum number of animation frames kept after downsampling.
    pub max_frames: usize,
    /// Trail window size: frame `f` trails back to `max(0, f − trail_length)`.
    pub trail_length: usize,
    /// Fixed radius of the close-in viewport, in display units.
    pub inner_radius: f64,
    /// Safety factor applied to the maximum observed radial distance.
    pub outer_margin: f64,
    /// Lower bound of the full-extent viewport radius, in display units.
    pub outer_floor: f64,
    /// Meters per display unit.
    pub unit_scale: f64,
}

impl Default for PlaybackParams {
    fn default() -> Self {
        Self {
            max_frames: 600,
            trail_length: 150,
            inner_radius: 2.0,
            outer_margin: 1.1,
            outer_floor: 32.0,
            unit_scale: AU,
        }
    }
}

impl PlaybackParams {
    /// Construct parameters with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fluent [`PlaybackParamsBuilder`], validated on `build()`.
    ///
    /// ```rust
    /// use orrery::playback::params::PlaybackParams;
    ///
    /// let params = PlaybackParams::builder()
    ///     .max_frames(1200)
    ///     .trail_length(80)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.max_frames, 1200);
    /// ```
    pub fn builder() -> PlaybackParamsBuilder {
        PlaybackParamsBuilder::new()
    }

    /// Check the validation rules listed in the module documentation.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` if all values are consistent.
    /// * `Err(OrreryError::InvalidPlaybackParameter)` naming the first offender.
    pub fn validate(&self) -> Result<(), OrreryError> {
        if self.max_frames == 0 {
            return Err(OrreryError::InvalidPlaybackParameter(
                "max_frames must be at least 1".into(),
            ));
        }
        if !Self::gt0(self.inner_radius) {
            return Err(OrreryError::InvalidPlaybackParameter(
                "inner_radius must be finite and positive".into(),
            ));
        }
        if !Self::ge1(self.outer_margin) {
            return Err(OrreryError::InvalidPlaybackParameter(
                "outer_margin must be finite and at least 1.0".into(),
            ));
        }
        if !Self::gt0(self.outer_floor) {
            return Err(OrreryError::InvalidPlaybackParameter(
                "outer_floor must be finite and positive".into(),
            ));
        }
        if !Self::gt0(self.unit_scale) {
            return Err(OrreryError::InvalidPlaybackParameter(
                "unit_scale must be finite and positive".into(),
            ));
        }
        Ok(())
    }

    /// True iff x > 0.0, finite, and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.is_finite() && x.partial_cmp(&0.0) == Some(Greater)
    }

    /// True iff x >= 1.0, finite, and comparable (i.e., not NaN).
    #[inline]
    fn ge1(x: f64) -> bool {
        x.is_finite() && matches!(x.partial_cmp(&1.0), Some(Greater) | Some(Equal))
    }
}

/// Builder for [`PlaybackParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct PlaybackParamsBuilder {
    params: PlaybackParams,
}

impl PlaybackParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: PlaybackParams::default(),
        }
    }

    pub fn max_frames(mut self, v: usize) -> Self {
        self.params.max_frames = v;
        self
    }
    pub fn trail_length(mut self, v: usize) -> Self {
        self.params.trail_length = v;
        self
    }
    pub fn inner_radius(mut self, v: f64) -> Self {
        self.params.inner_radius = v;
        self
    }
    pub fn outer_margin(mut self, v: f64) -> Self {
        self.params.outer_margin = v;
        self
    }
    pub fn outer_floor(mut self, v: f64) -> Self {
        self.params.outer_floor = v;
        self
    }
    pub fn unit_scale(mut self, v: f64) -> Self {
        self.params.unit_scale = v;
        self
    }

    /// Finalize the builder and produce a validated [`PlaybackParams`].
    pub fn build(self) -> Result<PlaybackParams, OrreryError> {
        self.params.validate()?;
        Ok(self.params)
    }
}
