//! # Playback: downsampling, framing, and the per-frame query
//!
//! The trajectory-playback engine. Construction of a
//! [`PlaybackSession`](session::PlaybackSession) runs the pipeline
//!
//! > raw table → unit conversion → frame sampling → (viewport planning, body
//! > classification) → playback driver
//!
//! and the session then answers pure per-frame
//! [`query`](session::PlaybackSession::query) calls from the renderer's
//! animation loop.
//!
//! Modules
//! -----------------
//! * [`params`] – [`PlaybackParams`](params::PlaybackParams) and its validating
//!   builder.
//! * [`sampler`] – Uniform-stride downsampling to a bounded frame count,
//!   including the meters → display-unit conversion.
//! * [`viewport`] – Static close-in and full-extent panel bounds.
//! * [`session`] – The [`PlaybackSession`](session::PlaybackSession) driver and
//!   its [`FrameState`](session::FrameState) query result.
//! * *(crate-private)* `classifier` – Inner/outer panel membership policy.

pub mod params;
pub mod sampler;
pub mod session;
pub mod viewport;

mod classifier;
