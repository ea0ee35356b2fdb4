//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Unit conversions (meters ↔ astronomical units, seconds ↔ years)
//! - Core type aliases used across the crate
//! - Container types shared between the ephemeris and playback layers
//!
//! These definitions are used by all main modules, including table ingestion, frame sampling,
//! and the playback session.

use std::collections::HashMap;

use ahash::RandomState;
use smallvec::SmallVec;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Astronomical Unit in meters, matching the unit the ephemeris producer writes
pub const AU: f64 = 1.496e11;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per year used for the simulation-time readout
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Seconds per year used for the simulation-time readout
pub const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * DAYS_PER_YEAR;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-9;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in meters
pub type Meter = f64;
/// Distance in astronomical units (the display unit)
pub type DisplayUnit = f64;
/// Simulation time in seconds since the simulation epoch
pub type Seconds = f64;
/// Simulation time in years (readout unit)
pub type Years = f64;

/// Lookup table from body name to its index in discovery order.
///
/// Uses [`ahash`](https://docs.rs/ahash) for fast hashing.
pub type BodyMap = HashMap<String, usize, RandomState>;

/// A small, inline-optimized set of body indices assigned to one panel.
pub type PanelSet = SmallVec<[usize; 8]>;
