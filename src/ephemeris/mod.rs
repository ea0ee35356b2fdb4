//! # Ephemeris: table ingestion and storage
//!
//! Facilities to **load** and **hold** the precomputed position table a
//! playback session replays. The central type is [`EphemerisTable`], a columnar
//! store of timestamps (seconds) and per-body 2D positions (**meters**, as
//! written by the simulation that produced the table).
//!
//! Modules
//! -----------------
//! * [`schema`](crate::ephemeris::schema) – Column-name-driven discovery of the
//!   tracked body set.
//! * *(crate-private)* `csv_reader` – Fail-fast CSV ingestion.
//!
//! Data model
//! -----------------
//! * **Times:** `Vec<Seconds>`, monotonically non-decreasing (validated at load).
//! * **Positions:** one `Vec<Vector2<Meter>>` per body, row-aligned with the
//!   time column. Every body has a value for every sample; a partial row is a
//!   load-time error, never a stored `NaN`.
//! * **Schema:** an immutable [`TableSchema`](schema::TableSchema) in discovery
//!   order.
//!
//! The table is read once per run and is read-only afterwards; unit conversion
//! and downsampling happen in the playback layer, leaving the raw table intact.

use camino::Utf8Path;
use itertools::Itertools;
use nalgebra::Vector2;

use crate::constants::{Meter, Seconds, Years};
use crate::conversion::seconds_to_years;
use crate::orrery_errors::OrreryError;

pub mod schema;

mod csv_reader;

use schema::TableSchema;

/// The loaded position table: one row per time sample, one position column
/// pair per discovered body, positions in meters.
#[derive(Debug, Clone)]
pub struct EphemerisTable {
    schema: TableSchema,
    times: Vec<Seconds>,
    /// Indexed `[body][row]`, row-aligned with `times`.
    positions: Vec<Vec<Vector2<Meter>>>,
}

impl EphemerisTable {
    /// Load an ephemeris table from a CSV file.
    ///
    /// The file must carry a `t` column (seconds) and `<name>_x` / `<name>_y`
    /// columns (meters) for at least one body.
    ///
    /// Return
    /// ----------
    /// * `Ok(EphemerisTable)` on success.
    /// * `Err(OrreryError)` if the file is missing, empty, unreadable, has no
    ///   recognizable body columns, or contains a malformed row.
    pub fn from_csv(path: &Utf8Path) -> Result<Self, OrreryError> {
        csv_reader::read_ephemeris(path)
    }

    /// Build a table from in-memory columns.
    ///
    /// Arguments
    /// ---------
    /// * `names`: body names, one per position column, unique
    /// * `times`: timestamps in seconds, monotonically non-decreasing
    /// * `positions`: per body, one position (meters) per timestamp
    ///
    /// Return
    /// ----------
    /// * `Err(OrreryError::ColumnLengthMismatch)` if any body column length
    ///   differs from the time column length.
    /// * `Err(OrreryError::NonMonotonicTime)` if timestamps go backwards.
    /// * Schema errors as in [`TableSchema::from_names`].
    ///
    /// A zero-row table is allowed here: downstream, the frame sampler yields
    /// an empty series and the playback session reports a frame count of 0.
    pub fn from_parts(
        names: Vec<String>,
        times: Vec<Seconds>,
        positions: Vec<Vec<Vector2<Meter>>>,
    ) -> Result<Self, OrreryError> {
        let schema = TableSchema::from_names(names)?;
        if schema.body_count() != positions.len() {
            return Err(OrreryError::ColumnLengthMismatch {
                body: "<position columns>".to_string(),
                got: positions.len(),
                expected: schema.body_count(),
            });
        }
        for (body, column) in positions.iter().enumerate() {
            if column.len() != times.len() {
                return Err(OrreryError::ColumnLengthMismatch {
                    body: schema.body_names()[body].clone(),
                    got: column.len(),
                    expected: times.len(),
                });
            }
        }
        if let Some(row) = times.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(OrreryError::NonMonotonicTime(row + 1));
        }
        Ok(Self::from_validated(schema, times, positions))
    }

    /// Assemble a table whose invariants have already been checked by a reader.
    pub(crate) fn from_validated(
        schema: TableSchema,
        times: Vec<Seconds>,
        positions: Vec<Vec<Vector2<Meter>>>,
    ) -> Self {
        Self {
            schema,
            times,
            positions,
        }
    }

    /// The discovered body set.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Number of time samples (rows).
    pub fn sample_count(&self) -> usize {
        self.times.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamps in seconds, one per row.
    pub fn times(&self) -> &[Seconds] {
        &self.times
    }

    /// Raw positions (meters) of one body across all rows.
    ///
    /// Panics
    /// ----------
    /// * If `body` is not a valid index into the schema.
    pub fn body_positions(&self, body: usize) -> &[Vector2<Meter>] {
        &self.positions[body]
    }

    /// A printable summary of the loaded table (row count, body list, total
    /// simulated time).
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            samples: self.sample_count(),
            bodies: self.schema.body_names().to_vec(),
            total: self.times.last().map_or(0.0, |&t| seconds_to_years(t)),
        }
    }
}

/// Human-readable description of a loaded table, printed by callers at startup.
#[derive(Debug, Clone)]
pub struct TableSummary {
    /// Number of time samples in the table.
    pub samples: usize,
    /// Discovered body names, in column order.
    pub bodies: Vec<String>,
    /// Simulation time of the last sample, in years.
    pub total: Years,
}

impl std::fmt::Display for TableSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} samples over {:.2} years, {} bodies: {}",
            self.samples,
            self.total,
            self.bodies.len(),
            self.bodies.iter().join(", ")
        )
    }
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;

    fn still_body(len: usize) -> Vec<Vector2<Meter>> {
        vec![Vector2::new(0.0, 0.0); len]
    }

    #[test]
    fn test_from_parts_validates_column_lengths() {
        let err = EphemerisTable::from_parts(
            vec!["Sol".to_string()],
            vec![0.0, 10.0],
            vec![still_body(3)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OrreryError::ColumnLengthMismatch { got: 3, expected: 2, .. }
        ));
    }

    #[test]
    fn test_from_parts_validates_monotonic_time() {
        let err = EphemerisTable::from_parts(
            vec!["Sol".to_string()],
            vec![0.0, 10.0, 5.0],
            vec![still_body(3)],
        )
        .unwrap_err();
        assert!(matches!(err, OrreryError::NonMonotonicTime(2)));
    }

    #[test]
    fn test_from_parts_allows_zero_rows() {
        let table =
            EphemerisTable::from_parts(vec!["Sol".to_string()], vec![], vec![vec![]]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.sample_count(), 0);
    }

    #[test]
    fn test_summary_display() {
        let table = EphemerisTable::from_parts(
            vec!["Sol".to_string(), "Tierra".to_string()],
            vec![0.0, 86_400.0 * 365.0],
            vec![still_body(2), still_body(2)],
        )
        .unwrap();
        let text = table.summary().to_string();
        assert_eq!(text, "2 samples over 1.00 years, 2 bodies: Sol, Tierra");
    }
}
