//! # CSV ephemeris reader
//!
//! Minimal reader turning a CSV position table into an [`EphemerisTable`].
//!
//! ## Overview
//! -----------------
//! The expected layout is one row per time sample with a `t` column (seconds
//! since simulation epoch) and, per body, `<name>_x` / `<name>_y` columns in
//! **meters**. Column discovery is delegated to
//! [`TableSchema::discover`](crate::ephemeris::schema::TableSchema); this module
//! only pulls the resolved columns out of each record.
//!
//! ## Error semantics
//! -----------------
//! Ingestion is **fail-fast**: a missing file, an empty table, a short row, an
//! unparsable float, or a timestamp going backwards aborts the load with a
//! typed [`OrreryError`]. There are no partial loads and no retries; all
//! failures are deterministic for a given input file.

use camino::Utf8Path;
use csv::StringRecord;
use nalgebra::Vector2;

use crate::constants::{Meter, Seconds};
use crate::ephemeris::schema::TableSchema;
use crate::ephemeris::EphemerisTable;
use crate::orrery_errors::OrreryError;

/// Read a CSV ephemeris file into an [`EphemerisTable`].
///
/// Arguments
/// ---------
/// * `path`: location of the CSV file
///
/// Return
/// ----------
/// * A fully validated [`EphemerisTable`], or an [`OrreryError`] describing the
///   first problem encountered (missing file, schema failure, bad row).
pub(crate) fn read_ephemeris(path: &Utf8Path) -> Result<EphemerisTable, OrreryError> {
    if !path.is_file() {
        return Err(OrreryError::EphemerisFileNotFound(path.to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let (schema, layout) = TableSchema::discover(headers.iter())?;

    let mut times: Vec<Seconds> = Vec::new();
    let mut positions: Vec<Vec<Vector2<Meter>>> = vec![Vec::new(); schema.body_count()];

    for (row, record) in reader.records().enumerate() {
        let record = record?;

        let t = parse_field(&record, layout.time, &headers, row)?;
        if let Some(&previous) = times.last() {
            if t < previous {
                return Err(OrreryError::NonMonotonicTime(row));
            }
        }
        times.push(t);

        for (body, &(x_col, y_col)) in layout.coords.iter().enumerate() {
            let x = parse_field(&record, x_col, &headers, row)?;
            let y = parse_field(&record, y_col, &headers, row)?;
            positions[body].push(Vector2::new(x, y));
        }
    }

    if times.is_empty() {
        return Err(OrreryError::EmptyEphemerisFile(path.to_string()));
    }

    Ok(EphemerisTable::from_validated(schema, times, positions))
}

/// Pull one float out of a record, mapping absent or malformed cells to the
/// corresponding load error.
fn parse_field(
    record: &StringRecord,
    column: usize,
    headers: &StringRecord,
    row: usize,
) -> Result<f64, OrreryError> {
    let column_name = || headers.get(column).unwrap_or("?").to_string();

    let raw = record.get(column).ok_or_else(|| OrreryError::MissingValue {
        column: column_name(),
        row,
    })?;
    if raw.is_empty() {
        return Err(OrreryError::MissingValue {
            column: column_name(),
            row,
        });
    }
    raw.parse::<f64>().map_err(|_| OrreryError::InvalidValue {
        column: column_name(),
        row,
        value: raw.to_string(),
    })
}
