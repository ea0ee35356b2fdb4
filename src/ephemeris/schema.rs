//! # Ephemeris schema discovery
//!
//! Inspects the column names of a loaded table and infers the list of tracked
//! bodies. The body set is **discovered, not hardcoded**: a column pair
//! `<name>_x` / `<name>_y` identifies a tracked body named `<name>`, and the
//! discovery order follows column order in the table. After discovery the body
//! set is an immutable, validated value used by index everywhere else in the
//! crate, so no further name-based lookups happen on the hot path.
//!
//! ## Contract
//! -----------------
//! * The time column is named `t` (seconds since simulation epoch); a missing
//!   time column is a schema error.
//! * A `<name>_x` column without a matching `<name>_y` is ignored.
//! * Zero discovered bodies is a schema error ([`OrreryError::NoBodiesInSchema`]).
//! * Discovery is a pure read of the header set; it performs no I/O.

use std::collections::HashMap;

use ahash::RandomState;

use crate::constants::BodyMap;
use crate::orrery_errors::OrreryError;

/// Name of the timestamp column every ephemeris table must carry.
pub const TIME_COLUMN: &str = "t";

/// The discovered body set of an ephemeris table.
///
/// Holds the body names in discovery (column) order together with a fast
/// name → index lookup. Immutable once built.
#[derive(Debug, Clone)]
pub struct TableSchema {
    names: Vec<String>,
    index: BodyMap,
}

/// Column indices resolved during discovery, consumed by the CSV reader.
#[derive(Debug, Clone)]
pub(crate) struct ColumnLayout {
    /// Index of the `t` column.
    pub(crate) time: usize,
    /// Per body, in discovery order: indices of its `_x` and `_y` columns.
    pub(crate) coords: Vec<(usize, usize)>,
}

impl TableSchema {
    /// Discover the tracked bodies from a table header.
    ///
    /// Arguments
    /// ---------
    /// * `headers`: the column names of the table, in table order
    ///
    /// Return
    /// ----------
    /// * The discovered [`TableSchema`] plus the [`ColumnLayout`] the reader
    ///   needs to pull values out of each row.
    /// * `Err(OrreryError::MissingTimeColumn)` if there is no `t` column.
    /// * `Err(OrreryError::DuplicateBody)` if the same body name appears twice.
    /// * `Err(OrreryError::NoBodiesInSchema)` if no `_x`/`_y` pair is found.
    pub(crate) fn discover<'a>(
        headers: impl IntoIterator<Item = &'a str>,
    ) -> Result<(Self, ColumnLayout), OrreryError> {
        let columns: Vec<&str> = headers.into_iter().collect();
        let by_name: HashMap<&str, usize, RandomState> = columns
            .iter()
            .enumerate()
            .map(|(position, &column)| (column, position))
            .collect();

        let time = *by_name
            .get(TIME_COLUMN)
            .ok_or_else(|| OrreryError::MissingTimeColumn(TIME_COLUMN.to_string()))?;

        let mut names = Vec::new();
        let mut index = BodyMap::default();
        let mut coords = Vec::new();

        for (x_col, &column) in columns.iter().enumerate() {
            let Some(stem) = column.strip_suffix("_x") else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let Some(&y_col) = by_name.get(format!("{stem}_y").as_str()) else {
                continue;
            };
            if index.insert(stem.to_string(), names.len()).is_some() {
                return Err(OrreryError::DuplicateBody(stem.to_string()));
            }
            names.push(stem.to_string());
            coords.push((x_col, y_col));
        }

        if names.is_empty() {
            return Err(OrreryError::NoBodiesInSchema);
        }

        Ok((Self { names, index }, ColumnLayout { time, coords }))
    }

    /// Build a schema directly from a list of body names (in-memory tables).
    ///
    /// Fails with [`OrreryError::NoBodiesInSchema`] on an empty list and
    /// [`OrreryError::DuplicateBody`] on a repeated name.
    pub fn from_names(names: Vec<String>) -> Result<Self, OrreryError> {
        if names.is_empty() {
            return Err(OrreryError::NoBodiesInSchema);
        }
        let mut index = BodyMap::default();
        for (position, name) in names.iter().enumerate() {
            if index.insert(name.clone(), position).is_some() {
                return Err(OrreryError::DuplicateBody(name.clone()));
            }
        }
        Ok(Self { names, index })
    }

    /// Body names in discovery order.
    pub fn body_names(&self) -> &[String] {
        &self.names
    }

    /// Number of discovered bodies.
    pub fn body_count(&self) -> usize {
        self.names.len()
    }

    /// Index of a body by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}
