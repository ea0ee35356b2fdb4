use approx::assert_relative_eq;
use camino::Utf8Path;

use orrery::{EphemerisTable, OrreryError};

mod common;
use common::write_temp_csv;

#[test]
fn test_load_small_ephemeris() {
    let table = EphemerisTable::from_csv(Utf8Path::new("tests/data/orbits_small.csv")).unwrap();

    assert_eq!(table.schema().body_names(), &["Sol", "Tierra", "Marte"]);
    assert_eq!(table.schema().index_of("Marte"), Some(2));
    assert_eq!(table.sample_count(), 10);

    assert_eq!(table.times()[0], 0.0);
    assert_eq!(table.times()[9], 777_600.0);

    let earth = table.body_positions(1);
    assert_relative_eq!(earth[0].x, 1.496e11);
    assert_relative_eq!(earth[0].y, 0.0);
    assert_relative_eq!(earth[9].y, 2.312e10);

    let summary = table.summary().to_string();
    assert!(summary.starts_with("10 samples"));
    assert!(summary.contains("Sol, Tierra, Marte"));
}

#[test]
fn test_missing_file_is_a_load_error() {
    let err = EphemerisTable::from_csv(Utf8Path::new("tests/data/no_such_table.csv")).unwrap_err();
    assert!(matches!(err, OrreryError::EphemerisFileNotFound(path) if path.contains("no_such_table")));
}

#[test]
fn test_header_only_file_is_a_load_error() {
    let path = write_temp_csv("header-only", "t,Sol_x,Sol_y\n");
    let err = EphemerisTable::from_csv(&path).unwrap_err();
    assert!(matches!(err, OrreryError::EmptyEphemerisFile(_)));
}

#[test]
fn test_table_without_body_columns_is_a_schema_error() {
    let path = write_temp_csv("no-bodies", "t,energy\n0,1.0\n");
    let err = EphemerisTable::from_csv(&path).unwrap_err();
    assert!(matches!(err, OrreryError::NoBodiesInSchema));
}

#[test]
fn test_table_without_time_column_is_a_schema_error() {
    let path = write_temp_csv("no-time", "Sol_x,Sol_y\n0,0\n");
    let err = EphemerisTable::from_csv(&path).unwrap_err();
    assert!(matches!(err, OrreryError::MissingTimeColumn(column) if column == "t"));
}

#[test]
fn test_unparsable_value_names_column_and_row() {
    let path = write_temp_csv(
        "bad-float",
        "t,Sol_x,Sol_y\n0,0,0\n86400,not-a-number,0\n",
    );
    let err = EphemerisTable::from_csv(&path).unwrap_err();
    match err {
        OrreryError::InvalidValue { column, row, value } => {
            assert_eq!(column, "Sol_x");
            assert_eq!(row, 1);
            assert_eq!(value, "not-a-number");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_cell_is_a_missing_value() {
    let path = write_temp_csv("empty-cell", "t,Sol_x,Sol_y\n0,0,0\n86400,,0\n");
    let err = EphemerisTable::from_csv(&path).unwrap_err();
    assert!(matches!(
        err,
        OrreryError::MissingValue { column, row: 1 } if column == "Sol_x"
    ));
}

#[test]
fn test_ragged_row_is_a_load_error() {
    let path = write_temp_csv("ragged", "t,Sol_x,Sol_y\n0,0,0\n86400,0\n");
    let err = EphemerisTable::from_csv(&path).unwrap_err();
    assert!(matches!(err, OrreryError::CsvError(_)));
}

#[test]
fn test_backwards_time_is_a_load_error() {
    let path = write_temp_csv(
        "backwards-time",
        "t,Sol_x,Sol_y\n0,0,0\n86400,0,0\n43200,0,0\n",
    );
    let err = EphemerisTable::from_csv(&path).unwrap_err();
    assert!(matches!(err, OrreryError::NonMonotonicTime(2)));
}

#[test]
fn test_repeated_timestamp_is_allowed() {
    let path = write_temp_csv("plateau-time", "t,Sol_x,Sol_y\n0,0,0\n0,1,1\n86400,2,2\n");
    let table = EphemerisTable::from_csv(&path).unwrap();
    assert_eq!(table.sample_count(), 3);
}
