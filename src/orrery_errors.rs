use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Ephemeris file not found at: {0}")]
    EphemerisFileNotFound(String),

    #[error("Ephemeris table has a header but no data rows: {0}")]
    EmptyEphemerisFile(String),

    #[error("No body position columns ('<name>_x'/'<name>_y' pairs) found in table header")]
    NoBodiesInSchema,

    #[error("Missing time column '{0}' in table header")]
    MissingTimeColumn(String),

    #[error("Duplicate body column pair for '{0}'")]
    DuplicateBody(String),

    #[error("Missing value for column '{column}' at data row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Invalid float value '{value}' for column '{column}' at data row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Time column is not monotonically non-decreasing at data row {0}")]
    NonMonotonicTime(usize),

    #[error("Column length mismatch: body '{body}' has {got} samples, expected {expected}")]
    ColumnLengthMismatch {
        body: String,
        got: usize,
        expected: usize,
    },

    #[error("Invalid playback parameter: {0}")]
    InvalidPlaybackParameter(String),
}
