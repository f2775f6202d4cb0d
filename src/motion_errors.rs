use std::fmt;

use thiserror::Error;

/// Header field a tagged or columnar record must declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Npts,
    Dt,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Npts => write!(f, "NPTS"),
            RecordField::Dt => write!(f, "DT"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("Could not connect to the strong-motion database: {0}")]
    TransportFailure(String),

    #[error("No data returned by the strong-motion database")]
    EmptyPayload,

    #[error("Record not found in the strong-motion database")]
    NotFound,

    #[error("Could not find {0} in record")]
    MissingField(RecordField),

    #[error("Record truncated: {expected} points declared, {found} found")]
    Truncated { expected: usize, found: usize },

    #[error("Record declares no data points")]
    EmptyData,

    #[error("Invalid time step in record: {0}")]
    InvalidTimeStep(f64),

    #[error("Not a valid motion type for this record: {0}")]
    UnsupportedType(String),
}

impl From<ureq::Error> for MotionError {
    fn from(err: ureq::Error) -> Self {
        MotionError::TransportFailure(err.to_string())
    }
}
