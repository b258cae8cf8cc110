use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration syntax")]
    InvalidSyntax,
    #[error("missing unit")]
    MissingUnit,
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("duration out of range")]
    Overflow,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, got {got}")]
    FieldCount { expected: usize, got: usize },
    #[error("invalid steps {value:?}")]
    StepsFormat {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid duration {value:?}")]
    DurationFormat {
        value: String,
        #[source]
        source: DurationError,
    },
}
