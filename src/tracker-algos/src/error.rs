use std::fmt::Display;

use thiserror::Error;
use tracker_codec::RecordError;

/// Input that has to be strictly positive before any formula runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Steps,
    Weight,
    Height,
    Duration,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Steps => "steps",
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Duration => "duration",
        })
    }
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("invalid {field}: {value} (must be > 0)")]
    NonPositiveValue { field: Field, value: String },
    #[error("unknown activity type: {0}")]
    UnrecognizedActivity(String),
}

impl TrackerError {
    pub(crate) fn non_positive(field: Field, value: impl Display) -> Self {
        Self::NonPositiveValue {
            field,
            value: value.to_string(),
        }
    }
}
