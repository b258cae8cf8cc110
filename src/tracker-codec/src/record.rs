use chrono::TimeDelta;
use tracker_types::activities::ActivityRecord;

use crate::{duration::parse_duration, error::RecordError};

/// Field layout of a comma separated record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordLayout {
    /// `steps,duration`
    DaySteps,
    /// `steps,activity,duration`
    Training,
}

impl RecordLayout {
    pub const fn field_count(self) -> usize {
        match self {
            RecordLayout::DaySteps => 2,
            RecordLayout::Training => 3,
        }
    }
}

fn parse_steps(value: &str) -> Result<i64, RecordError> {
    value
        .parse::<i64>()
        .map_err(|source| RecordError::StepsFormat {
            value: value.to_string(),
            source,
        })
}

fn parse_duration_field(value: &str) -> Result<TimeDelta, RecordError> {
    parse_duration(value).map_err(|source| RecordError::DurationFormat {
        value: value.to_string(),
        source,
    })
}

/// Splits `data` on commas, trims every field and decodes it according to
/// `layout`. Steps and duration are only checked for syntax here; zero and
/// negative values pass through.
pub fn parse_record(data: &str, layout: RecordLayout) -> Result<ActivityRecord, RecordError> {
    let fields = data.split(',').map(str::trim).collect::<Vec<_>>();

    match (layout, fields.as_slice()) {
        (RecordLayout::DaySteps, [steps, duration]) => Ok(ActivityRecord::day_steps(
            parse_steps(steps)?,
            parse_duration_field(duration)?,
        )),
        (RecordLayout::Training, [steps, activity, duration]) => {
            let steps = parse_steps(steps)?;
            let duration = parse_duration_field(duration)?;
            Ok(ActivityRecord::training(steps, *activity, duration))
        }
        _ => Err(RecordError::FieldCount {
            expected: layout.field_count(),
            got: fields.len(),
        }),
    }
}
