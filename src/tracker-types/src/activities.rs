use std::{fmt::Display, str::FromStr};

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Activity kinds recognized in a training record.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    #[serde(rename = "Бег")]
    Running,
    #[serde(rename = "Ходьба")]
    Walking,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Бег",
            ActivityKind::Walking => "Ходьба",
        }
    }
}

impl Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityKind {
    type Err = ();

    /// Exact match only, no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Бег" => Ok(ActivityKind::Running),
            "Ходьба" => Ok(ActivityKind::Walking),
            _ => Err(()),
        }
    }
}

/// A decoded activity record. The two-field day-steps form has no label.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRecord {
    pub steps: i64,
    pub activity: Option<String>,
    pub duration: TimeDelta,
}

impl ActivityRecord {
    pub fn day_steps(steps: i64, duration: TimeDelta) -> Self {
        Self {
            steps,
            activity: None,
            duration,
        }
    }

    pub fn training(steps: i64, activity: impl Into<String>, duration: TimeDelta) -> Self {
        Self {
            steps,
            activity: Some(activity.into()),
            duration,
        }
    }
}
