#[macro_use]
extern crate log;

mod error;
pub use error::{Field, TrackerError};

pub mod formulas;

pub(crate) mod report;
pub use report::{DayStepsReport, TrainingReport, day_steps_report, training_report};

pub(crate) mod diagnostics;
pub use diagnostics::{Diagnostics, LogDiagnostics};

pub(crate) mod tracker;
pub use tracker::Tracker;

pub mod helpers;
