use tracker_types::biometrics::Biometrics;

use crate::{
    diagnostics::{Diagnostics, LogDiagnostics},
    error::TrackerError,
    report::{day_steps_report, training_report},
};

/// String based entry points bound to one person's biometrics.
///
/// [`day_steps_report`] and [`training_report`] are the primary API; this type
/// keeps the text-only surface where a failed day-steps record yields an empty
/// string and the failure only reaches the diagnostics sink.
pub struct Tracker<D = LogDiagnostics> {
    biometrics: Biometrics,
    diagnostics: D,
}

impl Tracker {
    pub fn new(biometrics: Biometrics) -> Self {
        Self::with_diagnostics(biometrics, LogDiagnostics)
    }
}

impl<D: Diagnostics> Tracker<D> {
    pub fn with_diagnostics(biometrics: Biometrics, diagnostics: D) -> Self {
        Self {
            biometrics,
            diagnostics,
        }
    }

    pub fn biometrics(&self) -> &Biometrics {
        &self.biometrics
    }

    /// Report for a `steps,duration` record, or an empty string on failure.
    pub fn day_action_info(&self, data: &str) -> String {
        match day_steps_report(data, &self.biometrics) {
            Ok(report) => report.to_string(),
            Err(error) => {
                self.diagnostics.report_failure(&error);
                String::new()
            }
        }
    }

    /// Report for a `steps,activity,duration` record. Failures go to the
    /// diagnostics sink and are returned as well.
    pub fn training_info(&self, data: &str) -> Result<String, TrackerError> {
        training_report(data, &self.biometrics)
            .map(|report| report.to_string())
            .inspect_err(|error| self.diagnostics.report_failure(error))
    }
}
