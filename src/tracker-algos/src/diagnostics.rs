use crate::error::TrackerError;

/// Receives failures from the string returning [`Tracker`](crate::Tracker)
/// entry points.
pub trait Diagnostics {
    fn report_failure(&self, error: &TrackerError);
}

/// Writes failures through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report_failure(&self, error: &TrackerError) {
        match std::error::Error::source(error) {
            Some(source) => error!("{}: {}", error, source),
            None => error!("{}", error),
        }
    }
}

impl<F> Diagnostics for F
where
    F: Fn(&TrackerError),
{
    fn report_failure(&self, error: &TrackerError) {
        self(error)
    }
}
