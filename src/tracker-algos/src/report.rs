use std::fmt::Display;

use serde::Serialize;
use tracker_codec::{RecordLayout, parse_record};
use tracker_types::{activities::ActivityKind, biometrics::Biometrics, metrics::ComputedMetrics};

use crate::{
    error::TrackerError,
    formulas::{flat_distance, training_metrics, walking_calories},
    helpers::time_math,
};

/// Summary of a `steps,activity,duration` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub activity: ActivityKind,
    pub duration_hours: f64,
    #[serde(flatten)]
    pub metrics: ComputedMetrics,
}

impl Display for TrainingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}",
            self.activity,
            self.duration_hours,
            self.metrics.distance_km,
            self.metrics.speed_kmh,
            self.metrics.calories,
        ))
    }
}

/// Summary of a `steps,duration` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStepsReport {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

impl Display for DayStepsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.",
            self.steps, self.distance_km, self.calories,
        ))
    }
}

/// Parses and evaluates a training record. The label must be exactly one of
/// the known activity labels.
pub fn training_report(
    data: &str,
    biometrics: &Biometrics,
) -> Result<TrainingReport, TrackerError> {
    let record = parse_record(data, RecordLayout::Training)?;
    let label = record.activity.unwrap_or_default();

    let activity = label
        .parse::<ActivityKind>()
        .map_err(|_| TrackerError::UnrecognizedActivity(label.clone()))?;
    debug!("training record dispatched as {:?}", activity);

    let metrics = training_metrics(activity, record.steps, biometrics, record.duration)?;

    Ok(TrainingReport {
        activity,
        duration_hours: time_math::hours(record.duration),
        metrics,
    })
}

/// Parses and evaluates a daily step total. Distance uses the flat stride and
/// calories always follow the walking model.
pub fn day_steps_report(
    data: &str,
    biometrics: &Biometrics,
) -> Result<DayStepsReport, TrackerError> {
    let record = parse_record(data, RecordLayout::DaySteps)?;

    let calories = walking_calories(
        record.steps,
        biometrics.weight,
        biometrics.height,
        record.duration,
    )?;

    Ok(DayStepsReport {
        steps: record.steps,
        distance_km: flat_distance(record.steps),
        calories,
    })
}
