//! Distance, speed and calorie formulas.
//!
//! Two stride models are used: a flat stride for daily step totals and a
//! height derived stride for training records.

use chrono::TimeDelta;
use tracker_types::{activities::ActivityKind, biometrics::Biometrics, metrics::ComputedMetrics};

use crate::{
    error::{Field, TrackerError},
    helpers::time_math,
};

/// Flat stride length in meters.
pub const STEP_LENGTH: f64 = 0.65;
pub const M_IN_KM: f64 = 1_000.0;
pub const MIN_IN_H: f64 = 60.0;
/// Stride length as a fraction of height.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Distance in km using a stride of `height * 0.45` meters.
pub fn distance(steps: i64, height: f64) -> f64 {
    let step_length = height * STEP_LENGTH_COEFFICIENT;
    steps as f64 * step_length / M_IN_KM
}

/// Distance in km using the flat 0.65 m stride.
pub fn flat_distance(steps: i64) -> f64 {
    steps as f64 * STEP_LENGTH / M_IN_KM
}

/// Mean speed in km/h. Zero for an empty or negative duration.
pub fn mean_speed(steps: i64, height: f64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }
    distance(steps, height) / time_math::hours(duration)
}

fn validate(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<(), TrackerError> {
    if steps <= 0 {
        return Err(TrackerError::non_positive(Field::Steps, steps));
    }
    // Negated so NaN is rejected too.
    if !(weight > 0.0) {
        return Err(TrackerError::non_positive(
            Field::Weight,
            format_args!("{weight:.2}"),
        ));
    }
    if !(height > 0.0) {
        return Err(TrackerError::non_positive(
            Field::Height,
            format_args!("{height:.2}"),
        ));
    }
    if duration <= TimeDelta::zero() {
        return Err(TrackerError::non_positive(Field::Duration, duration));
    }
    Ok(())
}

pub fn running_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    validate(steps, weight, height, duration)?;

    let speed = mean_speed(steps, height, duration);
    Ok(weight * speed * time_math::minutes(duration) / MIN_IN_H)
}

/// Walking burns half of what running at the same speed does. Daily step
/// totals are always treated as walking.
pub fn walking_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    Ok(running_calories(steps, weight, height, duration)? * WALKING_CALORIES_COEFFICIENT)
}

pub fn calories(
    kind: ActivityKind,
    steps: i64,
    biometrics: &Biometrics,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    let Biometrics { weight, height } = *biometrics;
    match kind {
        ActivityKind::Running => running_calories(steps, weight, height, duration),
        ActivityKind::Walking => walking_calories(steps, weight, height, duration),
    }
}

/// Validated distance, speed and calories for one training.
pub fn training_metrics(
    kind: ActivityKind,
    steps: i64,
    biometrics: &Biometrics,
    duration: TimeDelta,
) -> Result<ComputedMetrics, TrackerError> {
    let calories = calories(kind, steps, biometrics, duration)?;

    Ok(ComputedMetrics {
        distance_km: distance(steps, biometrics.height),
        speed_kmh: mean_speed(steps, biometrics.height, duration),
        calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn distance_from_height() {
        // stride 1.8 * 0.45 = 0.81 m
        assert_close(distance(10_000, 1.8), 8.1);
        assert_eq!(distance(0, 1.8), 0.0);
    }

    #[test]
    fn flat_distance_uses_fixed_stride() {
        assert_close(flat_distance(5_000), 3.25);
        assert_close(flat_distance(1_000), 0.65);
    }

    #[test]
    fn distance_scales_linearly() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let steps = rng.random_range(1..100_000i64);
            let height = rng.random_range(0.5..2.5);
            let base = distance(steps, height);
            assert!(base >= 0.0);
            assert_close(distance(steps * 3, height), base * 3.0);
            assert_close(distance(steps, height * 2.0), base * 2.0);
        }
    }

    #[test]
    fn mean_speed_zero_for_non_positive_duration() {
        assert_eq!(mean_speed(1_000, 1.75, TimeDelta::zero()), 0.0);
        assert_eq!(mean_speed(1_000, 1.75, TimeDelta::minutes(-10)), 0.0);
    }

    #[test]
    fn mean_speed_km_per_hour() {
        // 8.1 km in 30 min
        assert_close(mean_speed(10_000, 1.8, TimeDelta::minutes(30)), 16.2);
    }

    #[test]
    fn running_calories_formula() {
        // 8.1 km/h for 60 min at 80 kg -> 80 * 8.1 * 60 / 60
        let kcal = running_calories(10_000, 80.0, 1.8, TimeDelta::hours(1)).unwrap();
        assert_close(kcal, 648.0);
    }

    #[test]
    fn walking_is_half_of_running() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let steps = rng.random_range(1..50_000i64);
            let weight = rng.random_range(30.0..150.0);
            let height = rng.random_range(1.0..2.2);
            let duration = TimeDelta::seconds(rng.random_range(1..20_000));

            let running = running_calories(steps, weight, height, duration).unwrap();
            let walking = walking_calories(steps, weight, height, duration).unwrap();
            assert_eq!(walking, running * 0.5);
        }
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let hour = TimeDelta::hours(1);
        let cases = [
            (0, 70.0, 1.75, hour, Field::Steps),
            (-10, 70.0, 1.75, hour, Field::Steps),
            (100, 0.0, 1.75, hour, Field::Weight),
            (100, -1.0, 1.75, hour, Field::Weight),
            (100, f64::NAN, 1.75, hour, Field::Weight),
            (100, 70.0, 0.0, hour, Field::Height),
            (100, 70.0, 1.75, TimeDelta::zero(), Field::Duration),
            (100, 70.0, 1.75, TimeDelta::minutes(-5), Field::Duration),
        ];

        for (steps, weight, height, duration, expected) in cases {
            for result in [
                running_calories(steps, weight, height, duration),
                walking_calories(steps, weight, height, duration),
            ] {
                match result {
                    Err(TrackerError::NonPositiveValue { field, .. }) => {
                        assert_eq!(field, expected)
                    }
                    other => panic!("expected {expected} rejection, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn error_names_offending_value() {
        let err = running_calories(-3, 70.0, 1.75, TimeDelta::hours(1)).unwrap_err();
        assert_eq!(err.to_string(), "invalid steps: -3 (must be > 0)");

        let err = running_calories(3, 70.0, -1.5, TimeDelta::hours(1)).unwrap_err();
        assert_eq!(err.to_string(), "invalid height: -1.50 (must be > 0)");
    }

    #[test]
    fn steps_checked_first() {
        let err = walking_calories(0, 0.0, 0.0, TimeDelta::zero()).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::NonPositiveValue {
                field: Field::Steps,
                ..
            }
        ));
    }

    #[test]
    fn training_metrics_dispatches_on_kind() {
        let bio = Biometrics::new(80.0, 1.8);
        let hour = TimeDelta::hours(1);
        let run = training_metrics(ActivityKind::Running, 10_000, &bio, hour).unwrap();
        let walk = training_metrics(ActivityKind::Walking, 10_000, &bio, hour).unwrap();

        assert_eq!(run.distance_km, walk.distance_km);
        assert_eq!(run.speed_kmh, walk.speed_kmh);
        assert_eq!(walk.calories, run.calories * 0.5);
    }
}
