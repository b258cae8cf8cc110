use chrono::TimeDelta;

const SECONDS_IN_MINUTE: f64 = 60.0;
const SECONDS_IN_HOUR: f64 = 3_600.0;

/// Exact fractional seconds, sub-second part included.
pub fn total_seconds(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9
}

pub fn hours(duration: TimeDelta) -> f64 {
    total_seconds(duration) / SECONDS_IN_HOUR
}

pub fn minutes(duration: TimeDelta) -> f64 {
    total_seconds(duration) / SECONDS_IN_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_whole_and_fractional() {
        assert_eq!(hours(TimeDelta::hours(2)), 2.0);
        assert_eq!(hours(TimeDelta::minutes(90)), 1.5);
        assert_eq!(hours(TimeDelta::zero()), 0.0);
    }

    #[test]
    fn minutes_keeps_sub_second_part() {
        assert_eq!(minutes(TimeDelta::milliseconds(90_000)), 1.5);
        assert_eq!(minutes(TimeDelta::milliseconds(500)), 0.5 / 60.0);
    }

    #[test]
    fn negative_durations_stay_negative() {
        assert_eq!(total_seconds(TimeDelta::milliseconds(-1_500)), -1.5);
        assert_eq!(hours(TimeDelta::minutes(-30)), -0.5);
    }
}
