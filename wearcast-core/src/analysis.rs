//! Daily temperature analysis.
//!
//! Reduces an hourly forecast into a [`DailyTemperatureProfile`]: min, max,
//! average and population variance plus representative morning, afternoon and
//! evening temperatures.

use chrono::{NaiveDate, Timelike};

use crate::error::AnalysisError;
use crate::model::{DailyTemperatureProfile, HourlySample};

/// How many leading samples stand in for "the next ~24 hours" when no sample
/// matches the reference date. Forecast feeds arrive at a 3-hour cadence.
const FALLBACK_SAMPLE_COUNT: usize = 8;

const MORNING_HOURS: (u32, u32) = (6, 10);
const AFTERNOON_HOURS: (u32, u32) = (12, 16);
const EVENING_HOURS: (u32, u32) = (18, 22);

/// Reduce `samples` to the temperature profile for `reference_date`.
///
/// Samples whose calendar date equals `reference_date` are analyzed; if none
/// match, the first [`FALLBACK_SAMPLE_COUNT`] samples in input order are used
/// instead. The fallback deliberately relies on input ordering rather than
/// timestamp comparison.
///
/// The reference date is an explicit parameter so the analyzer never reads
/// the wall clock; identical input always yields an identical profile.
pub fn analyze_daily(
    samples: &[HourlySample],
    reference_date: NaiveDate,
) -> Result<DailyTemperatureProfile, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let matching: Vec<HourlySample> = samples
        .iter()
        .filter(|sample| sample.timestamp_utc.date_naive() == reference_date)
        .copied()
        .collect();

    let selected = if matching.is_empty() {
        &samples[..samples.len().min(FALLBACK_SAMPLE_COUNT)]
    } else {
        &matching[..]
    };

    Ok(profile_of(selected))
}

/// Compute the profile of a non-empty sample set.
fn profile_of(samples: &[HourlySample]) -> DailyTemperatureProfile {
    let count = samples.len() as f64;

    let min = samples.iter().map(|s| s.temperature_c).fold(f64::INFINITY, f64::min);
    let max = samples.iter().map(|s| s.temperature_c).fold(f64::NEG_INFINITY, f64::max);
    let average = samples.iter().map(|s| s.temperature_c).sum::<f64>() / count;
    let variance =
        samples.iter().map(|s| (s.temperature_c - average).powi(2)).sum::<f64>() / count;

    DailyTemperatureProfile {
        morning: window_mean(samples, MORNING_HOURS).unwrap_or(min),
        afternoon: window_mean(samples, AFTERNOON_HOURS).unwrap_or(max),
        evening: window_mean(samples, EVENING_HOURS).unwrap_or(average),
        min,
        max,
        average,
        variance,
    }
}

/// Mean temperature of samples whose hour-of-day falls in the inclusive
/// window, or `None` when the window is empty.
fn window_mean(samples: &[HourlySample], (start, end): (u32, u32)) -> Option<f64> {
    let temps: Vec<f64> = samples
        .iter()
        .filter(|s| {
            let hour = s.timestamp_utc.hour();
            hour >= start && hour <= end
        })
        .map(|s| s.temperature_c)
        .collect();

    if temps.is_empty() {
        None
    } else {
        Some(temps.iter().sum::<f64>() / temps.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn sample(y: i32, m: u32, d: u32, hour: u32, temp: f64) -> HourlySample {
        let timestamp_utc: DateTime<Utc> = date(y, m, d)
            .and_hms_opt(hour, 0, 0)
            .expect("valid time")
            .and_utc();
        HourlySample { timestamp_utc, temperature_c: temp }
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = analyze_daily(&[], date(2026, 8, 30)).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyInput);
    }

    #[test]
    fn basic_stats_over_matching_day() {
        let samples = vec![
            sample(2026, 8, 30, 0, 10.0),
            sample(2026, 8, 30, 3, 14.0),
            sample(2026, 8, 30, 6, 18.0),
            // A different day, must be ignored.
            sample(2026, 8, 31, 0, 100.0),
        ];

        let profile = analyze_daily(&samples, date(2026, 8, 30)).expect("non-empty input");

        assert_eq!(profile.min, 10.0);
        assert_eq!(profile.max, 18.0);
        assert_eq!(profile.average, 14.0);
        // Mean squared deviation of [10, 14, 18] around 14.
        assert_eq!(profile.variance, 32.0 / 3.0);
    }

    #[test]
    fn invariants_hold_for_arbitrary_input() {
        let samples = vec![
            sample(2026, 1, 5, 2, -7.3),
            sample(2026, 1, 5, 8, 1.1),
            sample(2026, 1, 5, 14, 6.9),
            sample(2026, 1, 5, 20, -2.0),
        ];

        let profile = analyze_daily(&samples, date(2026, 1, 5)).expect("non-empty input");

        assert!(profile.min <= profile.average);
        assert!(profile.average <= profile.max);
        assert!(profile.variance >= 0.0);
    }

    #[test]
    fn falls_back_to_first_eight_samples_when_date_missing() {
        let mut samples = Vec::new();
        for i in 0..12 {
            samples.push(sample(2026, 3, 1, 2 * i, f64::from(i)));
        }

        // No sample is on the reference date, so the analyzer takes the
        // first 8 samples in input order.
        let fallback = analyze_daily(&samples, date(2026, 3, 5)).expect("non-empty input");
        let direct = analyze_daily(&samples[..8], date(2026, 3, 1)).expect("non-empty input");

        assert_eq!(fallback, direct);
        assert_eq!(fallback.max, 7.0);
    }

    #[test]
    fn fallback_handles_fewer_than_eight_samples() {
        let samples =
            vec![sample(2026, 3, 1, 0, 5.0), sample(2026, 3, 1, 3, 7.0)];

        let profile = analyze_daily(&samples, date(2026, 3, 9)).expect("non-empty input");
        assert_eq!(profile.average, 6.0);
    }

    #[test]
    fn window_means_use_inclusive_hour_ranges() {
        let samples = vec![
            sample(2026, 8, 30, 6, 10.0),  // morning edge
            sample(2026, 8, 30, 10, 14.0), // morning edge
            sample(2026, 8, 30, 11, 99.0), // outside every window
            sample(2026, 8, 30, 12, 20.0), // afternoon edge
            sample(2026, 8, 30, 22, 8.0),  // evening edge
        ];

        let profile = analyze_daily(&samples, date(2026, 8, 30)).expect("non-empty input");

        assert_eq!(profile.morning, 12.0);
        assert_eq!(profile.afternoon, 20.0);
        assert_eq!(profile.evening, 8.0);
    }

    #[test]
    fn empty_windows_fall_back_to_min_max_average() {
        // All samples at night: every named window is empty.
        let samples = vec![
            sample(2026, 8, 30, 0, 4.0),
            sample(2026, 8, 30, 2, 6.0),
            sample(2026, 8, 30, 4, 11.0),
        ];

        let profile = analyze_daily(&samples, date(2026, 8, 30)).expect("non-empty input");

        assert_eq!(profile.morning, profile.min);
        assert_eq!(profile.afternoon, profile.max);
        assert_eq!(profile.evening, profile.average);
    }

    #[test]
    fn empty_evening_window_equals_average() {
        let samples = vec![
            sample(2026, 8, 30, 7, 10.0),
            sample(2026, 8, 30, 13, 20.0),
        ];

        let profile = analyze_daily(&samples, date(2026, 8, 30)).expect("non-empty input");
        assert_eq!(profile.evening, profile.average);
        assert_eq!(profile.evening, 15.0);
    }

    #[test]
    fn zero_degree_window_mean_is_kept() {
        // A window whose mean is exactly 0 °C is a real value, not a gap.
        let samples = vec![
            sample(2026, 1, 10, 8, 0.0),
            sample(2026, 1, 10, 14, 12.0),
            sample(2026, 1, 10, 20, -4.0),
        ];

        let profile = analyze_daily(&samples, date(2026, 1, 10)).expect("non-empty input");
        assert_eq!(profile.morning, 0.0);
        assert_eq!(profile.min, -4.0);
    }
}
