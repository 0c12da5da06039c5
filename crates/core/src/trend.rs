//! Sensor trend forecasting and threshold excursion detection.
//!
//! Given a chronologically ordered series of readings, fits a degree-1
//! least-squares line over *sample index*, not elapsed time (unevenly
//! spaced series are treated as evenly spaced; this mirrors the behaviour
//! the dashboard has always shown and is a known limitation), extends it
//! ten steps past the last sample, and scans historical and forecast
//! points against optional lower/upper thresholds.
//!
//! Pure computation: no I/O, no mutation of the input, deterministic.

use chrono::Duration;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of steps extrapolated past the last historical sample.
pub const FORECAST_HORIZON: usize = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single timestamped value, historical or forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub timestamp: Timestamp,
    pub value: f64,
}

/// Which side of the threshold band a point violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExcursionKind {
    /// Value fell below the lower threshold.
    Low,
    /// Value rose above the upper threshold.
    High,
}

/// A threshold violation at one point of the trend view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Excursion {
    pub kind: ExcursionKind,
    pub timestamp: Timestamp,
    pub value: f64,
}

/// Output of [`forecast_series`]: the echoed historical series, the
/// extrapolated forecast, and every threshold excursion across both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendReport {
    pub historical: Vec<TrendPoint>,
    pub forecast: Vec<TrendPoint>,
    pub excursions: Vec<Excursion>,
}

// ---------------------------------------------------------------------------
// Forecasting
// ---------------------------------------------------------------------------

/// Compute the trend report for one sensor's series.
///
/// `series` must be chronologically sorted (the repository query orders
/// by timestamp). `lower`/`upper` are the sensor's configured thresholds;
/// either may be absent.
///
/// Behaviour:
/// - Fewer than 2 samples: forecast is empty, no regression is attempted;
///   excursion checks still run over whatever historical points exist.
/// - Otherwise a least-squares line is fitted to `(index, value)` pairs
///   and evaluated at the next [`FORECAST_HORIZON`] integer indices.
///   Forecast timestamps are synthetic: `last + 1 day` through
///   `last + 10 days`, regardless of the input's sampling interval.
/// - Excursions are emitted in point order, historical before forecast.
///   For each point the lower bound is checked before the upper. The two
///   checks are independent, so a point can emit both when the configured
///   band is inverted (`lower > upper`).
pub fn forecast_series(
    series: &[TrendPoint],
    lower: Option<f64>,
    upper: Option<f64>,
) -> TrendReport {
    let historical = series.to_vec();

    let forecast = match (series.last(), fit_line(series)) {
        (Some(last), Some((slope, intercept))) => {
            let last_index = (series.len() - 1) as f64;
            (1..=FORECAST_HORIZON)
                .map(|step| TrendPoint {
                    timestamp: last.timestamp + Duration::days(step as i64),
                    value: slope * (last_index + step as f64) + intercept,
                })
                .collect()
        }
        _ => Vec::new(),
    };

    let mut excursions = Vec::new();
    for point in historical.iter().chain(forecast.iter()) {
        if let Some(lo) = lower {
            if point.value < lo {
                excursions.push(Excursion {
                    kind: ExcursionKind::Low,
                    timestamp: point.timestamp,
                    value: point.value,
                });
            }
        }
        if let Some(hi) = upper {
            if point.value > hi {
                excursions.push(Excursion {
                    kind: ExcursionKind::High,
                    timestamp: point.timestamp,
                    value: point.value,
                });
            }
        }
    }

    TrendReport {
        historical,
        forecast,
        excursions,
    }
}

/// Fit `value = slope * index + intercept` by ordinary least squares.
///
/// Returns `None` for fewer than 2 samples or a degenerate denominator
/// (unreachable for index x-values with n >= 2, guarded regardless).
fn fit_line(series: &[TrendPoint]) -> Option<(f64, f64)> {
    if series.len() < 2 {
        return None;
    }

    let n = series.len() as f64;
    let sum_x: f64 = (0..series.len()).map(|i| i as f64).sum();
    let sum_y: f64 = series.iter().map(|p| p.value).sum();
    let sum_xy: f64 = series
        .iter()
        .enumerate()
        .map(|(i, p)| i as f64 * p.value)
        .sum();
    let sum_x2: f64 = (0..series.len()).map(|i| (i as f64) * (i as f64)).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Some((slope, intercept))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    /// A point `days` after 2024-01-01 00:00:00 UTC.
    fn daily(days: i64, value: f64) -> TrendPoint {
        TrendPoint {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(days),
            value,
        }
    }

    /// A point `hours` after 2024-01-01 00:00:00 UTC.
    fn hourly(hours: i64, value: f64) -> TrendPoint {
        TrendPoint {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(hours),
            value,
        }
    }

    // -- forecast skipping ----------------------------------------------------

    #[test]
    fn empty_series_yields_empty_report() {
        let report = forecast_series(&[], Some(0.0), Some(10.0));
        assert!(report.historical.is_empty());
        assert!(report.forecast.is_empty());
        assert!(report.excursions.is_empty());
    }

    #[test]
    fn single_point_skips_forecast() {
        let report = forecast_series(&[daily(0, 5.0)], None, None);
        assert_eq!(report.historical.len(), 1);
        assert!(report.forecast.is_empty());
    }

    #[test]
    fn single_point_still_checked_for_excursions() {
        let report = forecast_series(&[daily(0, -3.0)], Some(0.0), Some(10.0));
        assert!(report.forecast.is_empty());
        assert_eq!(report.excursions.len(), 1);
        assert_matches!(report.excursions[0].kind, ExcursionKind::Low);
        assert!((report.excursions[0].value - -3.0).abs() < f64::EPSILON);
    }

    // -- regression and extrapolation ------------------------------------------

    #[test]
    fn linear_series_continues_slope() {
        let series: Vec<_> = (0..5).map(|i| daily(i, (i + 1) as f64)).collect();
        let report = forecast_series(&series, None, None);

        assert_eq!(report.forecast.len(), FORECAST_HORIZON);
        for (i, point) in report.forecast.iter().enumerate() {
            let expected = (6 + i) as f64; // 6, 7, ..., 15
            assert!(
                (point.value - expected).abs() < 1e-9,
                "forecast[{i}] = {}, expected {expected}",
                point.value
            );
        }
    }

    #[test]
    fn constant_series_forecasts_constant() {
        let series: Vec<_> = (0..4).map(|i| daily(i, 7.5)).collect();
        let report = forecast_series(&series, None, None);

        assert_eq!(report.forecast.len(), FORECAST_HORIZON);
        for point in &report.forecast {
            assert!((point.value - 7.5).abs() < 1e-9);
        }
    }

    #[test]
    fn historical_echoes_input_unchanged() {
        let series = vec![daily(0, 1.0), daily(3, 9.0), daily(4, 2.0)];
        let report = forecast_series(&series, None, None);
        assert_eq!(report.historical, series);
    }

    // -- synthetic forecast timestamps ------------------------------------------

    #[test]
    fn forecast_timestamps_are_daily_from_last_sample() {
        let series: Vec<_> = (0..3).map(|i| daily(i, i as f64)).collect();
        let report = forecast_series(&series, None, None);

        let last = series.last().unwrap().timestamp;
        for (i, point) in report.forecast.iter().enumerate() {
            assert_eq!(point.timestamp, last + Duration::days(i as i64 + 1));
        }
    }

    #[test]
    fn forecast_timestamps_ignore_input_spacing() {
        // Hourly samples still produce +1..+10 *day* forecast stamps.
        let series: Vec<_> = (0..6).map(|i| hourly(i, i as f64)).collect();
        let report = forecast_series(&series, None, None);

        let last = series.last().unwrap().timestamp;
        assert_eq!(report.forecast[0].timestamp, last + Duration::days(1));
        assert_eq!(report.forecast[9].timestamp, last + Duration::days(10));
    }

    // -- excursion detection ----------------------------------------------------

    #[test]
    fn excursions_reported_in_point_order() {
        let series = vec![daily(0, -1.0), daily(1, 5.0), daily(2, 11.0)];
        let report = forecast_series(&series, Some(0.0), Some(10.0));

        // Historical excursions: LOW at point 0, HIGH at point 2. The
        // rising fit pushes every forecast point above 10 as well.
        assert!(report.excursions.len() >= 2);
        assert_matches!(report.excursions[0].kind, ExcursionKind::Low);
        assert!((report.excursions[0].value - -1.0).abs() < f64::EPSILON);
        assert_eq!(report.excursions[0].timestamp, series[0].timestamp);
        assert_matches!(report.excursions[1].kind, ExcursionKind::High);
        assert!((report.excursions[1].value - 11.0).abs() < f64::EPSILON);
        assert_eq!(report.excursions[1].timestamp, series[2].timestamp);
    }

    #[test]
    fn forecast_points_are_excursion_checked() {
        // Steady climb: history stays inside the band, forecast exits it.
        let series: Vec<_> = (0..5).map(|i| daily(i, (i + 1) as f64)).collect();
        let report = forecast_series(&series, Some(0.0), Some(8.0));

        // Values 9..15 at forecast steps 4..10 exceed the upper bound.
        assert_eq!(report.excursions.len(), 7);
        for excursion in &report.excursions {
            assert_matches!(excursion.kind, ExcursionKind::High);
            assert!(excursion.value > 8.0);
        }
    }

    #[test]
    fn threshold_boundary_is_not_an_excursion() {
        let series = vec![daily(0, 0.0), daily(1, 10.0)];
        let report = forecast_series(&series, Some(0.0), Some(10.0));
        assert!(report
            .excursions
            .iter()
            .all(|e| e.value != 0.0 && e.value != 10.0));
    }

    #[test]
    fn no_thresholds_means_no_excursions() {
        let series = vec![daily(0, -100.0), daily(1, 100.0)];
        let report = forecast_series(&series, None, None);
        assert!(report.excursions.is_empty());
    }

    #[test]
    fn only_lower_threshold_checked_when_upper_absent() {
        let series = vec![daily(0, -5.0), daily(1, 500.0)];
        let report = forecast_series(&series, Some(0.0), None);
        assert!(report
            .excursions
            .iter()
            .all(|e| e.kind == ExcursionKind::Low));
    }

    #[test]
    fn inverted_band_fires_both_kinds_low_first() {
        // lower=10 > upper=0: a value of 5 is below the lower bound AND
        // above the upper bound. Both fire, lower check first.
        let report = forecast_series(&[daily(0, 5.0)], Some(10.0), Some(0.0));
        assert_eq!(report.excursions.len(), 2);
        assert_matches!(report.excursions[0].kind, ExcursionKind::Low);
        assert_matches!(report.excursions[1].kind, ExcursionKind::High);
        assert_eq!(
            report.excursions[0].timestamp,
            report.excursions[1].timestamp
        );
    }

    // -- determinism -------------------------------------------------------------

    #[test]
    fn repeated_calls_are_identical() {
        let series: Vec<_> = (0..7).map(|i| daily(i, (i * i) as f64)).collect();
        let first = forecast_series(&series, Some(1.0), Some(20.0));
        let second = forecast_series(&series, Some(1.0), Some(20.0));
        assert_eq!(first, second);
    }

    // -- serialization ------------------------------------------------------------

    #[test]
    fn excursion_kind_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ExcursionKind::Low).unwrap(),
            "\"LOW\""
        );
        assert_eq!(
            serde_json::to_string(&ExcursionKind::High).unwrap(),
            "\"HIGH\""
        );
    }
}
