//! Hourly visitor forecast.
//!
//! The forecast is a fixed daily curve scaled by location capacity, with
//! weekend and festival multipliers and a per-hour jitter. All randomness
//! comes from the `Rng` passed in by the caller.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;

use crate::capacity::CapacityTable;
use crate::error::ForecastError;
use crate::models::HourlyPrediction;

pub const HOURS_PER_DAY: u32 = 24;
pub const MIN_VISITORS: u64 = 100;

const WEEKEND_MULTIPLIER: f64 = 1.3;
const FESTIVAL_MULTIPLIER: f64 = 2.0;
const PEAK_CONFIDENCE: f64 = 0.9;
const BASE_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastSummary {
    pub total_predicted: u64,
    pub peak_hour: u32,
    pub peak_visitors: u64,
}

pub fn parse_date(date: &str) -> Result<NaiveDate, ForecastError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ForecastError::InvalidDate(date.to_string()))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Relative crowd density for an hour of the day.
///
/// Night hours draw one value from `rng`; the other segments are fixed.
pub fn shape_factor<R: Rng>(hour: u32, rng: &mut R) -> f64 {
    let h = f64::from(hour);
    match hour {
        5..=9 => 0.6 + 0.4 * ((h - 5.0) * PI / 4.0).sin(),
        17..=21 => 0.7 + 0.3 * ((h - 17.0) * PI / 4.0).sin(),
        10..=16 => 0.4 + 0.2 * ((h - 10.0) * PI / 6.0).sin(),
        _ => 0.1 + 0.1 * rng.gen::<f64>(),
    }
}

pub fn confidence(hour: u32) -> f64 {
    match hour {
        6..=9 | 17..=20 => PEAK_CONFIDENCE,
        _ => BASE_CONFIDENCE,
    }
}

/// Generates the 24 hourly predictions for a location and date.
///
/// Unknown locations are forecast against the default capacity.
pub fn generate<R: Rng>(
    capacities: &CapacityTable,
    location_id: &str,
    date: &str,
    festival_mode: bool,
    rng: &mut R,
) -> Result<Vec<HourlyPrediction>, ForecastError> {
    let date = parse_date(date)?;
    let capacity = f64::from(capacities.capacity_or_default(location_id));

    let weekend = if is_weekend(date) { WEEKEND_MULTIPLIER } else { 1.0 };
    let festival = if festival_mode { FESTIVAL_MULTIPLIER } else { 1.0 };

    let predictions = (0..HOURS_PER_DAY)
        .map(|hour| {
            let shape = shape_factor(hour, rng);
            let jitter = 0.8 + 0.4 * rng.gen::<f64>();
            let visitors = (capacity * shape * weekend * festival * jitter).floor() as u64;

            HourlyPrediction {
                hour,
                visitors: visitors.max(MIN_VISITORS),
                confidence: confidence(hour),
            }
        })
        .collect();

    Ok(predictions)
}

/// Total and peak of a forecast. Ties on the peak go to the earliest hour.
pub fn summarize(predictions: &[HourlyPrediction]) -> Option<ForecastSummary> {
    let peak = predictions
        .iter()
        .fold(None::<&HourlyPrediction>, |best, p| match best {
            Some(b) if b.visitors >= p.visitors => Some(b),
            _ => Some(p),
        })?;

    Some(ForecastSummary {
        total_predicted: predictions.iter().map(|p| p.visitors).sum(),
        peak_hour: peak.hour,
        peak_visitors: peak.visitors,
    })
}
