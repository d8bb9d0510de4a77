use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Training frame handed to a forecast engine: dates and closing prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastInput {
    /// Observation dates, ascending.
    pub ds: Vec<NaiveDate>,
    /// Observed closes aligned with `ds`.
    pub y: Vec<f64>,
}

/// Predicted value and its uncertainty interval for one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Date of the prediction.
    pub date: NaiveDate,
    /// Point prediction.
    pub predicted: f64,
    /// Lower bound of the uncertainty interval.
    pub lower: f64,
    /// Upper bound of the uncertainty interval.
    pub upper: f64,
}

/// Additive decomposition of a forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastComponents {
    /// Dates shared by every component.
    pub dates: Vec<NaiveDate>,
    /// Trend component.
    pub trend: Vec<f64>,
    /// Seasonal components keyed by name (e.g. `weekly`, `yearly`).
    pub seasonal: BTreeMap<String, Vec<f64>>,
}

/// Engine output covering the observed history plus the horizon window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// One point per history date, then one per future day.
    pub points: Vec<ForecastPoint>,
    /// Trend and seasonality decomposition.
    pub components: ForecastComponents,
}

impl Forecast {
    /// Overwrite every interval with its point prediction.
    pub fn collapse_bounds(&mut self) {
        for p in &mut self.points {
            p.lower = p.predicted;
            p.upper = p.predicted;
        }
    }

    /// The last `n` points.
    #[must_use]
    pub fn tail(&self, n: usize) -> &[ForecastPoint] {
        &self.points[self.points.len().saturating_sub(n)..]
    }
}
