//! Forecast request building and post-processing shared by every engine.

use chrono::{Days, NaiveDate};
use predistock_types::{Forecast, ForecastInput, PriceSeries};

/// Calendar days counted per forecast year.
pub const DAYS_PER_YEAR: u32 = 365;

/// Dates and closes of `series` as engine input.
#[must_use]
pub fn build_forecast_input(series: &PriceSeries) -> ForecastInput {
    let (ds, y) = series.bars().iter().map(|b| (b.date, b.close)).unzip();
    ForecastInput { ds, y }
}

/// Forecast horizon for `years`; leap days are not accounted for.
#[must_use]
pub fn horizon_days(years: u8) -> u32 {
    u32::from(years) * DAYS_PER_YEAR
}

/// `horizon` consecutive calendar days following `last`.
#[must_use]
pub fn future_dates(last: NaiveDate, horizon: u32) -> Vec<NaiveDate> {
    (1..=u64::from(horizon))
        .map_while(|i| last.checked_add_days(Days::new(i)))
        .collect()
}

/// Collapse the uncertainty interval onto the prediction unless it should be shown.
///
/// The band stays in the forecast (degenerate) so charts keep the same traces.
pub fn apply_confidence(forecast: &mut Forecast, show_confidence: bool) {
    if !show_confidence {
        forecast.collapse_bounds();
    }
}
