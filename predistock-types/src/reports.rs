//! Request and report envelopes for one dashboard run.

use serde::{Deserialize, Serialize};

use crate::config::ChartKind;
use crate::error::PredistockError;
use crate::forecast::ForecastPoint;
use crate::market::{CompanyProfile, PriceBar};
use crate::recommendation::Recommendation;

/// Smallest accepted forecast horizon in years.
pub const MIN_YEARS: u8 = 1;
/// Largest accepted forecast horizon in years.
pub const MAX_YEARS: u8 = 4;

/// User input for one dashboard run: the query plus the sidebar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// Company name or ticker as typed by the user.
    pub query: String,
    /// Forecast horizon in years, `1..=4`.
    pub years: u8,
    /// Price chart style.
    pub chart: ChartKind,
    /// Include the raw-data tail in the report.
    pub show_raw: bool,
    /// Keep the forecast uncertainty interval.
    pub show_confidence: bool,
}

impl DashboardRequest {
    /// Request for `query` with default settings: 1 year, line chart, no raw data, no band.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            years: MIN_YEARS,
            chart: ChartKind::Line,
            show_raw: false,
            show_confidence: false,
        }
    }

    /// Set the forecast horizon in years.
    #[must_use]
    pub const fn years(mut self, years: u8) -> Self {
        self.years = years;
        self
    }

    /// Set the price chart style.
    #[must_use]
    pub const fn chart(mut self, chart: ChartKind) -> Self {
        self.chart = chart;
        self
    }

    /// Toggle the raw-data tail.
    #[must_use]
    pub const fn show_raw(mut self, yes: bool) -> Self {
        self.show_raw = yes;
        self
    }

    /// Toggle the forecast confidence band.
    #[must_use]
    pub const fn show_confidence(mut self, yes: bool) -> Self {
        self.show_confidence = yes;
        self
    }

    /// Check the settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `years` is outside `1..=4`.
    pub fn validate(&self) -> Result<(), PredistockError> {
        if !(MIN_YEARS..=MAX_YEARS).contains(&self.years) {
            return Err(PredistockError::InvalidArg(format!(
                "years must be between {MIN_YEARS} and {MAX_YEARS}, got {}",
                self.years
            )));
        }
        Ok(())
    }
}

/// Everything the dashboard page shows for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Exchange-qualified symbol the query resolved to.
    pub symbol: String,
    /// Company metadata.
    pub profile: CompanyProfile,
    /// Most recent bar from the one-day window, when available.
    pub latest: Option<PriceBar>,
    /// Number of bars in the normalized history.
    pub bars: usize,
    /// Last rows of the normalized history, when requested.
    pub raw_tail: Option<Vec<PriceBar>>,
    /// Historical price figure (Plotly JSON).
    pub price_chart: serde_json::Value,
    /// Forecast horizon in days.
    pub horizon_days: u32,
    /// Last rows of the forecast table.
    pub forecast_tail: Vec<ForecastPoint>,
    /// Forecast figure (Plotly JSON).
    pub forecast_chart: serde_json::Value,
    /// Trend/seasonality figure (Plotly JSON).
    pub components_chart: serde_json::Value,
    /// Buy/wait verdict.
    pub recommendation: Recommendation,
    /// Brokerage deep link; present only for `Growth`.
    pub buy_url: Option<String>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<PredistockError>,
}
