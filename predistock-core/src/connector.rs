use async_trait::async_trait;

use crate::normalize::{NormalizeError, normalize};
use predistock_types::{
    CompanyProfile, Forecast, ForecastInput, HistoryRange, PredistockError, PriceBar, RawSeries,
};

/// Source of company metadata and daily price history.
///
/// Implementations map their provider failures onto [`PredistockError`]; a
/// symbol the provider does not know must surface as `NotFound`.
#[async_trait]
pub trait MarketDataGateway: Send + Sync {
    /// A stable identifier used in logs and error messages (e.g. "predistock-yfinance").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch company metadata for `symbol`.
    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, PredistockError>;

    /// Fetch un-normalized daily history for `symbol` over `range`.
    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<RawSeries, PredistockError>;

    /// Most recent bar from a one-day window.
    ///
    /// Returns `Ok(None)` when the window holds no complete bar.
    async fn recent_price(&self, symbol: &str) -> Result<Option<PriceBar>, PredistockError> {
        let raw = self.history(symbol, HistoryRange::D1).await?;
        match normalize(&raw) {
            Ok(series) => Ok(Some(*series.last())),
            Err(NormalizeError::EmptySeries) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Fits a model on observed closes and predicts history plus a horizon.
#[async_trait]
pub trait ForecastEngine: Send + Sync {
    /// A stable identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fit on `input`, then predict every input date followed by
    /// `horizon_days` consecutive calendar days after the last one.
    ///
    /// The returned components are aligned with the returned points.
    async fn forecast(
        &self,
        input: ForecastInput,
        horizon_days: u32,
    ) -> Result<Forecast, PredistockError>;
}
