//! Deterministic collaborators for tests and offline demos.
//!
//! `MockGateway` serves fixture profiles and histories for a handful of NSE
//! symbols; `MockForecastEngine` fits a least-squares line instead of a real
//! model. Both count their calls so tests can assert on caching and
//! short-circuiting.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use predistock_core::{
    CompanyProfile, Forecast, ForecastComponents, ForecastEngine, ForecastInput, ForecastPoint,
    HistoryRange, MarketDataGateway, PredistockError, RawSeries, future_dates,
};

mod fixtures;

/// Shared call counters, cloneable into tests.
#[derive(Debug, Default)]
pub struct CallCounts {
    /// `profile` calls.
    pub profile: AtomicUsize,
    /// `history` calls for any range other than the one-day window.
    pub history: AtomicUsize,
    /// One-day window fetches (recent price).
    pub recent: AtomicUsize,
}

/// Mock gateway. Provides deterministic data from static fixtures.
///
/// Special symbols: `FAIL` fails every call with a connector error,
/// `STALE.NS` fails only the one-day window, and `EMPTY.NS` has a profile but
/// no complete price rows.
pub struct MockGateway {
    calls: Arc<CallCounts>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    /// Gateway name used in errors.
    pub const NAME: &'static str = "predistock-mock";

    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(CallCounts::default()),
        }
    }

    /// Handle on the call counters.
    #[must_use]
    pub fn calls(&self) -> Arc<CallCounts> {
        Arc::clone(&self.calls)
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), PredistockError> {
        match (symbol, capability) {
            ("FAIL", _) | ("STALE.NS", "recent") => Err(PredistockError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl MarketDataGateway for MockGateway {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, PredistockError> {
        self.calls.profile.fetch_add(1, Ordering::SeqCst);
        Self::maybe_fail(symbol, "profile")?;
        fixtures::profile::by_symbol(symbol)
            .ok_or_else(|| PredistockError::not_found(format!("profile for {symbol}")))
    }

    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<RawSeries, PredistockError> {
        if range == HistoryRange::D1 {
            self.calls.recent.fetch_add(1, Ordering::SeqCst);
            Self::maybe_fail(symbol, "recent")?;
        } else {
            self.calls.history.fetch_add(1, Ordering::SeqCst);
            Self::maybe_fail(symbol, "history")?;
        }
        fixtures::history::by_symbol(symbol, range)
            .ok_or_else(|| PredistockError::not_found(format!("history for {symbol}")))
    }
}

/// Least-squares linear forecast engine.
///
/// The band is the prediction plus or minus the residual standard deviation;
/// seasonal components are reported as zero `weekly` and `yearly` series.
pub struct MockForecastEngine {
    fail: bool,
    calls: AtomicUsize,
    last_horizon: AtomicU32,
}

impl Default for MockForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockForecastEngine {
    /// Engine name used in errors.
    pub const NAME: &'static str = "predistock-mock-forecast";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
            last_horizon: AtomicU32::new(0),
        }
    }

    /// An engine whose every call fails.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
            last_horizon: AtomicU32::new(0),
        }
    }

    /// Number of `forecast` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Horizon passed to the most recent call.
    pub fn last_horizon(&self) -> u32 {
        self.last_horizon.load(Ordering::SeqCst)
    }
}

fn linear_fit(y: &[f64]) -> (f64, f64, f64) {
    let n = y.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = y.iter().sum::<f64>() / n;
    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (i, v) in y.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxy += dx * (v - mean_y);
        sxx += dx * dx;
    }
    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = mean_y - slope * mean_x;
    let var = y
        .iter()
        .enumerate()
        .map(|(i, v)| (v - (intercept + slope * i as f64)).powi(2))
        .sum::<f64>()
        / n;
    (intercept, slope, var.sqrt())
}

#[async_trait]
impl ForecastEngine for MockForecastEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn forecast(
        &self,
        input: ForecastInput,
        horizon_days: u32,
    ) -> Result<Forecast, PredistockError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_horizon.store(horizon_days, Ordering::SeqCst);
        if self.fail {
            return Err(PredistockError::forecast(Self::NAME, "forced failure"));
        }
        let Some(&last) = input.ds.last() else {
            return Err(PredistockError::forecast(Self::NAME, "no observations"));
        };
        let (intercept, slope, sd) = linear_fit(&input.y);

        let mut dates = input.ds.clone();
        dates.extend(future_dates(last, horizon_days));
        let trend: Vec<f64> = (0..dates.len())
            .map(|i| intercept + slope * i as f64)
            .collect();
        let points = dates
            .iter()
            .zip(&trend)
            .map(|(&date, &predicted)| ForecastPoint {
                date,
                predicted,
                lower: predicted - sd,
                upper: predicted + sd,
            })
            .collect();
        let zeros = vec![0.0; dates.len()];
        let seasonal = [("weekly", zeros.clone()), ("yearly", zeros)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Ok(Forecast {
            points,
            components: ForecastComponents {
                dates,
                trend,
                seasonal,
            },
        })
    }
}
