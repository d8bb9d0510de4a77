//! Configuration types shared by the dashboard, middleware, and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Chart style for the historical price figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Two line traces: open and close.
    #[default]
    Line,
    /// One OHLC candlestick trace.
    Candlestick,
}

impl ChartKind {
    /// Label shown in the settings form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Line => "Line Chart",
            Self::Candlestick => "Candlestick",
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = crate::PredistockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "line chart" => Ok(Self::Line),
            "candlestick" => Ok(Self::Candlestick),
            other => Err(crate::PredistockError::InvalidArg(format!(
                "unknown chart kind '{other}'"
            ))),
        }
    }
}

/// Lookback window requested from a market data gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum HistoryRange {
    /// The most recent trading day.
    D1,
    /// One month.
    M1,
    /// Six months.
    M6,
    /// One year.
    Y1,
    /// Five years.
    Y5,
    /// Everything the provider has.
    #[default]
    Max,
}

/// Longest accepted history cache TTL: 1000 years, the cache backend's limit.
pub const MAX_CACHE_TTL_MS: u64 = 1_000 * 365 * 24 * 60 * 60 * 1_000;

/// Settings for the process-wide history cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached `(symbol, range)` entries.
    pub max_entries: u64,
    /// Entry lifetime in milliseconds. `None` keeps entries until evicted by
    /// capacity; `Some(0)` disables caching entirely.
    pub ttl_ms: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 256,
            ttl_ms: None,
        }
    }
}

impl CacheConfig {
    /// Whether the cache layer should be installed at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self.ttl_ms, Some(0)) && self.max_entries > 0
    }

    /// Reject a TTL longer than [`MAX_CACHE_TTL_MS`].
    ///
    /// # Errors
    /// Returns `InvalidArg` naming the offending value.
    pub fn validate(&self) -> Result<(), crate::PredistockError> {
        match self.ttl_ms {
            Some(ms) if ms > MAX_CACHE_TTL_MS => Err(crate::PredistockError::InvalidArg(format!(
                "cache ttl_ms {ms} exceeds the maximum of {MAX_CACHE_TTL_MS}"
            ))),
            _ => Ok(()),
        }
    }

    /// Entry time-to-live, if one is configured.
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        match self.ttl_ms {
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        }
    }
}

/// Global configuration for the `Dashboard` pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base of the brokerage deep link; the exchange-qualified symbol is appended.
    pub brokerage_base_url: String,
    /// Maximum number of description characters shown before the ellipsis.
    pub description_limit: usize,
    /// Number of trailing rows shown for raw data and the forecast table.
    pub tail_len: usize,
    /// Lookback window used for the full history fetch.
    pub history_range: HistoryRange,
    /// History cache settings.
    pub cache: CacheConfig,
}

/// Default brokerage deep link base.
pub const DEFAULT_BROKERAGE_BASE_URL: &str = "https://kite.zerodha.com/";

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brokerage_base_url: DEFAULT_BROKERAGE_BASE_URL.to_string(),
            description_limit: 400,
            tail_len: 5,
            history_range: HistoryRange::Max,
            cache: CacheConfig::default(),
        }
    }
}
