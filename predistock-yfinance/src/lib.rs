//! predistock-yfinance
//!
//! Market data gateway that implements `MarketDataGateway` on top of the
//! `yfinance-rs` client library: company profiles and daily history.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;
mod builder;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{CONNECTOR, RealAdapter, YfHistory, YfProfile};
use async_trait::async_trait;
use paft::market::requests::history::{Interval, Range};
use predistock_core::{
    ColumnLabel, CompanyProfile, HistoryRange, MarketDataGateway, PredistockError, RawSeries,
};
use rust_decimal::prelude::ToPrimitive;
use yfinance_rs as yf;

pub use builder::YfGatewayBuilder;

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type ProfileAdapter = Arc<dyn YfProfile>;
#[cfg(not(feature = "test-adapters"))]
type ProfileAdapter = AdapterArc;

/// Public gateway type. Production users construct it with `YfGateway::try_new_default()`.
pub struct YfGateway {
    history: HistoryAdapter,
    profile: ProfileAdapter,
}

impl YfGateway {
    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: PredistockError, what: &str) -> PredistockError {
        match e {
            PredistockError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    PredistockError::not_found(what.to_string())
                } else {
                    PredistockError::connector(CONNECTOR, msg)
                }
            }
            PredistockError::Other(msg) => {
                if Self::looks_like_not_found(&msg) {
                    PredistockError::not_found(what.to_string())
                } else {
                    PredistockError::connector(CONNECTOR, msg)
                }
            }
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns `Connector` if the HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, PredistockError> {
        let a = RealAdapter::try_new_default()?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yf::YfClient) -> Self {
        Self::from_adapter(&RealAdapter::new(client))
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// # Errors
    /// Returns `Connector` if the internal `YfClient` cannot be constructed.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, PredistockError> {
        let a = RealAdapter::try_with_reqwest_client(http)?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            profile: adapter.clone_arc_profile(),
        }
    }

    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    #[cfg(not(feature = "test-adapters"))]
    #[must_use]
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared),
            profile: shared,
        }
    }
}

fn yf_range(range: HistoryRange) -> Range {
    match range {
        HistoryRange::D1 => Range::D1,
        HistoryRange::M1 => Range::M1,
        HistoryRange::M6 => Range::M6,
        HistoryRange::Y1 => Range::Y1,
        HistoryRange::Y5 => Range::Y5,
        _ => Range::Max,
    }
}

fn money(m: &paft::money::Money) -> Option<f64> {
    m.amount().to_f64()
}

/// Lay candles out as a two-level table: `(field, symbol)` columns.
///
/// # Errors
/// Only on internal length mismatches, which cannot occur for well-formed responses.
pub fn to_raw_series(symbol: &str, resp: &yf::HistoryResponse) -> Result<RawSeries, PredistockError> {
    let candles = &resp.candles;
    let index = candles.iter().map(|c| c.ts).collect();
    let label = |field: &str| ColumnLabel::new([field, symbol]);
    RawSeries::new(index)
        .with_column(label("Open"), candles.iter().map(|c| money(&c.open)).collect())?
        .with_column(label("High"), candles.iter().map(|c| money(&c.high)).collect())?
        .with_column(label("Low"), candles.iter().map(|c| money(&c.low)).collect())?
        .with_column(label("Close"), candles.iter().map(|c| money(&c.close)).collect())?
        .with_column(
            label("Volume"),
            candles
                .iter()
                .map(|c| c.volume.and_then(|v| v.to_f64()))
                .collect(),
        )
}

// Yahoo profiles carry no market capitalization, so it is always `None` here.
fn to_company_profile(p: yf::profile::Profile) -> CompanyProfile {
    match p {
        yf::profile::Profile::Company(c) => CompanyProfile {
            name: Some(c.name),
            sector: c.sector,
            market_cap: None,
            description: c.summary,
        },
        yf::profile::Profile::Fund(f) => CompanyProfile {
            name: Some(f.name),
            sector: None,
            market_cap: None,
            description: None,
        },
    }
}

#[async_trait]
impl MarketDataGateway for YfGateway {
    fn name(&self) -> &'static str {
        CONNECTOR
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "predistock_yfinance::profile", skip(self), fields(symbol = %symbol))
    )]
    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, PredistockError> {
        let what = format!("profile for {symbol}");
        let profile = self
            .profile
            .load(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        Ok(to_company_profile(profile))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "predistock_yfinance::history", skip(self), fields(symbol = %symbol, range = ?range))
    )]
    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<RawSeries, PredistockError> {
        let req = yf::core::services::HistoryRequest {
            range: Some(yf_range(range)),
            period: None,
            interval: Interval::D1,
            include_prepost: false,
            include_actions: false,
            auto_adjust: true,
            keepna: false,
        };
        let what = format!("history for {symbol}");
        let resp = self
            .history
            .fetch_full(symbol, req)
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        to_raw_series(symbol, &resp)
    }
}
