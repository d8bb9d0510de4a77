//! PrediStock turns a company name or ticker into a one-page stock report.
//!
//! Overview
//! - Resolves free-text queries (`"tcs"`, `"state bank"`) to exchange-qualified
//!   symbols through a static alias table.
//! - Fetches company metadata, the latest bar, and the full daily history from
//!   a `MarketDataGateway`; history is memoized per symbol.
//! - Normalizes the history into an ascending, complete OHLC series.
//! - Fits a `ForecastEngine` on the closes for `years * 365` days and
//!   decomposes the result into trend and seasonalities.
//! - Evaluates a buy/wait verdict from the first and last close and, on
//!   growth, links to the brokerage.
//!
//! Key behaviors and trade-offs
//! - Stages run sequentially inside one request; the first failing stage ends
//!   the run with a typed [`DashboardError`]. Only the latest-price lookup is
//!   allowed to fail, surfacing as a warning on the report.
//! - The recommendation compares the whole history, not the forecast; it is a
//!   coarse signal by construction.
//! - Turning the confidence band off collapses it onto the prediction instead
//!   of removing it, so figures keep the same traces either way.
//! - Charts are Plotly figure JSON; rendering happens in the browser.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use predistock::{ChartKind, Dashboard, DashboardRequest};
//!
//! let dashboard = Dashboard::builder()
//!     .with_gateway(Arc::new(predistock_yfinance::YfGateway::try_new_default()?))
//!     .with_engine(Arc::new(predistock_prophet::ProphetEngine))
//!     .build()?;
//!
//! let req = DashboardRequest::new("Reliance")
//!     .years(2)
//!     .chart(ChartKind::Candlestick)
//!     .show_raw(true);
//! match dashboard.run(&req).await {
//!     Ok(report) => println!("{}", report.recommendation.message()),
//!     Err(e) => eprintln!("{}", e.user_message()),
//! }
//! ```
#![warn(missing_docs)]

/// Brokerage deep links.
pub mod broker;
/// Plotly figure builders.
pub mod chart;
pub(crate) mod core;
mod error;
mod pipeline;

pub use crate::broker::brokerage_url;
pub use crate::core::{Dashboard, DashboardBuilder};
pub use crate::error::DashboardError;

pub use predistock_core::{
    CacheConfig, ChartKind, CompanyProfile, DEFAULT_BROKERAGE_BASE_URL, DashboardConfig,
    DashboardReport, DashboardRequest, ForecastEngine, ForecastPoint, HistoryRange,
    MAX_CACHE_TTL_MS, MAX_YEARS, MIN_YEARS, MarketDataGateway, NOT_AVAILABLE, PredistockError, PriceBar, Recommendation,
    group_thousands, resolve,
};
