//! PrediStock data transfer objects, configuration primitives, and the shared error type.
#![warn(missing_docs)]

mod config;
mod error;
mod forecast;
mod market;
mod recommendation;
mod reports;

pub use config::{
    CacheConfig, ChartKind, DEFAULT_BROKERAGE_BASE_URL, DashboardConfig, HistoryRange,
    MAX_CACHE_TTL_MS,
};
pub use error::PredistockError;
pub use forecast::{Forecast, ForecastComponents, ForecastInput, ForecastPoint};
pub use market::{
    ColumnLabel, CompanyProfile, NOT_AVAILABLE, PriceBar, PriceSeries, RawColumn, RawSeries,
};
pub use recommendation::{Recommendation, group_thousands};
pub use reports::{DashboardReport, DashboardRequest, MAX_YEARS, MIN_YEARS};
