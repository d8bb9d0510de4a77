//! predistock-core
//!
//! Collaborator traits and the authored logic of the PrediStock dashboard.
//!
//! - `connector`: the `MarketDataGateway` and `ForecastEngine` traits.
//! - `resolver`: company name / ticker alias resolution.
//! - `normalize`: raw provider tables to ascending, complete daily series.
//! - `recommendation`: first-versus-last close verdict.
//! - `forecast`: engine input, horizon, and confidence handling.
//!
//! Collaborators are async and assume a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Gateway and forecast engine traits.
pub mod connector;
/// Forecast request helpers.
pub mod forecast;
/// Middleware trait implemented by gateway wrappers.
pub mod middleware;
/// Raw table normalization.
pub mod normalize;
/// Buy/wait evaluation.
pub mod recommendation;
pub mod resolver;

pub use connector::{ForecastEngine, MarketDataGateway};
pub use forecast::{
    DAYS_PER_YEAR, apply_confidence, build_forecast_input, future_dates, horizon_days,
};
pub use middleware::Middleware;
pub use normalize::{NormalizeError, normalize};
pub use recommendation::evaluate;
pub use resolver::{TICKER_ALIASES, lookup_alias, resolve};

pub use predistock_types::*;
