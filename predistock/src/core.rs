use std::sync::Arc;

use predistock_core::{
    CacheConfig, DashboardConfig, ForecastEngine, MarketDataGateway, PredistockError,
};
use predistock_middleware::GatewayBuilder;

/// The dashboard pipeline with its collaborators.
///
/// Cheap to share behind an `Arc`; the history cache inside the gateway is
/// process-wide for every clone of that `Arc`.
pub struct Dashboard {
    pub(crate) gateway: Arc<dyn MarketDataGateway>,
    pub(crate) engine: Arc<dyn ForecastEngine>,
    pub(crate) cfg: DashboardConfig,
}

/// Builder for constructing a [`Dashboard`] with its gateway, engine, and settings.
pub struct DashboardBuilder {
    gateway: Option<Arc<dyn MarketDataGateway>>,
    engine: Option<Arc<dyn ForecastEngine>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with default settings and no collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gateway: None,
            engine: None,
            cfg: DashboardConfig::default(),
        }
    }

    /// Set the market data gateway.
    ///
    /// Pass the raw gateway; `build()` wraps it in the history cache.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn MarketDataGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Set the forecast engine.
    #[must_use]
    pub fn with_engine(mut self, engine: Arc<dyn ForecastEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the brokerage deep link base (default `https://kite.zerodha.com/`).
    #[must_use]
    pub fn brokerage_base_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.brokerage_base_url = url.into();
        self
    }

    /// Set the history cache policy.
    ///
    /// Behavior and trade-offs:
    /// - The default keeps up to 256 histories with no expiry; repeated
    ///   queries never hit the network again until evicted.
    /// - A TTL bounds staleness at the cost of periodic refetches.
    /// - `ttl_ms = Some(0)` disables caching.
    #[must_use]
    pub const fn cache(mut self, cache: CacheConfig) -> Self {
        self.cfg.cache = cache;
        self
    }

    /// Set how many description characters are shown before the ellipsis.
    #[must_use]
    pub const fn description_limit(mut self, chars: usize) -> Self {
        self.cfg.description_limit = chars;
        self
    }

    /// Set how many trailing rows the raw-data and forecast tables keep.
    #[must_use]
    pub const fn tail_len(mut self, rows: usize) -> Self {
        self.cfg.tail_len = rows;
        self
    }

    /// Build the `Dashboard`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the gateway or engine is missing, if the
    /// brokerage base URL does not parse, or if the cache TTL is out of range.
    pub fn build(self) -> Result<Dashboard, PredistockError> {
        let Some(raw) = self.gateway else {
            return Err(PredistockError::InvalidArg(
                "no market data gateway registered; add one via with_gateway(...)".to_string(),
            ));
        };
        let Some(engine) = self.engine else {
            return Err(PredistockError::InvalidArg(
                "no forecast engine registered; add one via with_engine(...)".to_string(),
            ));
        };
        url::Url::parse(&self.cfg.brokerage_base_url).map_err(|e| {
            PredistockError::InvalidArg(format!(
                "brokerage base url '{}': {e}",
                self.cfg.brokerage_base_url
            ))
        })?;
        self.cfg.cache.validate()?;

        let gateway = GatewayBuilder::new(raw).with_cache(&self.cfg.cache).build();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            gateway = gateway.name(),
            engine = engine.name(),
            cache = self.cfg.cache.is_enabled(),
            "dashboard built"
        );

        Ok(Dashboard {
            gateway,
            engine,
            cfg: self.cfg,
        })
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use predistock::{Dashboard, DashboardRequest};
    /// use predistock_prophet::ProphetEngine;
    /// use predistock_yfinance::YfGateway;
    ///
    /// let dashboard = Dashboard::builder()
    ///     .with_gateway(Arc::new(YfGateway::try_new_default()?))
    ///     .with_engine(Arc::new(ProphetEngine))
    ///     .build()?;
    /// let report = dashboard.run(&DashboardRequest::new("tcs").years(2)).await?;
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }

    /// The cache-wrapped gateway used by the pipeline.
    #[must_use]
    pub fn gateway(&self) -> &Arc<dyn MarketDataGateway> {
        &self.gateway
    }
}
