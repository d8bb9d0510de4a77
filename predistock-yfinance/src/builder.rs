use std::sync::Arc;

use predistock_core::{CacheConfig, MarketDataGateway, PredistockError};
use predistock_middleware::GatewayBuilder;

use crate::YfGateway;

/// Builder type alias specialized for the Yahoo gateway.
pub type YfGatewayBuilder = GatewayBuilder;

impl YfGateway {
    /// Returns an unconfigured builder around the default gateway.
    ///
    /// # Errors
    /// Returns `Connector` if the HTTP client cannot be constructed.
    pub fn builder() -> Result<YfGatewayBuilder, PredistockError> {
        let raw: Arc<dyn MarketDataGateway> = Arc::new(Self::try_new_default()?);
        Ok(GatewayBuilder::new(raw))
    }

    /// Returns a builder with the history cache installed.
    ///
    /// # Errors
    /// Returns `Connector` if the HTTP client cannot be constructed.
    pub fn cached(cfg: &CacheConfig) -> Result<YfGatewayBuilder, PredistockError> {
        Ok(Self::builder()?.with_cache(cfg))
    }
}
