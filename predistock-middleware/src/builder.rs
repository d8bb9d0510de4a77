//! Builder for composing gateways with middleware layers.
//!
//! Layers are stored outermost-first (last added = outermost) and applied in
//! reverse during `build()`, so `builder.with_cache(..).layer(x)` yields
//! `x(Cache(Raw))`.

use std::sync::Arc;

use predistock_core::{CacheConfig, MarketDataGateway, Middleware};

use crate::cache::{CacheMiddleware, CachingGateway};

/// Generic middleware builder for composing a gateway with layered wrappers.
pub struct GatewayBuilder {
    raw: Arc<dyn MarketDataGateway>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl GatewayBuilder {
    /// Create a new builder from a raw, unwrapped gateway.
    #[must_use]
    pub fn new(raw: Arc<dyn MarketDataGateway>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the history cache.
    ///
    /// The cache sits at the outermost position so hits never reach other
    /// layers. A disabled configuration (`ttl_ms == Some(0)`) removes it.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CachingGateway::NAME);
        if cfg.is_enabled() {
            self.layers.insert(0, Box::new(CacheMiddleware::new(*cfg)));
        }
        self
    }

    /// Remove the history cache if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CachingGateway::NAME);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Names and configuration snapshots of the layers, outermost first,
    /// followed by the raw gateway.
    #[must_use]
    pub fn describe(&self) -> Vec<(String, serde_json::Value)> {
        let mut out: Vec<(String, serde_json::Value)> = self
            .layers
            .iter()
            .map(|l| (l.name().to_string(), l.config_json()))
            .collect();
        out.push((
            "RawGateway".to_string(),
            serde_json::json!({ "name": self.raw.name() }),
        ));
        out
    }

    /// Build the wrapped gateway, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn MarketDataGateway> {
        let mut acc: Arc<dyn MarketDataGateway> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
