//! Middleware trait for wrapping `MarketDataGateway` implementations.

use std::sync::Arc;

use crate::connector::MarketDataGateway;

/// Trait implemented by gateway middleware layers.
///
/// A middleware consumes an inner gateway and returns a wrapped gateway that
/// augments its behavior (e.g., history caching).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner gateway and return the wrapped gateway.
    fn apply(self: Box<Self>, inner: Arc<dyn MarketDataGateway>) -> Arc<dyn MarketDataGateway>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
