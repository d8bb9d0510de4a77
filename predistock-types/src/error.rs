use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the PrediStock collaborators.
///
/// Gateways and forecast engines report failures through this type; the
/// dashboard pipeline classifies it further into per-stage errors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PredistockError {
    /// The requested capability is not implemented by the target collaborator.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "profile/market-cap").
        capability: String,
    },

    /// Issues with the returned or expected data (missing columns, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A market data connector failed (network, HTTP status, decoding).
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "profile for TCS.NS".
        what: String,
    },

    /// The forecast engine could not fit or predict.
    #[error("{engine} forecast failed: {msg}")]
    Forecast {
        /// Engine name that failed.
        engine: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl PredistockError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Forecast` error with the engine name and message.
    pub fn forecast(engine: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Forecast {
            engine: engine.into(),
            msg: msg.into(),
        }
    }

    /// Returns true for the benign not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and not-found conditions are expected outcomes of a
    /// lookup; everything else indicates a real failure.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }
}
