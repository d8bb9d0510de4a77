use predistock_core::PredistockError;
use thiserror::Error;

/// Why a dashboard run stopped, classified by pipeline stage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DashboardError {
    /// The query was empty after trimming.
    #[error("empty query")]
    EmptyQuery,

    /// The gateway does not know the resolved symbol.
    #[error("symbol not found: {symbol}")]
    SymbolNotFound {
        /// Symbol the query resolved to.
        symbol: String,
    },

    /// No complete price rows survived normalization.
    #[error("no price data for {symbol}")]
    EmptySeries {
        /// Symbol the query resolved to.
        symbol: String,
    },

    /// Profile or history retrieval failed.
    #[error(transparent)]
    Network(PredistockError),

    /// The forecast engine could not fit or predict.
    #[error(transparent)]
    Forecast(PredistockError),

    /// The request settings are out of range.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl DashboardError {
    /// The single line shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => "Please enter a company name or stock symbol.".to_string(),
            Self::EmptySeries { .. } => "No data found.".to_string(),
            other => format!("Error: {other}"),
        }
    }

    /// Whether the failure is attributable to the user's input rather than a collaborator.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyQuery | Self::SymbolNotFound { .. } | Self::InvalidRequest(_)
        )
    }
}

impl From<PredistockError> for DashboardError {
    fn from(e: PredistockError) -> Self {
        match e {
            PredistockError::InvalidArg(msg) => Self::InvalidRequest(msg),
            PredistockError::Forecast { .. } => Self::Forecast(e),
            other => Self::Network(other),
        }
    }
}
