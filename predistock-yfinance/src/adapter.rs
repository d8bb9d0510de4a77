#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use predistock_core::PredistockError;
use yf::core::HistoryService;
use yfinance_rs as yf;

/// Connector name used in errors.
pub const CONNECTOR: &str = "predistock-yfinance";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, PredistockError>;
}

/// Profile abstraction for company/fund metadata.
#[async_trait]
pub trait YfProfile: Send + Sync {
    /// Load a company/fund profile for `symbol`.
    async fn load(&self, symbol: &str) -> Result<yf::profile::Profile, PredistockError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

/// Browser user agent sent with every Yahoo request.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

impl RealAdapter {
    /// Build a `YfClient` with a cookie-enabled HTTP client and a browser user agent.
    ///
    /// # Errors
    /// Returns `Connector` if either client cannot be constructed.
    pub fn try_new_default() -> Result<Self, PredistockError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| PredistockError::connector(CONNECTOR, e.to_string()))?;
        Self::try_with_reqwest_client(http)
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// The client should enable a cookie store for the yfinance crumb flow.
    ///
    /// # Errors
    /// Returns `Connector` if the `YfClient` cannot be constructed.
    pub fn try_with_reqwest_client(http: reqwest::Client) -> Result<Self, PredistockError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PredistockError::connector(CONNECTOR, e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> PredistockError {
    match e {
        yf::YfError::NotFound { .. } => PredistockError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            PredistockError::connector(CONNECTOR, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => {
            PredistockError::connector(CONNECTOR, format!("server error {status}: {context}"))
        }
        yf::YfError::Status { status, .. } => {
            PredistockError::connector(CONNECTOR, format!("status {status}: {context}"))
        }
        other => PredistockError::connector(CONNECTOR, other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, PredistockError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl YfProfile for RealAdapter {
    async fn load(&self, symbol: &str) -> Result<yf::profile::Profile, PredistockError> {
        yf::profile::load_profile(&self.client, symbol)
            .await
            .map_err(|e| map_yf_err(&e, &format!("profile for {symbol}")))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, PredistockError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, PredistockError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, PredistockError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfProfile {
    /// Build a `YfProfile` from a single closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfProfile>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<yf::profile::Profile, PredistockError>,
    {
        struct FnProfile<F>(F);
        #[async_trait]
        impl<F> YfProfile for FnProfile<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<yf::profile::Profile, PredistockError>,
        {
            async fn load(&self, symbol: &str) -> Result<yf::profile::Profile, PredistockError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnProfile(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(PredistockError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YfProfile>`.
    fn clone_arc_profile(&self) -> Arc<dyn YfProfile> {
        <dyn YfProfile>::from_fn(|_| Err(PredistockError::unsupported("profile")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_profile(&self) -> Arc<dyn YfProfile> {
        Arc::new(self.clone()) as Arc<dyn YfProfile>
    }
}
