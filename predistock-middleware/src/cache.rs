use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use predistock_core::{
    CacheConfig, CompanyProfile, HistoryRange, MAX_CACHE_TTL_MS, MarketDataGateway, Middleware,
    PredistockError, PriceBar, RawSeries,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HistoryKey {
    symbol: String,
    range: HistoryRange,
}

#[async_trait]
trait CacheStore<K, V>: Send + Sync {
    async fn get(&self, key: &K) -> Option<V>;
    async fn put(&self, key: K, value: V);
}

struct MokaStore<K, V> {
    inner: Cache<K, V>,
}

impl<K, V> MokaStore<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn new(capacity: u64, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::<K, V>::builder().max_capacity(capacity.max(1));
        if let Some(ttl) = ttl {
            // moka panics past 1000 years.
            builder = builder.time_to_live(ttl.min(Duration::from_millis(MAX_CACHE_TTL_MS)));
        }
        Self {
            inner: builder.build(),
        }
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for MokaStore<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).await
    }

    async fn put(&self, key: K, value: V) {
        self.inner.insert(key, value).await;
    }
}

/// Declarative wrapper that applies history caching when building a gateway stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Create the middleware from a cache configuration.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn MarketDataGateway>) -> Arc<dyn MarketDataGateway> {
        let Self { cfg } = *self;
        Arc::new(CachingGateway::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        CachingGateway::NAME
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_entries": self.cfg.max_entries,
            "ttl_ms": self.cfg.ttl_ms,
        })
    }
}

/// Gateway wrapper that memoizes successful history fetches per `(symbol, range)`.
///
/// Profiles and the one-day recent price pass straight through; errors are
/// never cached.
pub struct CachingGateway {
    inner: Arc<dyn MarketDataGateway>,
    history: Option<Arc<dyn CacheStore<HistoryKey, Arc<RawSeries>>>>,
}

impl CachingGateway {
    /// Middleware name reported by the builder.
    pub const NAME: &'static str = "CachingMiddleware";

    /// Wrap `inner`; a disabled configuration yields a pass-through wrapper.
    #[must_use]
    pub fn new(inner: Arc<dyn MarketDataGateway>, cfg: &CacheConfig) -> Self {
        let history: Option<Arc<dyn CacheStore<HistoryKey, Arc<RawSeries>>>> =
            if cfg.is_enabled() {
                Some(Arc::new(MokaStore::new(cfg.max_entries, cfg.ttl())))
            } else {
                None
            };
        Self { inner, history }
    }
}

#[async_trait]
impl MarketDataGateway for CachingGateway {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, PredistockError> {
        self.inner.profile(symbol).await
    }

    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<RawSeries, PredistockError> {
        if let Some(store) = &self.history {
            let key = HistoryKey {
                symbol: symbol.to_string(),
                range,
            };
            if let Some(v) = store.get(&key).await {
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol, ?range, "history cache hit");
                return Ok((*v).clone());
            }
            let value = self.inner.history(symbol, range).await?;
            store.put(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner.history(symbol, range).await
    }

    async fn recent_price(&self, symbol: &str) -> Result<Option<PriceBar>, PredistockError> {
        self.inner.recent_price(symbol).await
    }
}
