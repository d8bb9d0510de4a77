use std::sync::{Arc, atomic::Ordering};

use predistock_core::{CacheConfig, HistoryRange, MarketDataGateway};
use predistock_middleware::GatewayBuilder;
use predistock_mock::MockGateway;

#[tokio::test]
async fn second_history_call_hits_cache() {
    let mock = MockGateway::new();
    let calls = mock.calls();
    let wrapped = GatewayBuilder::new(Arc::new(mock))
        .with_cache(&CacheConfig::default())
        .build();

    let first = wrapped.history("TCS.NS", HistoryRange::Max).await.unwrap();
    let second = wrapped.history("TCS.NS", HistoryRange::Max).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        calls.history.load(Ordering::SeqCst),
        1,
        "second call should be cached"
    );
}

#[tokio::test]
async fn wrapper_keeps_inner_identity() {
    let wrapped = GatewayBuilder::new(Arc::new(MockGateway::new()))
        .with_cache(&CacheConfig::default())
        .build();
    assert_eq!(wrapped.name(), MockGateway::NAME);
    assert_eq!(wrapped.vendor(), "Mock");
}

#[tokio::test]
async fn describe_lists_cache_outermost() {
    let cfg = CacheConfig {
        max_entries: 8,
        ttl_ms: Some(1_000),
    };
    let b = GatewayBuilder::new(Arc::new(MockGateway::new())).with_cache(&cfg);
    let layers = b.describe();
    let names: Vec<_> = layers.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["CachingMiddleware", "RawGateway"]);
    assert_eq!(layers[0].1["max_entries"], 8);
    assert_eq!(layers[0].1["ttl_ms"], 1_000);
    assert_eq!(layers[1].1["name"], MockGateway::NAME);

    let b = b.with_cache(&cfg).without_cache();
    assert_eq!(b.describe().len(), 1);
}
