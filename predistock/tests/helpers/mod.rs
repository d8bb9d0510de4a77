use std::sync::Arc;

use predistock::{CacheConfig, Dashboard};
use predistock_mock::{CallCounts, MockForecastEngine, MockGateway};

/// A dashboard over the fixture gateway plus handles on both collaborators.
pub struct Harness {
    pub dashboard: Dashboard,
    pub calls: Arc<CallCounts>,
    pub engine: Arc<MockForecastEngine>,
}

pub fn harness_with(engine: MockForecastEngine, cache: CacheConfig) -> Harness {
    let gateway = MockGateway::new();
    let calls = gateway.calls();
    let engine = Arc::new(engine);
    let dashboard = Dashboard::builder()
        .with_gateway(Arc::new(gateway))
        .with_engine(engine.clone())
        .cache(cache)
        .build()
        .unwrap();
    Harness {
        dashboard,
        calls,
        engine,
    }
}

pub fn harness() -> Harness {
    harness_with(MockForecastEngine::new(), CacheConfig::default())
}
