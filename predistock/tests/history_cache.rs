mod helpers;

use std::sync::atomic::Ordering;
use std::time::Duration;

use predistock::{CacheConfig, DashboardRequest};
use predistock_mock::MockForecastEngine;

use crate::helpers::{harness, harness_with};

#[tokio::test]
async fn second_run_reuses_history() {
    let h = harness();
    let req = DashboardRequest::new("TCS");
    h.dashboard.run(&req).await.unwrap();
    h.dashboard.run(&req.clone().years(3)).await.unwrap();

    assert_eq!(h.calls.history.load(Ordering::SeqCst), 1);
    // Profile and the recent price are not memoized.
    assert_eq!(h.calls.profile.load(Ordering::SeqCst), 2);
    assert_eq!(h.calls.recent.load(Ordering::SeqCst), 2);
    assert_eq!(h.engine.calls(), 2);
}

#[tokio::test]
async fn aliases_share_one_entry() {
    let h = harness();
    h.dashboard.run(&DashboardRequest::new("infy")).await.unwrap();
    h.dashboard.run(&DashboardRequest::new("Infosys")).await.unwrap();
    assert_eq!(h.calls.history.load(Ordering::SeqCst), 1);

    h.dashboard.run(&DashboardRequest::new("tcs")).await.unwrap();
    assert_eq!(h.calls.history.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let h = harness_with(
        MockForecastEngine::new(),
        CacheConfig {
            ttl_ms: Some(50),
            ..CacheConfig::default()
        },
    );
    let req = DashboardRequest::new("TCS");
    h.dashboard.run(&req).await.unwrap();
    h.dashboard.run(&req).await.unwrap();
    assert_eq!(h.calls.history.load(Ordering::SeqCst), 1);

    tokio::time::sleep(Duration::from_millis(120)).await;
    h.dashboard.run(&req).await.unwrap();
    assert_eq!(h.calls.history.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn zero_ttl_disables_cache() {
    let h = harness_with(
        MockForecastEngine::new(),
        CacheConfig {
            ttl_ms: Some(0),
            ..CacheConfig::default()
        },
    );
    let req = DashboardRequest::new("TCS");
    h.dashboard.run(&req).await.unwrap();
    h.dashboard.run(&req).await.unwrap();
    assert_eq!(h.calls.history.load(Ordering::SeqCst), 2);
}
