mod helpers;

use std::sync::atomic::Ordering;

use predistock::{
    CacheConfig, ChartKind, DashboardError, DashboardRequest, PredistockError, Recommendation,
};
use predistock_mock::MockForecastEngine;

use crate::helpers::{harness, harness_with};

#[tokio::test]
async fn reliance_end_to_end() {
    let h = harness();
    let report = h
        .dashboard
        .run(&DashboardRequest::new("  reliance "))
        .await
        .unwrap();

    assert_eq!(report.symbol, "RELIANCE.NS");
    assert!(report.bars > 0 && report.bars <= 500);
    assert_eq!(report.horizon_days, 365);
    assert_eq!(h.engine.calls(), 1);
    assert_eq!(h.engine.last_horizon(), 365);

    let bars = report.bars;
    assert!(report.raw_tail.is_none());
    assert_eq!(report.forecast_tail.len(), 5);
    // Forecast covers the history plus one point per horizon day.
    let predicted = report.forecast_chart["data"][1]["x"].as_array().unwrap().len();
    assert_eq!(predicted, bars + 365);

    assert!(report.recommendation.is_growth());
    assert_eq!(
        report.buy_url.as_deref(),
        Some("https://kite.zerodha.com/?symbol=NSE:RELIANCE")
    );
    assert!(report.latest.is_some());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn recommendation_sign_follows_first_and_last_close() {
    let h = harness();
    let tcs = h.dashboard.run(&DashboardRequest::new("TCS")).await.unwrap();
    match tcs.recommendation {
        Recommendation::Growth { amount, percent } => {
            assert!((amount - 2.0).abs() < 1e-9);
            assert!((percent - 20.0).abs() < 1e-9);
        }
        other => panic!("expected growth, got {other:?}"),
    }

    let infy = h.dashboard.run(&DashboardRequest::new("infosys")).await.unwrap();
    assert!(matches!(infy.recommendation, Recommendation::Decline { .. }));
    assert!(infy.buy_url.is_none());

    let sbi = h.dashboard.run(&DashboardRequest::new("sbi")).await.unwrap();
    assert_eq!(sbi.recommendation, Recommendation::Flat);
    assert!(sbi.buy_url.is_none());
}

#[tokio::test]
async fn empty_query_stops_before_any_call() {
    let h = harness();
    let err = h.dashboard.run(&DashboardRequest::new("   ")).await.unwrap_err();
    assert_eq!(err, DashboardError::EmptyQuery);
    assert_eq!(
        err.user_message(),
        "Please enter a company name or stock symbol."
    );
    assert_eq!(h.calls.profile.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn out_of_range_years_is_rejected() {
    let h = harness();
    for years in [0u8, 5] {
        let err = h
            .dashboard
            .run(&DashboardRequest::new("TCS").years(years))
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRequest(_)), "{err:?}");
    }
    assert_eq!(h.engine.calls(), 0);
}

#[tokio::test]
async fn unknown_symbol_is_not_found() {
    let h = harness();
    let err = h
        .dashboard
        .run(&DashboardRequest::new("nosuchco"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DashboardError::SymbolNotFound {
            symbol: "NOSUCHCO".to_string()
        }
    );
    assert!(err.is_user_error());
    assert!(err.user_message().starts_with("Error: "));
}

#[tokio::test]
async fn connector_failure_is_network() {
    let h = harness();
    let err = h.dashboard.run(&DashboardRequest::new("fail")).await.unwrap_err();
    assert!(
        matches!(err, DashboardError::Network(PredistockError::Connector { .. })),
        "{err:?}"
    );
    assert!(!err.is_user_error());
}

#[tokio::test]
async fn empty_series_short_circuits_forecast() {
    let h = harness();
    let err = h
        .dashboard
        .run(&DashboardRequest::new("EMPTY.NS"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DashboardError::EmptySeries {
            symbol: "EMPTY.NS".to_string()
        }
    );
    assert_eq!(err.user_message(), "No data found.");
    assert_eq!(h.engine.calls(), 0);
}

#[tokio::test]
async fn forecast_failure_is_reported() {
    let h = harness_with(MockForecastEngine::failing(), CacheConfig::default());
    let err = h.dashboard.run(&DashboardRequest::new("TCS")).await.unwrap_err();
    assert!(
        matches!(err, DashboardError::Forecast(PredistockError::Forecast { .. })),
        "{err:?}"
    );
    assert!(err.user_message().contains("forced failure"));
}

#[tokio::test]
async fn failed_recent_price_is_a_warning() {
    let h = harness();
    let report = h
        .dashboard
        .run(&DashboardRequest::new("stale.ns"))
        .await
        .unwrap();
    assert!(report.latest.is_none());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.bars, 3);
}

#[tokio::test]
async fn messy_history_is_normalized() {
    let h = harness();
    let report = h
        .dashboard
        .run(&DashboardRequest::new("hdfc bank").show_raw(true))
        .await
        .unwrap();
    let closes: Vec<f64> = report
        .raw_tail
        .unwrap()
        .iter()
        .map(|b| b.close)
        .collect();
    assert_eq!(closes, [1490.0, 1510.0, 1525.0]);
}

#[tokio::test]
async fn raw_tail_and_chart_follow_request() {
    let h = harness();
    let req = DashboardRequest::new("icici")
        .years(4)
        .chart(ChartKind::Candlestick)
        .show_raw(true);
    let report = h.dashboard.run(&req).await.unwrap();

    assert_eq!(report.horizon_days, 1460);
    assert_eq!(report.raw_tail.as_ref().map(Vec::len), Some(5));
    let tail = report.raw_tail.unwrap();
    assert!(tail.windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(report.price_chart["data"][0]["type"], "candlestick");
    assert_eq!(
        predistock::chart::trace_names(&report.components_chart),
        ["trend", "weekly", "yearly"]
    );
    // Sparse metadata falls back to placeholders.
    assert_eq!(report.profile.display_name(&report.symbol), "ICICIBANK.NS");
    assert_eq!(report.profile.sector_or_na(), "N/A");
}

#[tokio::test]
async fn confidence_off_collapses_band() {
    let h = harness();
    let report = h
        .dashboard
        .run(&DashboardRequest::new("reliance").show_confidence(false))
        .await
        .unwrap();
    assert!(
        report
            .forecast_tail
            .iter()
            .all(|p| p.lower == p.predicted && p.upper == p.predicted)
    );
    assert_eq!(report.forecast_chart["data"][3]["fill"], "tonexty");

    let banded = h
        .dashboard
        .run(&DashboardRequest::new("reliance").show_confidence(true))
        .await
        .unwrap();
    assert!(banded.forecast_tail.iter().any(|p| p.upper > p.lower));
}
