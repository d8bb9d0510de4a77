use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use predistock::{Dashboard, DashboardReport};
use predistock_mock::{MockForecastEngine, MockGateway};
use predistock_web::{AppState, router};
use tower::ServiceExt;

fn app() -> Router {
    let dashboard = Dashboard::builder()
        .with_gateway(Arc::new(MockGateway::new()))
        .with_engine(Arc::new(MockForecastEngine::new()))
        .build()
        .unwrap();
    router(AppState::new(dashboard).unwrap())
}

async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let resp = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _, body) = get("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn blank_page_prompts_for_a_symbol() {
    let (status, _, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Stock Forecast System</title>"));
    assert!(body.contains("PrediStock"));
    assert!(body.contains("predistocks.netlify.app"));
    assert!(body.contains("Please enter a company name or stock symbol."));
    assert!(!body.contains("Plotly.newPlot"));
}

#[tokio::test]
async fn growth_page_offers_buy_button() {
    let (status, _, body) = get("/?q=tcs&years=2&chart=candlestick&raw=on&confidence=on").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tata Consultancy Services Limited"));
    assert!(body.contains("Market Cap:</strong> ₹ 14,800,000,000,000"));
    assert!(body.contains("<h2>Raw Data</h2>"));
    assert!(body.contains("The stock shows growth of ₹ 2.00 (20.00%). Consider investment."));
    // Attribute values are HTML-escaped, slashes included.
    assert!(body.contains("kite.zerodha.com&#x2f;?symbol=NSE:TCS"));
    assert!(body.contains(r#"target="_blank" rel="noopener">Buy TCS.NS</a>"#));
    assert!(body.contains(r#"<option value="candlestick" selected>"#));
    assert!(body.contains("Plotly.newPlot"));
}

#[tokio::test]
async fn decline_page_has_no_buy_button() {
    let (_, _, body) = get("/?q=INFY").await;
    assert!(body.contains("Stock declined ₹ 2.00 (20.00%). Wait for recovery."));
    assert!(!body.contains("Buy INFY.NS"));
    assert!(!body.contains("<h2>Raw Data</h2>"));
}

#[tokio::test]
async fn page_shows_pipeline_errors() {
    let (status, _, body) = get("/?q=EMPTY.NS").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No data found."));

    let (_, _, body) = get("/?q=nosuch").await;
    assert!(body.contains("Error: symbol not found: NOSUCH"));
}

#[tokio::test]
async fn page_shows_bad_years_in_banner() {
    for uri in ["/?q=tcs&years=abc", "/?q=tcs&years=300"] {
        let (status, _, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("Error: invalid request: years must be a whole number"), "{uri}");
        assert!(body.contains(r#"value="1""#), "{uri}");
    }
}

#[tokio::test]
async fn page_escapes_user_input() {
    let (_, _, body) = get("/?q=%3Cscript%3Ex%3C%2Fscript%3E").await;
    assert!(!body.contains("<script>x</script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn api_returns_report_json() {
    let (status, _, body) = get("/api/dashboard?q=reliance&confidence=true").await;
    assert_eq!(status, StatusCode::OK);
    let report: DashboardReport = serde_json::from_str(&body).unwrap();
    assert_eq!(report.symbol, "RELIANCE.NS");
    assert_eq!(report.horizon_days, 365);
    assert!(report.buy_url.is_some());
}

#[tokio::test]
async fn api_maps_errors_to_status() {
    let (status, _, body) = get("/api/dashboard?q=nosuch").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("symbol not found"));

    let (status, _, _) = get("/api/dashboard?q=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = get("/api/dashboard?q=tcs&years=7").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, body) = get("/api/dashboard?q=tcs&years=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("years must be a whole number"));

    let (status, _, _) = get("/api/dashboard?q=tcs&chart=pie").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = get("/api/dashboard?q=fail").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn buy_redirects_to_brokerage() {
    let (status, headers, _) = get("/buy/RELIANCE.NS").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers[header::LOCATION],
        "https://kite.zerodha.com/?symbol=NSE:RELIANCE"
    );

    let (_, headers, _) = get("/buy/sbi").await;
    assert_eq!(
        headers[header::LOCATION],
        "https://kite.zerodha.com/?symbol=NSE:SBIN"
    );
}
