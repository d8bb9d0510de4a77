use std::sync::Arc;

use clap::Parser;
use predistock::{Dashboard, ForecastEngine, MarketDataGateway};
use predistock_mock::{MockForecastEngine, MockGateway};
use predistock_prophet::ProphetEngine;
use predistock_web::cli::Args;
use predistock_web::{AppState, router};
use predistock_yfinance::YfGateway;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,predistock=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_target(false)
        .try_init();

    let args = Args::parse();

    let gateway: Arc<dyn MarketDataGateway>;
    let engine: Arc<dyn ForecastEngine>;
    if args.mock {
        tracing::warn!("serving fixture data; no network access");
        gateway = Arc::new(MockGateway::new());
        engine = Arc::new(MockForecastEngine::new());
    } else {
        gateway = Arc::new(YfGateway::try_new_default()?);
        engine = Arc::new(ProphetEngine);
    }

    let dashboard = Dashboard::builder()
        .with_gateway(gateway)
        .with_engine(engine)
        .brokerage_base_url(args.brokerage_url.clone())
        .cache(args.cache_config())
        .build()?;
    let app = router(AppState::new(dashboard)?);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(addr = %args.bind, cache = ?args.cache_config(), "PrediStock listening");
    axum::serve(listener, app).await?;
    Ok(())
}
