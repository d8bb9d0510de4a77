use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use predistock::{
    ChartKind, Dashboard, DashboardError, DashboardReport, DashboardRequest, MIN_YEARS,
    brokerage_url, resolve,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::WebError;
use crate::page::{PageView, Pages, ReportView};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard>,
    pages: Arc<Pages>,
}

impl AppState {
    /// Wrap a built dashboard and load the page templates.
    ///
    /// # Errors
    /// Returns the template error if the bundled templates fail to compile.
    pub fn new(dashboard: Dashboard) -> Result<Self, minijinja::Error> {
        Ok(Self {
            dashboard: Arc::new(dashboard),
            pages: Arc::new(Pages::new()?),
        })
    }
}

/// Sidebar settings as sent by the page form or an API client.
///
/// Checkboxes follow HTML form semantics: present (`on`, `true`, `1`,
/// `yes`) means checked, absent means unchecked.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub q: Option<String>,
    pub years: Option<String>,
    pub chart: Option<String>,
    pub raw: Option<String>,
    pub confidence: Option<String>,
}

fn flag(name: &str, value: Option<&str>) -> Result<bool, DashboardError> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "off" | "false" | "0" | "no") => Ok(false),
        Some("on" | "true" | "1" | "yes") => Ok(true),
        Some(other) => Err(DashboardError::InvalidRequest(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}

fn years(value: Option<&str>) -> Result<u8, DashboardError> {
    match value.map(str::trim) {
        None | Some("") => Ok(MIN_YEARS),
        Some(v) => v.parse::<u8>().map_err(|_| {
            DashboardError::InvalidRequest(format!("years must be a whole number, got '{v}'"))
        }),
    }
}

impl DashboardParams {
    /// The dashboard request these parameters describe.
    ///
    /// # Errors
    /// `InvalidRequest` for a non-numeric `years`, an unknown chart kind, or
    /// a non-boolean flag.
    pub fn to_request(&self) -> Result<DashboardRequest, DashboardError> {
        let chart = match self.chart.as_deref() {
            None | Some("") => ChartKind::default(),
            Some(s) => s
                .parse::<ChartKind>()
                .map_err(|e| DashboardError::InvalidRequest(e.to_string()))?,
        };
        Ok(DashboardRequest::new(self.q.clone().unwrap_or_default())
            .years(years(self.years.as_deref())?)
            .chart(chart)
            .show_raw(flag("raw", self.raw.as_deref())?)
            .show_confidence(flag("confidence", self.confidence.as_deref())?))
    }
}

/// All routes with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/dashboard", get(api_dashboard))
        .route("/buy/:symbol", get(buy))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Html<String>, WebError> {
    let req = params.to_request();
    let mut view = match &req {
        Ok(r) => PageView::new(&r.query, r.years, r.chart, r.show_raw, r.show_confidence),
        Err(_) => PageView::new(
            params.q.as_deref().unwrap_or_default(),
            years(params.years.as_deref()).unwrap_or(MIN_YEARS),
            ChartKind::default(),
            false,
            false,
        ),
    };
    match req {
        Ok(r) => match state.dashboard.run(&r).await {
            Ok(report) => {
                view.report = Some(ReportView::new(&report, state.dashboard.config()));
            }
            Err(e @ DashboardError::EmptyQuery) => view.warning = Some(e.user_message()),
            Err(e) => view.error = Some(e.user_message()),
        },
        Err(e) => view.error = Some(e.user_message()),
    }
    Ok(Html(state.pages.index(&view)?))
}

async fn api_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardReport>, WebError> {
    let req = params.to_request()?;
    Ok(Json(state.dashboard.run(&req).await?))
}

async fn buy(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Redirect, WebError> {
    let symbol = resolve(&symbol);
    let url = brokerage_url(&state.dashboard.config().brokerage_base_url, &symbol)?;
    tracing::info!(symbol = %symbol, url = %url, "brokerage redirect");
    Ok(Redirect::to(&url))
}

async fn healthz() -> &'static str {
    "ok"
}
