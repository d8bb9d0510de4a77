//! HTML rendering of dashboard reports.

use minijinja::Environment;
use predistock::{
    ChartKind, DashboardConfig, DashboardReport, ForecastPoint, PriceBar, Recommendation,
    group_thousands,
};
use serde::Serialize;

const INDEX: &str = "index.html";

/// Link behind the sidebar "Home" button.
pub const HOME_URL: &str = "https://predistocks.netlify.app/";

/// Compiled page templates.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Load the bundled templates.
    ///
    /// # Errors
    /// Returns the template syntax error, if any.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX, include_str!("../templates/index.html"))?;
        Ok(Self { env })
    }

    /// Render the dashboard page.
    ///
    /// # Errors
    /// Returns rendering errors from the template engine.
    pub fn index(&self, view: &PageView) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX)?.render(view)
    }
}

/// One option of the chart style selector.
#[derive(Debug, Serialize)]
pub struct ChartOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

/// Everything the page template reads.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub query: String,
    pub years: u8,
    pub charts: Vec<ChartOption>,
    pub show_raw: bool,
    pub show_confidence: bool,
    pub home_url: &'static str,
    /// Yellow banner, e.g. the empty-query prompt.
    pub warning: Option<String>,
    /// Red banner with the failure text.
    pub error: Option<String>,
    pub report: Option<ReportView>,
}

impl PageView {
    /// Page echoing the submitted settings, with nothing to show yet.
    #[must_use]
    pub fn new(query: &str, years: u8, chart: ChartKind, show_raw: bool, show_confidence: bool) -> Self {
        let charts = [ChartKind::Line, ChartKind::Candlestick]
            .into_iter()
            .map(|k| ChartOption {
                value: match k {
                    ChartKind::Line => "line",
                    ChartKind::Candlestick => "candlestick",
                },
                label: k.label(),
                selected: k == chart,
            })
            .collect();
        Self {
            query: query.to_string(),
            years,
            charts,
            show_raw,
            show_confidence,
            home_url: HOME_URL,
            warning: None,
            error: None,
            report: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BarRow {
    date: String,
    open: String,
    high: String,
    low: String,
    close: String,
}

impl From<&PriceBar> for BarRow {
    fn from(b: &PriceBar) -> Self {
        Self {
            date: b.date.to_string(),
            open: group_thousands(b.open, 2),
            high: group_thousands(b.high, 2),
            low: group_thousands(b.low, 2),
            close: group_thousands(b.close, 2),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ForecastRow {
    date: String,
    predicted: String,
    lower: String,
    upper: String,
}

impl From<&ForecastPoint> for ForecastRow {
    fn from(p: &ForecastPoint) -> Self {
        Self {
            date: p.date.to_string(),
            predicted: group_thousands(p.predicted, 2),
            lower: group_thousands(p.lower, 2),
            upper: group_thousands(p.upper, 2),
        }
    }
}

/// Report fields preformatted for display.
#[derive(Debug, Serialize)]
pub struct ReportView {
    symbol: String,
    name: String,
    sector: String,
    current_price: Option<String>,
    market_cap: Option<String>,
    description: String,
    raw_tail: Option<Vec<BarRow>>,
    forecast_tail: Vec<ForecastRow>,
    price_chart: serde_json::Value,
    forecast_chart: serde_json::Value,
    components_chart: serde_json::Value,
    verdict: &'static str,
    message: String,
    buy_url: Option<String>,
}

impl ReportView {
    #[must_use]
    pub fn new(report: &DashboardReport, cfg: &DashboardConfig) -> Self {
        let profile = &report.profile;
        Self {
            symbol: report.symbol.clone(),
            name: profile.display_name(&report.symbol).to_string(),
            sector: profile.sector_or_na().to_string(),
            current_price: report
                .latest
                .map(|b| format!("₹ {}", group_thousands(b.close, 2))),
            market_cap: profile
                .market_cap
                .filter(|c| *c > 0.0)
                .map(|c| format!("₹ {}", group_thousands(c, 0))),
            description: profile.description_excerpt(cfg.description_limit),
            raw_tail: report
                .raw_tail
                .as_ref()
                .map(|rows| rows.iter().map(BarRow::from).collect()),
            forecast_tail: report.forecast_tail.iter().map(ForecastRow::from).collect(),
            price_chart: report.price_chart.clone(),
            forecast_chart: report.forecast_chart.clone(),
            components_chart: report.components_chart.clone(),
            verdict: match report.recommendation {
                Recommendation::Growth { .. } => "growth",
                Recommendation::Decline { .. } => "decline",
                _ => "flat",
            },
            message: report.recommendation.message(),
            buy_url: report.buy_url.clone(),
        }
    }
}
