//! Plotly figure builders.
//!
//! Every function returns a `{"data": [...], "layout": {...}}` object that the
//! page hands to `Plotly.newPlot` unchanged. Dates serialize as `YYYY-MM-DD`.

use chrono::NaiveDate;
use predistock_core::{ChartKind, Forecast, ForecastComponents, PriceSeries};
use serde_json::{Map, Value, json};

/// Title of the historical price figure.
pub const PRICE_CHART_TITLE: &str = "Stock Price Chart";

/// Height in pixels of one subplot in the components figure.
const COMPONENT_ROW_HEIGHT: usize = 250;

/// Historical prices as two line traces (`Open`, `Close`) or one candlestick.
#[must_use]
pub fn price_chart(series: &PriceSeries, kind: ChartKind) -> Value {
    let bars = series.bars();
    let x: Vec<NaiveDate> = bars.iter().map(|b| b.date).collect();
    let data = match kind {
        ChartKind::Line => {
            let line = |name: &str, y: Vec<f64>| {
                json!({ "type": "scatter", "mode": "lines", "name": name, "x": x, "y": y })
            };
            vec![
                line("Open", bars.iter().map(|b| b.open).collect()),
                line("Close", bars.iter().map(|b| b.close).collect()),
            ]
        }
        ChartKind::Candlestick => vec![json!({
            "type": "candlestick",
            "name": "OHLC",
            "x": x,
            "open": bars.iter().map(|b| b.open).collect::<Vec<_>>(),
            "high": bars.iter().map(|b| b.high).collect::<Vec<_>>(),
            "low": bars.iter().map(|b| b.low).collect::<Vec<_>>(),
            "close": bars.iter().map(|b| b.close).collect::<Vec<_>>(),
        })],
    };
    json!({
        "data": data,
        "layout": {
            "title": { "text": PRICE_CHART_TITLE },
            "xaxis": { "rangeslider": { "visible": true } },
        },
    })
}

/// Observed closes, the predicted line, and the uncertainty band.
///
/// The band is two traces: `Lower` (invisible line) then `Upper` filled down
/// to it. With a collapsed band the fill has zero height.
#[must_use]
pub fn forecast_chart(series: &PriceSeries, forecast: &Forecast) -> Value {
    let obs_x: Vec<NaiveDate> = series.bars().iter().map(|b| b.date).collect();
    let obs_y: Vec<f64> = series.bars().iter().map(|b| b.close).collect();
    let x: Vec<NaiveDate> = forecast.points.iter().map(|p| p.date).collect();
    let predicted: Vec<f64> = forecast.points.iter().map(|p| p.predicted).collect();
    let lower: Vec<f64> = forecast.points.iter().map(|p| p.lower).collect();
    let upper: Vec<f64> = forecast.points.iter().map(|p| p.upper).collect();

    json!({
        "data": [
            {
                "type": "scatter", "mode": "markers", "name": "Actual",
                "x": obs_x, "y": obs_y,
                "marker": { "color": "black", "size": 3 },
            },
            {
                "type": "scatter", "mode": "lines", "name": "Predicted",
                "x": x, "y": predicted,
                "line": { "color": "#0072B2", "width": 2 },
            },
            {
                "type": "scatter", "mode": "lines", "name": "Lower",
                "x": x, "y": lower,
                "line": { "width": 0 }, "hoverinfo": "skip", "showlegend": false,
            },
            {
                "type": "scatter", "mode": "lines", "name": "Upper",
                "x": x, "y": upper,
                "line": { "width": 0 }, "fill": "tonexty",
                "fillcolor": "rgba(0, 114, 178, 0.2)", "showlegend": false,
            },
        ],
        "layout": {
            "title": { "text": "Forecast" },
            "xaxis": { "title": { "text": "Date" } },
            "yaxis": { "title": { "text": "Price" } },
        },
    })
}

/// One stacked subplot per component: trend first, then seasonalities by name.
#[must_use]
pub fn components_chart(components: &ForecastComponents) -> Value {
    let rows: Vec<(&str, &[f64])> = std::iter::once(("trend", components.trend.as_slice()))
        .chain(
            components
                .seasonal
                .iter()
                .map(|(name, v)| (name.as_str(), v.as_slice())),
        )
        .collect();

    let mut layout = Map::new();
    let mut data = Vec::with_capacity(rows.len());
    for (i, (name, values)) in rows.iter().enumerate() {
        // Plotly names the first axis pair `x`/`y`, then `x2`/`y2`, ...
        let suffix = if i == 0 { String::new() } else { (i + 1).to_string() };
        data.push(json!({
            "type": "scatter",
            "mode": "lines",
            "name": name,
            "x": components.dates,
            "y": values,
            "xaxis": format!("x{suffix}"),
            "yaxis": format!("y{suffix}"),
        }));
        layout.insert(
            format!("yaxis{suffix}"),
            json!({ "title": { "text": name } }),
        );
    }
    layout.insert(
        "grid".to_string(),
        json!({ "rows": rows.len(), "columns": 1, "pattern": "independent" }),
    );
    layout.insert("height".to_string(), json!(rows.len() * COMPONENT_ROW_HEIGHT));
    layout.insert("showlegend".to_string(), json!(false));

    json!({ "data": data, "layout": Value::Object(layout) })
}

/// Names of the traces in a figure, in drawing order.
#[must_use]
pub fn trace_names(figure: &Value) -> Vec<&str> {
    figure["data"]
        .as_array()
        .map(|traces| traces.iter().filter_map(|t| t["name"].as_str()).collect())
        .unwrap_or_default()
}
