//! predistock-prophet
//!
//! `ForecastEngine` implementation that fits a Prophet model through `augurs`
//! (Stan optimizer compiled to WebAssembly). Fitting is CPU-bound and runs on
//! Tokio's blocking pool.
#![warn(missing_docs)]

use std::collections::BTreeMap;

use async_trait::async_trait;
use augurs::prophet::wasmstan::WasmstanOptimizer;
use augurs::prophet::{PredictionData, Prophet, TrainingData};
use chrono::NaiveDate;
use predistock_core::{
    Forecast, ForecastComponents, ForecastEngine, ForecastInput, ForecastPoint, PredistockError,
    future_dates,
};

/// Prophet-backed forecast engine with default model options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProphetEngine;

impl ProphetEngine {
    /// Engine name used in errors.
    pub const NAME: &'static str = "predistock-prophet";

    /// Create the engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn err(msg: impl Into<String>) -> PredistockError {
    PredistockError::forecast(ProphetEngine::NAME, msg)
}

/// Midnight UTC of `date` as Unix seconds.
fn to_ts(date: NaiveDate) -> Result<i64, PredistockError> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .ok_or_else(|| err(format!("invalid date {date}")))
}

/// Use the band when the model produced one of the right length, else the point.
fn bound(band: Option<Vec<f64>>, point: &[f64]) -> Vec<f64> {
    band.filter(|b| b.len() == point.len())
        .unwrap_or_else(|| point.to_vec())
}

fn fit_and_predict(input: ForecastInput, horizon_days: u32) -> Result<Forecast, PredistockError> {
    if input.ds.len() < 2 {
        return Err(err("not enough data to forecast"));
    }
    if input.ds.len() != input.y.len() {
        return Err(err("dates and values differ in length"));
    }
    let Some(&last) = input.ds.last() else {
        return Err(err("no observations"));
    };

    let ds = input
        .ds
        .iter()
        .map(|d| to_ts(*d))
        .collect::<Result<Vec<_>, _>>()?;
    let data = TrainingData::new(ds, input.y)
        .map_err(|e| err(format!("create training data: {e}")))?;
    let mut prophet = Prophet::new(Default::default(), WasmstanOptimizer::new());
    prophet
        .fit(data, Default::default())
        .map_err(|e| err(format!("fit: {e}")))?;

    let mut dates = input.ds;
    dates.extend(future_dates(last, horizon_days));
    let ts = dates
        .iter()
        .map(|d| to_ts(*d))
        .collect::<Result<Vec<_>, _>>()?;
    let predictions = prophet
        .predict(Some(PredictionData::new(ts)))
        .map_err(|e| err(format!("predict: {e}")))?;

    let yhat = predictions.yhat;
    if yhat.point.len() != dates.len() {
        return Err(err(format!(
            "expected {} predictions, got {}",
            dates.len(),
            yhat.point.len()
        )));
    }
    let lower = bound(yhat.lower, &yhat.point);
    let upper = bound(yhat.upper, &yhat.point);
    let points = dates
        .iter()
        .zip(yhat.point)
        .zip(lower.into_iter().zip(upper))
        .map(|((&date, predicted), (lower, upper))| ForecastPoint {
            date,
            predicted,
            lower,
            upper,
        })
        .collect();

    let seasonal: BTreeMap<String, Vec<f64>> = predictions
        .seasonalities
        .into_iter()
        .map(|(name, feature)| (name, feature.point))
        .collect();

    Ok(Forecast {
        points,
        components: ForecastComponents {
            dates,
            trend: predictions.trend.point,
            seasonal,
        },
    })
}

#[async_trait]
impl ForecastEngine for ProphetEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "predistock_prophet::forecast",
            skip(self, input),
            fields(observations = input.ds.len())
        )
    )]
    async fn forecast(
        &self,
        input: ForecastInput,
        horizon_days: u32,
    ) -> Result<Forecast, PredistockError> {
        let forecast = tokio::task::spawn_blocking(move || fit_and_predict(input, horizon_days))
            .await
            .map_err(|e| err(format!("forecast task failed: {e}")))??;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            points = forecast.points.len(),
            components = forecast.components.seasonal.len() + 1,
            "prophet forecast ready"
        );
        Ok(forecast)
    }
}
