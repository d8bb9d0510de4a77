use predistock_core::{
    DashboardReport, DashboardRequest, NormalizeError, PredistockError, PriceBar, PriceSeries,
    Recommendation, apply_confidence, build_forecast_input, evaluate, horizon_days, normalize,
    resolve,
};

use crate::broker::brokerage_url;
use crate::chart::{components_chart, forecast_chart, price_chart};
use crate::core::Dashboard;
use crate::error::DashboardError;

impl Dashboard {
    /// Run one dashboard request end to end.
    ///
    /// Stages run in order and the first failing stage ends the run; only the
    /// recent price lookup is allowed to fail, in which case the report carries
    /// a warning and no latest price.
    ///
    /// # Errors
    /// - `InvalidRequest` when the settings are out of range.
    /// - `EmptyQuery` when the query is blank.
    /// - `SymbolNotFound` when the gateway does not know the resolved symbol.
    /// - `Network` for any other profile or history failure.
    /// - `EmptySeries` when no complete price rows remain.
    /// - `Forecast` when the engine fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "predistock::dashboard::run",
            skip(self, req),
            fields(query = %req.query, years = req.years, chart = ?req.chart),
        )
    )]
    pub async fn run(&self, req: &DashboardRequest) -> Result<DashboardReport, DashboardError> {
        let out = self.run_stages(req).await;
        #[cfg(feature = "tracing")]
        if let Err(e) = &out {
            tracing::warn!(error = %e, "dashboard run failed");
        }
        out
    }

    async fn run_stages(&self, req: &DashboardRequest) -> Result<DashboardReport, DashboardError> {
        req.validate()?;
        if req.query.trim().is_empty() {
            return Err(DashboardError::EmptyQuery);
        }
        let symbol = resolve(&req.query);

        let profile = self
            .gateway
            .profile(&symbol)
            .await
            .map_err(|e| classify_lookup(&symbol, e))?;

        let mut warnings = Vec::new();
        let latest = self.latest_price(&symbol, &mut warnings).await;

        let series = self.price_series(&symbol).await?;
        let price_chart = price_chart(&series, req.chart);

        let horizon = horizon_days(req.years);
        let mut forecast = self
            .engine
            .forecast(build_forecast_input(&series), horizon)
            .await
            .map_err(DashboardError::Forecast)?;
        apply_confidence(&mut forecast, req.show_confidence);
        let forecast_chart = forecast_chart(&series, &forecast);
        let components_chart = components_chart(&forecast.components);

        let recommendation = evaluate(&series);
        let buy_url = match recommendation {
            Recommendation::Growth { .. } => {
                Some(brokerage_url(&self.cfg.brokerage_base_url, &symbol)?)
            }
            _ => None,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            symbol = %symbol,
            bars = series.len(),
            horizon_days = horizon,
            growth = recommendation.is_growth(),
            "dashboard report ready"
        );

        let tail = self.cfg.tail_len;
        Ok(DashboardReport {
            profile,
            latest,
            bars: series.len(),
            raw_tail: req.show_raw.then(|| series.tail(tail).to_vec()),
            price_chart,
            horizon_days: horizon,
            forecast_tail: forecast.tail(tail).to_vec(),
            forecast_chart,
            components_chart,
            recommendation,
            buy_url,
            warnings,
            symbol,
        })
    }

    async fn latest_price(
        &self,
        symbol: &str,
        warnings: &mut Vec<PredistockError>,
    ) -> Option<PriceBar> {
        match self.gateway.recent_price(symbol).await {
            Ok(bar) => bar,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(symbol = %symbol, error = %e, "recent price unavailable");
                warnings.push(e);
                None
            }
        }
    }

    async fn price_series(&self, symbol: &str) -> Result<PriceSeries, DashboardError> {
        let raw = self
            .gateway
            .history(symbol, self.cfg.history_range)
            .await
            .map_err(|e| classify_lookup(symbol, e))?;
        normalize(&raw).map_err(|e| match e {
            NormalizeError::EmptySeries => DashboardError::EmptySeries {
                symbol: symbol.to_string(),
            },
            other @ NormalizeError::MissingColumn(_) => DashboardError::Network(other.into()),
        })
    }
}

fn classify_lookup(symbol: &str, e: PredistockError) -> DashboardError {
    if e.is_not_found() {
        DashboardError::SymbolNotFound {
            symbol: symbol.to_string(),
        }
    } else {
        DashboardError::Network(e)
    }
}
