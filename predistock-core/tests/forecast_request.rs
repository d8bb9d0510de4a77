use chrono::NaiveDate;
use predistock_core::{
    Forecast, ForecastComponents, ForecastPoint, PriceBar, PriceSeries, apply_confidence,
    build_forecast_input, future_dates, horizon_days,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn horizon_is_literal_years_times_365() {
    assert_eq!(horizon_days(1), 365);
    assert_eq!(horizon_days(2), 730);
    assert_eq!(horizon_days(4), 1460);
}

#[test]
fn input_mirrors_dates_and_closes() {
    let bars = vec![
        PriceBar { date: d(2024, 1, 1), open: 1.0, high: 2.0, low: 0.5, close: 1.5 },
        PriceBar { date: d(2024, 1, 2), open: 1.5, high: 2.5, low: 1.0, close: 2.0 },
    ];
    let input = build_forecast_input(&PriceSeries::new(bars).unwrap());
    assert_eq!(input.ds, vec![d(2024, 1, 1), d(2024, 1, 2)]);
    assert_eq!(input.y, vec![1.5, 2.0]);
}

#[test]
fn future_dates_are_consecutive_days() {
    let dates = future_dates(d(2024, 2, 27), 4);
    assert_eq!(
        dates,
        vec![d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1), d(2024, 3, 2)]
    );
    assert!(future_dates(d(2024, 2, 27), 0).is_empty());
}

fn sample() -> Forecast {
    Forecast {
        points: vec![
            ForecastPoint { date: d(2024, 1, 1), predicted: 10.0, lower: 8.0, upper: 12.0 },
            ForecastPoint { date: d(2024, 1, 2), predicted: 11.0, lower: 9.5, upper: 13.0 },
        ],
        components: ForecastComponents::default(),
    }
}

#[test]
fn confidence_off_collapses_band() {
    let mut f = sample();
    apply_confidence(&mut f, false);
    for p in &f.points {
        assert_eq!(p.lower, p.predicted);
        assert_eq!(p.upper, p.predicted);
    }
    assert_eq!(f.points.len(), 2);
}

#[test]
fn confidence_on_keeps_band() {
    let mut f = sample();
    apply_confidence(&mut f, true);
    assert_eq!(f, sample());
}
