use chrono::{Days, NaiveDate};
use predistock_core::{ForecastEngine, ForecastInput};
use predistock_prophet::ProphetEngine;

fn linear_input(n: u64) -> ForecastInput {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let ds: Vec<NaiveDate> = (0..n)
        .map(|i| start.checked_add_days(Days::new(i)).unwrap())
        .collect();
    let y = (0..n).map(|i| 100.0 + i as f64 * 0.5).collect();
    ForecastInput { ds, y }
}

#[tokio::test]
async fn fits_history_and_extends_horizon() {
    let engine = ProphetEngine::new();
    let input = linear_input(120);
    let last = *input.ds.last().unwrap();
    let f = engine.forecast(input, 30).await.unwrap();

    assert_eq!(f.points.len(), 150);
    assert_eq!(f.points.last().unwrap().date, last.checked_add_days(Days::new(30)).unwrap());
    assert_eq!(f.components.dates.len(), 150);
    assert_eq!(f.components.trend.len(), 150);
    for w in f.points.windows(2) {
        assert!(w[0].date < w[1].date);
    }
    // A clean upward line should keep trending up.
    let tail = f.points.last().unwrap().predicted;
    assert!(tail > 100.0 + 119.0 * 0.5);
}
