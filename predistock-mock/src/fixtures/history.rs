use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use predistock_core::{ColumnLabel, HistoryRange, RawSeries};

type Row = (DateTime<Utc>, [Option<f64>; 4]);

/// Session open on NSE (09:15 IST) expressed in UTC.
fn session(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(3, 45, 0).unwrap_or_default().and_utc()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

fn flat_rows(start: &str, closes: &[f64]) -> Vec<Row> {
    let mut date = day(start);
    closes
        .iter()
        .map(|&c| {
            let row = (session(date), [Some(c), Some(c * 1.01), Some(c * 0.99), Some(c)]);
            date = date.checked_add_days(Days::new(1)).unwrap_or(date);
            row
        })
        .collect()
}

/// Weekday sessions with a gentle uptrend and a deterministic wiggle.
fn trending_rows(start: &str, sessions: usize, base: f64, step: f64) -> Vec<Row> {
    let mut rows = Vec::with_capacity(sessions);
    let mut date = day(start);
    let mut i = 0usize;
    while rows.len() < sessions {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            let wiggle = ((i % 7) as f64 - 3.0) * 0.8;
            let close = base + step * i as f64 + wiggle;
            let open = close - wiggle * 0.5;
            rows.push((
                session(date),
                [
                    Some(open),
                    Some(open.max(close) + 4.0),
                    Some(open.min(close) - 4.0),
                    Some(close),
                ],
            ));
            i += 1;
        }
        date = date.checked_add_days(Days::new(1)).unwrap_or(date);
    }
    rows
}

fn build(symbol: &str, rows: Vec<Row>) -> RawSeries {
    let index = rows.iter().map(|(ts, _)| *ts).collect();
    let mut raw = RawSeries::new(index);
    for (i, field) in ["Open", "High", "Low", "Close"].into_iter().enumerate() {
        let values = rows.iter().map(|(_, cells)| cells[i]).collect();
        raw.columns.push(predistock_core::RawColumn {
            label: ColumnLabel::new([field, symbol]),
            values,
        });
    }
    raw
}

fn window(mut rows: Vec<Row>, range: HistoryRange) -> Vec<Row> {
    if range == HistoryRange::D1 {
        rows.sort_by_key(|(ts, _)| *ts);
        rows.split_off(rows.len().saturating_sub(1))
    } else {
        rows
    }
}

pub fn by_symbol(s: &str, range: HistoryRange) -> Option<RawSeries> {
    let rows = match s {
        "RELIANCE.NS" => trending_rows("2022-01-03", 500, 2400.0, 1.5),
        "TCS.NS" => flat_rows("2024-01-01", &[10.0, 8.0, 12.0]),
        "INFY.NS" => flat_rows("2024-01-01", &[10.0, 12.0, 8.0]),
        "SBIN.NS" => flat_rows("2024-01-01", &[10.0, 15.0, 10.0]),
        "ICICIBANK.NS" => trending_rows("2024-01-01", 30, 1000.0, 2.0),
        // Unordered, one duplicated date, one incomplete row.
        "HDFCBANK.NS" => vec![
            (session(day("2024-01-03")), [Some(1500.0), Some(1520.0), Some(1490.0), Some(1510.0)]),
            (session(day("2024-01-01")), [Some(1480.0), Some(1500.0), Some(1470.0), Some(1490.0)]),
            (session(day("2024-01-02")), [Some(1490.0), None, Some(1480.0), Some(1495.0)]),
            (session(day("2024-01-03")), [Some(1.0), Some(1.0), Some(1.0), Some(1.0)]),
            (session(day("2024-01-04")), [Some(1510.0), Some(1530.0), Some(1505.0), Some(1525.0)]),
        ],
        "EMPTY.NS" => flat_rows("2024-01-01", &[10.0, 11.0])
            .into_iter()
            .map(|(ts, [o, h, l, _])| (ts, [o, h, l, None]))
            .collect(),
        "STALE.NS" if range != HistoryRange::D1 => flat_rows("2024-01-01", &[20.0, 21.0, 22.0]),
        _ => return None,
    };
    Some(build(s, window(rows, range)))
}
