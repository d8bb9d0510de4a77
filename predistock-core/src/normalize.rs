use std::collections::{BTreeMap, btree_map::Entry};

use chrono::NaiveDate;
use predistock_types::{PredistockError, PriceBar, PriceSeries, RawSeries};
use thiserror::Error;

/// Why a raw table could not be turned into a [`PriceSeries`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Every row was missing a value or the table had no rows.
    #[error("no complete price rows")]
    EmptySeries,
    /// A required price field has no column.
    #[error("missing column: {0}")]
    MissingColumn(&'static str),
}

impl From<NormalizeError> for PredistockError {
    fn from(e: NormalizeError) -> Self {
        Self::Data(e.to_string())
    }
}

const FIELDS: [&str; 4] = ["Open", "High", "Low", "Close"];

/// Flatten a provider table into an ascending, complete daily series.
///
/// - Column labels collapse to their outermost level; when several columns
///   collapse to the same name the first one is used.
/// - Rows with a missing or non-finite open/high/low/close are dropped.
/// - Rows are ordered by date; for a repeated date the first row in input
///   order wins.
///
/// # Errors
/// `MissingColumn` when a price field has no column (checked in
/// `Close`, `Open`, `High`, `Low` order), `EmptySeries` when no row survives.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "predistock::normalize", skip(raw), fields(rows = raw.len()))
)]
pub fn normalize(raw: &RawSeries) -> Result<PriceSeries, NormalizeError> {
    let column = |field: &'static str| {
        raw.columns
            .iter()
            .find(|c| c.label.top_level().trim().eq_ignore_ascii_case(field))
            .map(|c| c.values.as_slice())
            .ok_or(NormalizeError::MissingColumn(field))
    };
    let close = column(FIELDS[3])?;
    let open = column(FIELDS[0])?;
    let high = column(FIELDS[1])?;
    let low = column(FIELDS[2])?;

    let cell = |col: &[Option<f64>], row: usize| {
        col.get(row).copied().flatten().filter(|v| v.is_finite())
    };

    let mut by_date: BTreeMap<NaiveDate, PriceBar> = BTreeMap::new();
    for (row, ts) in raw.index.iter().enumerate() {
        let (Some(o), Some(h), Some(l), Some(c)) = (
            cell(open, row),
            cell(high, row),
            cell(low, row),
            cell(close, row),
        ) else {
            continue;
        };
        let date = ts.date_naive();
        if let Entry::Vacant(v) = by_date.entry(date) {
            v.insert(PriceBar {
                date,
                open: o,
                high: h,
                low: l,
                close: c,
            });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(kept = by_date.len(), "normalized history");

    if by_date.is_empty() {
        return Err(NormalizeError::EmptySeries);
    }
    PriceSeries::new(by_date.into_values().collect()).map_err(|_| NormalizeError::EmptySeries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use predistock_types::ColumnLabel;

    fn ts(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 3, 45, 0).unwrap()
    }

    #[test]
    fn missing_close_column_is_reported_first() {
        let raw = RawSeries::new(vec![ts(1)])
            .with_column(ColumnLabel::single("Open"), vec![Some(1.0)])
            .unwrap();
        assert_eq!(
            normalize(&raw).unwrap_err(),
            NormalizeError::MissingColumn("Close")
        );
    }

    #[test]
    fn lowercase_labels_are_accepted() {
        let mut raw = RawSeries::new(vec![ts(1)]);
        for f in ["open", "high", "low", "close"] {
            raw = raw.with_column(ColumnLabel::single(f), vec![Some(2.0)]).unwrap();
        }
        let s = normalize(&raw).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.first().close, 2.0);
    }
}
