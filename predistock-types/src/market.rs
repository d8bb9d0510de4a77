//! Market data shapes: company profile, raw provider tables, and normalized bars.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::PredistockError;

/// Text shown in place of a missing profile field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Company metadata as reported by the market data gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Long company name.
    pub name: Option<String>,
    /// Business sector.
    pub sector: Option<String>,
    /// Market capitalization in the listing currency.
    pub market_cap: Option<f64>,
    /// Business summary.
    pub description: Option<String>,
}

impl CompanyProfile {
    /// Company name, or the symbol when the provider has none.
    #[must_use]
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(symbol)
    }

    /// Sector, or `N/A`.
    #[must_use]
    pub fn sector_or_na(&self) -> &str {
        self.sector.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// The first `limit` characters of the description followed by `...`.
    ///
    /// Counts characters rather than bytes so multi-byte text is never split.
    #[must_use]
    pub fn description_excerpt(&self, limit: usize) -> String {
        let text = self.description.as_deref().unwrap_or(NOT_AVAILABLE);
        let mut excerpt: String = text.chars().take(limit).collect();
        excerpt.push_str("...");
        excerpt
    }
}

/// One daily OHLC bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

/// Non-empty daily series with strictly increasing dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PriceBar>", into = "Vec<PriceBar>")]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Validate and wrap a list of bars.
    ///
    /// # Errors
    /// Returns `Data` when the list is empty or dates are not strictly increasing.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, PredistockError> {
        if bars.is_empty() {
            return Err(PredistockError::Data("price series is empty".into()));
        }
        if let Some(w) = bars.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(PredistockError::Data(format!(
                "price series dates not strictly increasing at {}",
                w[1].date
            )));
        }
        Ok(Self { bars })
    }

    /// All bars in ascending date order.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Earliest bar.
    #[must_use]
    pub fn first(&self) -> &PriceBar {
        &self.bars[0]
    }

    /// Most recent bar.
    #[must_use]
    pub fn last(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 1]
    }

    /// Number of bars; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The last `n` bars (or all of them when shorter).
    #[must_use]
    pub fn tail(&self, n: usize) -> &[PriceBar] {
        &self.bars[self.bars.len().saturating_sub(n)..]
    }
}

impl TryFrom<Vec<PriceBar>> for PriceSeries {
    type Error = PredistockError;

    fn try_from(bars: Vec<PriceBar>) -> Result<Self, Self::Error> {
        Self::new(bars)
    }
}

impl From<PriceSeries> for Vec<PriceBar> {
    fn from(s: PriceSeries) -> Self {
        s.bars
    }
}

/// Possibly hierarchical column label, e.g. `("Close", "TCS.NS")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnLabel(Vec<String>);

impl ColumnLabel {
    /// Build a label from its levels, outermost first.
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(levels.into_iter().map(Into::into).collect())
    }

    /// Single-level label.
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// The outermost level, or an empty string for a label without levels.
    #[must_use]
    pub fn top_level(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    /// All levels, outermost first.
    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.0
    }
}

/// One column of a raw provider table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawColumn {
    /// Column label.
    pub label: ColumnLabel,
    /// One cell per index row; `None` marks a missing value.
    pub values: Vec<Option<f64>>,
}

/// Un-normalized tabular history as returned by a gateway.
///
/// Rows may be unordered, duplicated, or incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Row timestamps.
    pub index: Vec<DateTime<Utc>>,
    /// Columns aligned with `index`.
    pub columns: Vec<RawColumn>,
}

impl RawSeries {
    /// Empty table with the given row index.
    #[must_use]
    pub const fn new(index: Vec<DateTime<Utc>>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Append a column.
    ///
    /// # Errors
    /// Returns `Data` when the column length differs from the index length.
    pub fn with_column(
        mut self,
        label: ColumnLabel,
        values: Vec<Option<f64>>,
    ) -> Result<Self, PredistockError> {
        if values.len() != self.index.len() {
            return Err(PredistockError::Data(format!(
                "column {:?} has {} cells for {} rows",
                label.levels(),
                values.len(),
                self.index.len()
            )));
        }
        self.columns.push(RawColumn { label, values });
        Ok(self)
    }

    /// Number of index rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
