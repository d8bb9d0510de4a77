use predistock_types::{PriceSeries, Recommendation};

/// Compare the first and last close of the whole series.
///
/// `percent` is relative to the first close; a zero first close with a
/// non-zero change yields an infinite percentage.
#[must_use]
pub fn evaluate(series: &PriceSeries) -> Recommendation {
    let first = series.first().close;
    let diff = series.last().close - first;
    let percent = || diff / first * 100.0;
    if diff > 0.0 {
        Recommendation::Growth {
            amount: diff,
            percent: percent(),
        }
    } else if diff < 0.0 {
        Recommendation::Decline {
            amount: diff.abs(),
            percent: percent().abs(),
        }
    } else {
        Recommendation::Flat
    }
}
