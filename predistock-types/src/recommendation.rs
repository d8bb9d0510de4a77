use serde::{Deserialize, Serialize};

/// Buy/wait verdict from the first-versus-last close comparison.
///
/// Amounts and percentages are absolute values; the variant carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Recommendation {
    /// Last close above first close.
    Growth {
        /// Absolute price change.
        amount: f64,
        /// Change relative to the first close, in percent.
        percent: f64,
    },
    /// Last close below first close.
    Decline {
        /// Absolute price change.
        amount: f64,
        /// Change relative to the first close, in percent.
        percent: f64,
    },
    /// No change.
    Flat,
}

impl Recommendation {
    /// True for `Growth`; the brokerage action is only offered then.
    #[must_use]
    pub const fn is_growth(&self) -> bool {
        matches!(self, Self::Growth { .. })
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        match *self {
            Self::Growth { amount, percent } => format!(
                "The stock shows growth of ₹ {} ({percent:.2}%). Consider investment.",
                group_thousands(amount, 2)
            ),
            Self::Decline { amount, percent } => format!(
                "Stock declined ₹ {} ({percent:.2}%). Wait for recovery.",
                group_thousands(amount, 2)
            ),
            Self::Flat => "Minimal price movement detected.".to_string(),
        }
    }
}

/// Format `value` with `decimals` places and comma-separated thousands.
#[must_use]
pub fn group_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .map_or((formatted.as_str(), None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
