//! Company name and ticker alias resolution.

/// Known aliases, keyed by the upper-cased user input.
pub const TICKER_ALIASES: &[(&str, &str)] = &[
    ("TCS", "TCS.NS"),
    ("TATA CONSULTANCY", "TCS.NS"),
    ("RELIANCE", "RELIANCE.NS"),
    ("INFOSYS", "INFY.NS"),
    ("INFY", "INFY.NS"),
    ("HDFC", "HDFCBANK.NS"),
    ("HDFC BANK", "HDFCBANK.NS"),
    ("ICICI", "ICICIBANK.NS"),
    ("ICICI BANK", "ICICIBANK.NS"),
    ("SBI", "SBIN.NS"),
    ("STATE BANK", "SBIN.NS"),
];

/// Look up an alias by its upper-cased key.
#[must_use]
pub fn lookup_alias(key: &str) -> Option<&'static str> {
    TICKER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, symbol)| *symbol)
}

/// Map free-text input to a ticker symbol.
///
/// Trims and upper-cases the input, then returns the aliased symbol or the
/// normalized input itself. Never fails; an empty input yields an empty string.
#[must_use]
pub fn resolve(input: &str) -> String {
    let key = input.trim().to_uppercase();
    match lookup_alias(&key) {
        Some(symbol) => symbol.to_string(),
        None => key,
    }
}
