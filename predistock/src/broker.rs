use predistock_core::PredistockError;
use url::Url;

/// Exchange suffix stripped from symbols before they are passed to the brokerage.
pub const NSE_SUFFIX: &str = ".NS";

/// Brokerage deep link for `symbol`, e.g. `https://kite.zerodha.com/?symbol=NSE:TCS`.
///
/// Only a trailing `.NS` is removed; other suffixes are kept as-is.
///
/// # Errors
/// Returns `InvalidArg` when `base` is not an absolute URL.
pub fn brokerage_url(base: &str, symbol: &str) -> Result<String, PredistockError> {
    let mut url = Url::parse(base)
        .map_err(|e| PredistockError::InvalidArg(format!("brokerage base url '{base}': {e}")))?;
    let bare = symbol.strip_suffix(NSE_SUFFIX).unwrap_or(symbol);
    url.set_query(Some(&format!("symbol=NSE:{bare}")));
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use predistock_core::DEFAULT_BROKERAGE_BASE_URL;

    #[test]
    fn strips_exchange_suffix() {
        assert_eq!(
            brokerage_url(DEFAULT_BROKERAGE_BASE_URL, "TCS.NS").unwrap(),
            "https://kite.zerodha.com/?symbol=NSE:TCS"
        );
    }

    #[test]
    fn suffix_only_at_end() {
        assert_eq!(
            brokerage_url(DEFAULT_BROKERAGE_BASE_URL, "A.NSX").unwrap(),
            "https://kite.zerodha.com/?symbol=NSE:A.NSX"
        );
        assert_eq!(
            brokerage_url(DEFAULT_BROKERAGE_BASE_URL, "AAPL").unwrap(),
            "https://kite.zerodha.com/?symbol=NSE:AAPL"
        );
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = brokerage_url("kite", "TCS.NS").unwrap_err();
        assert!(matches!(err, PredistockError::InvalidArg(_)));
    }
}
