use std::net::SocketAddr;

use clap::Parser;
use predistock::{CacheConfig, DEFAULT_BROKERAGE_BASE_URL};

/// Command line and environment settings for the server.
#[derive(Debug, Clone, Parser)]
#[command(name = "predistock-web", version, about = "Stock Forecast System web dashboard")]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "PREDISTOCK_BIND", default_value = "127.0.0.1:8501")]
    pub bind: SocketAddr,

    /// History cache lifetime in seconds; 0 disables the cache. Unset keeps
    /// entries until evicted by capacity.
    #[arg(long, env = "PREDISTOCK_CACHE_TTL_SECS")]
    pub cache_ttl_secs: Option<u64>,

    /// Maximum number of cached histories.
    #[arg(long, env = "PREDISTOCK_CACHE_CAPACITY", default_value_t = 256)]
    pub cache_capacity: u64,

    /// Base of the "Buy" deep link.
    #[arg(long, env = "PREDISTOCK_BROKERAGE_URL", default_value = DEFAULT_BROKERAGE_BASE_URL)]
    pub brokerage_url: String,

    /// Serve fixture data with the linear forecaster; no network access.
    #[arg(long, env = "PREDISTOCK_MOCK")]
    pub mock: bool,
}

impl Args {
    /// History cache settings derived from the flags.
    #[must_use]
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_entries: self.cache_capacity,
            ttl_ms: self.cache_ttl_secs.map(|s| s.saturating_mul(1_000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["predistock-web"]).unwrap();
        assert_eq!(args.bind.port(), 8501);
        assert_eq!(args.cache_config(), CacheConfig::default());
        assert_eq!(args.brokerage_url, DEFAULT_BROKERAGE_BASE_URL);
    }

    #[test]
    fn cache_flags() {
        let args = Args::try_parse_from([
            "predistock-web",
            "--cache-ttl-secs",
            "0",
            "--cache-capacity",
            "16",
            "--mock",
        ])
        .unwrap();
        assert!(args.mock);
        let cfg = args.cache_config();
        assert_eq!(cfg.max_entries, 16);
        assert!(!cfg.is_enabled());

        let args = Args::try_parse_from(["predistock-web", "--cache-ttl-secs", "90"]).unwrap();
        assert_eq!(args.cache_config().ttl_ms, Some(90_000));
    }
}
