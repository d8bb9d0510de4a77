#![cfg(feature = "test-adapters")]

use std::sync::Arc;

use paft::fundamentals::profile::CompanyProfile as YfCompany;
use predistock_core::{MarketDataGateway, PredistockError};
use predistock_yfinance::{YfGateway, adapter};

struct Combo {
    p: Arc<dyn adapter::YfProfile>,
}
impl adapter::CloneArcAdapters for Combo {
    fn clone_arc_profile(&self) -> Arc<dyn adapter::YfProfile> {
        self.p.clone()
    }
}

fn reliance() -> yfinance_rs::profile::Profile {
    yfinance_rs::profile::Profile::Company(YfCompany {
        name: "Reliance Industries Limited".into(),
        sector: Some("Energy".into()),
        industry: Some("Oil & Gas Refining & Marketing".into()),
        website: None,
        summary: Some("Reliance Industries Limited engages in hydrocarbon exploration.".into()),
        address: None,
        isin: None,
    })
}

#[tokio::test]
async fn profile_uses_injected_adapter() {
    let prof = <dyn adapter::YfProfile>::from_fn(|symbol| {
        assert_eq!(symbol, "RELIANCE.NS");
        Ok(reliance())
    });
    let gw = YfGateway::from_adapter(&Combo { p: prof });

    let p = gw.profile("RELIANCE.NS").await.unwrap();
    assert_eq!(p.name.as_deref(), Some("Reliance Industries Limited"));
    assert_eq!(p.sector.as_deref(), Some("Energy"));
    assert_eq!(p.market_cap, None, "Yahoo profiles carry no market cap");
    assert_eq!(p.display_name("RELIANCE.NS"), "Reliance Industries Limited");
    assert!(p.description.unwrap().starts_with("Reliance"));
}

#[tokio::test]
async fn unsupported_history_by_default() {
    let prof = <dyn adapter::YfProfile>::from_fn(|_| Ok(reliance()));
    let gw = YfGateway::from_adapter(&Combo { p: prof });
    let err = gw
        .history("RELIANCE.NS", predistock_core::HistoryRange::Max)
        .await
        .unwrap_err();
    assert!(matches!(err, PredistockError::Unsupported { .. }));
}
