use predistock_core::CompanyProfile;

fn company(name: &str, sector: &str, market_cap: f64, description: &str) -> CompanyProfile {
    CompanyProfile {
        name: Some(name.to_string()),
        sector: Some(sector.to_string()),
        market_cap: Some(market_cap),
        description: Some(description.to_string()),
    }
}

pub fn by_symbol(s: &str) -> Option<CompanyProfile> {
    match s {
        "RELIANCE.NS" => Some(company(
            "Reliance Industries Limited",
            "Energy",
            19_500_000_000_000.0,
            &"Reliance Industries Limited engages in hydrocarbon exploration and production, \
              oil and chemicals, textile, retail, digital, material and composites, renewables, \
              and financial services businesses worldwide. "
                .repeat(4),
        )),
        "TCS.NS" => Some(company(
            "Tata Consultancy Services Limited",
            "Technology",
            14_800_000_000_000.0,
            "Tata Consultancy Services Limited provides information technology and consulting services.",
        )),
        "INFY.NS" => Some(company(
            "Infosys Limited",
            "Technology",
            7_600_000_000_000.0,
            "Infosys Limited provides consulting, technology, outsourcing, and digital services.",
        )),
        "SBIN.NS" => Some(company(
            "State Bank of India",
            "Financial Services",
            7_200_000_000_000.0,
            "State Bank of India provides banking products and services.",
        )),
        "HDFCBANK.NS" => Some(company(
            "HDFC Bank Limited",
            "Financial Services",
            12_300_000_000_000.0,
            "HDFC Bank Limited provides banking and financial services.",
        )),
        // Sparse metadata: every optional field missing.
        "ICICIBANK.NS" => Some(CompanyProfile::default()),
        "EMPTY.NS" | "STALE.NS" => Some(company("Placeholder Limited", "Industrials", 1.0e9, "")),
        _ => None,
    }
}
