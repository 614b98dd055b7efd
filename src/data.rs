// src/data.rs
//
// MarketRecord: one listed coin as the page shows it.
//
// Values are display strings ("$1.2B", "$67,012.55"). They are never parsed
// into numbers; whatever the page renders is passed through.

/// Column headers matching `MarketRecord::to_row`.
pub const RECORD_HEADERS: [&str; 4] = ["Name", "Price", "Volume (24h)", "Market Cap"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketRecord {
    pub name: String,
    pub price: String,
    /// `None` for rank-window lookups, which only resolve name and price.
    pub volume: Option<String>,
    pub market_cap: Option<String>,
}

impl MarketRecord {
    /// Full record from the top-of-listing layout.
    pub fn full(name: String, price: String, volume: String, market_cap: String) -> Self {
        Self { name, price, volume: Some(volume), market_cap: Some(market_cap) }
    }

    /// Name and price only.
    pub fn brief(name: String, price: String) -> Self {
        Self { name, price, volume: None, market_cap: None }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.price.clone(),
            self.volume.clone().unwrap_or_default(),
            self.market_cap.clone().unwrap_or_default(),
        ]
    }
}

pub fn headers() -> Vec<String> {
    RECORD_HEADERS.iter().map(|h| s!(*h)).collect()
}
