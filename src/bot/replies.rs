// src/bot/replies.rs
//
// User-facing text. Values are shown exactly as scraped.

use crate::data::MarketRecord;

pub const WELCOME: &str = "Hi!\nI'm CryptoBot!\n\
Send /prices to get the current top 10 crypto prices.\n\
Send /top5 to get information about the top 5 cryptocurrencies.\n\
Send /search_10 to search for any cryptocurrency by name.\n\
Send /search_100 to search for any cryptocurrency from 11 to 100 by name.\n\
Send /subscribe to subscribe to daily updates.\n\
Send /unsubscribe to unsubscribe from daily updates.";

pub const NO_DATA: &str = "No data found or parsing failed.";
pub const SELECT_COIN: &str = "Select a cryptocurrency:";
pub const COIN_NOT_FOUND: &str = "Cryptocurrency not found.";
pub const ASK_NAME_TOP10: &str = "Enter the name of the cryptocurrency you want to search (Top 10):";
pub const ASK_NAME_RANGE: &str = "Enter the name of the cryptocurrency you want to search (Rank 11-100):";
pub const NOT_IN_TOP10: &str =
    "Cryptocurrency not found in the Top 10. Please check the name and try again /search_10.";
pub const NOT_IN_RANGE: &str =
    "Cryptocurrency not found in the ranks 11-100. Please check the name and try again /search_100.";
pub const SUBSCRIBED: &str = "You are subscribed to daily updates on cryptocurrency rates.";
pub const UNSUBSCRIBED: &str = "You're unsubscribed from daily updates on cryptocurrency rates.";
pub const STORE_FAILED: &str = "Could not update your subscription right now. Please try again later.";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Send /help to see what I can do.";

const SEPARATOR: &str = "---------------------------------";
const MISSING: &str = "n/a";

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or(MISSING)
}

/// `/prices` body: one block per coin, dashed separators.
pub fn price_list(records: &[MarketRecord]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(&format!(
            "{}, Price: {}, Volume: {}, Market Cap: {}\n{SEPARATOR}\n",
            r.name, r.price, opt(&r.volume), opt(&r.market_cap)
        ));
    }
    out
}

/// Labelled four-line card (top-5 button).
pub fn coin_card(r: &MarketRecord) -> String {
    format!(
        "Name: {}\nPrice: {}\nVolume: {}\nMarket Cap: {}",
        r.name, r.price, opt(&r.volume), opt(&r.market_cap)
    )
}

/// Top-10 search hit: name on its own line.
pub fn search_hit(r: &MarketRecord) -> String {
    format!("{}\nPrice: {}\nVolume: {}\nMarket Cap: {}", r.name, r.price, opt(&r.volume), opt(&r.market_cap))
}

/// Rank-window search hit: name and price only.
pub fn range_hit(r: &MarketRecord) -> String {
    format!("Name: {}\nPrice: {}", r.name, r.price)
}

/// Scheduled digest: one line per coin.
pub fn digest(records: &[MarketRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}: {} (Volume: {}, Market Cap: {})", r.name, r.price, opt(&r.volume), opt(&r.market_cap)))
        .collect::<Vec<_>>()
        .join("\n")
}
