// src/scrape/mod.rs
mod extract;
mod fetcher;

pub use extract::{CompiledLayout, ListingSpec};
pub use fetcher::Fetcher;
