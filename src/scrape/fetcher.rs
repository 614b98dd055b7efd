// src/scrape/fetcher.rs
use crate::config::options::SourceOptions;
use crate::core::error::FetchError;
use crate::core::net::{HttpSource, PageSource};
use crate::core::sanitize::same_name;
use crate::data::MarketRecord;

use super::extract::ListingSpec;

/// Market snapshot fetcher.
///
/// Holds only immutable configuration (URL, compiled selectors, page source),
/// so one instance can be shared across threads. Every call does its own GET
/// and parse; nothing is cached between calls.
pub struct Fetcher {
    source: Box<dyn PageSource>,
    url: String,
    spec: ListingSpec,
}

impl Fetcher {
    /// Live fetcher over HTTP.
    pub fn from_options(opts: &SourceOptions) -> Result<Self, FetchError> {
        let source = HttpSource::new(opts)?;
        Self::with_source(Box::new(source), &opts.url)
    }

    /// Fetcher over any page source (fixtures in tests).
    pub fn with_source(source: Box<dyn PageSource>, url: &str) -> Result<Self, FetchError> {
        Ok(Self { source, url: s!(url), spec: ListingSpec::compile()? })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Top `limit` rows of the listing, in rank order.
    ///
    /// A missing listing table is logged and yields an empty Vec.
    /// Malformed rows are skipped, so the result can be shorter than `limit`.
    pub fn fetch_top(&self, limit: usize) -> Result<Vec<MarketRecord>, FetchError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let doc = self.source.get(&self.url)?;

        match self.spec.extract(&doc, &self.spec.top, 1..=limit) {
            Some(records) => {
                logd!("fetch_top({limit}): {} records", records.len());
                Ok(records)
            }
            None => {
                logw!("Listing table not found at {}", self.url);
                Ok(Vec::new())
            }
        }
    }

    /// First record in the top `limit` whose name matches, ignoring case.
    pub fn find_by_name_in_top(&self, name: &str, limit: usize) -> Result<Option<MarketRecord>, FetchError> {
        let records = self.fetch_top(limit)?;
        Ok(records.into_iter().find(|r| same_name(name, &r.name)))
    }

    /// Name lookup inside ranks `start_rank..=end_rank`, name and price only.
    ///
    /// Unlike `fetch_top`, a missing listing table is an error here.
    pub fn find_by_name_in_range(
        &self,
        name: &str,
        start_rank: usize,
        end_rank: usize,
    ) -> Result<Option<MarketRecord>, FetchError> {
        if start_rank == 0 || start_rank > end_rank {
            return Err(FetchError::InvalidRange { start: start_rank, end: end_rank });
        }
        let doc = self.source.get(&self.url)?;

        let records = self
            .spec
            .extract(&doc, &self.spec.range, start_rank..=end_rank)
            .ok_or(FetchError::TableNotFound("rank window"))?;

        Ok(records
            .into_iter()
            .find(|r| same_name(name, &r.name))
            .map(|r| MarketRecord::brief(r.name, r.price)))
    }
}
