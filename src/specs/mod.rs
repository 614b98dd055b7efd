// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications**. A spec encodes
//! *where the ground truth lives in the HTML*: the table marker, the row selector,
//! and a per-field locator table (cell index → CSS selectors, tried in order).
//!
//! ## What lives here
//! - **Selector strings only.** No traversal, no networking.
//! - **Row layouts** for each part of the page that renders differently
//!   (fully rendered top rows vs. lazy rows further down).
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), tree walking and record assembly (`scrape::extract`),
//!   query shapes (`scrape::Fetcher`).
//!
//! ## Typical call chain
//! ```text
//! bot / cli → scrape::Fetcher::{fetch_top, find_by_name_*}
//!                  ↘ core::net (GET) → scrape::extract (uses specs::listing)
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against captured fixtures (`tests/fixtures/`).
pub mod listing;
