// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod bot;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod file;
pub mod notify;
pub mod schedule;
pub mod scrape;
pub mod specs;
pub mod store;

pub use data::MarketRecord;
pub use scrape::Fetcher;
