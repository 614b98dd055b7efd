// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://coinmarketcap.com/";
pub const USER_AGENT: &str = concat!("coin_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Listing windows
pub const DEFAULT_LIMIT: usize = 10;
pub const TOP5_LIMIT: usize = 5;
pub const SEARCH_TOP_LIMIT: usize = 10;
pub const RANGE_START: usize = 11;
pub const RANGE_END: usize = 100;

// Local store
pub const STORE_DIR: &str = ".store";
pub const SUBSCRIBERS_FILE: &str = "subscribers.csv";
pub const LOG_FILE: &str = "debug.log";

// Digest
pub const DIGEST_INTERVAL_SECS: u64 = 24 * 60 * 60;

// Pending name searches older than this are forgotten.
pub const SESSION_TTL_SECS: u64 = 10 * 60;

// Env overrides (read by AppOptions::from_env)
pub const ENV_SOURCE_URL: &str = "COIN_SOURCE_URL";
pub const ENV_TIMEOUT_SECS: &str = "COIN_TIMEOUT_SECS";
pub const ENV_STORE_DIR: &str = "COIN_STORE_DIR";
pub const ENV_DIGEST_INTERVAL_SECS: &str = "COIN_DIGEST_INTERVAL_SECS";
