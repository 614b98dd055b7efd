// src/config/options.rs
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub store: StoreOptions,
    pub digest: DigestOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            store: StoreOptions::default(),
            digest: DigestOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults, then `.env` (if present), then process environment.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(url) = lookup(ENV_SOURCE_URL) {
            let url = url.trim();
            if url.is_empty() {
                return Err(format!("{ENV_SOURCE_URL} is set but empty").into());
            }
            opts.source.url = s!(url);
        }
        if let Some(v) = lookup(ENV_TIMEOUT_SECS) {
            opts.source.timeout = Duration::from_secs(parse_secs(ENV_TIMEOUT_SECS, &v)?);
        }
        if let Some(dir) = lookup(ENV_STORE_DIR) {
            opts.store.dir = PathBuf::from(dir.trim());
        }
        if let Some(v) = lookup(ENV_DIGEST_INTERVAL_SECS) {
            opts.digest.interval = Duration::from_secs(parse_secs(ENV_DIGEST_INTERVAL_SECS, &v)?);
        }
        Ok(opts)
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<u64, Box<dyn Error>> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("Invalid {key}={raw:?}: {e}"))?;
    if secs == 0 {
        return Err(format!("{key} must be greater than zero").into());
    }
    Ok(secs)
}

/// Where the listing page lives and how long we wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
    pub timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub dir: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(STORE_DIR) }
    }
}

impl StoreOptions {
    pub fn subscribers_path(&self) -> PathBuf {
        self.dir.join(SUBSCRIBERS_FILE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestOptions {
    pub interval: Duration,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self { interval: Duration::from_secs(DIGEST_INTERVAL_SECS) }
    }
}
