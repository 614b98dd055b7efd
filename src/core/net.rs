// src/core/net.rs

// Blocking HTTP GET behind a small seam so parsing can run against fixtures.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::config::options::SourceOptions;
use super::error::FetchError;

/// Anything that can turn a URL into an HTML document.
pub trait PageSource: Send + Sync {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Live source. One request per `get`, bounded by the configured timeout.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &SourceOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .connect_timeout(opts.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}

/// Fixed document, ignores the URL. Used by tests and benches.
pub struct StaticPage {
    html: String,
}

impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl PageSource for StaticPage {
    fn get(&self, _url: &str) -> Result<String, FetchError> {
        Ok(self.html.clone())
    }
}
