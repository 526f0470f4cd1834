//! HTTP fetch gateway.
//!
//! All probe traffic goes through here. The public contract is that a fetch
//! never fails: every failure mode collapses to absence of content via
//! [`FetchOutcome::into_body`]. The tagged outcome keeps the reason around
//! for logs and tests.

use async_trait::async_trait;

use crate::shared::config::ProbeConfig;

/// Tagged result of one GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 2xx response with its text body
    Body(String),

    /// Response arrived with a non-success status
    HttpStatus(u16),

    /// The request itself failed (DNS, connect, timeout, body read)
    Transport(String),
}

impl FetchOutcome {
    /// Flatten to the public absence contract
    pub fn into_body(self) -> Option<String> {
        match self {
            FetchOutcome::Body(body) => Some(body),
            FetchOutcome::HttpStatus(_) | FetchOutcome::Transport(_) => None,
        }
    }
}

/// Seam between the probe pipeline and the network
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Production fetcher routing every request through the CORS relay
pub struct RelayFetcher {
    client: reqwest::Client,
    relay_prefix: String,
}

impl RelayFetcher {
    pub fn new(config: &ProbeConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            relay_prefix: config.relay_prefix.clone(),
        })
    }
}

#[async_trait]
impl Fetcher for RelayFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        // Relay prefix is concatenated verbatim, no escaping
        let relayed = format!("{}{}", self.relay_prefix, url);

        match self.client.get(&relayed).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.text().await {
                        Ok(body) => FetchOutcome::Body(body),
                        Err(e) => {
                            tracing::warn!("Failed to read body from {}: {}", url, e);
                            FetchOutcome::Transport(e.to_string())
                        }
                    }
                } else {
                    tracing::warn!("Unexpected status {} from {}", status, url);
                    FetchOutcome::HttpStatus(status.as_u16())
                }
            }
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                FetchOutcome::Transport(e.to_string())
            }
        }
    }
}

/// In-memory fetcher for tests: canned outcomes per URL, everything else a
/// transport failure. Records the URLs it was asked for.
#[cfg(test)]
pub(crate) struct StubFetcher {
    responses: std::collections::HashMap<String, FetchOutcome>,
    requested: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl StubFetcher {
    pub fn new() -> Self {
        Self {
            responses: std::collections::HashMap::new(),
            requested: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, url: &str, outcome: FetchOutcome) -> Self {
        self.responses.insert(url.to_string(), outcome);
        self
    }

    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.with(url, FetchOutcome::Body(body.to_string()))
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| FetchOutcome::Transport(format!("no stub for {}", url)))
    }
}
