use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use super::config::CrawlerConfig;

/// A single failed GET. Recovered per-URL by the runner: the page is treated
/// as visited with no content, never aborting the run.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request for {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
}

/// Fetches `url` with exactly one GET attempt, no retries. The client carries
/// the configured User-Agent as a default header; the timeout is applied
/// per-request unless disabled.
pub async fn fetch_page(
    url: &str,
    client: &Client,
    config: &CrawlerConfig,
) -> Result<String, FetchFailure> {
    let mut request = client.get(url);
    if config.request_timeout_sec > 0 {
        request = request.timeout(Duration::from_secs(config.request_timeout_sec));
    }

    let response = request.send().await.map_err(|source| FetchFailure::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(FetchFailure::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| FetchFailure::Transport {
        url: url.to_string(),
        source,
    })
}

/// Builds the client all fetches of one crawl share.
pub fn build_client(config: &CrawlerConfig) -> reqwest::Result<Client> {
    Client::builder().user_agent(config.user_agent.as_str()).build()
}
