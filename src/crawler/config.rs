use std::sync::Arc;

use crate::config::Settings;

/// Default per-request timeout in seconds
pub const PAGE_REQUEST_TIMEOUT_SEC: u64 = 10;

/// Configuration for the crawler
pub struct CrawlerConfig {
    pub start_url: String,
    pub user_agent: String,
    pub email_pattern: String,
    pub max_depth: usize,
    /// 0 disables the per-request timeout
    pub request_timeout_sec: u64,
    pub worker_count: usize,
}

impl CrawlerConfig {
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            user_agent: String::new(),
            email_pattern: String::new(),
            max_depth: 1,
            request_timeout_sec: PAGE_REQUEST_TIMEOUT_SEC,
            worker_count: 1,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.start_url.clone())
            .with_user_agent(settings.user_agent.clone())
            .with_email_pattern(settings.email_regex.clone())
            .with_max_depth(settings.max_depth)
            .with_request_timeout(settings.timeout_interval)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_email_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.email_pattern = pattern.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_request_timeout(mut self, timeout_sec: u64) -> Self {
        self.request_timeout_sec = timeout_sec;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count.max(1);
        self
    }
}

pub type CrawlerConfigRef = Arc<CrawlerConfig>;
