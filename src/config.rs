use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Command-line arguments. Crawl parameters themselves live in the settings
/// file (or in the built-in defaults when a bare seed URL is given).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON settings file, or a seed URL for a config-less crawl
    pub source: String,
    /// Number of concurrent fetch workers
    #[arg(long, default_value = "1")]
    pub workers: usize,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Parses the command line, printing the usage message and exiting with
    /// code 1 on a missing or malformed argument.
    pub fn new() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let _ = err.print();
                std::process::exit(1);
            }
        }
    }

    /// True when `source` is a seed URL rather than a settings file path.
    pub fn source_is_url(&self) -> bool {
        Url::parse(&self.source)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// User agent the config-less variant crawls with.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36 OPR/113.0.0.0";

/// Crawl settings as read from the JSON file. Every key is optional; values
/// are only type-checked here, not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Seed URL the crawl starts from
    pub start_url: String,
    /// Find-all pattern for email extraction; empty disables it
    pub email_regex: String,
    /// Per-request timeout in seconds; 0 disables the timeout
    pub timeout_interval: u64,
    /// Maximum hop distance from the seed that is still fetched
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            start_url: String::new(),
            email_regex: String::new(),
            timeout_interval: 10,
            max_depth: 1,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Settings for a crawl started from a bare seed URL: fixed browser user
    /// agent, unbounded depth, no timeout, no email extraction.
    pub fn for_seed(url: &str) -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            start_url: url.to_string(),
            email_regex: String::new(),
            timeout_interval: 0,
            max_depth: usize::MAX,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
