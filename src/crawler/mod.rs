pub mod config;
pub mod extract;
pub mod fetch;
pub mod runner;
pub mod state;


pub use config::{CrawlerConfig, CrawlerConfigRef, PAGE_REQUEST_TIMEOUT_SEC};
pub use extract::{EmailExtractor, PatternError, extract_links};
pub use fetch::{FetchFailure, build_client, fetch_page};
pub use runner::crawl;
pub use state::{CrawlerState, CrawlerStateRef};
