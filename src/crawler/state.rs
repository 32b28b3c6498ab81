use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::RwLock;

use crate::graph::CrawlGraph;

/// Current state of one crawl. Owned explicitly and shared by reference so
/// several independent crawls can run in the same process.
pub struct CrawlerState {
    /// Number of pages for which a fetch was attempted
    pub pages_crawled_count: AtomicUsize,
    /// Frontier of (url, depth) pairs, popped LIFO for depth-first traversal.
    /// Duplicate entries are allowed; the visited check resolves them at pop.
    pub frontier: RwLock<Vec<(String, usize)>>,
    /// URLs a fetch has been attempted for; grows monotonically
    pub visited: RwLock<HashSet<String>>,
    /// url→links and url→emails record, rendered after the run
    pub graph: RwLock<CrawlGraph>,
    /// Deduplicated total of every email matched anywhere in the run
    pub unique_emails: RwLock<HashSet<String>>,
}

impl CrawlerState {
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            pages_crawled_count: AtomicUsize::new(0),
            frontier: RwLock::new(vec![(start_url.into(), 0)]),
            visited: RwLock::new(HashSet::new()),
            graph: RwLock::new(CrawlGraph::new()),
            unique_emails: RwLock::new(HashSet::new()),
        }
    }
}

pub type CrawlerStateRef = Arc<CrawlerState>;
