use anyhow::Result;
use log2::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

use super::config::CrawlerConfigRef;
use super::extract::{EmailExtractor, extract_links};
use super::fetch::{build_client, fetch_page};
use super::state::CrawlerStateRef;

/// Runs the traversal until the frontier is empty and every worker is idle.
///
/// The email pattern is compiled and the HTTP client is built before any
/// worker starts, so configuration problems surface here and not mid-crawl.
/// With one worker (the default) the LIFO frontier gives the deterministic
/// depth-first order of the reference behavior; more workers fetch distinct
/// URLs concurrently, guarded by the check-and-insert on the visited set.
pub async fn crawl(state_ref: CrawlerStateRef, config_ref: CrawlerConfigRef) -> Result<()> {
    let extractor = Arc::new(EmailExtractor::new(&config_ref.email_pattern)?);
    let client = build_client(&config_ref)?;

    let active_workers = Arc::new(AtomicUsize::new(0));
    let mut handles: Vec<JoinHandle<()>> = Vec::new();

    for worker_id in 0..config_ref.worker_count {
        let state = Arc::clone(&state_ref);
        let config = Arc::clone(&config_ref);
        let extractor = Arc::clone(&extractor);
        let active_workers = Arc::clone(&active_workers);
        let client = client.clone();

        let handle = tokio::spawn(async move {
            debug!("Worker {} started", worker_id);

            loop {
                let next_item = {
                    let mut frontier = state.frontier.write().await;
                    frontier.pop()
                };

                if let Some((url, depth)) = next_item {
                    active_workers.fetch_add(1, Ordering::SeqCst);

                    if depth > config.max_depth {
                        debug!("Worker {}: {} beyond max depth {}", worker_id, url, config.max_depth);
                        active_workers.fetch_sub(1, Ordering::SeqCst);
                        continue;
                    }

                    // Check-and-insert under one lock so no two workers fetch
                    // the same URL. Lazily drops duplicate frontier entries.
                    {
                        let mut visited = state.visited.write().await;
                        if visited.contains(&url) {
                            active_workers.fetch_sub(1, Ordering::SeqCst);
                            continue;
                        }
                        visited.insert(url.clone());
                    }

                    info!("Worker {}: Crawling (depth {}): {}", worker_id, depth, url);

                    match fetch_page(&url, &client, &config).await {
                        Ok(html) => {
                            let links = extract_links(&html);
                            let emails = extractor.extract(&html);

                            {
                                let mut graph = state.graph.write().await;
                                graph.record_links(&url, links.clone());
                                graph.record_emails(&url, emails.clone());
                            }

                            {
                                let visited = state.visited.read().await;
                                let mut frontier = state.frontier.write().await;
                                for link in links {
                                    if !visited.contains(&link) {
                                        frontier.push((link, depth + 1));
                                    }
                                }
                            }

                            if !emails.is_empty() {
                                let mut unique = state.unique_emails.write().await;
                                unique.extend(emails);
                            }
                        }
                        Err(e) => {
                            // Visited but content-less: empty link record,
                            // no emails, run continues.
                            warn!("Worker {}: {}", worker_id, e);
                            let mut graph = state.graph.write().await;
                            graph.record_links(&url, Vec::new());
                        }
                    }

                    state.pages_crawled_count.fetch_add(1, Ordering::Relaxed);
                    active_workers.fetch_sub(1, Ordering::SeqCst);
                } else {
                    if config.worker_count == 1 {
                        break;
                    }

                    sleep(Duration::from_millis(50)).await;

                    let frontier_empty = {
                        let frontier = state.frontier.read().await;
                        frontier.is_empty()
                    };
                    let idle = active_workers.load(Ordering::SeqCst) == 0;

                    if frontier_empty && idle {
                        debug!("Worker {}: frontier empty and all workers idle", worker_id);
                        break;
                    }
                }
            }

            debug!("Worker {} finished", worker_id);
        });

        handles.push(handle);
    }

    for handle in handles {
        handle.await?;
    }

    Ok(())
}
