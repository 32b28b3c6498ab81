use anyhow::Result;
use crawlmail::{config, crawler};
use log2::*;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Indicates start time of the run, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cli = config::Cli::new();
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("crawlmail")) // include only modules having this pattern
        .compress(false) // compress output
        .level(cli.log_level.to_string())
        .start();

    let settings = if cli.source_is_url() {
        config::Settings::for_seed(&cli.source)
    } else {
        config::Settings::load(&cli.source)?
    };
    if settings.start_url.is_empty() {
        anyhow::bail!("no start_url configured in {}", cli.source);
    }

    let crawler_config = Arc::new(
        crawler::CrawlerConfig::from_settings(&settings).with_worker_count(cli.workers),
    );
    let state = Arc::new(crawler::CrawlerState::new(settings.start_url.clone()));

    // state is cloned because it's read after the crawl and config is not
    crawler::crawl(state.clone(), crawler_config).await?;

    let crawled = state.pages_crawled_count.load(Ordering::Relaxed);
    let unique_emails = state.unique_emails.read().await;
    info!("Crawling complete in {:.2?}", START_TIME.elapsed());
    info!("Crawled {} URLs", crawled);
    info!("Found {} unique emails", unique_emails.len());

    let graph = state.graph.read().await;
    println!("\n Crawl Tree:");
    print!("{}", graph.render_link_tree());
    println!("\n Email Tree:");
    print!("{}", graph.render_email_tree());

    Ok(())
}
