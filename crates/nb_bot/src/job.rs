//! One polling pass over every configured source.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use nb_core::logging::Logger;
use nb_core::{NewsItem, PostedStore, Source};
use nb_scrapers::ScraperManager;
use rand::Rng;
use tokio::sync::Mutex;

use crate::publisher::Publisher;

#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Pause before each source, drawn uniformly from this range.
    pub jitter_min: Duration,
    pub jitter_max: Duration,
    /// New items published per source per pass.
    pub per_source_limit: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            jitter_min: Duration::from_millis(500),
            jitter_max: Duration::from_millis(1500),
            per_source_limit: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub sources: usize,
    pub candidates: usize,
    pub published: usize,
    pub failed: usize,
}

pub struct NewsJob {
    sources: Vec<Source>,
    scrapers: ScraperManager,
    store: Arc<dyn PostedStore>,
    publisher: Publisher,
    config: JobConfig,
    running: Mutex<()>,
}

impl NewsJob {
    pub fn new(
        sources: Vec<Source>,
        scrapers: ScraperManager,
        store: Arc<dyn PostedStore>,
        publisher: Publisher,
        config: JobConfig,
    ) -> Self {
        Self {
            sources,
            scrapers,
            store,
            publisher,
            config,
            running: Mutex::new(()),
        }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Checks every source in order and publishes what is new.
    ///
    /// Passes never overlap: a caller arriving mid-pass waits for it to end.
    /// Per-item failures are logged and counted, never propagated.
    pub async fn run_once(&self) -> RunReport {
        let _guard = self.running.lock().await;
        let logger = Logger::new().with_prefix("check");
        logger.info("Checking sources...");

        let mut report = RunReport::default();
        for source in &self.sources {
            tokio::time::sleep(self.jitter()).await;

            let log = logger.clone().with_prefix(source.name.as_str());
            let items = self.scrapers.fetch_source_items(source).await;
            report.sources += 1;
            report.candidates += items.len();

            let fresh = self.unposted(items, &log).await;
            let batch = select_batch(fresh, self.config.per_source_limit);
            log.info(&format!("{} new items to publish", batch.len()));

            for item in &batch {
                match self.publisher.publish(item, &source.name).await {
                    Ok(()) => report.published += 1,
                    Err(e) => {
                        report.failed += 1;
                        log.error(&format!("Failed to publish {}: {}", item.link, e));
                    }
                }
            }
        }

        logger.info(&format!(
            "Done: {} published, {} failed, {} candidates from {} sources",
            report.published, report.failed, report.candidates, report.sources
        ));
        report
    }

    /// Drops links already in the store and repeats within the list.
    async fn unposted(&self, items: Vec<NewsItem>, log: &Logger) -> Vec<NewsItem> {
        let mut seen = HashSet::new();
        let mut fresh = Vec::new();
        for item in items {
            if !seen.insert(item.link.clone()) {
                continue;
            }
            match self.store.has_been_posted(&item.link).await {
                Ok(false) => fresh.push(item),
                Ok(true) => {}
                Err(e) => log.warn(&format!("Skipping {}: store lookup failed: {}", item.link, e)),
            }
        }
        fresh
    }

    fn jitter(&self) -> Duration {
        let (min, max) = (self.config.jitter_min, self.config.jitter_max);
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// The last `limit` items, in reverse order.
// TODO: revisit once feeds are known to be newest-first; this publishes the
// tail of the listing, which for such feeds is the oldest entries.
pub fn select_batch(items: Vec<NewsItem>, limit: usize) -> Vec<NewsItem> {
    let start = items.len().saturating_sub(limit);
    items.into_iter().skip(start).rev().collect()
}
