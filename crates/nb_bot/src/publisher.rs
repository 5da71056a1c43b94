use std::sync::Arc;

use nb_core::{NewsItem, PostedStore, Result};
use nb_scrapers::{extract_preview_image, PageFetcher};
use crate::caption::build_caption;
use crate::transport::Transport;

/// Sends one item to the channel and records it as posted.
pub struct Publisher {
    fetcher: Arc<dyn PageFetcher>,
    transport: Arc<dyn Transport>,
    store: Arc<dyn PostedStore>,
}

impl Publisher {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        transport: Arc<dyn Transport>,
        store: Arc<dyn PostedStore>,
    ) -> Self {
        Self {
            fetcher,
            transport,
            store,
        }
    }

    /// Posts `item` as a photo when a preview image resolves, otherwise as a
    /// text message. A rejected photo falls back to text. The link is
    /// recorded only after a successful send.
    pub async fn publish(&self, item: &NewsItem, source_name: &str) -> Result<()> {
        let link = item.link.trim();
        let image = extract_preview_image(self.fetcher.as_ref(), link).await;
        let caption = build_caption(item, source_name);

        if let Err(e) = self.send(image.as_deref(), &caption, link).await {
            tracing::error!("Send failed for {}: {}", link, e);
            return Err(e);
        }

        if let Err(e) = self.store.mark_posted(link, source_name).await {
            tracing::error!("Sent but not recorded, may be posted again next pass: {}: {}", link, e);
            return Err(e);
        }
        tracing::info!("Posted: {} | {}", item.title.trim(), link);
        Ok(())
    }

    async fn send(&self, image: Option<&str>, caption: &str, link: &str) -> Result<()> {
        if let Some(photo_url) = image {
            match self.transport.send_photo(photo_url, caption).await {
                Ok(()) => return Ok(()),
                Err(e) => tracing::warn!("Photo {} rejected for {}, sending text: {}", photo_url, link, e),
            }
        }
        self.transport.send_message(caption, true).await
    }
}
