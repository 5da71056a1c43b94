use std::sync::Mutex;

use async_trait::async_trait;
use nb_core::{Error, Result};
use crate::transport::Transport;

pub use nb_scrapers::test_support::FixtureFetcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Photo { photo_url: String, caption: String },
    Message { text: String, preview: bool },
}

/// Records every send; fails sends whose text contains a configured marker.
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<Sent>>,
    fail_on: Option<String>,
    reject_photos: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_on: Some(marker.to_string()),
            ..Self::default()
        }
    }

    /// Every photo send fails as if Telegram could not fetch the image.
    pub fn rejecting_photos() -> Self {
        Self {
            reject_photos: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn check(&self, text: &str) -> Result<()> {
        match &self.fail_on {
            Some(marker) if text.contains(marker.as_str()) => {
                Err(Error::Transport("chat not found".to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_photo(&self, photo_url: &str, caption: &str) -> Result<()> {
        if self.reject_photos {
            return Err(Error::Transport("wrong file identifier/HTTP URL specified".to_string()));
        }
        self.check(caption)?;
        self.sent.lock().unwrap().push(Sent::Photo {
            photo_url: photo_url.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn send_message(&self, text: &str, preview: bool) -> Result<()> {
        self.check(text)?;
        self.sent.lock().unwrap().push(Sent::Message {
            text: text.to_string(),
            preview,
        });
        Ok(())
    }
}
