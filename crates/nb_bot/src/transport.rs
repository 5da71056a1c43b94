use async_trait::async_trait;
use nb_core::{Error, Result};
use teloxide::prelude::*;
use teloxide::types::{InputFile, LinkPreviewOptions, ParseMode, Recipient};

/// Outbound side of the messaging channel.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a photo by URL with an HTML caption.
    async fn send_photo(&self, photo_url: &str, caption: &str) -> Result<()>;

    /// Sends an HTML text message, optionally with the web page preview.
    async fn send_message(&self, text: &str, preview: bool) -> Result<()>;
}

/// Posts into a single Telegram chat or channel.
pub struct TelegramTransport {
    bot: Bot,
    chat: Recipient,
}

impl TelegramTransport {
    pub fn new(bot: Bot, channel_id: &str) -> Result<Self> {
        Ok(Self {
            bot,
            chat: parse_recipient(channel_id)?,
        })
    }
}

/// `@channelname` or a numeric chat id such as `-1001234567890`.
pub fn parse_recipient(channel_id: &str) -> Result<Recipient> {
    let channel_id = channel_id.trim();
    if channel_id.starts_with('@') && channel_id.len() > 1 {
        return Ok(Recipient::ChannelUsername(channel_id.to_string()));
    }

    channel_id
        .parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|_| Error::Config(format!("Invalid channel id: {:?}", channel_id)))
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_photo(&self, photo_url: &str, caption: &str) -> Result<()> {
        let photo = InputFile::url(url::Url::parse(photo_url)?);

        self.bot
            .send_photo(self.chat.clone(), photo)
            .caption(caption)
            .parse_mode(ParseMode::Html)
            .await
            .map(|_| ())
            .map_err(|e| Error::Transport(format!("Telegram send photo failed: {}", e)))
    }

    async fn send_message(&self, text: &str, preview: bool) -> Result<()> {
        let mut request = self
            .bot
            .send_message(self.chat.clone(), text)
            .parse_mode(ParseMode::Html);

        if !preview {
            request = request.link_preview_options(LinkPreviewOptions {
                is_disabled: true,
                url: None,
                prefer_small_media: false,
                prefer_large_media: false,
                show_above_text: false,
            });
        }

        request
            .await
            .map(|_| ())
            .map_err(|e| Error::Transport(format!("Telegram send failed: {}", e)))
    }
}
