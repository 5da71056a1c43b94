pub mod caption;
pub mod commands;
pub mod job;
pub mod publisher;
pub mod transport;

pub use commands::Command;
pub use job::{JobConfig, NewsJob, RunReport};
pub use publisher::Publisher;
pub use transport::{TelegramTransport, Transport};

#[cfg(test)]
pub(crate) mod test_support;
