pub mod error;
pub mod filter;
pub mod links;
pub mod logging;
pub mod sources;
pub mod storage;
pub mod types;

pub use error::Error;
pub use filter::is_political;
pub use storage::PostedStore;
pub use types::{NewsItem, PostedRecord, Source};

pub type Result<T> = std::result::Result<T, Error>;
