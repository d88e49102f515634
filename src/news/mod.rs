pub mod news_client;
pub mod news_models;

pub use news_client::{HttpNewsClient, NewsSource};
pub use news_models::{NewsId, NewsItem};
