use async_trait::async_trait;
use std::time::Duration;

use crate::error::{AppError, Result};

use super::news_models::NewsItem;

/// Remote collaborator that serves news items.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<NewsItem>>;
}

/// `NewsSource` backed by the news HTTP API. One attempt per call.
#[derive(Clone)]
pub struct HttpNewsClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNewsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl NewsSource for HttpNewsClient {
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<NewsItem>> {
        let url = format!("{}/news", self.base_url);
        tracing::debug!(%url, category, "Fetching news");

        let response = self
            .client
            .get(&url)
            .query(&[("category", category)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "news service responded with {}",
                status
            )));
        }

        Ok(response.json::<Vec<NewsItem>>().await?)
    }
}
