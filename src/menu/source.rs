use async_trait::async_trait;
use tracing::{debug, instrument};

use super::dto::MenuResponse;
use super::repo_types::MenuItem;
use crate::error::MenuError;

/// Where a fresh menu comes from when the local snapshot is empty.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuError>;
}

#[derive(Clone)]
pub struct HttpMenuSource {
    client: reqwest::Client,
    url: String,
}

impl HttpMenuSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MenuError::HttpStatus(status.as_u16()));
        }
        let body: MenuResponse = response.json().await?;
        debug!(count = body.menu.len(), "menu fetched");
        Ok(body.menu)
    }
}
