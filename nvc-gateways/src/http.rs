use crate::USER_AGENT;
use anyhow::{Context, Result};
use async_trait::async_trait;
use nvc_core::gateways::markdown::MarkdownGateway;

/// Fetches markdown documents over plain HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpMarkdown {
    client: reqwest::Client,
}

impl HttpMarkdown {
    pub fn try_new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MarkdownGateway for HttpMarkdown {
    async fn fetch_markdown(&self, url: &str) -> Result<String> {
        log::debug!("Fetching {url}");
        let text = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?
            .error_for_status()?
            .text()
            .await
            .with_context(|| format!("Failed to read response body of {url}"))?;
        Ok(text)
    }
}
