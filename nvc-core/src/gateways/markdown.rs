use async_trait::async_trait;

#[async_trait]
pub trait MarkdownGateway {
    /// Fetches the raw markdown text behind `url`.
    async fn fetch_markdown(&self, url: &str) -> anyhow::Result<String>;
}
