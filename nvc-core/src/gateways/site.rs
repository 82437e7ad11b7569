use async_trait::async_trait;

/// A rendered HTML document and its path relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
    pub html: String,
}

#[async_trait]
pub trait SiteGateway {
    /// Publishes all pages, the first failure aborts.
    async fn publish_pages(&self, pages: Vec<Page>) -> anyhow::Result<()>;
}
