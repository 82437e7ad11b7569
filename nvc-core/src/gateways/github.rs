use crate::entities::Timestamp;
use async_trait::async_trait;

/// Metadata of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMetadata {
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub stars: u64,
    pub open_issues: u64,
    pub subscribers: u64,
    pub forks: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[async_trait]
pub trait GithubGateway {
    async fn repo_metadata(&self, username: &str, repo: &str) -> anyhow::Result<RepoMetadata>;

    /// Raw README markdown, `None` if the repository has no README.
    async fn readme_markdown(&self, username: &str, repo: &str) -> anyhow::Result<Option<String>>;
}
