use crate::{id::PluginId, time::Timestamp};

/// A plugin enriched with metadata of its hosting repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    pub id: PluginId,
    pub username: String,
    pub repo: String,
    pub link: String,
    pub description: String,
    pub homepage: String,
    pub stars: u64,
    pub open_issues: u64,
    pub subscribers: u64,
    pub forks: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Tag ids in the order they were assigned.
    pub tags: Vec<String>,
}

pub const GITHUB_BASE_URL: &str = "https://github.com";

pub fn github_link(username: &str, repo: &str) -> String {
    format!("{GITHUB_BASE_URL}/{username}/{repo}")
}
