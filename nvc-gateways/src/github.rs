use crate::USER_AGENT;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use nvc_core::{
    entities::Timestamp,
    gateways::github::{GithubGateway, RepoMetadata},
};
use reqwest::{header, RequestBuilder, StatusCode};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";

/// Client of the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubApi {
    pub fn try_new(base_url: &str, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn repo_url(&self, username: &str, repo: &str) -> String {
        format!("{}/repos/{username}/{repo}", self.base_url)
    }

    fn get(&self, url: &str, media_type: &str) -> RequestBuilder {
        let req = self.client.get(url).header(header::ACCEPT, media_type);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl GithubGateway for GithubApi {
    async fn repo_metadata(&self, username: &str, repo: &str) -> Result<RepoMetadata> {
        let url = self.repo_url(username, repo);
        log::debug!("Fetching repository metadata from {url}");
        let res = self
            .get(&url, JSON_MEDIA_TYPE)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;
        let status = res.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP {status} from {url}"));
        }
        let repo: GithubRepo = res
            .json()
            .await
            .with_context(|| format!("Failed to parse repository metadata from {url}"))?;
        repo.try_into()
    }

    async fn readme_markdown(&self, username: &str, repo: &str) -> Result<Option<String>> {
        let url = format!("{}/readme", self.repo_url(username, repo));
        log::debug!("Fetching README from {url}");
        let res = self
            .get(&url, RAW_MEDIA_TYPE)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;
        match res.status() {
            StatusCode::NOT_FOUND => {
                log::warn!("No README found for {username}/{repo}");
                Ok(None)
            }
            status if status.is_success() => Ok(Some(res.text().await?)),
            status => Err(anyhow!("HTTP {status} from {url}")),
        }
    }
}

/// The subset of `GET /repos/{owner}/{repo}` that is kept.
#[derive(Debug, Deserialize)]
struct GithubRepo {
    description: Option<String>,
    homepage: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    open_issues_count: u64,
    #[serde(default)]
    subscribers_count: u64,
    #[serde(default)]
    forks_count: u64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<GithubRepo> for RepoMetadata {
    type Error = anyhow::Error;
    fn try_from(from: GithubRepo) -> Result<Self> {
        let GithubRepo {
            description,
            homepage,
            stargazers_count,
            open_issues_count,
            subscribers_count,
            forks_count,
            created_at,
            updated_at,
        } = from;
        Ok(Self {
            description,
            homepage: homepage.filter(|h| !h.is_empty()),
            stars: stargazers_count,
            open_issues: open_issues_count,
            subscribers: subscribers_count,
            forks: forks_count,
            created_at: Timestamp::parse_rfc3339(&created_at)?,
            updated_at: Timestamp::parse_rfc3339(&updated_at)?,
        })
    }
}
