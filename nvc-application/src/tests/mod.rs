pub mod prelude {

    use async_trait::async_trait;
    use std::{cell::RefCell, collections::HashMap, sync::Mutex};

    pub use nvc_core::{
        entities::*,
        gateways::{
            github::{GithubGateway, RepoMetadata},
            markdown::MarkdownGateway,
            site::{Page, SiteGateway},
        },
        repositories::{Error as RepoError, *},
    };

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub fn metadata(stars: u64, updated_at: i64) -> RepoMetadata {
        RepoMetadata {
            description: Some("A plugin".into()),
            homepage: None,
            stars,
            open_issues: 0,
            subscribers: 0,
            forks: 0,
            created_at: Timestamp::from_seconds(0),
            updated_at: Timestamp::from_seconds(updated_at),
        }
    }

    /// In-memory storage, files that were never written are missing.
    #[derive(Default)]
    pub struct MockDb {
        pub resources: RefCell<Option<Vec<Resource>>>,
        pub plugins: RefCell<Option<Vec<Plugin>>>,
        pub html: RefCell<HashMap<PluginId, String>>,
    }

    impl ResourceRepo for MockDb {
        fn replace_resources(&self, resources: &[Resource]) -> Result<()> {
            *self.resources.borrow_mut() = Some(resources.to_vec());
            Ok(())
        }
        fn all_resources(&self) -> Result<Vec<Resource>> {
            self.resources.borrow().clone().ok_or(RepoError::NotFound)
        }
    }

    impl PluginRepo for MockDb {
        fn all_plugins(&self) -> Result<Vec<Plugin>> {
            self.plugins.borrow().clone().ok_or(RepoError::NotFound)
        }
        fn replace_plugins(&self, plugins: &[Plugin]) -> Result<()> {
            *self.plugins.borrow_mut() = Some(plugins.to_vec());
            Ok(())
        }
    }

    impl DetailHtmlRepo for MockDb {
        fn get_detail_html(&self, id: &PluginId) -> Result<Option<String>> {
            Ok(self.html.borrow().get(id).cloned())
        }
        fn replace_detail_html(&self, html: &[(PluginId, String)]) -> Result<()> {
            *self.html.borrow_mut() = html.iter().cloned().collect();
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MockMarkdown {
        documents: HashMap<String, String>,
    }

    impl MockMarkdown {
        pub fn with(mut self, url: &str, markdown: &str) -> Self {
            self.documents.insert(url.into(), markdown.into());
            self
        }
    }

    #[async_trait]
    impl MarkdownGateway for MockMarkdown {
        async fn fetch_markdown(&self, url: &str) -> anyhow::Result<String> {
            self.documents
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("404 Not Found: {url}"))
        }
    }

    #[derive(Default)]
    pub struct MockGithub {
        repos: HashMap<String, RepoMetadata>,
        readmes: HashMap<String, String>,
    }

    impl MockGithub {
        pub fn with_repo(mut self, id: &str, metadata: RepoMetadata) -> Self {
            self.repos.insert(id.into(), metadata);
            self
        }
        pub fn with_readme(mut self, id: &str, markdown: &str) -> Self {
            self.readmes.insert(id.into(), markdown.into());
            self
        }
    }

    #[async_trait]
    impl GithubGateway for MockGithub {
        async fn repo_metadata(&self, username: &str, repo: &str) -> anyhow::Result<RepoMetadata> {
            self.repos
                .get(&format!("{username}/{repo}"))
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("404 Not Found: {username}/{repo}"))
        }
        async fn readme_markdown(
            &self,
            username: &str,
            repo: &str,
        ) -> anyhow::Result<Option<String>> {
            Ok(self.readmes.get(&format!("{username}/{repo}")).cloned())
        }
    }

    #[derive(Default)]
    pub struct MockSite {
        pages: Mutex<Vec<Page>>,
    }

    impl MockSite {
        pub fn page(&self, path: &str) -> Option<String> {
            let pages = self.pages.lock().unwrap();
            pages.iter().find(|p| p.path == path).map(|p| p.html.clone())
        }
    }

    #[async_trait]
    impl SiteGateway for MockSite {
        async fn publish_pages(&self, pages: Vec<Page>) -> anyhow::Result<()> {
            self.pages.lock().unwrap().extend(pages);
            Ok(())
        }
    }
}
