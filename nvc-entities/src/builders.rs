pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{plugin_builder::*, resource_builder::*};

pub mod plugin_builder {

    use super::*;
    use crate::{
        id::PluginId,
        plugin::{github_link, Plugin},
        time::Timestamp,
    };

    #[derive(Debug)]
    pub struct PluginBuild {
        plugin: Plugin,
    }

    impl PluginBuild {
        /// Sets id, username, repo and link at once.
        pub fn id(mut self, id: &str) -> Self {
            let (username, repo) = id.split_once('/').unwrap_or((id, ""));
            self.plugin.id = PluginId::new(username, repo);
            self.plugin.username = username.into();
            self.plugin.repo = repo.into();
            self.plugin.link = github_link(username, repo);
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.plugin.description = desc.into();
            self
        }
        pub fn homepage(mut self, homepage: &str) -> Self {
            self.plugin.homepage = homepage.into();
            self
        }
        pub fn stars(mut self, stars: u64) -> Self {
            self.plugin.stars = stars;
            self
        }
        pub fn open_issues(mut self, open_issues: u64) -> Self {
            self.plugin.open_issues = open_issues;
            self
        }
        pub fn created_at(mut self, seconds: i64) -> Self {
            self.plugin.created_at = Timestamp::from_seconds(seconds);
            self
        }
        pub fn updated_at(mut self, seconds: i64) -> Self {
            self.plugin.updated_at = Timestamp::from_seconds(seconds);
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.plugin.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Plugin {
            self.plugin
        }
    }

    impl Builder for Plugin {
        type Build = PluginBuild;
        fn build() -> Self::Build {
            Self::Build {
                plugin: Plugin {
                    id: PluginId::default(),
                    username: "".into(),
                    repo: "".into(),
                    link: "".into(),
                    description: "".into(),
                    homepage: "".into(),
                    stars: 0,
                    open_issues: 0,
                    subscribers: 0,
                    forks: 0,
                    created_at: Timestamp::from_seconds(0),
                    updated_at: Timestamp::from_seconds(0),
                    tags: vec![],
                },
            }
        }
    }
}

pub mod resource_builder {

    use super::*;
    use crate::resource::Resource;

    #[derive(Debug)]
    pub struct ResourceBuild {
        resource: Resource,
    }

    impl ResourceBuild {
        pub fn username(mut self, username: &str) -> Self {
            self.resource.username = username.into();
            self
        }
        pub fn repo(mut self, repo: &str) -> Self {
            self.resource.repo = repo.into();
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.resource.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Resource {
            self.resource
        }
    }

    impl Builder for Resource {
        type Build = ResourceBuild;
        fn build() -> Self::Build {
            Self::Build {
                resource: Resource {
                    username: "".into(),
                    repo: "".into(),
                    tags: vec![],
                },
            }
        }
    }
}
