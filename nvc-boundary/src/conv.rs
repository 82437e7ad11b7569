use super::*;
use e::{id::PluginIdParseError, time::TimestampParseError};
use nvc_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Id(#[from] PluginIdParseError),
    #[error(transparent)]
    Timestamp(#[from] TimestampParseError),
}

impl From<e::resource::Resource> for Resource {
    fn from(from: e::resource::Resource) -> Self {
        let e::resource::Resource {
            username,
            repo,
            tags,
        } = from;
        Self {
            username,
            repo,
            tags,
        }
    }
}

impl From<Resource> for e::resource::Resource {
    fn from(from: Resource) -> Self {
        let Resource {
            username,
            repo,
            tags,
        } = from;
        Self {
            username,
            repo,
            tags,
        }
    }
}

impl From<e::plugin::Plugin> for Plugin {
    fn from(from: e::plugin::Plugin) -> Self {
        let e::plugin::Plugin {
            id,
            username,
            repo,
            link,
            description,
            homepage,
            stars,
            open_issues,
            subscribers,
            forks,
            created_at,
            updated_at,
            tags,
        } = from;
        Self {
            id: id.into(),
            username,
            repo,
            link,
            description: Some(description),
            homepage: Some(homepage),
            stars,
            open_issues,
            subscribers,
            forks,
            created_at: created_at.format_rfc3339(),
            updated_at: updated_at.format_rfc3339(),
            tags,
        }
    }
}

impl TryFrom<Plugin> for e::plugin::Plugin {
    type Error = ConversionError;
    fn try_from(from: Plugin) -> Result<Self, Self::Error> {
        let Plugin {
            id,
            username,
            repo,
            link,
            description,
            homepage,
            stars,
            open_issues,
            subscribers,
            forks,
            created_at,
            updated_at,
            tags,
        } = from;
        Ok(Self {
            id: id.parse()?,
            username,
            repo,
            link,
            description: description.unwrap_or_default(),
            homepage: homepage.unwrap_or_default(),
            stars,
            open_issues,
            subscribers,
            forks,
            created_at: created_at.parse()?,
            updated_at: updated_at.parse()?,
            tags,
        })
    }
}

impl From<Vec<e::resource::Resource>> for ResourceList {
    fn from(from: Vec<e::resource::Resource>) -> Self {
        let resources = from.into_iter().map(Into::into).collect();
        Self { resources }
    }
}

impl From<ResourceList> for Vec<e::resource::Resource> {
    fn from(from: ResourceList) -> Self {
        from.resources.into_iter().map(Into::into).collect()
    }
}

impl From<Vec<e::plugin::Plugin>> for PluginDb {
    fn from(from: Vec<e::plugin::Plugin>) -> Self {
        let plugins = from
            .into_iter()
            .map(|p| (p.id.to_string(), Plugin::from(p)))
            .collect();
        Self { plugins }
    }
}

impl TryFrom<PluginDb> for Vec<e::plugin::Plugin> {
    type Error = ConversionError;
    fn try_from(from: PluginDb) -> Result<Self, Self::Error> {
        from.plugins
            .into_iter()
            .map(|(_, p)| e::plugin::Plugin::try_from(p))
            .collect()
    }
}
