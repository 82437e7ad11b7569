// Low-level persistence access traits.
// Each repository is responsible for a single data file.
// Related records are only referenced by their id.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait ResourceRepo {
    /// Replaces all persisted resources, keeping the given order.
    fn replace_resources(&self, resources: &[Resource]) -> Result<()>;
    fn all_resources(&self) -> Result<Vec<Resource>>;
}

pub trait PluginRepo {
    /// All plugins in the insertion order of the persisted mapping.
    fn all_plugins(&self) -> Result<Vec<Plugin>>;
    fn replace_plugins(&self, plugins: &[Plugin]) -> Result<()>;
}

pub trait DetailHtmlRepo {
    /// The pre-rendered detail fragment of a plugin, if any.
    fn get_detail_html(&self, id: &PluginId) -> Result<Option<String>>;
    fn replace_detail_html(&self, html: &[(PluginId, String)]) -> Result<()>;
}
