use crate::util::sort::ByUsernameAndRepo;

mod derive_plugin_data;
mod enrich_plugins;
mod error;
mod extract_resources;


pub use self::{derive_plugin_data::*, enrich_plugins::*, error::Error, extract_resources::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
use self::prelude::*;

/// Sorts resources by username and repo, duplicates are kept.
pub fn sort_resources(mut resources: Vec<Resource>) -> Vec<Resource> {
    resources.sort_by_username_and_repo();
    resources
}

pub fn store_resources<R: ResourceRepo>(repo: &R, resources: &[Resource]) -> Result<()> {
    repo.replace_resources(resources)?;
    log::info!("Stored {} resources", resources.len());
    Ok(())
}

pub fn store_plugins<R: PluginRepo>(repo: &R, plugins: &[Plugin]) -> Result<()> {
    repo.replace_plugins(plugins)?;
    log::info!("Stored {} plugins", plugins.len());
    Ok(())
}

/// Renders a README to the detail fragment of a plugin page.
pub fn render_readme(markdown: &str) -> String {
    crate::markdown::render_html(markdown)
}

pub fn store_detail_html<R: DetailHtmlRepo>(repo: &R, html: &[(PluginId, String)]) -> Result<()> {
    repo.replace_detail_html(html)?;
    log::info!("Stored {} detail fragments", html.len());
    Ok(())
}

/// The detail fragment of a plugin or an empty one if there is none.
pub fn detail_html_or_empty<R: DetailHtmlRepo>(repo: &R, id: &PluginId) -> Result<String> {
    match repo.get_detail_html(id) {
        Ok(Some(html)) => Ok(html),
        Ok(None) | Err(RepoError::NotFound) => {
            log::debug!("No detail HTML for {id}");
            Ok(String::new())
        }
        Err(err) => Err(err.into()),
    }
}
