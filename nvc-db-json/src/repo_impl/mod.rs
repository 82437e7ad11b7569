use super::*;
use nvc_boundary as json;
use nvc_core::{entities::*, repositories::*};

fn from_conversion_err(err: json::ConversionError) -> Error {
    Error::Other(err.into())
}

impl ResourceRepo for JsonDb {
    fn replace_resources(&self, resources: &[Resource]) -> Result<()> {
        let list = json::ResourceList::from(resources.to_vec());
        self.write_file(RESOURCES_FILE, &list)
    }

    fn all_resources(&self) -> Result<Vec<Resource>> {
        let list: json::ResourceList = self.read_file(RESOURCES_FILE)?;
        Ok(list.into())
    }
}

impl PluginRepo for JsonDb {
    fn all_plugins(&self) -> Result<Vec<Plugin>> {
        let db: json::PluginDb = self.read_file(PLUGINS_FILE)?;
        for (key, plugin) in &db.plugins {
            if *key != plugin.id {
                log::warn!("Plugin {} is stored with key {key}", plugin.id);
            }
        }
        Vec::try_from(db).map_err(from_conversion_err)
    }

    fn replace_plugins(&self, plugins: &[Plugin]) -> Result<()> {
        let db = json::PluginDb::from(plugins.to_vec());
        self.write_file(PLUGINS_FILE, &db)
    }
}

impl DetailHtmlRepo for JsonDb {
    fn get_detail_html(&self, id: &PluginId) -> Result<Option<String>> {
        if let Some(cache) = &*self.detail_html.read() {
            return Ok(cache.get(id.as_str()).cloned());
        }
        let cache = match self.read_file::<json::HtmlDb>(DETAIL_HTML_FILE) {
            Ok(db) => db.html.into_iter().collect(),
            Err(Error::NotFound) => {
                log::debug!("No {DETAIL_HTML_FILE} in {}", self.dir.display());
                DetailHtmlCache::default()
            }
            Err(err) => return Err(err),
        };
        let html = cache.get(id.as_str()).cloned();
        *self.detail_html.write() = Some(cache);
        Ok(html)
    }

    fn replace_detail_html(&self, html: &[(PluginId, String)]) -> Result<()> {
        let db = json::HtmlDb {
            html: html
                .iter()
                .map(|(id, html)| (id.to_string(), html.clone()))
                .collect(),
        };
        self.write_file(DETAIL_HTML_FILE, &db)?;
        *self.detail_html.write() = Some(db.html.into_iter().collect());
        Ok(())
    }
}
