use super::prelude::*;
use std::collections::HashMap;

/// Derived, read-only view of the plugin mapping.
#[derive(Debug, Clone, Default)]
pub struct PluginData {
    plugins: Vec<Plugin>,
    tags: Vec<Tag>,
    tag_index: HashMap<String, usize>,
}

impl PluginData {
    /// Plugins in the insertion order of the source mapping.
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Tags in first-seen order, every count is at least 1.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tag_index.get(id).map(|&idx| &self.tags[idx])
    }

    /// Resolves the tag ids of a plugin, unknown ids are dropped.
    pub fn tags_of<'a>(&'a self, plugin: &'a Plugin) -> impl Iterator<Item = &'a Tag> + 'a {
        plugin.tags.iter().filter_map(|id| self.tag(id))
    }
}

pub fn derive_plugin_data(plugins: Vec<Plugin>) -> PluginData {
    let mut tags: Vec<Tag> = vec![];
    let mut tag_index: HashMap<String, usize> = HashMap::new();
    for id in plugins.iter().flat_map(|p| &p.tags) {
        match tag_index.get(id).copied() {
            Some(idx) => {
                tags[idx].count += 1;
            }
            None => {
                tag_index.insert(id.clone(), tags.len());
                tags.push(Tag {
                    id: id.clone(),
                    count: 1,
                });
            }
        }
    }
    log::debug!(
        "Derived {} distinct tags from {} plugins",
        tags.len(),
        plugins.len()
    );
    PluginData {
        plugins,
        tags,
        tag_index,
    }
}

pub fn load_plugin_data<R: PluginRepo>(repo: &R) -> Result<PluginData> {
    let plugins = repo.all_plugins()?;
    Ok(derive_plugin_data(plugins))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use nvc_entities::builders::Builder;

    fn plugin(id: &str, tags: Vec<&str>) -> Plugin {
        Plugin::build().id(id).tags(tags).finish()
    }

    #[test]
    fn count_tags_of_all_plugins() {
        let data = derive_plugin_data(vec![
            plugin("a/b", vec!["colorschemes", "lua"]),
            plugin("c/d", vec!["lua"]),
        ]);
        assert_eq!(data.plugins().len(), 2);
        assert_eq!(
            data.tags(),
            [
                Tag {
                    id: "colorschemes".into(),
                    count: 1
                },
                Tag {
                    id: "lua".into(),
                    count: 2
                },
            ]
        );
        assert_eq!(data.tag("lua").unwrap().color(), TagColor::Yellow);
        assert_eq!(data.tag("colorschemes").unwrap().color(), TagColor::Pink);
        assert!(data.tag("vim").is_none());
    }

    #[test]
    fn sum_of_counts_equals_tag_occurrences_of_plugins() {
        let plugins = vec![
            plugin("a/a", vec!["x", "y", "z"]),
            plugin("b/b", vec![]),
            plugin("c/c", vec!["z"]),
            plugin("d/d", vec!["y", "z"]),
        ];
        let pairs: TagCount = plugins.iter().map(|p| p.tags.len() as TagCount).sum();
        let data = derive_plugin_data(plugins);
        let counted: TagCount = data.tags().iter().map(|t| t.count).sum();
        assert_eq!(counted, pairs);
        assert!(data.tags().iter().all(|t| t.count > 0));
        let ids: Vec<_> = data.tags().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["x", "y", "z"]);
        assert_eq!(data.tag("z").unwrap().count, 3);
    }

    #[test]
    fn keep_plugin_order() {
        let data = derive_plugin_data(vec![plugin("z/z", vec![]), plugin("a/a", vec![])]);
        let ids: Vec<_> = data.plugins().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["z/z", "a/a"]);
    }

    #[test]
    fn drop_unknown_tags_of_a_plugin() {
        let data = derive_plugin_data(vec![plugin("a/b", vec!["lua"])]);
        let other = plugin("c/d", vec!["unknown", "lua"]);
        let resolved: Vec<_> = data.tags_of(&other).map(|t| t.id.as_str()).collect();
        assert_eq!(resolved, ["lua"]);
    }

    #[test]
    fn empty_mapping() {
        let data = derive_plugin_data(vec![]);
        assert!(data.plugins().is_empty());
        assert!(data.tags().is_empty());
    }

    #[test]
    fn load_from_repo() {
        let db = MockDb::default();
        db.plugins
            .borrow_mut()
            .push(plugin("a/b", vec!["colorschemes", "lua"]));
        let data = load_plugin_data(&db).unwrap();
        assert_eq!(data.tags().len(), 2);
    }
}
