use crate::id::PluginId;

/// A plugin candidate discovered in a markdown list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub username: String,
    pub repo: String,
    /// Normalized tag ids, not deduplicated.
    pub tags: Vec<String>,
}

impl Resource {
    pub fn id(&self) -> PluginId {
        PluginId::new(&self.username, &self.repo)
    }
}
