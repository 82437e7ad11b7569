use super::prelude::*;
use crate::gateways::github::RepoMetadata;
use std::collections::HashMap;

/// A unique plugin key with the merged tags of all its resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginCandidate {
    pub id: PluginId,
    pub username: String,
    pub repo: String,
    pub tags: Vec<String>,
}

/// Groups resources by `username/repo` in first-seen order.
///
/// Tags of duplicates are appended in order, repeated tags are dropped.
pub fn merge_resources(resources: Vec<Resource>) -> Vec<PluginCandidate> {
    let mut candidates: Vec<PluginCandidate> = Vec::with_capacity(resources.len());
    let mut index: HashMap<PluginId, usize> = HashMap::new();
    for Resource {
        username,
        repo,
        tags,
    } in resources
    {
        let id = PluginId::new(&username, &repo);
        let candidate = match index.get(&id).copied() {
            Some(idx) => &mut candidates[idx],
            None => {
                index.insert(id.clone(), candidates.len());
                candidates.push(PluginCandidate {
                    id,
                    username,
                    repo,
                    tags: vec![],
                });
                let last = candidates.len() - 1;
                &mut candidates[last]
            }
        };
        for tag in tags {
            if !candidate.tags.contains(&tag) {
                candidate.tags.push(tag);
            }
        }
    }
    candidates
}

pub fn plugin_from_metadata(candidate: PluginCandidate, metadata: RepoMetadata) -> Plugin {
    let PluginCandidate {
        id,
        username,
        repo,
        tags,
    } = candidate;
    let RepoMetadata {
        description,
        homepage,
        stars,
        open_issues,
        subscribers,
        forks,
        created_at,
        updated_at,
    } = metadata;
    Plugin {
        link: github_link(&username, &repo),
        id,
        username,
        repo,
        description: description.unwrap_or_default(),
        homepage: homepage.unwrap_or_default(),
        stars,
        open_issues,
        subscribers,
        forks,
        created_at,
        updated_at,
        tags,
    }
}
