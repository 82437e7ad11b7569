use super::*;
use nvc_core::gateways::github::GithubGateway;

/// Looks up the repository metadata of all persisted resources
/// and replaces the persisted plugin mapping.
pub async fn enrich_plugins<G, R>(github: &G, repo: &R) -> Result<Vec<Plugin>>
where
    G: GithubGateway,
    R: ResourceRepo + PluginRepo,
{
    let resources = repo.all_resources()?;
    let resource_count = resources.len();
    let candidates = usecases::merge_resources(resources);
    info!(
        "Enriching {} plugins from {resource_count} resources",
        candidates.len()
    );
    let metadata = try_join_all(
        candidates
            .iter()
            .map(|c| github.repo_metadata(&c.username, &c.repo)),
    )
    .await
    .map_err(usecases::Error::Gateway)?;
    let plugins: Vec<_> = candidates
        .into_iter()
        .zip(metadata)
        .map(|(candidate, metadata)| usecases::plugin_from_metadata(candidate, metadata))
        .collect();
    usecases::store_plugins(repo, &plugins)?;
    Ok(plugins)
}
