use super::*;
use nvc_core::gateways::github::GithubGateway;

/// Renders the README of every plugin into its detail fragment.
///
/// Plugins without a README get no fragment.
pub async fn render_readmes<G, R>(github: &G, repo: &R) -> Result<usize>
where
    G: GithubGateway,
    R: PluginRepo + DetailHtmlRepo,
{
    let plugins = repo.all_plugins()?;
    let readmes = try_join_all(
        plugins
            .iter()
            .map(|p| github.readme_markdown(&p.username, &p.repo)),
    )
    .await
    .map_err(usecases::Error::Gateway)?;
    let html: Vec<_> = plugins
        .into_iter()
        .zip(readmes)
        .filter_map(|(plugin, readme)| {
            readme.map(|markdown| (plugin.id, usecases::render_readme(&markdown)))
        })
        .collect();
    usecases::store_detail_html(repo, &html)?;
    Ok(html.len())
}
