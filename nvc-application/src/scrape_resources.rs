use super::*;
use nvc_core::gateways::markdown::MarkdownGateway;

/// Fetches all sources, extracts and sorts their resources
/// and replaces the persisted resource list.
pub async fn scrape_resources<G, R>(gateway: &G, repo: &R, sources: &[String]) -> Result<Vec<Resource>>
where
    G: MarkdownGateway,
    R: ResourceRepo,
{
    let documents = try_join_all(sources.iter().map(|url| gateway.fetch_markdown(url)))
        .await
        .map_err(usecases::Error::Gateway)?;
    let mut resources = vec![];
    for (url, markdown) in sources.iter().zip(&documents) {
        let extracted = usecases::extract_resources(markdown).inspect_err(|err| {
            warn!("Failed to extract resources from {url}: {err}");
        })?;
        info!("Extracted {} resources from {url}", extracted.len());
        resources.extend(extracted);
    }
    let resources = usecases::sort_resources(resources);
    usecases::store_resources(repo, &resources)?;
    Ok(resources)
}
