use super::prelude::*;
use crate::{
    markdown::{tokenize, Block, Inline},
    tag,
};
use lazy_static::lazy_static;
use regex::Regex;

/// Headings whose lists never contain plugins.
const SKIPPED_HEADINGS: [&str; 2] = ["contents", "vim"];

const GITHUB_HOST: &str = "github.com";
const HTTPS_PREFIX: &str = "https://github.com/";
const HTTP_PREFIX: &str = "http://github.com";

lazy_static! {
    static ref URL_FRAGMENT: Regex = Regex::new("#.*$").unwrap();
}

/// Extracts plugin candidates from an awesome-list style markdown document.
///
/// Every list item is tagged with the heading in effect above it
/// (of any level). Only the first inline node of an item is considered
/// as the identity link of the plugin.
pub fn extract_resources(markdown: &str) -> Result<Vec<Resource>> {
    let Scan { resources, .. } = tokenize(markdown)
        .into_iter()
        .try_fold(Scan::default(), Scan::visit)?;
    log::debug!("Extracted {} resources", resources.len());
    Ok(resources)
}

#[derive(Default)]
struct Scan {
    current_heading: String,
    resources: Vec<Resource>,
}

impl Scan {
    fn visit(mut self, block: Block) -> Result<Self> {
        match block {
            Block::Heading { text } => {
                self.current_heading = text.to_lowercase();
            }
            Block::List { items } => {
                for group in items.iter().flat_map(|item| &item.groups) {
                    if let Some(resource) = resource_from_group(&self.current_heading, group)? {
                        self.resources.push(resource);
                    }
                }
            }
            Block::Other => {}
        }
        Ok(self)
    }
}

fn resource_from_group(heading: &str, group: &[Inline]) -> Result<Option<Resource>> {
    if group.is_empty() || SKIPPED_HEADINGS.contains(&heading) {
        return Ok(None);
    }
    let Some(Inline::Link { href, .. }) = group.first() else {
        return Ok(None);
    };
    if !href.contains(GITHUB_HOST) {
        return Ok(None);
    }
    let (username, repo) = parse_github_link(href)?;
    Ok(Some(Resource {
        username,
        repo,
        tags: vec![tag::normalize(heading)],
    }))
}

/// Splits a GitHub URL into `(username, repo)`.
///
/// Anything after the repository segment is ignored,
/// a `#fragment` is stripped from the repository name.
pub fn parse_github_link(href: &str) -> Result<(String, String)> {
    let path = href
        .strip_prefix(HTTPS_PREFIX)
        .or_else(|| {
            href.strip_prefix(HTTP_PREFIX)
                .map(|path| path.trim_start_matches('/'))
        })
        .unwrap_or(href);
    let mut segments = path.split('/');
    let username = segments.next().unwrap_or_default();
    let repo = segments
        .next()
        .map(|repo| URL_FRAGMENT.replace(repo, ""))
        .unwrap_or_default();
    if username.is_empty() || repo.is_empty() {
        return Err(Error::MalformedLink {
            href: href.to_string(),
        });
    }
    Ok((username.to_string(), repo.into_owned()))
}
