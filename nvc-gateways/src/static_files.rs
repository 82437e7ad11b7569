use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use futures::future::try_join_all;
use nvc_core::gateways::site::{Page, SiteGateway};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Writes pages as files below an output directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    out_dir: PathBuf,
}

impl StaticFiles {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn file_path(&self, page: &Page) -> Result<PathBuf> {
        let rel = Path::new(page.path.trim_start_matches('/'));
        if rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            bail!("Invalid page path '{}'", page.path);
        }
        Ok(self.out_dir.join(rel))
    }
}

async fn write_file(path: PathBuf, html: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

#[async_trait]
impl SiteGateway for StaticFiles {
    async fn publish_pages(&self, pages: Vec<Page>) -> Result<()> {
        let count = pages.len();
        let writes = pages
            .into_iter()
            .map(|page| Ok(write_file(self.file_path(&page)?, page.html)))
            .collect::<Result<Vec<_>>>()?;
        try_join_all(writes).await?;
        log::info!("Wrote {count} pages to {}", self.out_dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn page(path: &str, html: &str) -> Page {
        Page {
            path: path.into(),
            html: html.into(),
        }
    }

    #[tokio::test]
    async fn write_pages_into_nested_directories() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let site = StaticFiles::new(dir);
        site.publish_pages(vec![
            page("index.html", "<p>index</p>"),
            page("/plugin/a/b/index.html", "<p>a/b</p>"),
        ])
        .await
        .unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.join("index.html")).unwrap(),
            "<p>index</p>"
        );
        assert_eq!(
            std::fs::read_to_string(dir.join("plugin/a/b/index.html")).unwrap(),
            "<p>a/b</p>"
        );
    }

    #[tokio::test]
    async fn reject_paths_outside_of_the_output_directory() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("site");
        let site = StaticFiles::new(&dir);
        let res = site
            .publish_pages(vec![page("../escape/index.html", "")])
            .await;
        assert!(res.is_err());
        assert!(!dir.exists());
    }
}
