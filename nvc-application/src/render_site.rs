use super::*;
use nvc_core::gateways::site::SiteGateway;
use nvc_site::SiteMeta;

/// Renders all pages from the persisted data and publishes them.
pub async fn render_site<R, S>(repo: &R, site: &S, meta: &SiteMeta) -> Result<usize>
where
    R: PluginRepo + DetailHtmlRepo,
    S: SiteGateway,
{
    let data = usecases::load_plugin_data(repo)?;
    info!(
        "Rendering {} plugins with {} tags",
        data.plugins().len(),
        data.tags().len()
    );
    let pages = nvc_site::render_pages(&data, repo, meta)?;
    let count = pages.len();
    site.publish_pages(pages)
        .await
        .map_err(usecases::Error::Gateway)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::prelude::*;
    use nvc_entities::builders::Builder;

    fn meta() -> SiteMeta {
        SiteMeta {
            title: "nvimcraft".into(),
        }
    }

    #[tokio::test]
    async fn publish_all_pages() {
        init_logging();
        let db = MockDb::default();
        db.replace_plugins(&[
            Plugin::build()
                .id("a/b")
                .tags(vec!["colorschemes", "lua"])
                .finish(),
            Plugin::build().id("c/d").tags(vec!["lua"]).finish(),
        ])
        .unwrap();
        let id: PluginId = "c/d".parse().unwrap();
        db.replace_detail_html(&[(id, "<p>readme</p>".into())])
            .unwrap();
        let site = MockSite::default();

        let count = flows::render_site(&db, &site, &meta()).await.unwrap();
        assert_eq!(count, 6);
        let a_b = site.page("plugin/a/b/index.html").unwrap();
        assert!(a_b.contains(r#"<div class="readme"></div>"#));
        assert!(a_b.contains(r#"class="tag tag-yellow""#));
        let c_d = site.page("plugin/c/d/index.html").unwrap();
        assert!(c_d.contains("<p>readme</p>"));
    }

    #[tokio::test]
    async fn render_an_empty_site() {
        let db = MockDb::default();
        db.replace_plugins(&[]).unwrap();
        let site = MockSite::default();
        let count = flows::render_site(&db, &site, &meta()).await.unwrap();
        assert_eq!(count, 4);
        assert!(site.page("index.html").unwrap().contains("0 plugins"));
    }
}
