#![deny(missing_debug_implementations)]

use nvc_core::{
    entities::*,
    gateways::site::Page,
    repositories::DetailHtmlRepo,
    usecases::{self, PluginData},
    util::sort::{ByMode, SortMode},
};

pub mod view;

#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub title: String,
}

/// Renders the complete static site.
///
/// Produces one listing per sort mode, the about page and
/// one detail page per plugin.
pub fn render_pages<R: DetailHtmlRepo>(
    data: &PluginData,
    detail_html: &R,
    meta: &SiteMeta,
) -> Result<Vec<Page>, usecases::Error> {
    let mut pages = Vec::with_capacity(SortMode::ALL.len() + 1 + data.plugins().len());
    for mode in SortMode::ALL {
        let mut plugins: Vec<&Plugin> = data.plugins().iter().collect();
        plugins.sort_by_mode(mode);
        pages.push(Page {
            path: view::listing_path(mode).to_string(),
            html: view::listing(meta, data, mode, &plugins).into_string(),
        });
    }
    pages.push(Page {
        path: "about/index.html".to_string(),
        html: view::about(meta, data).into_string(),
    });
    for plugin in data.plugins() {
        let html = usecases::detail_html_or_empty(detail_html, &plugin.id)?;
        pages.push(Page {
            path: view::plugin_path(plugin),
            html: view::plugin(meta, data, plugin, &html).into_string(),
        });
    }
    log::debug!("Rendered {} pages", pages.len());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvc_core::{repositories as repo, usecases::derive_plugin_data};
    use nvc_entities::builders::Builder;
    use std::collections::HashMap;

    #[derive(Default)]
    struct DetailHtml(HashMap<String, String>);

    impl DetailHtmlRepo for DetailHtml {
        fn get_detail_html(&self, id: &PluginId) -> repo::Result<Option<String>> {
            Ok(self.0.get(id.as_str()).cloned())
        }
        fn replace_detail_html(&self, _: &[(PluginId, String)]) -> repo::Result<()> {
            unimplemented!()
        }
    }

    fn meta() -> SiteMeta {
        SiteMeta {
            title: "nvimcraft".into(),
        }
    }

    fn data() -> PluginData {
        derive_plugin_data(vec![
            Plugin::build()
                .id("a/b")
                .description("<b>bold</b> plugin")
                .stars(5)
                .created_at(2_000)
                .updated_at(1_000)
                .tags(vec!["colorschemes", "lua"])
                .finish(),
            Plugin::build()
                .id("c/d")
                .stars(10)
                .created_at(1_000)
                .updated_at(2_000)
                .tags(vec!["lua"])
                .finish(),
        ])
    }

    fn page<'a>(pages: &'a [Page], path: &str) -> &'a str {
        &pages.iter().find(|p| p.path == path).unwrap().html
    }

    #[test]
    fn render_all_page_paths() {
        let pages = render_pages(&data(), &DetailHtml::default(), &meta()).unwrap();
        let paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "index.html",
                "created/index.html",
                "updated/index.html",
                "about/index.html",
                "plugin/a/b/index.html",
                "plugin/c/d/index.html",
            ]
        );
        assert!(pages.iter().all(|p| p.html.starts_with("<!DOCTYPE html>")));
    }

    #[test]
    fn sort_listings_descending() {
        let pages = render_pages(&data(), &DetailHtml::default(), &meta()).unwrap();
        let pos = |html: &str, id: &str| html.find(&format!(">{id}</a>")).unwrap();

        let by_stars = page(&pages, "index.html");
        assert!(pos(by_stars, "c/d") < pos(by_stars, "a/b"));
        let by_created = page(&pages, "created/index.html");
        assert!(pos(by_created, "a/b") < pos(by_created, "c/d"));
        let by_updated = page(&pages, "updated/index.html");
        assert!(pos(by_updated, "c/d") < pos(by_updated, "a/b"));
    }

    #[test]
    fn color_tags_by_count() {
        let pages = render_pages(&data(), &DetailHtml::default(), &meta()).unwrap();
        let detail = page(&pages, "plugin/a/b/index.html");
        assert!(detail.contains(r#"class="tag tag-yellow""#));
        assert!(detail.contains(r#"class="tag tag-pink""#));
        assert!(detail.contains(">lua</span>"));
    }

    #[test]
    fn render_missing_detail_html_as_empty_fragment() {
        let pages = render_pages(&data(), &DetailHtml::default(), &meta()).unwrap();
        let detail = page(&pages, "plugin/a/b/index.html");
        assert!(detail.contains(r#"<div class="readme"></div>"#));
    }

    #[test]
    fn embed_detail_html_unescaped() {
        let mut html = DetailHtml::default();
        html.0.insert("c/d".into(), "<h1>README</h1>".into());
        let pages = render_pages(&data(), &html, &meta()).unwrap();
        let detail = page(&pages, "plugin/c/d/index.html");
        assert!(detail.contains(r#"<div class="readme"><h1>README</h1></div>"#));
    }

    #[test]
    fn escape_plugin_metadata() {
        let pages = render_pages(&data(), &DetailHtml::default(), &meta()).unwrap();
        let listing = page(&pages, "index.html");
        assert!(listing.contains("&lt;b&gt;bold&lt;/b&gt; plugin"));
        assert!(!listing.contains("<b>bold</b>"));
    }

    #[test]
    fn mark_the_active_sort_mode() {
        let pages = render_pages(&data(), &DetailHtml::default(), &meta()).unwrap();
        let created = page(&pages, "created/index.html");
        assert!(created.contains(r#"<a href="/created/" class="active">Created</a>"#));
        assert!(created.contains(r#"<a href="/">Stars</a>"#));
    }
}
