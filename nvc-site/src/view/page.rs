use super::*;

const GENERATOR: &str = concat!("nvimcraft v", env!("CARGO_PKG_VERSION"));

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 0 auto; padding: 0 1rem; }
header nav a { margin-right: 1rem; }
nav.sort a.active { font-weight: bold; }
ul.plugins { list-style: none; padding: 0; }
li.plugin { border-bottom: 1px solid #ddd; padding: 0.75rem 0; }
.stats span { margin-right: 1rem; }
.tag { display: inline-block; border-radius: 0.5rem; padding: 0 0.5rem; margin: 0.1rem; font-size: 0.85rem; }
.tag-pink { background: #fbcfe8; }
.tag-yellow { background: #fef08a; }
.tag-orange { background: #fed7aa; }
.tag-green { background: #bbf7d0; }
.tag-purple { background: #e9d5ff; }
"#;

pub fn page(meta: &SiteMeta, title: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(GENERATOR);
                title {
                    @if let Some(title) = title {
                        (title) " | "
                    }
                    (meta.title)
                }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    nav {
                        a href="/" { (meta.title) }
                        a href="/about/" { "About" }
                    }
                }
                main {
                    (content)
                }
            }
        }
    }
}
