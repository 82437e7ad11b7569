//! Markdown tokenization and rendering.
//!
//! [`tokenize`] reduces the pulldown-cmark event stream to the few block
//! shapes the resource extraction cares about: headings, top level lists
//! and everything else. [`render_html`] turns a README into an HTML
//! fragment.

use lazy_static::lazy_static;
use pulldown_cmark::{html::push_html, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

lazy_static! {
    static ref BARE_URL: Regex = Regex::new(r"(?:https?://|www\.)[^\s<]+").unwrap();
}

/// A top level block of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { text: String },
    List { items: Vec<ListItem> },
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// One group per paragraph (or per run of inline content
    /// in tight lists).
    pub groups: Vec<InlineGroup>,
}

pub type InlineGroup = Vec<Inline>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Link { href: String, text: String },
    Text(String),
    Other,
}

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES
}

pub fn tokenize(markdown: &str) -> Vec<Block> {
    let mut tokenizer = Tokenizer::default();
    for event in Parser::new_ext(markdown, options()) {
        tokenizer.push(event);
    }
    tokenizer.blocks
}

/// Renders markdown to an HTML fragment.
///
/// Raw HTML passes through unchanged.
pub fn render_html(markdown: &str) -> String {
    let mut html = String::with_capacity(markdown.len() * 2);
    push_html(&mut html, Parser::new_ext(markdown, options()));
    html
}

#[derive(Default)]
struct Tokenizer {
    blocks: Vec<Block>,
    state: State,
}

#[derive(Default)]
enum State {
    #[default]
    Top,
    /// Inside a top level block that is neither a heading nor a list.
    Skip {
        depth: usize,
    },
    Heading {
        text: String,
    },
    List(ListState),
}

#[derive(Default)]
struct ListState {
    items: Vec<ListItem>,
    item: Option<ListItem>,
    group: Option<InlineGroup>,
    link: Option<(String, String)>,
    /// Depth of block containers nested into the current item.
    nested_blocks: usize,
    /// Depth of inline containers outside of links.
    nested_inlines: usize,
}

impl Tokenizer {
    fn push(&mut self, event: Event) {
        match &mut self.state {
            State::Top => match event {
                Event::Start(Tag::Heading { .. }) => {
                    self.state = State::Heading {
                        text: String::new(),
                    };
                }
                Event::Start(Tag::List(_)) => {
                    self.state = State::List(ListState::default());
                }
                Event::Start(_) => {
                    self.blocks.push(Block::Other);
                    self.state = State::Skip { depth: 1 };
                }
                Event::End(_) => {
                    log::warn!("Unbalanced markdown event stream");
                }
                _ => self.blocks.push(Block::Other),
            },
            State::Skip { depth } => match event {
                Event::Start(_) => *depth += 1,
                Event::End(_) => {
                    *depth -= 1;
                    if *depth == 0 {
                        self.state = State::Top;
                    }
                }
                _ => {}
            },
            State::Heading { text } => match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::End(TagEnd::Heading(_)) => {
                    let text = std::mem::take(text);
                    self.blocks.push(Block::Heading { text });
                    self.state = State::Top;
                }
                _ => {}
            },
            State::List(list) => {
                if list.push(event) {
                    let items = std::mem::take(&mut list.items);
                    self.blocks.push(Block::List { items });
                    self.state = State::Top;
                }
            }
        }
    }
}

fn is_inline_container(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Image { .. }
    )
}

impl ListState {
    /// Returns `true` when the top level list has been closed.
    fn push(&mut self, event: Event) -> bool {
        if self.nested_blocks > 0 {
            match event {
                Event::Start(_) => self.nested_blocks += 1,
                Event::End(_) => self.nested_blocks -= 1,
                _ => {}
            }
            return false;
        }
        if self.nested_inlines > 0 {
            match event {
                Event::Start(_) => self.nested_inlines += 1,
                Event::End(_) => self.nested_inlines -= 1,
                _ => {}
            }
            return false;
        }
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => return self.end(tag),
            Event::Text(t) | Event::Code(t) => self.push_text(&t),
            Event::SoftBreak | Event::HardBreak => self.push_text("\n"),
            Event::TaskListMarker(_) => {}
            _ => {
                if self.link.is_none() {
                    self.push_inline(Inline::Other);
                }
            }
        }
        false
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Item => {
                self.item = Some(ListItem::default());
                self.group = None;
            }
            Tag::Paragraph => {
                self.close_group();
                if self.item.is_some() {
                    self.group = Some(InlineGroup::new());
                }
            }
            Tag::Link { dest_url, .. } if self.link.is_none() => {
                self.ensure_group();
                self.link = Some((dest_url.to_string(), String::new()));
            }
            tag if is_inline_container(&tag) => {
                if self.link.is_none() {
                    self.push_inline(Inline::Other);
                    self.nested_inlines = 1;
                }
            }
            _ => {
                // Nested lists, code blocks, quotes, ...
                self.close_group();
                self.nested_blocks = 1;
            }
        }
    }

    fn end(&mut self, tag: TagEnd) -> bool {
        match tag {
            TagEnd::Link => {
                if let Some((href, text)) = self.link.take() {
                    self.push_inline(Inline::Link { href, text });
                }
            }
            TagEnd::Paragraph => self.close_group(),
            TagEnd::Item => {
                self.close_group();
                if let Some(item) = self.item.take() {
                    self.items.push(item);
                }
            }
            TagEnd::List(_) => return true,
            _ => {}
        }
        false
    }

    fn ensure_group(&mut self) {
        if self.group.is_none() && self.item.is_some() {
            self.group = Some(InlineGroup::new());
        }
    }

    fn close_group(&mut self) {
        if let (Some(group), Some(item)) = (self.group.take(), self.item.as_mut()) {
            item.groups.push(autolink(group));
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        self.ensure_group();
        if let Some(group) = self.group.as_mut() {
            group.push(inline);
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some((_, link_text)) = self.link.as_mut() {
            link_text.push_str(text);
            return;
        }
        self.ensure_group();
        let Some(group) = self.group.as_mut() else {
            return;
        };
        if let Some(Inline::Text(last)) = group.last_mut() {
            last.push_str(text);
        } else {
            group.push(Inline::Text(text.to_string()));
        }
    }
}

/// Turns bare URLs of text inlines into links, like GitHub does.
fn autolink(group: InlineGroup) -> InlineGroup {
    let mut linked = InlineGroup::with_capacity(group.len());
    for inline in group {
        let Inline::Text(text) = inline else {
            linked.push(inline);
            continue;
        };
        let mut rest = 0;
        for m in BARE_URL.find_iter(&text) {
            let url = trim_url_end(m.as_str());
            if m.start() > rest {
                linked.push(Inline::Text(text[rest..m.start()].to_string()));
            }
            let href = if url.starts_with("www.") {
                format!("http://{url}")
            } else {
                url.to_string()
            };
            linked.push(Inline::Link {
                href,
                text: url.to_string(),
            });
            rest = m.start() + url.len();
        }
        if rest < text.len() {
            linked.push(Inline::Text(text[rest..].to_string()));
        }
    }
    linked
}

/// Strips trailing punctuation and unbalanced closing parentheses.
fn trim_url_end(url: &str) -> &str {
    let mut url = url;
    loop {
        let trimmed = url.trim_end_matches(['?', '!', '.', ',', ':', '*', '_', '~', '\'', '"']);
        let trimmed = if trimmed.ends_with(')')
            && trimmed.matches(')').count() > trimmed.matches('(').count()
        {
            &trimmed[..trimmed.len() - 1]
        } else {
            trimmed
        };
        if trimmed.len() == url.len() {
            return url;
        }
        url = trimmed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, text: &str) -> Inline {
        Inline::Link {
            href: href.into(),
            text: text.into(),
        }
    }

    #[test]
    fn tokenize_headings_and_lists() {
        let md = "# Title\n\nSome text.\n\n## Colorschemes\n- [a/b](https://github.com/a/b) - A theme.\n- plain\n";
        let blocks = tokenize(md);
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    text: "Title".into()
                },
                Block::Other,
                Block::Heading {
                    text: "Colorschemes".into()
                },
                Block::List {
                    items: vec![
                        ListItem {
                            groups: vec![vec![
                                link("https://github.com/a/b", "a/b"),
                                Inline::Text(" - A theme.".into()),
                            ]],
                        },
                        ListItem {
                            groups: vec![vec![Inline::Text("plain".into())]],
                        },
                    ]
                },
            ]
        );
    }

    #[test]
    fn heading_text_without_markup() {
        let blocks = tokenize("### Tree-sitter *based* `lua`\n");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                text: "Tree-sitter based lua".into()
            }]
        );
    }

    #[test]
    fn loose_lists_have_one_group_per_paragraph() {
        let md = "- [a/b](https://github.com/a/b)\n\n  second paragraph\n\n- [c/d](https://github.com/c/d)\n";
        let blocks = tokenize(md);
        let Block::List { items } = &blocks[0] else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].groups.len(), 2);
        assert_eq!(items[0].groups[0], vec![link("https://github.com/a/b", "a/b")]);
        assert_eq!(
            items[0].groups[1],
            vec![Inline::Text("second paragraph".into())]
        );
    }

    #[test]
    fn emphasis_before_link_is_an_opaque_inline() {
        let blocks = tokenize("- **new** [a/b](https://github.com/a/b)\n");
        let Block::List { items } = &blocks[0] else {
            panic!("expected a list");
        };
        let group = &items[0].groups[0];
        assert_eq!(group[0], Inline::Other);
        assert_eq!(group[2], link("https://github.com/a/b", "a/b"));
    }

    #[test]
    fn emphasis_inside_link_text() {
        let blocks = tokenize("- [**a**/b](https://github.com/a/b)\n");
        let Block::List { items } = &blocks[0] else {
            panic!("expected a list");
        };
        assert_eq!(
            items[0].groups[0],
            vec![link("https://github.com/a/b", "a/b")]
        );
    }

    #[test]
    fn nested_lists_are_not_inline_content() {
        let md = "- parent\n  - [a/b](https://github.com/a/b)\n- [c/d](https://github.com/c/d)\n";
        let blocks = tokenize(md);
        assert_eq!(blocks.len(), 1);
        let Block::List { items } = &blocks[0] else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].groups, vec![vec![Inline::Text("parent".into())]]);
        assert_eq!(
            items[1].groups,
            vec![vec![link("https://github.com/c/d", "c/d")]]
        );
    }

    #[test]
    fn lists_inside_quotes_are_skipped() {
        let blocks = tokenize("> - [a/b](https://github.com/a/b)\n");
        assert_eq!(blocks, vec![Block::Other]);
    }

    #[test]
    fn bare_urls_become_links() {
        let blocks = tokenize("- https://github.com/a/b.\n- see (www.example.com) now\n");
        let Block::List { items } = &blocks[0] else {
            panic!("expected a list");
        };
        assert_eq!(
            items[0].groups,
            vec![vec![
                link("https://github.com/a/b", "https://github.com/a/b"),
                Inline::Text(".".into()),
            ]]
        );
        assert_eq!(
            items[1].groups,
            vec![vec![
                Inline::Text("see (".into()),
                link("http://www.example.com", "www.example.com"),
                Inline::Text(") now".into()),
            ]]
        );
    }

    #[test]
    fn render_readme_to_html() {
        let html = render_html("# Hello\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~\n");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>old</del>"));
    }
}
