use crate::SiteMeta;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use nvc_core::{
    entities::*,
    usecases::PluginData,
    util::sort::SortMode,
};

mod page;

use page::*;

pub fn listing_path(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Stars => "index.html",
        SortMode::Created => "created/index.html",
        SortMode::Updated => "updated/index.html",
    }
}

fn listing_href(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Stars => "/",
        SortMode::Created => "/created/",
        SortMode::Updated => "/updated/",
    }
}

fn listing_label(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Stars => "Stars",
        SortMode::Created => "Created",
        SortMode::Updated => "Updated",
    }
}

pub fn plugin_path(plugin: &Plugin) -> String {
    format!("plugin/{}/{}/index.html", plugin.username, plugin.repo)
}

fn plugin_href(plugin: &Plugin) -> String {
    format!("/plugin/{}/{}/", plugin.username, plugin.repo)
}

fn tag_badge(tag: &Tag) -> Markup {
    html! {
        span class=(format!("tag tag-{}", tag.color().as_str())) title=(format!("{} plugins", tag.count)) {
            (tag.id)
        }
    }
}

fn sort_nav(active: SortMode) -> Markup {
    html! {
        nav class="sort" {
            "Sort by: "
            @for mode in SortMode::ALL {
                a href=(listing_href(mode)) class=[(mode == active).then_some("active")] {
                    (listing_label(mode))
                }
                " "
            }
        }
    }
}

/// All plugins in the given order.
pub fn listing(meta: &SiteMeta, data: &PluginData, mode: SortMode, plugins: &[&Plugin]) -> Markup {
    let title = format!("Plugins by {}", listing_label(mode).to_lowercase());
    page(
        meta,
        Some(&title),
        html! {
            h1 { (meta.title) }
            p { (plugins.len()) " plugins" }
            div class="tags" {
                @for tag in data.tags() {
                    (tag_badge(tag))
                }
            }
            (sort_nav(mode))
            ul class="plugins" {
                @for plugin in plugins {
                    li class="plugin" {
                        h2 {
                            a href=(plugin_href(plugin)) { (plugin.id.as_str()) }
                        }
                        @if !plugin.description.is_empty() {
                            p { (plugin.description) }
                        }
                        div class="stats" {
                            span { "★ " (plugin.stars) }
                            span { "created " (plugin.created_at.format_date()) }
                            span { "updated " (plugin.updated_at.format_date()) }
                        }
                        div class="tags" {
                            @for tag in data.tags_of(plugin) {
                                (tag_badge(tag))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn about(meta: &SiteMeta, data: &PluginData) -> Markup {
    page(
        meta,
        Some("About"),
        html! {
            h1 { "About" }
            p {
                (meta.title) " lists Neovim plugins collected from curated awesome lists on GitHub. "
                "The lists are scraped regularly and every plugin is enriched with the metadata of its repository."
            }
            p {
                "Currently " (data.plugins().len()) " plugins with "
                (data.tags().len()) " different tags are listed."
            }
        },
    )
}

/// The detail page of a plugin with its pre-rendered README.
pub fn plugin(meta: &SiteMeta, data: &PluginData, plugin: &Plugin, detail_html: &str) -> Markup {
    page(
        meta,
        Some(plugin.id.as_str()),
        html! {
            h1 { (plugin.id.as_str()) }
            @if !plugin.description.is_empty() {
                p class="description" { (plugin.description) }
            }
            p {
                a href=(plugin.link) { "GitHub" }
                @if !plugin.homepage.is_empty() {
                    " | "
                    a href=(plugin.homepage) { "Homepage" }
                }
            }
            div class="stats" {
                span { "★ " (plugin.stars) }
                span { "open issues " (plugin.open_issues) }
                span { "subscribers " (plugin.subscribers) }
                span { "forks " (plugin.forks) }
                span { "created " (plugin.created_at.format_date()) }
                span { "updated " (plugin.updated_at.format_date()) }
            }
            div class="tags" {
                @for tag in data.tags_of(plugin) {
                    (tag_badge(tag))
                }
            }
            div class="readme" {
                (PreEscaped(detail_html))
            }
        },
    )
}
