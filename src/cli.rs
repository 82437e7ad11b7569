use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use nvc_application::prelude as flows;
use nvc_db_json::JsonDb;
use nvc_gateways::{github::GithubApi, http::HttpMarkdown, static_files::StaticFiles};
use nvc_site::SiteMeta;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Static site generator for curated Neovim plugin lists")]
struct Args {
    /// Configuration file (default: nvimcraft.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract plugins from the configured awesome lists
    Scrape,
    /// Fetch the GitHub metadata of all scraped plugins
    Enrich,
    /// Render the README of every plugin
    Readmes,
    /// Render the static site
    Render,
    /// Run the whole pipeline
    All,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    let db = JsonDb::try_open(&cfg.data.dir)?;
    match args.command {
        Command::Scrape => scrape(&cfg, &db).await,
        Command::Enrich => enrich(&cfg, &db).await,
        Command::Readmes => readmes(&cfg, &db).await,
        Command::Render => render(&cfg, &db).await,
        Command::All => {
            scrape(&cfg, &db).await?;
            enrich(&cfg, &db).await?;
            readmes(&cfg, &db).await?;
            render(&cfg, &db).await
        }
    }
}

fn github_api(cfg: &Config) -> Result<GithubApi> {
    if cfg.github.token.is_none() {
        log::warn!("No GitHub token configured, requests are rate limited");
    }
    GithubApi::try_new(&cfg.github.api_base_url, cfg.github.token.clone())
}

async fn scrape(cfg: &Config, db: &JsonDb) -> Result<()> {
    let gateway = HttpMarkdown::try_new()?;
    let resources = flows::scrape_resources(&gateway, db, &cfg.scrape.sources).await?;
    log::info!(
        "Scraped {} resources from {} sources",
        resources.len(),
        cfg.scrape.sources.len()
    );
    Ok(())
}

async fn enrich(cfg: &Config, db: &JsonDb) -> Result<()> {
    let github = github_api(cfg)?;
    let plugins = flows::enrich_plugins(&github, db).await?;
    log::info!("Enriched {} plugins", plugins.len());
    Ok(())
}

async fn readmes(cfg: &Config, db: &JsonDb) -> Result<()> {
    let github = github_api(cfg)?;
    let count = flows::render_readmes(&github, db).await?;
    log::info!("Rendered {count} READMEs");
    Ok(())
}

async fn render(cfg: &Config, db: &JsonDb) -> Result<()> {
    let site = StaticFiles::new(&cfg.site.out_dir);
    let meta = SiteMeta {
        title: cfg.site.title.clone(),
    };
    let count = flows::render_site(db, &site, &meta).await?;
    log::info!("Rendered {count} pages into {}", cfg.site.out_dir.display());
    Ok(())
}
