use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "nvimcraft.toml";

const ENV_NAME_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

#[derive(Debug)]
pub struct Config {
    pub scrape: Scrape,
    pub data: Data,
    pub site: Site,
    pub github: Github,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let defaults = raw::Config::try_default()?;
        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => {
                let cfg: raw::Config = toml::from_str(&cfg_string)?;
                cfg.or(defaults)
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(defaults)
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(token) = env::var(ENV_NAME_GITHUB_TOKEN) {
            cfg.github.token = Some(token).filter(|t| !t.is_empty());
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Scrape {
    /// URLs of the markdown documents to extract plugins from.
    pub sources: Vec<String>,
}

#[derive(Debug)]
pub struct Data {
    pub dir: PathBuf,
}

#[derive(Debug)]
pub struct Site {
    pub out_dir: PathBuf,
    pub title: String,
}

#[derive(Debug)]
pub struct Github {
    pub api_base_url: String,
    pub token: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            scrape,
            data,
            site,
            github,
        } = from;

        let raw::Scrape { sources } =
            scrape.ok_or_else(|| anyhow!("Missing 'scrape' configuration"))?;
        if sources.is_empty() {
            return Err(anyhow!("No scrape sources defined"));
        }
        if let Some(invalid) = sources
            .iter()
            .find(|s| !(s.starts_with("https://") || s.starts_with("http://")))
        {
            return Err(anyhow!("Invalid scrape source '{invalid}'"));
        }
        let scrape = Scrape { sources };

        let raw::Data { dir } = data.ok_or_else(|| anyhow!("Missing 'data' configuration"))?;
        let data = Data { dir };

        let raw::Site { out_dir, title } =
            site.ok_or_else(|| anyhow!("Missing 'site' configuration"))?;
        let site = Site { out_dir, title };

        let github = match github {
            Some(raw::Github {
                api_base_url,
                token,
            }) => Github {
                api_base_url: api_base_url
                    .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE_URL.to_string()),
                token: token.filter(|t| !t.is_empty()),
            },
            None => Github {
                api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
                token: None,
            },
        };

        Ok(Self {
            scrape,
            data,
            site,
            github,
        })
    }
}
