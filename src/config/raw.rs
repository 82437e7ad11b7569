use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("nvimcraft.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub scrape: Option<Scrape>,
    pub data: Option<Data>,
    pub site: Option<Site>,
    pub github: Option<Github>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fills missing sections with the given defaults.
    pub fn or(self, defaults: Self) -> Self {
        Self {
            scrape: self.scrape.or(defaults.scrape),
            data: self.data.or(defaults.data),
            site: self.site.or(defaults.site),
            github: self.github.or(defaults.github),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Scrape {
    pub sources: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Data {
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Site {
    pub out_dir: PathBuf,
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Github {
    pub api_base_url: Option<String>,
    pub token: Option<String>,
}
