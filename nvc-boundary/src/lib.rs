use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
pub mod ordered_map;

#[cfg(feature = "entity-conversions")]
pub use conv::ConversionError;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Resource {
    pub username: String,
    pub repo: String,
    pub tags: Vec<String>,
}

/// Contents of `resources.json`.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ResourceList {
    pub resources: Vec<Resource>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Plugin {
    pub id           : String,
    pub username     : String,
    pub repo         : String,
    pub link         : String,
    #[serde(default)]
    pub description  : Option<String>,
    #[serde(default)]
    pub homepage     : Option<String>,
    #[serde(default)]
    pub stars        : u64,
    #[serde(default)]
    pub open_issues  : u64,
    #[serde(default)]
    pub subscribers  : u64,
    #[serde(default)]
    pub forks        : u64,
    pub created_at   : String,
    pub updated_at   : String,
    #[serde(default)]
    pub tags         : Vec<String>,
}

/// Contents of `db.json`, keyed by plugin id in insertion order.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PluginDb {
    #[serde(with = "ordered_map")]
    pub plugins: Vec<(String, Plugin)>,
}

/// Contents of `html.json`: rendered README fragments keyed by plugin id.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct HtmlDb {
    #[serde(with = "ordered_map")]
    pub html: Vec<(String, String)>,
}
