#[macro_use]
extern crate log;

mod enrich_plugins;
mod render_readmes;
mod render_site;
mod scrape_resources;

pub mod prelude {
    pub use super::{
        enrich_plugins::*, render_readmes::*, render_site::*, scrape_resources::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use futures::future::try_join_all;
pub(crate) use nvc_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
