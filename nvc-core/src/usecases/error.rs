use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed GitHub link '{href}': expected https://github.com/<username>/<repo>")]
    MalformedLink { href: String },
    #[error(transparent)]
    Gateway(anyhow::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
