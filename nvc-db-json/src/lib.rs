use anyhow::Result as Fallible;
use nvc_core::repositories as repo;
use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::HashMap,
    fs,
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

mod repo_impl;

pub const RESOURCES_FILE: &str = "resources.json";
pub const PLUGINS_FILE: &str = "db.json";
pub const DETAIL_HTML_FILE: &str = "html.json";

type DetailHtmlCache = HashMap<String, String>;

/// File based storage of the pipeline data.
///
/// Every repository owns a single pretty printed JSON file
/// inside the data directory.
#[derive(Debug)]
pub struct JsonDb {
    dir: PathBuf,
    // Loaded on first lookup, replaced on every write.
    detail_html: RwLock<Option<DetailHtmlCache>>,
}

impl JsonDb {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            detail_html: RwLock::new(None),
        }
    }

    /// Opens the data directory, creating it if needed.
    pub fn try_open(dir: impl Into<PathBuf>) -> Fallible<Self> {
        let db = Self::new(dir);
        fs::create_dir_all(&db.dir).inspect_err(|err| {
            log::error!(
                "Failed to create data directory {}: {err}",
                db.dir.display()
            );
        })?;
        Ok(db)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    fn read_file<T: DeserializeOwned>(&self, file_name: &str) -> repo::Result<T> {
        let path = self.file_path(file_name);
        log::debug!("Reading {}", path.display());
        let file = fs::File::open(&path).map_err(from_io_err)?;
        let data = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| anyhow::anyhow!("Failed to parse {}: {err}", path.display()))?;
        Ok(data)
    }

    fn write_file<T: Serialize>(&self, file_name: &str, data: &T) -> repo::Result<()> {
        let path = self.file_path(file_name);
        log::debug!("Writing {}", path.display());
        fs::create_dir_all(&self.dir)?;
        let mut writer = BufWriter::new(fs::File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, data).map_err(anyhow::Error::from)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

fn from_io_err(err: io::Error) -> repo::Error {
    match err.kind() {
        io::ErrorKind::NotFound => repo::Error::NotFound,
        _ => repo::Error::Io(err),
    }
}
