use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::Result;

const CATALOG_EXTENSION: &str = "json";

/// One edition of a part catalog: its name and its pre-tokenized words.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PartCatalog {
    #[serde(default)]
    pub name: String,
    pub words: Vec<String>,
}

impl PartCatalog {
    pub const fn new(name: String, words: Vec<String>) -> Self {
        Self { name, words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Reads a catalog from a JSON file. A catalog without a name is named
    /// after the file stem.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IO`] if the file cannot be opened and
    /// [`crate::Error::SerdeJson`] if it is not a catalog.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut catalog: Self = serde_json::from_reader(BufReader::new(File::open(path)?))?;

        if catalog.name.is_empty() {
            catalog.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        debug!(
            name = %catalog.name,
            words = catalog.words.len(),
            path = %path.display(),
            "Loaded catalog"
        );

        Ok(catalog)
    }
}

/// Loads every `.json` catalog under `dir`, in file name order. Symlinks are
/// followed.
///
/// # Errors
///
/// Returns [`crate::Error::WalkDir`] if `dir` cannot be walked, or the error of the
/// first catalog that fails to load.
pub fn load_catalogs(dir: &Path) -> Result<Vec<PartCatalog>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }

        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|extension| extension == CATALOG_EXTENSION)
        {
            paths.push(entry.into_path());
        } else {
            debug!(path = %entry.path().display(), "Skipping non-catalog entry");
        }
    }

    let catalogs = paths
        .iter()
        .map(|path| {
            PartCatalog::from_path(path).inspect_err(|e| {
                warn!(path = %path.display(), error = %e, "Failed to load catalog");
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        count = catalogs.len(),
        dir = %dir.display(),
        "Loaded catalogs"
    );

    Ok(catalogs)
}
