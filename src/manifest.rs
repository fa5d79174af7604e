//! Manifest building and writing.
//!
//! A manifest is the `{ basePath, files }` record a gallery page fetches to
//! know which images to show:
//!
//! ```json
//! {
//!   "basePath": "img/customer_photos/",
//!   "files": [
//!     "vinvel_cus_1.jpg",
//!     "about.svg"
//!   ]
//! }
//! ```
//!
//! Writing happens in two phases. [`plan`] scans and orders every configured
//! target without touching the filesystem; [`write_all`] then writes each
//! `manifest.json`. A missing gallery directory therefore fails the run before
//! any manifest is replaced.

use crate::config::{Config, Target};
use crate::ordering;
use crate::scan::{self, ScanError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name of the manifest inside each gallery directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The JSON document read by the gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Directory of the images relative to the site root, with trailing `/`.
    pub base_path: String,
    /// Image file names in display order.
    pub files: Vec<String>,
}

impl Manifest {
    /// Render as 2-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write `manifest.json` into `dir`, replacing any previous file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ManifestError> {
        let path = dir.join(MANIFEST_FILE_NAME);
        let json = self.to_json()?;
        fs::write(&path, json).map_err(|source| ManifestError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Scan one gallery directory and order its files.
pub fn build_manifest(
    dir: &Path,
    base_path: impl Into<String>,
    config: &Config,
    order: ordering::Order,
) -> Result<Manifest, ScanError> {
    let mut files = scan::scan_images(dir, config.extensions.as_slice())?;
    ordering::sort_names(&mut files, order, &config.numbered_prefix);
    Ok(Manifest {
        base_path: base_path.into(),
        files,
    })
}

/// A manifest that has been built but not yet written.
#[derive(Debug, Clone)]
pub struct PlannedManifest {
    pub target: Target,
    /// Gallery directory on disk.
    pub dir: PathBuf,
    pub manifest: Manifest,
}

impl PlannedManifest {
    /// Manifest path relative to the root, `/`-separated.
    pub fn display_path(&self) -> String {
        self.target.manifest_display_path(MANIFEST_FILE_NAME)
    }
}

/// Build the manifest of every configured target. Nothing is written.
pub fn plan(root: &Path, config: &Config) -> Result<Vec<PlannedManifest>, ManifestError> {
    config
        .manifests
        .iter()
        .map(|target| {
            let dir = target.resolve(root);
            debug!(dir = %dir.display(), order = ?target.order, "building manifest");
            let manifest = build_manifest(&dir, target.base_path(), config, target.order)?;
            Ok(PlannedManifest {
                target: target.clone(),
                dir,
                manifest,
            })
        })
        .collect()
}

/// Write every planned manifest, stopping at the first failure.
pub fn write_all(planned: &[PlannedManifest]) -> Result<(), ManifestError> {
    for entry in planned {
        let path = entry.manifest.write_to(&entry.dir)?;
        debug!(path = %path.display(), files = entry.manifest.files.len(), "wrote manifest");
    }
    Ok(())
}
