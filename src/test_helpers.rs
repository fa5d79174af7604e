//! Shared test utilities for the photo-manifest test suite.
//!
//! Builds throwaway site roots shaped like the real one:
//!
//! ```text
//! <tmp>/
//! └── img/
//!     └── customer_photos/
//!         └── ...files
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::manifest::{MANIFEST_FILE_NAME, Manifest};

/// Create each named file in `dir` with placeholder content.
pub fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), "fake image").unwrap();
    }
}

/// A temp site root with `img/customer_photos/` holding the given files.
pub fn customer_site(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let photos = customer_dir(tmp.path());
    fs::create_dir_all(&photos).unwrap();
    touch_all(&photos, names);
    tmp
}

pub fn customer_dir(root: &Path) -> PathBuf {
    root.join("img").join("customer_photos")
}

pub fn customer_manifest_path(root: &Path) -> PathBuf {
    customer_dir(root).join(MANIFEST_FILE_NAME)
}

/// Parse the customer manifest. Panics with the path on failure.
pub fn read_customer_manifest(root: &Path) -> Manifest {
    let path = customer_manifest_path(root);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid manifest at {}: {e}", path.display()))
}
