//! Gallery directory scanning.
//!
//! Lists the image files directly inside one gallery directory. Nothing is
//! recursed into; subdirectories, hidden files, and anything without an
//! allowed image extension are left out:
//!
//! ```text
//! img/customer_photos/
//! ├── manifest.json          # skipped (not an image)
//! ├── .hidden.jpg            # skipped (hidden)
//! ├── Photo.JPG              # listed (extension is case-insensitive)
//! ├── logo.svg -> ../logo.svg  # listed (symlink to a file)
//! ├── notes.txt              # skipped (extension)
//! ├── raw.jpg/               # skipped (directory)
//! └── vinvel_cus_1.jpg       # listed
//! ```
//!
//! The result is in byte order of the file names. Ordering for display is
//! the job of [`crate::ordering`].

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Missing folder: {0}")]
    MissingDirectory(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Image extensions listed when no other set is configured.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "svg"];

/// List the image files directly inside `dir`.
///
/// `extensions` are matched case-insensitively and given without the dot.
/// Fails with [`ScanError::MissingDirectory`] when `dir` does not exist or is
/// not a directory.
pub fn scan_images<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<String>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::MissingDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for path in collect_entries(dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let Some(name) = name.to_str() else {
            warn!(path = %path.display(), "skipping file name that is not valid UTF-8");
            continue;
        };
        if !is_image(&path, extensions) {
            debug!(name, "skipping non-image entry");
            continue;
        }
        files.push(name.to_string());
    }

    debug!(dir = %dir.display(), count = files.len(), "scanned gallery directory");
    Ok(files)
}

fn collect_entries(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read = fs::read_dir(dir).map_err(|source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<PathBuf> = read
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| !is_hidden(p))
        .collect();

    entries.sort();
    Ok(entries)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.as_encoded_bytes().starts_with(b"."))
        .unwrap_or(false)
}

/// A regular file (following symlinks) with an allowed extension.
fn is_image<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    extensions
        .iter()
        .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn lists_allowed_extensions() {
        let tmp = TempDir::new().unwrap();
        touch_all(
            tmp.path(),
            &["a.jpg", "b.jpeg", "c.png", "d.webp", "e.svg", "f.gif", "g.txt"],
        );

        let files = scan_images(tmp.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(files, vec!["a.jpg", "b.jpeg", "c.png", "d.webp", "e.svg"]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["Photo.JPG", "photo.txt", "Logo.Svg"]);

        let files = scan_images(tmp.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(files, vec!["Logo.Svg", "Photo.JPG"]);
    }

    #[test]
    fn hidden_files_are_skipped() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &[".hidden.jpg", ".DS_Store", "shown.jpg"]);

        let files = scan_images(tmp.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(files, vec!["shown.jpg"]);
    }

    #[test]
    fn directories_are_skipped_even_with_image_names() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("album.jpg")).unwrap();
        touch_all(tmp.path(), &["real.jpg"]);

        let files = scan_images(tmp.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(files, vec!["real.jpg"]);
    }

    #[test]
    fn files_without_extension_are_skipped() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["jpg", "photo.", "photo.jpg"]);

        let files = scan_images(tmp.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(files, vec!["photo.jpg"]);
    }

    #[test]
    fn manifest_file_is_not_listed() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["manifest.json", "a.png"]);

        let files = scan_images(tmp.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(files, vec!["a.png"]);
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let tmp = TempDir::new().unwrap();
        let files = scan_images(tmp.path(), IMAGE_EXTENSIONS).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let result = scan_images(&missing, IMAGE_EXTENSIONS);
        match result {
            Err(ScanError::MissingDirectory(path)) => assert_eq!(path, missing),
            other => panic!("expected MissingDirectory, got {other:?}"),
        }
    }

    #[test]
    fn file_in_place_of_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("photos");
        fs::write(&file, "not a dir").unwrap();

        let result = scan_images(&file, IMAGE_EXTENSIONS);
        assert!(matches!(result, Err(ScanError::MissingDirectory(_))));
    }

    #[test]
    fn missing_directory_message_names_path() {
        let err = ScanError::MissingDirectory(PathBuf::from("img/customer_photos"));
        assert_eq!(err.to_string(), "Missing folder: img/customer_photos");
    }

    #[test]
    fn custom_extension_set() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["a.gif", "b.jpg"]);

        let files = scan_images(tmp.path(), &["gif"]).unwrap();
        assert_eq!(files, vec!["a.gif"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_follow_their_target() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        touch_all(outside.path(), &["target.jpg"]);
        fs::create_dir(outside.path().join("folder.jpg")).unwrap();

        symlink(outside.path().join("target.jpg"), tmp.path().join("linked.jpg")).unwrap();
        symlink(outside.path().join("folder.jpg"), tmp.path().join("dir.jpg")).unwrap();
        symlink(outside.path().join("gone.jpg"), tmp.path().join("dangling.jpg")).unwrap();

        let files = scan_images(tmp.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(files, vec!["linked.jpg"]);
    }
}
