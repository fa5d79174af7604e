//! # Photo Manifest
//!
//! Writes the `manifest.json` files a static site's image galleries read at
//! runtime. The filesystem is the data source: every image in a gallery
//! directory is listed, in a stable order, next to the base path the page
//! prefixes onto each file name.
//!
//! # Pipeline
//!
//! Each configured target goes through the same three steps:
//!
//! ```text
//! 1. Scan    img/customer_photos/  →  ["b.png", "vinvel_cus_2.png", ...]
//! 2. Order   names                 →  numbered customers first, then A-Z
//! 3. Write   Manifest              →  img/customer_photos/manifest.json
//! ```
//!
//! All targets are scanned before anything is written, so a missing directory
//! never leaves a half-updated site behind.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the image files of one gallery directory |
//! | [`ordering`] | Sort keys: numbered customer photos, then case-insensitive names |
//! | [`manifest`] | The `{ basePath, files }` record, its JSON rendering, and the write |
//! | [`config`] | Optional `photo-manifest.toml`: targets, extensions, numbered prefix |
//! | [`output`] | CLI output formatting for written and checked manifests |
//!
//! # Output
//!
//! ```json
//! {
//!   "basePath": "img/customer_photos/",
//!   "files": [
//!     "vinvel_cus_1.jpg",
//!     "vinvel_cus_2.png",
//!     "about.svg"
//!   ]
//! }
//! ```
//!
//! Running twice against an unchanged directory produces byte-identical files,
//! so the manifest can be committed alongside the images without churn.

pub mod config;
pub mod manifest;
pub mod ordering;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
