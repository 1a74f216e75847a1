//! JSON file-based catalog.
//!
//! Loads the whole catalog into memory once. A bundled default catalog is
//! compiled into the binary and can be written to disk with an atomic write
//! (write-to-temp + rename) so a first run has something to search.

use crate::domain::error::{Result, SiteflowError};
use crate::domain::{HeaderInfo, Vertical};
use crate::stats::ViewsModel;
use crate::storage::backend::Catalog;
use crate::storage::models::{HeaderRecord, VerticalRecord, ViewsRecord};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalog format version understood by this build.
const CATALOG_VERSION: u32 = 1;

/// Catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Top-level structure of the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    /// Version of the catalog format.
    version: u32,

    /// Header copy for the verticals screen. Absent header makes the header
    /// fetch fail, which exercises the full-screen error path.
    #[serde(default)]
    header: Option<HeaderRecord>,

    #[serde(default)]
    verticals: Vec<VerticalRecord>,

    #[serde(default)]
    posts_and_pages: Vec<ViewsRecord>,
}

/// JSON file catalog.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "header": {
///     "title": "What's the focus of your business?",
///     "subtitle": "We'll use your answer to add sections to your website.",
///     "input_hint": "e.g. Landscaping, Consulting... etc"
///   },
///   "verticals": [{ "id": "p1v1", "name": "Landscaping" }],
///   "posts_and_pages": [
///     { "id": 1, "title": "Hello", "views": 10, "kind": "post", "url": "https://example.com/hello" }
///   ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    /// Where the catalog was loaded from, `None` for in-memory catalogs.
    file_path: Option<PathBuf>,

    data: CatalogData,
}

impl JsonCatalog {
    /// Opens a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// declares a newer format version.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use siteflow::storage::JsonCatalog;
    ///
    /// let catalog = JsonCatalog::open("/tmp/catalog.json")?;
    /// # Ok::<(), siteflow::SiteflowError>(())
    /// ```
    pub fn open(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let _span = tracing::debug_span!("json_catalog_open", path = ?file_path).entered();

        let contents = std::fs::read_to_string(file_path)?;
        let mut catalog = Self::from_json(&contents)?;
        catalog.file_path = Some(file_path.to_path_buf());
        Ok(catalog)
    }

    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the version is unsupported.
    pub fn from_json(contents: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(contents)
            .map_err(|e| SiteflowError::Catalog(format!("failed to parse JSON: {e}")))?;

        if data.version > CATALOG_VERSION {
            return Err(SiteflowError::Catalog(format!(
                "unsupported catalog version {} (expected <= {CATALOG_VERSION})",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            has_header = data.header.is_some(),
            verticals = data.verticals.len(),
            posts_and_pages = data.posts_and_pages.len(),
            "loaded catalog data"
        );

        Ok(Self {
            file_path: None,
            data,
        })
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file is malformed.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Writes the bundled catalog to `path` unless a file already exists there.
    ///
    /// Parent directories are created. The write goes to a temporary sibling
    /// file first and is renamed into place.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation, writing or renaming fails.
    ///
    /// # Returns
    ///
    /// `true` if a file was written, `false` if one was already present.
    pub fn write_bundled(path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!(path = ?path, "catalog already present, not overwriting");
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing bundled catalog to temporary file");
        std::fs::write(&tmp_path, BUNDLED_CATALOG)?;
        std::fs::rename(&tmp_path, path)?;

        tracing::debug!(path = ?path, "bundled catalog written");
        Ok(true)
    }

    /// Path the catalog was loaded from, if it came from disk.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl Catalog for JsonCatalog {
    fn header_info(&self) -> Option<HeaderInfo> {
        self.data.header.clone().map(HeaderInfo::from)
    }

    fn verticals(&self) -> Vec<Vertical> {
        self.data
            .verticals
            .iter()
            .cloned()
            .map(Vertical::from)
            .collect()
    }

    fn posts_and_pages(&self) -> Vec<ViewsModel> {
        self.data
            .posts_and_pages
            .iter()
            .cloned()
            .map(ViewsModel::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ViewsType;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = JsonCatalog::bundled().unwrap();
        assert!(catalog.header_info().is_some());
        assert!(!catalog.verticals().is_empty());
        assert!(!catalog.posts_and_pages().is_empty());
        assert!(catalog.file_path().is_none());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = JsonCatalog::from_json(r#"{ "version": 1 }"#).unwrap();
        assert!(catalog.header_info().is_none());
        assert!(catalog.verticals().is_empty());
        assert!(catalog.posts_and_pages().is_empty());
    }

    #[test]
    fn newer_version_is_rejected() {
        let err = JsonCatalog::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(err, SiteflowError::Catalog(_)));
    }

    #[test]
    fn open_reads_records_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{
                "version": 1,
                "header": { "title": "t", "subtitle": "s", "input_hint": "h" },
                "verticals": [{ "id": "1", "name": "Landscaping" }],
                "posts_and_pages": [{ "id": 7, "title": "Home", "views": 3, "kind": "homepage" }]
            }"#,
        )
        .unwrap();

        let catalog = JsonCatalog::open(&path).unwrap();
        assert_eq!(catalog.file_path(), Some(path.as_path()));
        assert_eq!(catalog.header_info(), Some(HeaderInfo::new("t", "s", "h")));
        assert_eq!(catalog.verticals(), vec![Vertical::new("1", "Landscaping")]);

        let views = catalog.posts_and_pages();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].kind, ViewsType::Homepage);
        assert!(views[0].url.is_empty());
    }

    #[test]
    fn write_bundled_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.json");

        assert!(JsonCatalog::write_bundled(&path).unwrap());
        assert!(JsonCatalog::open(&path).is_ok());

        std::fs::write(&path, r#"{ "version": 1 }"#).unwrap();
        assert!(!JsonCatalog::write_bundled(&path).unwrap());
        assert!(JsonCatalog::open(&path).unwrap().verticals().is_empty());
    }
}
