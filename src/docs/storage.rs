use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::docs::constants::{DOCS_DIR, DOCS_ROOT_DIR};
use crate::docs::types::{Component, DocFileName, is_markdown_filename, logical_name};
use crate::error::DocsError;

/// Resolves component directories and files under the documentation root
#[derive(Debug, Clone)]
pub struct DocsStorage {
    docs_root: PathBuf,
}

/// One markdown file within a component directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    /// Filename without the `.md` extension
    pub name: String,
    pub filename: String,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl DocumentFile {
    fn from_metadata(filename: &str, metadata: &fs::Metadata) -> Self {
        let modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| DateTime::<Utc>::from(SystemTime::UNIX_EPOCH));
        // Not every filesystem records a birth time
        let created = metadata
            .created()
            .map(DateTime::<Utc>::from)
            .unwrap_or(modified);

        Self {
            name: logical_name(filename).to_string(),
            filename: filename.to_string(),
            size: metadata.len(),
            created,
            modified,
        }
    }
}

impl DocsStorage {
    /// Create a storage rooted at the given directory
    pub fn new(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
        }
    }

    /// Create a storage rooted at `~/.component-docs/docs`
    pub fn with_default_root() -> Result<Self> {
        Ok(Self::new(Self::default_docs_root()?))
    }

    pub fn default_docs_root() -> Result<PathBuf> {
        Ok(dirs::home_dir()
            .context("Failed to get home directory")?
            .join(DOCS_ROOT_DIR)
            .join(DOCS_DIR))
    }

    pub fn docs_root(&self) -> &Path {
        &self.docs_root
    }

    /// Get the directory for a component
    pub fn component_dir(&self, component: Component) -> PathBuf {
        self.docs_root.join(component.as_str())
    }

    /// Get the path of a markdown file within a component
    pub fn file_path(&self, component: Component, filename: &DocFileName) -> PathBuf {
        self.component_dir(component)
            .join(filename.markdown_filename())
    }

    /// Check if the component directory exists on disk
    pub fn component_exists(&self, component: Component) -> bool {
        self.component_dir(component).is_dir()
    }

    /// Map a raw component identifier to its directory.
    ///
    /// Does not touch the filesystem; existence is the caller's concern.
    pub fn resolve_component_path(&self, component: &str) -> Result<PathBuf, DocsError> {
        let component: Component = component.parse()?;
        Ok(self.component_dir(component))
    }

    /// Map a raw component identifier and filename to a file path.
    ///
    /// Fails on an unsafe filename whether or not such a file exists.
    pub fn resolve_file_path(&self, component: &str, filename: &str) -> Result<PathBuf, DocsError> {
        let component: Component = component.parse()?;
        let filename = DocFileName::new(filename)?;
        Ok(self.file_path(component, &filename))
    }

    /// List the markdown files of a component
    pub fn list_component_files(&self, component: Component) -> Vec<DocumentFile> {
        list_markdown_files(&self.component_dir(component))
    }

    /// Metadata for a single markdown file, `None` when it does not exist
    pub fn file_metadata(&self, component: Component, filename: &DocFileName) -> Option<DocumentFile> {
        let path = self.file_path(component, filename);
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => Some(DocumentFile::from_metadata(
                &filename.markdown_filename(),
                &metadata,
            )),
            Ok(_) => None,
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read metadata for {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Read a markdown file of a component, `None` when it does not exist
    pub fn read_file(&self, component: Component, filename: &DocFileName) -> Option<String> {
        read_content(&self.file_path(component, filename))
    }
}

/// List `.md` files in a directory, sorted by logical name.
///
/// An absent directory yields an empty list. Filesystem errors are logged
/// and also yield an empty list.
pub fn list_markdown_files(dir: &Path) -> Vec<DocumentFile> {
    if !dir.is_dir() {
        return Vec::new();
    }

    match scan_markdown_files(dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("Failed to list markdown files: {:#}", e);
            Vec::new()
        }
    }
}

fn scan_markdown_files(dir: &Path) -> Result<Vec<DocumentFile>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_markdown_filename(filename) {
            continue;
        }

        // Follows symlinks, unlike DirEntry::metadata
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        files.push(DocumentFile::from_metadata(filename, &metadata));
    }

    files.sort_by(|a, b| collate(&a.name, &b.name));
    Ok(files)
}

/// Dictionary order: letters compare case-insensitively first, then
/// lowercase sorts before uppercase
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Read a file as text, `None` when it does not exist.
///
/// Other I/O faults are logged and also yield `None`. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn read_content(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}
