//! Per-component and global documentation statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::docs::storage::{DocsStorage, DocumentFile, list_markdown_files, read_content};
use crate::docs::types::{Component, ComponentDetails};

/// Totals and averages over the markdown files of one component
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileStatistics {
    pub total_files: usize,
    pub total_size: u64,
    pub total_lines: usize,
    pub average_file_size: u64,
    pub average_lines_per_file: u64,
}

/// A present component with its files and statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverview {
    #[serde(flatten)]
    pub details: ComponentDetails,
    pub file_count: usize,
    pub files: Vec<DocumentFile>,
    pub stats: FileStatistics,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationOverview {
    pub total_components: usize,
    pub total_files: usize,
    pub total_size: u64,
    pub components: Vec<ComponentOverview>,
}

/// Count `'\n'`-separated lines; empty content has none
pub fn count_lines(content: &str) -> usize {
    if content.is_empty() {
        0
    } else {
        content.split('\n').count()
    }
}

fn rounded_average(total: u64, count: usize) -> u64 {
    if count == 0 {
        return 0;
    }
    (total as f64 / count as f64).round() as u64
}

fn statistics_for(dir: &Path, files: &[DocumentFile]) -> FileStatistics {
    let total_files = files.len();
    let total_size: u64 = files.iter().map(|f| f.size).sum();
    let total_lines: usize = files
        .iter()
        .map(|f| {
            read_content(&dir.join(&f.filename))
                .map(|content| count_lines(&content))
                .unwrap_or(0)
        })
        .sum();

    FileStatistics {
        total_files,
        total_size,
        total_lines,
        average_file_size: rounded_average(total_size, total_files),
        average_lines_per_file: rounded_average(total_lines as u64, total_files),
    }
}

impl DocsStorage {
    /// Statistics for a component, `None` when its directory is absent
    pub fn file_statistics(&self, component: Component) -> Option<FileStatistics> {
        let dir = self.component_dir(component);
        if !dir.is_dir() {
            return None;
        }

        let files = list_markdown_files(&dir);
        Some(statistics_for(&dir, &files))
    }

    /// Overview of every component present on disk
    pub fn documentation_overview(&self) -> DocumentationOverview {
        let mut components = Vec::new();

        for component in Component::ALL {
            let dir = self.component_dir(component);
            if !dir.is_dir() {
                tracing::debug!("Skipping component {} with no documentation directory", component);
                continue;
            }

            let files = list_markdown_files(&dir);
            let stats = statistics_for(&dir, &files);
            let last_modified = files
                .iter()
                .map(|f| f.modified)
                .max()
                .unwrap_or_else(Utc::now);

            components.push(ComponentOverview {
                details: component.into(),
                file_count: files.len(),
                files,
                stats,
                last_modified,
            });
        }

        DocumentationOverview {
            total_components: components.len(),
            total_files: components.iter().map(|c| c.file_count).sum(),
            total_size: components.iter().map(|c| c.stats.total_size).sum(),
            components,
        }
    }
}
