//! Output types for documentation tools
//!
//! These types are used as the return values from docs tool methods.
//! They are serialized to JSON for both the MCP and HTTP surfaces, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::docs::stats::FileStatistics;
use crate::docs::storage::DocumentFile;
use crate::docs::types::{Component, ComponentDetails, DownloadFormat};

/// A known component and whether its documentation is present
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAvailability {
    #[serde(flatten)]
    pub details: ComponentDetails,
    pub available: bool,
    pub file_count: usize,
}

/// Output from list_components operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListComponentsOutput {
    pub components: Vec<ComponentAvailability>,
}

/// Output from list_component_files operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesOutput {
    pub component: ComponentDetails,
    pub files: Vec<DocumentFile>,
    pub total: usize,
}

/// Output from get_documentation_file operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetFileOutput {
    pub component: Component,
    pub file: DocumentFile,
    pub line_count: usize,
    pub content: String,
}

/// Output from download_documentation_file operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOutput {
    pub component: Component,
    /// Suggested attachment filename, with the requested format's extension
    pub filename: String,
    pub format: DownloadFormat,
    pub content_type: String,
    pub content: String,
}

impl DownloadOutput {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Output from get_component_statistics operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsOutput {
    pub component: Component,
    #[serde(flatten)]
    pub statistics: FileStatistics,
}
