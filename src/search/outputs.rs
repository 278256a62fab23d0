//! Output types for search tools

use serde::{Deserialize, Serialize};

use crate::docs::types::Component;
use crate::search::searcher::SearchResult;

/// Output from search_documentation operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocumentationOutput {
    #[serde(flatten)]
    pub result: SearchResult,
    /// The requested component, absent when every component was searched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Component>,
}

impl SearchDocumentationOutput {
    /// Check if there are any results
    pub fn has_results(&self) -> bool {
        self.result.has_results()
    }
}
