use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::docs::storage::{DocsStorage, read_content};
use crate::docs::types::{Component, SearchQuery};
use crate::error::DocsError;
use crate::search::matcher::{SearchMatch, compile_query, search_with_pattern};

/// Matches within one file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileMatches {
    pub name: String,
    pub filename: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub match_count: usize,
    pub matches: Vec<SearchMatch>,
}

/// Matching files of one component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMatches {
    pub component: Component,
    pub name: String,
    pub match_count: usize,
    pub files: Vec<FileMatches>,
}

/// Search results grouped by component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub query: String,
    pub total_matches: usize,
    pub files_searched: usize,
    pub files_matched: usize,
    pub components: Vec<ComponentMatches>,
}

impl SearchResult {
    pub fn has_results(&self) -> bool {
        self.total_matches > 0
    }
}

/// Scans component documentation for a query
#[derive(Debug, Clone, Copy)]
pub struct DocsSearcher<'a> {
    storage: &'a DocsStorage,
}

impl<'a> DocsSearcher<'a> {
    pub fn new(storage: &'a DocsStorage) -> Self {
        Self { storage }
    }

    /// Search one component, or every present component when `scope` is `None`.
    ///
    /// An explicitly requested component must exist on disk.
    pub fn search(
        &self,
        query: &SearchQuery,
        scope: Option<Component>,
    ) -> Result<SearchResult, DocsError> {
        let pattern = compile_query(query)?;

        let components: Vec<Component> = match scope {
            Some(component) => {
                if !self.storage.component_exists(component) {
                    return Err(DocsError::ComponentNotFound {
                        component: component.to_string(),
                    });
                }
                vec![component]
            }
            None => Component::ALL
                .into_iter()
                .filter(|c| self.storage.component_exists(*c))
                .collect(),
        };

        let mut result = SearchResult {
            query: query.to_string(),
            total_matches: 0,
            files_searched: 0,
            files_matched: 0,
            components: Vec::new(),
        };

        for component in components {
            let dir = self.storage.component_dir(component);
            let mut files = Vec::new();

            for file in self.storage.list_component_files(component) {
                result.files_searched += 1;

                let Some(content) = read_content(&dir.join(&file.filename)) else {
                    continue;
                };
                let matches = search_with_pattern(&content, &pattern);
                if matches.is_empty() {
                    continue;
                }

                files.push(FileMatches {
                    name: file.name,
                    filename: file.filename,
                    size: file.size,
                    modified: file.modified,
                    match_count: matches.match_count,
                    matches: matches.matching_lines,
                });
            }

            if files.is_empty() {
                continue;
            }

            let match_count = files.iter().map(|f| f.match_count).sum();
            result.total_matches += match_count;
            result.files_matched += files.len();
            result.components.push(ComponentMatches {
                component,
                name: component.info().name.to_string(),
                match_count,
                files,
            });
        }

        tracing::debug!(
            "Search for '{}' matched {} times in {} of {} files",
            result.query,
            result.total_matches,
            result.files_matched,
            result.files_searched
        );

        Ok(result)
    }
}
