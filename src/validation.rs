//! Request validation pipeline
//!
//! Each validator takes one raw request field and returns either the typed
//! value or a [`DocsError::Validation`]. Request structs run their validators
//! in a fixed order (component, filename, then query or format) so the first
//! failing field is the one reported.

use serde::{Deserialize, Serialize};

use crate::docs::types::{Component, DocFileName, DownloadFormat, SearchQuery};
use crate::error::DocsError;

pub fn validate_component(raw: &str) -> Result<Component, DocsError> {
    raw.parse()
}

pub fn validate_filename(raw: &str) -> Result<DocFileName, DocsError> {
    DocFileName::new(raw)
}

/// Queries are required; a missing query fails like an empty one
pub fn validate_query(raw: Option<&str>) -> Result<SearchQuery, DocsError> {
    match raw {
        Some(raw) => SearchQuery::new(raw),
        None => Err(DocsError::validation(
            "query",
            "",
            "is required",
            Vec::<String>::new(),
        )),
    }
}

/// Formats default to markdown when absent
pub fn validate_format(raw: Option<&str>) -> Result<DownloadFormat, DocsError> {
    raw.map(str::parse::<DownloadFormat>)
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Optional component scope; an empty value means all components
pub fn validate_scope(raw: Option<&str>) -> Result<Option<Component>, DocsError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => validate_component(raw).map(Some),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRequest {
    pub component: String,
    pub filename: String,
}

impl FileRequest {
    pub fn validate(&self) -> Result<(Component, DocFileName), DocsError> {
        let component = validate_component(&self.component)?;
        let filename = validate_filename(&self.filename)?;
        Ok((component, filename))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub component: String,
    pub filename: String,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDownload {
    pub component: Component,
    pub filename: DocFileName,
    pub format: DownloadFormat,
}

impl DownloadRequest {
    pub fn validate(&self) -> Result<ValidatedDownload, DocsError> {
        let component = validate_component(&self.component)?;
        let filename = validate_filename(&self.filename)?;
        let format = validate_format(self.format.as_deref())?;
        Ok(ValidatedDownload {
            component,
            filename,
            format,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(alias = "query")]
    pub q: Option<String>,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSearch {
    pub query: SearchQuery,
    pub scope: Option<Component>,
}

impl SearchRequest {
    pub fn validate(&self) -> Result<ValidatedSearch, DocsError> {
        let scope = validate_scope(self.component.as_deref())?;
        let query = validate_query(self.q.as_deref())?;
        Ok(ValidatedSearch { query, scope })
    }
}
