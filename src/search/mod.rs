//! # Search Module
//!
//! Case-insensitive pattern search over component documentation.
//!
//! ## Key Components
//!
//! - [`matcher`] - Per-document matching with line context
//! - [`searcher`] - Scans one or all components and groups results
//! - [`tools`] - Rate-limited search tool implementation
//! - [`config`] - Limits for matching and pattern compilation

pub mod config;
pub mod matcher;
pub mod outputs;
pub mod searcher;
pub mod tools;

pub use matcher::{ContentMatches, ContextLine, SearchMatch, search_in_content};
pub use searcher::{DocsSearcher, SearchResult};
pub use tools::SearchTools;
