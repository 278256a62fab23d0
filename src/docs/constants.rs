//! Constants for documentation layout and input limits

/// Directory names
pub const DOCS_ROOT_DIR: &str = ".component-docs";
pub const DOCS_DIR: &str = "docs";

/// Markdown file extension, without the leading dot
pub const MARKDOWN_EXTENSION: &str = "md";

/// Filename limits
pub const MAX_FILENAME_LENGTH: usize = 100;
pub const FILENAME_PATTERN: &str = "^[a-zA-Z0-9._-]+$";

/// Search query limits, in characters
pub const MIN_QUERY_LENGTH: usize = 2;
pub const MAX_QUERY_LENGTH: usize = 100;
