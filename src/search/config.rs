//! # Search Configuration Module
//!
//! Limits applied when scanning documentation content.

/// Maximum number of matching lines reported per file
pub const MAX_MATCHING_LINES: usize = 10;

/// Lines of context kept before and after each matching line
pub const CONTEXT_LINES: usize = 2;

/// Compiled size limit for user-supplied patterns (1MB)
pub const REGEX_SIZE_LIMIT: usize = 1 << 20;
