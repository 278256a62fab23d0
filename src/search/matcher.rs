//! Line-oriented pattern matching over a single document.
//!
//! Queries are compiled as case-insensitive regular expressions and are not
//! escaped, so `setup|install` or `v\d+` work as patterns. Callers exposing
//! search to untrusted users should treat the query as a regex, bounded only
//! by the length limit on [`SearchQuery`] and [`REGEX_SIZE_LIMIT`].

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::docs::types::SearchQuery;
use crate::error::DocsError;
use crate::search::config::{CONTEXT_LINES, MAX_MATCHING_LINES, REGEX_SIZE_LIMIT};

/// A line near a match, tagged with its own line number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContextLine {
    pub line_number: usize,
    pub content: String,
    /// Set on the matching line the window is centered on
    pub highlighted: bool,
}

/// One line containing at least one match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    /// 1-based
    pub line_number: usize,
    /// Trimmed line content
    pub content: String,
    pub context: Vec<ContextLine>,
}

/// Matches found in one document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentMatches {
    /// Every match in the content, not only those in `matching_lines`
    pub match_count: usize,
    /// At most [`MAX_MATCHING_LINES`] entries
    pub matching_lines: Vec<SearchMatch>,
}

impl ContentMatches {
    pub fn is_empty(&self) -> bool {
        self.match_count == 0
    }
}

/// Compile a validated query into a case-insensitive pattern
pub fn compile_query(query: &SearchQuery) -> Result<Regex, DocsError> {
    compile_pattern(query.as_str())
}

/// Compile a raw pattern; length limits are the caller's concern
pub fn compile_pattern(pattern: &str) -> Result<Regex, DocsError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| {
            DocsError::validation(
                "query",
                pattern,
                format!("is not a valid search pattern: {e}"),
                Vec::<String>::new(),
            )
        })
}

/// Search content for a raw query string.
///
/// Any non-empty pattern is accepted here; the 2-100 character bound is
/// enforced when a [`SearchQuery`] is built from request input.
pub fn search_in_content(content: &str, query: &str) -> Result<ContentMatches, DocsError> {
    let pattern = compile_pattern(query)?;
    Ok(search_with_pattern(content, &pattern))
}

/// Search content with an already compiled pattern
pub fn search_with_pattern(content: &str, pattern: &Regex) -> ContentMatches {
    if content.is_empty() {
        return ContentMatches::default();
    }

    let match_count = pattern.find_iter(content).count();
    if match_count == 0 {
        return ContentMatches::default();
    }

    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let matching_lines = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .take(MAX_MATCHING_LINES)
        .map(|(index, line)| SearchMatch {
            line_number: index + 1,
            content: line.trim().to_string(),
            context: context_window(&lines, index),
        })
        .collect();

    ContentMatches {
        match_count,
        matching_lines,
    }
}

fn context_window(lines: &[&str], index: usize) -> Vec<ContextLine> {
    let start = index.saturating_sub(CONTEXT_LINES);
    let end = (index + CONTEXT_LINES).min(lines.len().saturating_sub(1));

    (start..=end)
        .map(|i| ContextLine {
            line_number: i + 1,
            content: lines[i].to_string(),
            highlighted: i == index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> SearchQuery {
        SearchQuery::new(raw).unwrap()
    }

    fn line_numbers(context: &[ContextLine]) -> Vec<usize> {
        context.iter().map(|c| c.line_number).collect()
    }

    #[test]
    fn test_empty_content() -> Result<(), DocsError> {
        let result = search_in_content("", "setup")?;
        assert_eq!(result, ContentMatches::default());
        Ok(())
    }

    #[test]
    fn test_no_match() -> Result<(), DocsError> {
        let result = search_in_content("nothing here\n", "setup")?;
        assert!(result.is_empty());
        assert!(result.matching_lines.is_empty());
        Ok(())
    }

    #[test]
    fn test_repeated_line_matches_with_clamped_context() -> Result<(), DocsError> {
        // Single-character patterns are fine below the request validation layer
        let result = search_in_content("a\nb\na\n", "a")?;

        assert_eq!(result.match_count, 2);
        assert_eq!(result.matching_lines.len(), 2);

        let first = &result.matching_lines[0];
        assert_eq!(first.line_number, 1);
        assert_eq!(first.content, "a");
        assert_eq!(line_numbers(&first.context), vec![1, 2, 3]);
        assert!(first.context[0].highlighted);
        assert!(!first.context[2].highlighted);

        let second = &result.matching_lines[1];
        assert_eq!(second.line_number, 3);
        // The trailing newline leaves an empty fourth line
        assert_eq!(line_numbers(&second.context), vec![1, 2, 3, 4]);
        assert_eq!(second.context[3].content, "");
        Ok(())
    }

    #[test]
    fn test_compile_query_is_case_insensitive() -> Result<(), DocsError> {
        let pattern = compile_query(&query("Setup"))?;
        assert!(pattern.is_match("SETUP the server"));
        Ok(())
    }

    #[test]
    fn test_case_insensitive() -> Result<(), DocsError> {
        let result = search_in_content("Booking\nBOOKING flow\nbooking", "booking")?;
        assert_eq!(result.match_count, 3);
        assert_eq!(result.matching_lines.len(), 3);
        Ok(())
    }

    #[test]
    fn test_count_includes_matches_beyond_line_cap() -> Result<(), DocsError> {
        let content = (1..=15)
            .map(|i| format!("hall hall booking {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let result = search_in_content(&content, "hall")?;

        assert_eq!(result.match_count, 30);
        assert_eq!(result.matching_lines.len(), MAX_MATCHING_LINES);
        assert_eq!(result.matching_lines[9].line_number, 10);
        Ok(())
    }

    #[test]
    fn test_match_content_is_trimmed_but_context_is_not() -> Result<(), DocsError> {
        let result = search_in_content("intro\n    indented payment\r\nend", "payment")?;
        let only = &result.matching_lines[0];

        assert_eq!(only.line_number, 2);
        assert_eq!(only.content, "indented payment");
        assert_eq!(only.context[1].content, "    indented payment");
        assert_eq!(line_numbers(&only.context), vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_context_window_in_middle_of_document() -> Result<(), DocsError> {
        let content = "l1\nl2\nl3\ntarget\nl5\nl6\nl7";
        let result = search_in_content(content, "target")?;
        assert_eq!(
            line_numbers(&result.matching_lines[0].context),
            vec![2, 3, 4, 5, 6]
        );
        Ok(())
    }

    #[test]
    fn test_query_is_treated_as_regex() -> Result<(), DocsError> {
        let content = "install guide\nsetup guide\nother";
        let result = search_in_content(content, "setup|install")?;
        assert_eq!(result.match_count, 2);

        let result = search_in_content("version v12 and v3", r"v\d+")?;
        assert_eq!(result.match_count, 2);
        Ok(())
    }

    #[test]
    fn test_invalid_pattern_is_validation_error() {
        let err = search_in_content("anything", "(unclosed").unwrap_err();
        assert!(matches!(err, DocsError::Validation { field: "query", .. }));
    }
}
