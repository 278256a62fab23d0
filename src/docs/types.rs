//! Type definitions for validated documentation inputs
//!
//! Components, filenames, queries and download formats are parsed once at the
//! request boundary. Everything past that point works with these types and
//! never re-checks raw strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::docs::constants::{
    FILENAME_PATTERN, MARKDOWN_EXTENSION, MAX_FILENAME_LENGTH, MAX_QUERY_LENGTH,
    MIN_QUERY_LENGTH,
};
use crate::error::DocsError;

/// One of the fixed documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    #[serde(rename = "asmc-api")]
    Api,
    #[serde(rename = "asmc-admin")]
    Admin,
    #[serde(rename = "asmcdae-mobile")]
    Mobile,
    #[serde(rename = "asmc-next")]
    Next,
    #[serde(rename = "system-deployment")]
    SystemDeployment,
}

/// Display metadata for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub icon: &'static str,
    pub color: &'static str,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::Api,
        Component::Admin,
        Component::Mobile,
        Component::Next,
        Component::SystemDeployment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Api => "asmc-api",
            Component::Admin => "asmc-admin",
            Component::Mobile => "asmcdae-mobile",
            Component::Next => "asmc-next",
            Component::SystemDeployment => "system-deployment",
        }
    }

    /// All identifiers, in listing order
    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(Component::as_str).collect()
    }

    pub fn info(&self) -> ComponentInfo {
        match self {
            Component::Api => ComponentInfo {
                name: "ASMC API",
                description: "REST backend serving membership, booking, events and CMS content",
                tech_stack: &["Node.js", "Express", "MongoDB", "Mongoose"],
                icon: "server",
                color: "#2563eb",
            },
            Component::Admin => ComponentInfo {
                name: "ASMC Admin Panel",
                description: "Administration panel for content, members, bookings and payments",
                tech_stack: &["React", "Redux", "Material UI"],
                icon: "layout-dashboard",
                color: "#7c3aed",
            },
            Component::Mobile => ComponentInfo {
                name: "ASMC DAE Mobile",
                description: "Mobile companion app wrapping the member site in authenticated views",
                tech_stack: &["React Native", "Expo", "WebView"],
                icon: "smartphone",
                color: "#059669",
            },
            Component::Next => ComponentInfo {
                name: "ASMC Website",
                description: "Public marketing and booking website",
                tech_stack: &["Next.js", "React", "Tailwind CSS"],
                icon: "globe",
                color: "#0f172a",
            },
            Component::SystemDeployment => ComponentInfo {
                name: "System Deployment",
                description: "Server provisioning, process management and database backups",
                tech_stack: &["Nginx", "PM2", "MongoDB Tools", "Cron"],
                icon: "cloud-cog",
                color: "#ea580c",
            },
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|component| component.as_str() == s)
            .ok_or_else(|| {
                DocsError::validation(
                    "component",
                    s,
                    "must be one of the known documentation components",
                    Self::identifiers(),
                )
            })
    }
}

/// Owned component metadata for API responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetails {
    pub id: Component,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub icon: String,
    pub color: String,
}

impl From<Component> for ComponentDetails {
    fn from(component: Component) -> Self {
        let info = component.info();
        Self {
            id: component,
            name: info.name.to_string(),
            description: info.description.to_string(),
            tech_stack: info.tech_stack.iter().map(|s| s.to_string()).collect(),
            icon: info.icon.to_string(),
            color: info.color.to_string(),
        }
    }
}

fn is_safe_filename_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// A filename restricted to `[a-zA-Z0-9._-]`, 1 to 100 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocFileName(String);

impl DocFileName {
    pub fn new(raw: impl Into<String>) -> Result<Self, DocsError> {
        let raw = raw.into();

        if raw.is_empty() || raw.len() > MAX_FILENAME_LENGTH {
            return Err(DocsError::validation(
                "filename",
                raw,
                format!("must be between 1 and {MAX_FILENAME_LENGTH} characters"),
                [FILENAME_PATTERN],
            ));
        }

        if !raw.chars().all(is_safe_filename_char) {
            return Err(DocsError::validation(
                "filename",
                raw,
                "contains invalid characters. Only letters, digits, '.', '_' and '-' are allowed",
                [FILENAME_PATTERN],
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The on-disk filename, with the markdown extension appended if missing
    pub fn markdown_filename(&self) -> String {
        if is_markdown_filename(&self.0) {
            self.0.clone()
        } else {
            format!("{}.{MARKDOWN_EXTENSION}", self.0)
        }
    }

    /// The filename without its markdown extension
    pub fn logical_name(&self) -> &str {
        logical_name(&self.0)
    }
}

impl fmt::Display for DocFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocFileName {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Whether a filename carries the `.md` suffix
pub fn is_markdown_filename(filename: &str) -> bool {
    filename
        .strip_suffix(MARKDOWN_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Strip the `.md` suffix from a filename
pub fn logical_name(filename: &str) -> &str {
    if is_markdown_filename(filename) {
        &filename[..filename.len() - MARKDOWN_EXTENSION.len() - 1]
    } else {
        filename
    }
}

/// A search query of 2 to 100 characters, compiled later as a regex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Result<Self, DocsError> {
        let raw = raw.into();
        let length = raw.chars().count();

        if !(MIN_QUERY_LENGTH..=MAX_QUERY_LENGTH).contains(&length) {
            return Err(DocsError::validation(
                "query",
                raw,
                format!(
                    "must be between {MIN_QUERY_LENGTH} and {MAX_QUERY_LENGTH} characters"
                ),
                Vec::<String>::new(),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format of a downloaded documentation file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    #[default]
    Md,
    Txt,
}

impl DownloadFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Md => "md",
            DownloadFormat::Txt => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            DownloadFormat::Md => "text/markdown; charset=utf-8",
            DownloadFormat::Txt => "text/plain; charset=utf-8",
        }
    }
}

impl FromStr for DownloadFormat {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" => Ok(DownloadFormat::Md),
            "txt" => Ok(DownloadFormat::Txt),
            other => Err(DocsError::validation(
                "format",
                other,
                "unsupported download format",
                ["md", "txt"],
            )),
        }
    }
}
