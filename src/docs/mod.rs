//! # Docs Module
//!
//! Access to the per-component markdown documentation on disk.
//!
//! ## Key Components
//!
//! - [`storage`] - Path resolution, file catalog and content reading
//! - [`stats`] - Per-component statistics and the documentation overview
//! - [`types`] - Components and validated request inputs
//! - [`tools`] - Tool implementations shared by the MCP and HTTP surfaces
//! - [`outputs`] - Output types for docs operations

pub mod constants;
pub mod outputs;
pub mod stats;
pub mod storage;
pub mod tools;
pub mod types;

pub use storage::{DocsStorage, DocumentFile};
pub use types::Component;
