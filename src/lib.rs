pub mod config;
pub mod docs;
pub mod error;
pub mod http;
pub mod rate_limit;
pub mod search;
pub mod service;
pub mod validation;

pub use config::AppConfig;
pub use docs::{Component, DocsStorage};
pub use error::{DocsError, DocsErrorOutput};
pub use rate_limit::{RateLimitConfig, RateLimiter};
pub use service::ComponentDocsService;
