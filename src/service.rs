use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::docs::storage::DocsStorage;
use crate::docs::tools::{ComponentParams, DocsTools, DownloadParams, FileParams};
use crate::error::DocsError;
use crate::rate_limit::RateLimiter;
use crate::search::tools::{SearchDocumentationParams, SearchTools};

/// Rate limit identity shared by every request arriving over stdio
pub const MCP_CLIENT_ID: &str = "mcp-stdio";

#[derive(Debug, Clone)]
pub struct ComponentDocsService {
    docs_tools: DocsTools,
    search_tools: SearchTools,
    tool_router: ToolRouter<Self>,
}

impl ComponentDocsService {
    pub fn new(storage: Arc<DocsStorage>, rate_limiter: Arc<RateLimiter>) -> Self {
        Self {
            docs_tools: DocsTools::new(storage.clone()),
            search_tools: SearchTools::new(storage, rate_limiter),
            tool_router: Self::tool_router(),
        }
    }

    pub fn docs_tools(&self) -> &DocsTools {
        &self.docs_tools
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
}

fn respond<T: Serialize>(result: Result<T, DocsError>) -> String {
    match result {
        Ok(output) => to_json(&output),
        Err(err) => {
            tracing::warn!("Tool request failed: {}", err);
            err.to_output().to_json()
        }
    }
}

#[tool_router]
impl ComponentDocsService {
    #[tool(
        description = "List every known project component with its description, tech stack and whether documentation is currently available for it. Start here to discover valid component identifiers."
    )]
    pub async fn list_components(&self) -> String {
        to_json(&self.docs_tools.list_components().await)
    }

    #[tool(
        description = "List the markdown documentation files of one component, sorted by name, with size and timestamps."
    )]
    pub async fn list_component_files(&self, params: Parameters<ComponentParams>) -> String {
        respond(self.docs_tools.list_component_files(params.0).await)
    }

    #[tool(
        description = "Read a documentation file of a component. Returns file metadata, the line count and the full markdown content. The '.md' extension is optional."
    )]
    pub async fn get_documentation_file(&self, params: Parameters<FileParams>) -> String {
        respond(self.docs_tools.get_documentation_file(params.0).await)
    }

    #[tool(
        description = "Fetch a documentation file prepared for download as markdown ('md', default) or plain text ('txt'), including the suggested attachment filename and content type."
    )]
    pub async fn download_documentation_file(
        &self,
        params: Parameters<DownloadParams>,
    ) -> String {
        respond(self.docs_tools.download_documentation_file(params.0).await)
    }

    #[tool(
        description = "Get file count, total size, total lines and averages for one component's documentation."
    )]
    pub async fn get_component_statistics(&self, params: Parameters<ComponentParams>) -> String {
        respond(self.docs_tools.get_component_statistics(params.0).await)
    }

    #[tool(
        description = "Get an overview across all components that have documentation: per-component file lists and statistics plus global totals."
    )]
    pub async fn get_documentation_overview(&self) -> String {
        to_json(&self.docs_tools.get_documentation_overview().await)
    }

    #[tool(
        description = "Search documentation content with a case-insensitive regular expression (2-100 characters), optionally restricted to one component. Returns up to 10 matching lines per file with 2 lines of context each. Searches are rate limited."
    )]
    pub async fn search_documentation(
        &self,
        params: Parameters<SearchDocumentationParams>,
    ) -> String {
        respond(
            self.search_tools
                .search_documentation(MCP_CLIENT_ID, params.0)
                .await,
        )
    }
}

#[tool_handler]
impl ServerHandler for ComponentDocsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation::from_build_env(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "MCP server for browsing and searching project component documentation. Use list_components to discover component identifiers and availability, list_component_files to see a component's documents, then get_documentation_file to read one. Use search_documentation to find content across components and get_documentation_overview or get_component_statistics for totals.".to_string(),
            ),
            ..Default::default()
        }
    }
}
