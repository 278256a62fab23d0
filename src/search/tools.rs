use std::sync::Arc;

use rmcp::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::docs::storage::DocsStorage;
use crate::error::DocsError;
use crate::rate_limit::RateLimiter;
use crate::search::outputs::SearchDocumentationOutput;
use crate::search::searcher::DocsSearcher;
use crate::validation::SearchRequest;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchDocumentationParams {
    #[schemars(
        description = "The search query, 2-100 characters. Matched case-insensitively and interpreted as a regular expression (e.g., 'booking|payment')"
    )]
    pub query: String,
    #[schemars(
        description = "Optional component identifier to restrict the search (e.g., 'asmc-api'). Searches every component when omitted"
    )]
    pub component: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchTools {
    storage: Arc<DocsStorage>,
    rate_limiter: Arc<RateLimiter>,
}

impl SearchTools {
    pub fn new(storage: Arc<DocsStorage>, rate_limiter: Arc<RateLimiter>) -> Self {
        Self {
            storage,
            rate_limiter,
        }
    }

    pub async fn search_documentation(
        &self,
        client_id: &str,
        params: SearchDocumentationParams,
    ) -> Result<SearchDocumentationOutput, DocsError> {
        self.search(
            client_id,
            SearchRequest {
                q: Some(params.query),
                component: params.component,
            },
        )
        .await
    }

    /// Search documentation on behalf of `client_id`.
    ///
    /// The request counts against the client's rate limit before validation,
    /// so malformed queries are throttled too.
    pub async fn search(
        &self,
        client_id: &str,
        request: SearchRequest,
    ) -> Result<SearchDocumentationOutput, DocsError> {
        self.rate_limiter.check(client_id)?;

        let request = request.validate()?;

        let result = DocsSearcher::new(&self.storage).search(&request.query, request.scope)?;
        tracing::info!(
            "Search '{}' from {} found {} matches",
            request.query,
            client_id,
            result.total_matches
        );

        Ok(SearchDocumentationOutput {
            result,
            scope: request.scope,
        })
    }
}
