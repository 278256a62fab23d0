use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::client::ClientId;
use super::extract::{ApiPath, ApiQuery};
use super::response::{ApiError, ApiResponse, ApiResult};
use crate::docs::outputs::{GetFileOutput, ListComponentsOutput, ListFilesOutput, StatisticsOutput};
use crate::docs::stats::DocumentationOverview;
use crate::docs::tools::{ComponentParams, DownloadParams, FileParams};
use crate::search::outputs::SearchDocumentationOutput;
use crate::validation::SearchRequest;

#[derive(Debug, Default, Deserialize)]
pub struct DownloadQuery {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthOutput {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub docs_root: String,
    pub docs_root_exists: bool,
}

pub async fn list_components(State(state): State<AppState>) -> ApiResponse<ListComponentsOutput> {
    ApiResponse::ok(state.docs_tools.list_components().await)
}

pub async fn overview(State(state): State<AppState>) -> ApiResponse<DocumentationOverview> {
    ApiResponse::ok(state.docs_tools.get_documentation_overview().await)
}

pub async fn list_files(
    State(state): State<AppState>,
    ApiPath(component): ApiPath<String>,
) -> ApiResult<ListFilesOutput> {
    let output = state
        .docs_tools
        .list_component_files(ComponentParams { component })
        .await?;
    Ok(ApiResponse::ok(output))
}

pub async fn component_stats(
    State(state): State<AppState>,
    ApiPath(component): ApiPath<String>,
) -> ApiResult<StatisticsOutput> {
    let output = state
        .docs_tools
        .get_component_statistics(ComponentParams { component })
        .await?;
    Ok(ApiResponse::ok(output))
}

pub async fn get_file(
    State(state): State<AppState>,
    ApiPath((component, filename)): ApiPath<(String, String)>,
) -> ApiResult<GetFileOutput> {
    let output = state
        .docs_tools
        .get_documentation_file(FileParams {
            component,
            filename,
        })
        .await?;
    Ok(ApiResponse::ok(output))
}

/// Raw file body served as an attachment
pub async fn download_file(
    State(state): State<AppState>,
    ApiPath((component, filename)): ApiPath<(String, String)>,
    ApiQuery(query): ApiQuery<DownloadQuery>,
) -> Result<Response, ApiError> {
    let output = state
        .docs_tools
        .download_documentation_file(DownloadParams {
            component,
            filename,
            format: query.format,
        })
        .await?;

    let headers = [
        (header::CONTENT_TYPE, output.content_type.clone()),
        (header::CONTENT_DISPOSITION, output.content_disposition()),
    ];
    Ok((headers, output.content).into_response())
}

pub async fn search(
    State(state): State<AppState>,
    client: ClientId,
    ApiQuery(request): ApiQuery<SearchRequest>,
) -> ApiResult<SearchDocumentationOutput> {
    let output = state.search_tools.search(client.as_str(), request).await?;
    let message = format!(
        "Found {} matches in {} files",
        output.result.total_matches, output.result.files_matched
    );
    Ok(ApiResponse::ok(output).with_message(message))
}

pub async fn health(State(state): State<AppState>) -> ApiResponse<HealthOutput> {
    let docs_root = state.docs_tools.storage().docs_root();
    ApiResponse::ok(HealthOutput {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        docs_root: docs_root.display().to_string(),
        docs_root_exists: docs_root.is_dir(),
    })
}
