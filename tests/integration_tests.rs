//! Integration tests for the component-docs MCP tools
//!
//! These tests drive `ComponentDocsService` the way an MCP client would and
//! parse the JSON responses back into the typed outputs.

use anyhow::Result;
use component_docs::docs::outputs::{
    DownloadOutput, GetFileOutput, ListComponentsOutput, ListFilesOutput, StatisticsOutput,
};
use component_docs::docs::stats::DocumentationOverview;
use component_docs::docs::tools::{ComponentParams, DownloadParams, FileParams};
use component_docs::search::outputs::SearchDocumentationOutput;
use component_docs::search::tools::SearchDocumentationParams;
use component_docs::{
    ComponentDocsService, DocsErrorOutput, DocsStorage, RateLimitConfig, RateLimiter,
};
use rmcp::handler::server::wrapper::Parameters;
use serde::de::DeserializeOwned;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const API_SETUP: &str = "# Setup\n\nInstall dependencies.\nConfigure the booking service.\n";
const API_PAYMENTS: &str = "# Payments\n\nBooking payments are captured on confirmation.\n";
const NEXT_DEPLOY: &str = "# Deploy\r\nRun the build.\r\nBooking pages are static.\r\n";

fn parse<T: DeserializeOwned>(response: &str) -> Result<T> {
    serde_json::from_str(response).map_err(|e| {
        anyhow::anyhow!("Failed to parse response: {}\nResponse: {}", e, response)
    })
}

/// Docs root with two populated components and one stray non-markdown file
fn create_docs_root() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    let api = temp_dir.path().join("asmc-api");
    fs::create_dir_all(&api)?;
    fs::write(api.join("setup.md"), API_SETUP)?;
    fs::write(api.join("payments.md"), API_PAYMENTS)?;
    fs::write(api.join("notes.txt"), "booking notes are not documentation")?;

    let next = temp_dir.path().join("asmc-next");
    fs::create_dir_all(&next)?;
    fs::write(next.join("deploy.md"), NEXT_DEPLOY)?;

    Ok(temp_dir)
}

fn create_service(docs_root: &TempDir, max_requests: usize) -> ComponentDocsService {
    let storage = Arc::new(DocsStorage::new(docs_root.path()));
    let limiter = Arc::new(RateLimiter::new(RateLimitConfig {
        max_requests,
        window_secs: 60,
    }));
    ComponentDocsService::new(storage, limiter)
}

fn component(component: &str) -> Parameters<ComponentParams> {
    Parameters(ComponentParams {
        component: component.to_string(),
    })
}

fn search(query: &str, component: Option<&str>) -> Parameters<SearchDocumentationParams> {
    Parameters(SearchDocumentationParams {
        query: query.to_string(),
        component: component.map(str::to_string),
    })
}

#[tokio::test]
async fn test_list_components() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let output: ListComponentsOutput = parse(&service.list_components().await)?;
    assert_eq!(output.components.len(), 5);

    let available: Vec<_> = output
        .components
        .iter()
        .filter(|c| c.available)
        .map(|c| (c.details.id.as_str(), c.file_count))
        .collect();
    assert_eq!(available, vec![("asmc-api", 2), ("asmc-next", 1)]);
    Ok(())
}

#[tokio::test]
async fn test_list_component_files_only_markdown_sorted() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let output: ListFilesOutput = parse(&service.list_component_files(component("asmc-api")).await)?;
    let names: Vec<_> = output.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["payments", "setup"]);
    assert_eq!(output.total, 2);
    assert_eq!(output.files[1].size, API_SETUP.len() as u64);
    Ok(())
}

#[tokio::test]
async fn test_missing_component_is_not_found() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let error: DocsErrorOutput =
        parse(&service.list_component_files(component("asmc-admin")).await)?;
    assert_eq!(error.kind, "not_found");
    assert_eq!(error.component.as_deref(), Some("asmc-admin"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_component_lists_allowed_values() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let error: DocsErrorOutput = parse(&service.get_component_statistics(component("web")).await)?;
    assert_eq!(error.kind, "validation_error");
    assert_eq!(error.field.as_deref(), Some("component"));
    assert_eq!(error.allowed.len(), 5);
    assert!(error.allowed.contains(&"system-deployment".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_get_documentation_file() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let output: GetFileOutput = parse(
        &service
            .get_documentation_file(Parameters(FileParams {
                component: "asmc-api".to_string(),
                filename: "setup".to_string(),
            }))
            .await,
    )?;
    assert_eq!(output.content, API_SETUP);
    assert_eq!(output.file.filename, "setup.md");
    assert_eq!(output.line_count, 5);

    let error: DocsErrorOutput = parse(
        &service
            .get_documentation_file(Parameters(FileParams {
                component: "asmc-api".to_string(),
                filename: "notes.txt".to_string(),
            }))
            .await,
    )?;
    assert_eq!(error.kind, "not_found");
    Ok(())
}

#[tokio::test]
async fn test_path_traversal_is_rejected() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let error: DocsErrorOutput = parse(
        &service
            .get_documentation_file(Parameters(FileParams {
                component: "asmc-api".to_string(),
                filename: "../asmc-next/deploy".to_string(),
            }))
            .await,
    )?;
    assert_eq!(error.kind, "validation_error");
    assert_eq!(error.field.as_deref(), Some("filename"));
    Ok(())
}

#[tokio::test]
async fn test_download_documentation_file() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let output: DownloadOutput = parse(
        &service
            .download_documentation_file(Parameters(DownloadParams {
                component: "asmc-next".to_string(),
                filename: "deploy".to_string(),
                format: None,
            }))
            .await,
    )?;
    assert_eq!(output.filename, "deploy.md");
    assert!(output.content_type.starts_with("text/markdown"));
    assert_eq!(output.content, NEXT_DEPLOY);

    let error: DocsErrorOutput = parse(
        &service
            .download_documentation_file(Parameters(DownloadParams {
                component: "asmc-next".to_string(),
                filename: "deploy".to_string(),
                format: Some("pdf".to_string()),
            }))
            .await,
    )?;
    assert_eq!(error.field.as_deref(), Some("format"));
    Ok(())
}

#[tokio::test]
async fn test_component_statistics() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let output: StatisticsOutput =
        parse(&service.get_component_statistics(component("asmc-api")).await)?;
    let total_size = (API_SETUP.len() + API_PAYMENTS.len()) as u64;

    assert_eq!(output.statistics.total_files, 2);
    assert_eq!(output.statistics.total_size, total_size);
    // 5 lines in setup, 4 in payments (both end with a newline)
    assert_eq!(output.statistics.total_lines, 9);
    assert_eq!(output.statistics.average_lines_per_file, 5);
    assert_eq!(
        output.statistics.average_file_size,
        (total_size as f64 / 2.0).round() as u64
    );
    Ok(())
}

#[tokio::test]
async fn test_documentation_overview() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let output: DocumentationOverview = parse(&service.get_documentation_overview().await)?;
    assert_eq!(output.total_components, 2);
    assert_eq!(output.total_files, 3);
    assert_eq!(
        output.total_size,
        (API_SETUP.len() + API_PAYMENTS.len() + NEXT_DEPLOY.len()) as u64
    );

    let ids: Vec<_> = output
        .components
        .iter()
        .map(|c| c.details.id.as_str())
        .collect();
    assert_eq!(ids, vec!["asmc-api", "asmc-next"]);
    Ok(())
}

#[tokio::test]
async fn test_search_across_components() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let output: SearchDocumentationOutput =
        parse(&service.search_documentation(search("BOOKING", None)).await)?;
    assert!(output.has_results());
    assert_eq!(output.result.total_matches, 3);
    assert_eq!(output.result.files_searched, 3);
    assert_eq!(output.result.files_matched, 3);
    assert_eq!(output.result.components.len(), 2);

    let deploy = &output.result.components[1].files[0];
    assert_eq!(deploy.filename, "deploy.md");
    assert_eq!(deploy.matches[0].line_number, 3);
    assert_eq!(deploy.matches[0].content, "Booking pages are static.");
    Ok(())
}

#[tokio::test]
async fn test_search_scoped_regex() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let output: SearchDocumentationOutput = parse(
        &service
            .search_documentation(search("install|capture", Some("asmc-api")))
            .await,
    )?;
    assert_eq!(output.result.total_matches, 2);
    assert_eq!(output.result.components.len(), 1);
    assert_eq!(output.scope.map(|c| c.as_str()), Some("asmc-api"));
    Ok(())
}

#[tokio::test]
async fn test_search_validation_errors() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 10);

    let error: DocsErrorOutput = parse(&service.search_documentation(search("b", None)).await)?;
    assert_eq!(error.field.as_deref(), Some("query"));

    let error: DocsErrorOutput = parse(&service.search_documentation(search("(oops", None)).await)?;
    assert_eq!(error.kind, "validation_error");
    assert_eq!(error.field.as_deref(), Some("query"));
    Ok(())
}

#[tokio::test]
async fn test_search_is_rate_limited() -> Result<()> {
    let docs_root = create_docs_root()?;
    let service = create_service(&docs_root, 3);

    for _ in 0..3 {
        let output: SearchDocumentationOutput =
            parse(&service.search_documentation(search("setup", None)).await)?;
        assert!(output.has_results());
    }

    let error: DocsErrorOutput = parse(&service.search_documentation(search("setup", None)).await)?;
    assert_eq!(error.kind, "rate_limit_exceeded");
    assert!(error.retry_after.is_some_and(|secs| secs > 0 && secs <= 60));

    // Browsing is never rate limited
    let _: ListComponentsOutput = parse(&service.list_components().await)?;
    Ok(())
}
