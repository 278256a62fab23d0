use std::sync::Arc;

use rmcp::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::docs::outputs::{
    ComponentAvailability, DownloadOutput, GetFileOutput, ListComponentsOutput, ListFilesOutput,
    StatisticsOutput,
};
use crate::docs::stats::{DocumentationOverview, count_lines};
use crate::docs::storage::DocsStorage;
use crate::docs::types::Component;
use crate::error::DocsError;
use crate::validation::{DownloadRequest, FileRequest, validate_component};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentParams {
    #[schemars(
        description = "The component identifier: one of 'asmc-api', 'asmc-admin', 'asmcdae-mobile', 'asmc-next', 'system-deployment'"
    )]
    pub component: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FileParams {
    #[schemars(description = "The component identifier (e.g., 'asmc-api')")]
    pub component: String,
    #[schemars(
        description = "The markdown filename, with or without the '.md' extension (letters, digits, '.', '_' and '-' only)"
    )]
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DownloadParams {
    #[schemars(description = "The component identifier (e.g., 'asmc-api')")]
    pub component: String,
    #[schemars(description = "The markdown filename, with or without the '.md' extension")]
    pub filename: String,
    #[schemars(description = "Download format: 'md' (default) or 'txt'")]
    pub format: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DocsTools {
    storage: Arc<DocsStorage>,
}

impl DocsTools {
    pub fn new(storage: Arc<DocsStorage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &DocsStorage {
        &self.storage
    }

    fn require_component(&self, component: Component) -> Result<(), DocsError> {
        if self.storage.component_exists(component) {
            Ok(())
        } else {
            Err(DocsError::ComponentNotFound {
                component: component.to_string(),
            })
        }
    }

    pub async fn list_components(&self) -> ListComponentsOutput {
        let components = Component::ALL
            .into_iter()
            .map(|component| {
                let available = self.storage.component_exists(component);
                let file_count = if available {
                    self.storage.list_component_files(component).len()
                } else {
                    0
                };
                ComponentAvailability {
                    details: component.into(),
                    available,
                    file_count,
                }
            })
            .collect();

        ListComponentsOutput { components }
    }

    pub async fn list_component_files(
        &self,
        params: ComponentParams,
    ) -> Result<ListFilesOutput, DocsError> {
        let component = validate_component(&params.component)?;
        self.require_component(component)?;

        let files = self.storage.list_component_files(component);
        Ok(ListFilesOutput {
            component: component.into(),
            total: files.len(),
            files,
        })
    }

    pub async fn get_documentation_file(
        &self,
        params: FileParams,
    ) -> Result<GetFileOutput, DocsError> {
        let (component, filename) = FileRequest {
            component: params.component,
            filename: params.filename,
        }
        .validate()?;
        self.require_component(component)?;

        let not_found = || DocsError::FileNotFound {
            component: component.to_string(),
            filename: filename.to_string(),
        };
        let file = self
            .storage
            .file_metadata(component, &filename)
            .ok_or_else(not_found)?;
        let content = self
            .storage
            .read_file(component, &filename)
            .ok_or_else(not_found)?;

        Ok(GetFileOutput {
            component,
            file,
            line_count: count_lines(&content),
            content,
        })
    }

    pub async fn download_documentation_file(
        &self,
        params: DownloadParams,
    ) -> Result<DownloadOutput, DocsError> {
        let request = DownloadRequest {
            component: params.component,
            filename: params.filename,
            format: params.format,
        }
        .validate()?;
        self.require_component(request.component)?;

        let content = self
            .storage
            .read_file(request.component, &request.filename)
            .ok_or_else(|| DocsError::FileNotFound {
                component: request.component.to_string(),
                filename: request.filename.to_string(),
            })?;

        tracing::info!(
            "Serving download of {}/{} as {}",
            request.component,
            request.filename.markdown_filename(),
            request.format.extension()
        );

        Ok(DownloadOutput {
            component: request.component,
            filename: format!(
                "{}.{}",
                request.filename.logical_name(),
                request.format.extension()
            ),
            format: request.format,
            content_type: request.format.content_type().to_string(),
            content,
        })
    }

    pub async fn get_component_statistics(
        &self,
        params: ComponentParams,
    ) -> Result<StatisticsOutput, DocsError> {
        let component = validate_component(&params.component)?;
        let statistics =
            self.storage
                .file_statistics(component)
                .ok_or_else(|| DocsError::ComponentNotFound {
                    component: component.to_string(),
                })?;

        Ok(StatisticsOutput {
            component,
            statistics,
        })
    }

    pub async fn get_documentation_overview(&self) -> DocumentationOverview {
        self.storage.documentation_overview()
    }
}
