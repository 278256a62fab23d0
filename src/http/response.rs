use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{DocsError, DocsErrorOutput};

/// JSON envelope for every REST response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DocsErrorOutput>,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            message: None,
            result: Some(result),
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    pub fn failure(error: &DocsError) -> Self {
        Self {
            success: false,
            message: Some(error.to_string()),
            result: None,
            error: Some(error.to_output()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// A [`DocsError`] rendered as an HTTP error response
#[derive(Debug)]
pub struct ApiError(pub DocsError);

impl From<DocsError> for ApiError {
    fn from(err: DocsError) -> Self {
        Self(err)
    }
}

pub fn status_for(error: &DocsError) -> StatusCode {
    match error {
        DocsError::Validation { .. } => StatusCode::BAD_REQUEST,
        DocsError::ComponentNotFound { .. } | DocsError::FileNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        DocsError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        tracing::debug!("Request failed with {}: {}", status, self.0);

        let mut response = (status, Json(ApiResponse::failure(&self.0))).into_response();
        if let Some(secs) = self.0.retry_after_secs() {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;
