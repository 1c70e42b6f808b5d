use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::PipelineError;

/// 返回给调用方的错误体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// HTTP 层错误
#[derive(Debug)]
pub enum ApiError {
    Pipeline(PipelineError),
    InvalidBody(JsonRejection),
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        ApiError::Pipeline(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(PipelineError::EmptyIdea) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(PipelineError::UpstreamTimeout { .. }) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            ApiError::Pipeline(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::InvalidBody(rejection) => rejection.body_text(),
            ApiError::Pipeline(err) => err.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(%status, "❌ 分析请求失败: {}", message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
