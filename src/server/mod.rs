//! HTTP 接口

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::pipeline::Pipeline;
use crate::types::PipelineResult;

pub mod error;

pub use error::{ApiError, ErrorBody};

/// 健康检查返回的文本
pub const LIVENESS_MESSAGE: &str = "idea-scout is running!";

/// 所有请求共享的状态
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// `POST /analyze` 请求体
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub idea: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 绑定地址并运行服务，Ctrl-C 时优雅退出
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .context(format!("Failed to bind {}", config.bind_address))?;
    tracing::info!("++ idea-scout listening on {}", config.bind_address);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("idea-scout stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        // 无法监听信号时保持运行
        std::future::pending::<()>().await;
    }
}

async fn index() -> &'static str {
    tracing::debug!("Home route hit!");
    LIVENESS_MESSAGE
}

async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<PipelineResult>, ApiError> {
    let Json(request) = body?;
    let idea = request.idea.unwrap_or_default();

    let result = state.pipeline.run(&idea).await?;
    Ok(Json(result))
}
