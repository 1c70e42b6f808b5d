//! 流水线错误类型

use thiserror::Error;

/// 一次分析请求中可能出现的错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 输入的创意为空
    #[error("No idea provided")]
    EmptyIdea,

    /// 调用大模型失败
    #[error("LLM request failed: {0}")]
    Llm(String),

    /// 调用产品检索服务失败（网络层）
    #[error("product search request failed: {0}")]
    Search(#[source] reqwest::Error),

    /// 产品检索服务返回的数据结构不符合约定
    #[error("malformed product search response: {0}")]
    MalformedSearchResponse(#[from] serde_json::Error),

    /// 上游服务超时
    #[error("{service} did not respond within {seconds}s")]
    UpstreamTimeout { service: &'static str, seconds: u64 },
}

impl PipelineError {
    pub fn llm(err: impl std::fmt::Display) -> Self {
        PipelineError::Llm(err.to_string())
    }
}
