//! 大模型文本生成能力

use async_trait::async_trait;

use crate::error::PipelineError;

pub mod client;

pub use client::LLMClient;

/// 单次调用的生成参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSettings {
    /// 最大输出tokens
    pub max_tokens: u32,
    /// 温度
    pub temperature: f64,
}

impl CompletionSettings {
    pub const fn new(max_tokens: u32, temperature: f64) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

/// 文本生成能力，流水线各步骤通过它调用大模型
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 以单条 user 消息发送 prompt，返回去除首尾空白后的回复文本
    async fn generate(
        &self,
        prompt: &str,
        settings: CompletionSettings,
    ) -> Result<String, PipelineError>;
}
