//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::config::LLMConfig;
use crate::error::PipelineError;
use crate::llm::{CompletionSettings, TextGenerator};

mod providers;

use providers::ProviderClient;

/// LLM客户端 - 进程启动时创建一次，所有请求共享
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        tracing::info!("🔄 正在检查模型连接...");
        match self.generate("Hello", CompletionSettings::new(16, 0.0)).await {
            Ok(_) => {
                tracing::info!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                tracing::error!("❌ 模型连接失败: {}", e);
                Err(e.into())
            }
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}

#[async_trait]
impl TextGenerator for LLMClient {
    async fn generate(
        &self,
        prompt: &str,
        settings: CompletionSettings,
    ) -> Result<String, PipelineError> {
        let agent = self.client.create_agent(&self.config.model, settings);

        tracing::debug!(
            model = %self.config.model,
            max_tokens = settings.max_tokens,
            temperature = settings.temperature,
            "调用模型服务"
        );

        match tokio::time::timeout(self.timeout(), agent.prompt(prompt)).await {
            Ok(Ok(text)) => Ok(text.trim().to_string()),
            Ok(Err(e)) => {
                tracing::error!("❌ 调用模型服务出错: {:#}", e);
                Err(PipelineError::llm(format!("{:#}", e)))
            }
            Err(_) => Err(PipelineError::UpstreamTimeout {
                service: "LLM provider",
                seconds: self.config.timeout_seconds,
            }),
        }
    }
}
