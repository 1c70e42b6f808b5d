//! LLM Provider支持模块

use anyhow::Result;
use rig::{agent::Agent, client::CompletionClient, completion::Prompt};
use serde_json::json;

use crate::config::{LLMConfig, LLMProvider};
use crate::llm::CompletionSettings;

/// 统一的Provider客户端枚举
#[derive(Clone)]
pub enum ProviderClient {
    OpenAI(rig::providers::openai::Client),
    DeepSeek(rig::providers::deepseek::Client),
    Moonshot(rig::providers::moonshot::Client),
    OpenRouter(rig::providers::openrouter::Client),
    Anthropic(rig::providers::anthropic::Client),
    Ollama(rig::providers::ollama::Client),
}

impl ProviderClient {
    /// 根据配置创建相应的provider客户端
    pub fn new(config: &LLMConfig) -> Result<Self> {
        let base_url = config.base_url_override();
        match config.provider {
            LLMProvider::OpenAI => {
                let mut builder = rig::providers::openai::Client::builder(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::OpenAI(builder.build()))
            }
            LLMProvider::DeepSeek => {
                let mut builder = rig::providers::deepseek::Client::builder(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::DeepSeek(builder.build()))
            }
            LLMProvider::Moonshot => {
                let mut builder = rig::providers::moonshot::Client::builder(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::Moonshot(builder.build()))
            }
            LLMProvider::OpenRouter => {
                let mut builder = rig::providers::openrouter::Client::builder(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::OpenRouter(builder.build()))
            }
            LLMProvider::Anthropic => {
                let mut builder = rig::providers::anthropic::Client::builder(&config.api_key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::Anthropic(builder.build()?))
            }
            LLMProvider::Ollama => {
                // 本地服务，不需要 API KEY
                let mut builder = rig::providers::ollama::Client::builder();
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(ProviderClient::Ollama(builder.build()))
            }
        }
    }

    /// 按单次调用的参数创建不带preamble和工具的Agent
    pub fn create_agent(&self, model: &str, settings: CompletionSettings) -> ProviderAgent {
        let max_tokens = u64::from(settings.max_tokens);
        // openai/deepseek/openrouter 的请求体不带 max_tokens，ollama 需要放进 options.num_predict
        let token_limit = json!({ "max_tokens": max_tokens });
        match self {
            ProviderClient::OpenAI(client) => {
                // 使用 chat completions 接口
                let agent = client
                    .completion_model(model)
                    .completions_api()
                    .into_agent_builder()
                    .max_tokens(max_tokens)
                    .temperature(settings.temperature)
                    .additional_params(token_limit)
                    .build();
                ProviderAgent::OpenAI(agent)
            }
            ProviderClient::DeepSeek(client) => {
                let agent = client
                    .agent(model)
                    .max_tokens(max_tokens)
                    .temperature(settings.temperature)
                    .additional_params(token_limit)
                    .build();
                ProviderAgent::DeepSeek(agent)
            }
            ProviderClient::Moonshot(client) => {
                let agent = client
                    .agent(model)
                    .max_tokens(max_tokens)
                    .temperature(settings.temperature)
                    .build();
                ProviderAgent::Moonshot(agent)
            }
            ProviderClient::OpenRouter(client) => {
                let agent = client
                    .agent(model)
                    .max_tokens(max_tokens)
                    .temperature(settings.temperature)
                    .additional_params(token_limit)
                    .build();
                ProviderAgent::OpenRouter(agent)
            }
            ProviderClient::Anthropic(client) => {
                let agent = client
                    .agent(model)
                    .max_tokens(max_tokens)
                    .temperature(settings.temperature)
                    .build();
                ProviderAgent::Anthropic(agent)
            }
            ProviderClient::Ollama(client) => {
                let agent = client
                    .agent(model)
                    .max_tokens(max_tokens)
                    .temperature(settings.temperature)
                    .additional_params(json!({ "num_predict": max_tokens }))
                    .build();
                ProviderAgent::Ollama(agent)
            }
        }
    }
}

/// 统一的Agent枚举
pub enum ProviderAgent {
    OpenAI(Agent<rig::providers::openai::CompletionModel>),
    DeepSeek(Agent<rig::providers::deepseek::CompletionModel>),
    Moonshot(Agent<rig::providers::moonshot::CompletionModel>),
    OpenRouter(Agent<rig::providers::openrouter::CompletionModel>),
    Anthropic(Agent<rig::providers::anthropic::completion::CompletionModel>),
    Ollama(Agent<rig::providers::ollama::CompletionModel<reqwest::Client>>),
}

impl ProviderAgent {
    /// 执行prompt
    pub async fn prompt(&self, prompt: &str) -> Result<String> {
        match self {
            ProviderAgent::OpenAI(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::DeepSeek(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::Moonshot(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::OpenRouter(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::Anthropic(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
            ProviderAgent::Ollama(agent) => agent.prompt(prompt).await.map_err(|e| e.into()),
        }
    }
}
