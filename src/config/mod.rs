use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// 大模型 API KEY 的环境变量
pub const LLM_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI 官方接口地址，也是 `api_base_url` 的默认值
pub const DEFAULT_LLM_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Product Hunt 访问令牌的环境变量
pub const PRODUCT_HUNT_TOKEN_ENV: &str = "PRODUCT_HUNT_TOKEN";

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub server: ServerConfig,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// Product Hunt 检索配置
    pub product_hunt: ProductHuntConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// HTTP 服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_address: String,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址，见 [`LLMConfig::base_url_override`]
    pub api_base_url: String,

    /// 所有步骤共用的模型
    pub model: String,

    /// 单次调用超时时间（秒）
    pub timeout_seconds: u64,

    /// 竞品总结的最大并发数，1 表示逐个执行
    pub max_parallels: usize,
}

/// Product Hunt 检索配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ProductHuntConfig {
    /// GraphQL 接口地址
    pub api_url: String,

    /// 访问令牌
    pub token: String,

    /// 返回的结果数量
    pub page_size: u32,

    /// 上游要求带浏览器风格的 User-Agent
    pub user_agent: String,

    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let mut config: Config =
            toml::from_str(&content).context("Failed to parse config file")?;
        config.apply_env_fallbacks();
        Ok(config)
    }

    /// 配置文件中未填写的密钥从环境变量读取
    pub fn apply_env_fallbacks(&mut self) {
        if self.llm.api_key.is_empty() {
            self.llm.api_key = std::env::var(LLM_API_KEY_ENV).unwrap_or_default();
        }
        if self.product_hunt.token.is_empty() {
            self.product_hunt.token = std::env::var(PRODUCT_HUNT_TOKEN_ENV).unwrap_or_default();
        }
    }
}

impl LLMConfig {
    /// 实际传给 provider 的基地址
    ///
    /// OpenAI 始终使用 `api_base_url`；其他 provider 只有在地址被改过时才覆盖各自的默认地址。
    pub fn base_url_override(&self) -> Option<&str> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return None;
        }
        if self.provider != LLMProvider::OpenAI && url == DEFAULT_LLM_API_BASE_URL {
            return None;
        }
        Some(url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: String::from("127.0.0.1:8080"),
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var(LLM_API_KEY_ENV).unwrap_or_default(),
            api_base_url: String::from(DEFAULT_LLM_API_BASE_URL),
            model: String::from("gpt-4o"),
            timeout_seconds: 60,
            max_parallels: 1,
        }
    }
}

impl Default for ProductHuntConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.producthunt.com/v2/api/graphql"),
            token: std::env::var(PRODUCT_HUNT_TOKEN_ENV).unwrap_or_default(),
            page_size: 5,
            user_agent: String::from(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36",
            ),
            timeout_seconds: 30,
        }
    }
}
