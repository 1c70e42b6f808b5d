use crate::config::{Config, LLMProvider};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// 未指定配置文件时在当前目录查找的默认配置
pub const DEFAULT_CONFIG_FILE: &str = "ideascout.toml";

/// idea-scout - 商业创意竞品分析服务
#[derive(Parser, Debug)]
#[command(name = "idea-scout")]
#[command(
    about = "HTTP service that analyzes a business idea with an LLM, finds similar products on Product Hunt and suggests competitive advantages."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 监听地址
    #[arg(short, long)]
    pub bind: Option<String>,

    /// LLM Provider (openai, deepseek, moonshot, openrouter, anthropic, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址，对所有provider生效；非openai的provider未修改时使用各自的默认地址（ollama不需要API KEY）
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 使用的模型
    #[arg(long)]
    pub model: Option<String>,

    /// 单次模型调用超时时间（秒）
    #[arg(long)]
    pub llm_timeout_seconds: Option<u64>,

    /// 竞品总结的最大并发数
    #[arg(long)]
    pub max_parallels: Option<usize>,

    /// Product Hunt 访问令牌
    #[arg(long)]
    pub product_hunt_token: Option<String>,

    /// 启动时检查模型连接
    #[arg(long)]
    pub check_connection: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Result<Config> {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定的配置文件必须可读
            Config::from_file(config_path)?
        } else {
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(DEFAULT_CONFIG_FILE);

            if default_config_path.exists() {
                Config::from_file(&default_config_path)?
            } else {
                Config::default()
            }
        };

        if let Some(bind) = self.bind {
            config.server.bind_address = bind;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            match provider_str.parse::<LLMProvider>() {
                Ok(provider) => config.llm.provider = provider,
                // 日志尚未初始化
                Err(_) => eprintln!(
                    "⚠️ 警告: 未知的provider: {}，继续使用 {}",
                    provider_str,
                    config.llm.provider
                ),
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(timeout) = self.llm_timeout_seconds {
            config.llm.timeout_seconds = timeout;
        }
        if let Some(max_parallels) = self.max_parallels {
            config.llm.max_parallels = max_parallels;
        }

        if let Some(token) = self.product_hunt_token {
            config.product_hunt.token = token;
        }

        config.verbose = config.verbose || self.verbose;

        Ok(config)
    }
}
