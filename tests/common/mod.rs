#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::{Arc, Mutex};

use idea_scout::PipelineError;
use idea_scout::llm::{CompletionSettings, TextGenerator};
use idea_scout::search::ProductSearch;
use idea_scout::server::{AppState, build_router};
use idea_scout::types::ProductRecord;
use idea_scout::{Pipeline, PipelineContext};

pub const ANALYSIS_JSON: &str = r#"{"keywords": ["ai", "bookkeeping", "smb", "saas", "automation"], "domain": "FinTech", "target_audience": "Small business owners", "usps": ["Zero manual entry", "Talks to your bank"]}"#;
pub const ADVICE: &str = "- Integrate with local banks\n- Offer a free tier\n- Focus on freelancers";

/// 模型失败的方式
#[derive(Clone, Copy, PartialEq)]
pub enum Failure {
    None,
    Summaries,
    AdviceTimeout,
}

/// 按 prompt 内容返回固定回复的模型桩
pub struct StubGenerator {
    pub analysis: String,
    pub failure: Failure,
    pub prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(analysis: &str) -> Self {
        Self {
            analysis: analysis.to_string(),
            failure: Failure::None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(analysis: &str, failure: Failure) -> Self {
        Self {
            failure,
            ..Self::new(analysis)
        }
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _settings: CompletionSettings,
    ) -> Result<String, PipelineError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if prompt.contains("Extract the following") {
            return Ok(self.analysis.clone());
        }
        if prompt.contains("Summarize the following product") {
            if self.failure == Failure::Summaries {
                return Err(PipelineError::llm("upstream 503"));
            }
            let name = prompt
                .lines()
                .find_map(|l| l.strip_prefix("Name: "))
                .unwrap_or_default();
            return Ok(format!("{} helps founders. It is unique.", name));
        }
        if self.failure == Failure::AdviceTimeout {
            return Err(PipelineError::UpstreamTimeout {
                service: "LLM provider",
                seconds: 60,
            });
        }
        Ok(ADVICE.to_string())
    }
}

/// 返回固定产品并记录收到的关键词
pub struct StubSearch {
    pub products: Vec<ProductRecord>,
    pub received: Mutex<Vec<Vec<String>>>,
}

impl StubSearch {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self {
            products,
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProductSearch for StubSearch {
    async fn search(&self, keywords: &[String]) -> Result<Vec<ProductRecord>, PipelineError> {
        self.received.lock().unwrap().push(keywords.to_vec());
        Ok(self.products.clone())
    }
}

pub fn sample_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            name: "LedgerBot".to_string(),
            tagline: "Bookkeeping on autopilot".to_string(),
            description: "Connects to your bank and categorizes everything.".to_string(),
            url: "https://www.producthunt.com/posts/ledgerbot".to_string(),
            created_at: "2024-01-15T08:01:00Z".to_string(),
            votes: 812,
            topics: vec!["Fintech".to_string(), "Artificial Intelligence".to_string()],
            summary: None,
        },
        ProductRecord {
            name: "Receiptly".to_string(),
            tagline: "Snap receipts, done".to_string(),
            description: "Receipt scanning for freelancers.".to_string(),
            url: "https://www.producthunt.com/posts/receiptly".to_string(),
            created_at: "2023-09-02T07:00:00Z".to_string(),
            votes: 240,
            topics: vec!["Productivity".to_string()],
            summary: None,
        },
    ]
}

pub fn router_with(
    generator: Arc<dyn TextGenerator>,
    search: Arc<dyn ProductSearch>,
) -> Router {
    let context = PipelineContext::new(generator, search, 1);
    build_router(AppState::new(Pipeline::new(context)))
}
