//! 竞品检索能力

use async_trait::async_trait;

use crate::error::PipelineError;
use crate::types::ProductRecord;

pub mod product_hunt;

pub use product_hunt::ProductHuntClient;

/// 根据关键词检索相似产品
#[async_trait]
pub trait ProductSearch: Send + Sync {
    /// 返回按热度排序的若干产品；上游不可用时返回空列表而不是错误
    async fn search(&self, keywords: &[String]) -> Result<Vec<ProductRecord>, PipelineError>;
}
