use std::sync::Arc;

use crate::llm::TextGenerator;
use crate::search::ProductSearch;

/// 流水线依赖的外部能力，启动时创建一次并注入
#[derive(Clone)]
pub struct PipelineContext {
    /// LLM调用器
    pub generator: Arc<dyn TextGenerator>,
    /// 竞品检索
    pub search: Arc<dyn ProductSearch>,
    /// 竞品总结的最大并发数
    pub max_parallels: usize,
}

impl PipelineContext {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        search: Arc<dyn ProductSearch>,
        max_parallels: usize,
    ) -> Self {
        Self {
            generator,
            search,
            max_parallels,
        }
    }
}
