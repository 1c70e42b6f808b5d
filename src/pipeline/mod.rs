//! 创意分析流水线：校验 → 创意分析 → 竞品检索 → 竞品总结 → 优势建议

use tracing::Instrument;

use crate::error::PipelineError;
use crate::types::{PipelineResult, ProductRecord};
use crate::utils::threads::do_parallel_with_limit;

pub mod agents;
pub mod context;
pub mod timing;

pub use context::PipelineContext;

use agents::{AdvantageAdvisor, IdeaAnalyzer, ProductSummarizer};
use timing::{TimingKeys, TimingScope};

/// 流水线编排器，不持有跨请求的状态
#[derive(Clone)]
pub struct Pipeline {
    context: PipelineContext,
    analyzer: IdeaAnalyzer,
    summarizer: ProductSummarizer,
    advisor: AdvantageAdvisor,
}

impl Pipeline {
    pub fn new(context: PipelineContext) -> Self {
        Self {
            context,
            analyzer: IdeaAnalyzer,
            summarizer: ProductSummarizer,
            advisor: AdvantageAdvisor,
        }
    }

    /// 执行一次完整分析
    pub async fn run(&self, idea: &str) -> Result<PipelineResult, PipelineError> {
        if idea.is_empty() {
            return Err(PipelineError::EmptyIdea);
        }

        let span = tracing::info_span!("analyze_idea", request_id = %uuid::Uuid::new_v4());
        self.execute(idea).instrument(span).await
    }

    async fn execute(&self, idea: &str) -> Result<PipelineResult, PipelineError> {
        let generator = self.context.generator.as_ref();
        let mut timing = TimingScope::new();
        tracing::info!("🚀 开始分析创意...");

        timing.start_phase(TimingKeys::ANALYZE);
        let analysis = self.analyzer.analyze(generator, idea).await?;
        let keywords = analysis.keywords();
        timing.end_phase(TimingKeys::ANALYZE);
        tracing::debug!(?keywords, "创意分析完成");

        timing.start_phase(TimingKeys::SEARCH);
        let products = self.context.search.search(&keywords).await?;
        timing.end_phase(TimingKeys::SEARCH);

        timing.start_phase(TimingKeys::SUMMARIZE);
        let similar_products = self.summarize_products(products).await?;
        timing.end_phase(TimingKeys::SUMMARIZE);

        timing.start_phase(TimingKeys::ADVISE);
        let competitive_advantage = self
            .advisor
            .suggest(generator, idea, &similar_products)
            .await?;
        timing.end_phase(TimingKeys::ADVISE);

        tracing::info!("✓ 创意分析完成");
        tracing::debug!("{}", timing.generate_timing_report());

        Ok(PipelineResult {
            analysis,
            similar_products,
            competitive_advantage,
        })
    }

    /// 为每个产品补充总结，任一失败则整体失败
    async fn summarize_products(
        &self,
        products: Vec<ProductRecord>,
    ) -> Result<Vec<ProductRecord>, PipelineError> {
        let generator = self.context.generator.as_ref();
        let summarizer = &self.summarizer;

        let summary_futures: Vec<_> = products
            .iter()
            .map(|product| summarizer.summarize(generator, product))
            .collect();
        let summaries = do_parallel_with_limit(summary_futures, self.context.max_parallels).await?;

        Ok(products
            .into_iter()
            .zip(summaries)
            .map(|(mut product, summary)| {
                product.summary = Some(summary);
                product
            })
            .collect())
    }
}
