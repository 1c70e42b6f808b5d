use crate::error::PipelineError;
use crate::llm::{CompletionSettings, TextGenerator};
use crate::types::IdeaAnalysis;

/// 创意分析师 - 从创意描述中抽取关键词、领域、目标用户和独特卖点
#[derive(Default, Clone)]
pub struct IdeaAnalyzer;

impl IdeaAnalyzer {
    pub const SETTINGS: CompletionSettings = CompletionSettings::new(300, 0.3);

    pub fn build_prompt(&self, idea: &str) -> String {
        format!(
            r#"
Extract the following from the business idea below:
- 5 keywords (comma-separated)
- Industry/domain
- Target audience
- Unique selling points (USPs, bullet list)
Business Idea:
"""{}"""
Return as JSON with keys: keywords, domain, target_audience, usps.
"#,
            idea
        )
    }

    /// 调用失败会向上传播；输出无法解析时退化为原始文本
    pub async fn analyze(
        &self,
        generator: &dyn TextGenerator,
        idea: &str,
    ) -> Result<IdeaAnalysis, PipelineError> {
        let text = generator
            .generate(&self.build_prompt(idea), Self::SETTINGS)
            .await?;

        let analysis = IdeaAnalysis::parse(&text);
        if !analysis.is_structured() {
            tracing::warn!("⚠️ 创意分析结果不是有效的JSON，使用原始文本");
        }
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_idea_verbatim() {
        let prompt = IdeaAnalyzer.build_prompt("A \"smart\" leash for dogs");
        assert!(prompt.contains("\"\"\"A \"smart\" leash for dogs\"\"\""));
        assert!(prompt.contains("keywords, domain, target_audience, usps"));
    }
}
