use crate::error::PipelineError;
use crate::llm::{CompletionSettings, TextGenerator};
use crate::types::ProductRecord;

/// 竞争优势顾问 - 对比已有产品给出差异化建议
#[derive(Default, Clone)]
pub struct AdvantageAdvisor;

impl AdvantageAdvisor {
    pub const SETTINGS: CompletionSettings = CompletionSettings::new(150, 0.5);

    pub fn build_prompt(&self, idea: &str, products: &[ProductRecord]) -> String {
        let joined_summaries = products
            .iter()
            .enumerate()
            .map(|(i, product)| {
                format!("{}. {}", i + 1, product.summary.as_deref().unwrap_or_default())
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"
Given the user's business idea:
"""{}"""

And these existing products:
{}

Suggest 3 actionable ways the user can gain a competitive advantage.
Output as a bullet list.
"#,
            idea, joined_summaries
        )
    }

    /// 返回模型输出的原文，不做结构化解析
    pub async fn suggest(
        &self,
        generator: &dyn TextGenerator,
        idea: &str,
        products: &[ProductRecord],
    ) -> Result<String, PipelineError> {
        generator
            .generate(&self.build_prompt(idea, products), Self::SETTINGS)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_numbers_summaries() {
        let products = vec![
            ProductRecord {
                summary: Some("First product.".to_string()),
                ..Default::default()
            },
            ProductRecord {
                summary: Some("Second product.".to_string()),
                ..Default::default()
            },
        ];

        let prompt = AdvantageAdvisor.build_prompt("Dog walking app", &products);
        assert!(prompt.contains("\"\"\"Dog walking app\"\"\""));
        assert!(prompt.contains("1. First product.\n\n2. Second product."));
    }

    #[test]
    fn test_prompt_without_products() {
        let prompt = AdvantageAdvisor.build_prompt("Dog walking app", &[]);
        assert!(prompt.contains("And these existing products:\n\n\nSuggest 3"));
    }
}
