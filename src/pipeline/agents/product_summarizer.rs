use crate::error::PipelineError;
use crate::llm::{CompletionSettings, TextGenerator};
use crate::types::ProductRecord;

/// 竞品总结 - 用两句话概括一个产品的独特之处
#[derive(Default, Clone)]
pub struct ProductSummarizer;

impl ProductSummarizer {
    pub const SETTINGS: CompletionSettings = CompletionSettings::new(100, 0.2);

    pub fn build_prompt(&self, product: &ProductRecord) -> String {
        format!(
            r#"Summarize the following product in 2 sentences for a founder. Highlight its unique aspects.
Product info:
Name: {}
Tagline: {}
Description: {}
Topics: {}
"#,
            product.name,
            product.tagline,
            product.description,
            product.topics.join(", ")
        )
    }

    pub async fn summarize(
        &self,
        generator: &dyn TextGenerator,
        product: &ProductRecord,
    ) -> Result<String, PipelineError> {
        generator
            .generate(&self.build_prompt(product), Self::SETTINGS)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_product_fields() {
        let product = ProductRecord {
            name: "Budgetly".to_string(),
            tagline: "Budgets on autopilot".to_string(),
            description: "Tracks spending".to_string(),
            topics: vec!["Fintech".to_string(), "Productivity".to_string()],
            ..Default::default()
        };

        let prompt = ProductSummarizer.build_prompt(&product);
        assert!(prompt.contains("Name: Budgetly\n"));
        assert!(prompt.contains("Tagline: Budgets on autopilot\n"));
        assert!(prompt.contains("Description: Tracks spending\n"));
        assert!(prompt.contains("Topics: Fintech, Productivity\n"));
    }
}
