use serde::{Deserialize, Serialize};

use crate::types::idea::IdeaAnalysis;

/// 检索到的竞品信息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ProductRecord {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    /// 上游返回的创建时间，原样保留
    pub created_at: String,
    pub votes: u64,
    pub topics: Vec<String>,
    /// 由总结步骤补充
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// 一次分析请求的完整输出
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PipelineResult {
    pub analysis: IdeaAnalysis,
    pub similar_products: Vec<ProductRecord>,
    pub competitive_advantage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_omitted_until_set() {
        let mut product = ProductRecord {
            name: "Budgetly".to_string(),
            votes: 12,
            ..Default::default()
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("summary").is_none());

        product.summary = Some("A budgeting app.".to_string());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["summary"], "A budgeting app.");
        assert_eq!(json["votes"], 12);
    }

    #[test]
    fn test_pipeline_result_top_level_keys() {
        let result = PipelineResult {
            analysis: IdeaAnalysis::raw("n/a"),
            similar_products: vec![],
            competitive_advantage: "- be faster".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        for key in ["analysis", "similar_products", "competitive_advantage"] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
    }
}
