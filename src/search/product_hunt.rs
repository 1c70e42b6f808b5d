//! Product Hunt GraphQL 检索客户端

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::config::ProductHuntConfig;
use crate::error::PipelineError;
use crate::search::ProductSearch;
use crate::types::ProductRecord;

const SEARCH_POSTS_QUERY: &str = r#"
query SearchProducts($term: String!, $first: Int!) {
  posts(query: $term, order: VOTES, first: $first) {
    edges {
      node {
        id
        name
        tagline
        description
        url
        createdAt
        votesCount
        commentsCount
        topics { edges { node { name } } }
        makers { edges { node { name, username } } }
      }
    }
  }
}
"#;

/// Product Hunt 检索客户端
#[derive(Clone)]
pub struct ProductHuntClient {
    http: reqwest::Client,
    config: ProductHuntConfig,
}

impl ProductHuntClient {
    pub fn new(config: ProductHuntConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build Product Hunt HTTP client")?;
        Ok(Self { http, config })
    }

    /// 关键词以 ", " 拼接为一个检索词
    pub fn search_term(keywords: &[String]) -> String {
        keywords.join(", ")
    }

    fn map_transport_error(&self, err: reqwest::Error) -> PipelineError {
        if err.is_timeout() {
            PipelineError::UpstreamTimeout {
                service: "Product Hunt",
                seconds: self.config.timeout_seconds,
            }
        } else {
            PipelineError::Search(err)
        }
    }
}

#[async_trait]
impl ProductSearch for ProductHuntClient {
    async fn search(&self, keywords: &[String]) -> Result<Vec<ProductRecord>, PipelineError> {
        let term = Self::search_term(keywords);
        tracing::debug!(%term, "🔍 检索 Product Hunt");

        let payload = json!({
            "query": SEARCH_POSTS_QUERY,
            "variables": {
                "term": term,
                "first": self.config.page_size,
            },
        });

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.token)
            .header(header::USER_AGENT, &self.config.user_agent)
            .header(header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if status != StatusCode::OK {
            // 检索不可用时降级为没有竞品
            tracing::error!(%status, "Product Hunt API error: {}", body);
            return Ok(Vec::new());
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        if let Some(errors) = &parsed.errors {
            for error in errors {
                tracing::warn!("Product Hunt GraphQL error: {}", error.message);
            }
        }

        let products: Vec<ProductRecord> = parsed
            .data
            .and_then(|data| data.posts)
            .map(|posts| posts.edges)
            .unwrap_or_default()
            .into_iter()
            .map(|edge| edge.node.into())
            .collect();

        tracing::info!("找到 {} 个相似产品", products.len());
        Ok(products)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<SearchData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    posts: Option<PostConnection>,
}

#[derive(Debug, Deserialize)]
struct PostConnection {
    #[serde(default)]
    edges: Vec<PostEdge>,
}

#[derive(Debug, Deserialize)]
struct PostEdge {
    node: PostNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostNode {
    name: String,
    tagline: String,
    description: Option<String>,
    url: String,
    created_at: String,
    votes_count: u64,
    topics: TopicConnection,
}

#[derive(Debug, Deserialize)]
struct TopicConnection {
    edges: Vec<TopicEdge>,
}

#[derive(Debug, Deserialize)]
struct TopicEdge {
    node: TopicNode,
}

#[derive(Debug, Deserialize)]
struct TopicNode {
    name: String,
}

impl From<PostNode> for ProductRecord {
    fn from(node: PostNode) -> Self {
        ProductRecord {
            name: node.name,
            tagline: node.tagline,
            description: node.description.unwrap_or_default(),
            url: node.url,
            created_at: node.created_at,
            votes: node.votes_count,
            topics: node
                .topics
                .edges
                .into_iter()
                .map(|edge| edge.node.name)
                .collect(),
            summary: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_joins_with_comma_space() {
        let keywords = vec!["ai".to_string(), "finance".to_string(), "saas".to_string()];
        assert_eq!(ProductHuntClient::search_term(&keywords), "ai, finance, saas");
        assert_eq!(ProductHuntClient::search_term(&[]), "");
    }

    #[test]
    fn test_post_node_flattens_topics() {
        let node: PostNode = serde_json::from_value(json!({
            "id": "1",
            "name": "Budgetly",
            "tagline": "Budgets on autopilot",
            "description": null,
            "url": "https://www.producthunt.com/posts/budgetly",
            "createdAt": "2024-03-01T08:00:00Z",
            "votesCount": 321,
            "commentsCount": 4,
            "topics": { "edges": [
                { "node": { "name": "Fintech" } },
                { "node": { "name": "Productivity" } }
            ]}
        }))
        .unwrap();

        let record = ProductRecord::from(node);
        assert_eq!(record.description, "");
        assert_eq!(record.created_at, "2024-03-01T08:00:00Z");
        assert_eq!(record.votes, 321);
        assert_eq!(record.topics, vec!["Fintech", "Productivity"]);
        assert!(record.summary.is_none());
    }

    #[test]
    fn test_post_node_missing_field_is_an_error() {
        let result = serde_json::from_value::<PostNode>(json!({
            "name": "Budgetly",
            "url": "https://example.com",
            "createdAt": "2024-03-01T08:00:00Z",
            "votesCount": 1,
            "topics": { "edges": [] }
        }));
        assert!(result.is_err());
    }
}
