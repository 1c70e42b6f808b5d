use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 模型可能返回字符串也可能返回列表的字段，输出时保留原始形态
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TextOrList {
    List(Vec<String>),
    Text(String),
    /// 其他任意 JSON 值（数字、对象、混合类型列表、null），原样保留
    Other(Value),
}

impl TextOrList {
    /// 转换为有序列表；逗号拼接的字符串会被拆分并去除首尾空白
    pub fn to_list(&self) -> Vec<String> {
        match self {
            TextOrList::List(items) => items.clone(),
            TextOrList::Text(joined) => joined.split(',').map(|s| s.trim().to_string()).collect(),
            TextOrList::Other(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            TextOrList::Other(_) => Vec::new(),
        }
    }
}

/// 字段出现即保留，包括显式的 null
fn present<'de, D>(deserializer: D) -> Result<Option<TextOrList>, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrList::deserialize(deserializer).map(Some)
}

/// 结构化的创意分析结果
///
/// 已知字段接受任意形态，模型额外返回的字段保存在 `extra` 中并原样输出。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StructuredAnalysis {
    /// 关键词
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub keywords: Option<TextOrList>,
    /// 行业/领域
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub domain: Option<TextOrList>,
    /// 目标用户
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<TextOrList>,
    /// 独特卖点
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub usps: Option<TextOrList>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 创意分析：结构化结果，或者模型输出无法解析时的原始文本
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum IdeaAnalysis {
    Structured(StructuredAnalysis),
    Raw { raw: String },
}

impl IdeaAnalysis {
    /// 尽力解析模型输出：任何 JSON 对象都视为结构化结果，其余退化为原始文本
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let candidate = strip_code_fence(text);

        match serde_json::from_str::<Value>(candidate) {
            Ok(value @ Value::Object(_)) => match serde_json::from_value::<StructuredAnalysis>(value) {
                Ok(analysis) => IdeaAnalysis::Structured(analysis),
                Err(e) => {
                    tracing::warn!("analysis object could not be mapped: {}", e);
                    IdeaAnalysis::raw(text)
                }
            },
            _ => IdeaAnalysis::raw(text),
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        IdeaAnalysis::Raw { raw: text.into() }
    }

    /// 用于检索的关键词列表，原始文本回退或缺少关键词时为空
    pub fn keywords(&self) -> Vec<String> {
        match self {
            IdeaAnalysis::Structured(analysis) => analysis
                .keywords
                .as_ref()
                .map(TextOrList::to_list)
                .unwrap_or_default(),
            IdeaAnalysis::Raw { .. } => Vec::new(),
        }
    }
    pub fn is_structured(&self) -> bool {
        matches!(self, IdeaAnalysis::Structured(_))
    }
}

/// 去掉包裹在外层的 markdown 代码块（```json ... ```）
fn strip_code_fence(text: &str) -> &str {
    let Some(body) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = body.strip_suffix("```") else {
        return text;
    };
    // 跳过语言标记所在的第一行
    match body.split_once('\n') {
        Some((_lang, rest)) => rest.trim(),
        None => body.trim(),
    }
}
