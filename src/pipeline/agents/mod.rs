pub mod advantage_advisor;
pub mod idea_analyzer;
pub mod product_summarizer;

pub use advantage_advisor::AdvantageAdvisor;
pub use idea_analyzer::IdeaAnalyzer;
pub use product_summarizer::ProductSummarizer;
