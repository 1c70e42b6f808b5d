pub mod idea;
pub mod product;

pub use idea::{IdeaAnalysis, StructuredAnalysis, TextOrList};
pub use product::{PipelineResult, ProductRecord};
