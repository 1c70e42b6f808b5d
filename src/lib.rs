pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod search;
pub mod server;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineContext};
