use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idea_scout::cli::Args;
use idea_scout::llm::LLMClient;
use idea_scout::search::ProductHuntClient;
use idea_scout::server::{self, AppState};
use idea_scout::{Pipeline, PipelineContext};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let check_connection = args.check_connection;
    let config = args.into_config()?;

    let default_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("idea_scout={},tower_http=info", default_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "++ LLM provider: {}, model: {}",
        config.llm.provider,
        config.llm.model
    );

    let llm_client = LLMClient::new(config.llm.clone())?;
    if check_connection {
        llm_client.check_connection().await?;
    }
    let search = ProductHuntClient::new(config.product_hunt.clone())?;

    let context = PipelineContext::new(
        Arc::new(llm_client),
        Arc::new(search),
        config.llm.max_parallels,
    );
    let state = AppState::new(Pipeline::new(context));

    server::serve(&config.server, state).await
}
