use anyhow::Context;
use chowk_api::config::ServerArgs;
use chowk_api::state::AppState;
use chowk_api::{router, seed};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chowk_api=info,chowk_commerce=info,chowk_ai=info".into()),
        )
        .init();

    let args = ServerArgs::parse();

    let source = seed::seed_source().context("building seed catalog")?;
    let assistant = chowk_ai::assistant_from_config(&args.assistant_config());
    let state = AppState::new(Arc::new(source), assistant, args.default_location.clone());

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    tracing::info!(addr = %args.bind, "chowk api listening");
    axum::serve(listener, app).await.context("serving requests")?;
    Ok(())
}
