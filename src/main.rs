// Expense analyzer entry point
use anyhow::Context;
use expense_analyzer::config::settings::ServiceSettings;
use expense_analyzer::services;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    info!("Starting expense analyzer...");

    let settings = ServiceSettings::from_env();
    let addr = format!("{}:{}", settings.host, settings.port);
    info!("Analyzer will listen on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, services::app(settings)).await?;

    Ok(())
}
