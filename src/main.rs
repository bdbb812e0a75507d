use anyhow::Result;
use clap::Parser;
use rmcp::ServiceExt;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_advisor_mcp::config::Config;
use weather_advisor_mcp::provider::WeatherApiClient;
use weather_advisor_mcp::service::Weather;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the MCP transport
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_advisor_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();

    tracing::info!("Starting weather advisor MCP server");
    tracing::debug!(
        "Provider {} (timeout {}s, default output {})",
        config.base_url,
        config.timeout_secs,
        config.output
    );

    let provider = WeatherApiClient::new(&config.api_key, &config.base_url, config.timeout())?;
    let service = Weather::new(Arc::new(provider), config.output);

    let server = service.serve(rmcp::transport::stdio()).await?;

    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
