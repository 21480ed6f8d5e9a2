// Main entry point for the summarizer API server

use std::sync::Arc;

use anyhow::{Context, Result};
use inference_client::InferenceClient;
use server_core::kernel::{
    initialize_summarizer, BaseDeviceProbe, HttpModelLoader, ModelSpec, ServerDeps,
    SystemDeviceProbe,
};
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Summarizer API (abstractive + extractive)");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Determine device
    let device = SystemDeviceProbe::new(config.device_override.clone()).detect();
    tracing::info!(device = %device, "Device for summarizer");

    // Load the generation model once; failure leaves the server extractive-only
    let spec = ModelSpec {
        model_id: config.model_name.clone(),
        cache_dir: config.model_cache_dir.clone(),
        device,
    };
    let summarizer = match InferenceClient::with_timeout(&config.inference_url, config.inference_timeout)
    {
        Ok(client) => {
            let client = match &config.inference_api_token {
                Some(token) => client.with_api_token(token.clone()),
                None => client,
            };
            let loader = HttpModelLoader::new(Arc::new(client));
            initialize_summarizer(&loader, &spec, config.generation_concurrency).await
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create inference client; abstractive summaries disabled");
            None
        }
    };

    let deps = ServerDeps::new(summarizer, config.model_name.clone(), device);

    // Build application
    let app = build_app(deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Summarize endpoint: http://localhost:{}/summarize", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
