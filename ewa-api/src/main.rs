//! ewa-api - E-Waste Analyzer API service
//!
//! Classifies uploaded images through the external inference service and
//! relays generated disposal guidance to the browser over SSE.

use anyhow::{Context, Result};
use clap::Parser;
use ewa_api::classify::InferenceClient;
use ewa_api::relay::{GeminiClient, Generator, UnconfiguredGenerator};
use ewa_api::{build_router, AppState};
use ewa_common::config::{ConfigOverrides, ServiceConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for ewa-api
#[derive(Parser, Debug)]
#[command(name = "ewa-api")]
#[command(about = "E-Waste Analyzer API: image classification gateway and guidance relay")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long, env = "EWA_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL of the image classification service
    #[arg(long)]
    inference_url: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            host: self.host.clone(),
            port: self.port,
            inference_api_url: self.inference_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServiceConfig::resolve(&args.overrides()).context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ewa_api={0},ewa_common={0},tower_http={0}", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before anything can stall
    info!(
        "Starting E-Waste Analyzer API (ewa-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    info!("Inference service: {}", config.inference_api_url);
    let classifier = InferenceClient::new(config.inference_api_url.clone())
        .context("Failed to create inference HTTP client")?;

    let generator: Arc<dyn Generator> = match &config.gemini_api_key {
        Some(key) => {
            info!("Generative model: {}", config.gemini_model);
            Arc::new(
                GeminiClient::new(key.clone(), config.gemini_model.clone())
                    .context("Failed to create Gemini HTTP client")?,
            )
        }
        None => {
            warn!("GEMINI_API_KEY not configured; every /stream request will end with an error event");
            Arc::new(UnconfiguredGenerator)
        }
    };

    let state = AppState::new(Arc::new(classifier), generator);
    let app = build_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("ewa-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
