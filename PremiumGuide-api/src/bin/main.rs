use std::sync::Arc;
use dotenv::dotenv;
use tokio::signal;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use premium_guide_api::api::create_application;
use premium_guide_api::config::ServerConfig;
use premium_guide_domain::config::ArtifactConfig;
use premium_guide_domain::services::{create_default_premium_service, PricingPolicy, PremiumServiceTrait};

/// The main entry point for the PremiumGuide server
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Sets up tracing for logging
/// 3. Loads the model and dataset, exiting if either is unusable
/// 4. Creates and starts the Axum web application
/// 5. Handles graceful shutdown
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_ansi(true)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stdout))
        .with(env_filter)
        .init();

    info!("🚀 Starting PremiumGuide server");

    let server_config = ServerConfig::from_env()?;
    let artifact_config = ArtifactConfig::from_env();
    let pricing = PricingPolicy::from_env();

    // Missing or malformed artifacts are fatal
    let service = match create_default_premium_service(&artifact_config, pricing) {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to load artifacts: {}", e);
            return Err(anyhow::Error::new(e)
                .context("could not initialize the premium model")
                .into());
        }
    };

    info!(
        "Model: {}; average premium {:.0} over {} rows",
        service.model_description(),
        service.average_premium(),
        service.dataset_rows()
    );

    let app = create_application(Arc::new(service), &server_config);

    let addr = server_config.socket_addr();
    info!("Listening on http://{} ({})", addr, server_config.app_env);

    // Create a TCP listener and bind to the address
    let listener = TcpListener::bind(addr).await?;

    // Serve the application with graceful shutdown support
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Sets up a signal handler for graceful shutdown
///
/// Waits for either CTRL+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
