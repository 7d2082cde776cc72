use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taggart_core::{
    load_config, validate_config, AssistantClient, HelpdeskClient, OpenAiAssistantClient,
    TicketClassifier, ZendeskClient,
};

use taggart_server::api::create_router;
use taggart_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("TAGGART_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration; missing credentials are fatal here, never
    // surfaced as per-request errors.
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Helpdesk domain: {}", config.helpdesk.domain);
    info!("Assistant id: {}", config.assistant.assistant_id);
    info!(
        "Poll policy: every {}ms, up to {} checks",
        config.classifier.poll_interval_ms, config.classifier.max_checks
    );

    // Create the external service clients
    let helpdesk = Arc::new(
        ZendeskClient::new(config.helpdesk.clone())
            .context("Failed to create helpdesk client")?,
    );
    info!("Helpdesk client initialized ({})", helpdesk.backend());

    let assistant = Arc::new(
        OpenAiAssistantClient::new(config.assistant.clone())
            .context("Failed to create assistant client")?,
    );
    info!("Assistant client initialized ({})", assistant.provider());

    // Create the classifier
    let classifier = Arc::new(TicketClassifier::new(
        helpdesk,
        assistant,
        config.classifier.clone(),
    ));

    // Create app state and router
    let state = Arc::new(AppState::new(config.clone(), classifier));
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
