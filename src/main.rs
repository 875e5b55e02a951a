//! Label Relay server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use label_relay::adapters::{app_router, HttpLabelProvider, IpnAppState, SmtpMailer};
use label_relay::application::{HandlePaymentNotificationHandler, NotificationSettings};
use label_relay::config::AppConfig;
use label_relay::domain::ipn::IpnSignatureVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load and validate configuration (also reads .env)
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Wire adapters
    let label_provider = HttpLabelProvider::new(&config.carrier)?;
    let mailer = SmtpMailer::new(&config.email)?;
    let verifier = IpnSignatureVerifier::new(config.payment.ipn_secret.clone());

    let handler = HandlePaymentNotificationHandler::new(
        Arc::new(verifier),
        Arc::new(label_provider),
        Arc::new(mailer),
        NotificationSettings::from_config(&config),
    );

    let app = app_router(IpnAppState::new(handler), config.server.request_timeout());

    let addr = config.server.socket_addr();
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        carrier_url = %config.carrier.api_url,
        "Starting label relay"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
