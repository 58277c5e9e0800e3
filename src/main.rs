use std::sync::Arc;

use futures::future::join;
use kube::Client;
use tracing::{error, info};

use chain_backup_gateway::config::Config;
use chain_backup_gateway::gateway;
use chain_backup_gateway::metrics::{self, prometheus::MetricsState};
use chain_backup_gateway::store::KubeStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kube=info".into()),
        )
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting chain-backup-gateway"
    );

    let config = Config::from_env()?;

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes API server");

    let store = Arc::new(KubeStore::new(client));
    let metrics_state = Arc::new(MetricsState::new());

    let gateway_addr = config.gateway_addr();
    let gateway_listener = tokio::net::TcpListener::bind(gateway_addr).await?;
    let gateway_app = gateway::router(store.clone(), store, Arc::clone(&metrics_state));

    let metrics_addr = config.metrics_addr();
    let metrics_listener = tokio::net::TcpListener::bind(metrics_addr).await?;
    let metrics_app = metrics::router(metrics_state);

    let gateway_server = async move {
        info!(addr = %gateway_addr, "Starting gateway server");
        if let Err(e) = axum::serve(gateway_listener, gateway_app)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            error!(error = %e, "Gateway server error");
        }
    };

    let health_metrics_server = async move {
        info!(addr = %metrics_addr, "Starting health/metrics server");
        if let Err(e) = axum::serve(metrics_listener, metrics_app)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            error!(error = %e, "Health/metrics server error");
        }
    };

    join(gateway_server, health_metrics_server).await;

    info!("Gateway shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
