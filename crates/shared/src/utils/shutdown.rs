use tracing::info;

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }

    info!("🛑 Shutdown signal received (Ctrl+C).");
}
