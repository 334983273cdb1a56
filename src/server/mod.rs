//! Servidor HTTP (axum)

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::{AppState, CatalogHandle};

use crate::config::Config;
use crate::error::{PlumbQuoteError, Result};

/// Sobe o servidor e atende até Ctrl+C / SIGTERM
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_address.clone();
    let state = AppState::from_config(config)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            PlumbQuoteError::Server(format!("não foi possível escutar em {}: {}", addr, e))
        })?;

    tracing::info!(%addr, "servidor iniciado");
    println!("🚰 plumb-quote ouvindo em http://{}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\nServidor encerrado.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("falha ao instalar handler de Ctrl+C: {}", e);
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
                tracing::warn!("falha ao instalar handler de SIGTERM: {}", e);
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
}
