//! HTTP surface over [`UserStore`].
//!
//! Routes:
//! - `GET /` → `Hello World`
//! - `POST /users` → `201` with `{"id": n}` and a `Location` header
//! - `GET /users/{id}` → `200` with `{"name": ...}`
//! - `DELETE /users/{id}` → `204`

mod error;
mod handlers;

pub use error::ApiError;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::store::UserStore;

/// Build the application router around a shared store.
pub fn router(store: Arc<UserStore>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/users", post(handlers::create_user))
        .route(
            "/users/{id}",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .with_state(store)
}

/// Bind a listener on the configured host and port.
pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port)).await
}

/// Serve requests until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, store: Arc<UserStore>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}
