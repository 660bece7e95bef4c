//! # PostBoard Server
//!
//! The production binary for the PostBoard service. It fetches the initial
//! post collection from the remote provider, then serves the board over
//! plain HTTP on a fixed port.
//!
//! ## Core Responsibilities:
//! - **Startup sequencing:** The initial fetch is awaited before the
//!   listener is bound; if it fails the process exits with a diagnostic and
//!   never serves.
//! - **Request handling:** `GET /` renders the current snapshot, `POST /`
//!   additionally schedules a background fetch, `/static/` serves assets.
//! - **Lifecycle:** Fatal exit on bind failure, graceful shutdown on
//!   `CTRL+C` and `SIGTERM`.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use lib_common::{PageRenderer, PostIngestor, PostSource, PostStore, SysConfig};
use servers::board_app::{AppState, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- Phase 1: Logging Setup ---
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // --- Phase 2: Configuration ---
    // All values are compile-time defaults; log the effective set once.
    let cfg = SysConfig::default();
    tracing::info!("{cfg}");

    // --- Phase 3: Core Components ---
    let store = Arc::new(PostStore::new());
    let source = Arc::new(PostSource::new(
        &cfg.provider_base_url,
        &cfg.provider_posts_path,
    ));
    let ingestor = Arc::new(PostIngestor::new(source, Arc::clone(&store)));
    let renderer = Arc::new(PageRenderer::new(cfg.template_path.clone()));

    // --- Phase 4: Initial Load ---
    // The one synchronous fetch. The service never serves an unpopulated
    // store: a failure here is fatal and the listener is never bound.
    let count = ingestor
        .load_initial()
        .await
        .context("initial post fetch failed; refusing to start")?;
    tracing::info!(count, "post store populated");

    // --- Phase 5: Router Construction ---
    let state = Arc::new(AppState {
        store,
        ingestor,
        renderer,
    });
    let app = build_router(state, &cfg.static_dir);

    // --- Phase 6: Bind and Serve ---
    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    tracing::info!("PostBoard live at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when `CTRL+C` or, on UNIX, `SIGTERM` arrives.
///
/// Background fetches spawned by `trigger_async` hold no shutdown hook;
/// whatever is in flight when the runtime winds down is abandoned with it.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
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
