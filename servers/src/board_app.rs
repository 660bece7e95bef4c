//! # Board Router and Request Handling
//!
//! One handler serves both `GET /` and `POST /`. The only method-specific
//! behavior is that POST schedules a background fetch before the snapshot
//! is taken; there is no body parsing, no validation and no idempotency
//! key. `/static/` is a plain file server.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;

use lib_common::{PageRenderer, PostIngestor, PostStore};

/// Shared state available to every request.
///
/// Wrapped in an `Arc` and cloned into each handler invocation. The store
/// is only ever read here; writes go through the ingestor's background
/// tasks.
pub struct AppState {
    /// The shared post store; the handler takes snapshots of it.
    pub store: Arc<PostStore>,
    /// Schedules background fetches on mutating requests.
    pub ingestor: Arc<PostIngestor>,
    /// Turns a snapshot into the board HTML.
    pub renderer: Arc<PageRenderer>,
}

/// Builds the application router.
///
/// Routes:
/// - `GET /` and `POST /` → [`board_handler`]
/// - `GET /static/*` → files from `static_dir`, 404 for anything missing
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(board_handler).post(board_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Serves the board page.
///
/// POST is the designated mutate method: it triggers a background fetch
/// and then behaves exactly like GET. The trigger is not awaited, so the
/// snapshot below almost always reflects the pre-trigger state; the new
/// batch shows up on a later request once the provider round trip
/// finishes.
async fn board_handler(method: Method, State(state): State<Arc<AppState>>) -> Response {
    if method == Method::POST {
        state.ingestor.trigger_async();
    }

    let posts = state.store.snapshot();

    match state.renderer.render_board(&posts) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            // Nothing has been written to the response yet, so the 500 is
            // the only thing the requester sees.
            tracing::error!(%error, "board render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render the board").into_response()
        }
    }
}
