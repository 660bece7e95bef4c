//! # Post Ingestion Orchestration
//!
//! `PostIngestor` is the only writer to the store. It runs in two modes:
//!
//! - **`load_initial`**: awaited once at startup, before the server binds
//!   its listener. A failure here propagates to the caller and is fatal;
//!   the service never serves from an unpopulated store.
//! - **`trigger_async`**: fire-and-forget. Spawns a detached task that
//!   fetches and appends; the caller gets no feedback. A triggered fetch
//!   has no cancellation token and always runs to completion, success or
//!   failure, even after the originating request has been answered.
//!
//! A request that triggers a fetch and immediately snapshots the store is
//! not guaranteed to see the new batch; the append lands whenever the
//! provider round trip finishes.

#![forbid(unsafe_code)]

use std::sync::Arc;

use crate::posts::source::PostSource;
use crate::posts::store::PostStore;
use crate::retrieve::api_http::FetchError;

/// Orchestrates fetch-then-append against the shared store.
pub struct PostIngestor {
    /// The provider client. Stateless; shared with any spawned tasks.
    source: Arc<PostSource>,
    /// The shared post store all batches are appended to.
    store: Arc<PostStore>,
}

impl PostIngestor {
    /// Creates an ingestor over the given source and store.
    pub fn new(source: Arc<PostSource>, store: Arc<PostStore>) -> Self {
        Self { source, store }
    }

    /// Fetches once and appends the result, returning the batch size.
    ///
    /// This is the first population of the store at startup.
    ///
    /// # Errors
    /// Propagates the `FetchError` unchanged; the caller decides that this
    /// is fatal.
    pub async fn load_initial(&self) -> Result<usize, FetchError> {
        let batch = self.source.fetch().await?;
        let count = batch.len();
        self.store.append(batch);
        tracing::info!(count, "initial post batch loaded");
        Ok(count)
    }

    /// Schedules a background fetch-and-append and returns immediately.
    ///
    /// The spawned task outlives the caller. On fetch failure the error is
    /// logged and dropped; the request that triggered it has already been
    /// answered and is never informed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger_async(&self) {
        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            match source.fetch().await {
                Ok(batch) => {
                    let count = batch.len();
                    store.append(batch);
                    tracing::info!(count, total = store.len(), "background post batch appended");
                }
                Err(error) => {
                    tracing::warn!(%error, "background post fetch failed; batch abandoned");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use std::net::SocketAddr;
    use std::time::Duration;

    const PROVIDER_BODY: &str =
        r#"[{"userId": 1, "id": 1, "title": "one", "body": "a"},
            {"userId": 1, "id": 2, "title": "two", "body": "b"}]"#;

    async fn serve(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn ingestor_for(addr: SocketAddr) -> (PostIngestor, Arc<PostStore>) {
        let source = Arc::new(PostSource::new(&format!("http://{addr}/"), "posts"));
        let store = Arc::new(PostStore::new());
        (PostIngestor::new(source, Arc::clone(&store)), store)
    }

    /// Polls until the store reaches `expected` posts or the deadline passes.
    async fn wait_for_len(store: &PostStore, expected: usize) {
        for _ in 0..100 {
            if store.len() == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!(
            "store never reached {expected} posts (stuck at {})",
            store.len()
        );
    }

    #[tokio::test]
    async fn load_initial_populates_the_empty_store() {
        let addr = serve(Router::new().route("/posts", get(|| async { PROVIDER_BODY }))).await;
        let (ingestor, store) = ingestor_for(addr);

        let count = ingestor.load_initial().await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].title, "one");
    }

    #[tokio::test]
    async fn load_initial_propagates_provider_failure_and_leaves_store_empty() {
        let addr = serve(Router::new().route(
            "/posts",
            get(|| async { (StatusCode::BAD_GATEWAY, "nope") }),
        ))
        .await;
        let (ingestor, store) = ingestor_for(addr);

        let err = ingestor.load_initial().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 502, .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn trigger_async_appends_without_blocking_the_caller() {
        // Provider stalls well past the assertion window before answering.
        let router = Router::new().route(
            "/posts",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(800)).await;
                PROVIDER_BODY
            }),
        );
        let addr = serve(router).await;
        let (ingestor, store) = ingestor_for(addr);

        ingestor.trigger_async();

        // The trigger returns before the provider answers; the store is
        // still in its pre-trigger state.
        assert_eq!(store.len(), 0);

        // The batch lands once the stalled round trip completes.
        wait_for_len(&store, 2).await;
    }

    #[tokio::test]
    async fn failed_background_fetch_is_swallowed() {
        let addr = serve(Router::new().route(
            "/posts",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "down") }),
        ))
        .await;
        let (ingestor, store) = ingestor_for(addr);

        ingestor.trigger_async();
        tokio::time::sleep(Duration::from_millis(300)).await;

        // No append happened and nothing panicked; the error was logged and dropped.
        assert!(store.is_empty());
    }
}
