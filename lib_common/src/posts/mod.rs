//! # Post Board Domain Module
//!
//! Everything about the post collection itself: the wire model, the provider
//! client, the shared in-memory store and the ingestion orchestration. The
//! web layer in the `servers` crate only ever touches this module through
//! `PostStore::snapshot` and `PostIngestor`.
//!
//! ## Contained Modules:
//!
//! - **`model`**: The `Post` value as the provider serves it.
//! - **`source`**: `PostSource`, a stateless client that fetches the post
//!   collection from the remote provider. One attempt per call.
//! - **`store`**: `PostStore`, the mutex-guarded, append-only sequence of
//!   posts. The single source of truth for what posts exist.
//! - **`ingestor`**: `PostIngestor`, which wires source and store together
//!   for the synchronous initial load and fire-and-forget background
//!   refreshes.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// The post value as served by the remote provider.
pub mod model;
/// Stateless client for the remote post provider.
pub mod source;
/// The shared, guarded, append-only post sequence.
pub mod store;
/// Fetch-then-append orchestration, synchronous and background.
pub mod ingestor;

// --- Public API Re-exports ---
pub use ingestor::PostIngestor;
pub use model::Post;
pub use source::PostSource;
pub use store::PostStore;
