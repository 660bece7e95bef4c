//! # Live Provider Check
//!
//! Manual test runner that drives `PostSource` and `PostIngestor` against
//! the real JSONPlaceholder endpoint. Not part of `cargo test` (it needs
//! network access); run it by hand when checking that the provider still
//! serves the expected shape.

use std::sync::Arc;

use lib_common::{PostIngestor, PostSource, PostStore, SysConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = SysConfig::default();
    println!("--- Live provider check against {} ---", cfg.provider_base_url);

    let source = Arc::new(PostSource::new(
        &cfg.provider_base_url,
        &cfg.provider_posts_path,
    ));
    let store = Arc::new(PostStore::new());
    let ingestor = PostIngestor::new(Arc::clone(&source), Arc::clone(&store));

    // 1. One direct fetch: the provider must answer with a non-empty array.
    println!("\n[Test 1] Direct fetch...");
    let posts = source.fetch().await?;
    assert!(!posts.is_empty(), "provider returned an empty post array");
    println!("✅ Fetched {} posts, first title: {:?}", posts.len(), posts[0].title);

    // 2. Initial load populates the empty store with exactly one batch.
    println!("\n[Test 2] Initial load...");
    let count = ingestor.load_initial().await?;
    assert_eq!(store.len(), count);
    println!("✅ Store populated with {count} posts");

    // 3. A background trigger appends a second batch without dedup.
    println!("\n[Test 3] Background trigger...");
    let before = store.len();
    ingestor.trigger_async();
    for _ in 0..100 {
        if store.len() > before {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    assert!(store.len() > before, "background batch never landed");
    println!("✅ Store grew from {before} to {} posts", store.len());

    println!("\n--- All live checks passed ---");
    Ok(())
}
