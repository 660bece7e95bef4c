//! # Shared Post Store
//!
//! The process-wide source of truth for which posts exist. One mutex covers
//! both reading and writing; there is no reader/writer split, no finer
//! locking and no lock-free path.
//!
//! ## Guarantees:
//!
//! 1.  **Append-only**: the sequence length never decreases for the lifetime
//!     of the process. Nothing is evicted, deleted or mutated in place.
//!
//! 2.  **Batch integrity**: an appended batch lands wholly after everything
//!     already present, in the order the provider returned it. Two
//!     concurrent appends serialize in some scheduler-dependent order, but
//!     each batch stays contiguous.
//!
//! 3.  **No torn reads**: a snapshot taken concurrently with an append
//!     observes either the full pre-append or the full post-append sequence,
//!     never a partially-written one.
//!
//! 4.  **No dedup**: the provider appends unconditionally, so identical
//!     posts (including exact repeats of earlier fetches) accumulate. The
//!     store preserves that; it does not reconcile duplicate ids.
//!
//! The lock is held only for the duration of the copy or extend, never
//! across an `.await`.

#![forbid(unsafe_code)]

use std::sync::Mutex;

use crate::posts::model::Post;

/// The shared, mutex-guarded, append-only sequence of posts.
///
/// Shared as `Arc<PostStore>` between the request handlers and the
/// ingestor. No component outside this type touches the underlying `Vec`.
#[derive(Debug, Default)]
pub struct PostStore {
    /// The post sequence, in insertion order.
    inner: Mutex<Vec<Post>>,
}

impl PostStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a point-in-time copy of the full post sequence.
    ///
    /// The copy is taken under the store's mutex, so it reflects a state
    /// that actually existed at some serialization point.
    pub fn snapshot(&self) -> Vec<Post> {
        self.inner.lock().expect("post store lock poisoned").clone()
    }

    /// Appends a batch after all existing posts, preserving its order.
    ///
    /// Infallible: this is a purely in-memory operation, and running out of
    /// memory is fatal rather than recoverable.
    pub fn append(&self, batch: Vec<Post>) {
        self.inner
            .lock()
            .expect("post store lock poisoned")
            .extend(batch);
    }

    /// Current number of posts, read under the same mutex as everything else.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("post store lock poisoned").len()
    }

    /// True when no posts have been appended yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    fn post(id: u64, title: &str) -> Post {
        Post {
            user_id: 1,
            id,
            title: title.to_string(),
            body: format!("body of {title}"),
        }
    }

    #[test]
    fn batches_keep_their_order_and_land_after_existing_posts() {
        let store = PostStore::new();
        store.append(vec![post(1, "a"), post(2, "b")]);
        store.append(vec![post(3, "c"), post(4, "d"), post(5, "e")]);

        let snapshot = store.snapshot();
        let titles: Vec<&str> = snapshot.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn identical_batches_are_not_deduplicated() {
        let store = PostStore::new();
        let batch = vec![post(1, "same")];
        store.append(batch.clone());
        store.append(batch);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0], snapshot[1]);
    }

    #[test]
    fn length_never_decreases_across_appends() {
        let store = PostStore::new();
        let mut last_len = store.len();
        for round in 0..20 {
            store.append(vec![post(round, "p")]);
            let len = store.len();
            assert!(len >= last_len);
            last_len = len;
        }
        assert_eq!(last_len, 20);
    }

    /// Concurrent stress: every observed snapshot must be a whole number of
    /// batches (no torn appends) and non-decreasing per reader.
    #[test]
    fn concurrent_snapshots_never_observe_a_torn_append() {
        const WRITERS: usize = 8;
        const APPENDS_PER_WRITER: usize = 50;
        const BATCH: usize = 3;

        let store = Arc::new(PostStore::new());
        let done = Arc::new(AtomicBool::new(false));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                let done = Arc::clone(&done);
                thread::spawn(move || {
                    let mut last_len = 0;
                    while !done.load(Ordering::Relaxed) {
                        let len = store.snapshot().len();
                        assert_eq!(len % BATCH, 0, "snapshot saw a partial batch");
                        assert!(len >= last_len, "snapshot length went backwards");
                        last_len = len;
                    }
                })
            })
            .collect();

        let writers: Vec<_> = (0..WRITERS)
            .map(|w| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for round in 0..APPENDS_PER_WRITER {
                        let id = (w * APPENDS_PER_WRITER + round) as u64;
                        store.append(vec![post(id, "x"), post(id, "y"), post(id, "z")]);
                    }
                })
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }
        done.store(true, Ordering::Relaxed);
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(store.len(), WRITERS * APPENDS_PER_WRITER * BATCH);
    }
}
