//! # Page Rendering Module
//!
//! The presentation boundary: turns a post snapshot into an HTML body.
//! The template file is re-loaded on every render, so template edits take
//! effect without a restart and a missing file surfaces per-request rather
//! than at startup.

/// Board page renderer over `tera`.
pub mod page;

pub use page::{PageRenderer, RenderError};
