//! # Data Retrieval Module
//!
//! Centralized location for generic data retrieval clients. Networking
//! concerns (URL joining, status handling, JSON decoding) live here so the
//! provider-specific sources can stay focused on their own payloads.
//!
//! ## Contained Modules:
//!
//! - **`api_http`**: A generic JSON-over-HTTP `ApiClient` built on `reqwest`.
//!   One request per call; there is intentionally no retry layer and no
//!   request timeout, so a hung provider call blocks only the task that
//!   issued it.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Generic JSON-over-HTTP client. Single attempt per call.
pub mod api_http;

pub use api_http::{ApiClient, ApiResponse, FetchError};
