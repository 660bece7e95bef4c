//! # PostBoard Web Layer
//!
//! Router and handler assembly for the PostBoard service. The binary
//! (`server_posts`) wires configuration and the initial load around
//! [`board_app::build_router`]; integration tests drive the same router
//! against mock providers.

pub mod board_app;

pub use board_app::{AppState, build_router};
