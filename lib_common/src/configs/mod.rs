//! # Configuration Module
//!
//! Typed runtime settings for the PostBoard service. Everything here is a
//! compile-time default: the service runs on a fixed port with a fixed
//! provider URL, and external configuration sources (files, environment)
//! are deliberately not consulted.

/// System configuration: provider URL, listen port and asset locations.
pub mod config_sys;

pub use config_sys::SysConfig;
