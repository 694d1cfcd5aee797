//! Structured logging facility for opscope
//!
//! This module provides the subscriber side that `TracingProvider` emits into:
//! - Single initialization point via `init(profile)` or `init_with(&config)`
//! - Profile and filter configuration via `LoggingConfig`
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use opscope::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod config;
pub mod init;
pub mod test_capture;

pub use config::{LoggingConfig, Profile};
pub use init::{init, init_with};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
