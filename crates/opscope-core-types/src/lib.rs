//! Core types shared across the opscope crates
//!
//! This crate provides the foundational types used by the scoped operation
//! logger and by anything that asserts on its output:
//!
//! - **Correlation types**: OperationId
//! - **Schema constants**: Canonical field keys, event names and tracing target

pub mod correlation;
pub mod schema;

pub use correlation::OperationId;
