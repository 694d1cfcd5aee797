//! opscope - Scoped operation logging
//!
//! A thin layer over a structured-logging provider that brackets a unit of
//! work with correlated start and end events:
//! - `OperationScope` emits a start event on creation and exactly one end
//!   event, either explicitly or when dropped
//! - Every event carries the operation name and a random `OperationId`
//! - Formatting and payload serialization only happen when the target
//!   severity is enabled
//! - `TracingProvider` routes events to the `tracing` facade
//!
//! # Usage
//!
//! ```rust
//! use opscope::{OperationLoggerExt, TracingProvider};
//!
//! let provider = TracingProvider::new();
//! let mut scope = provider.start_operation("import_batch");
//! scope.log_information("imported {0} rows", &[&42]);
//! scope.end_with(&serde_json::json!({ "rows": 42 }));
//! ```

pub mod errors;
pub mod format;
pub mod logging_facility;
pub mod macros;
pub mod provider;
pub mod scope;
pub mod severity;
pub mod template;

// Re-export commonly used types
pub use errors::{OpScopeError, Result};
pub use opscope_core_types::OperationId;
pub use provider::{is_enabled, ArgValue, LogArg, LogProvider, TracingProvider};
pub use scope::{OperationLoggerExt, OperationScope};
pub use severity::Severity;
pub use template::MessageTemplate;
