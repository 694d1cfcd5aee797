//! Scoped Operation Logging Demonstration
//!
//! Run with `OPSCOPE_PROFILE=production` for JSON output.
//!
//! Key concepts illustrated:
//! 1. Configuring the subscriber from the environment
//! 2. Start/end bracketing via drop
//! 3. Early explicit end with a payload
//! 4. Attached errors on warning and critical events

use opscope::logging_facility::{init_with, LoggingConfig};
use opscope::{operation_scope, OperationLoggerExt, OperationScope, TracingProvider};
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct ImportRequest<'a> {
    source: &'a str,
    batch_size: usize,
}

#[derive(Debug)]
struct Timeout(u64);

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upstream timed out after {}ms", self.0)
    }
}

impl std::error::Error for Timeout {}

fn import_rows(provider: &TracingProvider) -> usize {
    let request = ImportRequest {
        source: "s3://bucket/rows.csv",
        batch_size: 500,
    };
    let mut scope = operation_scope!(provider, payload = &request);

    let mut imported = 0;
    for batch in 0..3 {
        imported += request.batch_size;
        scope.log_information("batch {0} done, {1} rows so far", &[&batch, &imported]);
    }
    scope.log_warning_with(&Timeout(1500), "retried one batch");

    scope.end_with(&serde_json::json!({ "imported": imported }));
    imported
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggingConfig::from_env()?;
    init_with(&config)?;

    let provider = TracingProvider::new();

    let rows = import_rows(&provider);
    println!("imported {} rows", rows);

    {
        let scope = provider.start_operation("shutdown");
        scope.log_critical(&Timeout(30_000), "drain did not finish");
    }

    // No provider: nothing is logged and no id is generated
    let inert = OperationScope::start(None, "unlogged");
    println!("inert scope id assigned: {}", inert.id().is_assigned());

    Ok(())
}
