//! Logging initialization module
//!
//! Provides a single initialization point for the subscriber that receives
//! operation events.

use super::config::{LoggingConfig, Profile};
use crate::errors::{OpScopeError, Result};
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// This function should be called once at application startup.
/// It sets up the tracing subscriber based on the selected profile.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry; use `init_test_capture()` to record events
///
/// # Example
///
/// ```
/// use opscope::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));
    install(profile, filter);
}

/// Initialize the logging facility from an explicit configuration
///
/// Later calls, and calls after `init`, are ignored once a subscriber has
/// been installed.
///
/// # Errors
///
/// Returns `InvalidFilter` when the configured directive cannot be parsed.
/// Nothing is installed in that case.
pub fn init_with(config: &LoggingConfig) -> Result<()> {
    let directive = config.effective_filter();
    let filter = EnvFilter::try_new(directive).map_err(|err| OpScopeError::InvalidFilter {
        directive: directive.to_string(),
        reason: err.to_string(),
    })?;
    install(config.profile, filter);
    Ok(())
}

fn install(profile: Profile, filter: EnvFilter) {
    INIT_ONCE.call_once(|| {
        // try_init: another subscriber may already be global (e.g. test capture)
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_init_with_rejects_bad_filter() {
        let config = LoggingConfig::new(Profile::Test).with_filter("opscope=notalevel");
        let err = init_with(&config).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_FILTER");
    }

    #[test]
    fn test_init_with_accepts_valid_filter() {
        let config = LoggingConfig::new(Profile::Test).with_filter("opscope=info");
        assert!(init_with(&config).is_ok());
    }
}
