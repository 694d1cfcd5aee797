//! Logging configuration
//!
//! Chooses the output profile and the filter directive installed by
//! `init_with`. Values come from code or from the environment.

use crate::errors::{OpScopeError, Result};
use std::str::FromStr;

/// Environment variable selecting the profile
pub const PROFILE_ENV: &str = "OPSCOPE_PROFILE";

/// Environment variable holding the filter directive
pub const FILTER_ENV: &str = "RUST_LOG";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter directive used when none is configured
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "opscope=debug",
            Profile::Production => "opscope=info",
            Profile::Test => "opscope=trace",
        }
    }
}

impl FromStr for Profile {
    type Err = OpScopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            _ => Err(OpScopeError::UnknownProfile {
                value: s.to_string(),
            }),
        }
    }
}

/// Profile plus optional filter directive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub profile: Profile,
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            filter: None,
        }
    }

    /// Override the filter directive
    pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
        self.filter = Some(directive.into());
        self
    }

    /// Read `OPSCOPE_PROFILE` and `RUST_LOG`
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProfile` when `OPSCOPE_PROFILE` names no profile.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env`)
    ///
    /// # Errors
    ///
    /// Returns `UnknownProfile` when the profile value names no profile.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = match lookup(PROFILE_ENV) {
            Some(value) => value.parse()?,
            None => Profile::default(),
        };
        let filter = lookup(FILTER_ENV).filter(|v| !v.trim().is_empty());
        Ok(Self { profile, filter })
    }

    /// Filter directive in effect
    pub fn effective_filter(&self) -> &str {
        self.filter
            .as_deref()
            .unwrap_or_else(|| self.profile.default_filter())
    }
}
