//! Severity levels understood by the operation scope

use std::fmt;
use tracing::Level;

/// Log severity gating whether an event is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Information,
    Warning,
    Critical,
}

impl Severity {
    /// Stable lowercase name, recorded as the `severity` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Information => "information",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// Closest `tracing` level
    ///
    /// `tracing` has no level above ERROR, so Critical shares it. This is a
    /// `const fn` so the provider can build the constant level each
    /// `tracing` callsite needs from this one mapping.
    pub const fn level(&self) -> Level {
        match self {
            Severity::Information => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Critical => Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
