//! Logging provider seam
//!
//! The operation scope does not write logs itself. It asks a `LogProvider`
//! whether a severity is enabled and hands it a template plus ordered named
//! arguments to emit. `TracingProvider` is the stock implementation backed
//! by the `tracing` facade; tests and embedders can supply their own.

use crate::severity::Severity;
use crate::template::MessageTemplate;
use opscope_core_types::schema::{ARG_ID, ARG_MESSAGE, ARG_NAME, ARG_PAYLOAD, FIELD_DETAIL, TARGET};
use opscope_core_types::OperationId;
use std::error::Error;
use std::fmt;
use tracing::Level;

/// Value of one named template argument
#[derive(Debug, Clone, Copy)]
pub enum ArgValue<'a> {
    Text(&'a str),
    Id(OperationId),
    /// Structured payload, rendered as compact JSON
    Payload(&'a serde_json::Value),
}

impl fmt::Display for ArgValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Text(text) => f.write_str(text),
            ArgValue::Id(id) => write!(f, "{}", id),
            ArgValue::Payload(value) => write!(f, "{}", value),
        }
    }
}

/// One named argument passed to `LogProvider::emit`
#[derive(Debug, Clone, Copy)]
pub struct LogArg<'a> {
    pub name: &'static str,
    pub value: ArgValue<'a>,
}

impl<'a> LogArg<'a> {
    pub fn new(name: &'static str, value: ArgValue<'a>) -> Self {
        Self { name, value }
    }
}

/// Provider trait consumed by the operation scope
///
/// Implementations own storage, transport and filtering. Emission is fire
/// and forget: `emit` has no way to report failure back to the scope.
pub trait LogProvider: Send + Sync {
    /// Check whether events at `severity` would be recorded
    fn is_enabled(&self, severity: Severity) -> bool;

    /// Emit one event
    ///
    /// # Arguments
    /// * `severity` - Event severity
    /// * `template` - Template selecting the event kind and message format
    /// * `args` - Named arguments, in the order of `template.fields`
    /// * `error` - Error attached as metadata, separate from the message text
    fn emit(
        &self,
        severity: Severity,
        template: &'static MessageTemplate,
        args: &[LogArg<'_>],
        error: Option<&(dyn Error + 'static)>,
    );
}

/// Severity gate shared by every emission path
///
/// An absent provider is never enabled.
pub fn is_enabled(provider: Option<&dyn LogProvider>, severity: Severity) -> bool {
    provider.is_some_and(|p| p.is_enabled(severity))
}

/// Provider that forwards events to the `tracing` facade
///
/// Events are recorded under the `opscope` target with structured fields
/// `event`, `event_id`, `op`, `op_id` and `severity`, plus `payload`,
/// `detail` (the raw message argument) and `error` when present. The
/// rendered template is the event message.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProvider;

impl TracingProvider {
    pub fn new() -> Self {
        Self
    }
}

const INFORMATION: Level = Severity::Information.level();
const WARNING: Level = Severity::Warning.level();
const CRITICAL: Level = Severity::Critical.level();

macro_rules! emit_at {
    ($level:expr, $severity:expr, $template:expr, $args:expr, $error:expr) => {{
        let op = find_arg($args, ARG_NAME).map(|v| v.to_string());
        let op_id = find_arg($args, ARG_ID).map(|v| v.to_string());
        let payload = find_arg($args, ARG_PAYLOAD).map(|v| v.to_string());
        let detail = find_arg($args, ARG_MESSAGE).map(|v| v.to_string());
        let error = $error.map(|e| e.to_string());
        let message = $template.render($args);
        tracing::event!(
            target: TARGET,
            $level,
            event = $template.name,
            event_id = $template.event_id,
            severity = $severity.as_str(),
            op = op.as_deref(),
            op_id = op_id.as_deref(),
            payload = payload.as_deref(),
            { FIELD_DETAIL } = detail.as_deref(),
            error = error.as_deref(),
            "{}",
            message
        );
    }};
}

fn find_arg<'a>(args: &[LogArg<'a>], name: &str) -> Option<ArgValue<'a>> {
    args.iter().find(|arg| arg.name == name).map(|arg| arg.value)
}

impl LogProvider for TracingProvider {
    fn is_enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Information => tracing::enabled!(target: TARGET, INFORMATION),
            Severity::Warning => tracing::enabled!(target: TARGET, WARNING),
            Severity::Critical => tracing::enabled!(target: TARGET, CRITICAL),
        }
    }

    fn emit(
        &self,
        severity: Severity,
        template: &'static MessageTemplate,
        args: &[LogArg<'_>],
        error: Option<&(dyn Error + 'static)>,
    ) {
        match severity {
            Severity::Information => emit_at!(INFORMATION, severity, template, args, error),
            Severity::Warning => emit_at!(WARNING, severity, template, args, error),
            Severity::Critical => emit_at!(CRITICAL, severity, template, args, error),
        }
    }
}
