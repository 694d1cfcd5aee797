//! Scoped operation logging
//!
//! An `OperationScope` brackets one logical operation: it emits a start event
//! when created and exactly one end event, either through an explicit
//! `end`/`end_with` call or when the scope is dropped. Intermediate events
//! logged through the scope carry the same name and `OperationId`.
//!
//! A scope created without a provider, or while Information is disabled, is
//! inert: no id is generated and every later call is a no-op.
//!
//! # Example
//!
//! ```
//! use opscope::{OperationLoggerExt, TracingProvider};
//!
//! fn sync_accounts(provider: &TracingProvider) {
//!     let scope = provider.start_operation("sync_accounts");
//!     scope.log_information("fetched {0} accounts", &[&12]);
//!     // end event emitted when `scope` goes out of scope
//! }
//! # sync_accounts(&TracingProvider::new());
//! ```

use crate::format::format_positional;
use crate::provider::{is_enabled, ArgValue, LogArg, LogProvider};
use crate::severity::Severity;
use crate::template::{self, MessageTemplate};
use opscope_core_types::schema::{ARG_ID, ARG_MESSAGE, ARG_NAME, ARG_PAYLOAD};
use opscope_core_types::OperationId;
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// One bracketed unit of work
///
/// The scope borrows its provider; it never owns logging configuration.
/// `end` takes `&mut self`, so a single scope cannot be ended from two
/// threads at once. Use independent scopes for concurrent work.
pub struct OperationScope<'a> {
    provider: Option<&'a dyn LogProvider>,
    name: Cow<'a, str>,
    id: OperationId,
    ended: bool,
}

impl<'a> OperationScope<'a> {
    /// Start a scope without a payload
    pub fn start(provider: Option<&'a dyn LogProvider>, name: impl Into<Cow<'a, str>>) -> Self {
        Self::begin(provider, name.into(), None::<&()>)
    }

    /// Start a scope, attaching `payload` to the start event
    ///
    /// The payload is serialized only when the start event is emitted.
    pub fn start_with<P>(
        provider: Option<&'a dyn LogProvider>,
        name: impl Into<Cow<'a, str>>,
        payload: &P,
    ) -> Self
    where
        P: Serialize + ?Sized,
    {
        Self::begin(provider, name.into(), Some(payload))
    }

    fn begin<P>(provider: Option<&'a dyn LogProvider>, name: Cow<'a, str>, payload: Option<&P>) -> Self
    where
        P: Serialize + ?Sized,
    {
        let provider = provider.filter(|p| p.is_enabled(Severity::Information));
        let Some(active) = provider else {
            return Self {
                provider: None,
                name,
                id: OperationId::default(),
                ended: false,
            };
        };

        let id = OperationId::new();
        emit_bracket(active, &template::START, &template::START_WITH_ARGS, &name, id, payload);

        Self {
            provider: Some(active),
            name,
            id,
            ended: false,
        }
    }

    /// Identifier assigned at construction (nil when inert)
    pub fn id(&self) -> OperationId {
        self.id
    }

    /// Operation display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the scope was started against an enabled provider
    pub fn is_active(&self) -> bool {
        self.provider.is_some()
    }

    /// Whether the end event has fired (or been suppressed) already
    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Emit the end event
    ///
    /// Only the first call on a scope has any effect; `Drop` routes through
    /// here as well.
    pub fn end(&mut self) {
        self.finish(None::<&()>);
    }

    /// Emit the end event with `payload` attached
    pub fn end_with<P>(&mut self, payload: &P)
    where
        P: Serialize + ?Sized,
    {
        self.finish(Some(payload));
    }

    fn finish<P>(&mut self, payload: Option<&P>)
    where
        P: Serialize + ?Sized,
    {
        if self.ended {
            return;
        }
        self.ended = true;

        let Some(provider) = self.active(Severity::Information) else {
            return;
        };
        emit_bracket(provider, &template::END, &template::END_WITH_ARGS, &self.name, self.id, payload);
    }

    /// Log an informational message
    ///
    /// With no `args` the message is logged verbatim; otherwise it is a
    /// positional template (`{0}`, `{1}`, ...) formatted only when enabled.
    pub fn log_information(&self, message: &str, args: &[&dyn fmt::Display]) {
        let Some(provider) = self.active(Severity::Information) else {
            return;
        };
        let message: Cow<'_, str> = if args.is_empty() {
            Cow::Borrowed(message)
        } else {
            Cow::Owned(format_positional(message, args))
        };
        self.emit_message(provider, &template::INFO, &message, None);
    }

    /// Log a warning message
    pub fn log_warning(&self, message: &str) {
        let Some(provider) = self.active(Severity::Warning) else {
            return;
        };
        self.emit_message(provider, &template::WARNING, message, None);
    }

    /// Log a warning message with `error` attached
    pub fn log_warning_with(&self, error: &(dyn Error + 'static), message: &str) {
        let Some(provider) = self.active(Severity::Warning) else {
            return;
        };
        self.emit_message(provider, &template::WARNING, message, Some(error));
    }

    /// Log a critical message with `error` attached
    pub fn log_critical(&self, error: &(dyn Error + 'static), message: &str) {
        let Some(provider) = self.active(Severity::Critical) else {
            return;
        };
        self.emit_message(provider, &template::CRITICAL, message, Some(error));
    }

    fn active(&self, severity: Severity) -> Option<&'a dyn LogProvider> {
        if is_enabled(self.provider, severity) {
            self.provider
        } else {
            None
        }
    }

    fn emit_message(
        &self,
        provider: &dyn LogProvider,
        template: &'static MessageTemplate,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let args = [
            LogArg::new(ARG_NAME, ArgValue::Text(&*self.name)),
            LogArg::new(ARG_ID, ArgValue::Id(self.id)),
            LogArg::new(ARG_MESSAGE, ArgValue::Text(message)),
        ];
        provider.emit(template.severity, template, &args, error);
    }
}

impl Drop for OperationScope<'_> {
    fn drop(&mut self) {
        self.end();
    }
}

impl fmt::Debug for OperationScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationScope")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("active", &self.is_active())
            .field("ended", &self.ended)
            .finish()
    }
}

/// Emit a start or end event, choosing the payload variant when one is given
fn emit_bracket<P>(
    provider: &dyn LogProvider,
    plain: &'static MessageTemplate,
    with_args: &'static MessageTemplate,
    name: &str,
    id: OperationId,
    payload: Option<&P>,
) where
    P: Serialize + ?Sized,
{
    let name_arg = LogArg::new(ARG_NAME, ArgValue::Text(name));
    let id_arg = LogArg::new(ARG_ID, ArgValue::Id(id));

    match payload {
        None => provider.emit(plain.severity, plain, &[name_arg, id_arg], None),
        Some(payload) => {
            let value = serialize_payload(payload);
            let args = [name_arg, id_arg, LogArg::new(ARG_PAYLOAD, ArgValue::Payload(&value))];
            provider.emit(with_args.severity, with_args, &args, None);
        }
    }
}

fn serialize_payload<P>(payload: &P) -> serde_json::Value
where
    P: Serialize + ?Sized,
{
    serde_json::to_value(payload)
        .unwrap_or_else(|err| serde_json::Value::String(format!("<unserializable: {}>", err)))
}

/// Start scopes directly from a provider
///
/// # Example
///
/// ```
/// use opscope::{OperationLoggerExt, TracingProvider};
///
/// let provider = TracingProvider::new();
/// let mut scope = provider.start_operation_with("resize", &[640, 480]);
/// scope.end_with(&"done");
/// ```
pub trait OperationLoggerExt {
    fn start_operation<'a>(&'a self, name: impl Into<Cow<'a, str>>) -> OperationScope<'a>;

    fn start_operation_with<'a, P>(
        &'a self,
        name: impl Into<Cow<'a, str>>,
        payload: &P,
    ) -> OperationScope<'a>
    where
        P: Serialize + ?Sized;
}

impl<L: LogProvider> OperationLoggerExt for L {
    fn start_operation<'a>(&'a self, name: impl Into<Cow<'a, str>>) -> OperationScope<'a> {
        OperationScope::start(Some(self), name)
    }

    fn start_operation_with<'a, P>(
        &'a self,
        name: impl Into<Cow<'a, str>>,
        payload: &P,
    ) -> OperationScope<'a>
    where
        P: Serialize + ?Sized,
    {
        OperationScope::start_with(Some(self), name, payload)
    }
}
