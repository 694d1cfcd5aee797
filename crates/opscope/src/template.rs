//! Fixed message templates for operation events
//!
//! The table is compile-time constant data shared by every scope. Each
//! template carries a stable event id so downstream consumers can filter on
//! event kind without parsing message text.

use crate::provider::LogArg;
use crate::severity::Severity;
use opscope_core_types::schema::{
    ARG_ID, ARG_MESSAGE, ARG_NAME, ARG_PAYLOAD, EVENT_CRITICAL, EVENT_END, EVENT_END_WITH_ARGS,
    EVENT_INFO, EVENT_START, EVENT_START_WITH_ARGS, EVENT_WARNING,
};

/// A precompiled message format with named placeholders
#[derive(Debug, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Stable event id
    pub event_id: u16,
    /// Canonical event name (see `opscope_core_types::schema`)
    pub name: &'static str,
    pub severity: Severity,
    /// Format text, placeholders written as `{field}`
    pub text: &'static str,
    /// Ordered placeholder names expected by `text`
    pub fields: &'static [&'static str],
}

const SCOPE_FIELDS: &[&str] = &[ARG_NAME, ARG_ID];
const PAYLOAD_FIELDS: &[&str] = &[ARG_NAME, ARG_ID, ARG_PAYLOAD];
const MESSAGE_FIELDS: &[&str] = &[ARG_NAME, ARG_ID, ARG_MESSAGE];

pub const START: MessageTemplate = MessageTemplate {
    event_id: 1000,
    name: EVENT_START,
    severity: Severity::Information,
    text: "▶ {name} [{id}]",
    fields: SCOPE_FIELDS,
};

pub const START_WITH_ARGS: MessageTemplate = MessageTemplate {
    event_id: 1001,
    name: EVENT_START_WITH_ARGS,
    severity: Severity::Information,
    text: "▶ {name} [{id}] {payload}",
    fields: PAYLOAD_FIELDS,
};

pub const END: MessageTemplate = MessageTemplate {
    event_id: 1002,
    name: EVENT_END,
    severity: Severity::Information,
    text: "■ {name} [{id}]",
    fields: SCOPE_FIELDS,
};

pub const END_WITH_ARGS: MessageTemplate = MessageTemplate {
    event_id: 1003,
    name: EVENT_END_WITH_ARGS,
    severity: Severity::Information,
    text: "■ {name} [{id}] {payload}",
    fields: PAYLOAD_FIELDS,
};

pub const INFO: MessageTemplate = MessageTemplate {
    event_id: 1004,
    name: EVENT_INFO,
    severity: Severity::Information,
    text: "■ {name} [{id}] {message}",
    fields: MESSAGE_FIELDS,
};

pub const WARNING: MessageTemplate = MessageTemplate {
    event_id: 1005,
    name: EVENT_WARNING,
    severity: Severity::Warning,
    text: "■ {name} [{id}] {message}",
    fields: MESSAGE_FIELDS,
};

pub const CRITICAL: MessageTemplate = MessageTemplate {
    event_id: 1006,
    name: EVENT_CRITICAL,
    severity: Severity::Critical,
    text: "■ {name} [{id}] {message}",
    fields: MESSAGE_FIELDS,
};

/// Every template, ordered by event id
pub static ALL: [&MessageTemplate; 7] = [
    &START,
    &START_WITH_ARGS,
    &END,
    &END_WITH_ARGS,
    &INFO,
    &WARNING,
    &CRITICAL,
];

/// Find a template by its event id
pub fn lookup(event_id: u16) -> Option<&'static MessageTemplate> {
    ALL.iter().copied().find(|t| t.event_id == event_id)
}

impl MessageTemplate {
    /// Render the template, substituting `{field}` placeholders from `args`
    ///
    /// Placeholders with no matching argument are left as written.
    pub fn render(&self, args: &[LogArg<'_>]) -> String {
        let mut out = String::with_capacity(self.text.len() + 48);
        let mut rest = self.text;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                out.push_str(tail);
                return out;
            };
            let key = &tail[1..close];
            match args.iter().find(|arg| arg.name == key) {
                Some(arg) => out.push_str(&arg.value.to_string()),
                None => out.push_str(&tail[..=close]),
            }
            rest = &tail[close + 1..];
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ArgValue;
    use opscope_core_types::OperationId;

    #[test]
    fn test_event_ids_are_unique_and_ordered() {
        let ids: Vec<u16> = ALL.iter().map(|t| t.event_id).collect();
        assert_eq!(ids, vec![1000, 1001, 1002, 1003, 1004, 1005, 1006]);
    }

    #[test]
    fn test_fields_match_placeholders() {
        for template in ALL.iter() {
            for field in template.fields {
                assert!(
                    template.text.contains(&format!("{{{}}}", field)),
                    "{} is missing placeholder {}",
                    template.name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_severities() {
        assert_eq!(WARNING.severity, Severity::Warning);
        assert_eq!(CRITICAL.severity, Severity::Critical);
        assert!(ALL
            .iter()
            .filter(|t| t.event_id != 1005 && t.event_id != 1006)
            .all(|t| t.severity == Severity::Information));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(1003), Some(&END_WITH_ARGS));
        assert_eq!(lookup(42), None);
    }

    #[test]
    fn test_render_start() {
        let id = OperationId::nil();
        let args = [
            LogArg::new(ARG_NAME, ArgValue::Text("load")),
            LogArg::new(ARG_ID, ArgValue::Id(id)),
        ];
        assert_eq!(
            START.render(&args),
            "▶ load [00000000-0000-0000-0000-000000000000]"
        );
    }

    #[test]
    fn test_render_payload_as_json() {
        let payload = serde_json::json!({ "rows": 3 });
        let args = [
            LogArg::new(ARG_NAME, ArgValue::Text("load")),
            LogArg::new(ARG_ID, ArgValue::Id(OperationId::nil())),
            LogArg::new(ARG_PAYLOAD, ArgValue::Payload(&payload)),
        ];
        assert!(END_WITH_ARGS.render(&args).ends_with("] {\"rows\":3}"));
    }

    #[test]
    fn test_render_unclosed_brace_kept_once() {
        let template = MessageTemplate {
            event_id: 9000,
            name: "custom",
            severity: Severity::Information,
            text: "ab{name",
            fields: &[ARG_NAME],
        };
        let args = [LogArg::new(ARG_NAME, ArgValue::Text("load"))];
        assert_eq!(template.render(&args), "ab{name");

        let template = MessageTemplate {
            text: "{name} then {open",
            ..template
        };
        assert_eq!(template.render(&args), "load then {open");
    }

    #[test]
    fn test_render_missing_arg_left_verbatim() {
        let args = [LogArg::new(ARG_NAME, ArgValue::Text("load"))];
        assert_eq!(INFO.render(&args), "■ load [{id}] {message}");
    }
}
