//! Shared test doubles

#![allow(dead_code)]

use opscope::{LogArg, LogProvider, MessageTemplate, Severity};
use std::error::Error;
use std::sync::Mutex;

/// One call to `emit`, flattened to owned data
#[derive(Debug, Clone)]
pub struct Emitted {
    pub severity: Severity,
    pub event_id: u16,
    pub event: &'static str,
    pub message: String,
    pub args: Vec<(&'static str, String)>,
    pub error: Option<String>,
}

impl Emitted {
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Provider that records every emission in memory
pub struct RecordingProvider {
    enabled: Vec<Severity>,
    emitted: Mutex<Vec<Emitted>>,
}

impl RecordingProvider {
    /// Every severity enabled
    pub fn new() -> Self {
        Self::with_enabled(&[Severity::Information, Severity::Warning, Severity::Critical])
    }

    pub fn with_enabled(enabled: &[Severity]) -> Self {
        Self {
            enabled: enabled.to_vec(),
            emitted: Mutex::new(Vec::new()),
        }
    }

    pub fn disabled() -> Self {
        Self::with_enabled(&[])
    }

    pub fn emitted(&self) -> Vec<Emitted> {
        self.emitted.lock().unwrap().clone()
    }

    pub fn count(&self, event: &str) -> usize {
        self.emitted().iter().filter(|e| e.event == event).count()
    }
}

impl LogProvider for RecordingProvider {
    fn is_enabled(&self, severity: Severity) -> bool {
        self.enabled.contains(&severity)
    }

    fn emit(
        &self,
        severity: Severity,
        template: &'static MessageTemplate,
        args: &[LogArg<'_>],
        error: Option<&(dyn Error + 'static)>,
    ) {
        let record = Emitted {
            severity,
            event_id: template.event_id,
            event: template.name,
            message: template.render(args),
            args: args.iter().map(|a| (a.name, a.value.to_string())).collect(),
            error: error.map(|e| e.to_string()),
        };
        self.emitted.lock().unwrap().push(record);
    }
}

/// Plain error used as attached metadata
#[derive(Debug)]
pub struct Boom(pub &'static str);

impl std::fmt::Display for Boom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boom: {}", self.0)
    }
}

impl Error for Boom {}
