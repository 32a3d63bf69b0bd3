use tracing::{error, warn};

/// Structured context attached to everything the translator reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub operation: &'static str,
    pub entity: &'static str,
    pub column: Option<String>,
    pub message: String,
}

impl LogEvent {
    pub fn new(operation: &'static str, entity: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            entity,
            column: None,
            message: message.into(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

/// Injected log sink of the filter translator.
#[cfg_attr(test, mockall::automock)]
pub trait QueryLogger: Send + Sync {
    fn warn(&self, event: LogEvent);
    fn error(&self, event: LogEvent);
}

/// Forwards events to `tracing` with their context as fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingQueryLogger;

impl QueryLogger for TracingQueryLogger {
    fn warn(&self, event: LogEvent) {
        warn!(
            operation = event.operation,
            entity = event.entity,
            column = event.column.as_deref(),
            "{}",
            event.message
        );
    }

    fn error(&self, event: LogEvent) {
        error!(
            operation = event.operation,
            entity = event.entity,
            column = event.column.as_deref(),
            "{}",
            event.message
        );
    }
}
