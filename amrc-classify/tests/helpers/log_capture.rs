//! Tracing capture for log assertions
//!
//! `with_captured_logs` installs a capturing layer for the current thread
//! only, so parallel tests never see each other's events.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// One captured event
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    /// Non-message fields rendered as `name=value`
    pub fields: Vec<String>,
}

/// Layer collecting every event it sees
#[derive(Clone, Default)]
pub struct LogCapture {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogCapture {
    fn matching(&self, pattern: &str) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.message.contains(pattern))
            .cloned()
            .collect()
    }

    /// Records at `level` whose message contains `pattern`
    pub fn at_level(&self, level: Level, pattern: &str) -> Vec<LogRecord> {
        self.matching(pattern)
            .into_iter()
            .filter(|r| r.level == level)
            .collect()
    }

    pub fn assert_contains(&self, pattern: &str) {
        let messages: Vec<String> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect();
        assert!(
            messages.iter().any(|m| m.contains(pattern)),
            "no log message contains '{}'; captured:\n{}",
            pattern,
            messages.join("\n")
        );
    }

    pub fn assert_no_match(&self, pattern: &str) {
        let found = self.matching(pattern);
        assert!(
            found.is_empty(),
            "expected no log message containing '{}', found {:?}",
            pattern,
            found
        );
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            // fmt::Arguments renders without quotes
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        self.records.lock().unwrap().push(LogRecord {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

/// Run `f` under a thread-scoped subscriber and return what it logged
pub fn with_captured_logs<F, R>(f: F) -> (R, LogCapture)
where
    F: FnOnce() -> R,
{
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_level_and_fields() {
        let (_, capture) = with_captured_logs(|| {
            tracing::error!(error = "boom", "Something failed");
            tracing::debug!("Something else");
        });

        let errors = capture.at_level(Level::ERROR, "Something");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].fields.iter().any(|f| f == "error=\"boom\"" || f == "error=boom"));
        capture.assert_contains("Something else");
        capture.assert_no_match("nothing like this");
    }

    #[test]
    #[should_panic(expected = "no log message contains")]
    fn test_assert_contains_fails() {
        let (_, capture) = with_captured_logs(|| tracing::info!("present"));
        capture.assert_contains("absent");
    }
}
