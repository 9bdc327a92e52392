//! In-memory event capture for logging assertions in tests
//!
//! Matcher operations run concurrently across a test binary and all of them
//! log into the same global subscriber, so lookups here are keyed by
//! operation and, where available, by the `type_name` field.

use crate::core_types::schema;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded tracing event, fields rendered to strings
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether this event belongs to `op` on `type_name`
    pub fn is_for(&self, op: &str, type_name: &str) -> bool {
        self.op.as_deref() == Some(op) && self.field(schema::FIELD_TYPE_NAME) == Some(type_name)
    }

    fn is_event(&self, event: &str) -> bool {
        self.event.as_deref() == Some(event)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: String) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.to_string());
    }
}

/// Layer appending every event to a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: Arc::clone(&events),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let fields = visitor.fields;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: fields.get("component").cloned(),
            op: fields.get("op").cloned(),
            event: fields.get("event").cloned(),
            fields,
        };

        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Handle for reading captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events of `op` whose `type_name` field equals `type_name`
    pub fn events_for(&self, op: &str, type_name: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is_for(op, type_name))
            .collect()
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// Assert that an event exists with the given operation and event type
    ///
    /// # Panics
    ///
    /// Panics if the event is not found
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.op.as_deref() == Some(op) && e.is_event(event));
        assert!(
            found,
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    /// Assert that `op` on `type_name` logged exactly one start and one end
    /// event, returning the end event
    ///
    /// # Panics
    ///
    /// Panics if the start or end count differs from one, or if the
    /// operation logged an error
    pub fn assert_op_completed(&self, op: &str, type_name: &str) -> CapturedEvent {
        let events = self.events_for(op, type_name);
        let count = |event: &str| events.iter().filter(|e| e.is_event(event)).count();

        assert_eq!(count(schema::EVENT_START), 1, "{} on {}: start events", op, type_name);
        assert_eq!(count(schema::EVENT_END_ERROR), 0, "{} on {}: error events", op, type_name);
        let mut ends = events.into_iter().filter(|e| e.is_event(schema::EVENT_END));
        match (ends.next(), ends.next()) {
            (Some(end), None) => end,
            _ => panic!("{} on {}: expected exactly one end event", op, type_name),
        }
    }

    /// Drop all captured events
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber, once per process
///
/// Every caller gets a handle to the same buffer.
///
/// # Panics
///
/// Panics if another global subscriber was installed first, since the
/// returned handle would never see an event.
///
/// # Example
///
/// ```
/// use automatch::logging_facility::test_capture::init_test_capture;
/// use automatch::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("my_operation");
/// capture.assert_event_exists("my_operation", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(op: &str, event: &str, type_name: &str) -> CapturedEvent {
        let mut fields = HashMap::new();
        fields.insert(schema::FIELD_TYPE_NAME.to_string(), type_name.to_string());
        CapturedEvent {
            level: Level::DEBUG,
            component: Some("test".to_string()),
            op: Some(op.to_string()),
            event: Some(event.to_string()),
            fields,
        }
    }

    #[test]
    fn test_captured_event_filters_by_op_and_type() {
        let captured = event("equal_to", "start", "demo::Model");

        assert!(captured.is_for("equal_to", "demo::Model"));
        assert!(!captured.is_for("equal_to", "demo::Other"));
        assert!(!captured.is_for("contains", "demo::Model"));
        assert_eq!(captured.field(schema::FIELD_TYPE_NAME), Some("demo::Model"));
    }

    #[test]
    fn test_assert_op_completed_on_detached_capture() {
        let (layer, capture) = TestCaptureLayer::new();
        layer.events.lock().unwrap().extend([
            event("equal_to", schema::EVENT_START, "demo::Detached"),
            event("equal_to", schema::EVENT_END, "demo::Detached"),
        ]);

        let end = capture.assert_op_completed("equal_to", "demo::Detached");
        assert_eq!(end.event.as_deref(), Some(schema::EVENT_END));

        capture.clear();
        assert!(capture.events().is_empty());
    }
}
