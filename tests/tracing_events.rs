#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use ansi_color_codes::{ColorCode, Style};
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct EventLog {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let value = format!("{value:?}");
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl<S> Layer<S> for EventLog
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

fn capture_events() -> (tracing::dispatcher::DefaultGuard, Arc<Mutex<Vec<CapturedEvent>>>) {
    let log = EventLog::default();
    let events = log.events.clone();
    let subscriber = tracing_subscriber::registry().with(log);
    let guard = tracing::subscriber::set_default(subscriber);
    tracing::callsite::rebuild_interest_cache();
    (guard, events)
}

fn field<'a>(event: &'a CapturedEvent, name: &str) -> Option<&'a str> {
    event
        .fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[test]
fn building_a_code_emits_trace_event() {
    let (_guard, events) = capture_events();

    ColorCode::new(Style::bright_green().with_bold());

    let events = events.lock().unwrap();
    let built = events
        .iter()
        .find(|event| event.message == "built color code")
        .expect("trace event for the new code");
    assert_eq!(built.level, tracing::Level::TRACE);
    assert_eq!(field(built, "base"), Some("92"));
    assert_eq!(field(built, "underline"), Some("false"));
    assert_eq!(field(built, "bold"), Some("true"));
}

#[test]
fn rejected_value_emits_debug_event() {
    let (_guard, events) = capture_events();

    assert!(ColorCode::from_raw(8, 0, 90, false, false).is_err());

    let events = events.lock().unwrap();
    let rejected = events
        .iter()
        .find(|event| event.message == "rejected style parameter")
        .expect("debug event for the rejected color");
    assert_eq!(rejected.level, tracing::Level::DEBUG);
    assert_eq!(field(rejected, "parameter"), Some("color"));
    assert_eq!(field(rejected, "value"), Some("8"));
    assert!(events
        .iter()
        .all(|event| event.message != "built color code"));
}

#[test]
fn rejected_name_emits_debug_event() {
    let (_guard, events) = capture_events();

    assert!("sideways".parse::<ansi_color_codes::Target>().is_err());

    let events = events.lock().unwrap();
    let rejected = events
        .iter()
        .find(|event| event.message == "rejected style parameter name")
        .expect("debug event for the rejected name");
    assert_eq!(rejected.level, tracing::Level::DEBUG);
    assert_eq!(field(rejected, "parameter"), Some("target"));
    assert_eq!(field(rejected, "name"), Some("sideways"));
}
