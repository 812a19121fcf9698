use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::registry::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Collects the messages of `tracing` events, trace level excluded, plus test markers, in order
#[derive(Clone, Default)]
pub(crate) struct CapturedEvents {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CapturedEvents {
    /// interleave a marker with the captured events, recorded as `INFO`
    pub(crate) fn record<S: Into<String>>(&self, message: S) {
        self.push(Level::INFO, message.into());
    }

    fn push(&self, level: Level, message: String) {
        self.events.lock().unwrap().push((level, message));
    }

    fn snapshot(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level == Level::TRACE {
            return;
        }
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.push(level, message);
        }
    }
}

pub(crate) fn capture_levels<R>(f: impl FnOnce(&CapturedEvents) -> R) -> (R, Vec<(Level, String)>) {
    let events = CapturedEvents::default();
    let subscriber = Registry::default().with(events.clone());
    let result = tracing::subscriber::with_default(subscriber, || f(&events));
    (result, events.snapshot())
}

pub(crate) fn capture<R>(f: impl FnOnce(&CapturedEvents) -> R) -> (R, Vec<String>) {
    let (result, events) = capture_levels(f);
    (result, events.into_iter().map(|(_, message)| message).collect())
}
