use crate::caller::{resolve_caller, Caller, Frame, MAX_FRAMES};
use crate::level::Level;
use crate::provider::LogProvider;
use crate::record::{float_value, Fields};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that turns events into records and hands them
/// to a [`LogProvider`] on the emitting thread.
///
/// The provider's threshold is applied in [`Layer::enabled`], so disabled
/// events are never built. Callsite interest is always `sometimes`, which
/// keeps providers with different thresholds from poisoning each other's
/// cached interest.
pub struct ConsoleLayer {
    provider: Arc<dyn LogProvider>,
    span_frames: bool,
    /// Total events that reached `on_event`.
    pub total_events: Arc<AtomicU64>,
    /// Events the provider wrote successfully.
    pub written_events: Arc<AtomicU64>,
    /// Events the provider failed to write.
    pub failed_events: Arc<AtomicU64>,
}

impl ConsoleLayer {
    pub fn new(provider: Arc<dyn LogProvider>) -> Self {
        ConsoleLayer {
            provider,
            span_frames: true,
            total_events: Arc::new(AtomicU64::new(0)),
            written_events: Arc::new(AtomicU64::new(0)),
            failed_events: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Whether enclosing spans are offered as fallback caller frames when
    /// the event's own callsite is unusable. On by default.
    pub fn with_span_frames(mut self, enabled: bool) -> Self {
        self.span_frames = enabled;
        self
    }

    fn caller<S>(&self, event: &Event<'_>, ctx: &Context<'_, S>) -> Caller
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let mut frames: Vec<Frame<'static>> = Vec::with_capacity(MAX_FRAMES);
        frames.extend(frame_of(event.metadata()));

        if self.span_frames {
            if let Some(scope) = ctx.event_scope(event) {
                frames.extend(scope.filter_map(|span| frame_of(span.metadata())));
            }
        }

        resolve_caller(frames)
    }
}

fn frame_of(meta: &'static Metadata<'static>) -> Option<Frame<'static>> {
    Some(Frame {
        function: meta.module_path().unwrap_or_else(|| meta.target()),
        file: meta.file()?,
        line: meta.line()?,
    })
}

/// Map a `tracing` level onto a provider level. `TRACE` folds into `Debug`.
pub fn level_from_tracing(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        _ => Level::Debug,
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Spans stay enabled: they are caller frames for nested events.
        metadata.is_span() || self.provider.should_log(level_from_tracing(metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        self.total_events.fetch_add(1, Ordering::Relaxed);

        let level = level_from_tracing(event.metadata().level());
        if !self.provider.should_log(level) {
            return;
        }

        let mut fields = Fields::new();
        let mut message: Option<String> = None;

        let mut visitor = FieldVisitor { fields: &mut fields, message: &mut message };
        event.record(&mut visitor);

        let caller = self.caller(event, &ctx);
        let message = message.unwrap_or_default();

        match self.provider.write(level, &message, &fields, caller) {
            Ok(()) => {
                self.written_events.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                // Never routed back through tracing.
                self.failed_events.fetch_add(1, Ordering::Relaxed);
                eprintln!("console log layer: {}", e);
            }
        }
    }
}

pub struct FieldVisitor<'a> {
    pub fields: &'a mut Fields,
    pub message: &'a mut Option<String>,
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = Some(value.to_string());
        } else {
            self.fields.insert(field.name().to_string(), serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields.insert(field.name().to_string(), float_value(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        } else {
            self.fields.insert(field.name().to_string(), serde_json::Value::String(format!("{:?}", value)));
        }
    }
}
