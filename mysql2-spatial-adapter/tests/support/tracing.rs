//! Records adapter spans so tests can assert on names, levels and fields.
//!
//! `capture_spans()` installs a thread-local subscriber; keep the guard alive
//! for the whole test.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::{LookupSpan, Registry};

#[derive(Debug, Clone)]
pub struct SpanRecord {
    pub name: &'static str,
    pub level: Level,
    pub parent: Option<&'static str>,
    pub fields: BTreeMap<String, String>,
}

impl SpanRecord {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Spans in creation order.
#[derive(Debug, Clone, Default)]
pub struct SpanLog {
    records: Arc<Mutex<Vec<SpanRecord>>>,
}

impl SpanLog {
    pub fn names(&self) -> Vec<&'static str> {
        self.records.lock().unwrap().iter().map(|r| r.name).collect()
    }

    pub fn get(&self, name: &str) -> Option<SpanRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned()
    }
}

struct Recorder {
    log: SpanLog,
}

impl<S> Layer<S> for Recorder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, ctx: Context<'_, S>) {
        let mut fields = FieldMap::default();
        attrs.record(&mut fields);
        let parent = ctx.current_span().metadata().map(|m| m.name());
        let meta = attrs.metadata();
        self.log.records.lock().unwrap().push(SpanRecord {
            name: meta.name(),
            level: *meta.level(),
            parent,
            fields: fields.0,
        });
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(name) = ctx.span(id).map(|s| s.name()) else {
            return;
        };
        let mut fields = FieldMap::default();
        values.record(&mut fields);
        let mut records = self.log.records.lock().unwrap();
        if let Some(record) = records.iter_mut().rev().find(|r| r.name == name) {
            record.fields.extend(fields.0);
        }
    }
}

#[derive(Default)]
struct FieldMap(BTreeMap<String, String>);

impl Visit for FieldMap {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

pub fn capture_spans() -> (SpanLog, tracing::subscriber::DefaultGuard) {
    let log = SpanLog::default();
    let subscriber = Registry::default().with(Recorder { log: log.clone() });
    (log, tracing::subscriber::set_default(subscriber))
}
