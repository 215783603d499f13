#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sinkql_core::{
    ColumnAttributes, ColumnDefinition, JdbcType, Nullability, Schema, SchemaType, SinkRecordField,
    TableId,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub fn users() -> TableId {
    TableId::new(None, Some("dbo"), "users")
}

pub fn key(name: &str, schema_type: SchemaType) -> SinkRecordField {
    SinkRecordField::new(name, Schema::new(schema_type), true)
}

pub fn required(name: &str, schema: Schema) -> SinkRecordField {
    SinkRecordField::new(name, schema, false)
}

pub fn optional(name: &str, schema: Schema) -> SinkRecordField {
    SinkRecordField::new(name, schema.optional(), false)
}

pub fn column(name: &str, jdbc_type: JdbcType, nullability: Nullability) -> ColumnDefinition {
    let mut attrs = ColumnAttributes::new(users().column(name), jdbc_type, "test");
    attrs.nullability = nullability;
    ColumnDefinition::from(attrs)
}

/// Counts WARN events seen by the subscriber it is installed in.
#[derive(Clone, Default)]
pub struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs `f` with a subscriber that counts WARN events, returning its
/// result and the number of warnings.
pub fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, counter.count())
}
