#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sinkql_core::{ColumnId, DialectConfig, QuoteMethod, TableId};
use sinkql_sqlserver::SqlServerDialect;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub fn dialect() -> SqlServerDialect {
    SqlServerDialect::new(DialectConfig::default())
}

pub fn unquoted() -> SqlServerDialect {
    SqlServerDialect::new(DialectConfig::default().with_quote_identifiers(QuoteMethod::Never))
}

pub fn users() -> TableId {
    TableId::new(None, Some("dbo"), "users")
}

pub fn columns(table: &TableId, names: &[&str]) -> Vec<ColumnId> {
    names.iter().map(|n| table.column(*n)).collect()
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
