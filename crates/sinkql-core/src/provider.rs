//! Dialect lookup by JDBC connection URL.

use tracing::debug;

use crate::config::DialectConfig;
use crate::dialect::{DatabaseDialect, GenericDialect};

const JDBC_PREFIX: &str = "jdbc:";

/// Creates instances of one dialect and names the URL subprotocols it
/// handles.
pub trait DialectProvider: Send + Sync {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Returns the JDBC subprotocols this dialect handles, e.g. `sqlserver`
    /// for `jdbc:sqlserver://...`.
    fn subprotocols(&self) -> &'static [&'static str];

    /// Creates a dialect for `config`.
    fn create(&self, config: &DialectConfig) -> Box<dyn DatabaseDialect>;
}

/// Extracts the part of `url` after `jdbc:`, if present.
fn strip_jdbc(url: &str) -> &str {
    match url.get(..JDBC_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(JDBC_PREFIX) => &url[JDBC_PREFIX.len()..],
        _ => url,
    }
}

fn matches_subprotocol(rest: &str, subprotocol: &str) -> bool {
    rest.len() > subprotocol.len()
        && rest.as_bytes()[subprotocol.len()] == b':'
        && rest[..subprotocol.len()].eq_ignore_ascii_case(subprotocol)
}

/// A set of dialect providers.
#[derive(Default)]
pub struct DialectRegistry {
    providers: Vec<Box<dyn DialectProvider>>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider.
    pub fn register(&mut self, provider: Box<dyn DialectProvider>) -> &mut Self {
        self.providers.push(provider);
        self
    }

    /// Returns the names of the registered providers, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|p| p.name())
    }

    /// Finds the provider whose subprotocol is the longest match for `url`.
    #[must_use]
    pub fn find(&self, url: &str) -> Option<&dyn DialectProvider> {
        let rest = strip_jdbc(url);
        self.providers
            .iter()
            .filter_map(|provider| {
                provider
                    .subprotocols()
                    .iter()
                    .filter(|sub| matches_subprotocol(rest, sub))
                    .map(|sub| sub.len())
                    .max()
                    .map(|len| (len, provider.as_ref()))
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, provider)| provider)
    }

    /// Creates the dialect for `url`, falling back to the generic dialect
    /// when no provider matches.
    #[must_use]
    pub fn create(&self, url: &str, config: &DialectConfig) -> Box<dyn DatabaseDialect> {
        if let Some(provider) = self.find(url) {
            debug!(dialect = provider.name(), "Using dialect for connection URL");
            provider.create(config)
        } else {
            debug!("No dialect matches the connection URL; using the generic dialect");
            Box::new(GenericDialect::new(config.clone()))
        }
    }
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
