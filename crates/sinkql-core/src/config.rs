//! Dialect configuration.
//!
//! A dialect reads its configuration once, at construction. Owning
//! configurations (source or sink connector settings) expose their time
//! zone through [`TimeZoneProvider`]; a zone that is absent resolves to UTC.

use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{DialectError, Result};
use crate::identifier::QuoteMethod;

/// Exposes the time zone an owning configuration was set up with.
pub trait TimeZoneProvider {
    /// Returns the configured zone, or `None` when the configuration has none.
    fn time_zone(&self) -> Option<FixedOffset>;
}

/// Returns the UTC offset.
#[must_use]
pub fn utc() -> FixedOffset {
    Utc.fix()
}

/// Parses `UTC`, `Z`, `GMT` or a `±hh:mm` offset.
///
/// # Errors
///
/// Returns [`DialectError::InvalidTimeZone`] for anything else.
pub fn parse_time_zone(s: &str) -> Result<FixedOffset> {
    let trimmed = s.trim();
    match trimmed.to_ascii_uppercase().as_str() {
        "UTC" | "Z" | "GMT" => Ok(utc()),
        _ => FixedOffset::from_str(trimmed)
            .map_err(|_| DialectError::InvalidTimeZone(s.to_string())),
    }
}

/// Settings shared by every dialect.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Zone used to interpret date/time values that carry no offset.
    #[serde(deserialize_with = "deserialize_time_zone")]
    pub time_zone: FixedOffset,
    /// Whether identifiers are quoted.
    pub quote_identifiers: QuoteMethod,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            time_zone: utc(),
            quote_identifiers: QuoteMethod::Always,
        }
    }
}

impl DialectConfig {
    /// Resolves the time zone from an owning configuration, defaulting to UTC.
    #[must_use]
    pub fn from_provider(provider: &dyn TimeZoneProvider) -> Self {
        Self {
            time_zone: provider.time_zone().unwrap_or_else(utc),
            ..Self::default()
        }
    }

    /// Sets the quote method.
    #[must_use]
    pub const fn with_quote_identifiers(mut self, quote: QuoteMethod) -> Self {
        self.quote_identifiers = quote;
        self
    }
}

fn deserialize_time_zone<'de, D>(deserializer: D) -> std::result::Result<FixedOffset, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_time_zone(&s).map_err(serde::de::Error::custom)
}
