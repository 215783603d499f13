//! Connection URL redaction for logging.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

/// Replacement for redacted secret values.
pub const MASK: &str = "****";

lazy_static! {
    static ref QUERY_PASSWORD: Regex =
        Regex::new(r"(?i)([?&]([a-z]+\.)*password=)[^&]*").expect("valid password pattern");
}

/// Masks `password` values in `?`/`&`-delimited URL properties, including
/// dotted property names such as `javax.net.ssl.password`.
#[must_use]
pub fn sanitize_url(url: &str) -> String {
    QUERY_PASSWORD
        .replace_all(url, format!("${{1}}{MASK}"))
        .into_owned()
}

/// Masks the value of every `;name=value` property whose name matches
/// `name` case-insensitively, up to the next `;`.
#[must_use]
pub fn mask_property<'a>(pattern: &Regex, url: &'a str) -> Cow<'a, str> {
    pattern.replace_all(url, format!("${{1}}{MASK}"))
}

/// Builds a pattern for [`mask_property`] matching `;<name>=`.
///
/// # Panics
///
/// Panics if `name` contains regex metacharacters that make the pattern invalid.
#[must_use]
pub fn semicolon_property(name: &str) -> Regex {
    Regex::new(&format!("(?i)(;{}=)[^;]*", regex::escape(name))).expect("escaped property name")
}
