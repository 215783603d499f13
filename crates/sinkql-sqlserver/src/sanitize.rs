//! Connection URL redaction for SQL Server.

use lazy_static::lazy_static;
use regex::Regex;
use sinkql_core::sanitize::{self, mask_property, semicolon_property};

lazy_static! {
    // Properties are `;name=value` pairs; these carry secrets.
    static ref SECRET_PROPERTIES: [Regex; 3] = [
        semicolon_property("password"),
        semicolon_property("keyStoreSecret"),
        semicolon_property("gsscredential"),
    ];
}

/// Masks `?`/`&` password properties as every dialect does, then the
/// `;password=`, `;keyStoreSecret=` and `;gsscredential=` values.
#[must_use]
pub fn sanitize_url(url: &str) -> String {
    SECRET_PROPERTIES
        .iter()
        .fold(sanitize::sanitize_url(url), |url, pattern| {
            mask_property(pattern, &url).into_owned()
        })
}
