//! Values read from result rows and the connector values they convert to.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// A value as read from a driver result row.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary value.
    Blob(Vec<u8>),
    /// Exact numeric, in its decimal text form.
    Decimal(String),
    /// Date without time zone.
    Date(NaiveDate),
    /// Time of day without time zone.
    Time(NaiveTime),
    /// Date and time without time zone.
    Timestamp(NaiveDateTime),
    /// Date and time with a UTC offset.
    TimestampTz(DateTime<FixedOffset>),
}

impl SqlValue {
    /// Returns the variant name, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
            Self::Decimal(_) => "decimal",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::Timestamp(_) => "timestamp",
            Self::TimestampTz(_) => "timestamp with offset",
        }
    }
}

/// A converted connector value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Decimal(String),
    Date(NaiveDate),
    Time(NaiveTime),
    /// An instant, normalised to UTC.
    Timestamp(DateTime<Utc>),
}
