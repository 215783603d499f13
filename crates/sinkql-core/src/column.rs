//! Discovered column metadata.

use std::fmt;

use crate::identifier::ColumnId;

/// A JDBC type code, as in `java.sql.Types`.
///
/// Vendor-specific codes are declared by the dialect crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JdbcType(pub i32);

impl JdbcType {
    pub const BIT: Self = Self(-7);
    pub const TINYINT: Self = Self(-6);
    pub const SMALLINT: Self = Self(5);
    pub const INTEGER: Self = Self(4);
    pub const BIGINT: Self = Self(-5);
    pub const FLOAT: Self = Self(6);
    pub const REAL: Self = Self(7);
    pub const DOUBLE: Self = Self(8);
    pub const NUMERIC: Self = Self(2);
    pub const DECIMAL: Self = Self(3);
    pub const CHAR: Self = Self(1);
    pub const VARCHAR: Self = Self(12);
    pub const LONGVARCHAR: Self = Self(-1);
    pub const DATE: Self = Self(91);
    pub const TIME: Self = Self(92);
    pub const TIMESTAMP: Self = Self(93);
    pub const BINARY: Self = Self(-2);
    pub const VARBINARY: Self = Self(-3);
    pub const LONGVARBINARY: Self = Self(-4);
    pub const NULL: Self = Self(0);
    pub const OTHER: Self = Self(1111);
    pub const BLOB: Self = Self(2004);
    pub const CLOB: Self = Self(2005);
    pub const BOOLEAN: Self = Self(16);
    pub const NCHAR: Self = Self(-15);
    pub const NVARCHAR: Self = Self(-9);
    pub const LONGNVARCHAR: Self = Self(-16);
    pub const NCLOB: Self = Self(2011);
    pub const SQLXML: Self = Self(2009);

    /// Returns the integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for JdbcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a column accepts nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullability {
    Nullable,
    NotNull,
    #[default]
    Unknown,
}

/// Whether a column can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mutability {
    ReadOnly,
    Writable,
    MaybeWritable,
    #[default]
    Unknown,
}

/// Auto-increment state, refined as more specific metadata becomes available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AutoIncrement {
    /// Confirmed auto-incrementing.
    Yes,
    /// Confirmed not auto-incrementing.
    No,
    /// Not known.
    #[default]
    Unknown,
}

/// Attributes of a column as computed from generic driver metadata.
///
/// Dialects may refine individual attributes before the immutable
/// [`ColumnDefinition`] is built from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAttributes {
    pub id: ColumnId,
    pub jdbc_type: JdbcType,
    pub type_name: String,
    pub class_name: Option<String>,
    pub nullability: Nullability,
    pub mutability: Mutability,
    pub precision: u32,
    pub scale: i32,
    pub signed: Option<bool>,
    pub display_size: Option<u32>,
    pub auto_increment: AutoIncrement,
    pub case_sensitive: Option<bool>,
    pub searchable: Option<bool>,
    pub currency: Option<bool>,
    pub primary_key: Option<bool>,
}

impl ColumnAttributes {
    /// Creates attributes with every optional attribute unknown.
    #[must_use]
    pub fn new(id: ColumnId, jdbc_type: JdbcType, type_name: impl Into<String>) -> Self {
        Self {
            id,
            jdbc_type,
            type_name: type_name.into(),
            class_name: None,
            nullability: Nullability::Unknown,
            mutability: Mutability::Unknown,
            precision: 0,
            scale: 0,
            signed: None,
            display_size: None,
            auto_increment: AutoIncrement::Unknown,
            case_sensitive: None,
            searchable: None,
            currency: None,
            primary_key: None,
        }
    }
}

/// An immutable description of a discovered column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    attributes: ColumnAttributes,
}

impl From<ColumnAttributes> for ColumnDefinition {
    fn from(attributes: ColumnAttributes) -> Self {
        Self { attributes }
    }
}

impl ColumnDefinition {
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.attributes.id
    }

    #[must_use]
    pub const fn jdbc_type(&self) -> JdbcType {
        self.attributes.jdbc_type
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.attributes.type_name
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.attributes.class_name.as_deref()
    }

    #[must_use]
    pub const fn nullability(&self) -> Nullability {
        self.attributes.nullability
    }

    #[must_use]
    pub const fn mutability(&self) -> Mutability {
        self.attributes.mutability
    }

    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.attributes.precision
    }

    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.attributes.scale
    }

    /// Returns whether numbers are signed; unknown counts as signed.
    #[must_use]
    pub fn is_signed_number(&self) -> bool {
        self.attributes.signed.unwrap_or(true)
    }

    #[must_use]
    pub const fn display_size(&self) -> Option<u32> {
        self.attributes.display_size
    }

    #[must_use]
    pub const fn auto_increment(&self) -> AutoIncrement {
        self.attributes.auto_increment
    }

    #[must_use]
    pub const fn case_sensitive(&self) -> Option<bool> {
        self.attributes.case_sensitive
    }

    #[must_use]
    pub const fn searchable(&self) -> Option<bool> {
        self.attributes.searchable
    }

    #[must_use]
    pub const fn currency(&self) -> Option<bool> {
        self.attributes.currency
    }

    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.attributes.primary_key.unwrap_or(false)
    }

    /// A column is optional unless it is known to be NOT NULL.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.attributes.nullability != Nullability::NotNull
    }

    /// Returns the attributes this definition was built from.
    #[must_use]
    pub const fn attributes(&self) -> &ColumnAttributes {
        &self.attributes
    }
}

/// A column definition together with its 1-based position in a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    column: ColumnDefinition,
    column_number: usize,
}

impl ColumnMapping {
    /// Creates a mapping. `column_number` is 1-based.
    #[must_use]
    pub const fn new(column: ColumnDefinition, column_number: usize) -> Self {
        Self {
            column,
            column_number,
        }
    }

    #[must_use]
    pub const fn column(&self) -> &ColumnDefinition {
        &self.column
    }

    #[must_use]
    pub const fn column_number(&self) -> usize {
        self.column_number
    }
}
