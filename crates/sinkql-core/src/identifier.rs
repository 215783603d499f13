//! Table and column identifiers, and the rules for quoting them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, Result};

/// Identifies a table by optional catalog, optional schema and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableId {
    catalog: Option<String>,
    schema: Option<String>,
    name: String,
}

impl TableId {
    /// Creates a table identifier.
    #[must_use]
    pub fn new(catalog: Option<&str>, schema: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            catalog: catalog.map(String::from),
            schema: schema.map(String::from),
            name: name.into(),
        }
    }

    /// Creates an unqualified table identifier.
    #[must_use]
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self::new(None, None, name)
    }

    /// Parses a dotted name of one to three parts: `table`, `schema.table`
    /// or `catalog.schema.table`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::InvalidIdentifier`] if the name has more than
    /// three parts or any part is empty.
    pub fn parse(qualified: &str) -> Result<Self> {
        let parts: Vec<&str> = qualified.split('.').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(DialectError::InvalidIdentifier(qualified.to_string()));
        }
        match parts.as_slice() {
            [name] => Ok(Self::new(None, None, *name)),
            [schema, name] => Ok(Self::new(None, Some(schema), *name)),
            [catalog, schema, name] => Ok(Self::new(Some(catalog), Some(schema), *name)),
            _ => Err(DialectError::InvalidIdentifier(qualified.to_string())),
        }
    }

    /// Returns the catalog, if any.
    #[must_use]
    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    /// Returns the schema, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over the non-empty name parts, outermost first.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.catalog
            .as_deref()
            .into_iter()
            .chain(self.schema.as_deref())
            .chain(std::iter::once(self.name.as_str()))
    }

    /// Returns a column identifier in this table.
    #[must_use]
    pub fn column(&self, name: impl Into<String>) -> ColumnId {
        ColumnId::new(self.clone(), name)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.parts().collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Identifies a column within a table, with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnId {
    table: TableId,
    name: String,
    alias: Option<String>,
}

impl ColumnId {
    /// Creates a column identifier.
    #[must_use]
    pub fn new(table: TableId, name: impl Into<String>) -> Self {
        Self {
            table,
            name: name.into(),
            alias: None,
        }
    }

    /// Sets the alias used when the column is projected.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Returns the owning table.
    #[must_use]
    pub fn table(&self) -> &TableId {
        &self.table
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the alias, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns the alias when one is set, else the column name.
    #[must_use]
    pub fn alias_or_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.name)
    }
}

/// Whether identifiers are wrapped in the dialect's quote characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMethod {
    /// Always quote identifiers.
    #[default]
    Always,
    /// Never quote identifiers.
    Never,
}

impl std::str::FromStr for QuoteMethod {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(DialectError::InvalidInput(format!(
                "unknown quote method '{other}', expected 'always' or 'never'"
            ))),
        }
    }
}

/// Separator and quote characters used to render qualified names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentifierRules {
    separator: &'static str,
    open_quote: &'static str,
    close_quote: &'static str,
}

impl IdentifierRules {
    /// ANSI rules: `.` separator and double quotes.
    pub const ANSI: Self = Self::new(".", "\"", "\"");

    /// Creates identifier rules.
    #[must_use]
    pub const fn new(
        separator: &'static str,
        open_quote: &'static str,
        close_quote: &'static str,
    ) -> Self {
        Self {
            separator,
            open_quote,
            close_quote,
        }
    }

    /// Returns the separator between qualified name parts.
    #[must_use]
    pub const fn separator(&self) -> &'static str {
        self.separator
    }

    /// Returns the opening quote.
    #[must_use]
    pub const fn open_quote(&self) -> &'static str {
        self.open_quote
    }

    /// Returns the closing quote.
    #[must_use]
    pub const fn close_quote(&self) -> &'static str {
        self.close_quote
    }

    /// Quotes a single identifier, doubling any closing quote it contains.
    #[must_use]
    pub fn quote(&self, name: &str) -> String {
        let escaped = name.replace(self.close_quote, &self.close_quote.repeat(2));
        format!("{}{escaped}{}", self.open_quote, self.close_quote)
    }
}

impl Default for IdentifierRules {
    fn default() -> Self {
        Self::ANSI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified_names() {
        let t = TableId::parse("db.dbo.users").unwrap();
        assert_eq!(t.catalog(), Some("db"));
        assert_eq!(t.schema(), Some("dbo"));
        assert_eq!(t.name(), "users");
        assert_eq!(t.to_string(), "db.dbo.users");

        let t = TableId::parse("dbo.users").unwrap();
        assert_eq!(t.catalog(), None);
        assert_eq!(t.schema(), Some("dbo"));

        assert_eq!(TableId::parse("users").unwrap(), TableId::unqualified("users"));
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        assert!(TableId::parse("a.b.c.d").is_err());
        assert!(TableId::parse("a..c").is_err());
        assert!(TableId::parse("").is_err());
    }

    #[test]
    fn test_column_alias() {
        let col = TableId::unqualified("users").column("id");
        assert_eq!(col.alias_or_name(), "id");
        let col = col.with_alias("user_id");
        assert_eq!(col.alias_or_name(), "user_id");
        assert_eq!(col.name(), "id");
    }

    #[test]
    fn test_quote_escapes_close_quote() {
        let rules = IdentifierRules::new(".", "[", "]");
        assert_eq!(rules.quote("users"), "[users]");
        assert_eq!(rules.quote("odd]name"), "[odd]]name]");
        assert_eq!(IdentifierRules::ANSI.quote("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_quote_method_from_str() {
        assert_eq!("ALWAYS".parse::<QuoteMethod>().unwrap(), QuoteMethod::Always);
        assert_eq!("never".parse::<QuoteMethod>().unwrap(), QuoteMethod::Never);
        assert!("sometimes".parse::<QuoteMethod>().is_err());
    }
}
