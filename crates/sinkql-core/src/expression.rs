//! Incremental SQL text builder that applies identifier rules.
//!
//! Statement builders append fixed keywords with [`ExpressionBuilder::append`]
//! and route every table and column name through the quoting helpers so a
//! dialect's quote characters and separator are applied consistently.

use crate::identifier::{ColumnId, IdentifierRules, QuoteMethod, TableId};

/// Builds SQL text for one statement.
#[derive(Debug, Clone)]
pub struct ExpressionBuilder<'a> {
    rules: &'a IdentifierRules,
    quote: QuoteMethod,
    catalog: bool,
    sql: String,
}

impl<'a> ExpressionBuilder<'a> {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new(rules: &'a IdentifierRules, quote: QuoteMethod) -> Self {
        Self {
            rules,
            quote,
            catalog: true,
            sql: String::new(),
        }
    }

    /// Sets whether a table's catalog is rendered as part of its name.
    #[must_use]
    pub const fn with_catalog(mut self, catalog: bool) -> Self {
        self.catalog = catalog;
        self
    }

    /// Appends raw SQL text.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.sql.push_str(text);
        self
    }

    /// Appends a single identifier, quoted according to the quote method.
    pub fn append_identifier(&mut self, name: &str) -> &mut Self {
        match self.quote {
            QuoteMethod::Always => {
                let quoted = self.rules.quote(name);
                self.sql.push_str(&quoted);
            }
            QuoteMethod::Never => self.sql.push_str(name),
        }
        self
    }

    /// Appends a column name (unqualified).
    pub fn append_column_name(&mut self, name: &str) -> &mut Self {
        self.append_identifier(name)
    }

    /// Appends a column identifier's name (unqualified).
    pub fn append_column(&mut self, column: &ColumnId) -> &mut Self {
        self.append_identifier(column.name())
    }

    /// Appends a qualified table name. The catalog is left out unless the
    /// builder renders catalogs.
    pub fn append_table(&mut self, table: &TableId) -> &mut Self {
        let skip = usize::from(!self.catalog && table.catalog().is_some());
        for (i, part) in table.parts().skip(skip).enumerate() {
            if i > 0 {
                self.sql.push_str(self.rules.separator());
            }
            self.append_identifier(part);
        }
        self
    }

    /// Appends a single-quoted string literal, doubling embedded quotes.
    pub fn append_string_literal(&mut self, value: &str) -> &mut Self {
        self.sql.push('\'');
        self.sql.push_str(&value.replace('\'', "''"));
        self.sql.push('\'');
        self
    }

    /// Appends `items` separated by `delimiter`, rendering each with `render`.
    pub fn append_list<T, I, F>(&mut self, delimiter: &str, items: I, mut render: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T),
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.sql.push_str(delimiter);
            }
            render(self, item);
        }
        self
    }

    /// Renders a table name in isolation, using the same rules.
    #[must_use]
    pub fn render_table(&self, table: &TableId) -> String {
        let mut inner = Self::new(self.rules, self.quote).with_catalog(self.catalog);
        inner.append_table(table);
        inner.build()
    }

    /// Returns the SQL text built so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    /// Consumes the builder and returns the SQL text.
    #[must_use]
    pub fn build(self) -> String {
        self.sql
    }
}
