//! Render connector SQL from the command line.
//!
//! `sinkql` picks a dialect from a JDBC connection URL, the same way a
//! connector does, and prints the statements that dialect would run. It
//! never connects to the database.
//!
//! # CLI Usage
//!
//! ```bash
//! export SINKQL_URL='jdbc:sqlserver://db:1433;databaseName=sales;password=secret'
//!
//! # Which dialect handles this URL?
//! sinkql dialect
//!
//! # The URL as it would appear in logs
//! sinkql sanitize
//!
//! # DDL from a JSON field list
//! sinkql create --table dbo.orders --fields orders.json
//! sinkql alter --table dbo.orders --fields new_columns.json
//! sinkql drop --table dbo.orders --if-exists
//!
//! # Parameterized DML
//! sinkql upsert --table dbo.orders --key id --column total --column status
//! sinkql delete --table dbo.orders --key id --key tenant
//! ```
//!
//! A field list is a JSON array of fields:
//!
//! ```json
//! [
//!   {"name": "id", "schema": {"type": "int64"}, "primary_key": true},
//!   {"name": "total", "schema": {"type": "bytes",
//!     "name": "org.apache.kafka.connect.data.Decimal",
//!     "parameters": {"scale": "2"}, "optional": true}}
//! ]
//! ```

pub mod error;
pub mod fields;

use std::path::PathBuf;

use chrono::FixedOffset;
use clap::{Parser, Subcommand};
use sinkql_core::{
    ColumnId, DatabaseDialect, DialectConfig, DialectRegistry, DropOptions, QuoteMethod, TableId,
    TimeZoneProvider,
};
use sinkql_sqlserver::SqlServerProvider;
use tracing::{debug, info};

pub use error::{CliError, Result};

/// Render connector SQL for a JDBC connection URL.
#[derive(Debug, Parser)]
#[command(name = "sinkql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JDBC connection URL used to select the dialect.
    #[arg(short, long, env = "SINKQL_URL")]
    pub url: String,

    /// Time zone for date/time values without an offset (`UTC` or `±hh:mm`).
    /// Defaults to UTC.
    #[arg(long, env = "SINKQL_TIME_ZONE", value_parser = sinkql_core::config::parse_time_zone)]
    pub time_zone: Option<FixedOffset>,

    /// Whether identifiers are quoted (`always` or `never`).
    #[arg(long, default_value = "always")]
    pub quote_identifiers: QuoteMethod,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the dialect configuration selected by the flags.
    #[must_use]
    pub fn dialect_config(&self) -> DialectConfig {
        DialectConfig::from_provider(self).with_quote_identifiers(self.quote_identifiers)
    }
}

impl TimeZoneProvider for Cli {
    fn time_zone(&self) -> Option<FixedOffset> {
        self.time_zone
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the connection URL with secrets masked.
    Sanitize,

    /// Print the name of the dialect selected for the URL.
    Dialect,

    /// Render CREATE TABLE from a field list.
    Create {
        /// Table name (`table`, `schema.table` or `catalog.schema.table`).
        #[arg(short, long)]
        table: String,

        /// JSON file holding the field list.
        #[arg(short, long)]
        fields: PathBuf,
    },

    /// Render the statements that add fields to a table.
    Alter {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// JSON file holding the fields to add.
        #[arg(short, long)]
        fields: PathBuf,
    },

    /// Render DROP TABLE.
    Drop {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Only drop the table if it exists.
        #[arg(long)]
        if_exists: bool,

        /// Drop dependent objects too.
        #[arg(long)]
        cascade: bool,
    },

    /// Render a parameterized upsert.
    Upsert {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Key column (repeatable).
        #[arg(short, long = "key", required = true)]
        keys: Vec<String>,

        /// Non-key column (repeatable).
        #[arg(short, long = "column")]
        columns: Vec<String>,
    },

    /// Render a parameterized DELETE by key.
    Delete {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Key column (repeatable).
        #[arg(short, long = "key", required = true)]
        keys: Vec<String>,
    },
}

/// Returns a registry holding every dialect this tool ships.
#[must_use]
pub fn registry() -> DialectRegistry {
    let mut registry = DialectRegistry::new();
    registry.register(Box::new(SqlServerProvider));
    registry
}

fn column_ids(table: &TableId, names: &[String]) -> Vec<ColumnId> {
    names.iter().map(|name| table.column(name.as_str())).collect()
}

/// Runs a parsed command line and returns the lines to print.
///
/// # Errors
///
/// Returns an error if a field list cannot be loaded or the dialect rejects
/// the request.
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let dialect = registry().create(&cli.url, &cli.dialect_config());
    debug!(
        dialect = dialect.name(),
        url = %dialect.sanitized_url(&cli.url),
        "Selected dialect"
    );
    render(dialect.as_ref(), cli)
}

fn render(dialect: &dyn DatabaseDialect, cli: &Cli) -> Result<Vec<String>> {
    let lines = match &cli.command {
        Commands::Sanitize => vec![dialect.sanitized_url(&cli.url)],
        Commands::Dialect => vec![dialect.name().to_string()],
        Commands::Create {
            table,
            fields: path,
        } => {
            let table = TableId::parse(table)?;
            let fields = fields::load(path)?;
            info!(table = %table, fields = fields.len(), "Rendering CREATE TABLE");
            vec![dialect.build_create_table(&table, &fields)?]
        }
        Commands::Alter {
            table,
            fields: path,
        } => {
            let table = TableId::parse(table)?;
            let fields = fields::load(path)?;
            info!(table = %table, fields = fields.len(), "Rendering ALTER TABLE");
            dialect.build_alter_table(&table, &fields)?
        }
        Commands::Drop {
            table,
            if_exists,
            cascade,
        } => {
            let table = TableId::parse(table)?;
            let options = DropOptions::new().if_exists(*if_exists).cascade(*cascade);
            vec![dialect.build_drop_table(&table, options)]
        }
        Commands::Upsert {
            table,
            keys,
            columns,
        } => {
            let table = TableId::parse(table)?;
            vec![dialect.build_upsert(
                &table,
                &column_ids(&table, keys),
                &column_ids(&table, columns),
            )?]
        }
        Commands::Delete { table, keys } => {
            let table = TableId::parse(table)?;
            vec![dialect.build_delete(&table, &column_ids(&table, keys))?]
        }
    };
    Ok(lines)
}
