//! SQLite-backed store
//!
//! A `Store` owns exactly one connection. It is opened once at startup,
//! handed to the desk that uses it, and closed once on quit.
//!
//! - `schema` - table creation and seed data
//! - `products` / `employees` - per-entity statements
//! - `demo` - users/departments tables and the named JOIN queries

pub mod demo;
pub mod employees;
pub mod products;
pub mod schema;

use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

use crate::model::join::QueryResult;

/// Name of the Unicode-aware lowercase function registered on every connection
pub const FOLD_CASE: &str = "fold_case";

/// Exclusive handle to one SQLite database
pub struct Store {
    conn: Connection,
    label: String,
}

impl Store {
    /// Open or create a database file
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self::with_connection(conn, path.display().to_string())?;
        info!(db = %store.label, "opened store");
        Ok(store)
    }

    /// Fresh in-memory database; used by the JOIN demo and by tests
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self::with_connection(conn, ":memory:".to_string())?;
        debug!("opened in-memory store");
        Ok(store)
    }

    fn with_connection(conn: Connection, label: String) -> rusqlite::Result<Self> {
        // SQLite's own lower() only folds ASCII
        conn.create_scalar_function(
            FOLD_CASE,
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text: Option<String> = ctx.get(0)?;
                Ok(text.map(|t| t.to_lowercase()))
            },
        )?;
        Ok(Self { conn, label })
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection
    pub fn close(self) -> rusqlite::Result<()> {
        let label = self.label;
        self.conn.close().map_err(|(_, err)| err)?;
        info!(db = %label, "closed store");
        Ok(())
    }

    /// Run a read-only statement and stringify every cell.
    /// Headers are the statement's result column names.
    pub fn run_query(&self, sql: &str) -> rusqlite::Result<QueryResult> {
        debug!(db = %self.label, sql, "running query");
        let mut stmt = self.conn.prepare(sql)?;
        let headers: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let width = headers.len();

        let rows = stmt
            .query_map([], |row| {
                let mut cells = Vec::with_capacity(width);
                for idx in 0..width {
                    cells.push(cell_text(row.get_ref(idx)?));
                }
                Ok(cells)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(QueryResult { headers, rows })
    }
}

/// Display text for a raw SQLite value; NULL renders as an empty cell
fn cell_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
