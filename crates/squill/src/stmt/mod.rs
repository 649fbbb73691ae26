//! Statement builders and the compile dispatch.
//!
//! One builder per statement kind, each a plain `Clone`-able value object
//! with consuming fluent mutators. Compilation is a read-only projection of
//! the builder's fields plus a [`Dialect`] into SQL text: `to_sql` takes
//! `&self`, performs no mutation and no I/O, and may be called repeatedly
//! or concurrently on a shared builder.
//!
//! # Usage
//!
//! ```ignore
//! use squill::{MySql, select, update};
//!
//! let sql = select("users")
//!     .select("id")
//!     .select("username")
//!     .and_where("status", "=", "active")
//!     .order_by("created_at", squill::Order::Desc)
//!     .limit(10)
//!     .to_sql(&MySql)?;
//!
//! let sql = update("users")
//!     .set("username", "jane")
//!     .and_where("username", "=", "john")
//!     .to_sql(&MySql)?;
//! ```

mod delete;
mod insert;
mod select;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::{JoinKind, Order, Select};
pub use update::Update;

use crate::dialect::Dialect;
use crate::error::BuildResult;
use crate::ident::{Ident, TableRef};

/// A statement of any kind, ready to compile.
///
/// This is the composition seam: a `Statement` can be embedded as a
/// subquery value, used as a table reference, or supplied as an
/// `INSERT ... SELECT` source.
#[derive(Clone, Debug)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    /// The statement's SQL keyword, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "SELECT",
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
            Statement::Delete(_) => "DELETE",
        }
    }

    /// Compile the statement against a dialect.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        match self {
            Statement::Select(s) => s.to_sql(dialect),
            Statement::Insert(s) => s.to_sql(dialect),
            Statement::Update(s) => s.to_sql(dialect),
            Statement::Delete(s) => s.to_sql(dialect),
        }
    }
}

impl From<Select> for Statement {
    fn from(s: Select) -> Self {
        Statement::Select(s)
    }
}

impl From<Insert> for Statement {
    fn from(s: Insert) -> Self {
        Statement::Insert(s)
    }
}

impl From<Update> for Statement {
    fn from(s: Update) -> Self {
        Statement::Update(s)
    }
}

impl From<Delete> for Statement {
    fn from(s: Delete) -> Self {
        Statement::Delete(s)
    }
}

/// Compile a statement against a dialect.
///
/// Pure: the statement is not mutated and the same inputs always produce
/// the same text.
pub fn compile(statement: &Statement, dialect: &dyn Dialect) -> BuildResult<String> {
    let sql = statement.to_sql(dialect)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        kind = statement.kind(),
        dialect = dialect.name(),
        sql = %sql,
        "compiled statement"
    );
    Ok(sql)
}

/// Create a SELECT builder for the given table.
///
/// # Example
/// ```ignore
/// let qb = squill::select("users").and_where("id", "=", 1);
/// ```
pub fn select(table: impl Into<TableRef>) -> Select {
    Select::new().from(table)
}

/// Create an INSERT builder for the given table.
pub fn insert(table: impl Into<Ident>) -> Insert {
    Insert::new().into_table(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: impl Into<Ident>) -> Update {
    Update::new().table(table)
}

/// Create a DELETE builder for the given table.
pub fn delete(table: impl Into<Ident>) -> Delete {
    Delete::new().from(table)
}
