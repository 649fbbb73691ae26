//! # squill
//!
//! A dialect-aware, fluent SQL statement builder and compiler.
//!
//! ## Features
//!
//! - **Fluent builders**: SELECT / INSERT / UPDATE / DELETE assembled through
//!   chained mutator calls, in any order
//! - **Shared condition tree**: one nested AND/OR grouping machine behind
//!   WHERE, HAVING, and JOIN ... ON
//! - **Injected dialects**: quoting rules (MySQL backticks, PostgreSQL/SQLite
//!   double quotes) are a parameter of `to_sql`, never global state
//! - **Pure compilation**: `to_sql`/`compile` take `&self`, mutate nothing,
//!   and can run repeatedly or concurrently on shared builders
//! - **Composable statements**: embed a SELECT as a subquery value, a derived
//!   table, or an `INSERT ... SELECT` source
//! - **Raw escape hatch**: [`Raw`] fragments pass through byte-identical
//!
//! ## Quick start
//!
//! ```ignore
//! use squill::{MySql, Order, select, update};
//!
//! let sql = select("users")
//!     .select("id")
//!     .select("username")
//!     .where_open()
//!     .and_where("id", "IN", [1, 2, 3])
//!     .or_where("last_login", "IS", squill::Value::Null)
//!     .where_close()
//!     .and_where("removed", "IS", squill::Value::Null)
//!     .order_by("username", Order::Asc)
//!     .limit(10)
//!     .to_sql(&MySql)?;
//!
//! let sql = update("users")
//!     .set("username", "jane")
//!     .and_where("username", "=", "john")
//!     .to_sql(&MySql)?;
//! ```
//!
//! This crate compiles statements to text; executing them against a live
//! connection is the caller's concern. The compiled string plus the dialect
//! it was built for is the complete handoff.

pub mod condition;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod stmt;
pub mod value;

pub use condition::{ConditionTree, Connective, Operand};
pub use dialect::{Dialect, MySql, Postgres, Sqlite, quote_identifier, quote_table, quote_value};
pub use error::{BuildError, BuildResult};
pub use ident::{Ident, TableRef};
pub use stmt::{
    Delete, Insert, JoinKind, Order, Select, Statement, Update, compile, delete, insert, select,
    update,
};
pub use value::{Raw, Value};
