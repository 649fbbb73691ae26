//! UPDATE statement builder.

use crate::condition::{ConditionTree, Connective, Operand};
use crate::dialect::{Dialect, quote_value};
use crate::error::{BuildError, BuildResult};
use crate::ident::Ident;
use crate::value::Value;

/// UPDATE statement builder.
///
/// The SET list is append-only: pairs compile in insertion order and the
/// same column may appear more than once.
#[derive(Clone, Debug, Default)]
pub struct Update {
    table: Option<Ident>,
    set_pairs: Vec<(Ident, Value)>,
    where_tree: ConditionTree,
    limit: Option<u64>,
}

impl Update {
    /// Create an empty UPDATE builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table.
    pub fn table(mut self, table: impl Into<Ident>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Append a SET pair.
    pub fn set(mut self, column: impl Into<Ident>, value: impl Into<Value>) -> Self {
        self.set_pairs.push((column.into(), value.into()));
        self
    }

    /// Alias for [`Update::set`].
    pub fn value(self, column: impl Into<Ident>, value: impl Into<Value>) -> Self {
        self.set(column, value)
    }

    /// Append a SET pair whose value is the JSON serialization of `value`,
    /// rendered as a string literal.
    #[cfg(feature = "json")]
    pub fn set_json<T: serde::Serialize>(
        self,
        column: impl Into<Ident>,
        value: &T,
    ) -> serde_json::Result<Self> {
        let json = serde_json::to_string(value)?;
        Ok(self.set(column, json))
    }

    // ==================== WHERE ====================

    /// Append a WHERE condition with connective AND.
    pub fn filter(
        mut self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        self.where_tree.push(Connective::And, left, op, right);
        self
    }

    /// Alias for [`Update::filter`].
    pub fn and_where(
        self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        self.filter(left, op, right)
    }

    /// Append a WHERE condition with connective OR.
    pub fn or_where(
        mut self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        self.where_tree.push(Connective::Or, left, op, right);
        self
    }

    /// Open a WHERE group (AND).
    pub fn where_open(mut self) -> Self {
        self.where_tree.open(Connective::And);
        self
    }

    /// Alias for [`Update::where_open`].
    pub fn and_where_open(self) -> Self {
        self.where_open()
    }

    /// Open a WHERE group (OR).
    pub fn or_where_open(mut self) -> Self {
        self.where_tree.open(Connective::Or);
        self
    }

    /// Close the innermost WHERE group.
    pub fn where_close(mut self) -> Self {
        self.where_tree.close();
        self
    }

    /// Alias for [`Update::where_close`].
    pub fn and_where_close(self) -> Self {
        self.where_close()
    }

    /// Alias for [`Update::where_close`].
    pub fn or_where_close(self) -> Self {
        self.where_close()
    }

    /// Set LIMIT.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Restore construction defaults, clearing every field.
    pub fn reset(self) -> Self {
        Update::new()
    }

    /// Compile the statement against a dialect.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or(BuildError::MissingTable("UPDATE"))?;

        if self.set_pairs.is_empty() {
            return Err(BuildError::EmptySetList);
        }

        let mut pairs = Vec::with_capacity(self.set_pairs.len());
        for (column, value) in &self.set_pairs {
            pairs.push(format!(
                "{} = {}",
                column.to_sql_unaliased(dialect),
                quote_value(dialect, value)?
            ));
        }

        let mut sql = format!("UPDATE {} SET {}", table.to_sql(dialect), pairs.join(", "));

        let where_sql = self.where_tree.to_sql(dialect)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        Ok(sql)
    }
}
