//! INSERT statement builder.

use crate::dialect::{Dialect, quote_value};
use crate::error::{BuildError, BuildResult};
use crate::ident::Ident;
use crate::stmt::Select;
use crate::value::Value;

/// INSERT statement builder.
///
/// Values come from exactly one source: literal rows appended with
/// [`Insert::values`], or a SELECT supplied with [`Insert::from_select`].
/// Setting both, or neither, is an [`BuildError::AmbiguousInsertSource`]
/// at compile time.
#[derive(Clone, Debug, Default)]
pub struct Insert {
    table: Option<Ident>,
    columns: Vec<Ident>,
    rows: Vec<Vec<Value>>,
    source: Option<Box<Select>>,
}

impl Insert {
    /// Create an empty INSERT builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table.
    pub fn into_table(mut self, table: impl Into<Ident>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Alias for [`Insert::into_table`].
    pub fn table(self, table: impl Into<Ident>) -> Self {
        self.into_table(table)
    }

    /// Append one column to the column list.
    pub fn column(mut self, column: impl Into<Ident>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Append multiple columns.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns.extend(columns.iter().map(|c| Ident::new(*c)));
        self
    }

    /// Append one row of literal values.
    pub fn values<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Use a SELECT as the value source (`INSERT INTO ... SELECT ...`).
    pub fn from_select(mut self, select: Select) -> Self {
        self.source = Some(Box::new(select));
        self
    }

    /// Restore construction defaults, clearing every field.
    pub fn reset(self) -> Self {
        Insert::new()
    }

    /// Compile the statement against a dialect.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or(BuildError::MissingTable("INSERT"))?;

        if self.rows.is_empty() == self.source.is_none() {
            // Both sources, or neither.
            return Err(BuildError::AmbiguousInsertSource);
        }

        let mut sql = format!("INSERT INTO {}", table.to_sql(dialect));

        if !self.columns.is_empty() {
            let cols: Vec<String> = self
                .columns
                .iter()
                .map(|c| c.to_sql_unaliased(dialect))
                .collect();
            sql.push_str(&format!(" ({})", cols.join(", ")));
        }

        match &self.source {
            Some(select) => {
                sql.push(' ');
                sql.push_str(&select.to_sql(dialect)?);
            }
            None => {
                let mut rendered = Vec::with_capacity(self.rows.len());
                for row in &self.rows {
                    let mut vals = Vec::with_capacity(row.len());
                    for value in row {
                        vals.push(quote_value(dialect, value)?);
                    }
                    rendered.push(format!("({})", vals.join(", ")));
                }
                sql.push_str(" VALUES ");
                sql.push_str(&rendered.join(", "));
            }
        }

        Ok(sql)
    }
}
