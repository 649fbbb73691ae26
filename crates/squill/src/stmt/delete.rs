//! DELETE statement builder.

use crate::condition::{ConditionTree, Connective, Operand};
use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::ident::Ident;
use crate::value::Value;

/// DELETE statement builder.
#[derive(Clone, Debug, Default)]
pub struct Delete {
    table: Option<Ident>,
    where_tree: ConditionTree,
    limit: Option<u64>,
}

impl Delete {
    /// Create an empty DELETE builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table.
    pub fn from(mut self, table: impl Into<Ident>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Alias for [`Delete::from`].
    pub fn table(self, table: impl Into<Ident>) -> Self {
        self.from(table)
    }

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

    /// Alias for [`Delete::filter`].
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

    /// Alias for [`Delete::where_open`].
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

    /// Alias for [`Delete::where_close`].
    pub fn and_where_close(self) -> Self {
        self.where_close()
    }

    /// Alias for [`Delete::where_close`].
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
        Delete::new()
    }

    /// Compile the statement against a dialect.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        let table = self
            .table
            .as_ref()
            .ok_or(BuildError::MissingTable("DELETE"))?;

        let mut sql = format!("DELETE FROM {}", table.to_sql(dialect));

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::MySql;

    #[test]
    fn delete_with_where() {
        let qb = Delete::new().from("users").and_where("id", "=", 1);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "DELETE FROM `users` WHERE `id` = 1"
        );
    }

    #[test]
    fn delete_without_where() {
        let qb = Delete::new().from("sessions");
        assert_eq!(qb.to_sql(&MySql).unwrap(), "DELETE FROM `sessions`");
    }

    #[test]
    fn delete_with_limit() {
        let qb = Delete::new()
            .from("logs")
            .and_where("level", "=", "debug")
            .limit(1000);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "DELETE FROM `logs` WHERE `level` = 'debug' LIMIT 1000"
        );
    }

    #[test]
    fn delete_aliased_table_keeps_alias() {
        let qb = Delete::new()
            .from(("logs", "l"))
            .and_where("l.level", "=", "debug");
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "DELETE FROM `logs` AS `l` WHERE `l`.`level` = 'debug'"
        );
    }

    #[test]
    fn delete_requires_table() {
        let qb = Delete::new().and_where("id", "=", 1);
        assert_eq!(
            qb.to_sql(&MySql).unwrap_err(),
            BuildError::MissingTable("DELETE")
        );
    }

    #[test]
    fn delete_grouped_where_aliases() {
        let qb = Delete::new()
            .from("events")
            .and_where_open()
            .and_where("kind", "=", "ping")
            .or_where("kind", "=", "pong")
            .and_where_close()
            .and_where("seen", "=", false);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "DELETE FROM `events` WHERE ( `kind` = 'ping' OR `kind` = 'pong' ) \
             AND `seen` = FALSE"
        );
    }

    #[test]
    fn delete_grouped_where() {
        let qb = Delete::new()
            .from("users")
            .where_open()
            .and_where("status", "=", "banned")
            .or_where("status", "=", "spam")
            .where_close()
            .and_where("confirmed", "=", true);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "DELETE FROM `users` WHERE ( `status` = 'banned' OR `status` = 'spam' ) \
             AND `confirmed` = TRUE"
        );
    }
}
