//! SELECT statement builder.

use crate::condition::{ConditionTree, Connective, Operand};
use crate::dialect::{Dialect, quote_table};
use crate::error::{BuildError, BuildResult};
use crate::ident::{Ident, TableRef};
use crate::value::Value;

/// Join type keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL OUTER",
            JoinKind::Cross => "CROSS",
        }
    }
}

/// One JOIN clause: a target and its ON condition tree.
#[derive(Clone, Debug)]
pub(crate) struct Join {
    target: TableRef,
    kind: JoinKind,
    on: ConditionTree,
}

impl Join {
    fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        let target = quote_table(dialect, &self.target)?;
        if self.on.is_empty() {
            return Ok(format!("{} JOIN {}", self.kind.keyword(), target));
        }
        Ok(format!(
            "{} JOIN {} ON ({})",
            self.kind.keyword(),
            target,
            self.on.to_sql(dialect)?
        ))
    }
}

/// ORDER BY direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn keyword(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// SELECT statement builder.
///
/// The column list defaults to `*` when empty. WHERE and HAVING hold two
/// independent condition trees.
#[derive(Clone, Debug, Default)]
pub struct Select {
    table: Option<TableRef>,
    columns: Vec<Ident>,
    distinct: bool,
    joins: Vec<Join>,
    where_tree: ConditionTree,
    group_by: Vec<Ident>,
    having_tree: ConditionTree,
    order_by: Vec<(Ident, Order)>,
    limit: Option<u64>,
    offset: Option<u64>,
    /// Set when `on` is called before any `join`; surfaced at compile time.
    dangling_on: bool,
}

impl Select {
    /// Create an empty SELECT builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table reference. Accepts a name, a `(name, alias)` pair, or
    /// a nested [`Select`] (which then requires an alias).
    pub fn from(mut self, table: impl Into<TableRef>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Alias for [`Select::from`].
    pub fn table(self, table: impl Into<TableRef>) -> Self {
        self.from(table)
    }

    // ==================== Columns ====================

    /// Append one column. Duplicates are allowed; the list compiles in
    /// insertion order.
    pub fn select(mut self, column: impl Into<Ident>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Append multiple columns.
    pub fn select_array(mut self, columns: &[&str]) -> Self {
        self.columns.extend(columns.iter().map(|c| Ident::new(*c)));
        self
    }

    /// Emit `SELECT DISTINCT`.
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    // ==================== Joins ====================

    /// Add a JOIN. Follow with [`Select::on`] to populate its condition.
    pub fn join(mut self, target: impl Into<TableRef>, kind: JoinKind) -> Self {
        self.joins.push(Join {
            target: target.into(),
            kind,
            on: ConditionTree::new(),
        });
        self
    }

    /// Add an ON condition (AND) to the most recent JOIN.
    pub fn on(
        mut self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        match self.joins.last_mut() {
            Some(join) => join.on.push(Connective::And, left, op, right),
            None => self.dangling_on = true,
        }
        self
    }

    /// Alias for [`Select::on`].
    pub fn and_on(
        self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        self.on(left, op, right)
    }

    /// Add an ON condition (OR) to the most recent JOIN.
    pub fn or_on(
        mut self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        match self.joins.last_mut() {
            Some(join) => join.on.push(Connective::Or, left, op, right),
            None => self.dangling_on = true,
        }
        self
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

    /// Alias for [`Select::filter`].
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

    /// Alias for [`Select::where_open`].
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

    /// Alias for [`Select::where_close`].
    pub fn and_where_close(self) -> Self {
        self.where_close()
    }

    /// Alias for [`Select::where_close`].
    pub fn or_where_close(self) -> Self {
        self.where_close()
    }

    // ==================== GROUP BY / HAVING ====================

    /// Append a GROUP BY column.
    pub fn group_by(mut self, column: impl Into<Ident>) -> Self {
        self.group_by.push(column.into());
        self
    }

    /// Append a HAVING condition with connective AND.
    pub fn having(
        mut self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        self.having_tree.push(Connective::And, left, op, right);
        self
    }

    /// Alias for [`Select::having`].
    pub fn and_having(
        self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        self.having(left, op, right)
    }

    /// Append a HAVING condition with connective OR.
    pub fn or_having(
        mut self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        self.having_tree.push(Connective::Or, left, op, right);
        self
    }

    /// Open a HAVING group (AND).
    pub fn having_open(mut self) -> Self {
        self.having_tree.open(Connective::And);
        self
    }

    /// Open a HAVING group (OR).
    pub fn or_having_open(mut self) -> Self {
        self.having_tree.open(Connective::Or);
        self
    }

    /// Close the innermost HAVING group.
    pub fn having_close(mut self) -> Self {
        self.having_tree.close();
        self
    }

    // ==================== Ordering & pagination ====================

    /// Append an ORDER BY column with direction.
    pub fn order_by(mut self, column: impl Into<Ident>, order: Order) -> Self {
        self.order_by.push((column.into(), order));
        self
    }

    /// Set LIMIT.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set OFFSET.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    // ==================== Derivation & lifecycle ====================

    /// Derive an independent `COUNT("*")` projection of this query.
    ///
    /// The clone keeps the FROM/JOIN/WHERE/GROUP BY/HAVING shape but drops
    /// the column list, DISTINCT, ordering and pagination. Mutating the
    /// result never affects the original.
    pub fn count(&self) -> Select {
        let mut qb = self.clone();
        qb.columns = vec![Ident::new(r#"COUNT("*")"#)];
        qb.distinct = false;
        qb.order_by.clear();
        qb.limit = None;
        qb.offset = None;
        qb
    }

    /// Restore construction defaults, clearing every field.
    pub fn reset(self) -> Self {
        Select::new()
    }

    // ==================== Compile ====================

    /// Compile the statement against a dialect.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        if self.dangling_on {
            return Err(BuildError::MissingJoin);
        }
        let table = self
            .table
            .as_ref()
            .ok_or(BuildError::MissingTable("SELECT"))?;

        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            let cols: Vec<String> = self.columns.iter().map(|c| c.to_sql(dialect)).collect();
            sql.push_str(&cols.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&quote_table(dialect, table)?);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql(dialect)?);
        }

        let where_sql = self.where_tree.to_sql(dialect)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        if !self.group_by.is_empty() {
            let cols: Vec<String> = self.group_by.iter().map(|c| c.to_sql(dialect)).collect();
            sql.push_str(" GROUP BY ");
            sql.push_str(&cols.join(", "));
        }

        let having_sql = self.having_tree.to_sql(dialect)?;
        if !having_sql.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&having_sql);
        }

        if !self.order_by.is_empty() {
            let parts: Vec<String> = self
                .order_by
                .iter()
                .map(|(col, order)| format!("{} {}", col.to_sql(dialect), order.keyword()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&parts.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySql, Postgres};

    #[test]
    fn select_star_by_default() {
        let qb = Select::new().from("users");
        assert_eq!(qb.to_sql(&MySql).unwrap(), "SELECT * FROM `users`");
    }

    #[test]
    fn select_columns() {
        let qb = Select::new()
            .from("users")
            .select("id")
            .select(("username", "name"));
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "SELECT `id`, `username` AS `name` FROM `users`"
        );
    }

    #[test]
    fn select_array_appends() {
        let qb = Select::new()
            .from("users")
            .select_array(&["id", "email"])
            .select("username");
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "SELECT `id`, `email`, `username` FROM `users`"
        );
    }

    #[test]
    fn select_distinct() {
        let qb = Select::new().from("users").select("role").distinct(true);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "SELECT DISTINCT `role` FROM `users`"
        );
    }

    #[test]
    fn select_missing_table() {
        let qb = Select::new().select("id");
        assert_eq!(
            qb.to_sql(&MySql).unwrap_err(),
            BuildError::MissingTable("SELECT")
        );
    }

    #[test]
    fn select_with_where() {
        let qb = Select::new()
            .from("users")
            .and_where("status", "=", "active")
            .and_where("age", ">", 18);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "SELECT * FROM `users` WHERE `status` = 'active' AND `age` > 18"
        );
    }

    #[test]
    fn empty_where_tree_omits_clause() {
        let qb = Select::new().from("users");
        let sql = qb.to_sql(&MySql).unwrap();
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn select_join_on() {
        let qb = Select::new()
            .from(("users", "u"))
            .join(("orders", "o"), JoinKind::Left)
            .on("u.id", "=", crate::Raw::new("`o`.`user_id`"));
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "SELECT * FROM `users` AS `u` LEFT JOIN `orders` AS `o` ON (`u`.`id` = `o`.`user_id`)"
        );
    }

    #[test]
    fn cross_join_without_on() {
        let qb = Select::new().from("a").join("b", JoinKind::Cross);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "SELECT * FROM `a` CROSS JOIN `b`"
        );
    }

    #[test]
    fn on_before_join_fails_at_compile() {
        let qb = Select::new().from("users").on("a", "=", 1);
        assert_eq!(qb.to_sql(&MySql).unwrap_err(), BuildError::MissingJoin);
    }

    #[test]
    fn select_group_having_order() {
        let qb = Select::new()
            .from("orders")
            .select("user_id")
            .select(r#"COUNT("*")"#)
            .group_by("user_id")
            .having(r#"COUNT("*")"#, ">", 5)
            .order_by("user_id", Order::Asc);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "SELECT `user_id`, COUNT(*) FROM `orders` GROUP BY `user_id` \
             HAVING COUNT(*) > 5 ORDER BY `user_id` ASC"
        );
    }

    #[test]
    fn select_limit_offset() {
        let qb = Select::new()
            .from("users")
            .order_by("created_at", Order::Desc)
            .limit(10)
            .offset(20);
        assert_eq!(
            qb.to_sql(&MySql).unwrap(),
            "SELECT * FROM `users` ORDER BY `created_at` DESC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn subquery_in_from_needs_alias() {
        let inner = Select::new().from("logs");
        let qb = Select::new().from(inner);
        assert_eq!(
            qb.to_sql(&MySql).unwrap_err(),
            BuildError::UnaliasedSubqueryTable
        );
    }

    #[test]
    fn subquery_in_from_with_alias() {
        let inner = Select::new().from("logs").and_where("level", "=", "error");
        let qb = Select::new().from((inner, "recent")).select("recent.id");
        assert_eq!(
            qb.to_sql(&Postgres).unwrap(),
            "SELECT \"recent\".\"id\" FROM \
             (SELECT * FROM \"logs\" WHERE \"level\" = 'error') AS \"recent\""
        );
    }

    #[test]
    fn count_derivation_is_independent() {
        let base = Select::new()
            .from("users")
            .select("id")
            .and_where("removed", "IS", crate::Value::Null)
            .order_by("id", Order::Asc)
            .limit(25);
        let count = base.count();
        assert_eq!(
            count.to_sql(&MySql).unwrap(),
            "SELECT COUNT(*) FROM `users` WHERE `removed` IS NULL"
        );
        // The original is untouched.
        assert_eq!(
            base.to_sql(&MySql).unwrap(),
            "SELECT `id` FROM `users` WHERE `removed` IS NULL ORDER BY `id` ASC LIMIT 25"
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let qb = Select::new()
            .from("users")
            .select("id")
            .and_where("a", "=", 1)
            .limit(5)
            .reset();
        assert_eq!(
            qb.to_sql(&MySql).unwrap_err(),
            BuildError::MissingTable("SELECT")
        );
    }

    #[test]
    fn recompile_is_side_effect_free() {
        let qb = Select::new().from("users").and_where("id", "=", 1);
        let first = qb.to_sql(&MySql).unwrap();
        let second = qb.to_sql(&MySql).unwrap();
        assert_eq!(first, second);
    }
}
