//! Quoting dialects.
//!
//! A [`Dialect`] supplies the engine-specific pieces of SQL text generation:
//! the identifier delimiter glyph, string-literal escaping, and the spelling
//! of boolean/NULL tokens. The free functions in this module
//! ([`quote_identifier`], [`quote_value`], [`quote_table`]) build on those
//! hooks and are shared by every statement compiler.
//!
//! Dialects are plain values injected into `to_sql`/`compile`; there is no
//! process-wide default.

use crate::error::BuildResult;
use crate::ident::TableRef;
use crate::value::Value;

/// Engine-specific quoting rules.
///
/// Implementations are stateless unit structs; all methods take `&self` so
/// the trait stays object safe and a `&dyn Dialect` can be threaded through
/// recursive subquery compilation.
pub trait Dialect {
    /// Dialect name, for diagnostics and logging.
    fn name(&self) -> &'static str;

    /// The glyph wrapped around identifier segments (backtick, double quote).
    fn ident_delimiter(&self) -> char;

    /// Escape the body of a string literal (not including the surrounding
    /// single quotes).
    fn escape_text(&self, text: &str) -> String;

    /// Boolean literal token.
    fn bool_token(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }

    /// NULL literal token.
    fn null_token(&self) -> &'static str {
        "NULL"
    }
}

/// MySQL-style quoting: backtick identifiers, backslash escapes in strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn ident_delimiter(&self) -> char {
        '`'
    }

    fn escape_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                _ => out.push(ch),
            }
        }
        out
    }
}

/// PostgreSQL-style quoting: double-quoted identifiers, doubled single
/// quotes in strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn ident_delimiter(&self) -> char {
        '"'
    }

    fn escape_text(&self, text: &str) -> String {
        text.replace('\'', "''")
    }
}

/// SQLite quoting: ANSI double-quoted identifiers, doubled single quotes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn ident_delimiter(&self) -> char {
        '"'
    }

    fn escape_text(&self, text: &str) -> String {
        text.replace('\'', "''")
    }
}

/// Quote an identifier string.
///
/// Splits on `.` and delimits each segment, so `schema.table.column` keeps
/// its scoping. A bare `*` segment passes through unquoted.
///
/// A segment list containing an embedded double-quoted substring triggers
/// the expression rule: only the substring between the quotes is treated as
/// an identifier, everything outside passes through verbatim. This lets a
/// function call masquerade as a column:
///
/// ```ignore
/// quote_identifier(&MySql, r#"COUNT("users.id")"#); // COUNT(`users`.`id`)
/// ```
pub fn quote_identifier(dialect: &dyn Dialect, raw: &str) -> String {
    if raw.contains('"') {
        let mut out = String::with_capacity(raw.len() + 4);
        for (i, chunk) in raw.split('"').enumerate() {
            if i % 2 == 1 {
                out.push_str(&quote_scoped(dialect, chunk));
            } else {
                out.push_str(chunk);
            }
        }
        return out;
    }
    quote_scoped(dialect, raw)
}

/// Delimit each dot-separated segment of an identifier.
fn quote_scoped(dialect: &dyn Dialect, raw: &str) -> String {
    let delim = dialect.ident_delimiter();
    let mut out = String::with_capacity(raw.len() + 4);
    for (i, segment) in raw.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        if segment == "*" {
            out.push('*');
            continue;
        }
        out.push(delim);
        for ch in segment.chars() {
            if ch == delim {
                out.push(delim);
            }
            out.push(ch);
        }
        out.push(delim);
    }
    out
}

/// Quote a value as a SQL literal.
///
/// Numbers render unquoted, strings single-quoted and escaped, booleans and
/// NULL per dialect token. A sequence renders as a parenthesized
/// comma-joined list in input order (the `IN` form). Raw fragments pass
/// through byte-identical. A subquery compiles recursively and is wrapped
/// in parentheses.
pub fn quote_value(dialect: &dyn Dialect, value: &Value) -> BuildResult<String> {
    Ok(match value {
        Value::Null => dialect.null_token().to_string(),
        Value::Bool(b) => dialect.bool_token(*b).to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Text(s) => format!("'{}'", dialect.escape_text(s)),
        Value::List(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(quote_value(dialect, item)?);
            }
            format!("({})", parts.join(", "))
        }
        Value::Raw(sql) => sql.clone(),
        Value::Subquery(stmt) => format!("({})", stmt.to_sql(dialect)?),
    })
}

/// Quote a table reference.
///
/// As [`quote_identifier`], but also accepts a subquery in table position,
/// compiling it to `(SELECT ...) AS alias`. The alias is mandatory in that
/// case and its absence is a [`BuildError::UnaliasedSubqueryTable`] error.
///
/// [`BuildError::UnaliasedSubqueryTable`]: crate::error::BuildError::UnaliasedSubqueryTable
pub fn quote_table(dialect: &dyn Dialect, table: &TableRef) -> BuildResult<String> {
    table.to_sql(dialect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_simple_identifier() {
        assert_eq!(quote_identifier(&MySql, "users"), "`users`");
        assert_eq!(quote_identifier(&Postgres, "users"), "\"users\"");
    }

    #[test]
    fn quote_scoped_identifier() {
        assert_eq!(quote_identifier(&MySql, "db.users.id"), "`db`.`users`.`id`");
        assert_eq!(quote_identifier(&Sqlite, "users.id"), "\"users\".\"id\"");
    }

    #[test]
    fn quote_star_passthrough() {
        assert_eq!(quote_identifier(&MySql, "*"), "*");
        assert_eq!(quote_identifier(&MySql, "users.*"), "`users`.*");
    }

    #[test]
    fn quote_embedded_expression() {
        assert_eq!(
            quote_identifier(&MySql, r#"COUNT("id")"#),
            "COUNT(`id`)"
        );
        assert_eq!(
            quote_identifier(&MySql, r#"COUNT("users.id")"#),
            "COUNT(`users`.`id`)"
        );
        assert_eq!(
            quote_identifier(&Postgres, r#"LOWER("email")"#),
            "LOWER(\"email\")"
        );
    }

    #[test]
    fn quote_delimiter_inside_segment_is_doubled() {
        assert_eq!(quote_identifier(&MySql, "odd`name"), "`odd``name`");
    }

    #[test]
    fn quote_scalar_values() {
        assert_eq!(quote_value(&MySql, &Value::Int(42)).unwrap(), "42");
        assert_eq!(quote_value(&MySql, &Value::Null).unwrap(), "NULL");
        assert_eq!(quote_value(&MySql, &Value::Bool(true)).unwrap(), "TRUE");
        assert_eq!(
            quote_value(&MySql, &Value::Text("jane".into())).unwrap(),
            "'jane'"
        );
    }

    #[test]
    fn escape_text_mysql_backslash() {
        assert_eq!(
            quote_value(&MySql, &Value::Text("it's a \\ path".into())).unwrap(),
            "'it\\'s a \\\\ path'"
        );
    }

    #[test]
    fn escape_text_postgres_doubles_quote() {
        assert_eq!(
            quote_value(&Postgres, &Value::Text("it's".into())).unwrap(),
            "'it''s'"
        );
    }

    #[test]
    fn quote_list_preserves_order() {
        let v = Value::List(vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
        assert_eq!(quote_value(&MySql, &v).unwrap(), "(3, 1, 2)");
    }

    #[test]
    fn quote_raw_verbatim() {
        let v = Value::Raw("NOW() - INTERVAL '1 day'".into());
        assert_eq!(
            quote_value(&Postgres, &v).unwrap(),
            "NOW() - INTERVAL '1 day'"
        );
    }
}
