//! Table and column references.
//!
//! [`Ident`] is a (possibly dot-scoped) name with an optional alias.
//! [`TableRef`] extends it for table position, where a nested SELECT may
//! stand in for a name.

use crate::dialect::{Dialect, quote_identifier};
use crate::error::{BuildError, BuildResult};
use crate::stmt::Select;

/// A column or table identifier with an optional alias.
///
/// An aliased identifier always compiles as `quoted_name AS quoted_alias`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    name: String,
    alias: Option<String>,
}

impl Ident {
    /// Create an identifier from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Create an aliased identifier.
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// Attach an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The raw (unquoted) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Render the identifier, quoted for the dialect.
    pub(crate) fn to_sql(&self, dialect: &dyn Dialect) -> String {
        let quoted = quote_identifier(dialect, &self.name);
        match &self.alias {
            Some(alias) => format!("{} AS {}", quoted, quote_identifier(dialect, alias)),
            None => quoted,
        }
    }

    /// Render without the alias (SET columns, INSERT column lists).
    pub(crate) fn to_sql_unaliased(&self, dialect: &dyn Dialect) -> String {
        quote_identifier(dialect, &self.name)
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::new(name)
    }
}

impl From<(&str, &str)> for Ident {
    fn from((name, alias): (&str, &str)) -> Self {
        Ident::aliased(name, alias)
    }
}

impl From<(String, String)> for Ident {
    fn from((name, alias): (String, String)) -> Self {
        Ident::aliased(name, alias)
    }
}

/// The source of a table reference.
#[derive(Clone, Debug)]
enum TableSource {
    Name(String),
    Subquery(Box<Select>),
}

/// A table reference: a named table or a subquery, optionally aliased.
#[derive(Clone, Debug)]
pub struct TableRef {
    source: TableSource,
    alias: Option<String>,
}

impl TableRef {
    /// Reference a table by name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            source: TableSource::Name(name.into()),
            alias: None,
        }
    }

    /// Reference a subquery. An alias is mandatory at compile time.
    pub fn subquery(select: Select) -> Self {
        Self {
            source: TableSource::Subquery(Box::new(select)),
            alias: None,
        }
    }

    /// Attach an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Render the reference, quoted for the dialect.
    ///
    /// A subquery renders as `(SELECT ...) AS alias` and fails with
    /// [`BuildError::UnaliasedSubqueryTable`] when no alias is set.
    pub(crate) fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        match &self.source {
            TableSource::Name(name) => {
                let quoted = quote_identifier(dialect, name);
                Ok(match &self.alias {
                    Some(alias) => {
                        format!("{} AS {}", quoted, quote_identifier(dialect, alias))
                    }
                    None => quoted,
                })
            }
            TableSource::Subquery(select) => {
                let alias = self
                    .alias
                    .as_deref()
                    .ok_or(BuildError::UnaliasedSubqueryTable)?;
                let inner = select.to_sql(dialect)?;
                Ok(format!("({}) AS {}", inner, quote_identifier(dialect, alias)))
            }
        }
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        TableRef::name(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        TableRef::name(name)
    }
}

impl From<(&str, &str)> for TableRef {
    fn from((name, alias): (&str, &str)) -> Self {
        TableRef::name(name).with_alias(alias)
    }
}

impl From<Ident> for TableRef {
    fn from(ident: Ident) -> Self {
        let mut t = TableRef::name(ident.name);
        t.alias = ident.alias;
        t
    }
}

impl From<Select> for TableRef {
    fn from(select: Select) -> Self {
        TableRef::subquery(select)
    }
}

impl From<(Select, &str)> for TableRef {
    fn from((select, alias): (Select, &str)) -> Self {
        TableRef::subquery(select).with_alias(alias)
    }
}
