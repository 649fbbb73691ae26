//! Error types for squill

use thiserror::Error;

/// Result type alias for statement compilation.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors detected while compiling a statement.
///
/// Builder mutation never fails; mutation order is intentionally
/// unconstrained (callers may add conditions before setting the table), so
/// every problem below is reported at compile time instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Unbalanced group markers in a condition tree.
    #[error("unbalanced condition group markers")]
    MalformedCondition,

    /// A statement compiled with no table reference set.
    #[error("no table reference set on {0} statement")]
    MissingTable(&'static str),

    /// INSERT has both literal value rows and a SELECT source, or neither.
    #[error("INSERT requires exactly one value source: literal rows or a SELECT")]
    AmbiguousInsertSource,

    /// A subquery used in table position without an alias.
    #[error("subquery used as a table requires an alias")]
    UnaliasedSubqueryTable,

    /// Operator paired with a value of the wrong shape (e.g. `IN` with a
    /// scalar, or a plain comparison against a sequence).
    #[error("operator `{operator}` cannot be applied to the given value")]
    UnsupportedOperator { operator: String },

    /// An ON condition was added before any JOIN.
    #[error("ON condition added before any JOIN")]
    MissingJoin,

    /// UPDATE compiled with an empty SET list.
    #[error("UPDATE requires at least one SET pair")]
    EmptySetList,
}

impl BuildError {
    /// Create an unsupported-operator error.
    pub fn unsupported_operator(operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator: operator.into(),
        }
    }

    /// Check if this is a malformed-condition error.
    pub fn is_malformed_condition(&self) -> bool {
        matches!(self, Self::MalformedCondition)
    }

    /// Check if this is a missing-table error.
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable(_))
    }
}
