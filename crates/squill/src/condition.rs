//! The condition tree shared by WHERE, HAVING, and JOIN ... ON clauses.
//!
//! A [`ConditionTree`] is an ordered sequence of condition entries and
//! group-boundary markers. Grouping is explicit: an `Open` marker starts a
//! parenthesized group, `Close` ends it, and every entry and opener carries
//! the connective (`AND`/`OR`) that joins it to the preceding token. The
//! first token of the tree, and the first token after any opener, never
//! emits its connective, so no clause starts with a dangling keyword.
//!
//! The builders expose the combinatorial method names (`and_where`,
//! `or_where_open`, ...); internally everything funnels through the two
//! orthogonal mutators here: [`ConditionTree::push`] and
//! [`ConditionTree::open`]/[`ConditionTree::close`].

use crate::dialect::{Dialect, quote_value};
use crate::error::{BuildError, BuildResult};
use crate::ident::Ident;
use crate::value::{Raw, Value};

/// Boolean connective joining adjacent condition tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    fn keyword(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// The left-hand side of a condition entry: a column reference or a value.
#[derive(Clone, Debug)]
pub enum Operand {
    /// A column identifier, quoted per dialect.
    Column(Ident),
    /// A value (literal, raw fragment, or subquery).
    Value(Value),
}

impl Operand {
    fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        match self {
            Operand::Column(ident) => Ok(ident.to_sql(dialect)),
            Operand::Value(value) => quote_value(dialect, value),
        }
    }
}

impl From<Ident> for Operand {
    fn from(ident: Ident) -> Self {
        Operand::Column(ident)
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Operand::Column(Ident::new(name))
    }
}

impl From<String> for Operand {
    fn from(name: String) -> Self {
        Operand::Column(Ident::new(name))
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<Raw> for Operand {
    fn from(raw: Raw) -> Self {
        Operand::Value(raw.into())
    }
}

#[derive(Clone, Debug)]
enum Node {
    Entry {
        connective: Connective,
        left: Operand,
        op: String,
        right: Value,
    },
    Open(Connective),
    Close,
}

/// An ordered boolean condition tree.
#[derive(Clone, Debug, Default)]
pub struct ConditionTree {
    nodes: Vec<Node>,
}

impl ConditionTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tree holds no entries or markers.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every entry and marker.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Append a condition entry.
    pub fn push(
        &mut self,
        connective: Connective,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Value>,
    ) {
        self.nodes.push(Node::Entry {
            connective,
            left: left.into(),
            op: op.into(),
            right: right.into(),
        });
    }

    /// Append a group-open marker.
    pub fn open(&mut self, connective: Connective) {
        self.nodes.push(Node::Open(connective));
    }

    /// Append a group-close marker.
    pub fn close(&mut self) {
        self.nodes.push(Node::Close);
    }

    /// Compile the tree into a boolean expression.
    ///
    /// An empty tree compiles to an empty string; the caller omits the
    /// owning clause keyword in that case. Unbalanced markers fail with
    /// [`BuildError::MalformedCondition`].
    pub fn to_sql(&self, dialect: &dyn Dialect) -> BuildResult<String> {
        if self.nodes.is_empty() {
            return Ok(String::new());
        }

        let mut tokens: Vec<String> = Vec::with_capacity(self.nodes.len());
        // One flag per open group: is the next token the first in it?
        let mut first = vec![true];

        for node in &self.nodes {
            match node {
                Node::Open(connective) => {
                    let flag = first.last_mut().expect("group stack never empty");
                    if !*flag {
                        tokens.push(connective.keyword().to_string());
                    }
                    *flag = false;
                    tokens.push("(".to_string());
                    first.push(true);
                }
                Node::Close => {
                    if first.len() == 1 {
                        return Err(BuildError::MalformedCondition);
                    }
                    first.pop();
                    tokens.push(")".to_string());
                }
                Node::Entry {
                    connective,
                    left,
                    op,
                    right,
                } => {
                    let flag = first.last_mut().expect("group stack never empty");
                    if !*flag {
                        tokens.push(connective.keyword().to_string());
                    }
                    *flag = false;
                    tokens.push(render_entry(dialect, left, op, right)?);
                }
            }
        }

        if first.len() != 1 {
            return Err(BuildError::MalformedCondition);
        }

        Ok(tokens.join(" "))
    }
}

/// Render one `left op right` entry.
///
/// `IN`/`NOT IN` route the right-hand side through the sequence path and
/// also accept a subquery. `BETWEEN`/`NOT BETWEEN` expect a two-element
/// sequence and render `lo AND hi`. Any other operator rejects a sequence.
fn render_entry(
    dialect: &dyn Dialect,
    left: &Operand,
    op: &str,
    right: &Value,
) -> BuildResult<String> {
    let lhs = left.to_sql(dialect)?;
    let op = op.trim();

    let rhs = match op.to_ascii_uppercase().as_str() {
        "IN" | "NOT IN" => match right {
            Value::List(_) | Value::Subquery(_) => quote_value(dialect, right)?,
            _ => return Err(BuildError::unsupported_operator(op)),
        },
        "BETWEEN" | "NOT BETWEEN" => match right {
            Value::List(items) if items.len() == 2 => format!(
                "{} AND {}",
                quote_value(dialect, &items[0])?,
                quote_value(dialect, &items[1])?
            ),
            _ => return Err(BuildError::unsupported_operator(op)),
        },
        _ => {
            if right.is_sequence() {
                return Err(BuildError::unsupported_operator(op));
            }
            quote_value(dialect, right)?
        }
    };

    Ok(format!("{} {} {}", lhs, op, rhs))
}
