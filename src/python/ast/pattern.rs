use crate::python::ast::{expr::Expr, node::Located};

/// A `case` pattern. Patterns are kept structurally but never rewritten.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternKind {
    /// Literal, capture, wildcard or dotted value pattern:
    /// `1`, `-2.5`, `'s'`, `None`, `x`, `_`, `Color.RED`.
    Value(Expr),

    /// `[p, q]`, `(p, q)` and the open form `case p, q:`.
    Sequence(Vec<Pattern>),

    /// `*rest` inside a sequence pattern.
    Star(String),

    /// `{key: p, **rest}`
    Mapping {
        items: Vec<(Expr, Pattern)>,
        rest: Option<String>,
    },

    /// `Point(p, y=q)`
    Class {
        cls: Expr,
        patterns: Vec<Pattern>,
        keywords: Vec<(String, Pattern)>,
    },

    /// `p | q`
    Or(Vec<Pattern>),

    /// `p as name`
    As { pattern: Box<Pattern>, name: String },
}

pub type Pattern = Located<PatternKind>;
