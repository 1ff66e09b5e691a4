use crate::python::ast::{
    literal::Literal,
    node::Located,
    operator::{BinOp, BoolOp, CmpOp, UnaryOp},
};

/// A position-carrying expression.
pub type Expr = Located<ExprKind>;

impl Expr {
    /// If this is a call whose callee is the bare name `callee`, return its positional arguments.
    ///
    /// Only the unqualified form matches: `print(x)` does, `builtins.print(x)` does not.
    pub fn as_call_to(&self, callee: &str) -> Option<&[Expr]> {
        match &self.kind {
            ExprKind::Call { func, args, .. } => match &func.kind {
                ExprKind::Name(name) if name == callee => Some(args),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether this expression may appear on the left of `=` or after `for`/`del`.
    pub fn is_assignable(&self) -> bool {
        match &self.kind {
            ExprKind::Name(_) | ExprKind::Attribute { .. } | ExprKind::Subscript { .. } => true,
            ExprKind::Starred(inner) => inner.is_assignable(),
            ExprKind::Tuple(items) | ExprKind::List(items) => items.iter().all(Expr::is_assignable),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal(Literal),

    /// Identifier, e.g. `x`.
    Name(String),

    /// `(a, b)` or a bare `a, b` in statement context.
    Tuple(Vec<Expr>),

    /// `[a, b]`
    List(Vec<Expr>),

    /// `{a, b}`
    Set(Vec<Expr>),

    /// `{k: v, **rest}`
    Dict(Vec<DictItem>),

    ListComp {
        elt: Box<Expr>,
        generators: Vec<Comprehension>,
    },

    SetComp {
        elt: Box<Expr>,
        generators: Vec<Comprehension>,
    },

    DictComp {
        key: Box<Expr>,
        value: Box<Expr>,
        generators: Vec<Comprehension>,
    },

    GeneratorExp {
        elt: Box<Expr>,
        generators: Vec<Comprehension>,
    },

    /// `obj.attr`
    Attribute {
        value: Box<Expr>,
        attr: String,
    },

    /// `obj[index]`; several comma-separated indices become a `Tuple`.
    Subscript {
        value: Box<Expr>,
        index: Box<Expr>,
    },

    /// `lower:upper:step`, only valid as a subscript index.
    Slice {
        lower: Option<Box<Expr>>,
        upper: Option<Box<Expr>>,
        step: Option<Box<Expr>>,
    },

    /// Function or method call: `func(args..., keywords...)`
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
        keywords: Vec<Keyword>,
    },

    /// `*value` in a display, call or assignment target.
    Starred(Box<Expr>),

    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    UnaryOp {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    /// `a and b and c`
    BoolOp {
        op: BoolOp,
        values: Vec<Expr>,
    },

    /// Chained comparison: `left op0 c0 op1 c1 ...`
    Compare {
        left: Box<Expr>,
        comparisons: Vec<(CmpOp, Expr)>,
    },

    /// `body if test else orelse`
    IfExp {
        test: Box<Expr>,
        body: Box<Expr>,
        orelse: Box<Expr>,
    },

    Lambda {
        params: Box<Parameters>,
        body: Box<Expr>,
    },

    /// `target := value`
    NamedExpr {
        target: Box<Expr>,
        value: Box<Expr>,
    },

    Await(Box<Expr>),
    Yield(Option<Box<Expr>>),
    YieldFrom(Box<Expr>),
}

/// `for target in iter if cond ...` inside a comprehension.
#[derive(Debug, Clone, PartialEq)]
pub struct Comprehension {
    pub target: Expr,
    pub iter: Expr,
    pub ifs: Vec<Expr>,
    pub is_async: bool,
}

/// `name=value` in a call, or `**value` when `arg` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub arg: Option<String>,
    pub value: Expr,
}

/// `key: value` in a dict display, or `**value` when `key` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DictItem {
    pub key: Option<Expr>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub annotation: Option<Expr>,
    pub default: Option<Expr>,
}

impl Param {
    pub fn new(name: String) -> Self {
        Self {
            name,
            annotation: None,
            default: None,
        }
    }
}

/// Parameter list of a `def` or `lambda`, in declaration order per group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameters {
    /// Parameters before a `/` marker.
    pub posonly: Vec<Param>,
    pub args: Vec<Param>,
    /// `*args`
    pub vararg: Option<Param>,
    /// Parameters after `*` or `*args`.
    pub kwonly: Vec<Param>,
    /// `**kwargs`
    pub kwarg: Option<Param>,
}

impl Parameters {
    pub fn is_empty(&self) -> bool {
        self.posonly.is_empty()
            && self.args.is_empty()
            && self.vararg.is_none()
            && self.kwonly.is_empty()
            && self.kwarg.is_none()
    }
}
