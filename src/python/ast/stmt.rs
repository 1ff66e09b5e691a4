use crate::python::ast::{
    block::Block,
    expr::{Expr, Keyword, Parameters},
    node::Located,
    operator::BinOp,
    pattern::Pattern,
};

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// Standalone expression statement, e.g. `print(x)`.
    Expr(Expr),

    /// `return <expr>?`
    Return(Option<Expr>),

    /// `a = b = <expr>`
    Assign { targets: Vec<Expr>, value: Expr },

    /// `target += <expr>`
    AugAssign {
        target: Expr,
        op: BinOp,
        value: Expr,
    },

    /// `target: annotation = <expr>?`
    AnnAssign {
        target: Expr,
        annotation: Expr,
        value: Option<Expr>,
    },

    Pass,
    Break,
    Continue,

    Delete(Vec<Expr>),
    Global(Vec<String>),
    Nonlocal(Vec<String>),

    Assert { test: Expr, msg: Option<Expr> },

    /// `raise exc? (from cause)?`
    Raise {
        exc: Option<Expr>,
        cause: Option<Expr>,
    },

    /// `import a.b as c, d`
    Import(Vec<Alias>),

    /// `from ..module import a as b`; `level` counts the leading dots.
    ImportFrom {
        module: Option<String>,
        names: Vec<Alias>,
        level: usize,
    },

    /// `if test: body else: orelse`; an `elif` is an `If` alone in `orelse`.
    If {
        test: Expr,
        body: Block,
        orelse: Option<Block>,
    },

    While {
        test: Expr,
        body: Block,
        orelse: Option<Block>,
    },

    For {
        target: Expr,
        iter: Expr,
        body: Block,
        orelse: Option<Block>,
        is_async: bool,
    },

    With {
        items: Vec<WithItem>,
        body: Block,
        is_async: bool,
    },

    Try {
        body: Block,
        handlers: Vec<ExceptHandler>,
        orelse: Option<Block>,
        finalbody: Option<Block>,
        /// `except*` handlers
        is_star: bool,
    },

    /// `match subject:` followed by its `case` clauses.
    Match { subject: Expr, cases: Vec<MatchCase> },

    FunctionDef(FunctionDef),
    ClassDef(ClassDef),
}

pub type Stmt = Located<StmtKind>;

impl StmtKind {
    /// Statement blocks nested directly inside this statement, in source order.
    pub fn blocks(&self) -> Vec<&Block> {
        match self {
            StmtKind::If { body, orelse, .. }
            | StmtKind::While { body, orelse, .. }
            | StmtKind::For { body, orelse, .. } => {
                let mut out = vec![body];
                out.extend(orelse.as_ref());
                out
            }
            StmtKind::With { body, .. } => vec![body],
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
                ..
            } => {
                let mut out = vec![body];
                out.extend(handlers.iter().map(|h| &h.body));
                out.extend(orelse.as_ref());
                out.extend(finalbody.as_ref());
                out
            }
            StmtKind::Match { cases, .. } => cases.iter().map(|c| &c.body).collect(),
            StmtKind::FunctionDef(def) => vec![&def.body],
            StmtKind::ClassDef(class) => vec![&class.body],
            _ => Vec::new(),
        }
    }

    /// Mutable counterpart of [`StmtKind::blocks`], same order.
    pub fn blocks_mut(&mut self) -> Vec<&mut Block> {
        match self {
            StmtKind::If { body, orelse, .. }
            | StmtKind::While { body, orelse, .. }
            | StmtKind::For { body, orelse, .. } => {
                let mut out = vec![body];
                out.extend(orelse.as_mut());
                out
            }
            StmtKind::With { body, .. } => vec![body],
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
                ..
            } => {
                let mut out = vec![body];
                out.extend(handlers.iter_mut().map(|h| &mut h.body));
                out.extend(orelse.as_mut());
                out.extend(finalbody.as_mut());
                out
            }
            StmtKind::Match { cases, .. } => cases.iter_mut().map(|c| &mut c.body).collect(),
            StmtKind::FunctionDef(def) => vec![&mut def.body],
            StmtKind::ClassDef(class) => vec![&mut class.body],
            _ => Vec::new(),
        }
    }

    /// `def` and `class` open a new scope; everything else shares the enclosing one.
    pub fn opens_scope(&self) -> bool {
        matches!(self, StmtKind::FunctionDef(_) | StmtKind::ClassDef(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Parameters,
    pub returns: Option<Expr>,
    pub body: Block,
    pub decorators: Vec<Expr>,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    pub name: String,
    pub bases: Vec<Expr>,
    pub keywords: Vec<Keyword>,
    pub body: Block,
    pub decorators: Vec<Expr>,
}

/// `name as asname` in an import; `name` is dotted for `import a.b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub name: String,
    pub asname: Option<String>,
}

/// `context_expr as optional_vars` in a `with` header.
#[derive(Debug, Clone, PartialEq)]
pub struct WithItem {
    pub context_expr: Expr,
    pub optional_vars: Option<Expr>,
}

/// `except type as name: body`; a bare `except:` has neither.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptHandler {
    pub type_: Option<Expr>,
    pub name: Option<String>,
    pub body: Block,
}

/// `case pattern if guard: body`
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    pub body: Block,
}
