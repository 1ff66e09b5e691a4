//! Syntax tree back to Python source.
//!
//! Output re-parses to the same tree (positions aside). Layout is normalised
//! to four-space indentation and one statement per line. Tuples are always
//! parenthesised; any other parentheses appear only where precedence needs them.
//! Number and string literals are written exactly as they were read.

use core::fmt;

use crate::python::ast::{
    block::{Block, Module},
    expr::{Comprehension, DictItem, Expr, ExprKind, Keyword, Param, Parameters},
    literal::Literal,
    node::Located,
    operator::{BinOp, BoolOp, UnaryOp},
    pattern::{Pattern, PatternKind},
    stmt::{Alias, ExceptHandler, FunctionDef, MatchCase, Stmt, StmtKind, WithItem},
};

const INDENT: &str = "    ";

/// Binding strength of an expression, weakest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    Yield,
    Test, // lambda, `x if c else y`
    Or,
    And,
    Not,
    Comparison,
    BitOr,
    BitXor,
    BitAnd,
    Shift,
    Arith,
    Term,
    Factor, // unary `-x`, `+x`, `~x`
    Power,
    Await,
    Atom,
}

impl Level {
    fn next(self) -> Level {
        use Level::*;
        match self {
            Yield => Test,
            Test => Or,
            Or => And,
            And => Not,
            Not => Comparison,
            Comparison => BitOr,
            BitOr => BitXor,
            BitXor => BitAnd,
            BitAnd => Shift,
            Shift => Arith,
            Arith => Term,
            Term => Factor,
            Factor => Power,
            Power => Await,
            Await | Atom => Atom,
        }
    }
}

fn binop_level(op: BinOp) -> Level {
    match op {
        BinOp::BitOr => Level::BitOr,
        BinOp::BitXor => Level::BitXor,
        BinOp::BitAnd => Level::BitAnd,
        BinOp::LShift | BinOp::RShift => Level::Shift,
        BinOp::Add | BinOp::Sub => Level::Arith,
        BinOp::Mul | BinOp::MatMul | BinOp::Div | BinOp::FloorDiv | BinOp::Mod => Level::Term,
        BinOp::Pow => Level::Power,
    }
}

fn level_of(e: &Expr) -> Level {
    match &e.kind {
        ExprKind::Yield(_) | ExprKind::YieldFrom(_) => Level::Yield,
        ExprKind::IfExp { .. } | ExprKind::Lambda { .. } => Level::Test,
        ExprKind::BoolOp { op: BoolOp::Or, .. } => Level::Or,
        ExprKind::BoolOp { op: BoolOp::And, .. } => Level::And,
        ExprKind::UnaryOp { op: UnaryOp::Not, .. } => Level::Not,
        ExprKind::Compare { .. } => Level::Comparison,
        ExprKind::BinaryOp { op, .. } => binop_level(*op),
        ExprKind::UnaryOp { .. } => Level::Factor,
        ExprKind::Await(_) => Level::Await,
        _ => Level::Atom,
    }
}

#[derive(Default)]
struct Unparser {
    out: String,
    depth: usize,
}

impl Unparser {
    fn finish(mut self) -> String {
        while self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }

    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn start_line(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn end_line(&mut self) {
        self.out.push('\n');
    }

    fn comma_separated<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            each(self, item);
        }
    }

    // ---- statements ----

    fn block(&mut self, block: &Block) {
        self.depth += 1;
        if block.is_empty() {
            self.start_line();
            self.push("pass");
            self.end_line();
        }
        for stmt in &block.stmts {
            self.stmt(stmt);
        }
        self.depth -= 1;
    }

    /// `header:` followed by the indented block.
    fn suite(&mut self, header: &str, block: &Block) {
        self.start_line();
        self.push(header);
        self.push(":");
        self.end_line();
        self.block(block);
    }

    fn else_suite(&mut self, orelse: &Option<Block>) {
        if let Some(orelse) = orelse {
            self.suite("else", orelse);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::If { test, body, orelse } => self.if_chain("if", test, body, orelse),
            StmtKind::While { test, body, orelse } => {
                self.start_line();
                self.push("while ");
                self.expr(test, Level::Test);
                self.push(":");
                self.end_line();
                self.block(body);
                self.else_suite(orelse);
            }
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
                is_async,
            } => {
                self.start_line();
                if *is_async {
                    self.push("async ");
                }
                self.push("for ");
                self.target(target);
                self.push(" in ");
                self.expr(iter, Level::Test);
                self.push(":");
                self.end_line();
                self.block(body);
                self.else_suite(orelse);
            }
            StmtKind::With {
                items,
                body,
                is_async,
            } => {
                self.start_line();
                if *is_async {
                    self.push("async ");
                }
                self.push("with ");
                self.comma_separated(items, |u, item: &WithItem| {
                    u.expr(&item.context_expr, Level::Test);
                    if let Some(vars) = &item.optional_vars {
                        u.push(" as ");
                        u.target(vars);
                    }
                });
                self.push(":");
                self.end_line();
                self.block(body);
            }
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
                is_star,
            } => {
                self.suite("try", body);
                for handler in handlers {
                    self.except_handler(handler, *is_star);
                }
                self.else_suite(orelse);
                if let Some(finalbody) = finalbody {
                    self.suite("finally", finalbody);
                }
            }
            StmtKind::Match { subject, cases } => {
                self.start_line();
                self.push("match ");
                self.expr(subject, Level::Test);
                self.push(":");
                self.end_line();
                self.depth += 1;
                for case in cases {
                    self.match_case(case);
                }
                self.depth -= 1;
            }
            StmtKind::FunctionDef(def) => self.function_def(def),
            StmtKind::ClassDef(class) => {
                self.decorators(&class.decorators);
                self.start_line();
                self.push("class ");
                self.push(&class.name);
                if !class.bases.is_empty() || !class.keywords.is_empty() {
                    self.push("(");
                    self.call_arguments(&class.bases, &class.keywords);
                    self.push(")");
                }
                self.push(":");
                self.end_line();
                self.block(&class.body);
            }
            simple => {
                self.start_line();
                self.simple_stmt(simple);
                self.end_line();
            }
        }
    }

    fn simple_stmt(&mut self, kind: &StmtKind) {
        match kind {
            StmtKind::Expr(e) => self.expr(e, Level::Yield),
            StmtKind::Return(value) => {
                self.push("return");
                if let Some(value) = value {
                    self.push(" ");
                    self.expr(value, Level::Test);
                }
            }
            StmtKind::Assign { targets, value } => {
                for target in targets {
                    self.target(target);
                    self.push(" = ");
                }
                self.expr(value, Level::Yield);
            }
            StmtKind::AugAssign { target, op, value } => {
                self.target(target);
                self.push(&format!(" {}= ", op));
                self.expr(value, Level::Yield);
            }
            StmtKind::AnnAssign {
                target,
                annotation,
                value,
            } => {
                self.target(target);
                self.push(": ");
                self.expr(annotation, Level::Test);
                if let Some(value) = value {
                    self.push(" = ");
                    self.expr(value, Level::Yield);
                }
            }
            StmtKind::Pass => self.push("pass"),
            StmtKind::Break => self.push("break"),
            StmtKind::Continue => self.push("continue"),
            StmtKind::Delete(targets) => {
                self.push("del ");
                self.comma_separated(targets, |u, t| u.target(t));
            }
            StmtKind::Global(names) => {
                self.push("global ");
                self.push(&names.join(", "));
            }
            StmtKind::Nonlocal(names) => {
                self.push("nonlocal ");
                self.push(&names.join(", "));
            }
            StmtKind::Assert { test, msg } => {
                self.push("assert ");
                self.expr(test, Level::Test);
                if let Some(msg) = msg {
                    self.push(", ");
                    self.expr(msg, Level::Test);
                }
            }
            StmtKind::Raise { exc, cause } => {
                self.push("raise");
                if let Some(exc) = exc {
                    self.push(" ");
                    self.expr(exc, Level::Test);
                }
                if let Some(cause) = cause {
                    self.push(" from ");
                    self.expr(cause, Level::Test);
                }
            }
            StmtKind::Import(names) => {
                self.push("import ");
                self.aliases(names);
            }
            StmtKind::ImportFrom {
                module,
                names,
                level,
            } => {
                self.push("from ");
                self.push(&".".repeat(*level));
                if let Some(module) = module {
                    self.push(module);
                }
                self.push(" import ");
                self.aliases(names);
            }
            // Compound statements are written by `stmt`.
            _ => {}
        }
    }

    fn aliases(&mut self, names: &[Alias]) {
        self.comma_separated(names, |u, alias| {
            u.push(&alias.name);
            if let Some(asname) = &alias.asname {
                u.push(" as ");
                u.push(asname);
            }
        });
    }

    /// Re-folds `else: if ...` (an `If` alone in `orelse`) into `elif`.
    fn if_chain(&mut self, keyword: &str, test: &Expr, body: &Block, orelse: &Option<Block>) {
        self.start_line();
        self.push(keyword);
        self.push(" ");
        self.expr(test, Level::Test);
        self.push(":");
        self.end_line();
        self.block(body);

        match orelse.as_ref().map(|b| b.stmts.as_slice()) {
            Some(
                [Located {
                    kind:
                        StmtKind::If {
                            test,
                            body,
                            orelse,
                        },
                    ..
                }],
            ) => self.if_chain("elif", test, body, orelse),
            _ => self.else_suite(orelse),
        }
    }

    fn except_handler(&mut self, handler: &ExceptHandler, is_star: bool) {
        self.start_line();
        self.push(if is_star { "except*" } else { "except" });
        if let Some(type_) = &handler.type_ {
            self.push(" ");
            self.expr(type_, Level::Test);
            if let Some(name) = &handler.name {
                self.push(" as ");
                self.push(name);
            }
        }
        self.push(":");
        self.end_line();
        self.block(&handler.body);
    }

    fn match_case(&mut self, case: &MatchCase) {
        self.start_line();
        self.push("case ");
        self.pattern(&case.pattern);
        if let Some(guard) = &case.guard {
            self.push(" if ");
            self.expr(guard, Level::Test);
        }
        self.push(":");
        self.end_line();
        self.block(&case.body);
    }

    fn pattern(&mut self, pattern: &Pattern) {
        match &pattern.kind {
            PatternKind::Value(value) => self.expr(value, Level::Arith),
            PatternKind::Sequence(items) => {
                self.push("[");
                self.comma_separated(items, |u, p| u.pattern(p));
                self.push("]");
            }
            PatternKind::Star(name) => {
                self.push("*");
                self.push(name);
            }
            PatternKind::Mapping { items, rest } => {
                self.push("{");
                self.comma_separated(items, |u, (key, value)| {
                    u.expr(key, Level::Arith);
                    u.push(": ");
                    u.pattern(value);
                });
                if let Some(rest) = rest {
                    if !items.is_empty() {
                        self.push(", ");
                    }
                    self.push("**");
                    self.push(rest);
                }
                self.push("}");
            }
            PatternKind::Class {
                cls,
                patterns,
                keywords,
            } => {
                self.expr(cls, Level::Atom);
                self.push("(");
                self.comma_separated(patterns, |u, p| u.pattern(p));
                if !patterns.is_empty() && !keywords.is_empty() {
                    self.push(", ");
                }
                self.comma_separated(keywords, |u, (name, value)| {
                    u.push(name);
                    u.push("=");
                    u.pattern(value);
                });
                self.push(")");
            }
            PatternKind::Or(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        self.push(" | ");
                    }
                    self.grouped_pattern(alternative);
                }
            }
            PatternKind::As { pattern, name } => {
                if matches!(pattern.kind, PatternKind::As { .. }) {
                    self.push("(");
                    self.pattern(pattern);
                    self.push(")");
                } else {
                    self.pattern(pattern);
                }
                self.push(" as ");
                self.push(name);
            }
        }
    }

    /// Alternative of `|`; nested or- and as-patterns need parentheses.
    fn grouped_pattern(&mut self, pattern: &Pattern) {
        if matches!(pattern.kind, PatternKind::Or(_) | PatternKind::As { .. }) {
            self.push("(");
            self.pattern(pattern);
            self.push(")");
        } else {
            self.pattern(pattern);
        }
    }

    fn decorators(&mut self, decorators: &[Expr]) {
        for d in decorators {
            self.start_line();
            self.push("@");
            self.expr(d, Level::Test);
            self.end_line();
        }
    }

    fn function_def(&mut self, def: &FunctionDef) {
        self.decorators(&def.decorators);
        self.start_line();
        if def.is_async {
            self.push("async ");
        }
        self.push("def ");
        self.push(&def.name);
        self.push("(");
        self.parameters(&def.params, true);
        self.push(")");
        if let Some(returns) = &def.returns {
            self.push(" -> ");
            self.expr(returns, Level::Test);
        }
        self.push(":");
        self.end_line();
        self.block(&def.body);
    }

    fn parameters(&mut self, params: &Parameters, annotated: bool) {
        let mut first = true;
        let mut sep = |u: &mut Self| {
            if !first {
                u.push(", ");
            }
            first = false;
        };

        for p in &params.posonly {
            sep(self);
            self.param(p, annotated);
        }
        if !params.posonly.is_empty() {
            sep(self);
            self.push("/");
        }
        for p in &params.args {
            sep(self);
            self.param(p, annotated);
        }
        if let Some(vararg) = &params.vararg {
            sep(self);
            self.push("*");
            self.param(vararg, annotated);
        } else if !params.kwonly.is_empty() {
            sep(self);
            self.push("*");
        }
        for p in &params.kwonly {
            sep(self);
            self.param(p, annotated);
        }
        if let Some(kwarg) = &params.kwarg {
            sep(self);
            self.push("**");
            self.param(kwarg, annotated);
        }
    }

    fn param(&mut self, param: &Param, annotated: bool) {
        self.push(&param.name);
        let annotation = param.annotation.as_ref().filter(|_| annotated);
        if let Some(annotation) = annotation {
            self.push(": ");
            self.expr(annotation, Level::Test);
        }
        if let Some(default) = &param.default {
            self.push(if annotation.is_some() { " = " } else { "=" });
            self.expr(default, Level::Test);
        }
    }

    // ---- expressions ----

    /// Assignment, `for`, `with` and `del` targets.
    fn target(&mut self, target: &Expr) {
        self.expr(target, Level::BitOr);
    }

    /// Write `e`, parenthesised when it binds more loosely than `min`.
    fn expr(&mut self, e: &Expr, min: Level) {
        if level_of(e) < min {
            self.push("(");
            self.expr_kind(e);
            self.push(")");
        } else {
            self.expr_kind(e);
        }
    }

    fn expr_kind(&mut self, e: &Expr) {
        match &e.kind {
            ExprKind::Literal(lit) => self.literal(lit),
            ExprKind::Name(name) => self.push(name),
            ExprKind::Tuple(items) => {
                self.push("(");
                self.comma_separated(items, |u, it| u.expr(it, Level::Test));
                if items.len() == 1 {
                    self.push(",");
                }
                self.push(")");
            }
            ExprKind::List(items) => {
                self.push("[");
                self.comma_separated(items, |u, it| u.expr(it, Level::Test));
                self.push("]");
            }
            ExprKind::Set(items) if items.is_empty() => self.push("set()"),
            ExprKind::Set(items) => {
                self.push("{");
                self.comma_separated(items, |u, it| u.expr(it, Level::Test));
                self.push("}");
            }
            ExprKind::Dict(items) => {
                self.push("{");
                self.comma_separated(items, |u, DictItem { key, value }| match key {
                    Some(key) => {
                        u.expr(key, Level::Test);
                        u.push(": ");
                        u.expr(value, Level::Test);
                    }
                    None => {
                        u.push("**");
                        u.expr(value, Level::BitOr);
                    }
                });
                self.push("}");
            }
            ExprKind::ListComp { elt, generators } => {
                self.push("[");
                self.expr(elt, Level::Test);
                self.generators(generators);
                self.push("]");
            }
            ExprKind::SetComp { elt, generators } => {
                self.push("{");
                self.expr(elt, Level::Test);
                self.generators(generators);
                self.push("}");
            }
            ExprKind::DictComp {
                key,
                value,
                generators,
            } => {
                self.push("{");
                self.expr(key, Level::Test);
                self.push(": ");
                self.expr(value, Level::Test);
                self.generators(generators);
                self.push("}");
            }
            ExprKind::GeneratorExp { elt, generators } => {
                self.push("(");
                self.expr(elt, Level::Test);
                self.generators(generators);
                self.push(")");
            }
            ExprKind::Attribute { value, attr } => {
                match &value.kind {
                    ExprKind::Literal(lit) if lit.is_plain_int() => {
                        self.push("(");
                        self.expr(value, Level::Atom);
                        self.push(")");
                    }
                    _ => self.expr(value, Level::Atom),
                }
                self.push(".");
                self.push(attr);
            }
            ExprKind::Subscript { value, index } => {
                self.expr(value, Level::Atom);
                self.push("[");
                match &index.kind {
                    ExprKind::Tuple(items) if !items.is_empty() => {
                        self.comma_separated(items, |u, it| u.subscript_item(it));
                        if items.len() == 1 {
                            self.push(",");
                        }
                    }
                    _ => self.subscript_item(index),
                }
                self.push("]");
            }
            ExprKind::Slice { .. } => self.subscript_item(e),
            ExprKind::Call {
                func,
                args,
                keywords,
            } => {
                self.expr(func, Level::Atom);
                self.push("(");
                self.call_arguments(args, keywords);
                self.push(")");
            }
            ExprKind::Starred(value) => {
                self.push("*");
                self.expr(value, Level::BitOr);
            }
            ExprKind::BinaryOp { op, left, right } => {
                let level = binop_level(*op);
                let (left_min, right_min) = if *op == BinOp::Pow {
                    (Level::Await, Level::Factor)
                } else {
                    (level, level.next())
                };
                self.expr(left, left_min);
                self.push(&format!(" {} ", op));
                self.expr(right, right_min);
            }
            ExprKind::UnaryOp { op, operand } => {
                self.push(&op.to_string());
                let min = if *op == UnaryOp::Not {
                    Level::Not
                } else {
                    Level::Factor
                };
                self.expr(operand, min);
            }
            ExprKind::BoolOp { op, values } => {
                let min = match op {
                    BoolOp::Or => Level::And,
                    BoolOp::And => Level::Not,
                };
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.push(&format!(" {} ", op));
                    }
                    self.expr(value, min);
                }
            }
            ExprKind::Compare { left, comparisons } => {
                self.expr(left, Level::BitOr);
                for (op, right) in comparisons {
                    self.push(&format!(" {} ", op));
                    self.expr(right, Level::BitOr);
                }
            }
            ExprKind::IfExp { test, body, orelse } => {
                self.expr(body, Level::Or);
                self.push(" if ");
                self.expr(test, Level::Or);
                self.push(" else ");
                self.expr(orelse, Level::Test);
            }
            ExprKind::Lambda { params, body } => {
                self.push("lambda");
                if !params.is_empty() {
                    self.push(" ");
                    self.parameters(params, false);
                }
                self.push(": ");
                self.expr(body, Level::Test);
            }
            ExprKind::NamedExpr { target, value } => {
                self.push("(");
                self.expr(target, Level::Atom);
                self.push(" := ");
                self.expr(value, Level::Test);
                self.push(")");
            }
            ExprKind::Await(value) => {
                self.push("await ");
                self.expr(value, Level::Atom);
            }
            ExprKind::Yield(value) => {
                self.push("yield");
                if let Some(value) = value {
                    self.push(" ");
                    self.expr(value, Level::Test);
                }
            }
            ExprKind::YieldFrom(value) => {
                self.push("yield from ");
                self.expr(value, Level::Test);
            }
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match lit {
            Literal::None => self.push("None"),
            Literal::Bool(true) => self.push("True"),
            Literal::Bool(false) => self.push("False"),
            Literal::Ellipsis => self.push("..."),
            Literal::Number(text) => self.push(text),
            Literal::String(parts) => self.push(&parts.join(" ")),
        }
    }

    fn subscript_item(&mut self, item: &Expr) {
        match &item.kind {
            ExprKind::Slice { lower, upper, step } => {
                if let Some(lower) = lower {
                    self.expr(lower, Level::Test);
                }
                self.push(":");
                if let Some(upper) = upper {
                    self.expr(upper, Level::Test);
                }
                if let Some(step) = step {
                    self.push(":");
                    self.expr(step, Level::Test);
                }
            }
            _ => self.expr(item, Level::Test),
        }
    }

    fn generators(&mut self, generators: &[Comprehension]) {
        for g in generators {
            self.push(if g.is_async { " async for " } else { " for " });
            self.target(&g.target);
            self.push(" in ");
            self.expr(&g.iter, Level::Or);
            for cond in &g.ifs {
                self.push(" if ");
                self.expr(cond, Level::Or);
            }
        }
    }

    fn call_arguments(&mut self, args: &[Expr], keywords: &[Keyword]) {
        self.comma_separated(args, |u, a| u.expr(a, Level::Test));
        if !args.is_empty() && !keywords.is_empty() {
            self.push(", ");
        }
        self.comma_separated(keywords, |u, k| match &k.arg {
            Some(name) => {
                u.push(name);
                u.push("=");
                u.expr(&k.value, Level::Test);
            }
            None => {
                u.push("**");
                u.expr(&k.value, Level::BitOr);
            }
        });
    }
}

/// Render a whole module.
pub fn unparse_module(module: &Module) -> String {
    let mut u = Unparser::default();
    for stmt in &module.stmts {
        u.stmt(stmt);
    }
    u.finish()
}

/// Render a function definition, decorators included.
pub fn unparse_function(def: &FunctionDef) -> String {
    let mut u = Unparser::default();
    u.function_def(def);
    u.finish()
}

pub fn unparse_expr(expr: &Expr) -> String {
    let mut u = Unparser::default();
    u.expr(expr, Level::Yield);
    u.finish()
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&unparse_expr(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::python::parser::parse_module;

    fn roundtrip(src: &str) -> String {
        let module = parse_module(src).expect("parse failed");
        unparse_module(&module)
    }

    #[test]
    fn normalises_layout() {
        let src = "def f( a,b = 1 ,*args,c,**kw ) :\n  x=a+b ; return  x\n";
        assert_eq!(
            roundtrip(src),
            "def f(a, b=1, *args, c, **kw):\n    x = a + b\n    return x"
        );
    }

    #[test]
    fn keeps_needed_parentheses_only() {
        let cases = [
            ("(a + b) * c\n", "(a + b) * c"),
            ("a + (b * c)\n", "a + b * c"),
            ("a - (b - c)\n", "a - (b - c)"),
            ("(a ** b) ** c\n", "(a ** b) ** c"),
            ("a ** (b ** c)\n", "a ** b ** c"),
            ("(-a) ** b\n", "(-a) ** b"),
            ("-(a ** b)\n", "-a ** b"),
            ("not (a and b)\n", "not (a and b)"),
            ("(a or b) and c\n", "(a or b) and c"),
            ("(lambda: x)()\n", "(lambda: x)()"),
            ("(a if b else c).d\n", "(a if b else c).d"),
            ("(1).real\n", "(1).real"),
            ("1.5.real\n", "1.5.real"),
            ("x = yield a, b\n", "x = yield (a, b)"),
            ("f((yield))\n", "f((yield))"),
            ("(await x) ** 2\n", "await x ** 2"),
        ];
        for (src, expected) in cases {
            assert_eq!(roundtrip(src), expected, "input: {src:?}");
        }
    }

    #[test]
    fn tuples_are_always_parenthesised() {
        assert_eq!(roundtrip("return 1, 2\n"), "return (1, 2)");
        assert_eq!(roundtrip("a, b = b, a\n"), "(a, b) = (b, a)");
        assert_eq!(roundtrip("x = 1,\n"), "x = (1,)");
        assert_eq!(roundtrip("x[1:2, ::3]\n"), "x[1:2, ::3]");
    }

    #[test]
    fn elif_chains_are_refolded() {
        let src = "if a:\n    pass\nelse:\n    if b:\n        pass\n    else:\n        x = 1\n";
        assert_eq!(
            roundtrip(src),
            "if a:\n    pass\nelif b:\n    pass\nelse:\n    x = 1"
        );
    }

    #[test]
    fn literals_are_kept_verbatim() {
        assert_eq!(
            roundtrip("x = 0x_FF + 1_000j\ny = rb'\\d' \"two\"\n"),
            "x = 0x_FF + 1_000j\ny = rb'\\d' \"two\""
        );
    }

    #[test]
    fn compound_statements() {
        let src = "\
@dec(1)
class C(B, metaclass=M):
    async def m(self, /, x: int = 0, *, y) -> None:
        async with a as (b, c), d:
            pass
        async for i in it:
            del i
        try:
            raise E from None
        except* (A, B) as e:
            pass
        finally:
            pass
";
        let expected = "\
@dec(1)
class C(B, metaclass=M):
    async def m(self, /, x: int = 0, *, y) -> None:
        async with a as (b, c), d:
            pass
        async for i in it:
            del i
        try:
            raise E from None
        except* (A, B) as e:
            pass
        finally:
            pass";
        assert_eq!(roundtrip(src), expected);
    }

    #[test]
    fn displays_and_comprehensions() {
        let src = "x = [{k: v for k, v in d.items() if v}, {*a, b}, {**m, 'k': 1}, (i async for i in g)]\n";
        assert_eq!(
            roundtrip(src),
            "x = [{k: v for (k, v) in d.items() if v}, {*a, b}, {**m, 'k': 1}, (i async for i in g)]"
        );
    }

    #[test]
    fn output_reparses_to_the_same_text() {
        let src = "\
def g(a, *, key=lambda x, y=2: x + y, **kw):
    global counter
    from ..pkg import (a as b, c)
    while (n := next(it)) is not None:
        assert n not in seen, 'dup'
        seen[n:] += [n ** -1]
    else:
        return -x if not y else ~z
";
        let once = roundtrip(src);
        let twice = roundtrip(&format!("{once}\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn match_statements() {
        let src = "\
match event:
    case Click(position=(x, y)) | Key(x, y=y) if x > 0:
        pass
    case {'type': 'move', **rest}:
        pass
    case first, *others:
        pass
    case ('a' | 'b') as letter:
        pass
    case -1 | Color.RED | None:
        pass
";
        let expected = "\
match event:
    case Click(position=[x, y]) | Key(x, y=y) if x > 0:
        pass
    case {'type': 'move', **rest}:
        pass
    case [first, *others]:
        pass
    case 'a' | 'b' as letter:
        pass
    case -1 | Color.RED | None:
        pass";
        assert_eq!(roundtrip(src), expected);
        assert_eq!(roundtrip(&format!("{expected}\n")), expected);
    }

    #[test]
    fn empty_block_gets_pass() {
        let mut module = parse_module("if x:\n    print(1)\n").unwrap();
        if let StmtKind::If { body, .. } = &mut module.stmts[0].kind {
            body.stmts.clear();
        }
        assert_eq!(unparse_module(&module), "if x:\n    pass");
    }

    #[test]
    fn expression_display() {
        let module = parse_module("f(a, *b, c=1, **d)\n").unwrap();
        let StmtKind::Expr(call) = &module.stmts[0].kind else {
            panic!("expected an expression statement");
        };
        assert_eq!(call.to_string(), "f(a, *b, c=1, **d)");
    }
}
