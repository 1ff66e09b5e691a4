use tracing::trace;

use crate::python::ast::{
    block::Block,
    expr::{Expr, ExprKind},
    literal::Literal,
    node::Located,
    position::Position,
    stmt::{FunctionDef, StmtKind},
    visitor::{walk_stmt_mut, VisitMut},
};

use super::AccumulatorMode;

const PRINT: &str = "print";

/// Removes `print(...)` statements from a function body and makes every
/// `return` also hand back the collected print arguments:
/// `return value` becomes `return (value, [args...])`.
///
/// Only statement-level calls to the bare name `print` match; `builtins.print(x)`,
/// aliases and prints used inside larger expressions are left alone. Keyword
/// arguments of a removed call are dropped. Nested `def` and `class` bodies are
/// not entered.
pub struct PrintExtractor {
    mode: AccumulatorMode,
    /// Arguments a `return` at the current point gets.
    pending: Vec<Expr>,
    /// Every argument removed, in source order.
    collected: Vec<Expr>,
    removed: usize,
    rewritten: usize,
}

impl PrintExtractor {
    pub fn new(mode: AccumulatorMode) -> Self {
        PrintExtractor {
            mode,
            pending: Vec::new(),
            collected: Vec::new(),
            removed: 0,
            rewritten: 0,
        }
    }

    /// Rewrite the body of `def` in place.
    pub fn rewrite(&mut self, def: &mut FunctionDef) {
        self.visit_block_mut(&mut def.body);
    }

    /// Every removed print argument, in source order.
    pub fn collected(&self) -> &[Expr] {
        &self.collected
    }

    pub fn removed_prints(&self) -> usize {
        self.removed
    }

    pub fn rewritten_returns(&self) -> usize {
        self.rewritten
    }

    /// `(value, [pending...])`, with `None` standing in for a bare `return`.
    fn bundle(&self, value: Option<Expr>, pos: Position) -> Expr {
        let value = value.unwrap_or_else(|| Expr::synthetic(ExprKind::Literal(Literal::None)));
        let diagnostics = Expr::synthetic(ExprKind::List(self.pending.clone()));
        Located::new(ExprKind::Tuple(vec![value, diagnostics]), pos)
    }

    /// Blocks of a compound statement in `Scoped` mode. Sibling branches
    /// (`if`/`elif`/`else`, `except` handlers with the `try` else, `case`
    /// clauses) each start from the prints that can run before them; what
    /// follows the statement sees the prints of every branch that can fall
    /// through.
    fn visit_branches(&mut self, kind: &mut StmtKind) {
        match kind {
            StmtKind::If { body, orelse, .. } => {
                self.alternatives(std::iter::once(body).chain(orelse.as_mut()));
            }
            StmtKind::Match { cases, .. } => {
                self.alternatives(cases.iter_mut().map(|case| &mut case.body));
            }
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
                ..
            } => {
                self.visit_block_mut(body);
                self.alternatives(
                    handlers
                        .iter_mut()
                        .map(|handler| &mut handler.body)
                        .chain(orelse.as_mut()),
                );
                if let Some(finalbody) = finalbody {
                    self.visit_block_mut(finalbody);
                }
            }
            // loop bodies, loop `else` and `with` run in sequence
            other => {
                for block in other.blocks_mut() {
                    self.visit_block_mut(block);
                }
            }
        }
    }

    fn alternatives<'b>(&mut self, branches: impl Iterator<Item = &'b mut Block>) {
        let entry = self.pending.len();
        let mut merged = Vec::new();
        for block in branches {
            self.visit_block_mut(block);
            let added = self.pending.drain(entry..);
            if !ends_in_exit(block) {
                merged.extend(added);
            }
        }
        self.pending.extend(merged);
    }
}

/// Whether control never leaves `block` through its end.
fn ends_in_exit(block: &Block) -> bool {
    matches!(
        block.stmts.last().map(|s| &s.kind),
        Some(StmtKind::Return(_) | StmtKind::Raise { .. })
    )
}

impl VisitMut for PrintExtractor {
    fn visit_block_mut(&mut self, b: &mut Block) {
        let was_empty = b.stmts.is_empty();
        let mut out = Vec::with_capacity(b.stmts.len());
        for mut s in std::mem::take(&mut b.stmts) {
            let pos = s.pos;
            let descend = match &mut s.kind {
                StmtKind::Expr(e) => {
                    if let Some(args) = e.as_call_to(PRINT) {
                        trace!(%pos, args = args.len(), "removing print");
                        self.pending.extend(args.iter().cloned());
                        self.collected.extend(args.iter().cloned());
                        self.removed += 1;
                        continue;
                    }
                    false
                }
                StmtKind::Return(value) => {
                    trace!(%pos, diagnostics = self.pending.len(), "rewriting return");
                    let bundled = self.bundle(value.take(), pos);
                    *value = Some(bundled);
                    self.rewritten += 1;
                    false
                }
                kind => !kind.opens_scope(),
            };
            if descend {
                match self.mode {
                    AccumulatorMode::Shared => walk_stmt_mut(self, &mut s),
                    AccumulatorMode::Scoped => self.visit_branches(&mut s.kind),
                }
            }
            out.push(s);
        }

        // a suite cannot be empty
        if out.is_empty() && !was_empty {
            out.push(Located::new(StmtKind::Pass, b.pos));
        }
        b.stmts = out;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::python::{
        ast::stmt::Stmt,
        parser::parse_module,
        unparse::{unparse_expr, unparse_function},
    };

    fn first_def(stmts: &mut [Stmt]) -> &mut FunctionDef {
        match &mut stmts[0].kind {
            StmtKind::FunctionDef(def) => def,
            other => panic!("expected a function, got {other:?}"),
        }
    }

    fn rewrite(src: &str, mode: AccumulatorMode) -> (String, PrintExtractor) {
        let mut module = parse_module(src).unwrap();
        let def = first_def(&mut module.stmts);
        let mut extractor = PrintExtractor::new(mode);
        extractor.rewrite(def);
        (unparse_function(def), extractor)
    }

    #[test]
    fn without_prints_only_returns_change() {
        let (out, extractor) = rewrite(
            "def f(x):\n    y = x * 2\n    if y:\n        return y\n    return\n",
            AccumulatorMode::Shared,
        );
        assert_eq!(
            out,
            "def f(x):\n    y = x * 2\n    if y:\n        return (y, [])\n    return (None, [])"
        );
        assert_eq!(extractor.removed_prints(), 0);
        assert_eq!(extractor.rewritten_returns(), 2);
    }

    #[test]
    fn print_arguments_move_into_the_return() {
        let (out, extractor) = rewrite(
            "def f(a, b):\n    print(a, b)\n    return a + b\n",
            AccumulatorMode::Shared,
        );
        assert_eq!(out, "def f(a, b):\n    return (a + b, [a, b])");
        let collected: Vec<String> = extractor.collected().iter().map(unparse_expr).collect();
        assert_eq!(collected, vec!["a", "b"]);
    }

    #[test]
    fn accumulator_is_shared_across_returns() {
        let (out, _) = rewrite(
            "def f():\n    print(m)\n    return 1\n    print(n)\n    return 2\n",
            AccumulatorMode::Shared,
        );
        assert_eq!(out, "def f():\n    return (1, [m])\n    return (2, [m, n])");
    }

    #[test]
    fn shared_mode_leaks_prints_between_branches() {
        let src = "\
def f(x):
    if x:
        print('yes')
        return 1
    else:
        print('no')
        return 0
";
        let (shared, _) = rewrite(src, AccumulatorMode::Shared);
        assert!(shared.contains("return (0, ['yes', 'no'])"), "{shared}");

        let (scoped, _) = rewrite(src, AccumulatorMode::Scoped);
        assert!(scoped.contains("return (1, ['yes'])"), "{scoped}");
        assert!(scoped.contains("return (0, ['no'])"), "{scoped}");
    }

    #[test]
    fn scoped_mode_carries_nested_prints_forward() {
        let src = "def f(x):\n    print('start')\n    for i in x:\n        print(i)\n    return x\n";
        let (out, extractor) = rewrite(src, AccumulatorMode::Scoped);
        assert_eq!(
            out,
            "def f(x):\n    for i in x:\n        pass\n    return (x, ['start', i])"
        );
        assert_eq!(extractor.removed_prints(), 2);

        let (out, _) = rewrite(
            "def f(x):\n    if x:\n        print(a)\n    return 1\n",
            AccumulatorMode::Scoped,
        );
        assert_eq!(out, "def f(x):\n    if x:\n        pass\n    return (1, [a])");
    }

    #[test]
    fn scoped_mode_drops_prints_of_branches_that_exit() {
        let src = "\
def f(x):
    if x:
        print('early')
        raise ValueError(x)
    elif x is None:
        print('none')
    else:
        print('other')
        return -1
    return 0
";
        let (out, extractor) = rewrite(src, AccumulatorMode::Scoped);
        assert!(out.contains("return (-1, ['other'])"), "{out}");
        assert!(out.ends_with("return (0, ['none'])"), "{out}");
        let collected: Vec<String> = extractor.collected().iter().map(unparse_expr).collect();
        assert_eq!(collected, vec!["'early'", "'none'", "'other'"]);
    }

    #[test]
    fn scoped_mode_try_handlers_follow_the_body() {
        let src = "\
def f():
    try:
        print(1)
        x = g()
    except A:
        print(2)
        return 2
    except B:
        return 3
    else:
        print(4)
    finally:
        print(5)
    return x
";
        let (out, _) = rewrite(src, AccumulatorMode::Scoped);
        let expected = "\
def f():
    try:
        x = g()
    except A:
        return (2, [1, 2])
    except B:
        return (3, [1])
    else:
        pass
    finally:
        pass
    return (x, [1, 4, 5])";
        assert_eq!(out, expected);
    }

    #[test]
    fn scoped_mode_isolates_match_cases() {
        let src = "\
def f(cmd):
    match cmd:
        case 'go':
            print('going')
        case _:
            print('unknown')
            return None
    return cmd
";
        let (shared, _) = rewrite(src, AccumulatorMode::Shared);
        assert!(shared.contains("return (None, ['going', 'unknown'])"), "{shared}");
        assert!(shared.ends_with("return (cmd, ['going', 'unknown'])"), "{shared}");

        let (scoped, _) = rewrite(src, AccumulatorMode::Scoped);
        assert!(scoped.contains("return (None, ['unknown'])"), "{scoped}");
        assert!(scoped.ends_with("return (cmd, ['going'])"), "{scoped}");
    }

    #[test]
    fn emptied_blocks_get_pass() {
        let (out, _) = rewrite(
            "def f():\n    print(1)\n",
            AccumulatorMode::Shared,
        );
        assert_eq!(out, "def f():\n    pass");
    }

    #[test]
    fn other_calls_and_nested_scopes_are_untouched() {
        let src = "\
def f(log):
    log.print(1)
    builtins.print(2)
    x = print(3)
    print
    def inner():
        print(4)
        return 5
    class C:
        print(6)
    return inner
";
        let (out, extractor) = rewrite(src, AccumulatorMode::Shared);
        let expected = "\
def f(log):
    log.print(1)
    builtins.print(2)
    x = print(3)
    print
    def inner():
        print(4)
        return 5
    class C:
        print(6)
    return (inner, [])";
        assert_eq!(out, expected);
        assert_eq!(extractor.removed_prints(), 0);
    }

    #[test]
    fn keyword_arguments_are_dropped_and_starred_kept() {
        let (out, _) = rewrite(
            "def f(xs):\n    print(*xs, sep=', ')\n    print()\n    return\n",
            AccumulatorMode::Shared,
        );
        assert_eq!(out, "def f(xs):\n    return (None, [*xs])");
    }

    #[test]
    fn rewritten_return_keeps_its_position() {
        let mut module = parse_module("def f():\n    print(1)\n    return 2\n").unwrap();
        let def = first_def(&mut module.stmts);
        PrintExtractor::new(AccumulatorMode::Shared).rewrite(def);
        assert_eq!(def.body.stmts[0].pos, Position::new(3, 5));
        let StmtKind::Return(Some(value)) = &def.body.stmts[0].kind else {
            panic!("expected a return");
        };
        assert_eq!(value.pos, Position::new(3, 5));
    }
}
