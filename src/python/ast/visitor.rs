use super::{
    block::Block,
    expr::{Comprehension, DictItem, Expr, ExprKind, Parameters},
    stmt::{Stmt, StmtKind},
};

/// In-place tree walker. Override a `visit_*` hook and call the matching
/// `walk_*` function from it to keep descending.
pub trait VisitMut {
    fn visit_block_mut(&mut self, b: &mut Block) {
        walk_block_mut(self, b)
    }
    fn visit_stmt_mut(&mut self, s: &mut Stmt) {
        walk_stmt_mut(self, s)
    }
    fn visit_expr_mut(&mut self, e: &mut Expr) {
        walk_expr_mut(self, e)
    }
}

pub fn walk_block_mut<V: VisitMut + ?Sized>(v: &mut V, b: &mut Block) {
    for s in &mut b.stmts {
        v.visit_stmt_mut(s);
    }
}

fn walk_opt_block_mut<V: VisitMut + ?Sized>(v: &mut V, b: &mut Option<Block>) {
    if let Some(b) = b {
        v.visit_block_mut(b);
    }
}

fn walk_opt_expr_mut<V: VisitMut + ?Sized>(v: &mut V, e: &mut Option<Expr>) {
    if let Some(e) = e {
        v.visit_expr_mut(e);
    }
}

fn walk_params_mut<V: VisitMut + ?Sized>(v: &mut V, p: &mut Parameters) {
    let Parameters {
        posonly,
        args,
        vararg,
        kwonly,
        kwarg,
    } = p;
    let all = posonly
        .iter_mut()
        .chain(args.iter_mut())
        .chain(vararg.iter_mut())
        .chain(kwonly.iter_mut())
        .chain(kwarg.iter_mut());
    for param in all {
        walk_opt_expr_mut(v, &mut param.annotation);
        walk_opt_expr_mut(v, &mut param.default);
    }
}

fn walk_generators_mut<V: VisitMut + ?Sized>(v: &mut V, generators: &mut [Comprehension]) {
    for g in generators {
        v.visit_expr_mut(&mut g.target);
        v.visit_expr_mut(&mut g.iter);
        for cond in &mut g.ifs {
            v.visit_expr_mut(cond);
        }
    }
}

pub fn walk_stmt_mut<V: VisitMut + ?Sized>(v: &mut V, s: &mut Stmt) {
    match &mut s.kind {
        StmtKind::Expr(e) => v.visit_expr_mut(e),
        StmtKind::Return(value) => walk_opt_expr_mut(v, value),
        StmtKind::Assign { targets, value } => {
            for t in targets {
                v.visit_expr_mut(t);
            }
            v.visit_expr_mut(value);
        }
        StmtKind::AugAssign { target, value, .. } => {
            v.visit_expr_mut(target);
            v.visit_expr_mut(value);
        }
        StmtKind::AnnAssign {
            target,
            annotation,
            value,
        } => {
            v.visit_expr_mut(target);
            v.visit_expr_mut(annotation);
            walk_opt_expr_mut(v, value);
        }
        StmtKind::Delete(targets) => {
            for t in targets {
                v.visit_expr_mut(t);
            }
        }
        StmtKind::Assert { test, msg } => {
            v.visit_expr_mut(test);
            walk_opt_expr_mut(v, msg);
        }
        StmtKind::Raise { exc, cause } => {
            walk_opt_expr_mut(v, exc);
            walk_opt_expr_mut(v, cause);
        }
        StmtKind::If { test, body, orelse } | StmtKind::While { test, body, orelse } => {
            v.visit_expr_mut(test);
            v.visit_block_mut(body);
            walk_opt_block_mut(v, orelse);
        }
        StmtKind::For {
            target,
            iter,
            body,
            orelse,
            ..
        } => {
            v.visit_expr_mut(target);
            v.visit_expr_mut(iter);
            v.visit_block_mut(body);
            walk_opt_block_mut(v, orelse);
        }
        StmtKind::With { items, body, .. } => {
            for item in items {
                v.visit_expr_mut(&mut item.context_expr);
                walk_opt_expr_mut(v, &mut item.optional_vars);
            }
            v.visit_block_mut(body);
        }
        StmtKind::Try {
            body,
            handlers,
            orelse,
            finalbody,
            ..
        } => {
            v.visit_block_mut(body);
            for h in handlers {
                walk_opt_expr_mut(v, &mut h.type_);
                v.visit_block_mut(&mut h.body);
            }
            walk_opt_block_mut(v, orelse);
            walk_opt_block_mut(v, finalbody);
        }
        StmtKind::Match { subject, cases } => {
            v.visit_expr_mut(subject);
            for case in cases {
                walk_opt_expr_mut(v, &mut case.guard);
                v.visit_block_mut(&mut case.body);
            }
        }
        StmtKind::FunctionDef(def) => {
            for d in &mut def.decorators {
                v.visit_expr_mut(d);
            }
            walk_params_mut(v, &mut def.params);
            walk_opt_expr_mut(v, &mut def.returns);
            v.visit_block_mut(&mut def.body);
        }
        StmtKind::ClassDef(class) => {
            for d in &mut class.decorators {
                v.visit_expr_mut(d);
            }
            for b in &mut class.bases {
                v.visit_expr_mut(b);
            }
            for k in &mut class.keywords {
                v.visit_expr_mut(&mut k.value);
            }
            v.visit_block_mut(&mut class.body);
        }
        StmtKind::Pass
        | StmtKind::Break
        | StmtKind::Continue
        | StmtKind::Global(_)
        | StmtKind::Nonlocal(_)
        | StmtKind::Import(_)
        | StmtKind::ImportFrom { .. } => {}
    }
}

pub fn walk_expr_mut<V: VisitMut + ?Sized>(v: &mut V, e: &mut Expr) {
    match &mut e.kind {
        ExprKind::Literal(_) | ExprKind::Name(_) => {}
        ExprKind::Tuple(items) | ExprKind::List(items) | ExprKind::Set(items) => {
            for it in items {
                v.visit_expr_mut(it);
            }
        }
        ExprKind::Dict(items) => {
            for DictItem { key, value } in items {
                walk_opt_expr_mut(v, key);
                v.visit_expr_mut(value);
            }
        }
        ExprKind::ListComp { elt, generators }
        | ExprKind::SetComp { elt, generators }
        | ExprKind::GeneratorExp { elt, generators } => {
            v.visit_expr_mut(elt);
            walk_generators_mut(v, generators);
        }
        ExprKind::DictComp {
            key,
            value,
            generators,
        } => {
            v.visit_expr_mut(key);
            v.visit_expr_mut(value);
            walk_generators_mut(v, generators);
        }
        ExprKind::Attribute { value, .. } => v.visit_expr_mut(value),
        ExprKind::Subscript { value, index } => {
            v.visit_expr_mut(value);
            v.visit_expr_mut(index);
        }
        ExprKind::Slice { lower, upper, step } => {
            for part in [lower, upper, step].into_iter().flatten() {
                v.visit_expr_mut(part);
            }
        }
        ExprKind::Call {
            func,
            args,
            keywords,
        } => {
            v.visit_expr_mut(func);
            for a in args {
                v.visit_expr_mut(a);
            }
            for k in keywords {
                v.visit_expr_mut(&mut k.value);
            }
        }
        ExprKind::Starred(inner) | ExprKind::Await(inner) | ExprKind::YieldFrom(inner) => {
            v.visit_expr_mut(inner)
        }
        ExprKind::Yield(value) => {
            if let Some(value) = value {
                v.visit_expr_mut(value);
            }
        }
        ExprKind::BinaryOp { left, right, .. } => {
            v.visit_expr_mut(left);
            v.visit_expr_mut(right);
        }
        ExprKind::UnaryOp { operand, .. } => v.visit_expr_mut(operand),
        ExprKind::BoolOp { values, .. } => {
            for it in values {
                v.visit_expr_mut(it);
            }
        }
        ExprKind::Compare { left, comparisons } => {
            v.visit_expr_mut(left);
            for (_, right) in comparisons {
                v.visit_expr_mut(right);
            }
        }
        ExprKind::IfExp { test, body, orelse } => {
            v.visit_expr_mut(test);
            v.visit_expr_mut(body);
            v.visit_expr_mut(orelse);
        }
        ExprKind::Lambda { params, body } => {
            walk_params_mut(v, params);
            v.visit_expr_mut(body);
        }
        ExprKind::NamedExpr { target, value } => {
            v.visit_expr_mut(target);
            v.visit_expr_mut(value);
        }
    }
}
