use crate::python::ast::{
    block::Block,
    stmt::{FunctionDef, StmtKind},
};

/// One level of descent: the statement at `stmt` and its child block number `block`
/// (as ordered by [`StmtKind::blocks`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Step {
    stmt: usize,
    block: usize,
}

/// Structural address of a function definition inside a module.
///
/// Two lookups of the same name on the same tree produce equal paths, and a
/// path can be resolved again later, mutably or not, without searching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionPath {
    steps: Vec<Step>,
    index: usize,
}

impl FunctionPath {
    /// Find the first `def name` in depth-first pre-order, source order.
    ///
    /// Every block is searched, including class bodies and other function
    /// bodies, so methods and nested functions are eligible.
    pub fn locate(module: &Block, name: &str) -> Option<FunctionPath> {
        let mut trail = Vec::new();
        search(module, name, &mut trail)
    }

    /// Nesting depth of the definition; `0` is a top-level function.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    fn target_block<'a>(&self, module: &'a Block) -> Option<&'a Block> {
        let mut block = module;
        for step in &self.steps {
            block = block
                .stmts
                .get(step.stmt)?
                .kind
                .blocks()
                .into_iter()
                .nth(step.block)?;
        }
        Some(block)
    }

    pub fn resolve<'a>(&self, module: &'a Block) -> Option<&'a FunctionDef> {
        let block = self.target_block(module)?;
        match &block.stmts.get(self.index)?.kind {
            StmtKind::FunctionDef(def) => Some(def),
            _ => None,
        }
    }

    pub fn resolve_mut<'a>(&self, module: &'a mut Block) -> Option<&'a mut FunctionDef> {
        let mut block = module;
        for step in &self.steps {
            block = block
                .stmts
                .get_mut(step.stmt)?
                .kind
                .blocks_mut()
                .into_iter()
                .nth(step.block)?;
        }
        match &mut block.stmts.get_mut(self.index)?.kind {
            StmtKind::FunctionDef(def) => Some(def),
            _ => None,
        }
    }
}

fn search(block: &Block, name: &str, trail: &mut Vec<Step>) -> Option<FunctionPath> {
    for (i, stmt) in block.stmts.iter().enumerate() {
        if let StmtKind::FunctionDef(def) = &stmt.kind {
            if def.name == name {
                return Some(FunctionPath {
                    steps: trail.clone(),
                    index: i,
                });
            }
        }
        for (j, child) in stmt.kind.blocks().into_iter().enumerate() {
            trail.push(Step { stmt: i, block: j });
            if let Some(found) = search(child, name, trail) {
                return Some(found);
            }
            trail.pop();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::{ast::position::Position, parser::parse_module};

    const SOURCE: &str = "\
import os

def helper():
    def target():
        return 'nested'
    return target

class Service:
    if DEBUG:
        def target(self):
            return 'method'

def target():
    return 'top level'
";

    #[test]
    fn finds_the_first_match_in_preorder() {
        let module = parse_module(SOURCE).unwrap();
        let path = FunctionPath::locate(&module, "target").unwrap();
        assert_eq!(path.depth(), 1);
        let def = path.resolve(&module).unwrap();
        assert_eq!(def.body.pos, Position::new(5, 9));
    }

    #[test]
    fn searches_class_bodies_and_nested_blocks() {
        let module = parse_module("class A:\n    if x:\n        pass\n    else:\n        def m(self): pass\n").unwrap();
        let path = FunctionPath::locate(&module, "m").unwrap();
        assert_eq!(path.depth(), 2);
        assert_eq!(path.resolve(&module).unwrap().name, "m");
    }

    #[test]
    fn locating_twice_yields_the_same_path() {
        let module = parse_module(SOURCE).unwrap();
        let first = FunctionPath::locate(&module, "helper").unwrap();
        let second = FunctionPath::locate(&module, "helper").unwrap();
        assert_eq!(first, second);
        assert!(std::ptr::eq(
            first.resolve(&module).unwrap(),
            second.resolve(&module).unwrap()
        ));
    }

    #[test]
    fn missing_name() {
        let module = parse_module(SOURCE).unwrap();
        assert_eq!(FunctionPath::locate(&module, "absent"), None);
        assert_eq!(FunctionPath::locate(&module, "Service"), None);
    }

    #[test]
    fn resolve_mut_reaches_the_same_definition() {
        let mut module = parse_module(SOURCE).unwrap();
        let path = FunctionPath::locate(&module, "target").unwrap();
        path.resolve_mut(&mut module).unwrap().name = "renamed".into();
        assert!(FunctionPath::locate(&module, "renamed").is_some());
        assert_ne!(FunctionPath::locate(&module, "target"), Some(path));
    }
}
