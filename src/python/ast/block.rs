use crate::python::ast::{position::Position, stmt::Stmt};

/// An indented suite of statements, or the top level of a module.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub pos: Position, // position of the first statement of the suite
}

impl Block {
    #[inline]
    pub fn new(stmts: Vec<Stmt>, pos: Position) -> Self {
        Self { stmts, pos }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// A parsed source file.
pub type Module = Block;
