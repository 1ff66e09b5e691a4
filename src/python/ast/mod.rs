pub mod block;
pub mod expr;
pub mod literal;
pub mod node;
pub mod operator;
pub mod pattern;
pub mod position;
pub mod stmt;
pub mod visitor;
