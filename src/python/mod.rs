//! Python front-end: tokens, syntax tree, parser and unparser.

pub mod ast;
pub mod parser;
pub mod unparse;
