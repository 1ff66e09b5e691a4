pub mod block;
pub mod errors;
pub mod expr;
pub mod lexer;
pub mod params;
pub mod parser;
pub mod pattern;
pub mod stmt;

pub type ParseResult<T> = std::result::Result<T, crate::python::parser::errors::ParseError>;

pub use parser::parse_module;
