use std::iter::Peekable;

use tracing::debug;

use crate::python::ast::block::Module;
use crate::python::ast::position::Position;
use crate::python::parser::block::parse_statements_until;
use crate::python::parser::errors::ParseError;
use crate::python::parser::lexer::lexer::Lexer;
use crate::python::parser::lexer::token::{Token, TokenKind};
use crate::python::parser::ParseResult;

#[derive(Clone)]
pub struct Parser<'a> {
    pub last_pos: Position,
    pub tokens: Peekable<Lexer<'a>>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a raw input string; tokens are produced lazily.
    pub fn new(input: &'a str) -> Self {
        Parser {
            last_pos: Position::new(1, 1),
            tokens: Lexer::new(input).peekable(),
        }
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&mut self) -> Result<&Token, ParseError> {
        match self.tokens.peek() {
            Some(Ok(tok)) => Ok(tok),
            Some(Err(err)) => Err(err.clone()),
            None => Err(ParseError::UnexpectedEOF(self.last_pos)),
        }
    }

    /// Peek at the current token kind without consuming it.
    pub fn peek_kind(&mut self) -> Result<&TokenKind, ParseError> {
        Ok(&self.peek()?.kind)
    }

    /// Position of the current token.
    pub fn peek_pos(&mut self) -> Result<Position, ParseError> {
        Ok(self.peek()?.pos)
    }

    /// Whether the current token is `kind`.
    pub fn at(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        Ok(self.peek_kind()? == kind)
    }

    /// Advance one token and return it.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        match self.tokens.next().transpose()? {
            Some(tok) => {
                self.last_pos = tok.pos;
                Ok(tok)
            }
            None => Err(ParseError::UnexpectedEOF(self.last_pos)),
        }
    }

    /// If the current token matches the given kind, advance and return true; otherwise return false.
    pub fn match_kind(&mut self, expected: TokenKind) -> Result<bool, ParseError> {
        if *self.peek_kind()? == expected {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Expect a specific kind, or error.
    pub fn expect_kind(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.match_kind(expected.clone())? {
            Ok(())
        } else {
            Err(self.unexpected(describe(&expected)))
        }
    }

    /// Build an "expected X, found <current token>" error at the current token.
    pub fn unexpected(&mut self, expected: impl Into<String>) -> ParseError {
        match self.peek() {
            Ok(tok) => {
                let pos = tok.pos;
                match tok.kind {
                    TokenKind::EOF => ParseError::UnexpectedEOF(pos),
                    TokenKind::Indent => ParseError::UnexpectedIndent(pos),
                    ref kind => ParseError::UnexpectedToken {
                        expected: expected.into(),
                        found: describe(kind),
                        pos,
                    },
                }
            }
            Err(err) => err,
        }
    }

    /// Run `f` on a copy of the parser. On success the copy replaces `self`;
    /// on failure `self` is left where it was.
    pub fn speculate<T>(&mut self, f: impl FnOnce(&mut Parser<'a>) -> ParseResult<T>) -> Option<T> {
        let mut fork = self.clone();
        let value = f(&mut fork).ok()?;
        *self = fork;
        Some(value)
    }

    /// Whether the current token is the soft keyword `word` (`match`, `case`).
    pub fn at_soft_keyword(&mut self, word: &str) -> Result<bool, ParseError> {
        Ok(matches!(self.peek_kind()?, TokenKind::Name(name) if name == word))
    }

    /// Utility: if the current token is an identifier, return its String (and consume it); otherwise Err.
    pub fn consume_ident(&mut self) -> Result<String, ParseError> {
        match self.peek_kind()? {
            TokenKind::Name(name) => {
                let s = name.clone();
                self.advance()?;
                Ok(s)
            }
            TokenKind::EOF => Err(ParseError::UnexpectedEOF(self.last_pos)),
            other => {
                let found = describe(other);
                let pos = self.peek_pos()?;
                Err(ParseError::ExpectedIdentifier(found, pos))
            }
        }
    }

    /// `a.b.c` as used by imports.
    pub fn consume_dotted_name(&mut self) -> Result<String, ParseError> {
        let mut name = self.consume_ident()?;
        while self.match_kind(TokenKind::Dot)? {
            name.push('.');
            name.push_str(&self.consume_ident()?);
        }
        Ok(name)
    }

    fn parse_module(&mut self) -> ParseResult<Module> {
        let pos = self.peek_pos()?;
        let stmts = parse_statements_until(self, &TokenKind::EOF)?;
        Ok(Module::new(stmts, pos))
    }
}

/// Human-readable token name for error messages.
pub fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Name(name) => format!("identifier '{}'", name),
        TokenKind::Number(text) => format!("number {}", text),
        TokenKind::String(text) => format!("string {}", text),
        TokenKind::Newline => "end of line".into(),
        TokenKind::Indent => "indent".into(),
        TokenKind::Dedent => "dedent".into(),
        TokenKind::EOF => "end of input".into(),
        other => format!("{:?}", other),
    }
}

/// Parse a whole source file into its top-level statement block.
pub fn parse_module(input: &str) -> ParseResult<Module> {
    let mut parser = Parser::new(input);
    let module = parser.parse_module()?;
    debug!(statements = module.stmts.len(), "parsed module");
    Ok(module)
}
