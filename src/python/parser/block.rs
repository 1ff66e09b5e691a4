use crate::python::{
    ast::{block::Block, stmt::Stmt},
    parser::{
        lexer::token::TokenKind,
        parser::Parser,
        stmt::{parse_simple_statements, parse_statement},
        ParseResult,
    },
};

/// Statements up to, but not including, `end` (DEDENT for a suite, EOF for a module).
pub fn parse_statements_until(parser: &mut Parser, end: &TokenKind) -> ParseResult<Vec<Stmt>> {
    let mut stmts = Vec::new();
    while !parser.at(end)? {
        stmts.extend(parse_statement(parser)?);
    }
    Ok(stmts)
}

/// The `: suite` that closes a compound statement header: either an indented
/// block or simple statements on the same line (`if x: return 1`).
pub fn parse_block(parser: &mut Parser) -> ParseResult<Block> {
    parser.expect_kind(TokenKind::Colon)?;
    if !parser.match_kind(TokenKind::Newline)? {
        let pos = parser.peek_pos()?;
        let stmts = parse_simple_statements(parser)?;
        return Ok(Block::new(stmts, pos));
    }

    let pos = parser.peek_pos()?;
    if !parser.match_kind(TokenKind::Indent)? {
        return Err(parser.unexpected("an indented block"));
    }
    let stmts = parse_statements_until(parser, &TokenKind::Dedent)?;
    parser.expect_kind(TokenKind::Dedent)?;
    Ok(Block::new(stmts, pos))
}

/// Optional `else: suite` of `if`/`for`/`while`/`try`.
pub fn parse_else_block(parser: &mut Parser) -> ParseResult<Option<Block>> {
    if parser.match_kind(TokenKind::Else)? {
        Ok(Some(parse_block(parser)?))
    } else {
        Ok(None)
    }
}
