use crate::python::{
    ast::{
        expr::{Expr, ExprKind},
        node::Located,
        pattern::{Pattern, PatternKind},
    },
    parser::{errors::ParseError, expr::parse_sum, lexer::token::TokenKind, parser::Parser, ParseResult},
};

/// The pattern after `case`. A top-level comma list is an open sequence: `case a, *rest:`.
pub fn parse_case_pattern(parser: &mut Parser) -> ParseResult<Pattern> {
    let pos = parser.peek_pos()?;
    let first = parse_maybe_star(parser)?;
    if !parser.at(&TokenKind::Comma)? {
        return Ok(first);
    }
    let mut items = vec![first];
    while parser.match_kind(TokenKind::Comma)? {
        if matches!(parser.peek_kind()?, TokenKind::Colon | TokenKind::If) {
            break;
        }
        items.push(parse_maybe_star(parser)?);
    }
    Ok(Located::new(PatternKind::Sequence(items), pos))
}

fn parse_maybe_star(parser: &mut Parser) -> ParseResult<Pattern> {
    let pos = parser.peek_pos()?;
    if parser.match_kind(TokenKind::Star)? {
        let name = parser.consume_ident()?;
        return Ok(Located::new(PatternKind::Star(name), pos));
    }
    parse_pattern(parser)
}

/// `or_pattern (as name)?`
fn parse_pattern(parser: &mut Parser) -> ParseResult<Pattern> {
    let pos = parser.peek_pos()?;
    let pattern = parse_or_pattern(parser)?;
    if !parser.match_kind(TokenKind::As)? {
        return Ok(pattern);
    }
    let name = parser.consume_ident()?;
    Ok(Located::new(
        PatternKind::As {
            pattern: Box::new(pattern),
            name,
        },
        pos,
    ))
}

fn parse_or_pattern(parser: &mut Parser) -> ParseResult<Pattern> {
    let pos = parser.peek_pos()?;
    let first = parse_closed_pattern(parser)?;
    if !parser.at(&TokenKind::Pipe)? {
        return Ok(first);
    }
    let mut alternatives = vec![first];
    while parser.match_kind(TokenKind::Pipe)? {
        alternatives.push(parse_closed_pattern(parser)?);
    }
    Ok(Located::new(PatternKind::Or(alternatives), pos))
}

fn parse_closed_pattern(parser: &mut Parser) -> ParseResult<Pattern> {
    let pos = parser.peek_pos()?;
    let kind = match parser.peek_kind()? {
        TokenKind::LParen => {
            parser.advance()?;
            if parser.match_kind(TokenKind::RParen)? {
                return Ok(Located::new(PatternKind::Sequence(Vec::new()), pos));
            }
            let first = parse_maybe_star(parser)?;
            if parser.match_kind(TokenKind::RParen)? {
                // `(p)` only groups
                if !matches!(first.kind, PatternKind::Star(_)) {
                    return Ok(first);
                }
                PatternKind::Sequence(vec![first])
            } else {
                PatternKind::Sequence(parse_pattern_items(parser, vec![first], &TokenKind::RParen)?)
            }
        }
        TokenKind::LBracket => {
            parser.advance()?;
            PatternKind::Sequence(parse_pattern_items(parser, Vec::new(), &TokenKind::RBracket)?)
        }
        TokenKind::LBrace => {
            parser.advance()?;
            parse_mapping_pattern(parser)?
        }
        TokenKind::Name(_) => {
            let value = parse_value(parser)?;
            if parser.match_kind(TokenKind::LParen)? {
                parse_class_pattern(parser, value)?
            } else {
                PatternKind::Value(value)
            }
        }
        _ => PatternKind::Value(parse_sum(parser)?),
    };
    Ok(Located::new(kind, pos))
}

/// Comma-separated patterns up to `close`, which is consumed. A trailing comma is allowed.
fn parse_pattern_items(
    parser: &mut Parser,
    mut items: Vec<Pattern>,
    close: &TokenKind,
) -> ParseResult<Vec<Pattern>> {
    loop {
        if parser.match_kind(close.clone())? {
            return Ok(items);
        }
        if !items.is_empty() {
            parser.expect_kind(TokenKind::Comma)?;
            if parser.match_kind(close.clone())? {
                return Ok(items);
            }
        }
        items.push(parse_maybe_star(parser)?);
    }
}

/// Capture, wildcard or dotted value (`x`, `_`, `Color.RED`), or a literal.
fn parse_value(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    if !matches!(parser.peek_kind()?, TokenKind::Name(_)) {
        return parse_sum(parser);
    }
    let mut value = Located::new(ExprKind::Name(parser.consume_ident()?), pos);
    while parser.match_kind(TokenKind::Dot)? {
        let attr = parser.consume_ident()?;
        value = Located::new(
            ExprKind::Attribute {
                value: Box::new(value),
                attr,
            },
            pos,
        );
    }
    Ok(value)
}

/// After `{`: `key: pattern` entries and an optional `**rest`.
fn parse_mapping_pattern(parser: &mut Parser) -> ParseResult<PatternKind> {
    let mut items = Vec::new();
    let mut rest = None;
    loop {
        if parser.match_kind(TokenKind::RBrace)? {
            break;
        }
        if parser.match_kind(TokenKind::DoubleStar)? {
            rest = Some(parser.consume_ident()?);
        } else {
            let key = parse_value(parser)?;
            parser.expect_kind(TokenKind::Colon)?;
            items.push((key, parse_pattern(parser)?));
        }
        if !parser.match_kind(TokenKind::Comma)? {
            parser.expect_kind(TokenKind::RBrace)?;
            break;
        }
    }
    Ok(PatternKind::Mapping { items, rest })
}

/// After `Cls(`: positional patterns, then `name=pattern` keywords.
fn parse_class_pattern(parser: &mut Parser, cls: Expr) -> ParseResult<PatternKind> {
    let mut patterns = Vec::new();
    let mut keywords = Vec::new();
    loop {
        if parser.match_kind(TokenKind::RParen)? {
            break;
        }
        let arg = parse_pattern(parser)?;
        let pos = arg.pos;
        if parser.match_kind(TokenKind::Eq)? {
            let PatternKind::Value(Located {
                kind: ExprKind::Name(name),
                ..
            }) = arg.kind
            else {
                return Err(ParseError::General(
                    "Expected a keyword name in class pattern".into(),
                    pos,
                ));
            };
            keywords.push((name, parse_pattern(parser)?));
        } else if !keywords.is_empty() {
            return Err(ParseError::General(
                "Positional pattern follows keyword pattern".into(),
                pos,
            ));
        } else {
            patterns.push(arg);
        }
        if !parser.match_kind(TokenKind::Comma)? {
            parser.expect_kind(TokenKind::RParen)?;
            break;
        }
    }
    Ok(PatternKind::Class {
        cls,
        patterns,
        keywords,
    })
}
