use crate::python::ast::expr::{Comprehension, DictItem, Expr, ExprKind, Keyword};
use crate::python::ast::literal::Literal;
use crate::python::ast::node::Located;
use crate::python::ast::operator::{BinOp, BoolOp, CmpOp, UnaryOp};
use crate::python::parser::errors::ParseError;
use crate::python::parser::lexer::token::TokenKind;
use crate::python::parser::params::parse_parameters;
use crate::python::parser::parser::Parser;
use crate::python::parser::ParseResult;

/// Binary operator precedences, from lowest to highest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    BitOr = 1,
    BitXor,
    BitAnd,
    Shift,
    Arith,
    Term,
    Factor, // unary operators
    Power,
}

impl Precedence {
    fn next(self) -> Precedence {
        use Precedence::*;
        match self {
            BitOr => BitXor,
            BitXor => BitAnd,
            BitAnd => Shift,
            Shift => Arith,
            Arith => Term,
            Term => Factor,
            Factor => Power,
            Power => Power,
        }
    }
}

/// Map an operator token (also the payload of an augmented assignment) to its `BinOp`.
pub fn binary_operator(tok: &TokenKind) -> Option<BinOp> {
    let op = match tok {
        TokenKind::Pipe => BinOp::BitOr,
        TokenKind::Caret => BinOp::BitXor,
        TokenKind::Amp => BinOp::BitAnd,
        TokenKind::LShift => BinOp::LShift,
        TokenKind::RShift => BinOp::RShift,
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Sub,
        TokenKind::Star => BinOp::Mul,
        TokenKind::At => BinOp::MatMul,
        TokenKind::Slash => BinOp::Div,
        TokenKind::DoubleSlash => BinOp::FloorDiv,
        TokenKind::Percent => BinOp::Mod,
        TokenKind::DoubleStar => BinOp::Pow,
        _ => return None,
    };
    Some(op)
}

fn infix_precedence(op: BinOp) -> Precedence {
    match op {
        BinOp::BitOr => Precedence::BitOr,
        BinOp::BitXor => Precedence::BitXor,
        BinOp::BitAnd => Precedence::BitAnd,
        BinOp::LShift | BinOp::RShift => Precedence::Shift,
        BinOp::Add | BinOp::Sub => Precedence::Arith,
        BinOp::Mul | BinOp::MatMul | BinOp::Div | BinOp::FloorDiv | BinOp::Mod => {
            Precedence::Term
        }
        BinOp::Pow => Precedence::Power,
    }
}

/// Only `**` is right-associative.
fn is_right_associative(op: BinOp) -> bool {
    op == BinOp::Pow
}

fn expected_expression(parser: &mut Parser) -> ParseError {
    match parser.unexpected("expression") {
        ParseError::UnexpectedToken { found, pos, .. } => ParseError::ExpectedExpression(found, pos),
        other => other,
    }
}

/// Parse an atom: names, literals, and parenthesised / bracketed displays.
fn parse_atom(parser: &mut Parser) -> ParseResult<Expr> {
    use TokenKind::*;
    let pos = parser.peek_pos()?;
    let kind = match parser.peek_kind()?.clone() {
        Name(name) => {
            parser.advance()?;
            ExprKind::Name(name)
        }
        Number(text) => {
            parser.advance()?;
            ExprKind::Literal(Literal::Number(text))
        }
        // Adjacent string tokens concatenate.
        String(_) => {
            let mut parts = Vec::new();
            while let String(text) = parser.peek_kind()? {
                parts.push(text.clone());
                parser.advance()?;
            }
            ExprKind::Literal(Literal::String(parts))
        }
        None => {
            parser.advance()?;
            ExprKind::Literal(Literal::None)
        }
        True | False => {
            let value = parser.advance()?.kind == True;
            ExprKind::Literal(Literal::Bool(value))
        }
        Ellipsis => {
            parser.advance()?;
            ExprKind::Literal(Literal::Ellipsis)
        }
        LParen => return parse_parenthesized(parser),
        LBracket => return parse_list_display(parser),
        LBrace => return parse_brace_display(parser),
        _ => return Err(expected_expression(parser)),
    };
    Ok(Located::new(kind, pos))
}

/// `( )`, `(expr)`, `(a, b)`, `(yield x)` or `(x for x in y)`.
fn parse_parenthesized(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    parser.expect_kind(TokenKind::LParen)?;
    if parser.match_kind(TokenKind::RParen)? {
        return Ok(Located::new(ExprKind::Tuple(Vec::new()), pos));
    }
    if parser.at(&TokenKind::Yield)? {
        let expr = parse_yield(parser)?;
        parser.expect_kind(TokenKind::RParen)?;
        return Ok(expr);
    }

    let first = parse_star_named_expr(parser)?;
    if starts_comprehension(parser)? {
        let generators = parse_comprehension_clauses(parser)?;
        parser.expect_kind(TokenKind::RParen)?;
        return Ok(Located::new(
            ExprKind::GeneratorExp {
                elt: Box::new(first),
                generators,
            },
            pos,
        ));
    }
    if parser.match_kind(TokenKind::RParen)? {
        return Ok(first);
    }

    let items = parse_remaining_items(parser, first, &TokenKind::RParen)?;
    parser.expect_kind(TokenKind::RParen)?;
    Ok(Located::new(ExprKind::Tuple(items), pos))
}

/// After the first element of a display: `(, item)* ,?` up to `close`.
fn parse_remaining_items(
    parser: &mut Parser,
    first: Expr,
    close: &TokenKind,
) -> ParseResult<Vec<Expr>> {
    let mut items = vec![first];
    while parser.match_kind(TokenKind::Comma)? {
        if parser.at(close)? {
            break;
        }
        items.push(parse_star_named_expr(parser)?);
    }
    Ok(items)
}

/// `[a, b]` or `[x for x in y]`.
fn parse_list_display(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    parser.expect_kind(TokenKind::LBracket)?;
    if parser.match_kind(TokenKind::RBracket)? {
        return Ok(Located::new(ExprKind::List(Vec::new()), pos));
    }

    let first = parse_star_named_expr(parser)?;
    let kind = if starts_comprehension(parser)? {
        ExprKind::ListComp {
            elt: Box::new(first),
            generators: parse_comprehension_clauses(parser)?,
        }
    } else {
        ExprKind::List(parse_remaining_items(parser, first, &TokenKind::RBracket)?)
    };
    parser.expect_kind(TokenKind::RBracket)?;
    Ok(Located::new(kind, pos))
}

/// Dict, set, and their comprehensions.
fn parse_brace_display(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    parser.expect_kind(TokenKind::LBrace)?;
    if parser.match_kind(TokenKind::RBrace)? {
        return Ok(Located::new(ExprKind::Dict(Vec::new()), pos));
    }

    let kind = if parser.at(&TokenKind::DoubleStar)? {
        ExprKind::Dict(parse_dict_items(parser, None)?)
    } else {
        let first = parse_star_named_expr(parser)?;
        if parser.match_kind(TokenKind::Colon)? {
            let value = parse_test(parser)?;
            if starts_comprehension(parser)? {
                ExprKind::DictComp {
                    key: Box::new(first),
                    value: Box::new(value),
                    generators: parse_comprehension_clauses(parser)?,
                }
            } else {
                let head = DictItem {
                    key: Some(first),
                    value,
                };
                ExprKind::Dict(parse_dict_items(parser, Some(head))?)
            }
        } else if starts_comprehension(parser)? {
            ExprKind::SetComp {
                elt: Box::new(first),
                generators: parse_comprehension_clauses(parser)?,
            }
        } else {
            ExprKind::Set(parse_remaining_items(parser, first, &TokenKind::RBrace)?)
        }
    };
    parser.expect_kind(TokenKind::RBrace)?;
    Ok(Located::new(kind, pos))
}

/// Dict entries up to the closing brace; `head` is an already-parsed first entry.
fn parse_dict_items(parser: &mut Parser, head: Option<DictItem>) -> ParseResult<Vec<DictItem>> {
    let mut items = Vec::new();
    if let Some(head) = head {
        items.push(head);
        if !parser.match_kind(TokenKind::Comma)? {
            return Ok(items);
        }
    }
    while !parser.at(&TokenKind::RBrace)? {
        if parser.match_kind(TokenKind::DoubleStar)? {
            let value = parse_bitwise_or(parser)?;
            items.push(DictItem { key: None, value });
        } else {
            let key = parse_test(parser)?;
            parser.expect_kind(TokenKind::Colon)?;
            let value = parse_test(parser)?;
            items.push(DictItem {
                key: Some(key),
                value,
            });
        }
        if !parser.match_kind(TokenKind::Comma)? {
            break;
        }
    }
    Ok(items)
}

fn starts_comprehension(parser: &mut Parser) -> ParseResult<bool> {
    Ok(matches!(parser.peek_kind()?, TokenKind::For | TokenKind::Async))
}

/// One or more `[async] for target in iter (if cond)*` clauses.
fn parse_comprehension_clauses(parser: &mut Parser) -> ParseResult<Vec<Comprehension>> {
    let mut generators = Vec::new();
    while starts_comprehension(parser)? {
        let is_async = parser.match_kind(TokenKind::Async)?;
        parser.expect_kind(TokenKind::For)?;
        let target = parse_target_list(parser)?;
        parser.expect_kind(TokenKind::In)?;
        let iter = parse_or_test(parser)?;
        let mut ifs = Vec::new();
        while parser.match_kind(TokenKind::If)? {
            ifs.push(parse_or_test(parser)?);
        }
        generators.push(Comprehension {
            target,
            iter,
            ifs,
            is_async,
        });
    }
    Ok(generators)
}

/// Call arguments after the opening paren, through the closing one.
pub fn parse_call_arguments(parser: &mut Parser) -> ParseResult<(Vec<Expr>, Vec<Keyword>)> {
    let mut args = Vec::new();
    let mut keywords = Vec::new();
    while !parser.at(&TokenKind::RParen)? {
        let pos = parser.peek_pos()?;
        if parser.match_kind(TokenKind::Star)? {
            let value = parse_test(parser)?;
            args.push(Located::new(ExprKind::Starred(Box::new(value)), pos));
        } else if parser.match_kind(TokenKind::DoubleStar)? {
            let value = parse_test(parser)?;
            keywords.push(Keyword { arg: None, value });
        } else {
            let expr = parse_named_expr(parser)?;
            if parser.at(&TokenKind::Eq)? {
                let name = match expr.kind {
                    ExprKind::Name(name) => name,
                    _ => {
                        return Err(ParseError::General(
                            "Keyword argument must be an identifier".into(),
                            expr.pos,
                        ))
                    }
                };
                parser.advance()?;
                let value = parse_test(parser)?;
                keywords.push(Keyword {
                    arg: Some(name),
                    value,
                });
            } else if starts_comprehension(parser)? {
                let generators = parse_comprehension_clauses(parser)?;
                args.push(Located::new(
                    ExprKind::GeneratorExp {
                        elt: Box::new(expr),
                        generators,
                    },
                    pos,
                ));
            } else {
                args.push(expr);
            }
        }
        if !parser.match_kind(TokenKind::Comma)? {
            break;
        }
    }
    parser.expect_kind(TokenKind::RParen)?;
    Ok((args, keywords))
}

/// One subscript entry: an expression or a `lower:upper:step` slice.
fn parse_slice_item(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    let lower = if parser.at(&TokenKind::Colon)? {
        None
    } else {
        let expr = parse_star_named_expr(parser)?;
        if !parser.at(&TokenKind::Colon)? {
            return Ok(expr);
        }
        Some(Box::new(expr))
    };
    parser.expect_kind(TokenKind::Colon)?;

    let bound_ends = |kind: &TokenKind| {
        matches!(
            kind,
            TokenKind::Colon | TokenKind::Comma | TokenKind::RBracket
        )
    };
    let upper = if bound_ends(parser.peek_kind()?) {
        None
    } else {
        Some(Box::new(parse_test(parser)?))
    };
    let step = if parser.match_kind(TokenKind::Colon)? && !bound_ends(parser.peek_kind()?) {
        Some(Box::new(parse_test(parser)?))
    } else {
        None
    };
    Ok(Located::new(ExprKind::Slice { lower, upper, step }, pos))
}

fn parse_subscript(parser: &mut Parser) -> ParseResult<Expr> {
    let first = parse_slice_item(parser)?;
    if !parser.at(&TokenKind::Comma)? {
        return Ok(first);
    }
    let pos = first.pos;
    let mut items = vec![first];
    while parser.match_kind(TokenKind::Comma)? {
        if parser.at(&TokenKind::RBracket)? {
            break;
        }
        items.push(parse_slice_item(parser)?);
    }
    Ok(Located::new(ExprKind::Tuple(items), pos))
}

/// An atom followed by any number of `.attr`, `[index]` and `(args)` trailers.
fn parse_primary(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_atom(parser)?;
    loop {
        let pos = expr.pos;
        if parser.match_kind(TokenKind::Dot)? {
            let attr = parser.consume_ident()?;
            expr = Located::new(
                ExprKind::Attribute {
                    value: Box::new(expr),
                    attr,
                },
                pos,
            );
        } else if parser.match_kind(TokenKind::LParen)? {
            let (args, keywords) = parse_call_arguments(parser)?;
            expr = Located::new(
                ExprKind::Call {
                    func: Box::new(expr),
                    args,
                    keywords,
                },
                pos,
            );
        } else if parser.match_kind(TokenKind::LBracket)? {
            let index = parse_subscript(parser)?;
            parser.expect_kind(TokenKind::RBracket)?;
            expr = Located::new(
                ExprKind::Subscript {
                    value: Box::new(expr),
                    index: Box::new(index),
                },
                pos,
            );
        } else {
            return Ok(expr);
        }
    }
}

/// Prefix operators `-x`, `+x`, `~x` and `await x`.
fn parse_unary(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    let op = match parser.peek_kind()? {
        TokenKind::Minus => UnaryOp::Neg,
        TokenKind::Plus => UnaryOp::Pos,
        TokenKind::Tilde => UnaryOp::Invert,
        TokenKind::Await => {
            parser.advance()?;
            let value = parse_primary(parser)?;
            return Ok(Located::new(ExprKind::Await(Box::new(value)), pos));
        }
        _ => return parse_primary(parser),
    };
    parser.advance()?;
    let operand = parse_precedence(parser, Precedence::Factor)?;
    Ok(Located::new(
        ExprKind::UnaryOp {
            op,
            operand: Box::new(operand),
        },
        pos,
    ))
}

fn parse_precedence(parser: &mut Parser, min_prec: Precedence) -> ParseResult<Expr> {
    let mut left = parse_unary(parser)?;

    loop {
        let op = match binary_operator(parser.peek_kind()?) {
            Some(op) if infix_precedence(op) >= min_prec => op,
            _ => break,
        };
        parser.advance()?;

        let prec = infix_precedence(op);
        let rhs_min = if is_right_associative(op) {
            prec
        } else {
            prec.next()
        };
        let right = parse_precedence(parser, rhs_min)?;

        let pos = left.pos;
        left = Located::new(
            ExprKind::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            pos,
        );
    }

    Ok(left)
}

/// Everything from `|` upward; the operand level of comparisons and targets.
fn parse_bitwise_or(parser: &mut Parser) -> ParseResult<Expr> {
    parse_precedence(parser, Precedence::BitOr)
}

/// `+`/`-` level and upward; literal operands of a `case` pattern such as `-1` or `1 + 2j`.
pub fn parse_sum(parser: &mut Parser) -> ParseResult<Expr> {
    parse_precedence(parser, Precedence::Arith)
}

fn comparison_operator(parser: &mut Parser) -> ParseResult<Option<CmpOp>> {
    let op = match parser.peek_kind()? {
        TokenKind::EqEq => CmpOp::Eq,
        TokenKind::NotEq => CmpOp::NotEq,
        TokenKind::Lt => CmpOp::Lt,
        TokenKind::LtEq => CmpOp::LtE,
        TokenKind::Gt => CmpOp::Gt,
        TokenKind::GtEq => CmpOp::GtE,
        TokenKind::In => CmpOp::In,
        TokenKind::Not => {
            parser.advance()?;
            parser.expect_kind(TokenKind::In)?;
            return Ok(Some(CmpOp::NotIn));
        }
        TokenKind::Is => {
            parser.advance()?;
            let op = if parser.match_kind(TokenKind::Not)? {
                CmpOp::IsNot
            } else {
                CmpOp::Is
            };
            return Ok(Some(op));
        }
        _ => return Ok(None),
    };
    parser.advance()?;
    Ok(Some(op))
}

fn parse_comparison(parser: &mut Parser) -> ParseResult<Expr> {
    let left = parse_bitwise_or(parser)?;
    let mut comparisons = Vec::new();
    while let Some(op) = comparison_operator(parser)? {
        comparisons.push((op, parse_bitwise_or(parser)?));
    }
    if comparisons.is_empty() {
        return Ok(left);
    }
    let pos = left.pos;
    Ok(Located::new(
        ExprKind::Compare {
            left: Box::new(left),
            comparisons,
        },
        pos,
    ))
}

fn parse_not_test(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    if parser.match_kind(TokenKind::Not)? {
        let operand = parse_not_test(parser)?;
        return Ok(Located::new(
            ExprKind::UnaryOp {
                op: UnaryOp::Not,
                operand: Box::new(operand),
            },
            pos,
        ));
    }
    parse_comparison(parser)
}

fn parse_bool_op(
    parser: &mut Parser,
    keyword: TokenKind,
    op: BoolOp,
    operand: fn(&mut Parser) -> ParseResult<Expr>,
) -> ParseResult<Expr> {
    let first = operand(parser)?;
    if !parser.at(&keyword)? {
        return Ok(first);
    }
    let pos = first.pos;
    let mut values = vec![first];
    while parser.match_kind(keyword.clone())? {
        values.push(operand(parser)?);
    }
    Ok(Located::new(ExprKind::BoolOp { op, values }, pos))
}

fn parse_and_test(parser: &mut Parser) -> ParseResult<Expr> {
    parse_bool_op(parser, TokenKind::And, BoolOp::And, parse_not_test)
}

/// `a or b`; also the level of comprehension iterables and conditions.
pub fn parse_or_test(parser: &mut Parser) -> ParseResult<Expr> {
    parse_bool_op(parser, TokenKind::Or, BoolOp::Or, parse_and_test)
}

fn parse_lambda(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    parser.expect_kind(TokenKind::Lambda)?;
    let params = parse_parameters(parser, &TokenKind::Colon, false)?;
    parser.expect_kind(TokenKind::Colon)?;
    let body = parse_test(parser)?;
    Ok(Located::new(
        ExprKind::Lambda {
            params: Box::new(params),
            body: Box::new(body),
        },
        pos,
    ))
}

/// A single expression: lambda, conditional expression, or anything below.
pub fn parse_test(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.at(&TokenKind::Lambda)? {
        return parse_lambda(parser);
    }
    let body = parse_or_test(parser)?;
    if !parser.match_kind(TokenKind::If)? {
        return Ok(body);
    }
    let test = parse_or_test(parser)?;
    parser.expect_kind(TokenKind::Else)?;
    let orelse = parse_test(parser)?;
    let pos = body.pos;
    Ok(Located::new(
        ExprKind::IfExp {
            test: Box::new(test),
            body: Box::new(body),
            orelse: Box::new(orelse),
        },
        pos,
    ))
}

/// `name := value`, or a plain expression.
pub fn parse_named_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let expr = parse_test(parser)?;
    if !parser.at(&TokenKind::Walrus)? {
        return Ok(expr);
    }
    if !matches!(expr.kind, ExprKind::Name(_)) {
        return Err(ParseError::InvalidAssignmentTarget(expr.pos));
    }
    parser.advance()?;
    let value = parse_test(parser)?;
    let pos = expr.pos;
    Ok(Located::new(
        ExprKind::NamedExpr {
            target: Box::new(expr),
            value: Box::new(value),
        },
        pos,
    ))
}

/// `*x` where unpacking is allowed, otherwise a named expression.
fn parse_star_named_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    if parser.match_kind(TokenKind::Star)? {
        let value = parse_bitwise_or(parser)?;
        return Ok(Located::new(ExprKind::Starred(Box::new(value)), pos));
    }
    parse_named_expr(parser)
}

/// Comma-separated expressions; more than one (or a trailing comma) makes an unparenthesised tuple.
pub fn parse_star_expressions(parser: &mut Parser) -> ParseResult<Expr> {
    let first = parse_star_named_expr(parser)?;
    if !parser.at(&TokenKind::Comma)? {
        return Ok(first);
    }
    let pos = first.pos;
    let mut items = vec![first];
    while parser.match_kind(TokenKind::Comma)? {
        if parser.peek_kind()?.ends_expression_list() {
            break;
        }
        items.push(parse_star_named_expr(parser)?);
    }
    Ok(Located::new(ExprKind::Tuple(items), pos))
}

/// `yield`, `yield x, y` or `yield from x`.
pub fn parse_yield(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    parser.expect_kind(TokenKind::Yield)?;
    if parser.match_kind(TokenKind::From)? {
        let value = parse_test(parser)?;
        return Ok(Located::new(ExprKind::YieldFrom(Box::new(value)), pos));
    }
    let value = if parser.peek_kind()?.ends_expression_list() {
        None
    } else {
        Some(Box::new(parse_star_expressions(parser)?))
    };
    Ok(Located::new(ExprKind::Yield(value), pos))
}

/// Right-hand side of an assignment: a yield expression or an expression list.
pub fn parse_assigned_value(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.at(&TokenKind::Yield)? {
        parse_yield(parser)
    } else {
        parse_star_expressions(parser)
    }
}

/// A single assignment target, possibly starred.
pub fn parse_star_target(parser: &mut Parser) -> ParseResult<Expr> {
    let pos = parser.peek_pos()?;
    if parser.match_kind(TokenKind::Star)? {
        let value = parse_bitwise_or(parser)?;
        return Ok(Located::new(ExprKind::Starred(Box::new(value)), pos));
    }
    parse_bitwise_or(parser)
}

/// Targets of `for`, `del` and comprehensions: `a`, `a, b`, `(a, *b)`, `x[i].y`.
pub fn parse_target_list(parser: &mut Parser) -> ParseResult<Expr> {
    let first = parse_star_target(parser)?;
    let target = if parser.at(&TokenKind::Comma)? {
        let pos = first.pos;
        let mut items = vec![first];
        while parser.match_kind(TokenKind::Comma)? {
            if parser.peek_kind()?.ends_expression_list() {
                break;
            }
            items.push(parse_star_target(parser)?);
        }
        Located::new(ExprKind::Tuple(items), pos)
    } else {
        first
    };
    if !target.is_assignable() {
        return Err(ParseError::InvalidAssignmentTarget(target.pos));
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::ast::position::Position;

    fn parse(input: &str) -> Expr {
        let mut parser = Parser::new(input);
        let expr = parse_star_expressions(&mut parser).expect("parse failed");
        assert!(
            matches!(parser.peek_kind(), Ok(TokenKind::Newline)),
            "trailing input after expression"
        );
        expr
    }

    fn name(expr: &Expr) -> &str {
        match &expr.kind {
            ExprKind::Name(name) => name,
            other => panic!("expected a name, got {other:?}"),
        }
    }

    #[test]
    fn operator_tokens_map_to_binary_operators() {
        assert_eq!(binary_operator(&TokenKind::DoubleSlash), Some(BinOp::FloorDiv));
        assert_eq!(binary_operator(&TokenKind::At), Some(BinOp::MatMul));
        assert_eq!(binary_operator(&TokenKind::None), None);
        assert_eq!(binary_operator(&TokenKind::Comma), None);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse("a + b * c");
        let ExprKind::BinaryOp { op, left, right } = &expr.kind else {
            panic!("expected a binary op");
        };
        assert_eq!(*op, BinOp::Add);
        assert_eq!(name(left), "a");
        assert!(matches!(right.kind, ExprKind::BinaryOp { op: BinOp::Mul, .. }));
    }

    #[test]
    fn power_is_right_associative_and_binds_tighter_than_negation() {
        let expr = parse("-a ** b ** c");
        let ExprKind::UnaryOp { op: UnaryOp::Neg, operand } = &expr.kind else {
            panic!("expected negation at the root");
        };
        let ExprKind::BinaryOp { op: BinOp::Pow, left, right } = &operand.kind else {
            panic!("expected a power");
        };
        assert_eq!(name(left), "a");
        assert!(matches!(right.kind, ExprKind::BinaryOp { op: BinOp::Pow, .. }));
    }

    #[test]
    fn comparisons_chain() {
        let expr = parse("a < b is not c not in d");
        let ExprKind::Compare { left, comparisons } = &expr.kind else {
            panic!("expected a comparison");
        };
        assert_eq!(name(left), "a");
        let ops: Vec<CmpOp> = comparisons.iter().map(|(op, _)| *op).collect();
        assert_eq!(ops, vec![CmpOp::Lt, CmpOp::IsNot, CmpOp::NotIn]);
    }

    #[test]
    fn call_collects_positional_and_keyword_arguments() {
        let expr = parse("print(a, *rest, sep='', **opts)");
        let ExprKind::Call { func, args, keywords } = &expr.kind else {
            panic!("expected a call");
        };
        assert_eq!(name(func), "print");
        assert_eq!(args.len(), 2);
        assert!(matches!(args[1].kind, ExprKind::Starred(_)));
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].arg.as_deref(), Some("sep"));
        assert_eq!(keywords[1].arg, None);
    }

    #[test]
    fn bare_commas_make_a_tuple() {
        let expr = parse("1, 2,");
        assert!(matches!(&expr.kind, ExprKind::Tuple(items) if items.len() == 2));
        assert_eq!(expr.pos, Position::new(1, 1));
    }

    #[test]
    fn parenthesised_expression_is_not_a_tuple() {
        assert!(matches!(parse("(a)").kind, ExprKind::Name(_)));
        assert!(matches!(&parse("(a,)").kind, ExprKind::Tuple(items) if items.len() == 1));
    }

    #[test]
    fn displays_and_comprehensions() {
        assert!(matches!(parse("{}").kind, ExprKind::Dict(_)));
        assert!(matches!(parse("{1, 2}").kind, ExprKind::Set(_)));
        assert!(matches!(parse("{**a, 'k': v}").kind, ExprKind::Dict(ref items) if items.len() == 2));
        assert!(matches!(parse("{k: v for k, v in xs}").kind, ExprKind::DictComp { .. }));
        assert!(matches!(parse("[x for x in y if x if not x]").kind, ExprKind::ListComp { .. }));
        assert!(matches!(parse("(x async for x in y)").kind, ExprKind::GeneratorExp { .. }));
        assert!(matches!(parse("f(x for x in y)").kind, ExprKind::Call { .. }));
    }

    #[test]
    fn slices() {
        let expr = parse("a[1:, ::2]");
        let ExprKind::Subscript { index, .. } = &expr.kind else {
            panic!("expected a subscript");
        };
        let ExprKind::Tuple(items) = &index.kind else {
            panic!("expected a tuple index");
        };
        assert!(matches!(
            &items[0].kind,
            ExprKind::Slice { lower: Some(_), upper: None, step: None }
        ));
        assert!(matches!(
            &items[1].kind,
            ExprKind::Slice { lower: None, upper: None, step: Some(_) }
        ));
    }

    #[test]
    fn lambda_and_conditional() {
        let expr = parse("lambda x, *a, k=1, **kw: x if k else a");
        let ExprKind::Lambda { params, body } = &expr.kind else {
            panic!("expected a lambda");
        };
        assert_eq!(params.args.len(), 1);
        assert!(params.vararg.is_some());
        assert_eq!(params.kwonly.len(), 1);
        assert!(params.kwarg.is_some());
        assert!(matches!(body.kind, ExprKind::IfExp { .. }));
    }

    #[test]
    fn walrus_requires_a_name() {
        let mut parser = Parser::new("a.b := 1\n");
        assert_eq!(
            parse_named_expr(&mut parser),
            Err(ParseError::InvalidAssignmentTarget(Position::new(1, 1)))
        );
    }

    #[test]
    fn missing_operand_is_reported() {
        let mut parser = Parser::new("1 +\n");
        let err = parse_star_expressions(&mut parser).unwrap_err();
        assert!(matches!(err, ParseError::ExpectedExpression(_, pos) if pos == Position::new(1, 4)));
    }
}
