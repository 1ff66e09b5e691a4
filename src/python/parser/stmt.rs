use crate::python::{
    ast::{
        block::Block,
        expr::{Expr, ExprKind},
        node::Located,
        position::Position,
        stmt::{Alias, ClassDef, ExceptHandler, FunctionDef, MatchCase, Stmt, StmtKind, WithItem},
    },
    parser::{
        block::{parse_block, parse_else_block},
        errors::ParseError,
        expr::{
            binary_operator, parse_assigned_value, parse_call_arguments, parse_named_expr,
            parse_star_expressions, parse_star_target, parse_target_list, parse_test,
        },
        lexer::token::TokenKind,
        params::parse_parameters,
        parser::Parser,
        pattern::parse_case_pattern,
        ParseResult,
    },
};

/// One logical statement. Simple statements separated by `;` come back together.
pub fn parse_statement(parser: &mut Parser) -> ParseResult<Vec<Stmt>> {
    let pos = parser.peek_pos()?;
    if parser.at_soft_keyword("match")? {
        if let Some(subject) = parser.speculate(parse_match_header) {
            return Ok(vec![parse_match_stmt(parser, subject, pos)?]);
        }
    }
    let stmt = match parser.peek_kind()? {
        TokenKind::If => parse_if_stmt(parser)?,
        TokenKind::While => parse_while_stmt(parser)?,
        TokenKind::For => parse_for_stmt(parser, false, pos)?,
        TokenKind::Try => parse_try_stmt(parser)?,
        TokenKind::With => parse_with_stmt(parser, false, pos)?,
        TokenKind::Def => parse_function_def(parser, Vec::new(), false, pos)?,
        TokenKind::Class => parse_class_def(parser, Vec::new(), pos)?,
        TokenKind::At => parse_decorated(parser)?,
        TokenKind::Async => {
            parser.advance()?;
            parse_async_stmt(parser, Vec::new(), pos)?
        }
        TokenKind::Indent => return Err(ParseError::UnexpectedIndent(pos)),
        _ => return parse_simple_statements(parser),
    };
    Ok(vec![stmt])
}

/// `stmt (; stmt)* ;? NEWLINE`
pub fn parse_simple_statements(parser: &mut Parser) -> ParseResult<Vec<Stmt>> {
    let mut stmts = vec![parse_simple_statement(parser)?];
    while parser.match_kind(TokenKind::Semicolon)? {
        if parser.at(&TokenKind::Newline)? {
            break;
        }
        stmts.push(parse_simple_statement(parser)?);
    }
    parser.expect_kind(TokenKind::Newline)?;
    Ok(stmts)
}

fn at_statement_end(parser: &mut Parser) -> ParseResult<bool> {
    Ok(matches!(
        parser.peek_kind()?,
        TokenKind::Newline | TokenKind::Semicolon | TokenKind::EOF
    ))
}

fn parse_simple_statement(parser: &mut Parser) -> ParseResult<Stmt> {
    let pos = parser.peek_pos()?;
    let kind = match parser.peek_kind()? {
        TokenKind::Pass => {
            parser.advance()?;
            StmtKind::Pass
        }
        TokenKind::Break => {
            parser.advance()?;
            StmtKind::Break
        }
        TokenKind::Continue => {
            parser.advance()?;
            StmtKind::Continue
        }
        TokenKind::Return => {
            parser.advance()?;
            let value = if at_statement_end(parser)? {
                None
            } else {
                Some(parse_star_expressions(parser)?)
            };
            StmtKind::Return(value)
        }
        TokenKind::Raise => {
            parser.advance()?;
            let mut exc = None;
            let mut cause = None;
            if !at_statement_end(parser)? {
                exc = Some(parse_test(parser)?);
                if parser.match_kind(TokenKind::From)? {
                    cause = Some(parse_test(parser)?);
                }
            }
            StmtKind::Raise { exc, cause }
        }
        TokenKind::Global => {
            parser.advance()?;
            StmtKind::Global(parse_name_list(parser)?)
        }
        TokenKind::Nonlocal => {
            parser.advance()?;
            StmtKind::Nonlocal(parse_name_list(parser)?)
        }
        TokenKind::Del => {
            parser.advance()?;
            StmtKind::Delete(parse_del_targets(parser)?)
        }
        TokenKind::Assert => {
            parser.advance()?;
            let test = parse_test(parser)?;
            let msg = if parser.match_kind(TokenKind::Comma)? {
                Some(parse_test(parser)?)
            } else {
                None
            };
            StmtKind::Assert { test, msg }
        }
        TokenKind::Import => parse_import(parser)?,
        TokenKind::From => parse_import_from(parser)?,
        _ => parse_expression_statement(parser)?,
    };
    Ok(Located::new(kind, pos))
}

fn parse_name_list(parser: &mut Parser) -> ParseResult<Vec<String>> {
    let mut names = vec![parser.consume_ident()?];
    while parser.match_kind(TokenKind::Comma)? {
        names.push(parser.consume_ident()?);
    }
    Ok(names)
}

fn check_target(target: &Expr) -> ParseResult<()> {
    if target.is_assignable() {
        Ok(())
    } else {
        Err(ParseError::InvalidAssignmentTarget(target.pos))
    }
}

/// Targets of `x: T` and `x += 1` cannot be unpacked.
fn check_single_target(target: &Expr) -> ParseResult<()> {
    match target.kind {
        ExprKind::Name(_) | ExprKind::Attribute { .. } | ExprKind::Subscript { .. } => Ok(()),
        _ => Err(ParseError::InvalidAssignmentTarget(target.pos)),
    }
}

fn parse_del_targets(parser: &mut Parser) -> ParseResult<Vec<Expr>> {
    let mut targets = Vec::new();
    loop {
        let target = parse_star_target(parser)?;
        check_target(&target)?;
        targets.push(target);
        if !parser.match_kind(TokenKind::Comma)? || at_statement_end(parser)? {
            return Ok(targets);
        }
    }
}

/// `name (as asname)?`, where `name` may be dotted.
fn parse_alias(parser: &mut Parser, dotted: bool) -> ParseResult<Alias> {
    let name = if dotted {
        parser.consume_dotted_name()?
    } else {
        parser.consume_ident()?
    };
    let asname = if parser.match_kind(TokenKind::As)? {
        Some(parser.consume_ident()?)
    } else {
        None
    };
    Ok(Alias { name, asname })
}

fn parse_import(parser: &mut Parser) -> ParseResult<StmtKind> {
    parser.expect_kind(TokenKind::Import)?;
    let mut names = vec![parse_alias(parser, true)?];
    while parser.match_kind(TokenKind::Comma)? {
        names.push(parse_alias(parser, true)?);
    }
    Ok(StmtKind::Import(names))
}

fn parse_import_from(parser: &mut Parser) -> ParseResult<StmtKind> {
    parser.expect_kind(TokenKind::From)?;

    let mut level = 0;
    loop {
        if parser.match_kind(TokenKind::Dot)? {
            level += 1;
        } else if parser.match_kind(TokenKind::Ellipsis)? {
            level += 3;
        } else {
            break;
        }
    }
    let module = if parser.at(&TokenKind::Import)? && level > 0 {
        None
    } else {
        Some(parser.consume_dotted_name()?)
    };
    parser.expect_kind(TokenKind::Import)?;

    if parser.match_kind(TokenKind::Star)? {
        let names = vec![Alias {
            name: "*".into(),
            asname: None,
        }];
        return Ok(StmtKind::ImportFrom {
            module,
            names,
            level,
        });
    }

    let parenthesized = parser.match_kind(TokenKind::LParen)?;
    let mut names = vec![parse_alias(parser, false)?];
    while parser.match_kind(TokenKind::Comma)? {
        if parenthesized && parser.at(&TokenKind::RParen)? {
            break;
        }
        names.push(parse_alias(parser, false)?);
    }
    if parenthesized {
        parser.expect_kind(TokenKind::RParen)?;
    }
    Ok(StmtKind::ImportFrom {
        module,
        names,
        level,
    })
}

/// Expression statements and the assignment forms that start with an expression.
fn parse_expression_statement(parser: &mut Parser) -> ParseResult<StmtKind> {
    let first = parse_assigned_value(parser)?;

    match parser.peek_kind()?.clone() {
        TokenKind::Colon => {
            check_single_target(&first)?;
            parser.advance()?;
            let annotation = parse_test(parser)?;
            let value = if parser.match_kind(TokenKind::Eq)? {
                Some(parse_assigned_value(parser)?)
            } else {
                None
            };
            Ok(StmtKind::AnnAssign {
                target: first,
                annotation,
                value,
            })
        }
        TokenKind::AugAssign(op) => {
            check_single_target(&first)?;
            let pos = parser.peek_pos()?;
            parser.advance()?;
            let op = binary_operator(&op).ok_or_else(|| {
                ParseError::General("Unknown augmented assignment operator".into(), pos)
            })?;
            let value = parse_assigned_value(parser)?;
            Ok(StmtKind::AugAssign {
                target: first,
                op,
                value,
            })
        }
        TokenKind::Eq => {
            let mut targets = vec![first];
            while parser.match_kind(TokenKind::Eq)? {
                targets.push(parse_assigned_value(parser)?);
            }
            let value = targets.pop().ok_or(ParseError::ExpectedExpression(
                "end of line".into(),
                parser.last_pos,
            ))?;
            for target in &targets {
                check_target(target)?;
            }
            Ok(StmtKind::Assign { targets, value })
        }
        _ => Ok(StmtKind::Expr(first)),
    }
}

/// `if`/`elif` chain. Each `elif` becomes an `If` that is the only statement of the `orelse` block.
fn parse_if_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let pos = parser.peek_pos()?;
    parser.advance()?; // 'if' or 'elif'
    let test = parse_named_expr(parser)?;
    let body = parse_block(parser)?;
    let orelse = if parser.at(&TokenKind::Elif)? {
        let elif = parse_if_stmt(parser)?;
        let elif_pos = elif.pos;
        Some(Block::new(vec![elif], elif_pos))
    } else {
        parse_else_block(parser)?
    };
    Ok(Located::new(StmtKind::If { test, body, orelse }, pos))
}

fn parse_while_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let pos = parser.peek_pos()?;
    parser.expect_kind(TokenKind::While)?;
    let test = parse_named_expr(parser)?;
    let body = parse_block(parser)?;
    let orelse = parse_else_block(parser)?;
    Ok(Located::new(StmtKind::While { test, body, orelse }, pos))
}

fn parse_for_stmt(parser: &mut Parser, is_async: bool, pos: Position) -> ParseResult<Stmt> {
    parser.expect_kind(TokenKind::For)?;
    let target = parse_target_list(parser)?;
    parser.expect_kind(TokenKind::In)?;
    let iter = parse_star_expressions(parser)?;
    let body = parse_block(parser)?;
    let orelse = parse_else_block(parser)?;
    Ok(Located::new(
        StmtKind::For {
            target,
            iter,
            body,
            orelse,
            is_async,
        },
        pos,
    ))
}

fn parse_try_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let pos = parser.peek_pos()?;
    parser.expect_kind(TokenKind::Try)?;
    let body = parse_block(parser)?;

    let mut handlers = Vec::new();
    let mut is_star = false;
    while parser.match_kind(TokenKind::Except)? {
        is_star |= parser.match_kind(TokenKind::Star)?;
        let mut type_ = None;
        let mut name = None;
        if !parser.at(&TokenKind::Colon)? {
            type_ = Some(parse_test(parser)?);
            if parser.match_kind(TokenKind::As)? {
                name = Some(parser.consume_ident()?);
            }
        }
        let body = parse_block(parser)?;
        handlers.push(ExceptHandler { type_, name, body });
    }

    let orelse = if handlers.is_empty() {
        None
    } else {
        parse_else_block(parser)?
    };
    let finalbody = if parser.match_kind(TokenKind::Finally)? {
        Some(parse_block(parser)?)
    } else {
        None
    };
    if handlers.is_empty() && finalbody.is_none() {
        return Err(parser.unexpected("'except' or 'finally'"));
    }

    Ok(Located::new(
        StmtKind::Try {
            body,
            handlers,
            orelse,
            finalbody,
            is_star,
        },
        pos,
    ))
}

fn parse_with_item(parser: &mut Parser) -> ParseResult<WithItem> {
    let context_expr = parse_test(parser)?;
    let optional_vars = if parser.match_kind(TokenKind::As)? {
        let target = parse_star_target(parser)?;
        check_target(&target)?;
        Some(target)
    } else {
        None
    };
    Ok(WithItem {
        context_expr,
        optional_vars,
    })
}

/// `(a as x, b as y,)` directly followed by the header's `:`.
fn parse_parenthesized_with_items(parser: &mut Parser) -> ParseResult<Vec<WithItem>> {
    parser.expect_kind(TokenKind::LParen)?;
    let mut items = vec![parse_with_item(parser)?];
    while parser.match_kind(TokenKind::Comma)? {
        if parser.at(&TokenKind::RParen)? {
            break;
        }
        items.push(parse_with_item(parser)?);
    }
    parser.expect_kind(TokenKind::RParen)?;
    if !parser.at(&TokenKind::Colon)? {
        return Err(parser.unexpected("':'"));
    }
    Ok(items)
}

fn parse_with_stmt(parser: &mut Parser, is_async: bool, pos: Position) -> ParseResult<Stmt> {
    parser.expect_kind(TokenKind::With)?;
    let parenthesized = if parser.at(&TokenKind::LParen)? {
        parser.speculate(parse_parenthesized_with_items)
    } else {
        None
    };
    let items = match parenthesized {
        Some(items) => items,
        None => {
            let mut items = vec![parse_with_item(parser)?];
            while parser.match_kind(TokenKind::Comma)? {
                items.push(parse_with_item(parser)?);
            }
            items
        }
    };
    let body = parse_block(parser)?;
    Ok(Located::new(
        StmtKind::With {
            items,
            body,
            is_async,
        },
        pos,
    ))
}

/// `match subject:` up to the end of the line. Fails, leaving the caller to
/// read an ordinary statement, when `match` is used as a plain name.
fn parse_match_header(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance()?; // 'match'
    let subject = parse_star_expressions(parser)?;
    parser.expect_kind(TokenKind::Colon)?;
    if !parser.at(&TokenKind::Newline)? {
        return Err(parser.unexpected("end of line"));
    }
    Ok(subject)
}

fn parse_match_stmt(parser: &mut Parser, subject: Expr, pos: Position) -> ParseResult<Stmt> {
    parser.expect_kind(TokenKind::Newline)?;
    if !parser.match_kind(TokenKind::Indent)? {
        return Err(parser.unexpected("an indented block"));
    }
    let mut cases = Vec::new();
    while !parser.match_kind(TokenKind::Dedent)? {
        if !parser.at_soft_keyword("case")? {
            return Err(parser.unexpected("'case'"));
        }
        parser.advance()?;
        let pattern = parse_case_pattern(parser)?;
        let guard = if parser.match_kind(TokenKind::If)? {
            Some(parse_named_expr(parser)?)
        } else {
            None
        };
        let body = parse_block(parser)?;
        cases.push(MatchCase {
            pattern,
            guard,
            body,
        });
    }
    Ok(Located::new(StmtKind::Match { subject, cases }, pos))
}

fn parse_function_def(
    parser: &mut Parser,
    decorators: Vec<Expr>,
    is_async: bool,
    pos: Position,
) -> ParseResult<Stmt> {
    parser.expect_kind(TokenKind::Def)?;
    let name = parser.consume_ident()?;
    parser.expect_kind(TokenKind::LParen)?;
    let params = parse_parameters(parser, &TokenKind::RParen, true)?;
    parser.expect_kind(TokenKind::RParen)?;
    let returns = if parser.match_kind(TokenKind::Arrow)? {
        Some(parse_test(parser)?)
    } else {
        None
    };
    let body = parse_block(parser)?;
    Ok(Located::new(
        StmtKind::FunctionDef(FunctionDef {
            name,
            params,
            returns,
            body,
            decorators,
            is_async,
        }),
        pos,
    ))
}

fn parse_class_def(parser: &mut Parser, decorators: Vec<Expr>, pos: Position) -> ParseResult<Stmt> {
    parser.expect_kind(TokenKind::Class)?;
    let name = parser.consume_ident()?;
    let (bases, keywords) = if parser.match_kind(TokenKind::LParen)? {
        parse_call_arguments(parser)?
    } else {
        (Vec::new(), Vec::new())
    };
    let body = parse_block(parser)?;
    Ok(Located::new(
        StmtKind::ClassDef(ClassDef {
            name,
            bases,
            keywords,
            body,
            decorators,
        }),
        pos,
    ))
}

/// After `async`: `def`, `for` or `with`.
fn parse_async_stmt(parser: &mut Parser, decorators: Vec<Expr>, pos: Position) -> ParseResult<Stmt> {
    match parser.peek_kind()? {
        TokenKind::Def => parse_function_def(parser, decorators, true, pos),
        TokenKind::For if decorators.is_empty() => parse_for_stmt(parser, true, pos),
        TokenKind::With if decorators.is_empty() => parse_with_stmt(parser, true, pos),
        _ => Err(parser.unexpected("'def', 'for' or 'with' after 'async'")),
    }
}

/// `@decorator NEWLINE`+ followed by a function or class definition.
fn parse_decorated(parser: &mut Parser) -> ParseResult<Stmt> {
    let mut decorators = Vec::new();
    while parser.match_kind(TokenKind::At)? {
        decorators.push(parse_named_expr(parser)?);
        parser.expect_kind(TokenKind::Newline)?;
    }

    let pos = parser.peek_pos()?;
    match parser.peek_kind()? {
        TokenKind::Def => parse_function_def(parser, decorators, false, pos),
        TokenKind::Class => parse_class_def(parser, decorators, pos),
        TokenKind::Async => {
            parser.advance()?;
            parse_async_stmt(parser, decorators, pos)
        }
        _ => Err(parser.unexpected("'def' or 'class' after decorator")),
    }
}

#[cfg(test)]
mod tests {
    use crate::python::{
        ast::{
            expr::ExprKind,
            operator::BinOp,
            position::Position,
            stmt::{Stmt, StmtKind},
        },
        parser::{errors::ParseError, parse_module},
    };

    fn parse(src: &str) -> Vec<Stmt> {
        parse_module(src).expect("parse failed").stmts
    }

    #[test]
    fn semicolons_separate_simple_statements() {
        let stmts = parse("a = 1; b = 2;\npass\n");
        assert_eq!(stmts.len(), 3);
        assert_eq!(stmts[1].pos, Position::new(1, 8));
        assert!(matches!(stmts[2].kind, StmtKind::Pass));
    }

    #[test]
    fn assignment_forms() {
        let stmts = parse("a = b = 1\nx += 2\ny: int = 3\nz: str\nc, *d = e\n");
        assert!(matches!(&stmts[0].kind, StmtKind::Assign { targets, .. } if targets.len() == 2));
        assert!(matches!(stmts[1].kind, StmtKind::AugAssign { op: BinOp::Add, .. }));
        assert!(matches!(stmts[2].kind, StmtKind::AnnAssign { value: Some(_), .. }));
        assert!(matches!(stmts[3].kind, StmtKind::AnnAssign { value: None, .. }));
        assert!(matches!(&stmts[4].kind, StmtKind::Assign { targets, .. }
            if matches!(targets[0].kind, ExprKind::Tuple(_))));
    }

    #[test]
    fn assigning_to_a_call_is_rejected() {
        assert_eq!(
            parse_module("f() = 1\n").unwrap_err(),
            ParseError::InvalidAssignmentTarget(Position::new(1, 1))
        );
    }

    #[test]
    fn elif_nests_in_orelse() {
        let stmts = parse("if a:\n    pass\nelif b:\n    pass\nelse:\n    pass\n");
        let StmtKind::If { orelse: Some(orelse), .. } = &stmts[0].kind else {
            panic!("expected if/else");
        };
        assert_eq!(orelse.stmts.len(), 1);
        assert_eq!(orelse.stmts[0].pos, Position::new(3, 1));
        assert!(matches!(
            orelse.stmts[0].kind,
            StmtKind::If { orelse: Some(_), .. }
        ));
    }

    #[test]
    fn compound_statements() {
        let src = "\
for i, x in enumerate(xs):
    continue
else:
    pass
while True: break
try:
    pass
except (A, B) as e:
    raise X from e
except:
    raise
else:
    pass
finally:
    pass
with a as b, c:
    pass
";
        let stmts = parse(src);
        assert_eq!(stmts.len(), 4);
        assert!(matches!(stmts[0].kind, StmtKind::For { orelse: Some(_), .. }));
        assert!(matches!(stmts[1].kind, StmtKind::While { .. }));
        let StmtKind::Try { handlers, orelse, finalbody, .. } = &stmts[2].kind else {
            panic!("expected try");
        };
        assert_eq!(handlers.len(), 2);
        assert_eq!(handlers[0].name.as_deref(), Some("e"));
        assert!(handlers[1].type_.is_none());
        assert!(orelse.is_some() && finalbody.is_some());
        assert!(matches!(&stmts[3].kind, StmtKind::With { items, .. } if items.len() == 2));
    }

    #[test]
    fn decorated_async_function() {
        let stmts = parse("@cache\n@app.route('/')\nasync def f(x: int) -> str:\n    return x\n");
        let StmtKind::FunctionDef(def) = &stmts[0].kind else {
            panic!("expected def");
        };
        assert_eq!(def.name, "f");
        assert!(def.is_async);
        assert_eq!(def.decorators.len(), 2);
        assert!(def.returns.is_some());
        assert_eq!(stmts[0].pos, Position::new(3, 1));
    }

    #[test]
    fn class_with_bases_and_keywords() {
        let stmts = parse("class C(Base, metaclass=Meta):\n    x = 1\n");
        let StmtKind::ClassDef(class) = &stmts[0].kind else {
            panic!("expected class");
        };
        assert_eq!(class.bases.len(), 1);
        assert_eq!(class.keywords.len(), 1);
    }

    #[test]
    fn imports() {
        let stmts = parse("import os.path as p, sys\nfrom ..pkg import (a, b as c,)\nfrom . import *\n");
        assert!(matches!(&stmts[0].kind, StmtKind::Import(names) if names[0].name == "os.path"));
        assert!(matches!(&stmts[1].kind,
            StmtKind::ImportFrom { module: Some(m), names, level: 2 } if m == "pkg" && names.len() == 2));
        assert!(matches!(&stmts[2].kind,
            StmtKind::ImportFrom { module: None, names, level: 1 } if names[0].name == "*"));
    }

    #[test]
    fn missing_indented_block() {
        assert!(matches!(
            parse_module("def f():\npass\n"),
            Err(ParseError::UnexpectedToken { pos, .. }) if pos == Position::new(2, 1)
        ));
    }

    #[test]
    fn unexpected_indent() {
        assert_eq!(
            parse_module("a = 1\n    b = 2\n").unwrap_err(),
            ParseError::UnexpectedIndent(Position::new(2, 5))
        );
    }

    #[test]
    fn match_statement_with_guards() {
        let src = "\
match command.split():
    case [action]:
        pass
    case [action, obj] if obj:
        pass
    case _:
        pass
";
        let stmts = parse(src);
        let StmtKind::Match { subject, cases } = &stmts[0].kind else {
            panic!("expected a match statement");
        };
        assert!(matches!(subject.kind, ExprKind::Call { .. }));
        assert_eq!(cases.len(), 3);
        assert!(cases[1].guard.is_some());
        assert_eq!(cases[2].body.pos, Position::new(7, 9));
    }

    #[test]
    fn match_is_still_an_ordinary_name() {
        let stmts = parse("match = re.match(p, s)
match.group(1)
match[0]: int = 1
");
        assert!(matches!(stmts[0].kind, StmtKind::Assign { .. }));
        assert!(matches!(stmts[1].kind, StmtKind::Expr(_)));
        assert!(matches!(stmts[2].kind, StmtKind::AnnAssign { .. }));
    }

    #[test]
    fn match_body_only_holds_cases() {
        let err = parse_module("match x:
    pass
").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected 'case', but found Pass, at 2:5"
        );
    }

    #[test]
    fn parenthesized_with_items() {
        let stmts = parse("with (open(a) as f, open(b) as g,):
    pass
with (a, b) as c:
    pass
");
        let StmtKind::With { items, .. } = &stmts[0].kind else {
            panic!("expected a with statement");
        };
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.optional_vars.is_some()));

        let StmtKind::With { items, .. } = &stmts[1].kind else {
            panic!("expected a with statement");
        };
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0].context_expr.kind, ExprKind::Tuple(_)));
    }
}
