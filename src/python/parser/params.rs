use crate::python::{
    ast::expr::{Param, Parameters},
    parser::{errors::ParseError, expr::parse_test, lexer::token::TokenKind, parser::Parser, ParseResult},
};

/// One parameter name with its optional annotation (only in `def` headers).
fn parse_param(parser: &mut Parser, annotated: bool) -> ParseResult<Param> {
    let mut param = Param::new(parser.consume_ident()?);
    if annotated && parser.match_kind(TokenKind::Colon)? {
        param.annotation = Some(parse_test(parser)?);
    }
    Ok(param)
}

/// Parameter list up to (not including) `closing`: `)` for `def`, `:` for `lambda`.
///
/// Handles the `/` and `*` markers, `*args`, `**kwargs`, annotations and defaults.
pub fn parse_parameters(
    parser: &mut Parser,
    closing: &TokenKind,
    annotated: bool,
) -> ParseResult<Parameters> {
    let mut params = Parameters::default();
    let mut keyword_only = false;
    let mut seen_default = false;

    while !parser.at(closing)? {
        let pos = parser.peek_pos()?;
        if parser.match_kind(TokenKind::DoubleStar)? {
            params.kwarg = Some(parse_param(parser, annotated)?);
            parser.match_kind(TokenKind::Comma)?;
            break;
        } else if parser.match_kind(TokenKind::Star)? {
            if keyword_only {
                return Err(ParseError::General("Duplicate '*' in parameter list".into(), pos));
            }
            keyword_only = true;
            if !matches!(parser.peek_kind()?, TokenKind::Comma) {
                params.vararg = Some(parse_param(parser, annotated)?);
            }
        } else if parser.match_kind(TokenKind::Slash)? {
            if keyword_only || !params.posonly.is_empty() || params.args.is_empty() {
                return Err(ParseError::General("Misplaced '/' in parameter list".into(), pos));
            }
            params.posonly = std::mem::take(&mut params.args);
        } else {
            let mut param = parse_param(parser, annotated)?;
            if parser.match_kind(TokenKind::Eq)? {
                param.default = Some(parse_test(parser)?);
                seen_default = true;
            } else if seen_default && !keyword_only {
                return Err(ParseError::General(
                    "Parameter without a default follows parameter with a default".into(),
                    pos,
                ));
            }
            if keyword_only {
                params.kwonly.push(param);
            } else {
                params.args.push(param);
            }
        }

        if !parser.match_kind(TokenKind::Comma)? {
            break;
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::ast::position::Position;

    fn parse(input: &str) -> ParseResult<Parameters> {
        let mut parser = Parser::new(input);
        parser.expect_kind(TokenKind::LParen)?;
        let params = parse_parameters(&mut parser, &TokenKind::RParen, true)?;
        parser.expect_kind(TokenKind::RParen)?;
        Ok(params)
    }

    #[test]
    fn groups_parameters_by_kind() {
        let params = parse("(a, b: int, /, c=1, *args, d, e: str = 'x', **kw)").unwrap();
        let names = |group: &[Param]| group.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&params.posonly), vec!["a", "b"]);
        assert_eq!(names(&params.args), vec!["c"]);
        assert_eq!(params.vararg.as_ref().map(|p| p.name.as_str()), Some("args"));
        assert_eq!(names(&params.kwonly), vec!["d", "e"]);
        assert_eq!(params.kwarg.as_ref().map(|p| p.name.as_str()), Some("kw"));
        assert!(params.posonly[1].annotation.is_some());
        assert!(params.kwonly[1].default.is_some());
    }

    #[test]
    fn bare_star_marks_keyword_only() {
        let params = parse("(a, *, b)").unwrap();
        assert!(params.vararg.is_none());
        assert_eq!(params.kwonly.len(), 1);
    }

    #[test]
    fn empty_list() {
        assert!(parse("()").unwrap().is_empty());
    }

    #[test]
    fn non_default_after_default_is_rejected() {
        assert!(matches!(
            parse("(a=1, b)"),
            Err(ParseError::General(_, pos)) if pos == Position::new(1, 7)
        ));
    }
}
