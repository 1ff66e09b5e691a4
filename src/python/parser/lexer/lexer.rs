use std::collections::VecDeque;

use crate::python::{
    ast::position::Position,
    parser::{
        errors::ParseError,
        lexer::token::{Token, TokenKind},
    },
};

const TAB_SIZE: usize = 8;

#[derive(Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Current byte offset into `input`, always on a char boundary.
    pos: usize,
    /// 1-based source line
    line: usize,
    /// 1-based column
    column: usize,
    /// Indentation widths of the open blocks; the bottom entry is always 0.
    indents: Vec<usize>,
    /// Open brackets. Newlines and indentation are insignificant while this is non-empty.
    brackets: Vec<(char, Position)>,
    at_line_start: bool,
    /// Whether the current logical line produced a token, i.e. needs a NEWLINE.
    line_has_tokens: bool,
    /// Layout tokens waiting to be handed out (INDENT/DEDENT runs, the final EOF).
    pending: VecDeque<Token>,
    /// Whether EOF has been queued.
    exhausted: bool,
    /// Whether the iterator has returned EOF or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from the full input string.
    pub fn new(input: &'a str) -> Self {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
            indents: vec![0],
            brackets: Vec::new(),
            at_line_start: true,
            line_has_tokens: false,
            pending: VecDeque::new(),
            exhausted: false,
            finished: false,
        }
    }

    fn current_pos(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Look at the current character without consuming it.
    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Peek `n` characters past the current one.
    fn peek_at(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn scan_while<F>(&mut self, pred: F)
    where
        F: Fn(char) -> bool,
    {
        while let Some(ch) = self.current_char() {
            if pred(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn skip_comment(&mut self) {
        self.scan_while(|ch| ch != '\n');
    }

    /// Skip spaces, comments and backslash continuations inside a logical line.
    fn skip_whitespace(&mut self) {
        loop {
            match self.current_char() {
                Some(' ' | '\t' | '\r' | '\x0c') => self.advance(),
                Some('#') => self.skip_comment(),
                Some('\\') if self.peek_at(1) == Some('\n') => self.advance_by(2),
                Some('\\') if self.peek_at(1) == Some('\r') && self.peek_at(2) == Some('\n') => {
                    self.advance_by(3)
                }
                _ => break,
            }
        }
    }

    /// Measure the indentation of the next non-blank line and queue INDENT/DEDENT tokens.
    fn lex_indentation(&mut self) -> Result<(), ParseError> {
        loop {
            let mut width = 0;
            while let Some(ch) = self.current_char() {
                match ch {
                    ' ' => width += 1,
                    '\t' => width = (width / TAB_SIZE + 1) * TAB_SIZE,
                    '\x0c' => width = 0,
                    _ => break,
                }
                self.advance();
            }

            if self.current_char() == Some('#') {
                self.skip_comment();
            }
            match self.current_char() {
                // blank or comment-only line
                Some('\n' | '\r') => {
                    self.advance();
                    continue;
                }
                None => return Ok(()),
                Some(_) => {}
            }

            let pos = self.current_pos();
            let top = self.indents.last().copied().unwrap_or(0);
            if width > top {
                self.indents.push(width);
                self.pending.push_back(Token {
                    kind: TokenKind::Indent,
                    pos,
                });
            } else if width < top {
                while self.indents.last().is_some_and(|&w| width < w) {
                    self.indents.pop();
                    self.pending.push_back(Token {
                        kind: TokenKind::Dedent,
                        pos,
                    });
                }
                if self.indents.last().copied().unwrap_or(0) != width {
                    return Err(ParseError::InconsistentDedent(pos));
                }
            }
            return Ok(());
        }
    }

    /// Queue the closing NEWLINE, the remaining DEDENTs and EOF.
    fn finish(&mut self, pos: Position) -> Result<(), ParseError> {
        if let Some((open, at)) = self.brackets.last() {
            return Err(ParseError::UnmatchedBracket(*open, *at));
        }
        if self.line_has_tokens {
            self.line_has_tokens = false;
            self.pending.push_back(Token {
                kind: TokenKind::Newline,
                pos,
            });
        }
        while self.indents.len() > 1 {
            self.indents.pop();
            self.pending.push_back(Token {
                kind: TokenKind::Dedent,
                pos,
            });
        }
        self.pending.push_back(Token {
            kind: TokenKind::EOF,
            pos,
        });
        self.exhausted = true;
        Ok(())
    }

    /// Consume an identifier or keyword.
    fn lex_identifier(&mut self) -> &'a str {
        let input = self.input;
        let start = self.pos;
        self.scan_while(|ch| ch.is_alphanumeric() || ch == '_');
        &input[start..self.pos]
    }

    /// Consume a numeric literal and return its source text.
    fn lex_number(&mut self) -> String {
        let start = self.pos;
        let radix_prefix = self.current_char() == Some('0')
            && matches!(self.peek_at(1), Some('x' | 'X' | 'o' | 'O' | 'b' | 'B'));

        if radix_prefix {
            self.advance_by(2);
            self.scan_while(|ch| ch.is_ascii_hexdigit() || ch == '_');
        } else {
            self.scan_while(|ch| ch.is_ascii_digit() || ch == '_');
            if self.current_char() == Some('.') {
                self.advance();
                self.scan_while(|ch| ch.is_ascii_digit() || ch == '_');
            }
            if matches!(self.current_char(), Some('e' | 'E')) {
                let signed = matches!(self.peek_at(1), Some('+' | '-'));
                let digit_at = if signed { 2 } else { 1 };
                if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                    self.advance_by(digit_at);
                    self.scan_while(|ch| ch.is_ascii_digit() || ch == '_');
                }
            }
            if matches!(self.current_char(), Some('j' | 'J')) {
                self.advance();
            }
        }
        self.input[start..self.pos].to_string()
    }

    /// Consume a string literal starting at the quote under the cursor.
    /// `start` is the byte offset of the prefix (if any); the raw text is returned.
    fn lex_string(&mut self, start: usize, start_pos: Position) -> Result<String, ParseError> {
        let quote = match self.current_char() {
            Some(q) => q,
            None => return Err(ParseError::UnexpectedEOF(start_pos)),
        };
        let triple = self.peek_at(1) == Some(quote) && self.peek_at(2) == Some(quote);
        self.advance_by(if triple { 3 } else { 1 });

        loop {
            match self.current_char() {
                None => return Err(ParseError::UnterminatedString(start_pos)),
                Some('\\') => {
                    self.advance();
                    if self.current_char().is_none() {
                        return Err(ParseError::UnterminatedString(start_pos));
                    }
                    self.advance();
                }
                Some('\n') if !triple => return Err(ParseError::UnterminatedString(start_pos)),
                Some(ch) if ch == quote => {
                    if !triple {
                        self.advance();
                        break;
                    }
                    if self.peek_at(1) == Some(quote) && self.peek_at(2) == Some(quote) {
                        self.advance_by(3);
                        break;
                    }
                    self.advance();
                }
                Some(_) => self.advance(),
            }
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn open_bracket(&mut self, ch: char, pos: Position) {
        self.brackets.push((ch, pos));
        self.advance();
    }

    fn close_bracket(&mut self, ch: char, pos: Position) -> Result<(), ParseError> {
        let expected = match ch {
            ')' => '(',
            ']' => '[',
            _ => '{',
        };
        match self.brackets.pop() {
            Some((open, _)) if open == expected => {
                self.advance();
                Ok(())
            }
            _ => Err(ParseError::UnmatchedBracket(ch, pos)),
        }
    }

    /// Consume `len` chars of an operator, or `len + 1` and produce the augmented
    /// assignment form when `=` follows and the operator has one.
    fn operator(&mut self, len: usize, kind: TokenKind, has_augmented: bool) -> TokenKind {
        if has_augmented && self.peek_at(len) == Some('=') {
            self.advance_by(len + 1);
            TokenKind::AugAssign(Box::new(kind))
        } else {
            self.advance_by(len);
            kind
        }
    }

    fn lex_token(&mut self, ch: char, start_pos: Position) -> Result<TokenKind, ParseError> {
        let next = self.peek_at(1);
        let kind = match ch {
            '(' | '[' | '{' => {
                self.open_bracket(ch, start_pos);
                match ch {
                    '(' => TokenKind::LParen,
                    '[' => TokenKind::LBracket,
                    _ => TokenKind::LBrace,
                }
            }
            ')' | ']' | '}' => {
                self.close_bracket(ch, start_pos)?;
                match ch {
                    ')' => TokenKind::RParen,
                    ']' => TokenKind::RBracket,
                    _ => TokenKind::RBrace,
                }
            }
            '"' | '\'' => TokenKind::String(self.lex_string(self.pos, start_pos)?),
            '.' if next.is_some_and(|c| c.is_ascii_digit()) => TokenKind::Number(self.lex_number()),
            c if c.is_ascii_digit() => TokenKind::Number(self.lex_number()),
            c if c.is_alphabetic() || c == '_' => {
                let start = self.pos;
                let ident = self.lex_identifier();
                if is_string_prefix(ident) && matches!(self.current_char(), Some('"' | '\'')) {
                    TokenKind::String(self.lex_string(start, start_pos)?)
                } else {
                    TokenKind::keyword(ident).unwrap_or_else(|| TokenKind::Name(ident.to_string()))
                }
            }
            ',' => self.operator(1, TokenKind::Comma, false),
            ';' => self.operator(1, TokenKind::Semicolon, false),
            '~' => self.operator(1, TokenKind::Tilde, false),
            ':' if next == Some('=') => self.operator(2, TokenKind::Walrus, false),
            ':' => self.operator(1, TokenKind::Colon, false),
            '.' if next == Some('.') && self.peek_at(2) == Some('.') => {
                self.operator(3, TokenKind::Ellipsis, false)
            }
            '.' => self.operator(1, TokenKind::Dot, false),
            '=' if next == Some('=') => self.operator(2, TokenKind::EqEq, false),
            '=' => self.operator(1, TokenKind::Eq, false),
            '!' if next == Some('=') => self.operator(2, TokenKind::NotEq, false),
            '<' if next == Some('<') => self.operator(2, TokenKind::LShift, true),
            '<' if next == Some('=') => self.operator(2, TokenKind::LtEq, false),
            '<' => self.operator(1, TokenKind::Lt, false),
            '>' if next == Some('>') => self.operator(2, TokenKind::RShift, true),
            '>' if next == Some('=') => self.operator(2, TokenKind::GtEq, false),
            '>' => self.operator(1, TokenKind::Gt, false),
            '-' if next == Some('>') => self.operator(2, TokenKind::Arrow, false),
            '-' => self.operator(1, TokenKind::Minus, true),
            '+' => self.operator(1, TokenKind::Plus, true),
            '*' if next == Some('*') => self.operator(2, TokenKind::DoubleStar, true),
            '*' => self.operator(1, TokenKind::Star, true),
            '/' if next == Some('/') => self.operator(2, TokenKind::DoubleSlash, true),
            '/' => self.operator(1, TokenKind::Slash, true),
            '%' => self.operator(1, TokenKind::Percent, true),
            '@' => self.operator(1, TokenKind::At, true),
            '&' => self.operator(1, TokenKind::Amp, true),
            '|' => self.operator(1, TokenKind::Pipe, true),
            '^' => self.operator(1, TokenKind::Caret, true),
            other => return Err(ParseError::UnexpectedChar(other, start_pos)),
        };
        Ok(kind)
    }

    /// Produce the next single `Token`.  On error, returns a `ParseError`.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            if self.exhausted {
                return Ok(Token {
                    kind: TokenKind::EOF,
                    pos: self.current_pos(),
                });
            }
            if self.at_line_start && self.brackets.is_empty() {
                self.at_line_start = false;
                self.lex_indentation()?;
                continue;
            }

            self.skip_whitespace();
            let start_pos = self.current_pos();
            let ch = match self.current_char() {
                None => {
                    self.finish(start_pos)?;
                    continue;
                }
                Some(ch) => ch,
            };

            if ch == '\n' {
                self.advance();
                if !self.brackets.is_empty() {
                    continue;
                }
                self.at_line_start = true;
                if self.line_has_tokens {
                    self.line_has_tokens = false;
                    return Ok(Token {
                        kind: TokenKind::Newline,
                        pos: start_pos,
                    });
                }
                continue;
            }

            let kind = self.lex_token(ch, start_pos)?;
            self.line_has_tokens = true;
            return Ok(Token {
                kind,
                pos: start_pos,
            });
        }
    }
}

fn is_string_prefix(ident: &str) -> bool {
    matches!(
        ident.to_ascii_lowercase().as_str(),
        "r" | "u" | "b" | "f" | "br" | "rb" | "fr" | "rf"
    )
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(tok) => {
                if tok.kind == TokenKind::EOF {
                    self.finished = true;
                }
                Some(Ok(tok))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use TokenKind::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .map(|tok| tok.expect("lexing failed").kind)
            .collect()
    }

    fn name(s: &str) -> TokenKind {
        Name(s.to_string())
    }

    #[test]
    fn indentation_produces_layout_tokens() {
        let src = "def f():\n    x = 1\n\n    # note\n    return x\ny\n";
        assert_eq!(
            kinds(src),
            vec![
                Def,
                name("f"),
                LParen,
                RParen,
                Colon,
                Newline,
                Indent,
                name("x"),
                Eq,
                Number("1".into()),
                Newline,
                Return,
                name("x"),
                Newline,
                Dedent,
                name("y"),
                Newline,
                EOF,
            ]
        );
    }

    #[test]
    fn missing_final_newline_still_closes_blocks() {
        assert_eq!(
            kinds("if x:\n  pass"),
            vec![If, name("x"), Colon, Newline, Indent, Pass, Newline, Dedent, EOF]
        );
    }

    #[test]
    fn newlines_inside_brackets_are_ignored() {
        assert_eq!(
            kinds("f(1,\n      2)\n"),
            vec![
                name("f"),
                LParen,
                Number("1".into()),
                Comma,
                Number("2".into()),
                RParen,
                Newline,
                EOF
            ]
        );
    }

    #[test]
    fn backslash_joins_lines() {
        assert_eq!(
            kinds("x = 1 + \\\n    2\n"),
            vec![
                name("x"),
                Eq,
                Number("1".into()),
                Plus,
                Number("2".into()),
                Newline,
                EOF
            ]
        );
    }

    #[test]
    fn strings_keep_their_source_text() {
        assert_eq!(
            kinds(r#"rb'\d' f"{x!r}" """a "quoted" b""""#),
            vec![
                String(r"rb'\d'".into()),
                String(r#"f"{x!r}""#.into()),
                String(r#""""a "quoted" b""""#.into()),
                Newline,
                EOF
            ]
        );
    }

    #[test]
    fn numbers_keep_their_source_text() {
        assert_eq!(
            kinds("0x_FF 1_000 3.14e-2 .5 2j"),
            vec![
                Number("0x_FF".into()),
                Number("1_000".into()),
                Number("3.14e-2".into()),
                Number(".5".into()),
                Number("2j".into()),
                Newline,
                EOF
            ]
        );
    }

    #[test]
    fn operators_take_the_longest_match() {
        assert_eq!(
            kinds("a **= b // c -> ... := <<"),
            vec![
                name("a"),
                AugAssign(Box::new(DoubleStar)),
                name("b"),
                DoubleSlash,
                name("c"),
                Arrow,
                Ellipsis,
                Walrus,
                LShift,
                Newline,
                EOF
            ]
        );
    }

    #[test]
    fn tokens_carry_line_and_column() {
        let names: Vec<(TokenKind, Position)> = Lexer::new("x = 1\nif y:\n    zz(w)\n")
            .map(|tok| tok.expect("lexing failed"))
            .filter(|tok| matches!(tok.kind, Name(_)))
            .map(|tok| (tok.kind, tok.pos))
            .collect();
        assert_eq!(
            names,
            vec![
                (name("x"), Position::new(1, 1)),
                (name("y"), Position::new(2, 4)),
                (name("zz"), Position::new(3, 5)),
                (name("w"), Position::new(3, 8)),
            ]
        );
    }

    #[test]
    fn inconsistent_dedent_is_an_error() {
        let err = Lexer::new("if x:\n    a\n  b\n")
            .find_map(Result::err)
            .expect("expected an error");
        assert_eq!(err, ParseError::InconsistentDedent(Position::new(3, 3)));
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let err = Lexer::new("x = 'abc\n").find_map(Result::err).expect("expected an error");
        assert_eq!(err, ParseError::UnterminatedString(Position::new(1, 5)));
    }

    #[test]
    fn unclosed_bracket_is_reported_at_its_opening() {
        let err = Lexer::new("f(1,\n").find_map(Result::err).expect("expected an error");
        assert_eq!(err, ParseError::UnmatchedBracket('(', Position::new(1, 2)));
    }
}
