use crate::python::ast::position::Position;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Delimiters
    LParen,    // '('
    RParen,    // ')'
    LBracket,  // '['
    RBracket,  // ']'
    LBrace,    // '{'
    RBrace,    // '}'
    Comma,     // ','
    Colon,     // ':'
    Semicolon, // ';'
    Dot,       // '.'
    Ellipsis,  // '...'
    Arrow,     // '->'
    At,        // '@'
    Eq,        // '='
    Walrus,    // ':='

    // Operators
    Plus,        // '+'
    Minus,       // '-'
    Star,        // '*'
    DoubleStar,  // '**'
    Slash,       // '/'
    DoubleSlash, // '//'
    Percent,     // '%'
    Amp,         // '&'
    Pipe,        // '|'
    Caret,       // '^'
    Tilde,       // '~'
    LShift,      // '<<'
    RShift,      // '>>'
    EqEq,        // '=='
    NotEq,       // '!='
    Lt,          // '<'
    LtEq,        // '<='
    Gt,          // '>'
    GtEq,        // '>='

    /// Augmented assignment; the payload is the operator without `=` (`+=` holds `Plus`).
    AugAssign(Box<TokenKind>),

    // Literals, kept as written
    Number(String),
    String(String),

    // --- identifiers & keywords ---
    Name(String),
    False,
    None,
    True,
    And,
    As,
    Assert,
    Async,
    Await,
    Break,
    Class,
    Continue,
    Def,
    Del,
    Elif,
    Else,
    Except,
    Finally,
    For,
    From,
    Global,
    If,
    Import,
    In,
    Is,
    Lambda,
    Nonlocal,
    Not,
    Or,
    Pass,
    Raise,
    Return,
    Try,
    While,
    With,
    Yield,

    // Layout
    Newline,
    Indent,
    Dedent,

    /// End‐of‐input sentinel
    EOF,
}

impl TokenKind {
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        Some(match ident {
            "False" => TokenKind::False,
            "None" => TokenKind::None,
            "True" => TokenKind::True,
            "and" => TokenKind::And,
            "as" => TokenKind::As,
            "assert" => TokenKind::Assert,
            "async" => TokenKind::Async,
            "await" => TokenKind::Await,
            "break" => TokenKind::Break,
            "class" => TokenKind::Class,
            "continue" => TokenKind::Continue,
            "def" => TokenKind::Def,
            "del" => TokenKind::Del,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "except" => TokenKind::Except,
            "finally" => TokenKind::Finally,
            "for" => TokenKind::For,
            "from" => TokenKind::From,
            "global" => TokenKind::Global,
            "if" => TokenKind::If,
            "import" => TokenKind::Import,
            "in" => TokenKind::In,
            "is" => TokenKind::Is,
            "lambda" => TokenKind::Lambda,
            "nonlocal" => TokenKind::Nonlocal,
            "not" => TokenKind::Not,
            "or" => TokenKind::Or,
            "pass" => TokenKind::Pass,
            "raise" => TokenKind::Raise,
            "return" => TokenKind::Return,
            "try" => TokenKind::Try,
            "while" => TokenKind::While,
            "with" => TokenKind::With,
            "yield" => TokenKind::Yield,
            _ => return None,
        })
    }

    /// Tokens that can close a parenthesised tuple, call or display, or end a statement.
    pub fn ends_expression_list(&self) -> bool {
        matches!(
            self,
            TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::Newline
                | TokenKind::Semicolon
                | TokenKind::Eq
                | TokenKind::AugAssign(_)
                | TokenKind::Colon
                | TokenKind::In
                | TokenKind::EOF
        )
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}
