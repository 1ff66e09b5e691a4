/// Constant atoms. Numbers and strings keep their source spelling so the
/// unparser can emit them back untouched (prefixes, quotes, escapes, `1_000`).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Ellipsis,
    Number(String),
    /// One entry per adjacent string token (`"a" "b"` is implicit concatenation).
    String(Vec<String>),
}

impl Literal {
    /// `1.real` lexes as a float, so integer literals need parentheses before `.attr`.
    pub fn is_plain_int(&self) -> bool {
        match self {
            Literal::Number(text) => text.chars().all(|c| c.is_ascii_digit() || c == '_'),
            _ => false,
        }
    }
}
