use thiserror::Error;

use crate::python::ast::position::Position;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected end of input, at {0}")]
    UnexpectedEOF(Position),

    #[error("Unexpected char '{0}', at {1}")]
    UnexpectedChar(char, Position),

    #[error("Expected identifier, but found {0}, at {1}")]
    ExpectedIdentifier(String, Position),

    #[error("Expected expression, but found {0}, at {1}")]
    ExpectedExpression(String, Position),

    #[error("Expected {expected}, but found {found}, at {pos}")]
    UnexpectedToken {
        expected: String,
        found: String,
        pos: Position,
    },

    #[error("Unterminated string, expected closing quote, at {0}")]
    UnterminatedString(Position),

    #[error("Unexpected indent, at {0}")]
    UnexpectedIndent(Position),

    #[error("Unindent does not match any outer indentation level, at {0}")]
    InconsistentDedent(Position),

    #[error("Unmatched '{0}', at {1}")]
    UnmatchedBracket(char, Position),

    #[error("Cannot assign to this expression, at {0}")]
    InvalidAssignmentTarget(Position),

    #[error("{0}, at {1}")]
    General(String, Position),
}

impl ParseError {
    pub fn pos(&self) -> Position {
        match self {
            ParseError::UnexpectedEOF(pos)
            | ParseError::UnexpectedChar(_, pos)
            | ParseError::ExpectedIdentifier(_, pos)
            | ParseError::ExpectedExpression(_, pos)
            | ParseError::UnexpectedToken { pos, .. }
            | ParseError::UnterminatedString(pos)
            | ParseError::UnexpectedIndent(pos)
            | ParseError::InconsistentDedent(pos)
            | ParseError::UnmatchedBracket(_, pos)
            | ParseError::InvalidAssignmentTarget(pos)
            | ParseError::General(_, pos) => *pos,
        }
    }
}
