use super::position::Position;

/// Position-carrying wrapper shared by statements and expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub kind: T,
    pub pos: Position,
}

impl<T> Located<T> {
    #[inline]
    pub fn new(kind: T, pos: Position) -> Self {
        Self { kind, pos }
    }

    /// Node without a source location, for trees built by a rewrite.
    #[inline]
    pub fn synthetic(kind: T) -> Self {
        Self::new(kind, Position::UNKNOWN)
    }
}

