use std::fmt;

/// Errors that can occur when constructing a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The tile count is not a perfect square.
    NotSquare(usize),
    /// A tile value lies outside `0..len`.
    TileOutOfRange { value: u8, len: usize },
    /// A tile value appears more than once.
    DuplicateTile(u8),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare(len) => {
                write!(f, "board has {len} tiles, which is not a perfect square")
            }
            Self::TileOutOfRange { value, len } => {
                write!(f, "tile value {value} is outside 0..{len}")
            }
            Self::DuplicateTile(value) => {
                write!(f, "tile value {value} appears more than once")
            }
        }
    }
}

impl std::error::Error for BoardError {}
