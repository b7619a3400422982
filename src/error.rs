use std::ascii;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum UnescapeError {
    #[error("invalid escape sequence \"\\{}\" at offset {position}", escape_byte(.byte))]
    InvalidEscapeSequence { byte: u8, position: usize },

    #[error("unterminated escape at offset {position}")]
    UnterminatedEscape { position: usize },
}

fn escape_byte(byte: &u8) -> ascii::EscapeDefault {
    ascii::escape_default(*byte)
}

impl UnescapeError {
    /// Offset into the input where decoding failed.
    pub fn position(&self) -> usize {
        match *self {
            UnescapeError::InvalidEscapeSequence { position, .. } => position,
            UnescapeError::UnterminatedEscape { position } => position,
        }
    }
}
