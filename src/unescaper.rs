use super::error::UnescapeError;
use super::escaped::{EscapeMap, ESCAPE_MARKER};

/// Where the decoder is relative to an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Normal,

    /// The previous byte was an unconsumed escape marker.
    Escaping,
}

impl Default for State {
    fn default() -> Self {
        State::Normal
    }
}

/// What to do with the byte that was just fed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Emit(u8),
    Skip,
}

/// Byte-at-a-time decoder for escaped text.
///
/// Each call to [`Unescaper::feed`] moves the machine between
/// [`State::Normal`] and [`State::Escaping`] and says whether a decoded byte
/// came out of it. Once the input is exhausted, [`Unescaper::finish`]
/// reports a marker that was never followed by a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unescaper {
    state: State,
    offset: usize,
}

impl Unescaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Offset of the next byte to be fed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes one byte of escaped input.
    ///
    /// An unknown code still returns the machine to [`State::Normal`], so a
    /// caller that chooses to recover can keep feeding.
    pub fn feed(&mut self, byte: u8) -> Result<Step, UnescapeError> {
        let position = self.offset;
        self.offset += 1;

        match self.state {
            State::Normal if byte == ESCAPE_MARKER => {
                self.state = State::Escaping;
                Ok(Step::Skip)
            }
            State::Normal => Ok(Step::Emit(byte)),
            State::Escaping => {
                self.state = State::Normal;
                match EscapeMap::unescape_code(byte) {
                    Some(raw) => Ok(Step::Emit(raw)),
                    None => Err(UnescapeError::InvalidEscapeSequence { byte, position }),
                }
            }
        }
    }

    /// Checks that the input didn't end partway through an escape sequence.
    pub fn finish(&self) -> Result<(), UnescapeError> {
        match self.state {
            State::Normal => Ok(()),
            // The dangling marker is always the last byte fed.
            State::Escaping => Err(UnescapeError::UnterminatedEscape {
                position: self.offset - 1,
            }),
        }
    }
}
