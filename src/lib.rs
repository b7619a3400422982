//! A small backslash escaping codec for arbitrary bytes.
//!
//! [`escape`] writes every byte listed in [`EscapeMap`] as `\` followed by a
//! one-byte code and leaves everything else alone. [`unescape`] reverses it,
//! and for any input `unescape(escape(x))` gives back `x`.
//!
//! ```
//! use byte_escape::{escape, unescape};
//!
//! let escaped = escape("a\\b\n");
//! assert_eq!(escaped, b"a\\\\b\\n");
//! assert_eq!(unescape(&escaped).unwrap(), b"a\\b\n");
//! ```
//!
//! [`unescape`] is strict. [`unescape_lossy`] never fails: unknown codes lose
//! their escaping and a trailing marker is dropped.

mod codec;
mod error;
mod escaped;
mod unescaper;

pub use codec::{escape, escape_into, unescape, unescape_lossy};
pub use error::UnescapeError;
pub use escaped::{EscapeMap, ESCAPE_MARKER};
pub use unescaper::{State, Step, Unescaper};
