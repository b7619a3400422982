/// The byte that introduces an escape sequence.
pub const ESCAPE_MARKER: u8 = b'\\';

/// The fixed table of special bytes and the one-byte codes they are written
/// as after an [`ESCAPE_MARKER`].
///
/// | raw byte   | code |
/// |------------|------|
/// | `\`        | `\`  |
/// | NUL (0x00) | `0`  |
/// | TAB (0x09) | `t`  |
/// | LF (0x0A)  | `n`  |
/// | CR (0x0D)  | `r`  |
///
/// Anything consuming escaped text must agree on this table. Both directions
/// are injective, so every code decodes back to exactly one raw byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EscapeMap;

impl EscapeMap {
    /// Every `(raw, code)` pair in the table.
    pub const ENTRIES: [(u8, u8); 5] = [
        (ESCAPE_MARKER, ESCAPE_MARKER),
        (b'\0', b'0'),
        (b'\t', b't'),
        (b'\n', b'n'),
        (b'\r', b'r'),
    ];

    /// Returns the code a raw byte is escaped as, or `None` if it passes
    /// through verbatim.
    #[inline(always)]
    pub fn escape_code(raw: u8) -> Option<u8> {
        match raw {
            b'\\' => Some(b'\\'),
            b'\0' => Some(b'0'),
            b'\t' => Some(b't'),
            b'\n' => Some(b'n'),
            b'\r' => Some(b'r'),
            _ => None,
        }
    }

    /// Returns the raw byte an escape code stands for, or `None` if the code
    /// is not in the table.
    #[inline(always)]
    pub fn unescape_code(code: u8) -> Option<u8> {
        match code {
            b'\\' => Some(b'\\'),
            b'0' => Some(b'\0'),
            b't' => Some(b'\t'),
            b'n' => Some(b'\n'),
            b'r' => Some(b'\r'),
            _ => None,
        }
    }

    /// Whether `raw` has to be escaped.
    #[inline]
    pub fn is_special(raw: u8) -> bool {
        Self::escape_code(raw).is_some()
    }
}
