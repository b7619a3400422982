use super::error::UnescapeError;
use super::escaped::{EscapeMap, ESCAPE_MARKER};
use super::unescaper::{Step, Unescaper};

/// Escapes every special byte in `input`.
///
/// Bytes without an entry in [`EscapeMap`] are copied as-is, so the output is
/// never shorter than the input.
pub fn escape<T: AsRef<[u8]>>(input: T) -> Vec<u8> {
    let input = input.as_ref();
    let mut ret = Vec::with_capacity(input.len());
    escape_into(input, &mut ret);
    ret
}

/// Like [`escape`], but appends to an existing buffer.
pub fn escape_into<T: AsRef<[u8]>>(input: T, out: &mut Vec<u8>) {
    let input = input.as_ref();
    out.reserve(input.len());

    for &b in input {
        match EscapeMap::escape_code(b) {
            Some(code) => {
                out.push(ESCAPE_MARKER);
                out.push(code);
            }
            None => out.push(b),
        }
    }
}

/// Decodes escaped text, rejecting anything `escape` could not have produced.
///
/// Fails on a marker followed by a code missing from [`EscapeMap`], and on
/// input that ends with an unconsumed marker.
pub fn unescape<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, UnescapeError> {
    let input = input.as_ref();
    let mut ret = Vec::with_capacity(input.len());
    let mut unescaper = Unescaper::new();

    for &b in input {
        if let Step::Emit(out) = unescaper.feed(b)? {
            ret.push(out);
        }
    }

    unescaper.finish()?;

    Ok(ret)
}

/// Decodes escaped text without ever failing.
///
/// An unknown code is kept with its escaping dropped (`\q` becomes `q`), and
/// a marker at the very end of the input is discarded.
pub fn unescape_lossy<T: AsRef<[u8]>>(input: T) -> Vec<u8> {
    let input = input.as_ref();
    let mut ret = Vec::with_capacity(input.len());
    let mut unescaper = Unescaper::new();

    for &b in input {
        match unescaper.feed(b) {
            Ok(Step::Emit(out)) => ret.push(out),
            Ok(Step::Skip) => {}

            // Fallback should just drop the escaping.
            Err(UnescapeError::InvalidEscapeSequence { byte, .. }) => ret.push(byte),
            Err(UnescapeError::UnterminatedEscape { .. }) => {}
        }
    }

    // A trailing marker is simply dropped.

    ret
}
