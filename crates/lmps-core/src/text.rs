//! UTF-16 column arithmetic.
//!
//! LSP positions count UTF-16 code units while Rust strings index by byte.
//! Input scripts are almost always ASCII, but comments and file names can
//! carry arbitrary UTF-8, so every range the server emits goes through
//! these helpers.

/// Returns the UTF-16 length of a string.
pub fn utf16_len(s: &str) -> u32 {
    s.encode_utf16().count() as u32
}

/// Converts a byte offset within `line` to a UTF-16 column.
///
/// The offset must lie on a character boundary; offsets past the end of the
/// line clamp to the line's UTF-16 length.
pub fn byte_to_utf16_col(line: &str, byte: usize) -> u32 {
    let clamped = byte.min(line.len());
    utf16_len(&line[..clamped])
}

/// Converts a UTF-16 column to a byte offset within `line`.
///
/// Returns `None` when the column is past the end of the line or falls
/// inside a surrogate pair.
pub fn utf16_col_to_byte(line: &str, col: u32) -> Option<usize> {
    let mut units = 0u32;
    for (offset, ch) in line.char_indices() {
        if units == col {
            return Some(offset);
        }
        units += ch.len_utf16() as u32;
        if units > col {
            return None;
        }
    }
    (units == col).then_some(line.len())
}
