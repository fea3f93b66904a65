//! Offset and run helpers shared by the engines.
//!
//! Offsets are byte offsets into UTF-8 text. Anything handed in from a host
//! goes through [`clamp_offset`] first so slicing never panics.

/// Clamp `offset` to `text.len()` and down to the nearest char boundary
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// The text before `cursor`, after clamping
pub fn prefix(text: &str, cursor: usize) -> &str {
    &text[..clamp_offset(text, cursor)]
}

/// Start offset of the longest suffix of `text` whose chars all satisfy `pred`
pub fn trailing_run_start(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .rev()
        .take_while(|(_, c)| pred(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// The longest suffix of `text` made of chars satisfying `pred`
pub fn trailing_run(text: &str, pred: impl Fn(char) -> bool) -> &str {
    &text[trailing_run_start(text, pred)..]
}

/// Convert a UTF-16 code unit index (what browsers report) to a byte offset.
/// Indices that land inside a surrogate pair round down.
pub fn utf16_to_byte(text: &str, index: usize) -> usize {
    let mut units = 0;
    for (byte, c) in text.char_indices() {
        let next = units + c.len_utf16();
        if next > index {
            return byte;
        }
        units = next;
    }
    text.len()
}

/// Convert a byte offset to a UTF-16 code unit index
pub fn byte_to_utf16(text: &str, offset: usize) -> usize {
    prefix(text, offset).encode_utf16().count()
}
