//! Character-aware truncation helpers for card labels.
//!
//! Both helpers count Unicode scalar values, so a multi-byte character is
//! never split in half.

use std::borrow::Cow;

const ELLIPSIS: char = '…';

/// First `limit` characters of `text`, borrowed from the input.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Shortens `text` to exactly `limit` characters by replacing the middle with `…`.
///
/// Text that already fits is returned unchanged. The head gets the extra
/// character when the kept length is odd.
pub fn middle_truncate(text: &str, limit: usize) -> Cow<'_, str> {
    let len = text.chars().count();
    if len <= limit {
        return Cow::Borrowed(text);
    }
    if limit == 0 {
        return Cow::Borrowed("");
    }

    let kept = limit - 1;
    let head_len = kept - kept / 2;
    let tail_len = kept / 2;

    let mut out = String::with_capacity(limit * 4);
    out.push_str(truncate_chars(text, head_len));
    out.push(ELLIPSIS);
    out.extend(text.chars().skip(len - tail_len));
    Cow::Owned(out)
}
