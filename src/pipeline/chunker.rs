//! Fixed-size splitting of a document into contiguous fragments.

use crate::errors::SummaryError;

/// Byte offset just past the first `max_chars` characters of `s`.
#[must_use]
fn slice_end_for_max_chars(s: &str, max_chars: usize) -> usize {
    if max_chars == 0 {
        return 0;
    }

    for (count, (idx, _)) in s.char_indices().enumerate() {
        if count == max_chars {
            return idx;
        }
    }
    s.len()
}

/// Split `text` into consecutive, non-overlapping chunks of `chunk_size`
/// characters. Only the last chunk may be shorter; empty text yields no
/// chunks. Character boundaries are never split.
///
/// # Errors
///
/// Returns `SummaryError::ConfigError` when `chunk_size` is zero.
pub fn chunk_text(text: &str, chunk_size: usize) -> Result<Vec<String>, SummaryError> {
    if chunk_size == 0 {
        return Err(SummaryError::ConfigError(
            "chunk size must be greater than zero".to_string(),
        ));
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = slice_end_for_max_chars(rest, chunk_size);
        let (head, tail) = rest.split_at(end);
        chunks.push(head.to_string());
        rest = tail;
    }
    Ok(chunks)
}
