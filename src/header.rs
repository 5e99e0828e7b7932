//! Accept header tokenization.
//!
//! An `Accept`-family header value is a comma-separated list in which
//! parameter values may be double-quoted and contain commas of their own
//! (`text/html;version="1,2"`). The tokenizer therefore splits only on commas
//! that sit outside double quotes.

use crate::error::{NegotiationError, Result};

/// Split a raw header into trimmed, non-empty tokens.
///
/// Commas inside double quotes do not split. Empty or whitespace-only
/// segments are dropped, so a header like `"gzip,,br"` yields two tokens.
///
/// # Errors
///
/// Returns [`NegotiationError::InvalidHeader`] when a double quote is left
/// unterminated, since the segment boundaries are then undecidable.
pub fn split_header(header: &str) -> Result<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    // `,` and `"` are ASCII, so slicing at their byte offsets is safe.
    for (i, byte) in header.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                push_trimmed(&mut tokens, &header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if in_quotes {
        return Err(NegotiationError::InvalidHeader {
            header: header.to_owned(),
        });
    }

    push_trimmed(&mut tokens, &header[start..]);
    Ok(tokens)
}

fn push_trimmed<'a>(tokens: &mut Vec<&'a str>, segment: &'a str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed);
    }
}
