//! Log truncation for response bodies.
//!
//! Catalog listings (ingredients in particular) are large; logging them in
//! full at `debug` level buries everything else.

/// Maximum number of characters kept in a logged body.
const TRUNCATE_CHARS: usize = 256;

/// Truncate a string for logging.
///
/// Counts characters rather than bytes, so multi-byte text is never split.
/// Longer input keeps its first `TRUNCATE_CHARS` characters followed by a
/// marker with the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_CHARS) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
