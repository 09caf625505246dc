//! Code-point walking over UTF-8 words
//!
//! All length arithmetic in the engine is done in code points. A Cyrillic
//! letter is two bytes in UTF-8, so byte offsets are only ever derived here,
//! from `char_indices`, and always land on a character boundary.

/// Lowercase a single code point without changing the code-point count
///
/// Characters whose lowercase form expands to several code points (e.g.
/// `'İ'`) are returned unchanged, so a folded word has exactly as many code
/// points as the original and tail lengths carry over between the two.
#[inline]
pub fn fold(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => ch,
    }
}

/// Fold every code point of `word`
pub fn fold_str(word: &str) -> String {
    word.chars().map(fold).collect()
}

/// Number of code points in `s`
#[inline]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset where the last `n` code points of `s` begin
///
/// Bounded: asking for more code points than `s` has yields `0`.
pub fn tail_start(s: &str, n: usize) -> usize {
    if n == 0 {
        return s.len();
    }
    s.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Split `s` into `(head, tail)` where `tail` holds the last `n` code points
pub fn split_tail(s: &str, n: usize) -> (&str, &str) {
    s.split_at(tail_start(s, n))
}

/// Whether `suffix` is a tail of `word`, compared code point by code point
///
/// A suffix longer than the word never matches; the empty suffix always does.
pub fn has_tail(word: &str, suffix: &str) -> bool {
    let mut word_chars = word.chars().rev();
    suffix
        .chars()
        .rev()
        .all(|expected| word_chars.next() == Some(expected))
}

/// Whether `ch` is a letter of the Cyrillic script
#[inline]
pub fn is_cyrillic_letter(ch: char) -> bool {
    matches!(ch, '\u{0400}'..='\u{052F}' | '\u{1C80}'..='\u{1C8F}' | '\u{2DE0}'..='\u{2DFF}' | '\u{A640}'..='\u{A69F}')
        && ch.is_alphabetic()
}

/// Whether `word` contains at least one Cyrillic letter
pub fn has_cyrillic_letter(word: &str) -> bool {
    word.chars().any(is_cyrillic_letter)
}

/// Interpret raw bytes as UTF-8
///
/// Returns `None` as soon as an invalid sequence is found; callers treat such
/// input as matching nothing.
pub fn decode(bytes: &[u8]) -> Option<&str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Some(s),
        Err(e) => {
            log::trace!(
                "invalid UTF-8 after {} valid bytes, treating input as opaque",
                e.valid_up_to()
            );
            None
        }
    }
}
