//! Word-boundary predicates shared by the scanner and the substitution step.
//!
//! A word character is whatever the regex crate's Unicode `\w` accepts
//! (letters, marks, decimal digits, connector punctuation, join controls),
//! so these predicates agree with the scanner's `\b` assertions.

use regex::Regex;
use std::sync::LazyLock;

static WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\w\z").expect("word character pattern is valid"));

/// Check if a character is part of a word
pub fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// True if the byte offset `idx` sits between a word character and a
/// non-word character (string edges count as non-word).
///
/// Offsets that are out of range or not on a char boundary are never
/// boundaries.
pub fn is_word_boundary(text: &str, idx: usize) -> bool {
    let (Some(head), Some(tail)) = (text.get(..idx), text.get(idx..)) else {
        return false;
    };
    let before = head.chars().next_back().is_some_and(is_word_char);
    let after = tail.chars().next().is_some_and(is_word_char);
    before != after
}

/// True if `text[start..end]` is bounded by word boundaries on both sides
pub fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    start < end && is_word_boundary(text, start) && is_word_boundary(text, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('é'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('.'));
    }

    #[test]
    fn test_word_chars_follow_unicode_word_class() {
        // Combining acute accent (Mn) belongs to the word
        assert!(is_word_char('\u{301}'));
        // Superscript two (No) is not a decimal digit
        assert!(!is_word_char('\u{b2}'));
        assert!(is_word_char('\u{663}')); // Arabic-Indic three (Nd)
        assert!(is_word_char('\u{203f}')); // undertie (Pc)
    }

    #[test]
    fn test_boundaries_around_marks_and_superscripts() {
        let text = "Jose\u{301} met";
        let end = "Jose\u{301}".len();
        assert!(is_whole_word(text, 0, end));
        // No boundary between the base letter and its accent
        assert!(!is_word_boundary(text, 4));

        let text = "Meeting\u{b2} notes";
        assert!(is_whole_word(text, 0, 7));
    }

    #[test]
    fn test_edges_are_boundaries_next_to_words() {
        assert!(is_word_boundary("Meeting", 0));
        assert!(is_word_boundary("Meeting", 7));
        assert!(!is_word_boundary(" ", 0));
        assert!(!is_word_boundary("", 0));
    }

    #[test]
    fn test_inside_word_is_not_boundary() {
        // "Meeting|s"
        assert!(!is_word_boundary("Meetings", 7));
        assert!(is_word_boundary("Meeting.", 7));
        assert!(is_word_boundary("a-b", 1));
        assert!(is_word_boundary("a-b", 2));
    }

    #[test]
    fn test_invalid_offsets() {
        assert!(!is_word_boundary("abc", 10));
        // 'é' is two bytes; offset 1 is inside it
        assert!(!is_word_boundary("é", 1));
    }

    #[test]
    fn test_whole_word() {
        let text = "the Meeting and Meetings";
        assert!(is_whole_word(text, 4, 11));
        assert!(!is_whole_word(text, 16, 23));
        assert!(!is_whole_word(text, 4, 4));
    }
}
