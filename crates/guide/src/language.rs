//! Reply-language validation.
//!
//! The underlying models are not instruction-reliable about language choice
//! and occasionally answer in Chinese or English despite the prompt. The
//! check here is deliberately crude: count Cyrillic characters and treat a
//! reply with too few as wrong-language or empty.

/// Count characters of the Russian alphabet (including ё/Ё).
pub fn native_char_count(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(*c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'))
        .count()
}

/// Whether a reply passes the language check.
pub fn looks_native(text: &str, min_chars: usize) -> bool {
    native_char_count(text) >= min_chars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_only_cyrillic() {
        assert_eq!(native_char_count("Привет, мир!"), 9);
        assert_eq!(native_char_count("hello world"), 0);
        assert_eq!(native_char_count("ёлки-Ёлки"), 8);
        assert_eq!(native_char_count(""), 0);
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!looks_native("Да!", 3));
        assert!(looks_native("Да-с", 3));
        assert!(!looks_native("你好，世界", 3));
        assert!(looks_native("Это рядом с входом.", 3));
    }
}
