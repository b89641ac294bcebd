// Pali letter classes and char-indexed string helpers
//
// Pali text is romanized with diacritics (ā ī ū ṃ ṅ ñ ṭ ḍ ṇ ḷ), so every
// length, slice and "last letter" operation in this crate counts chars, never
// bytes.

// ---------------------------------------------------------------------------
// Letter classes
// ---------------------------------------------------------------------------

/// Pali vowels: a ā i ī u ū e o
pub const PALI_VOWELS: &[char] = &['a', 'ā', 'i', 'ī', 'u', 'ū', 'e', 'o'];

/// Pali consonants. The niggahīta ṃ is neither vowel nor consonant.
pub const PALI_CONSONANTS: &[char] = &[
    'k', 'g', 'ṅ', 'c', 'j', 'ñ', 'ṭ', 'ḍ', 'ṇ', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r', 'l', 'v',
    's', 'h', 'ḷ',
];

/// Returns true if `c` is a Pali vowel.
pub fn is_vowel(c: char) -> bool {
    PALI_VOWELS.contains(&c)
}

/// Returns true if `c` is a Pali consonant.
///
/// Aspirates are written as two letters (kh, gh, ...) and classify through
/// their first and second letters independently.
pub fn is_consonant(c: char) -> bool {
    PALI_CONSONANTS.contains(&c)
}

// ---------------------------------------------------------------------------
// Char-indexed helpers
// ---------------------------------------------------------------------------

/// Last char of `s`, if any.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// First char of `s`, if any.
pub fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Number of chars in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `s` without its last `n` chars. Removing more chars than exist yields "".
pub fn drop_last_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}

/// `s` without its first `n` chars. Removing more chars than exist yields "".
pub fn drop_first_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Returns true if the word ends in a vowel.
pub fn ends_with_vowel(s: &str) -> bool {
    last_char(s).is_some_and(is_vowel)
}

/// Returns true if the word ends in a consonant.
pub fn ends_with_consonant(s: &str) -> bool {
    last_char(s).is_some_and(is_consonant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_and_consonants_are_disjoint() {
        for v in PALI_VOWELS {
            assert!(!is_consonant(*v), "{v} is both");
        }
        assert!(!is_consonant('ṃ'));
        assert!(!is_vowel('ṃ'));
        assert!(is_vowel('ā'));
        assert!(!is_vowel('x'));
        assert!(!is_consonant('x'));
    }

    #[test]
    fn drop_counts_chars_not_bytes() {
        assert_eq!(drop_last_chars("kathā", 1), "kath");
        assert_eq!(drop_last_chars("dhammaṃ", 2), "dhamm");
        assert_eq!(drop_last_chars("ab", 5), "");
        assert_eq!(drop_last_chars("ab", 0), "ab");
        assert_eq!(drop_first_chars("ākāsa", 1), "kāsa");
        assert_eq!(drop_first_chars("a", 3), "");
    }

    #[test]
    fn edge_letters() {
        assert_eq!(last_char("pacī"), Some('ī'));
        assert_eq!(first_char("ūna"), Some('ū'));
        assert_eq!(last_char(""), None);
        assert_eq!(char_len("kathā"), 5);
        assert!(ends_with_vowel("pace"));
        assert!(ends_with_consonant("pāc"));
        assert!(!ends_with_vowel(""));
    }
}
