// Pure text transforms backing the string-operations submenu.

pub(crate) fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub(crate) fn strip_vowels(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .collect()
}

pub(crate) fn count_occurrences(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}

// Palindrome check over the alphanumeric characters only, case-folded.
pub(crate) fn is_palindrome(text: &str) -> bool {
    let normalized: Vec<char> = text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    let reversed: Vec<char> = normalized.iter().rev().copied().collect();
    normalized == reversed
}

// Uppercases the first letter of every word, lowercases the rest. Word
// boundaries are any non-alphabetic character.
pub(crate) fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}

// Uppercases the first character, lowercases everything after it.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
