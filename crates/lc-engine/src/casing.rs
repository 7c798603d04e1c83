//! Char-for-char case mapping.
//!
//! A char whose mapping expands to more than one char (`ß` → `SS`) is kept
//! as-is, so a rewritten word always has the same chars in the same classes
//! and re-tokenizes to the same shape.

fn single<I: ExactSizeIterator<Item = char>>(c: char, mut mapped: I) -> char {
    if mapped.len() == 1 {
        mapped.next().unwrap_or(c)
    } else {
        c
    }
}

pub fn upper_char(c: char) -> char {
    single(c, c.to_uppercase())
}

pub fn lower_char(c: char) -> char {
    single(c, c.to_lowercase())
}

pub fn to_upper(word: &str) -> String {
    word.chars().map(upper_char).collect()
}

pub fn to_lower(word: &str) -> String {
    word.chars().map(lower_char).collect()
}

/// First char uppercase, the rest lowercase.
pub fn to_proper(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(upper_char(first)).chain(chars.map(lower_char)).collect(),
        None => String::new(),
    }
}

/// At least one cased char and no lowercase ones. `"5G"` and `"DC-AC"` count.
pub fn is_all_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
