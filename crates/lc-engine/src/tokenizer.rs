//! Lossless tokenizer: word runs, whitespace runs, single punctuation chars.

/// Token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Whitespace,
    Punctuation,
}

/// A slice of the input with its class. Concatenating every token's text
/// in order reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    /// Byte offset in the input.
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// True if this is the single punctuation char `c`.
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punctuation && self.text.chars().eq(std::iter::once(c))
    }
}

/// Letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn classify(c: char) -> TokenKind {
    if is_word_char(c) {
        TokenKind::Word
    } else if c.is_whitespace() {
        TokenKind::Whitespace
    } else {
        TokenKind::Punctuation
    }
}

/// Split `text` into tokens, longest match first.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let kind = classify(c);
        let mut end = start + c.len_utf8();
        if kind != TokenKind::Punctuation {
            while let Some(&(i, next)) = chars.peek() {
                if classify(next) != kind {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
        }
        tokens.push(Token { text: &text[start..end], kind, offset: start });
    }

    tokens
}

