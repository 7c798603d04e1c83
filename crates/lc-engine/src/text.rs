//! Text orchestration: tokenize, group compounds, normalize words, re-thread.

use crate::normalizer::Normalizer;
use crate::tokenizer::{tokenize, Token};

/// Joiners that bind two word tokens into one compound word.
const COMPOUND_JOINERS: [char; 2] = ['-', '\''];

/// A contiguous slice of the input: a (possibly compound) word, or the
/// whitespace/punctuation between words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Word(&'a str),
    Other(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Word(s) | Segment::Other(s) => s,
        }
    }
}

fn joins(tokens: &[Token<'_>], i: usize) -> bool {
    let Some(joiner) = tokens.get(i) else { return false };
    COMPOUND_JOINERS.iter().any(|&c| joiner.is_punct(c))
        && tokens.get(i + 1).is_some_and(Token::is_word)
}

/// Split `text` into segments. A word token followed by any number of
/// (`-` or `'`, word token) pairs forms one compound word, so `e-mail` and
/// `John's` reach the word normalizer whole.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let tokens = tokenize(text);
    let mut segments = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        if !token.is_word() {
            segments.push(Segment::Other(token.text));
            i += 1;
            continue;
        }
        let mut end = token.end();
        i += 1;
        while joins(&tokens, i) {
            end = tokens[i + 1].end();
            i += 2;
        }
        segments.push(Segment::Word(&text[token.offset..end]));
    }

    segments
}

impl Normalizer {
    /// Normalize every word of `text`; whitespace and punctuation pass
    /// through untouched. Empty input comes back empty.
    pub fn normalize_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut out = String::with_capacity(text.len());
        for seg in segment(text) {
            match seg {
                Segment::Word(w) => out.push_str(&self.normalize_word(w)),
                Segment::Other(s) => out.push_str(s),
            }
        }
        tracing::debug!(input = text, output = %out, "normalized text");
        out
    }
}
