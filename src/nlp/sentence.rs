//! Sentence segmentation
//!
//! Splits raw transcript text into [`Sentence`] spans with original byte
//! offsets. Splitting is terminator-driven (`.`, `!`, `?`, `…`) with
//! suppression rules for abbreviations, single initials, and decimals, so
//! "Dr. Smith paid $3.50." comes out as one sentence.
//!
//! The rules are byte-offset-safe on any UTF-8 input. The abbreviation table
//! is English; for other languages it only ever suppresses splits that would
//! not occur anyway, so segmentation degrades to plain terminator splitting.

use crate::types::Sentence;
use rustc_hash::FxHashSet;

/// Abbreviations whose trailing period does not end a sentence.
///
/// Stored without the trailing dot, lowercase. Multi-dot abbreviations
/// ("e.g.", "u.s.") are covered by the single-initial rule for their inner
/// periods and by these entries for the final one.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "st", "sr", "jr", "vs", "etc", "approx",
    "dept", "est", "fig", "no", "vol", "inc", "ltd", "co", "e.g", "i.e", "u.s", "u.k", "a.m",
    "p.m",
];

/// Sentence splitter with abbreviation-aware boundary detection
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: FxHashSet<String>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter {
    /// Create a splitter with the built-in abbreviation table
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Add extra abbreviations (without the trailing dot)
    pub fn with_abbreviations(mut self, extra: &[&str]) -> Self {
        for abbr in extra {
            self.abbreviations.insert(abbr.to_lowercase());
        }
        self
    }

    /// Split text into sentences, preserving byte offsets into `text`.
    ///
    /// Text without any terminator comes back as a single sentence.
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !is_terminator(c) {
                continue;
            }

            // Absorb runs of terminators ("?!", "...") and closing marks so
            // they stay attached to the sentence.
            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if is_terminator(next) || is_closer(next) {
                    end = j + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            if c == '.' && self.suppresses_split(&text[start..i]) {
                continue;
            }

            if !is_boundary(text, end) {
                continue;
            }

            push_sentence(text, start, end, &mut sentences);
            start = end;
        }

        push_sentence(text, start, text.len(), &mut sentences);
        sentences
    }

    /// Whether the token preceding a period blocks a sentence boundary.
    fn suppresses_split(&self, prefix: &str) -> bool {
        let word = prefix
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(['(', '[', '"', '\'', '“', '‘']);
        if word.is_empty() {
            return false;
        }

        // Single initial: "J." in "J. Smith"
        let mut letters = word.chars();
        if let (Some(first), None) = (letters.next(), letters.next()) {
            if first.is_alphabetic() {
                return true;
            }
        }

        self.abbreviations.contains(&word.to_lowercase())
    }
}

/// A confirmed boundary: end of input, or whitespace followed by an
/// uppercase letter, digit, or opening mark. The whitespace requirement also
/// keeps decimals ("3.14") intact.
fn is_boundary(text: &str, end: usize) -> bool {
    let rest = &text[end..];
    if rest.is_empty() {
        return true;
    }
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => {}
        _ => return false,
    }
    match rest.trim_start().chars().next() {
        None => true,
        Some(c) => c.is_uppercase() || c.is_numeric() || is_opener(c),
    }
}

fn push_sentence(text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
    let raw = &text[start..end];
    let trimmed_start = raw.trim_start();
    let lead = raw.len() - trimmed_start.len();
    let trimmed = trimmed_start.trim_end();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + lead;
    out.push(Sentence {
        text: trimmed.to_string(),
        index: out.len(),
        start: offset,
        end: offset + trimmed.len(),
    });
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '“' | '‘' | '¡' | '¿')
}
