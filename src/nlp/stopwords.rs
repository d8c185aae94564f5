//! Stopword filtering
//!
//! Multi-language stopword filtering using the `stop-words` crate. Stopwords
//! are excluded from term vectors so that shared function words ("the", "is")
//! do not inflate sentence similarity.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter marking words that carry no significance for similarity
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter for the given language code.
    ///
    /// Unknown codes fall back to English, which matches the transcript
    /// fetcher's own English fallback.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: load_stopwords(language),
        }
    }

    /// Create an empty filter (no word is a stopword)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check whether a word is a stopword. Comparison is case-insensitive;
    /// pass lowercased input to skip the allocation.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter has no stopwords
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

fn load_stopwords(language: &str) -> FxHashSet<String> {
    let lang = match language
        .to_lowercase()
        .split(['-', '_'])
        .next()
        .unwrap_or("en")
    {
        "en" => LANGUAGE::English,
        "de" => LANGUAGE::German,
        "fr" => LANGUAGE::French,
        "es" => LANGUAGE::Spanish,
        "it" => LANGUAGE::Italian,
        "pt" => LANGUAGE::Portuguese,
        "nl" => LANGUAGE::Dutch,
        "ru" => LANGUAGE::Russian,
        "sv" => LANGUAGE::Swedish,
        "no" => LANGUAGE::Norwegian,
        "da" => LANGUAGE::Danish,
        "fi" => LANGUAGE::Finnish,
        "hu" => LANGUAGE::Hungarian,
        "tr" => LANGUAGE::Turkish,
        "pl" => LANGUAGE::Polish,
        "ar" => LANGUAGE::Arabic,
        _ => LANGUAGE::English,
    };

    get(lang).iter().map(|s| s.to_lowercase()).collect()
}
