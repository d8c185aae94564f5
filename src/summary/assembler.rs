//! Summary assembler
//!
//! Selects the top-ranked sentences for the requested length tier, restores
//! original document order, and derives word count and reading time.

use crate::rank::RankResult;
use crate::types::{Sentence, SummarizerConfig, SummaryLength};
use serde::Serialize;

/// An assembled extractive summary
///
/// Sentences appear in original document order regardless of their rank, so
/// the joined text keeps the narrative flow of the source.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Selected sentences, sorted by original index
    pub sentences: Vec<Sentence>,
    /// The selected sentences joined with single spaces
    pub text: String,
    /// Whitespace-separated word count of `text`
    pub word_count: usize,
    /// Estimated reading time in whole minutes (minimum 1)
    pub reading_time_minutes: usize,
    /// Number of selected sentences
    pub sentence_count: usize,
}

/// Assembles summaries from ranked sentences
#[derive(Debug, Clone)]
pub struct SummaryAssembler {
    config: SummarizerConfig,
}

impl Default for SummaryAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryAssembler {
    /// Create an assembler with default config
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self { config }
    }

    /// Assemble a summary for the requested length tier.
    ///
    /// Selection takes the top-K sentences by score with ties broken by
    /// ascending original index, then re-sorts the picks by original index.
    /// A target larger than the sentence count returns all sentences.
    pub fn assemble(
        &self,
        sentences: &[Sentence],
        ranks: &RankResult,
        length: SummaryLength,
    ) -> Summary {
        let target = length.sentence_target(&self.config).min(sentences.len());

        let mut selected: Vec<usize> = ranks
            .top_n(target)
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        selected.sort_unstable();

        let picked: Vec<Sentence> = selected
            .into_iter()
            .filter_map(|index| sentences.get(index).cloned())
            .collect();

        let text = picked
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let word_count = text.split_whitespace().count();

        Summary {
            sentence_count: picked.len(),
            reading_time_minutes: self.reading_time(word_count),
            word_count,
            text,
            sentences: picked,
        }
    }

    /// `ceil(word_count / reading_wpm)` minutes, with a one-minute floor.
    fn reading_time(&self, word_count: usize) -> usize {
        word_count.div_ceil(self.config.reading_wpm).max(1)
    }
}
