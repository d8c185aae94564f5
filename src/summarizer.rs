//! Summarization pipeline facade
//!
//! [`Summarizer`] wires the stages together: sentence splitting, term
//! vectors, similarity graph, centrality ranking, and summary assembly. All
//! intermediate state is local to one `summarize` call, so a single
//! `Summarizer` can serve many requests without any shared mutable state.

use crate::error::{Error, Result};
use crate::graph::builder::SimilarityGraphBuilder;
use crate::nlp::sentence::SentenceSplitter;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::term_vector::TermVectorBuilder;
use crate::rank::lexrank::LexRank;
use crate::summary::{Summary, SummaryAssembler};
use crate::transcript::fetcher::TranscriptSource;
use crate::transcript::format;
use crate::types::{SummarizerConfig, SummaryLength, Transcript};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Extractive transcript summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    splitter: SentenceSplitter,
    stopwords: StopwordFilter,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with default config
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create with custom config. The stopword set is loaded once here for
    /// the configured language.
    pub fn with_config(config: SummarizerConfig) -> Self {
        let stopwords = StopwordFilter::new(&config.language);
        Self {
            config,
            splitter: SentenceSplitter::new(),
            stopwords,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize raw text at the requested length tier.
    ///
    /// Fails with [`Error::InsufficientContent`] when the text splits into
    /// fewer than `config.min_sentences` sentences; the ranker never sees
    /// such input.
    pub fn summarize(&self, text: &str, length: SummaryLength) -> Result<Summary> {
        trace_stage!("split");
        let sentences = self.splitter.split(text);
        if sentences.len() < self.config.min_sentences {
            return Err(Error::InsufficientContent {
                found: sentences.len(),
                required: self.config.min_sentences,
            });
        }

        trace_stage!("vectorize");
        let builder = TermVectorBuilder::new(&self.stopwords);
        let vectors: Vec<_> = sentences.iter().map(|s| builder.build(&s.text)).collect();

        trace_stage!("graph");
        let graph = SimilarityGraphBuilder::new()
            .with_similarity_floor(self.config.similarity_floor)
            .build(&vectors);

        trace_stage!("rank");
        let ranks = LexRank::from_config(&self.config).run(&graph);

        trace_stage!("assemble");
        let assembler = SummaryAssembler::with_config(self.config.clone());
        Ok(assembler.assemble(&sentences, &ranks, length))
    }

    /// Summarize an already-fetched transcript
    pub fn summarize_transcript(
        &self,
        transcript: &Transcript,
        length: SummaryLength,
    ) -> Result<Summary> {
        self.summarize(&format::format_plain(transcript), length)
    }

    /// Fetch a video's transcript from `source` and summarize it.
    ///
    /// This is the composition the fetch-summary request maps onto: fetch,
    /// flatten to plain text, summarize.
    pub fn summarize_video(
        &self,
        source: &dyn TranscriptSource,
        video_id: &str,
        language: Option<&str>,
        length: SummaryLength,
    ) -> Result<Summary> {
        let transcript = source.fetch(video_id, language)?;
        self.summarize_transcript(&transcript, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_SENTENCES: &str =
        "Cats are mammals. Dogs are mammals. The sun is a star. Stars emit light.";

    #[test]
    fn test_summary_sentences_are_subset_in_original_order() {
        let summarizer = Summarizer::new();
        let summary = summarizer
            .summarize(FOUR_SENTENCES, SummaryLength::Short)
            .unwrap();

        assert!(!summary.sentences.is_empty());
        let mut last_index = None;
        for sentence in &summary.sentences {
            assert!(FOUR_SENTENCES.contains(&sentence.text));
            if let Some(previous) = last_index {
                assert!(sentence.index > previous);
            }
            last_index = Some(sentence.index);
        }
    }

    #[test]
    fn test_short_scenario_with_two_sentence_target() {
        let summarizer = Summarizer::with_config(
            SummarizerConfig::new().with_tier_target(SummaryLength::Short, 2),
        );
        let summary = summarizer
            .summarize(FOUR_SENTENCES, SummaryLength::Short)
            .unwrap();

        assert_eq!(summary.sentence_count, 2);
        let expected_words: usize = summary.sentences.iter().map(|s| s.word_count()).sum();
        assert_eq!(summary.word_count, expected_words);
    }

    #[test]
    fn test_determinism() {
        let summarizer = Summarizer::new();

        let a = summarizer
            .summarize(FOUR_SENTENCES, SummaryLength::Medium)
            .unwrap();
        let b = summarizer
            .summarize(FOUR_SENTENCES, SummaryLength::Medium)
            .unwrap();

        assert_eq!(a.text, b.text);
        assert_eq!(a.word_count, b.word_count);
    }

    #[test]
    fn test_single_sentence_is_insufficient() {
        let summarizer = Summarizer::new();
        let err = summarizer
            .summarize("Just one sentence here.", SummaryLength::Short)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InsufficientContent {
                found: 1,
                required: 3
            }
        ));
    }

    #[test]
    fn test_empty_input_is_insufficient() {
        let summarizer = Summarizer::new();
        let err = summarizer.summarize("", SummaryLength::Short).unwrap_err();

        assert!(matches!(err, Error::InsufficientContent { found: 0, .. }));
    }

    #[test]
    fn test_min_sentences_is_configurable() {
        let summarizer =
            Summarizer::with_config(SummarizerConfig::new().with_min_sentences(2));
        let summary = summarizer
            .summarize("Cats purr. Cats sleep.", SummaryLength::Short)
            .unwrap();

        assert_eq!(summary.sentence_count, 2);
    }
}
