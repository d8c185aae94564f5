//! Core types shared across the summarization pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for the summarization pipeline
///
/// The convergence constants (`convergence_threshold`, `max_iterations`)
/// follow the usual LexRank settings; both are overridable for callers that
/// want tighter or looser ranking.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Language code used for stopword filtering (e.g. "en")
    pub language: String,
    /// Damping factor for the centrality random walk (typically 0.85)
    pub damping: f64,
    /// Maximum number of power iterations
    pub max_iterations: usize,
    /// L1 convergence threshold between successive score vectors
    pub convergence_threshold: f64,
    /// Minimum number of sentences required before ranking
    pub min_sentences: usize,
    /// Pairwise similarities below this value are dropped from the graph
    pub similarity_floor: f64,
    /// Reading speed used for the reading-time estimate
    pub reading_wpm: usize,
    /// Sentence target for [`SummaryLength::Short`]
    pub short_sentences: usize,
    /// Sentence target for [`SummaryLength::Medium`]
    pub medium_sentences: usize,
    /// Sentence target for [`SummaryLength::Detailed`]
    pub detailed_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-4,
            min_sentences: 3,
            similarity_floor: 1e-3,
            reading_wpm: 200,
            short_sentences: 3,
            medium_sentences: 7,
            detailed_sentences: 12,
        }
    }
}

impl SummarizerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the minimum sentence count required before ranking
    pub fn with_min_sentences(mut self, min_sentences: usize) -> Self {
        self.min_sentences = min_sentences;
        self
    }

    /// Set the similarity floor below which edges are dropped
    pub fn with_similarity_floor(mut self, floor: f64) -> Self {
        self.similarity_floor = floor;
        self
    }

    /// Set the reading speed used for reading-time estimates
    pub fn with_reading_wpm(mut self, wpm: usize) -> Self {
        self.reading_wpm = wpm;
        self
    }

    /// Set the sentence target for a specific length tier
    pub fn with_tier_target(mut self, length: SummaryLength, sentences: usize) -> Self {
        match length {
            SummaryLength::Short => self.short_sentences = sentences,
            SummaryLength::Medium => self.medium_sentences = sentences,
            SummaryLength::Detailed => self.detailed_sentences = sentences,
        }
        self
    }
}

/// Summary length tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    Short,
    Medium,
    Detailed,
}

impl SummaryLength {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "short" | "s" => SummaryLength::Short,
            "detailed" | "long" | "l" => SummaryLength::Detailed,
            _ => SummaryLength::Medium,
        }
    }

    /// The configured sentence target for this tier
    pub fn sentence_target(&self, config: &SummarizerConfig) -> usize {
        match self {
            SummaryLength::Short => config.short_sentences,
            SummaryLength::Medium => config.medium_sentences,
            SummaryLength::Detailed => config.detailed_sentences,
        }
    }
}

impl std::str::FromStr for SummaryLength {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SummaryLength::parse(value))
    }
}

/// A sentence span within the source text
///
/// `index` is the original position and stays stable through the whole
/// pipeline; `start`/`end` are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text (trimmed)
    pub text: String,
    /// Original position among all sentences
    pub index: usize,
    /// Byte offset of the first character in the source text
    pub start: usize,
    /// Byte offset one past the last character in the source text
    pub end: usize,
}

impl Sentence {
    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// One caption cue from a fetched transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Cue text
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// Duration in seconds
    pub duration: f64,
}

/// A fetched transcript — immutable once returned by the fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Ordered caption cues
    pub segments: Vec<TranscriptSegment>,
    /// Language code of the track the cues came from
    pub language_code: String,
}

/// A caption track available for a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// BCP-47 language code (e.g. "en", "pt-BR")
    pub code: String,
    /// Human-readable language name
    pub name: String,
    /// Whether the track was auto-generated by speech recognition
    pub is_generated: bool,
    /// Whether the track can be machine-translated
    pub is_translatable: bool,
}

/// Best-effort video metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: String,
}
