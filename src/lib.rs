//! # vidsum
//!
//! Extractive summarization for YouTube video transcripts.
//!
//! The pipeline splits a transcript into sentences, builds a cosine
//! similarity graph over their term-frequency vectors, ranks sentences with
//! a damped graph-centrality power iteration (LexRank), and assembles the
//! top-ranked sentences back into document order.
//!
//! ```no_run
//! use vidsum::{Summarizer, SummaryLength, YouTubeTranscriptClient};
//! use vidsum::transcript::video_id::parse_video_id;
//!
//! # fn main() -> vidsum::Result<()> {
//! let video_id = parse_video_id("https://youtu.be/dQw4w9WgXcQ")?;
//! let client = YouTubeTranscriptClient::new();
//! let summarizer = Summarizer::new();
//!
//! let summary = summarizer.summarize_video(&client, &video_id, Some("en"), SummaryLength::Medium)?;
//! println!("{} ({} min read)", summary.text, summary.reading_time_minutes);
//! # Ok(())
//! # }
//! ```
//!
//! Summarization alone needs no network:
//!
//! ```
//! use vidsum::{Summarizer, SummaryLength};
//!
//! let summarizer = Summarizer::new();
//! let summary = summarizer
//!     .summarize(
//!         "Cats are mammals. Dogs are mammals. The sun is a star. Stars emit light.",
//!         SummaryLength::Short,
//!     )
//!     .unwrap();
//! assert!(!summary.sentences.is_empty());
//! ```

pub mod error;
pub mod graph;
pub mod nlp;
pub mod rank;
pub mod summarizer;
pub mod summary;
pub mod transcript;
pub mod types;

pub use error::{Error, Result};
pub use summarizer::Summarizer;
pub use summary::Summary;
pub use transcript::fetcher::{TranscriptSource, YouTubeTranscriptClient};
pub use transcript::format::TranscriptExtract;
pub use transcript::retry::RetryPolicy;
pub use types::{
    LanguageInfo, Sentence, SummarizerConfig, SummaryLength, Transcript, TranscriptSegment,
    VideoMetadata,
};

/// Summarize text with default settings
pub fn summarize(text: &str, length: SummaryLength) -> Result<Summary> {
    Summarizer::new().summarize(text, length)
}

/// Render a transcript with default settings
pub fn extract_transcript(transcript: &Transcript, include_timestamps: bool) -> TranscriptExtract {
    transcript::format::extract_transcript(transcript, include_timestamps)
}
