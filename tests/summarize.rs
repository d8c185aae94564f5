//! End-to-end pipeline scenarios: raw text in, summary out, plus the
//! fetch-and-summarize composition against mock transcript sources.

use std::cell::Cell;
use vidsum::transcript::format;
use vidsum::{
    Error, LanguageInfo, Result, RetryPolicy, Summarizer, SummarizerConfig, SummaryLength,
    Transcript, TranscriptSegment, TranscriptSource,
};

const ARTICLE: &str = "Rust is a systems programming language focused on safety. \
    Memory safety in Rust comes from its ownership model. \
    The ownership model tracks which part of a program owns each value. \
    Borrowing lets a program read a value without taking ownership. \
    The compiler checks ownership and borrowing rules at compile time. \
    Compile time checks mean Rust programs avoid whole classes of bugs. \
    Garbage collected languages check memory safety at runtime instead. \
    Runtime checks cost performance that systems programs cannot spare. \
    Rust programs run with performance close to C programs. \
    Many companies now ship production systems written in Rust. \
    The community publishes shared libraries on a central registry. \
    Learning the ownership model takes most newcomers a few weeks.";

fn four_sentences() -> &'static str {
    "Cats are mammals. Dogs are mammals. The sun is a star. Stars emit light."
}

// ---------------------------------------------------------------------------
// Mock transcript sources
// ---------------------------------------------------------------------------

struct StaticSource {
    transcript: Transcript,
}

impl StaticSource {
    fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment {
                text: text.to_string(),
                start: i as f64 * 4.0,
                duration: 4.0,
            })
            .collect();
        Self {
            transcript: Transcript {
                segments,
                language_code: "en".to_string(),
            },
        }
    }
}

impl TranscriptSource for StaticSource {
    fn fetch(&self, _video_id: &str, _language: Option<&str>) -> Result<Transcript> {
        Ok(self.transcript.clone())
    }

    fn list_languages(&self, _video_id: &str) -> Result<Vec<LanguageInfo>> {
        Ok(vec![LanguageInfo {
            code: "en".to_string(),
            name: "English".to_string(),
            is_generated: false,
            is_translatable: true,
        }])
    }
}

/// A source whose transport always fails; fetch retries through a policy and
/// surfaces exhaustion the way the production client does.
struct FlakySource {
    attempts: Cell<usize>,
    retry: RetryPolicy,
}

impl FlakySource {
    fn new(max_attempts: usize) -> Self {
        Self {
            attempts: Cell::new(0),
            retry: RetryPolicy::no_delay(max_attempts),
        }
    }

    fn transport_error() -> Error {
        Error::Network(reqwest::blocking::get("http://[invalid-url").unwrap_err())
    }
}

impl TranscriptSource for FlakySource {
    fn fetch(&self, _video_id: &str, _language: Option<&str>) -> Result<Transcript> {
        self.retry
            .run(|| {
                self.attempts.set(self.attempts.get() + 1);
                Err(Self::transport_error())
            })
            .map_err(|err| match err {
                Error::Network(inner) => Error::NoTranscriptAvailable(format!(
                    "transcript fetch failed after {} attempts: {inner}",
                    self.retry.max_attempts()
                )),
                other => other,
            })
    }

    fn list_languages(&self, _video_id: &str) -> Result<Vec<LanguageInfo>> {
        Err(Self::transport_error())
    }
}

// ---------------------------------------------------------------------------
// Summarization scenarios
// ---------------------------------------------------------------------------

#[test]
fn summary_sentences_are_a_subset_in_original_order() {
    let summary = vidsum::summarize(ARTICLE, SummaryLength::Medium).unwrap();

    assert!(!summary.sentences.is_empty());
    let mut previous = None;
    for sentence in &summary.sentences {
        assert!(ARTICLE.contains(&sentence.text), "not from source: {}", sentence.text);
        if let Some(previous) = previous {
            assert!(sentence.index > previous);
        }
        previous = Some(sentence.index);
    }
}

#[test]
fn four_sentence_short_scenario() {
    let summarizer = Summarizer::with_config(
        SummarizerConfig::new().with_tier_target(SummaryLength::Short, 2),
    );
    let summary = summarizer
        .summarize(four_sentences(), SummaryLength::Short)
        .unwrap();

    assert_eq!(summary.sentence_count, 2);
    assert_eq!(summary.sentences.len(), 2);
    assert!(summary.sentences[0].index < summary.sentences[1].index);

    let expected = format!(
        "{} {}",
        summary.sentences[0].text, summary.sentences[1].text
    );
    assert_eq!(summary.text, expected);
    assert_eq!(summary.word_count, expected.split_whitespace().count());
}

#[test]
fn tier_word_counts_are_monotonic() {
    let summarizer = Summarizer::new();

    let short = summarizer.summarize(ARTICLE, SummaryLength::Short).unwrap();
    let medium = summarizer.summarize(ARTICLE, SummaryLength::Medium).unwrap();
    let detailed = summarizer
        .summarize(ARTICLE, SummaryLength::Detailed)
        .unwrap();

    assert!(short.word_count <= medium.word_count);
    assert!(medium.word_count <= detailed.word_count);
}

#[test]
fn summarize_is_idempotent() {
    let summarizer = Summarizer::new();

    let first = summarizer.summarize(ARTICLE, SummaryLength::Short).unwrap();
    let second = summarizer.summarize(ARTICLE, SummaryLength::Short).unwrap();

    assert_eq!(first.text, second.text);
    assert_eq!(first.word_count, second.word_count);
    assert_eq!(first.reading_time_minutes, second.reading_time_minutes);
}

#[test]
fn single_sentence_transcript_is_insufficient_content() {
    let err = vidsum::summarize("Only one sentence here.", SummaryLength::Short).unwrap_err();

    assert!(matches!(
        err,
        Error::InsufficientContent {
            found: 1,
            required: 3
        }
    ));
}

#[test]
fn reading_time_has_a_floor_of_one_minute() {
    let summary = vidsum::summarize(four_sentences(), SummaryLength::Detailed).unwrap();
    assert!(summary.reading_time_minutes >= 1);
}

// ---------------------------------------------------------------------------
// Fetch-and-summarize composition
// ---------------------------------------------------------------------------

#[test]
fn summarize_video_through_a_mock_source() {
    let source = StaticSource::new(&[
        "Cats are mammals.",
        "Dogs are mammals.",
        "The sun is a star.",
        "Stars emit light.",
    ]);
    let summarizer = Summarizer::with_config(
        SummarizerConfig::new().with_tier_target(SummaryLength::Short, 2),
    );

    let summary = summarizer
        .summarize_video(&source, "dQw4w9WgXcQ", Some("en"), SummaryLength::Short)
        .unwrap();

    assert_eq!(summary.sentence_count, 2);
}

#[test]
fn exhausted_retries_surface_as_no_transcript_available() {
    let source = FlakySource::new(3);
    let summarizer = Summarizer::new();

    let err = summarizer
        .summarize_video(&source, "dQw4w9WgXcQ", Some("en"), SummaryLength::Medium)
        .unwrap_err();

    assert_eq!(source.attempts.get(), 3);
    assert!(matches!(err, Error::NoTranscriptAvailable(_)));
    assert!(err.to_string().contains("after 3 attempts"));
}

#[test]
fn extract_transcript_round_trip() {
    let source = StaticSource::new(&["welcome back", "to the channel"]);
    let transcript = source.fetch("dQw4w9WgXcQ", None).unwrap();

    let with_stamps = vidsum::extract_transcript(&transcript, true);
    assert_eq!(
        with_stamps.formatted_text,
        "[00:00] welcome back\n[00:04] to the channel"
    );
    assert_eq!(with_stamps.word_count, 5);

    let plain = vidsum::extract_transcript(&transcript, false);
    assert_eq!(plain.formatted_text, "welcome back to the channel");
    assert_eq!(plain.char_count, plain.formatted_text.chars().count());
}

#[test]
fn plain_formatting_feeds_the_summarizer() {
    let source = StaticSource::new(&[
        "Rust is a systems language.",
        "Rust programs are fast.",
        "The compiler enforces safety.",
    ]);
    let transcript = source.fetch("dQw4w9WgXcQ", None).unwrap();

    let plain = format::format_plain(&transcript);
    assert_eq!(
        plain,
        "Rust is a systems language. Rust programs are fast. The compiler enforces safety."
    );

    let summary = Summarizer::new()
        .summarize_transcript(&transcript, SummaryLength::Detailed)
        .unwrap();
    assert_eq!(summary.sentence_count, 3);
}
