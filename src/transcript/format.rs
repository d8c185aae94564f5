//! Transcript rendering
//!
//! Timestamped and plain renderings of a fetched transcript, plus the
//! extract operation the web boundary's fetch-transcript request maps onto.

use crate::types::Transcript;
use serde::Serialize;

/// A rendered transcript with derived counts
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptExtract {
    /// The rendered text (timestamped or plain)
    pub formatted_text: String,
    /// Word count of the plain text
    pub word_count: usize,
    /// Character count of the plain text
    pub char_count: usize,
}

/// Format seconds as an MM:SS timestamp. Minutes run past 59 for videos
/// longer than an hour.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Render each cue on its own line, prefixed with its start timestamp
pub fn format_with_timestamps(transcript: &Transcript) -> String {
    transcript
        .segments
        .iter()
        .map(|seg| format!("[{}] {}", format_timestamp(seg.start), seg.text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flatten all cues into one space-separated string
pub fn format_plain(transcript: &Transcript) -> String {
    transcript
        .segments
        .iter()
        .map(|seg| seg.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a transcript for display.
///
/// Word and character counts are always computed over the plain rendering,
/// so toggling timestamps does not change them.
pub fn extract_transcript(transcript: &Transcript, include_timestamps: bool) -> TranscriptExtract {
    let plain = format_plain(transcript);

    TranscriptExtract {
        word_count: plain.split_whitespace().count(),
        char_count: plain.chars().count(),
        formatted_text: if include_timestamps {
            format_with_timestamps(transcript)
        } else {
            plain
        },
    }
}
