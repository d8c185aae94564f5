//! Transcript fetching
//!
//! [`TranscriptSource`] is the boundary the summarizer consumes; the
//! production implementation [`YouTubeTranscriptClient`] discovers a video's
//! caption tracks from its watch page, picks a track for the requested
//! language (falling back to a generated English track), and decodes the
//! track's `json3` payload into [`Transcript`] segments.
//!
//! Transport failures go through the injected [`RetryPolicy`]; once the
//! attempt budget is exhausted they surface as
//! [`Error::NoTranscriptAvailable`].

use crate::error::{Error, Result};
use crate::transcript::retry::RetryPolicy;
use crate::types::{LanguageInfo, Transcript, TranscriptSegment};
use serde::Deserialize;
use std::time::Duration;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Supplier of transcripts and per-language track metadata.
///
/// An explicit dependency of the callers that need fetching, so tests can
/// substitute a mock and no global client instance exists.
pub trait TranscriptSource {
    /// Fetch the transcript for a video.
    ///
    /// `language` is a BCP-47 code; `None` means take the video's default
    /// track.
    fn fetch(&self, video_id: &str, language: Option<&str>) -> Result<Transcript>;

    /// List the caption tracks available for a video
    fn list_languages(&self, video_id: &str) -> Result<Vec<LanguageInfo>>;
}

/// Production transcript client backed by YouTube's caption tracks
#[derive(Debug)]
pub struct YouTubeTranscriptClient {
    http: reqwest::blocking::Client,
    retry: RetryPolicy,
}

impl Default for YouTubeTranscriptClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YouTubeTranscriptClient {
    /// Create a client with the default retry policy
    pub fn new() -> Self {
        Self::with_retry(RetryPolicy::default())
    }

    /// Create a client with a custom retry policy
    pub fn with_retry(retry: RetryPolicy) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            retry,
        }
    }

    /// Access to the underlying HTTP client (shared with the metadata fetch)
    pub fn http(&self) -> &reqwest::blocking::Client {
        &self.http
    }

    /// GET a URL as text through the retry policy. An exhausted budget
    /// surfaces as `NoTranscriptAvailable`, per the error taxonomy.
    fn get_text(&self, url: &str) -> Result<String> {
        let attempts = self.retry.max_attempts();
        self.retry
            .run(|| {
                let response = self
                    .http
                    .get(url)
                    .header(reqwest::header::USER_AGENT, USER_AGENT)
                    .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                    .timeout(REQUEST_TIMEOUT)
                    .send()?
                    .error_for_status()?;
                Ok(response.text()?)
            })
            .map_err(|err| match err {
                Error::Network(inner) => Error::NoTranscriptAvailable(format!(
                    "transcript fetch failed after {attempts} attempts: {inner}"
                )),
                other => other,
            })
    }

    fn caption_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>> {
        let html = self.get_text(&format!("{WATCH_URL}{video_id}"))?;

        let raw = extract_json_array(&html, "\"captionTracks\":").ok_or_else(|| {
            Error::NoTranscriptAvailable(format!(
                "captions are disabled or video {video_id} is unavailable"
            ))
        })?;

        serde_json::from_str(raw).map_err(|err| {
            Error::NoTranscriptAvailable(format!("malformed caption track list: {err}"))
        })
    }
}

impl TranscriptSource for YouTubeTranscriptClient {
    fn fetch(&self, video_id: &str, language: Option<&str>) -> Result<Transcript> {
        let tracks = self.caption_tracks(video_id)?;

        let track = select_track(&tracks, language).ok_or_else(|| {
            Error::NoTranscriptAvailable(format!(
                "no caption track for language {:?} on video {video_id}",
                language.unwrap_or("default")
            ))
        })?;

        let body = self.get_text(&format!("{}&fmt=json3", track.base_url))?;
        let segments = decode_json3(&body)?;

        Ok(Transcript {
            segments,
            language_code: track.language_code.clone(),
        })
    }

    fn list_languages(&self, video_id: &str) -> Result<Vec<LanguageInfo>> {
        let tracks = self.caption_tracks(video_id)?;

        Ok(tracks
            .iter()
            .map(|track| LanguageInfo {
                code: track.language_code.clone(),
                name: track.display_name(),
                is_generated: track.is_generated(),
                is_translatable: track.is_translatable,
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Caption track payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    #[serde(default)]
    name: Option<TrackName>,
    /// "asr" marks a speech-recognition (auto-generated) track
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    is_translatable: bool,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.text(),
            None => self.language_code.clone(),
        }
    }
}

/// Track names come as either `{"simpleText": ...}` or `{"runs": [...]}`.
#[derive(Debug, Deserialize)]
struct TrackName {
    #[serde(rename = "simpleText")]
    simple_text: Option<String>,
    #[serde(default)]
    runs: Vec<NameRun>,
}

#[derive(Debug, Deserialize)]
struct NameRun {
    text: String,
}

impl TrackName {
    fn text(&self) -> String {
        match &self.simple_text {
            Some(text) => text.clone(),
            None => self.runs.iter().map(|run| run.text.as_str()).collect(),
        }
    }
}

/// Pick a track for the requested language.
///
/// Order: exact code match, primary-subtag match ("en" matches "en-GB"),
/// then a generated English track — the same fallback chain the languages
/// endpoint reports. `None` takes the video's first track.
fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    language: Option<&str>,
) -> Option<&'a CaptionTrack> {
    let requested = match language {
        Some(code) => code,
        None => return tracks.first(),
    };

    tracks
        .iter()
        .find(|t| t.language_code.eq_ignore_ascii_case(requested))
        .or_else(|| {
            let primary = requested.split(['-', '_']).next().unwrap_or(requested);
            tracks
                .iter()
                .find(|t| primary_subtag(&t.language_code).eq_ignore_ascii_case(primary))
        })
        .or_else(|| {
            tracks
                .iter()
                .find(|t| primary_subtag(&t.language_code) == "en" && t.is_generated())
        })
}

fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

// ---------------------------------------------------------------------------
// json3 caption decoding
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Json3Body {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs")]
    start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,
    #[serde(default)]
    segs: Vec<Json3Seg>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    utf8: Option<String>,
}

fn decode_json3(body: &str) -> Result<Vec<TranscriptSegment>> {
    let parsed: Json3Body = serde_json::from_str(body).map_err(|err| {
        Error::NoTranscriptAvailable(format!("malformed caption payload: {err}"))
    })?;

    let mut segments = Vec::with_capacity(parsed.events.len());
    for event in parsed.events {
        let text: String = event
            .segs
            .iter()
            .filter_map(|seg| seg.utf8.as_deref())
            .collect();
        let text = unescape_entities(text.trim());
        if text.is_empty() {
            continue;
        }

        segments.push(TranscriptSegment {
            text,
            start: event.start_ms.unwrap_or(0) as f64 / 1000.0,
            duration: event.duration_ms.unwrap_or(0) as f64 / 1000.0,
        });
    }

    Ok(segments)
}

/// Resolve the handful of HTML entities YouTube leaves in cue text.
fn unescape_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

// ---------------------------------------------------------------------------
// Watch-page scraping
// ---------------------------------------------------------------------------

/// Find `key` in `source` and return the bracket-balanced JSON array that
/// follows it. Balancing skips over string literals (including escapes), so
/// brackets inside track names do not confuse it.
fn extract_json_array<'a>(source: &'a str, key: &str) -> Option<&'a str> {
    let at = source.find(key)?;
    let rest = &source[at + key.len()..];
    let open = rest.find('[')?;

    let bytes = rest.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[open..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
