//! Best-effort video metadata
//!
//! Fetches title and thumbnail from the public oEmbed endpoint. Metadata is
//! decoration for the web boundary, so every failure degrades to a
//! constructed fallback instead of failing the request.

use crate::types::VideoMetadata;
use serde::Deserialize;
use std::time::Duration;

const OEMBED_URL: &str = "https://www.youtube.com/oembed";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: String,
    thumbnail_url: Option<String>,
}

/// Fetch metadata for a video, falling back to a constructed value on any
/// failure. Never errors.
pub fn fetch_video_metadata(http: &reqwest::blocking::Client, video_id: &str) -> VideoMetadata {
    let url = format!(
        "{OEMBED_URL}?url=https://www.youtube.com/watch?v={video_id}&format=json"
    );

    let response = http
        .get(&url)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.json::<OembedResponse>());

    match response {
        Ok(oembed) => VideoMetadata {
            video_id: video_id.to_string(),
            title: oembed.title,
            thumbnail_url: oembed
                .thumbnail_url
                .unwrap_or_else(|| default_thumbnail(video_id)),
        },
        Err(_) => fallback_metadata(video_id),
    }
}

/// The metadata used when the oEmbed fetch fails
pub fn fallback_metadata(video_id: &str) -> VideoMetadata {
    VideoMetadata {
        video_id: video_id.to_string(),
        title: format!("Video {video_id}"),
        thumbnail_url: default_thumbnail(video_id),
    }
}

fn default_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}
