//! Video reference parsing
//!
//! Accepts bare 11-character video IDs and the common YouTube URL shapes
//! (`watch?v=`, `youtu.be/`, `/embed/`, `/shorts/`, `/live/`).

use crate::error::{Error, Result};

const ID_LEN: usize = 11;

/// Path markers whose next path component is the video ID
const PATH_MARKERS: &[&str] = &["youtu.be/", "/embed/", "/shorts/", "/live/"];

/// Extract the 11-character video ID from a raw reference.
///
/// Fails with [`Error::InvalidInput`] when no well-formed ID can be found.
pub fn parse_video_id(input: &str) -> Result<String> {
    let input = input.trim();

    if is_valid_id(input) {
        return Ok(input.to_string());
    }

    for marker in PATH_MARKERS {
        if let Some(position) = input.find(marker) {
            if let Some(id) = take_id(&input[position + marker.len()..]) {
                return Ok(id);
            }
        }
    }

    // watch?v=ID / any query string carrying v=ID
    if let Some(query_start) = input.find('?') {
        for pair in input[query_start + 1..].split('&') {
            if let Some(value) = pair.strip_prefix("v=") {
                if let Some(id) = take_id(value) {
                    return Ok(id);
                }
            }
        }
    }

    Err(Error::InvalidInput(format!(
        "could not find a video id in {input:?}"
    )))
}

/// Take a leading run of ID characters and accept it if it is exactly 11 long.
fn take_id(value: &str) -> Option<String> {
    let run: String = value.chars().take_while(|&c| is_id_char(c)).collect();
    is_valid_id(&run).then_some(run)
}

fn is_valid_id(value: &str) -> bool {
    value.len() == ID_LEN && value.chars().all(is_id_char)
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
