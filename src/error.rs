//! Error taxonomy for transcript fetching and summarization.
//!
//! Every failure surfaces as a structured [`Error`] value at the request
//! boundary; the pipeline never returns a partial summary. Non-convergence of
//! the ranker is deliberately not represented here — the ranker reports it in
//! [`crate::rank::RankResult::converged`] and the pipeline proceeds with the
//! last iterate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or unrecognized video reference. Not retried.
    #[error("invalid video reference: {0}")]
    InvalidInput(String),

    /// The video has no transcript in the requested language. Not retried.
    #[error("no transcript available: {0}")]
    NoTranscriptAvailable(String),

    /// A transport-level fetch failure. Retried by [`crate::transcript::retry::RetryPolicy`];
    /// surfaced as [`Error::NoTranscriptAvailable`] once the attempt budget is
    /// exhausted.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The transcript splits into fewer sentences than the ranker's minimum.
    #[error("transcript too short to summarize: found {found} sentences, need at least {required}")]
    InsufficientContent { found: usize, required: usize },
}

impl Error {
    /// Whether this failure class is worth another fetch attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
