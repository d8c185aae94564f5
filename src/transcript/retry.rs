//! Bounded retry policy for network fetches
//!
//! An explicit policy object, injected into the fetch client, rather than an
//! ad-hoc loop at each call site. Only transient failures
//! ([`Error::is_transient`]) are retried; everything else returns
//! immediately.

use crate::error::Result;
use std::fmt;
use std::time::Duration;

/// Delay function: attempt number (0-based) to sleep duration.
type DelayFn = Box<dyn Fn(usize) -> Duration + Send + Sync>;

/// A bounded retry policy with a pluggable delay function
pub struct RetryPolicy {
    max_attempts: usize,
    delay: DelayFn,
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

impl Default for RetryPolicy {
    /// Three attempts with exponential backoff starting at 250 ms.
    fn default() -> Self {
        Self::exponential(3, Duration::from_millis(250))
    }
}

impl RetryPolicy {
    /// Exponential backoff: `base * 2^attempt` between attempts
    pub fn exponential(max_attempts: usize, base: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay: Box::new(move |attempt| base * 2u32.saturating_pow(attempt as u32)),
        }
    }

    /// The same fixed delay between every attempt
    pub fn fixed(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay: Box::new(move |_| delay),
        }
    }

    /// No sleeping between attempts (for tests)
    pub fn no_delay(max_attempts: usize) -> Self {
        Self::fixed(max_attempts, Duration::ZERO)
    }

    /// Override the delay function
    pub fn with_delay_fn(
        mut self,
        delay: impl Fn(usize) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Box::new(delay);
        self
    }

    /// The configured attempt budget
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Run `op` until it succeeds, fails non-transiently, or exhausts the
    /// attempt budget. The final error is returned unchanged; mapping an
    /// exhausted transient failure to a domain error is the caller's call.
    pub fn run<T>(&self, mut op: impl FnMut() -> Result<T>) -> Result<T> {
        let mut attempt = 0;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt + 1 < self.max_attempts => {
                    std::thread::sleep((self.delay)(attempt));
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
