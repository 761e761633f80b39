use std::future::Future;
use std::time::Duration;

use crate::{ErrorKind, ExtractionError};

/// Race a unit of work against a deadline.
///
/// If the deadline fires first, the caller gets `TIMED_OUT` (recoverable)
/// and stops waiting. The underlying work is *not* force-terminated: neither
/// decoding crate honors a cancellation signal, so an abandoned attempt may
/// keep running on the blocking pool until it finishes on its own, with its
/// result discarded. Each attempt gets an independent, full-length budget;
/// timeouts do not accumulate across attempts.
pub async fn with_deadline<F>(budget: Duration, work: F) -> Result<F::Output, ExtractionError>
where
    F: Future,
{
    match tokio::time::timeout(budget, work).await {
        Ok(output) => Ok(output),
        Err(_) => Err(ExtractionError::new(
            ErrorKind::TimedOut,
            format!("decode attempt exceeded {} ms budget", budget.as_millis()),
        )),
    }
}
