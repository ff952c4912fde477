//! Call-with-timeout-and-fallback.
//!
//! [`call_with_timeout`] runs a fallible future on its own tokio task and
//! races it against a timer. Whatever goes wrong (the timer fires first, the
//! call returns an error, or the task panics), the caller gets the value
//! produced by the fallback instead. The combinator itself never fails and
//! never waits past the bound.

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Why a guarded call fell back
#[derive(Error, Debug)]
pub enum CallFailure<E> {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed: {0}")]
    Failed(E),

    #[error("panicked: {0}")]
    Panicked(String),
}

impl<E> CallFailure<E> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, CallFailure::Timeout(_))
    }
}

/// Run `call` bounded by `duration`, substituting `fallback(failure)` if it
/// does not succeed in time.
///
/// The call is spawned so the timer can win even when the call never yields.
/// On timeout the spawned task is aborted and the fallback runs at once.
///
/// `name` only labels the log lines.
pub async fn call_with_timeout<T, E, F, FB>(
    name: &str,
    duration: Duration,
    call: F,
    fallback: FB,
) -> T
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: fmt::Display + Send + 'static,
    FB: FnOnce(CallFailure<E>) -> T,
{
    let start = Instant::now();
    let mut handle = tokio::spawn(call);

    let failure = match timeout(duration, &mut handle).await {
        Ok(Ok(Ok(value))) => {
            debug!(
                call = name,
                duration_ms = start.elapsed().as_millis() as u64,
                "Call succeeded within timeout"
            );
            return value;
        }
        Ok(Ok(Err(err))) => CallFailure::Failed(err),
        Ok(Err(join_err)) => CallFailure::Panicked(join_err.to_string()),
        Err(_elapsed) => {
            handle.abort();
            CallFailure::Timeout(duration)
        }
    };

    warn!(
        call = name,
        duration_ms = start.elapsed().as_millis() as u64,
        reason = %failure,
        "Call did not succeed, using fallback"
    );
    fallback(failure)
}
