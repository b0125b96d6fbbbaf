//! Cancellation-aware awaiting.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::error::AppError;

/// Awaits `fut` unless `cancel` fires first.
///
/// # Errors
///
/// Returns [`AppError::Cancelled`] if the token is cancelled before `fut`
/// completes, otherwise whatever `fut` returns.
pub async fn cancellable<T, F>(cancel: &CancellationToken, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AppError::cancelled("Request cancelled")),
        result = fut => result,
    }
}

/// Sleeps for `delay`, returning `false` early if `cancel` fires.
pub async fn sleep_or_cancel(cancel: &CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}
