//! Single-shot delayed invocation on the tokio runtime.

use crate::utils::error::{Result, UtilError};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// Handle to a call scheduled with [`delay`].
///
/// Dropping the handle does not cancel the call.
#[derive(Debug)]
pub struct DelayHandle<R> {
    state: Arc<AtomicU8>,
    task: JoinHandle<Option<R>>,
}

/// Calls `f(args)` once, no earlier than `wait` from now.
///
/// Must be called from within a tokio runtime. A panic inside `f` is
/// reported by the runtime and, if the handle is joined, surfaces as
/// [`UtilError::TaskFailed`]; it never reaches the caller of `delay`.
pub fn delay<F, A, R>(f: F, wait: Duration, args: A) -> DelayHandle<R>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    let state = Arc::new(AtomicU8::new(PENDING));
    let task_state = Arc::clone(&state);

    tracing::debug!("Scheduling delayed call in {:?}", wait);
    let task = tokio::spawn(async move {
        tokio::time::sleep(wait).await;

        // Losing this race to `cancel` means the call must not happen.
        if task_state
            .compare_exchange(PENDING, FIRED, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }

        tracing::debug!("Delayed call firing after {:?}", wait);
        Some(f(args))
    });

    DelayHandle { state, task }
}

/// [`delay`] with the wait given in milliseconds.
pub fn delay_ms<F, A, R>(f: F, wait_ms: u64, args: A) -> DelayHandle<R>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    delay(f, Duration::from_millis(wait_ms), args)
}

impl<R> DelayHandle<R> {
    /// Cancels the call if it has not started yet.
    ///
    /// Returns `true` when the call was still pending; it will then never run.
    pub fn cancel(&self) -> bool {
        let cancelled = self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        if cancelled {
            self.task.abort();
            tracing::debug!("Delayed call cancelled before firing");
        }
        cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::Acquire) == PENDING
    }

    /// True once the call has started, whether or not it has returned.
    pub fn is_fired(&self) -> bool {
        self.state.load(Ordering::Acquire) == FIRED
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) == CANCELLED
    }

    /// Waits for the call and returns its value.
    pub async fn join(self) -> Result<R> {
        match self.task.await {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(UtilError::Cancelled),
            Err(e) if e.is_cancelled() => Err(UtilError::Cancelled),
            Err(e) => Err(UtilError::TaskFailed {
                message: e.to_string(),
            }),
        }
    }
}
