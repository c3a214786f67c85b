//! Leading-edge debounce with a trailing cooldown.
//!
//! The first call of a burst runs the wrapped function right away. Later
//! calls are suppressed and return the cached result until the wrapper has
//! gone `window` without being called. Every call, suppressed or not,
//! restarts that window.

use crate::config::DebounceConfig;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// A debounced function. Clones share the same state.
pub struct Debounced<F, R> {
    state: Arc<Mutex<DebounceState<F, R>>>,
    window: Duration,
}

struct DebounceState<F, R> {
    func: F,
    last_return: Option<R>,
    cooldown: Cooldown,
}

#[derive(Debug, Clone, Copy)]
enum Cooldown {
    Idle,
    Until(Instant),
    /// The window does not fit on the clock; the cooldown never ends.
    Forever,
}

impl<F, R> DebounceState<F, R> {
    fn cooling(&self, now: Instant) -> bool {
        match self.cooldown {
            Cooldown::Idle => false,
            Cooldown::Until(quiet_at) => now < quiet_at,
            Cooldown::Forever => true,
        }
    }
}

impl<F, R> Debounced<F, R> {
    /// Wraps `func`. `None` selects [`DEFAULT_DEBOUNCE_WINDOW`]; an explicit
    /// zero window disables suppression.
    pub fn new(func: F, window: Option<Duration>) -> Self {
        Self {
            state: Arc::new(Mutex::new(DebounceState {
                func,
                last_return: None,
                cooldown: Cooldown::Idle,
            })),
            window: window.unwrap_or(DEFAULT_DEBOUNCE_WINDOW),
        }
    }

    pub fn from_config(func: F, config: &DebounceConfig) -> Self {
        Self::new(func, Some(config.window()))
    }

    /// Runs `func(args)` unless a cooldown is active, then returns the most
    /// recent result.
    ///
    /// The state lock is held while `func` runs, so `func` must not call
    /// back into the same wrapper.
    pub fn call<A>(&self, args: A) -> R
    where
        F: FnMut(A) -> R,
        R: Clone,
    {
        let mut state = self.lock();
        let now = Instant::now();
        let cooling = state.cooling(now);
        state.cooldown = now
            .checked_add(self.window)
            .map_or(Cooldown::Forever, Cooldown::Until);

        if cooling {
            if let Some(value) = &state.last_return {
                tracing::trace!("Debounced call suppressed");
                return value.clone();
            }
        }

        let value = (state.func)(args);
        state.last_return = Some(value.clone());
        value
    }

    pub fn is_debouncing(&self) -> bool {
        self.lock().cooling(Instant::now())
    }

    /// Ends the current cooldown so the next call runs immediately.
    pub fn reset(&self) {
        self.lock().cooldown = Cooldown::Idle;
    }

    pub fn last_value(&self) -> Option<R>
    where
        R: Clone,
    {
        self.lock().last_return.clone()
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    fn lock(&self) -> MutexGuard<'_, DebounceState<F, R>> {
        self.state.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("found poisoned debounce state, recovering");
            poisoned.into_inner()
        })
    }
}

impl<F, R> Clone for Debounced<F, R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            window: self.window,
        }
    }
}

// Never touches the state lock, so formatting from inside `func` is safe.
impl<F, R> fmt::Debug for Debounced<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    fn counting() -> (Arc<Mutex<u32>>, impl FnMut(u32) -> u32) {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let func = move |x: u32| {
            *counter.lock().unwrap() += 1;
            x * 10
        };
        (calls, func)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_invokes_once() {
        let (calls, func) = counting();
        let debounced = Debounced::new(func, None);

        assert_eq!(debounced.call(1), 10);
        assert_eq!(debounced.call(2), 10);
        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(debounced.is_debouncing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiet_window_allows_next_call() {
        let (calls, func) = counting();
        let debounced = Debounced::new(func, Some(Duration::from_millis(50)));

        debounced.call(1);
        advance(Duration::from_millis(50)).await;
        assert!(!debounced.is_debouncing());
        assert_eq!(debounced.call(2), 20);
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_call_extends_cooldown() {
        let (calls, func) = counting();
        let debounced = Debounced::new(func, Some(Duration::from_millis(50)));

        debounced.call(1);
        for _ in 0..4 {
            advance(Duration::from_millis(40)).await;
            assert_eq!(debounced.call(9), 10);
        }
        assert_eq!(*calls.lock().unwrap(), 1);

        advance(Duration::from_millis(50)).await;
        assert_eq!(debounced.call(3), 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_window_never_suppresses() {
        let (calls, func) = counting();
        let debounced = Debounced::new(func, Some(Duration::ZERO));

        assert_eq!(debounced.call(1), 10);
        assert_eq!(debounced.call(2), 20);
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_and_clone_share_state() {
        let (calls, func) = counting();
        let debounced = Debounced::new(func, None);
        let other = debounced.clone();

        debounced.call(1);
        assert_eq!(other.call(5), 10);
        other.reset();
        assert_eq!(debounced.call(5), 50);
        assert_eq!(*calls.lock().unwrap(), 2);
        assert_eq!(other.last_value(), Some(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_window_suppresses_forever() {
        let (calls, func) = counting();
        let debounced = Debounced::new(func, Some(Duration::MAX));

        assert_eq!(debounced.call(1), 10);
        advance(Duration::from_secs(365 * 24 * 3600)).await;
        assert_eq!(debounced.call(2), 10);
        assert!(debounced.is_debouncing());
        assert_eq!(*calls.lock().unwrap(), 1);

        debounced.reset();
        assert_eq!(debounced.call(3), 30);
    }

    #[test]
    fn test_debug_inside_wrapped_function() {
        let slot: Arc<Mutex<Option<Debounced<Box<dyn FnMut(()) -> String + Send>, String>>>> =
            Arc::new(Mutex::new(None));
        let inner = Arc::clone(&slot);
        let func: Box<dyn FnMut(()) -> String + Send> = Box::new(move |_: ()| {
            inner
                .lock()
                .unwrap()
                .as_ref()
                .map(|d| format!("{:?}", d))
                .unwrap_or_default()
        });
        let debounced = Debounced::new(func, None);
        *slot.lock().unwrap() = Some(debounced.clone());

        let rendered = debounced.call(());
        assert!(rendered.contains("window"));
        *slot.lock().unwrap() = None;
    }

    #[test]
    fn test_default_window() {
        let debounced: Debounced<_, u8> = Debounced::new(|x: u8| x, None);
        assert_eq!(debounced.window(), DEFAULT_DEBOUNCE_WINDOW);
        assert_eq!(debounced.last_value(), None);

        let config = DebounceConfig { window_ms: Some(5) };
        let configured: Debounced<_, u8> = Debounced::from_config(|x: u8| x, &config);
        assert_eq!(configured.window(), Duration::from_millis(5));
    }
}
