pub mod debounce;
pub mod delay;

pub use crate::utils::error::Result;
pub use debounce::{Debounced, DEFAULT_DEBOUNCE_WINDOW};
pub use delay::{delay, delay_ms, DelayHandle};
