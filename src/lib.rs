pub mod config;
pub mod core;
pub mod utils;
pub mod value;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::UtilsConfig;
pub use crate::core::{delay, delay_ms, Debounced, DelayHandle, DEFAULT_DEBOUNCE_WINDOW};
pub use utils::error::{Result, UtilError};
pub use value::{
    extend_values, first_number_like, is_array, is_number_like, is_object, is_string,
    simple_extend,
};
