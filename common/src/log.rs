//! Status macros.
//!
//! Thin wrappers around `tracing` so every crate reports progress the same
//! way. `success!` is an `INFO` event under the [`SUCCESS_TARGET`] target,
//! which the terminal formatter renders as a positive result.

#[doc(hidden)]
pub use tracing as __tracing;

pub const SUCCESS_TARGET: &str = "scopr::success";
pub const PRINT_TARGET: &str = "scopr::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}
