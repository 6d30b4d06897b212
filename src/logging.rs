/// Conditional logging module
///
/// The `log!` macro provides informational logging that is compiled out
/// in release builds by default. `warn!` always emits and is used for the
/// degraded-but-recoverable paths (unparseable schedule text, missing grid,
/// failed submission).
///
/// Output goes to the browser console on `wasm32` and to stderr elsewhere,
/// so the same core runs unchanged in tests and benches.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use course_planner::logging::{log, warn};
///
/// log!("Loaded {} courses", 42);
/// warn!("No slot tokens in {:?}", "TBA");
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            #[cfg(target_arch = "wasm32")]
            $crate::logging::web_sys::console::log_1(&format!($($arg),+).into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", format_args!($($arg),+));
        }
    };
}

/// Log a warning in every build profile
#[macro_export]
macro_rules! warn {
    ($($arg:expr),+ $(,)?) => {
        {
            #[cfg(target_arch = "wasm32")]
            $crate::logging::web_sys::console::warn_1(&format!($($arg),+).into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("WARN: {}", format_args!($($arg),+));
        }
    };
}

#[doc(hidden)]
pub use web_sys;

pub use crate::{log, warn};
