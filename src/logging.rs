/// Conditional logging module for development builds
///
/// The `log!` macro provides informational debug logging that is compiled out
/// in production (release) builds by default. Warnings and errors should keep
/// using `log::warn!` and `log::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// let stop_id = -3;
/// pathway_graph::log!("Allocated stop id {}", stop_id);
/// ```
/// Conditionally log at debug level in development builds
///
/// This macro expands to `log::debug!()` in debug builds or when the
/// `console_logging` feature is enabled. In production release builds,
/// it compiles to nothing (zero overhead).
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            ::log::debug!($($arg),+);
        }
    };
}
