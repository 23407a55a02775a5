// This file implements the application's logging system.
// It provides macros for the user-facing log levels (INFO, WARN, ERROR, DEBUG)
// with colored terminal output, and wires `tracing` events emitted by the
// HTTP layer into the same stderr stream.

use std::sync::OnceLock; // Ensures the DEBUG_ENABLED flag is initialized exactly once.
use std::sync::atomic::{AtomicBool, Ordering}; // Thread-safe control of the debug flag.

// `log_info!` for general progress messages.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => (eprintln!(
        "{} {}",
        colored::Colorize::bright_green("[INFO]"),
        format!($($arg)*)
    ));
}

// `log_warn!` for non-critical issues or noteworthy conditions.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => (eprintln!(
        "{} {}",
        colored::Colorize::bright_yellow("[WARN]"),
        format!($($arg)*)
    ));
}

// `log_error!` for fatal errors right before the process exits.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (eprintln!(
        "{} {}",
        colored::Colorize::bright_red("[ERROR]"),
        format!($($arg)*)
    ));
}

// `log_debug!` is only printed when `--debug` was passed.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
            eprintln!("{} {}", colored::Colorize::dimmed("[DEBUG]"), format!($($arg)*));
        }
    };
}

// Global flag to control debug logging, ensured to be initialized once.
static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Initializes the logger, setting the global debug mode and installing the
/// `tracing` subscriber used by the account client and the asset fetcher.
/// This function should be called once at application startup.
///
/// # Arguments
/// * `debug`: If `true`, enables debug logging; otherwise, only info, warn, and error messages are printed.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);

    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // `try_init` so a second call (tests) keeps the first subscriber instead of panicking.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    log_debug!("Logger initialized in DEBUG mode");
}

/// Checks if debug logging is currently enabled.
/// Used primarily by the `log_debug!` macro.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false) // Default to false if `init` was never called.
}
