//! Shared logging setup for binaries and test harnesses.

/// Initialize process-wide logging (tracing subscriber).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    logging::init();
}

/// Logging configuration (filters, output format).
pub mod logging;
