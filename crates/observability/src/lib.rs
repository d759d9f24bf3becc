//! Tracing and logging (shared setup).

pub use crate::tracing::LogFormat;

/// Initialize process-wide observability (tracing/logging).
///
/// Output format comes from `CATALOG_LOG_FORMAT` (`json` by default).
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;
