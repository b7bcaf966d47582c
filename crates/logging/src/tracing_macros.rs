//! crates/logging/src/tracing_macros.rs
//! Convenience macros for md4sum-specific tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with the targets the `Md4sumLayer` bridge maps to
//! verbosity flags. Callers must depend on `tracing` themselves.

/// Emit a digest computation trace.
///
/// # Example
/// ```ignore
/// trace_hash!("md4 {} over {} bytes", digest, len);
/// ```
#[macro_export]
macro_rules! trace_hash {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "md4sum::hash", $($arg)*)
    };
}

/// Emit an input read trace.
///
/// # Example
/// ```ignore
/// trace_io!("read {} bytes", total);
/// ```
#[macro_export]
macro_rules! trace_io {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "md4sum::io", $($arg)*)
    };
}

/// Emit a per-chunk input read trace.
///
/// Chunk events sit one level below [`trace_io!`], so they need `--debug=io2`.
///
/// # Example
/// ```ignore
/// trace_io_chunk!(chunk = index, bytes = read, "read chunk");
/// ```
#[macro_export]
macro_rules! trace_io_chunk {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "md4sum::io", $($arg)*)
    };
}

/// Emit an input name trace.
///
/// # Example
/// ```ignore
/// trace_name!("hashing {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_name {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "md4sum::name", $($arg)*)
    };
}

/// Emit a statistics trace.
///
/// # Example
/// ```ignore
/// trace_stats!("hashed {} bytes", bytes);
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "md4sum::stats", $($arg)*)
    };
}

/// Record an info diagnostic directly when the flag is enabled.
///
/// ```
/// use logging::{VerbosityConfig, drain_events, info_log, init};
///
/// init(VerbosityConfig::from_verbose_level(1));
/// info_log!(Stats, 1, "hashed {} inputs", 2);
/// assert_eq!(drain_events()[0].message(), "hashed 2 inputs");
/// ```
#[macro_export]
macro_rules! info_log {
    ($flag:ident, $level:expr, $($arg:tt)*) => {
        if $crate::info_gte($crate::InfoFlag::$flag, $level) {
            $crate::emit_info($crate::InfoFlag::$flag, $level, format!($($arg)*));
        }
    };
}

/// Record a debug diagnostic directly when the flag is enabled.
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)*) => {
        if $crate::debug_gte($crate::DebugFlag::$flag, $level) {
            $crate::emit_debug($crate::DebugFlag::$flag, $level, format!($($arg)*));
        }
    };
}
