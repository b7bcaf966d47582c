#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` carries the verbosity model shared by the md4sum workspace.
//! Diagnostics fall into *info* categories ([`InfoFlag`]: input names and
//! end-of-run statistics) and *debug* categories ([`DebugFlag`]: digest
//! computation and input reads), each with its own numeric level.
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds the level of every flag. It is built from a
//!   `-v` count with [`VerbosityConfig::from_verbose_level`] and refined with
//!   `--info`/`--debug` tokens such as `stats2` or `io`.
//! - The active configuration lives in thread-local storage ([`init`]).
//!   Enabled diagnostics are collected as [`DiagnosticEvent`]s and handed to
//!   the front end with [`drain_events`], which decides where to print them.
//! - Library crates emit events through the `trace_*` macros, which wrap
//!   `tracing` with fixed `md4sum::*` targets. With the `tracing` feature,
//!   `Md4sumLayer` routes those events into the thread-local collector.
//! - [`info_log!`] and [`debug_log!`] record diagnostics without going
//!   through `tracing`.
//!
//! # Examples
//!
//! ```
//! use logging::{InfoFlag, VerbosityConfig, drain_events, info_log, init};
//!
//! let mut config = VerbosityConfig::from_verbose_level(0);
//! config.apply_info_flags("name").unwrap();
//! init(config);
//!
//! info_log!(Name, 1, "hashing {}", "notes.txt");
//! info_log!(Stats, 1, "suppressed");
//!
//! let events = drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].to_string(), "hashing notes.txt");
//! ```

mod config;
mod levels;
mod thread_local;
mod tracing_macros;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, current, debug_gte, drain_events, emit_debug, emit_info, info_gte, init,
};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{Md4sumLayer, init_tracing};
