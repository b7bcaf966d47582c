//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and md4sum's verbosity system.
//!
//! [`Md4sumLayer`] is a tracing-subscriber layer that maps events to info or
//! debug flags by target and records the ones the thread-local
//! [`VerbosityConfig`] enables as [`DiagnosticEvent`](crate::DiagnosticEvent)s.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//!
//! tracing::debug!(target: "md4sum::hash", "computing digest");
//! ```

use std::sync::Once;

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::thread_local::{debug_gte, emit_debug, emit_info, info_gte};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that bridges tracing events to md4sum's verbosity system.
#[derive(Debug, Default)]
pub struct Md4sumLayer {
    _private: (),
}

impl Md4sumLayer {
    /// Create a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        match target {
            t if t.ends_with("::name") || t == "name" => Some(InfoFlag::Name),
            t if t.ends_with("::stats") || t == "stats" => Some(InfoFlag::Stats),
            _ => None,
        }
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        match target {
            t if t.ends_with("::hash") || t == "hash" => Some(DebugFlag::Hash),
            t if t.ends_with("::io") || t == "io" => Some(DebugFlag::Io),
            _ => None,
        }
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S> Layer<S> for Md4sumLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        // Debug flags count from 1 for DEBUG events; info flags from 1 for INFO.
        let verbosity_level = Self::level_to_verbosity_level(metadata.level());

        if let Some(debug_flag) = Self::target_to_debug_flag(target) {
            let level = verbosity_level.saturating_sub(1).max(1);
            if debug_gte(debug_flag, level) {
                if let Some(message) = MessageVisitor::message_of(event) {
                    emit_debug(debug_flag, level, message);
                }
            }
            return;
        }

        if let Some(info_flag) = Self::target_to_info_flag(target) {
            if info_gte(info_flag, verbosity_level) {
                if let Some(message) = MessageVisitor::message_of(event) {
                    emit_info(info_flag, verbosity_level, message);
                }
            }
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl MessageVisitor {
    fn message_of(event: &tracing::Event<'_>) -> Option<String> {
        let mut visitor = Self::default();
        event.record(&mut visitor);
        visitor.message
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Guards installation of the global subscriber. Threads racing through
/// [`init_tracing`] wait until the subscriber is in place.
static INSTALL: Once = Once::new();

/// Initialize tracing with md4sum verbosity configuration.
///
/// The first call installs [`Md4sumLayer`] as the global subscriber; later
/// calls only replace the calling thread's verbosity configuration.
pub fn init_tracing(config: VerbosityConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config);

    INSTALL.call_once(|| {
        // Another global subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(Md4sumLayer::new())
            .try_init();
    });
}
