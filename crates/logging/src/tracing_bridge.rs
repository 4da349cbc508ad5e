//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and a leveled [`Logger`].
//!
//! [`BitlogLayer`] is a tracing-subscriber layer that forwards every event to
//! a shared logger, mapping tracing levels onto the well-known level bits.
//! The logger's enabled mask then decides whether the event is written.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bitlog::{LevelSet, Logger, init_tracing};
//!
//! let logger = Arc::new(Logger::new(std::io::stderr(), LevelSet::DEFAULT));
//! init_tracing(Arc::clone(&logger));
//!
//! tracing::warn!("disk almost full");
//! ```

use std::io::Write;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::level::LevelSet;
use crate::logger::Logger;

/// Target prefix of the crate's own diagnostics, which the layer never
/// forwards.
const OWN_TARGET: &str = "bitlog";

/// A tracing layer writing events through a [`Logger`].
pub struct BitlogLayer<W> {
    logger: Arc<Logger<W>>,
}

impl<W> BitlogLayer<W> {
    /// Creates a layer forwarding to `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W>>) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a level bit.
    const fn level_to_level_set(level: &Level) -> LevelSet {
        match *level {
            Level::ERROR => LevelSet::ERROR,
            Level::WARN => LevelSet::WARN,
            Level::INFO => LevelSet::INFO,
            Level::DEBUG | Level::TRACE => LevelSet::DEBUG,
        }
    }
}

impl<S, W> Layer<S> for BitlogLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target().starts_with(OWN_TARGET) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let level = Self::level_to_level_set(metadata.level());
        // A failed write has nowhere else to be reported.
        let _ = self
            .logger
            .at_level(level, &[crate::Arg::from(message.as_str())]);
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
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

/// Install a global tracing subscriber that writes through `logger`.
///
/// Panics if a global subscriber is already set.
pub fn init_tracing<W>(logger: Arc<Logger<W>>)
where
    W: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(BitlogLayer::new(logger))
        .init();
}

/// Like [`init_tracing`], with an additional filter layer in front.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(logger, EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<W, F>(logger: Arc<Logger<W>>, filter: F)
where
    W: Write + Send + 'static,
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(BitlogLayer::new(logger))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn capture(mask: LevelSet, f: impl FnOnce()) -> String {
        let logger = Arc::new(Logger::new(Vec::new(), mask));
        let subscriber = tracing_subscriber::registry().with(BitlogLayer::new(Arc::clone(&logger)));
        tracing::subscriber::with_default(subscriber, f);
        let output = logger.with_sink(std::mem::take);
        String::from_utf8(output).expect("utf-8")
    }

    #[test]
    fn test_level_to_level_set() {
        type L = BitlogLayer<Vec<u8>>;
        assert_eq!(L::level_to_level_set(&Level::ERROR), LevelSet::ERROR);
        assert_eq!(L::level_to_level_set(&Level::WARN), LevelSet::WARN);
        assert_eq!(L::level_to_level_set(&Level::INFO), LevelSet::INFO);
        assert_eq!(L::level_to_level_set(&Level::DEBUG), LevelSet::DEBUG);
        assert_eq!(L::level_to_level_set(&Level::TRACE), LevelSet::DEBUG);
    }

    #[test]
    fn events_are_written_through_the_logger() {
        let output = capture(LevelSet::DEFAULT, || {
            tracing::warn!("disk at {}%", 97);
            tracing::debug!("suppressed by the mask");
        });
        assert_eq!(output, "[WARNING] disk at 97%\n");
    }

    #[test]
    fn own_diagnostics_are_not_forwarded() {
        let output = capture(LevelSet::ALL, || {
            tracing::warn!(target: "bitlog::registry", "internal");
            tracing::info!(target: "app", "external");
        });
        assert_eq!(output, "[INFO] external\n");
    }

    #[test]
    fn registry_conflicts_do_not_deadlock() {
        let logger = Arc::new(Logger::new(Vec::new(), LevelSet::ALL));
        let subscriber = tracing_subscriber::registry().with(BitlogLayer::new(Arc::clone(&logger)));
        tracing::subscriber::with_default(subscriber, || {
            assert!(logger.register_level(LevelSet::INFO, "AGAIN").is_err());
            logger.unregister_level(LevelSet::DEBUG);
        });
        assert!(logger.with_sink(|sink| sink.is_empty()));
    }
}
