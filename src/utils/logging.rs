use crate::core::models::ContentKind;
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
    pub fn init(default_filter: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // A host may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub fn engine_constructed(kind: ContentKind) {
        debug!("🔧 Constructed {} engine", kind);
    }

    pub fn ignored_option(kind: ContentKind, key: &str) {
        debug!("🙈 Ignoring unrecognized {} option: {}", kind, key);
    }

    pub fn unsupported_level(kind: ContentKind, level: &str, fallback: &str) {
        warn!(
            "⚠️  Unsupported {} compress level '{}', using '{}'",
            kind, level, fallback
        );
    }

    pub fn nested_fallback(tag: &str, reason: &str) {
        warn!("⚠️  Leaving <{}> content untouched: {}", tag, reason);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
