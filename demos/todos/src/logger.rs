//! Logging service
//!
//! The logger is itself an injected dependency, so the live wiring and the
//! test wiring can swap implementations without touching any consumer.

use std::sync::Arc;

/// Application-facing log sink.
pub trait Logger: Send + Sync {
	fn log(&self, message: &str);
}

/// How consumers hold a logger resolved from the context.
pub type SharedLogger = Arc<dyn Logger>;

/// Forwards messages to `tracing` at info level, optionally prefixed.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
	prefix: Option<String>,
}

impl ConsoleLogger {
	/// A logger that prepends `prefix` to every message.
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self {
			prefix: Some(prefix.into()),
		}
	}
}

impl Logger for ConsoleLogger {
	fn log(&self, message: &str) {
		match &self.prefix {
			Some(prefix) => tracing::info!("{prefix} {message}"),
			None => tracing::info!("{message}"),
		}
	}
}

/// Drops every message. Used by test wirings.
#[derive(Debug, Default)]
pub struct SilentLogger;

impl Logger for SilentLogger {
	fn log(&self, _message: &str) {}
}
