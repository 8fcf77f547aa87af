//! Integration test utilities for Quintette
//!
//! Shared fixtures for the wiring tests: a quiet logger provider and a
//! one-call resolver for the complete demo application graph.

use std::sync::Arc;

use demos_todos::app::{bindings, TodoApp};
use demos_todos::logger::{SharedLogger, SilentLogger};
use quintette::{Context, DiResult, Provider};

/// Logger provider for wirings that should stay quiet.
pub fn silent_logger() -> Provider<SharedLogger> {
	Provider::value(Arc::new(SilentLogger) as SharedLogger)
}

/// Resolves the full demo graph with a silent logger.
pub fn resolve_demo_app() -> DiResult<TodoApp> {
	Context::create(bindings(silent_logger())).provide()
}
