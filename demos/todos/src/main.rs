//! Live entry point: full graph with a console logger, one scripted run.

use std::sync::Arc;

use quintette::{Context, Provider};
use tracing_subscriber::EnvFilter;

use demos_todos::app::{bindings, AppError, TodoApp};
use demos_todos::logger::{ConsoleLogger, SharedLogger};

fn main() -> Result<(), AppError> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
		.init();

	let logger =
		Provider::factory(|| Ok(Arc::new(ConsoleLogger::with_prefix("[live]")) as SharedLogger));

	let app: TodoApp = Context::create(bindings(logger)).provide()?;
	app.run()
}
