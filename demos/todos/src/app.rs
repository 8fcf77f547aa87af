//! Demo application root
//!
//! [`TodoApp`] is the one value resolved out of the context in `main`. It
//! holds both services plus the logger and walks a short scripted scenario
//! over them. [`bindings`] builds the full demo graph in resolution order.

use std::sync::Arc;

use quintette::{provide, Binding, Construct, Context, ContextError, DiResult, Provider};
use thiserror::Error;

use crate::logger::SharedLogger;
use crate::repository::mock::{MockProjectStore, MockTodoStore};
use crate::repository::{SharedProjectStore, SharedTodoStore, StoreError};
use crate::services::{ProjectService, TodoService};
use crate::tags::{LOGGER, MOCK_DB, PROJECT_SRV, PROJECT_STORE, TODO_SRV, TODO_STORE};

/// Anything the demo scenario can fail with.
#[derive(Debug, Error)]
pub enum AppError {
	#[error(transparent)]
	Store(#[from] StoreError),

	#[error(transparent)]
	Context(#[from] ContextError),

	#[error("failed to render listing: {0}")]
	Render(#[from] serde_json::Error),
}

/// Composition root of the demo.
///
/// Built once per resolution via [`Construct`]; everything it holds was
/// produced by the bindings that ran before root assembly, so the app stays
/// fully usable after the context has been released.
pub struct TodoApp {
	todos: Arc<TodoService>,
	projects: Arc<ProjectService>,
	logger: SharedLogger,
}

impl Construct for TodoApp {
	fn construct() -> DiResult<Self> {
		Ok(Self {
			todos: Context::get(&TODO_SRV)?,
			projects: Context::get(&PROJECT_SRV)?,
			logger: (*Context::get(&LOGGER)?).clone(),
		})
	}
}

impl TodoApp {
	pub fn todos(&self) -> &TodoService {
		&self.todos
	}

	pub fn projects(&self) -> &ProjectService {
		&self.projects
	}

	/// Walks one project through its life: created, filled with todos, one
	/// todo completed, one reworded, listed, then archived.
	pub fn run(&self) -> Result<(), AppError> {
		let groceries = self.projects.create("Groceries");
		self.logger.log(&format!(
			"created project `{}` ({})",
			groceries.name, groceries.id
		));

		let milk = self
			.todos
			.create(groceries.id.clone(), Some("buy milk".into()), None, false)?;
		let bread = self
			.todos
			.create(groceries.id.clone(), Some("buy bread".into()), None, false)?;
		self.todos
			.create(groceries.id.clone(), Some("buy coffee".into()), None, false)?;

		self.todos.set_done(&milk.id, true)?;
		self.todos.update(&bread.id, Some("buy rye bread".into()), None)?;

		let listing = self.projects.get(&groceries.id)?;
		self.logger.log(&serde_json::to_string_pretty(&listing)?);

		let archived = self.projects.archive(&groceries.id)?;
		self.logger.log(&format!("archived project `{}`", archived.name));

		Ok(())
	}
}

/// The full demo graph in binding order.
///
/// The database comes first so the store factories can pull it, the services
/// follow their ports, and the logger is bound last from whatever provider
/// the caller hands in (a live console in `main`, a silent one in tests).
pub fn bindings(logger: Provider<SharedLogger>) -> Vec<Binding> {
	vec![
		provide(&MOCK_DB, Provider::constructible()),
		provide(
			&TODO_STORE,
			Provider::factory(|| {
				let db = Context::get(&MOCK_DB)?;
				Ok(Arc::new(MockTodoStore::new(db)) as SharedTodoStore)
			}),
		),
		provide(
			&PROJECT_STORE,
			Provider::factory(|| {
				let db = Context::get(&MOCK_DB)?;
				Ok(Arc::new(MockProjectStore::new(db)) as SharedProjectStore)
			}),
		),
		provide(&TODO_SRV, Provider::constructible()),
		provide(&PROJECT_SRV, Provider::constructible()),
		provide(&LOGGER, logger),
	]
}
