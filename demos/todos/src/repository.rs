//! Storage ports
//!
//! Services talk to storage through these traits only; the concrete backend
//! is chosen by the wiring. The in-memory backend lives in [`mock`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::entities::{Project, ProjectWithTodos, Todo};

pub mod mock;

/// Storage lookup failures. Carried up unchanged through the services.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("todo `{0}` does not exist")]
	TodoNotFound(String),

	#[error("project `{0}` does not exist")]
	ProjectNotFound(String),
}

/// Fields for a new todo. Only the project is mandatory.
#[derive(Debug, Clone)]
pub struct NewTodo {
	pub project_id: String,
	pub description: Option<String>,
	pub due_by: Option<DateTime<Utc>>,
	pub done: bool,
}

impl NewTodo {
	/// A todo with every optional field at its default.
	pub fn for_project(project_id: impl Into<String>) -> Self {
		Self {
			project_id: project_id.into(),
			description: None,
			due_by: None,
			done: false,
		}
	}
}

/// Partial update for a todo. `None` leaves the field untouched; for the
/// nullable fields the inner `Option` is the new value, so `Some(None)`
/// clears them.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
	pub description: Option<Option<String>>,
	pub due_by: Option<Option<DateTime<Utc>>>,
	pub done: Option<bool>,
}

/// Fields for a new project.
#[derive(Debug, Clone)]
pub struct NewProject {
	pub name: String,
	pub archived: bool,
}

impl NewProject {
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			archived: false,
		}
	}
}

/// Partial update for a project. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
	pub name: Option<String>,
	pub archived: Option<bool>,
}

/// Todo storage port.
pub trait TodoStore: Send + Sync {
	fn get(&self, id: &str) -> Result<Todo, StoreError>;
	fn get_all(&self) -> Vec<Todo>;
	fn get_for_project(&self, project_id: &str) -> Vec<Todo>;
	/// Fails when the target project does not exist.
	fn create(&self, data: NewTodo) -> Result<Todo, StoreError>;
	fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo, StoreError>;
	/// Returns `false` when there was nothing to delete.
	fn delete(&self, id: &str) -> bool;
}

/// Project storage port.
pub trait ProjectStore: Send + Sync {
	fn get(&self, id: &str) -> Result<Project, StoreError>;
	fn get_with_todos(&self, id: &str) -> Result<ProjectWithTodos, StoreError>;
	fn get_all(&self) -> Vec<Project>;
	fn get_all_with_todos(&self) -> Vec<ProjectWithTodos>;
	fn create(&self, data: NewProject) -> Project;
	fn update(&self, id: &str, patch: ProjectPatch) -> Result<Project, StoreError>;
	/// Returns `false` when there was nothing to delete.
	fn delete(&self, id: &str) -> bool;
}

/// How consumers hold the storage ports resolved from the context.
pub type SharedTodoStore = Arc<dyn TodoStore>;
pub type SharedProjectStore = Arc<dyn ProjectStore>;
