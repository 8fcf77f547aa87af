//! Application services
//!
//! Thin orchestration over the storage ports. Each service resolves its port
//! from the ambient context once, at construction time, so a service value
//! stays usable after the context that built it has been torn down.

use std::fmt;

use chrono::{DateTime, Utc};
use quintette::{Construct, Context, DiResult};

use crate::entities::{Project, ProjectWithTodos, Todo};
use crate::repository::{
	NewProject, NewTodo, ProjectPatch, SharedProjectStore, SharedTodoStore, StoreError, TodoPatch,
};
use crate::tags::{PROJECT_STORE, TODO_STORE};

/// Todo use cases.
#[derive(Clone)]
pub struct TodoService {
	todos: SharedTodoStore,
}

impl fmt::Debug for TodoService {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TodoService").finish_non_exhaustive()
	}
}

impl Construct for TodoService {
	fn construct() -> DiResult<Self> {
		let todos = (*Context::get(&TODO_STORE)?).clone();
		Ok(Self { todos })
	}
}

impl TodoService {
	pub fn get(&self, id: &str) -> Result<Todo, StoreError> {
		self.todos.get(id)
	}

	/// All todos under one project, in creation order.
	pub fn get_all(&self, project_id: &str) -> Vec<Todo> {
		self.todos.get_for_project(project_id)
	}

	pub fn create(
		&self,
		project_id: impl Into<String>,
		description: Option<String>,
		due_by: Option<DateTime<Utc>>,
		done: bool,
	) -> Result<Todo, StoreError> {
		self.todos.create(NewTodo {
			project_id: project_id.into(),
			description,
			due_by,
			done,
		})
	}

	/// Replaces both editable fields at once. Passing `None` clears a field,
	/// it does not preserve it.
	pub fn update(
		&self,
		id: &str,
		description: Option<String>,
		due_by: Option<DateTime<Utc>>,
	) -> Result<Todo, StoreError> {
		self.todos.update(
			id,
			TodoPatch {
				description: Some(description),
				due_by: Some(due_by),
				done: None,
			},
		)
	}

	pub fn set_done(&self, id: &str, done: bool) -> Result<Todo, StoreError> {
		self.todos.update(
			id,
			TodoPatch {
				done: Some(done),
				..TodoPatch::default()
			},
		)
	}
}

/// Project use cases. Reads always come back with the project's todos.
#[derive(Clone)]
pub struct ProjectService {
	projects: SharedProjectStore,
}

impl fmt::Debug for ProjectService {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProjectService").finish_non_exhaustive()
	}
}

impl Construct for ProjectService {
	fn construct() -> DiResult<Self> {
		let projects = (*Context::get(&PROJECT_STORE)?).clone();
		Ok(Self { projects })
	}
}

impl ProjectService {
	pub fn get(&self, id: &str) -> Result<ProjectWithTodos, StoreError> {
		self.projects.get_with_todos(id)
	}

	pub fn get_all(&self) -> Vec<ProjectWithTodos> {
		self.projects.get_all_with_todos()
	}

	pub fn create(&self, name: impl Into<String>) -> Project {
		self.projects.create(NewProject::named(name))
	}

	pub fn rename(&self, id: &str, name: impl Into<String>) -> Result<Project, StoreError> {
		self.projects.update(
			id,
			ProjectPatch {
				name: Some(name.into()),
				archived: None,
			},
		)
	}

	pub fn archive(&self, id: &str) -> Result<Project, StoreError> {
		self.projects.update(
			id,
			ProjectPatch {
				archived: Some(true),
				..ProjectPatch::default()
			},
		)
	}

	pub fn restore(&self, id: &str) -> Result<Project, StoreError> {
		self.projects.update(
			id,
			ProjectPatch {
				archived: Some(false),
				..ProjectPatch::default()
			},
		)
	}
}
