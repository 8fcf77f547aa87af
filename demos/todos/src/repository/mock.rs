//! In-memory storage backend
//!
//! Backs both storage ports with plain maps behind locks. One [`MockDb`]
//! instance is shared by the todo and project stores wired from it, so the
//! two ports always see the same data.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use quintette::{Construct, DiResult};

use crate::entities::{Project, ProjectWithTodos, Todo};
use crate::repository::{
	NewProject, NewTodo, ProjectPatch, ProjectStore, StoreError, TodoPatch, TodoStore,
};

/// Shared tables behind the mock stores.
///
/// Keeps a todo-id index per project so project reads can return their todos
/// in creation order without scanning the whole todo table. Ids are
/// stringified counters, allocated per instance starting at `0`.
#[derive(Debug, Default)]
pub struct MockDb {
	todos: RwLock<HashMap<String, Todo>>,
	projects: RwLock<HashMap<String, Project>>,
	todo_ids_by_project: RwLock<HashMap<String, Vec<String>>>,
	next_todo_id: AtomicU64,
	next_project_id: AtomicU64,
}

impl MockDb {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Construct for MockDb {
	fn construct() -> DiResult<Self> {
		Ok(Self::new())
	}
}

/// Restores creation order for rows pulled out of a hash table. Mock ids are
/// stringified counters, so their numeric value is the allocation order.
fn allocation_order(id: &str) -> u64 {
	id.parse().unwrap_or(u64::MAX)
}

/// Todo storage over a shared [`MockDb`].
#[derive(Debug)]
pub struct MockTodoStore {
	db: Arc<MockDb>,
}

impl MockTodoStore {
	pub fn new(db: Arc<MockDb>) -> Self {
		Self { db }
	}
}

impl TodoStore for MockTodoStore {
	fn get(&self, id: &str) -> Result<Todo, StoreError> {
		let todos = self.db.todos.read().unwrap_or_else(PoisonError::into_inner);
		todos
			.get(id)
			.cloned()
			.ok_or_else(|| StoreError::TodoNotFound(id.to_owned()))
	}

	fn get_all(&self) -> Vec<Todo> {
		let todos = self.db.todos.read().unwrap_or_else(PoisonError::into_inner);
		let mut all: Vec<Todo> = todos.values().cloned().collect();
		all.sort_unstable_by_key(|todo| allocation_order(&todo.id));
		all
	}

	fn get_for_project(&self, project_id: &str) -> Vec<Todo> {
		let todos = self.db.todos.read().unwrap_or_else(PoisonError::into_inner);
		let mut matching: Vec<Todo> = todos
			.values()
			.filter(|todo| todo.project_id == project_id)
			.cloned()
			.collect();
		matching.sort_unstable_by_key(|todo| allocation_order(&todo.id));
		matching
	}

	fn create(&self, data: NewTodo) -> Result<Todo, StoreError> {
		{
			let projects = self
				.db
				.projects
				.read()
				.unwrap_or_else(PoisonError::into_inner);
			if !projects.contains_key(&data.project_id) {
				return Err(StoreError::ProjectNotFound(data.project_id));
			}
		}

		let id = self
			.db
			.next_todo_id
			.fetch_add(1, Ordering::Relaxed)
			.to_string();
		let todo = Todo {
			id: id.clone(),
			project_id: data.project_id.clone(),
			description: data.description,
			due_by: data.due_by,
			done: data.done,
		};

		let mut index = self
			.db
			.todo_ids_by_project
			.write()
			.unwrap_or_else(PoisonError::into_inner);
		index.entry(data.project_id).or_default().push(id.clone());
		drop(index);

		let mut todos = self.db.todos.write().unwrap_or_else(PoisonError::into_inner);
		todos.insert(id, todo.clone());
		Ok(todo)
	}

	fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo, StoreError> {
		let mut todos = self.db.todos.write().unwrap_or_else(PoisonError::into_inner);
		let todo = todos
			.get_mut(id)
			.ok_or_else(|| StoreError::TodoNotFound(id.to_owned()))?;

		if let Some(description) = patch.description {
			todo.description = description;
		}
		if let Some(due_by) = patch.due_by {
			todo.due_by = due_by;
		}
		if let Some(done) = patch.done {
			todo.done = done;
		}

		Ok(todo.clone())
	}

	fn delete(&self, id: &str) -> bool {
		let mut todos = self.db.todos.write().unwrap_or_else(PoisonError::into_inner);
		let Some(todo) = todos.remove(id) else {
			return false;
		};
		drop(todos);

		let mut index = self
			.db
			.todo_ids_by_project
			.write()
			.unwrap_or_else(PoisonError::into_inner);
		if let Some(ids) = index.get_mut(&todo.project_id) {
			ids.retain(|known| known != id);
		}
		true
	}
}

/// Project storage over a shared [`MockDb`].
#[derive(Debug)]
pub struct MockProjectStore {
	db: Arc<MockDb>,
}

impl MockProjectStore {
	pub fn new(db: Arc<MockDb>) -> Self {
		Self { db }
	}

	/// Pulls the project's todos through the index, in creation order.
	fn attach_todos(&self, project: Project) -> ProjectWithTodos {
		let index = self
			.db
			.todo_ids_by_project
			.read()
			.unwrap_or_else(PoisonError::into_inner);
		let table = self.db.todos.read().unwrap_or_else(PoisonError::into_inner);

		let ids = index.get(&project.id).map(Vec::as_slice).unwrap_or(&[]);
		let todos = ids.iter().filter_map(|id| table.get(id).cloned()).collect();
		ProjectWithTodos { project, todos }
	}
}

impl ProjectStore for MockProjectStore {
	fn get(&self, id: &str) -> Result<Project, StoreError> {
		let projects = self
			.db
			.projects
			.read()
			.unwrap_or_else(PoisonError::into_inner);
		projects
			.get(id)
			.cloned()
			.ok_or_else(|| StoreError::ProjectNotFound(id.to_owned()))
	}

	fn get_with_todos(&self, id: &str) -> Result<ProjectWithTodos, StoreError> {
		let project = self.get(id)?;
		Ok(self.attach_todos(project))
	}

	fn get_all(&self) -> Vec<Project> {
		let projects = self
			.db
			.projects
			.read()
			.unwrap_or_else(PoisonError::into_inner);
		let mut all: Vec<Project> = projects.values().cloned().collect();
		all.sort_unstable_by_key(|project| allocation_order(&project.id));
		all
	}

	fn get_all_with_todos(&self) -> Vec<ProjectWithTodos> {
		self.get_all()
			.into_iter()
			.map(|project| self.attach_todos(project))
			.collect()
	}

	fn create(&self, data: NewProject) -> Project {
		let id = self
			.db
			.next_project_id
			.fetch_add(1, Ordering::Relaxed)
			.to_string();
		let project = Project {
			id: id.clone(),
			name: data.name,
			archived: data.archived,
		};

		let mut projects = self
			.db
			.projects
			.write()
			.unwrap_or_else(PoisonError::into_inner);
		projects.insert(id, project.clone());
		project
	}

	fn update(&self, id: &str, patch: ProjectPatch) -> Result<Project, StoreError> {
		let mut projects = self
			.db
			.projects
			.write()
			.unwrap_or_else(PoisonError::into_inner);
		let project = projects
			.get_mut(id)
			.ok_or_else(|| StoreError::ProjectNotFound(id.to_owned()))?;

		if let Some(name) = patch.name {
			project.name = name;
		}
		if let Some(archived) = patch.archived {
			project.archived = archived;
		}

		Ok(project.clone())
	}

	// Todos under the project stay in the todo table; only the project row
	// goes away.
	fn delete(&self, id: &str) -> bool {
		let mut projects = self
			.db
			.projects
			.write()
			.unwrap_or_else(PoisonError::into_inner);
		projects.remove(id).is_some()
	}
}
