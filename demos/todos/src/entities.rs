//! Domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project grouping todos. The service layer retires projects by flipping
/// `archived` rather than deleting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
	pub id: String,
	pub name: String,
	pub archived: bool,
}

/// A single todo item belonging to one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
	pub id: String,
	pub project_id: String,
	pub description: Option<String>,
	pub due_by: Option<DateTime<Utc>>,
	pub done: bool,
}

/// A project together with its todos, serialized flat so the todos sit next
/// to the project fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithTodos {
	#[serde(flatten)]
	pub project: Project,
	pub todos: Vec<Todo>,
}
