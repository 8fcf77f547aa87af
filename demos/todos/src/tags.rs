//! Wiring vocabulary
//!
//! Every tag the demo binds or resolves, in one place. Names follow the
//! `area/component` scheme so resolution logs read like a path.

use once_cell::sync::Lazy;
use quintette::Tag;

use crate::logger::SharedLogger;
use crate::repository::mock::MockDb;
use crate::repository::{SharedProjectStore, SharedTodoStore};
use crate::services::{ProjectService, TodoService};

/// The shared in-memory database both stores are built from.
pub static MOCK_DB: Lazy<Tag<MockDb>> = Lazy::new(|| Tag::new("repository/db"));

pub static TODO_STORE: Lazy<Tag<SharedTodoStore>> = Lazy::new(|| Tag::new("repository/todo"));

pub static PROJECT_STORE: Lazy<Tag<SharedProjectStore>> =
	Lazy::new(|| Tag::new("repository/project"));

pub static TODO_SRV: Lazy<Tag<TodoService>> = Lazy::new(|| Tag::new("service/todo"));

pub static PROJECT_SRV: Lazy<Tag<ProjectService>> = Lazy::new(|| Tag::new("service/project"));

/// Bound by the caller so tests can swap in a silent logger.
pub static LOGGER: Lazy<Tag<SharedLogger>> = Lazy::new(|| Tag::new("service/logger"));
