//! Demo application wiring end to end
//!
//! These tests verify that:
//! 1. The full demo graph resolves through the facade and the scripted
//!    scenario completes
//! 2. Cross-service flows observe one shared database
//! 3. The ambient register is released once the application is assembled

use serial_test::serial;

use demos_todos::tags::PROJECT_SRV;
use quintette::{Context, ContextError};
use quintette_integration_tests::resolve_demo_app;

#[test]
#[serial]
fn test_demo_scenario_runs_end_to_end() {
	let app = resolve_demo_app().unwrap();
	app.run().unwrap();

	// run() leaves exactly one archived project with three todos behind
	let listing = app.projects().get_all();
	assert_eq!(listing.len(), 1);
	assert!(listing[0].project.archived);
	assert_eq!(listing[0].todos.len(), 3);
	assert!(listing[0].todos.iter().any(|todo| todo.done));
}

#[test]
#[serial]
fn test_services_share_one_database() {
	let app = resolve_demo_app().unwrap();

	let project = app.projects().create("Workshop");
	let todo = app
		.todos()
		.create(project.id.clone(), Some("oil the hinges".into()), None, false)
		.unwrap();
	app.todos().set_done(&todo.id, true).unwrap();

	// the project service sees what the todo service wrote
	let seen = app.projects().get(&project.id).unwrap();
	assert_eq!(seen.todos.len(), 1);
	assert!(seen.todos[0].done);
}

#[test]
#[serial]
fn test_register_is_released_after_assembly() {
	let _app = resolve_demo_app().unwrap();

	let err = Context::get(&PROJECT_SRV).unwrap_err();
	assert!(matches!(err, ContextError::Undefined));
}
