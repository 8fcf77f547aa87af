//! Container behavior through the public facade
//!
//! These tests verify that:
//! 1. A mixed graph of value, factory and constructible providers resolves
//!    in binding order through the `quintette` facade
//! 2. Value bindings keep their identity end to end
//! 3. Rebinding a tag swaps the recipe without moving its position
//! 4. A failed resolution names the offending tag and releases the register
//! 5. Nothing stays installed once resolution is over

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serial_test::serial;

use quintette::prelude::*;
use quintette::Binding;

trait Transport: Send + Sync {
	fn deliver(&self, message: &str) -> String;
}

type SharedTransport = Arc<dyn Transport>;

struct Smtp {
	relay: Arc<String>,
}

impl Transport for Smtp {
	fn deliver(&self, message: &str) -> String {
		format!("smtp://{}: {message}", self.relay)
	}
}

struct Memory;

impl Transport for Memory {
	fn deliver(&self, message: &str) -> String {
		format!("memory: {message}")
	}
}

static RELAY: Lazy<Tag<String>> = Lazy::new(|| Tag::new("config/relay"));
static SENDER: Lazy<Tag<String>> = Lazy::new(|| Tag::new("config/sender"));
static TRANSPORT: Lazy<Tag<SharedTransport>> = Lazy::new(|| Tag::new("transport/mail"));
static NOTIFIER: Lazy<Tag<Notifier>> = Lazy::new(|| Tag::new("service/notifier"));
static ROSTER: Lazy<Tag<Arc<Vec<String>>>> = Lazy::new(|| Tag::new("config/roster"));

struct Notifier {
	transport: SharedTransport,
	sender: Arc<String>,
}

impl Construct for Notifier {
	fn construct() -> DiResult<Self> {
		Ok(Self {
			transport: (*Context::get(&TRANSPORT)?).clone(),
			sender: Context::get(&SENDER)?,
		})
	}
}

impl Notifier {
	fn send(&self, message: &str) -> String {
		self.transport
			.deliver(&format!("{} says {message}", self.sender))
	}
}

impl fmt::Debug for Notifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Notifier").finish_non_exhaustive()
	}
}

#[derive(Debug)]
struct MailApp {
	notifier: Arc<Notifier>,
}

impl Construct for MailApp {
	fn construct() -> DiResult<Self> {
		Ok(Self {
			notifier: Context::get(&NOTIFIER)?,
		})
	}
}

fn smtp_transport() -> Provider<SharedTransport> {
	Provider::factory(|| {
		let relay = Context::get(&RELAY)?;
		Ok(Arc::new(Smtp { relay }) as SharedTransport)
	})
}

fn full_bindings() -> Vec<Binding> {
	vec![
		provide(&RELAY, Provider::value("mail.internal".to_string())),
		provide(&SENDER, Provider::value("quintette".to_string())),
		provide(&TRANSPORT, smtp_transport()),
		provide(&NOTIFIER, Provider::constructible()),
	]
}

#[test]
#[serial]
fn test_mixed_graph_resolves_through_the_facade() {
	let app: MailApp = Context::create(full_bindings()).provide().unwrap();

	assert_eq!(
		app.notifier.send("hello"),
		"smtp://mail.internal: quintette says hello"
	);
}

#[test]
#[serial]
fn test_value_bindings_keep_their_identity() {
	struct RosterHolder {
		roster: Arc<Vec<String>>,
	}

	impl Construct for RosterHolder {
		fn construct() -> DiResult<Self> {
			Ok(Self {
				roster: (*Context::get(&ROSTER)?).clone(),
			})
		}
	}

	let shared = Arc::new(vec!["ada".to_string(), "grace".to_string()]);
	let holder: RosterHolder =
		Context::create([provide(&ROSTER, Provider::value(Arc::clone(&shared)))])
			.provide()
			.unwrap();

	assert!(Arc::ptr_eq(&shared, &holder.roster));
}

#[test]
#[serial]
fn test_rebinding_overrides_without_moving() {
	let mut bindings = full_bindings();
	bindings.push(provide(
		&TRANSPORT,
		Provider::factory(|| Ok(Arc::new(Memory) as SharedTransport)),
	));

	// the override replaces the smtp recipe but stays ahead of the notifier
	let app: MailApp = Context::create(bindings).provide().unwrap();
	assert_eq!(app.notifier.send("hello"), "memory: quintette says hello");
}

#[test]
#[serial]
fn test_missing_binding_names_the_tag() {
	// the transport factory runs before any relay is bound
	let err = Context::create([provide(&TRANSPORT, smtp_transport())])
		.provide::<MailApp>()
		.unwrap_err();
	assert!(matches!(err, ContextError::TagNotProvided("config/relay")));

	let after = Context::get(&RELAY).unwrap_err();
	assert!(matches!(after, ContextError::Undefined));
}

#[test]
#[serial]
fn test_register_is_clean_after_resolution() {
	let _app: MailApp = Context::create(full_bindings()).provide().unwrap();

	let err = Context::get(&NOTIFIER).unwrap_err();
	assert!(matches!(err, ContextError::Undefined));
}
