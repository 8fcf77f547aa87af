//! # Quintette
//!
//! An ordered, tag-based dependency injection runtime.
//!
//! Quintette wires an object graph the way a careful hand-written `main`
//! would: you declare what exists (tags), how each piece is built
//! (providers), and the order to build it in (a context). Resolution is
//! synchronous and one-shot; the resolved instances live on a process-wide
//! ambient register for exactly as long as the resolution runs.
//!
//! ## Core Principles
//!
//! - **Explicit order over graph solving**: bindings resolve in the order
//!   you wrote them; there is no dependency solver to second-guess you
//! - **Identity over names**: a [`Tag`] is its own identity, so modules can
//!   never collide by picking the same string
//! - **Fail fast**: a missing binding, a lookup outside a resolution or an
//!   overlapping resolution is a hard error carrying the tag's name
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use once_cell::sync::Lazy;
//! use quintette::prelude::*;
//!
//! static MOTD: Lazy<Tag<String>> = Lazy::new(|| Tag::new("config/motd"));
//! static BANNER: Lazy<Tag<String>> = Lazy::new(|| Tag::new("service/banner"));
//!
//! struct App {
//!     banner: Arc<String>,
//! }
//!
//! impl Construct for App {
//!     fn construct() -> DiResult<Self> {
//!         Ok(Self {
//!             banner: Context::get(&BANNER)?,
//!         })
//!     }
//! }
//!
//! let app: App = Context::provide(Context::create([
//!     provide(&MOTD, Provider::value("plus vite".to_string())),
//!     provide(
//!         &BANNER,
//!         Provider::factory(|| Ok(format!("quintette: {}", Context::get(&MOTD)?))),
//!     ),
//! ]))
//! .unwrap();
//!
//! assert_eq!(app.banner.as_str(), "quintette: plus vite");
//! ```

pub use quintette_di::{
	provide, Binding, Construct, Context, ContextError, DiResult, Provider, Tag,
};

pub mod prelude {
	//! Single-import surface for application crates.
	pub use crate::{provide, Construct, Context, ContextError, DiResult, Provider, Tag};
}
