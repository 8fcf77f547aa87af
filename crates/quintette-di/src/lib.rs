//! # Quintette Dependency Injection
//!
//! Tag-based dependency injection with ordered, one-shot resolution.
//!
//! ## Features
//!
//! - **Tags**: typed identity handles; two tags never collide, whatever
//!   their names
//! - **Providers**: constructible, value and factory recipes, normalized
//!   into deferred thunks
//! - **Ordered resolution**: bindings resolve strictly in insertion order,
//!   each one able to see everything resolved before it
//! - **Ambient context**: one process-wide register, claimed for the
//!   duration of a resolution and always released
//! - **Fail fast**: missing tags, re-entrant resolution and lookups outside
//!   a resolution are hard errors, never silent fallbacks
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use once_cell::sync::Lazy;
//! use quintette_di::{provide, Construct, Context, DiResult, Provider, Tag};
//!
//! static GREETING: Lazy<Tag<String>> = Lazy::new(|| Tag::new("config/greeting"));
//! static GREETER: Lazy<Tag<Greeter>> = Lazy::new(|| Tag::new("service/greeter"));
//!
//! struct Greeter {
//!     greeting: Arc<String>,
//! }
//!
//! impl Construct for Greeter {
//!     fn construct() -> DiResult<Self> {
//!         Ok(Self {
//!             greeting: Context::get(&GREETING)?,
//!         })
//!     }
//! }
//!
//! struct App {
//!     greeter: Arc<Greeter>,
//! }
//!
//! impl Construct for App {
//!     fn construct() -> DiResult<Self> {
//!         Ok(Self {
//!             greeter: Context::get(&GREETER)?,
//!         })
//!     }
//! }
//!
//! let app: App = Context::provide(Context::create([
//!     provide(&GREETING, Provider::value("bonjour".to_string())),
//!     provide(&GREETER, Provider::constructible()),
//! ]))
//! .unwrap();
//!
//! assert_eq!(app.greeter.greeting.as_str(), "bonjour");
//! ```

mod context;
mod error;
mod provider;
mod store;
mod tag;

pub use context::Context;
pub use error::{ContextError, DiResult};
pub use provider::{provide, Binding, Construct, Provider};
pub use tag::Tag;
