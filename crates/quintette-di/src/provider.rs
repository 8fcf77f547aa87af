//! Providers and bindings
//!
//! A [`Provider`] is a recipe for producing one value; [`provide`] marries a
//! recipe to a [`Tag`] and erases the pair into a [`Binding`] that
//! [`Context::create`](crate::Context::create) can record. Nothing runs at
//! binding time; every recipe is deferred until the context is resolved.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::DiResult;
use crate::tag::{Tag, TagKey};

/// Zero-argument fallible construction.
///
/// This is the hook behind [`Provider::constructible`] and behind root
/// assembly in [`Context::provide`](crate::Context::provide). Implementations
/// typically pull their dependencies out of the active resolution:
///
/// ```
/// use std::sync::Arc;
///
/// use once_cell::sync::Lazy;
/// use quintette_di::{Construct, Context, DiResult, Tag};
///
/// static GREETING: Lazy<Tag<String>> = Lazy::new(|| Tag::new("config/greeting"));
///
/// struct Greeter {
///     greeting: Arc<String>,
/// }
///
/// impl Construct for Greeter {
///     fn construct() -> DiResult<Self> {
///         Ok(Self {
///             greeting: Context::get(&GREETING)?,
///         })
///     }
/// }
/// ```
pub trait Construct: Sized {
	fn construct() -> DiResult<Self>;
}

/// Recipe for producing the value of one binding.
pub enum Provider<T> {
	/// Defers to [`Construct::construct`] at resolution time. A fresh value
	/// is built for every resolution.
	Constructible(fn() -> DiResult<T>),
	/// A precomputed constant. The stored value is shared as-is with every
	/// consumer; it is never rebuilt or copied.
	Value(T),
	/// A one-shot closure run at resolution time. Factories may look up any
	/// tag bound earlier in the order with
	/// [`Context::get`](crate::Context::get).
	Factory(Box<dyn FnOnce() -> DiResult<T> + Send>),
}

impl<T> Provider<T> {
	/// Provider that builds `T` through its [`Construct`] impl.
	pub fn constructible() -> Self
	where
		T: Construct,
	{
		Provider::Constructible(T::construct)
	}

	/// Provider that hands out `value` itself.
	pub fn value(value: T) -> Self {
		Provider::Value(value)
	}

	/// Provider that runs `factory` once during resolution.
	pub fn factory<F>(factory: F) -> Self
	where
		F: FnOnce() -> DiResult<T> + Send + 'static,
	{
		Provider::Factory(Box::new(factory))
	}
}

impl<T> fmt::Debug for Provider<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Provider::Constructible(_) => f.write_str("Provider::Constructible"),
			Provider::Value(_) => f.write_str("Provider::Value"),
			Provider::Factory(_) => f.write_str("Provider::Factory"),
		}
	}
}

pub(crate) type Thunk = Box<dyn FnOnce() -> DiResult<Arc<dyn Any + Send + Sync>> + Send>;

/// One `(tag, provider)` pair, type-erased and ready for
/// [`Context::create`](crate::Context::create).
pub struct Binding {
	pub(crate) key: TagKey,
	pub(crate) thunk: Thunk,
}

impl Binding {
	/// Diagnostic name of the bound tag.
	pub fn tag_name(&self) -> &'static str {
		self.key.name
	}
}

impl fmt::Debug for Binding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Binding")
			.field("tag", &self.key.name)
			.finish()
	}
}

/// Pairs `tag` with the provider that will produce its value.
///
/// Pure: the provider is normalized into a deferred thunk, and nothing runs
/// until [`Context::provide`](crate::Context::provide) drains the bindings.
/// The pair is type-checked here, at its own call site; after this point the
/// binding is erased and only the tag identity travels with it.
pub fn provide<T>(tag: &Tag<T>, provider: Provider<T>) -> Binding
where
	T: Send + Sync + 'static,
{
	let thunk: Thunk = match provider {
		Provider::Constructible(build) => Box::new(move || {
			let value = build()?;
			Ok(Arc::new(value) as Arc<dyn Any + Send + Sync>)
		}),
		Provider::Value(value) => {
			let shared: Arc<dyn Any + Send + Sync> = Arc::new(value);
			Box::new(move || Ok(shared))
		}
		Provider::Factory(factory) => Box::new(move || {
			let value = factory()?;
			Ok(Arc::new(value) as Arc<dyn Any + Send + Sync>)
		}),
	};
	Binding {
		key: tag.key(),
		thunk,
	}
}
