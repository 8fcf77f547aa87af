//! Ordered one-shot context resolution

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::error::{ContextError, DiResult};
use crate::provider::{Binding, Construct, Thunk};
use crate::store::{self, Instances};
use crate::tag::{Tag, TagKey};

/// An ordered list of bindings, resolvable exactly once.
///
/// [`Context::create`] records bindings without running anything;
/// [`Context::provide`] drains them in insertion order into the process-wide
/// register and assembles the root object. `provide` takes the context by
/// value, so a resolved (or failed) context is gone; there is no way to hand
/// the same bindings to the engine twice.
///
/// Dependency order is the caller's responsibility. The engine performs no
/// cycle detection and no reordering: a binding can only see what was bound
/// and resolved before it.
pub struct Context {
	ctors: Vec<(TagKey, Thunk)>,
	instances: Instances,
}

impl Context {
	/// Records `bindings` in the order given. Nothing is constructed yet.
	///
	/// Binding the same tag twice replaces the earlier recipe but keeps the
	/// earlier position in the order.
	pub fn create(bindings: impl IntoIterator<Item = Binding>) -> Self {
		let mut ctors: Vec<(TagKey, Thunk)> = Vec::new();
		for binding in bindings {
			let Binding { key, thunk } = binding;
			match ctors.iter_mut().find(|(existing, _)| existing.id == key.id) {
				Some(slot) => slot.1 = thunk,
				None => ctors.push((key, thunk)),
			}
		}
		tracing::debug!(bindings = ctors.len(), "context created");
		Self {
			ctors,
			instances: Instances::new(),
		}
	}

	/// Resolves every binding in insertion order, then assembles the root.
	///
	/// The context's instance map is installed on the ambient register for
	/// the duration of the call; that is what lets factories, [`Construct`]
	/// impls and the root itself call [`Context::get`]. Each resolved value
	/// is stored before the next thunk runs, so every binding can look up
	/// anything bound before it, and nothing bound after it.
	///
	/// Exactly one resolution may be in flight per process; starting a
	/// second one, including from inside a running provider, fails with
	/// [`ContextError::Undefined`]. The register is released on every exit
	/// path. A provider or root error aborts the resolution and propagates
	/// unchanged; values already handed out stay usable, the rest of the map
	/// is dropped with the context.
	pub fn provide<R: Construct>(self) -> DiResult<R> {
		let Self { ctors, instances } = self;
		let _guard = store::install(instances.clone())?;
		tracing::debug!(
			bindings = ctors.len(),
			root = type_name::<R>(),
			"resolving context"
		);
		for (key, thunk) in ctors {
			tracing::debug!(tag = key.name, "constructing binding");
			let value = thunk()?;
			instances.insert(key, value);
		}
		tracing::debug!(root = type_name::<R>(), "assembling root");
		R::construct()
	}

	/// Looks up the instance bound to `tag` in the active resolution.
	///
	/// Fails with [`ContextError::Undefined`] when no resolution is active,
	/// and with [`ContextError::TagNotProvided`] when the active store holds
	/// no instance for the tag, which covers tags whose binding has not run
	/// yet. Lookup never triggers construction.
	pub fn get<T: Send + Sync + 'static>(tag: &Tag<T>) -> DiResult<Arc<T>> {
		let key = tag.key();
		let value = store::active()?.lookup(key)?;
		value
			.downcast::<T>()
			.map_err(|_| ContextError::TypeMismatch(key.name))
	}
}

impl fmt::Debug for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tags: Vec<&'static str> = self.ctors.iter().map(|(key, _)| key.name).collect();
		f.debug_struct("Context").field("bindings", &tags).finish()
	}
}
