//! Process-wide ambient register
//!
//! At most one resolution is active per process. `Context::provide` installs
//! its instance map here for the duration of the resolution, `Context::get`
//! reads through it, and the RAII guard clears the slot again on every exit
//! path, unwinding included.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{ContextError, DiResult};
use crate::tag::TagKey;

/// Resolved instances of one context, keyed by tag identity.
///
/// Cloning the handle shares the underlying map, so the copy installed on
/// the register and the copy held by the resolving context see every insert.
#[derive(Clone, Debug)]
pub(crate) struct Instances {
	cache: Arc<RwLock<HashMap<u64, Arc<dyn Any + Send + Sync>>>>,
}

impl Instances {
	pub(crate) fn new() -> Self {
		Self {
			cache: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	pub(crate) fn insert(&self, key: TagKey, value: Arc<dyn Any + Send + Sync>) {
		let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
		cache.insert(key.id, value);
	}

	pub(crate) fn lookup(&self, key: TagKey) -> DiResult<Arc<dyn Any + Send + Sync>> {
		let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
		cache
			.get(&key.id)
			.cloned()
			.ok_or(ContextError::TagNotProvided(key.name))
	}
}

static ACTIVE: RwLock<Option<Instances>> = RwLock::new(None);

/// Claims the register for one resolution.
///
/// Fails with [`ContextError::Undefined`] when another resolution is already
/// in flight; the register is a single slot, never a stack.
pub(crate) fn install(instances: Instances) -> DiResult<ActiveGuard> {
	let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
	if slot.is_some() {
		return Err(ContextError::Undefined);
	}
	*slot = Some(instances);
	Ok(ActiveGuard { _private: () })
}

/// Handle to the currently installed instance map.
pub(crate) fn active() -> DiResult<Instances> {
	let slot = ACTIVE.read().unwrap_or_else(PoisonError::into_inner);
	slot.clone().ok_or(ContextError::Undefined)
}

/// Releases the register when dropped.
#[derive(Debug)]
pub(crate) struct ActiveGuard {
	_private: (),
}

impl Drop for ActiveGuard {
	fn drop(&mut self) {
		let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
		*slot = None;
		tracing::debug!("context released");
	}
}
