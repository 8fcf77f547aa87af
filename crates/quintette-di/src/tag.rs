//! Tag identity handles

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TAG_ID: AtomicU64 = AtomicU64::new(0);

/// A typed identity handle for one binding slot.
///
/// Equality is by identity, not by name: every call to [`Tag::new`] allocates
/// a fresh process-unique id, so two tags created with the same name never
/// alias. Copies of a tag share its id and address the same slot.
///
/// The name exists for diagnostics only; it is what error messages and log
/// lines show. The `T` parameter is compile-time bookkeeping that fixes the
/// value type at every bind and lookup site; no value of `T` is ever stored
/// in the tag itself.
///
/// Tags are usually declared once per dependency as statics:
///
/// ```
/// use once_cell::sync::Lazy;
/// use quintette_di::Tag;
///
/// static GREETING: Lazy<Tag<String>> = Lazy::new(|| Tag::new("config/greeting"));
/// ```
pub struct Tag<T> {
	id: u64,
	name: &'static str,
	_marker: PhantomData<fn() -> T>,
}

impl<T> Tag<T> {
	/// Creates a tag with a fresh identity.
	pub fn new(name: &'static str) -> Self {
		Self {
			id: NEXT_TAG_ID.fetch_add(1, Ordering::Relaxed),
			name,
			_marker: PhantomData,
		}
	}

	/// The diagnostic name this tag was created with.
	pub fn name(&self) -> &'static str {
		self.name
	}

	pub(crate) fn key(&self) -> TagKey {
		TagKey {
			id: self.id,
			name: self.name,
		}
	}
}

impl<T> Clone for Tag<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Tag<T> {}

impl<T> PartialEq for Tag<T> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl<T> Eq for Tag<T> {}

impl<T> fmt::Debug for Tag<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Tag")
			.field("id", &self.id)
			.field("name", &self.name)
			.finish()
	}
}

/// Type-erased tag identity, carried by bindings and the instance map.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TagKey {
	pub(crate) id: u64,
	pub(crate) name: &'static str,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_same_name_tags_are_distinct() {
		let a: Tag<u32> = Tag::new("shared-name");
		let b: Tag<u32> = Tag::new("shared-name");
		assert_ne!(a, b);
		assert_eq!(a.name(), b.name());
	}

	#[test]
	fn test_copies_share_identity() {
		let a: Tag<String> = Tag::new("config/greeting");
		let b = a;
		assert_eq!(a, b);
		assert_eq!(a.key().id, b.key().id);
	}

	#[test]
	fn test_key_carries_name() {
		let tag: Tag<u8> = Tag::new("repository/todo");
		assert_eq!(tag.key().name, "repository/todo");
	}
}
