//! Error types for context resolution

use thiserror::Error;

/// Errors surfaced by [`Context`](crate::Context) operations.
///
/// None of these are transient: they indicate a missing ambient context,
/// mis-ordered bindings or an overlapping resolution. Callers propagate them
/// with `?`; there is no retry or fallback path.
#[derive(Debug, Error)]
pub enum ContextError {
	/// No resolution is active on the ambient register. Also raised when a
	/// resolution attempts to start while another one is already in flight,
	/// which covers a provider calling [`Context::provide`](crate::Context)
	/// from inside a running resolution.
	#[error("context is not defined")]
	Undefined,

	/// The active context has no resolved instance for the requested tag.
	/// A tag bound later in the order than the caller is indistinguishable
	/// from a tag that was never bound.
	#[error("tag `{0}` is not provided")]
	TagNotProvided(&'static str),

	/// The instance stored for the tag did not downcast to the requested
	/// type. Unreachable through the typed API, since a [`Tag`](crate::Tag)
	/// fixes the value type at every bind and lookup site.
	#[error("tag `{0}` holds a value of a different type")]
	TypeMismatch(&'static str),
}

/// Convenience alias for fallible DI operations.
pub type DiResult<T> = Result<T, ContextError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_messages_carry_tag_name() {
		let err = ContextError::TagNotProvided("service/logger");
		assert_eq!(err.to_string(), "tag `service/logger` is not provided");

		let err = ContextError::TypeMismatch("service/logger");
		assert_eq!(
			err.to_string(),
			"tag `service/logger` holds a value of a different type"
		);
	}

	#[test]
	fn test_undefined_message() {
		assert_eq!(ContextError::Undefined.to_string(), "context is not defined");
	}
}
