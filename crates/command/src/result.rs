//! The value a command call produces, and the suspended-conversation record it may carry.

use std::fmt;

use weaver_eval::{EnumType, WeaverValue};

/// A responder consumed exactly once by a matching `continueFeedback` call.
pub type Responder = Box<dyn FnOnce(&str) -> CommandResult>;

/// A suspended command awaiting a user response, correlated by an opaque id.
///
/// `request_id` is `None` until the mediator registers the request and stamps one in; a
/// command constructs a `FeedbackRequest` without knowing its eventual id.
pub struct FeedbackRequest {
	pub request_id: Option<String>,
	pub prompt: String,
	pub options: Vec<String>,
	pub responder: Responder,
}

impl FeedbackRequest {
	pub fn new(prompt: impl Into<String>, options: Vec<String>, responder: Responder) -> Self {
		Self { request_id: None, prompt: prompt.into(), options, responder }
	}
}

impl fmt::Debug for FeedbackRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FeedbackRequest")
			.field("request_id", &self.request_id)
			.field("prompt", &self.prompt)
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

/// A closed error taxonomy, carried alongside a failing `CommandResult.message` so a caller
/// that wants to distinguish e.g. `IterationLimit` from a generic failure doesn't have to
/// parse the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Parse,
	UnknownCommand,
	ArityMismatch,
	UnknownExtension,
	Evaluation,
	CommandFailure,
	FeedbackExpired,
	Compile,
	Runtime,
	IterationLimit,
}

/// The outcome of dispatching a single invocation.
///
/// Invariant: `requires_confirmation` is true if and only if `feedback` is `Some`.
#[derive(Debug)]
pub struct CommandResult {
	pub success: bool,
	pub message: String,
	pub value: Option<WeaverValue>,
	pub value_type: EnumType,
	pub requires_confirmation: bool,
	pub feedback: Option<FeedbackRequest>,
	pub error_kind: Option<ErrorKind>,
}

impl CommandResult {
	pub fn ok(message: impl Into<String>) -> Self {
		Self {
			success: true,
			message: message.into(),
			value: None,
			value_type: EnumType::Wnull,
			requires_confirmation: false,
			feedback: None,
			error_kind: None,
		}
	}

	pub fn ok_value(message: impl Into<String>, value: WeaverValue) -> Self {
		let value_type = value.type_tag();
		Self {
			success: true,
			message: message.into(),
			value: Some(value),
			value_type,
			requires_confirmation: false,
			feedback: None,
			error_kind: None,
		}
	}

	/// A generic command-body failure, tagged [`ErrorKind::CommandFailure`]. Dispatcher- and
	/// mediator-originated failures use [`CommandResult::fail_kind`] to tag a more specific
	/// kind instead.
	pub fn fail(message: impl Into<String>) -> Self {
		Self {
			success: false,
			message: message.into(),
			value: None,
			value_type: EnumType::Wnull,
			requires_confirmation: false,
			feedback: None,
			error_kind: Some(ErrorKind::CommandFailure),
		}
	}

	/// A failure tagged with a structured [`ErrorKind`].
	pub fn fail_kind(message: impl Into<String>, kind: ErrorKind) -> Self {
		let mut result = Self::fail(message);
		result.error_kind = Some(kind);
		result
	}

	/// A result that suspends execution pending a user response.
	pub fn pending(message: impl Into<String>, feedback: FeedbackRequest) -> Self {
		Self {
			success: true,
			message: message.into(),
			value: None,
			value_type: EnumType::Wnull,
			requires_confirmation: true,
			feedback: Some(feedback),
			error_kind: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pending_result_carries_feedback_and_confirmation_flag() {
		let fb = FeedbackRequest::new("Delete 'x'? (yes/no)", vec!["yes".into(), "no".into()], Box::new(|_| CommandResult::ok("done")));
		let result = CommandResult::pending("awaiting confirmation", fb);
		assert!(result.requires_confirmation);
		assert!(result.feedback.is_some());
	}

	#[test]
	fn ok_and_fail_never_require_confirmation() {
		assert!(!CommandResult::ok("done").requires_confirmation);
		assert!(!CommandResult::fail("nope").requires_confirmation);
	}
}
