//! Owns in-flight feedback requests: issues request ids, stores pending responders, routes
//! continuations, and garbage-collects on cancellation.

use std::collections::HashMap;

use weaver_command::{CommandResult, ErrorKind, FeedbackRequest, Responder};

const ID_PREFIX: &str = "fb";

/// Single-threaded store of pending feedback responders, keyed by a monotonic, collision-free
/// id (`"fb-<counter>"`) stamped in when a request first crosses the engine boundary.
#[derive(Default)]
pub struct FeedbackMediator {
	pending: HashMap<String, Responder>,
	next_id: u64,
}

impl FeedbackMediator {
	pub fn new() -> Self {
		Self { pending: HashMap::new(), next_id: 1 }
	}

	/// Registers a request, stamping a fresh id into it, and returns that id.
	pub fn register(&mut self, mut request: FeedbackRequest) -> String {
		let id = format!("{ID_PREFIX}-{}", self.next_id);
		self.next_id += 1;
		request.request_id = Some(id.clone());
		self.pending.insert(id.clone(), request.responder);
		id
	}

	/// Looks up `request_id`, removes it (single-use), and invokes the stored responder.
	/// If the responder's result itself carries a new pending feedback, that request is
	/// registered under a fresh id before returning.
	pub fn r#continue(&mut self, request_id: &str, input: &str) -> CommandResult {
		let Some(responder) = self.pending.remove(request_id) else {
			return CommandResult::fail_kind("Unknown or expired feedback request", ErrorKind::FeedbackExpired);
		};
		let mut result = responder(input);
		if let Some(feedback) = result.feedback.take() {
			let prompt = feedback.prompt.clone();
			let options = feedback.options.clone();
			let id = self.register(feedback);
			tracing::debug!(request_id = %id, "feedback re-registered");
			result.feedback = Some(FeedbackRequest {
				request_id: Some(id),
				prompt,
				options,
				responder: Box::new(|_| CommandResult::fail("feedback already consumed")),
			});
		}
		result
	}

	/// Silently removes a pending request, used on engine shutdown.
	pub fn cancel(&mut self, request_id: &str) {
		self.pending.remove(request_id);
	}

	pub fn pending_count(&self) -> usize {
		self.pending.len()
	}
}
