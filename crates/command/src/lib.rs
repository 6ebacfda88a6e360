//! `Command`/`Extension` traits and the value types that flow between the dispatcher and
//! registered handlers.
//!
//! Capability is threaded explicitly through a [`CommandContext`] passed to every call —
//! there is no ambient/global engine handle a command reaches for, mirroring the
//! context-struct-per-call pattern the reference editor uses for its own command dispatch.

pub mod context;
pub mod extension;
pub mod names;
pub mod result;
pub mod signature;

pub use context::{CommandContext, CommandDescriptor};
pub use extension::{Executor, Extension};
pub use result::{CommandResult, ErrorKind, FeedbackRequest, Responder};
pub use signature::CommandSignature;
pub use weaver_eval::{EnumType, VariableRegistry, WeaverValue};

/// A named, parameterized unit of work registered with the engine.
pub trait Command {
	/// The read-only catalog entry for this command (name, namespace, description, arity,
	/// declared extension table).
	fn descriptor(&self) -> &CommandDescriptor;

	/// Run the command body.
	fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult;

	/// Optional dry-run variant consulted by the `tryrun` extension. `None` means the
	/// command has no preview behavior; the extension falls back to a generic notice.
	fn preview(&self, _ctx: &mut CommandContext<'_>, _args: &[String]) -> Option<CommandResult> {
		None
	}
}
