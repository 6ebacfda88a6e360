//! The read-only catalog entry attached to every registered command, and the per-call
//! capability handle commands and extensions receive.

use indexmap::IndexMap;
use weaver_eval::VariableRegistry;

/// Static metadata describing a registered command.
///
/// `extension_table` lists the extensions a command declares support for, mapped to the
/// minimum argument count each must be called with (`0` for no-arg extensions such as
/// `tryrun`). An extension absent from the table may still be invoked by the dispatcher —
/// the table is advertised documentation, not an enforcement gate.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
	pub namespace: Option<String>,
	pub name: String,
	pub description: String,
	pub parameter_count: i32,
	pub extension_table: IndexMap<String, i32>,
}

impl CommandDescriptor {
	pub fn new(namespace: Option<impl Into<String>>, name: impl Into<String>, description: impl Into<String>, parameter_count: i32) -> Self {
		Self {
			namespace: namespace.map(Into::into),
			name: name.into(),
			description: description.into(),
			parameter_count,
			extension_table: IndexMap::new(),
		}
	}

	pub fn with_extension(mut self, name: impl Into<String>, min_args: i32) -> Self {
		self.extension_table.insert(name.into(), min_args);
		self
	}

	/// The qualified display form used by `help`/`list`, e.g. `"sys:delete"` or `"exit"`.
	pub fn qualified_name(&self) -> String {
		match &self.namespace {
			Some(ns) => format!("{ns}:{}", self.name),
			None => self.name.clone(),
		}
	}
}

/// Capability handle passed to every `Command`/`Extension` call.
///
/// Holds the read-only command catalog (for `help`/`list` to enumerate) and mutable access
/// to the shared variable registry. There is no engine handle here by design — a command
/// cannot recursively dispatch another invocation, it can only read and mutate state.
pub struct CommandContext<'a> {
	commands: &'a [CommandDescriptor],
	pub variables: &'a mut VariableRegistry,
}

impl<'a> CommandContext<'a> {
	pub fn new(commands: &'a [CommandDescriptor], variables: &'a mut VariableRegistry) -> Self {
		Self { commands, variables }
	}

	/// The full command catalog, in registration order.
	pub fn commands(&self) -> &[CommandDescriptor] {
		self.commands
	}

	/// Re-borrow with a shorter lifetime, for passing into a nested call without moving out
	/// of a `&mut CommandContext`.
	pub fn reborrow(&mut self) -> CommandContext<'_> {
		CommandContext { commands: self.commands, variables: self.variables }
	}
}
