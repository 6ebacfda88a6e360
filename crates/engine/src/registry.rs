//! The two setup-time tables a dispatcher reads from during every call: registered commands
//! and registered extensions. Both are append-only once the engine starts dispatching.

use weaver_command::{Command, CommandDescriptor, Extension};

use crate::error::DispatchError;

/// Registered commands, in registration order. Lookup is by case-insensitive
/// `(namespace, name)`; an absent namespace on the query matches any namespace, first
/// registered wins.
#[derive(Default)]
pub struct CommandRegistry {
	commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), DispatchError> {
		let descriptor = command.descriptor();
		if self.find(descriptor.namespace.as_deref(), &descriptor.name).is_some() {
			return Err(DispatchError::DuplicateCommand(descriptor.qualified_name()));
		}
		self.commands.push(command);
		Ok(())
	}

	pub fn find(&self, namespace: Option<&str>, name: &str) -> Option<&dyn Command> {
		self.commands
			.iter()
			.find(|c| {
				let d = c.descriptor();
				let name_matches = d.name.eq_ignore_ascii_case(name);
				let ns_matches = match namespace {
					Some(ns) => d.namespace.as_deref().is_some_and(|dns| dns.eq_ignore_ascii_case(ns)),
					None => true,
				};
				name_matches && ns_matches
			})
			.map(|c| c.as_ref())
	}

	pub fn descriptors(&self) -> Vec<CommandDescriptor> {
		self.commands.iter().map(|c| c.descriptor().clone()).collect()
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

/// Globally available extensions, in registration order. Lookup is by case-insensitive name.
#[derive(Default)]
pub struct ExtensionRegistry {
	extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, extension: Box<dyn Extension>) -> Result<(), DispatchError> {
		if self.find(extension.name()).is_some() {
			return Err(DispatchError::DuplicateExtension(extension.name().to_string()));
		}
		self.extensions.push(extension);
		Ok(())
	}

	pub fn find(&self, name: &str) -> Option<&dyn Extension> {
		self.extensions.iter().find(|e| e.name().eq_ignore_ascii_case(name)).map(|e| e.as_ref())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use weaver_command::{CommandContext, CommandResult};

	struct Dummy(CommandDescriptor);

	impl Command for Dummy {
		fn descriptor(&self) -> &CommandDescriptor {
			&self.0
		}

		fn execute(&self, _ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult {
			CommandResult::ok("ok")
		}
	}

	#[test]
	fn duplicate_registration_by_namespace_and_name_is_rejected() {
		let mut registry = CommandRegistry::new();
		registry.register(Box::new(Dummy(CommandDescriptor::new(Some("sys"), "delete", "delete", 1)))).unwrap();
		let err = registry.register(Box::new(Dummy(CommandDescriptor::new(Some("Sys"), "Delete", "delete again", 2)))).unwrap_err();
		assert_eq!(err, DispatchError::DuplicateCommand("sys:delete".into()));
	}

	#[test]
	fn lookup_without_namespace_matches_first_by_name() {
		let mut registry = CommandRegistry::new();
		registry.register(Box::new(Dummy(CommandDescriptor::new(Some("sys"), "delete", "delete", 1)))).unwrap();
		assert!(registry.find(None, "DELETE").is_some());
	}
}
