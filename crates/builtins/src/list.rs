//! Enumerates every registered command's qualified name, one per line.

use weaver_command::{names, Command, CommandContext, CommandDescriptor, CommandResult};

pub struct ListCommand(CommandDescriptor);

impl Default for ListCommand {
	fn default() -> Self {
		Self(CommandDescriptor::new(None::<String>, names::LIST, "list()", 0))
	}
}

impl Command for ListCommand {
	fn descriptor(&self) -> &CommandDescriptor {
		&self.0
	}

	fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult {
		let names: Vec<String> = ctx.commands().iter().map(CommandDescriptor::qualified_name).collect();
		CommandResult::ok(names.join("\n"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use weaver_eval::VariableRegistry;

	#[test]
	fn lists_every_registered_command() {
		let list = ListCommand::default();
		let catalog = vec![list.descriptor().clone(), CommandDescriptor::new(Some("sys"), "delete", "delete(path)", 1)];
		let mut vars = VariableRegistry::new();
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let result = list.execute(&mut ctx, &[]);
		assert_eq!(result.message, "list\nsys:delete");
	}
}
