//! Lists the command catalog, or describes a single command by name.

use weaver_command::{names, Command, CommandContext, CommandDescriptor, CommandResult};

/// Bumped whenever the reference command set changes shape in a way worth advertising to
/// interactive users.
pub const VERSION: &str = "1.0";

pub struct HelpCommand(CommandDescriptor);

impl Default for HelpCommand {
	fn default() -> Self {
		Self(CommandDescriptor::new(None::<String>, names::HELP, "help() or help(commandName)", -1))
	}
}

impl Command for HelpCommand {
	fn descriptor(&self) -> &CommandDescriptor {
		&self.0
	}

	fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult {
		match args {
			[] => {
				let mut message = format!("Weaver Cmd version {VERSION}\n\nRegistered commands:\n");
				for descriptor in ctx.commands() {
					message.push_str(&format!("  {} — {}\n", descriptor.qualified_name(), descriptor.description));
				}
				CommandResult::ok(message)
			}
			[name] => match ctx.commands().iter().find(|d| d.qualified_name().eq_ignore_ascii_case(name) || d.name.eq_ignore_ascii_case(name)) {
				Some(descriptor) => CommandResult::ok(format!("{} — {}", descriptor.qualified_name(), descriptor.description)),
				None => CommandResult::fail(format!("Unknown command '{name}'")),
			},
			_ => CommandResult::fail(format!("Usage: {}", self.0.description)),
		}
	}
}
