//! A no-op command whose sole purpose is to exist in the catalog so hosts have something to
//! match on when the user wants to end the session; the actual loop-breaking is a host concern
//! (see `weaver-cli`), not dispatcher logic.

use weaver_command::{Command, CommandContext, CommandDescriptor, CommandResult};

pub struct ExitCommand(CommandDescriptor);

impl Default for ExitCommand {
	fn default() -> Self {
		Self(CommandDescriptor::new(None::<String>, "exit", "exit()", 0))
	}
}

impl Command for ExitCommand {
	fn descriptor(&self) -> &CommandDescriptor {
		&self.0
	}

	fn execute(&self, _ctx: &mut CommandContext<'_>, _args: &[String]) -> CommandResult {
		CommandResult::ok("Goodbye.")
	}
}
