//! Previews a command instead of running it, by calling [`Command::preview`] directly rather
//! than delegating through the executor chain — there is nothing to run afterward, so `next`
//! is never invoked.

use weaver_command::{names, Command, CommandContext, CommandResult, Executor, Extension};

pub struct TryRunExtension;

impl Extension for TryRunExtension {
	fn name(&self) -> &str {
		names::TRYRUN
	}

	fn invoke(&self, command: &dyn Command, ctx: &mut CommandContext<'_>, _ext_args: &[String], command_args: &[String], _next: Executor<'_>) -> CommandResult {
		command.preview(ctx, command_args).unwrap_or_else(|| CommandResult::ok(format!("No preview available for '{}'", command.descriptor().qualified_name())))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::delete::DeleteCommand;
	use weaver_eval::VariableRegistry;

	#[test]
	fn previews_instead_of_executing() {
		let delete = DeleteCommand::default();
		let ext = TryRunExtension;
		let catalog = vec![delete.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let result = ext.invoke(&delete, &mut ctx, &[], &["myfile.txt".to_string()], &|ctx, args| delete.execute(ctx, args));
		assert!(!result.requires_confirmation);
		assert!(result.message.contains("Would delete"));
	}
}
