//! Repeats the wrapped call `count` times — the extension's sole argument, defaulting to `1`
//! when omitted, as in the canonical `system:sample("hello, world").sample()` example.

use weaver_command::{names, Command, CommandContext, CommandResult, Executor, Extension};

pub struct SampleExtension;

impl Extension for SampleExtension {
	fn name(&self) -> &str {
		names::SAMPLE
	}

	fn invoke(&self, _command: &dyn Command, ctx: &mut CommandContext<'_>, ext_args: &[String], command_args: &[String], next: Executor<'_>) -> CommandResult {
		let count = match ext_args.first() {
			None => 1usize,
			Some(raw) => match raw.trim().parse::<usize>() {
				Ok(n) => n,
				Err(_) => return CommandResult::fail("Usage: sample(count)"),
			},
		};

		let mut messages = Vec::with_capacity(count);
		let mut success = true;
		let mut last = CommandResult::ok("");
		for _ in 0..count.max(1) {
			let result = next(ctx, command_args);
			success &= result.success;
			messages.push(result.message.clone());
			last = result;
		}

		CommandResult { success, message: messages.join("\n"), ..last }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use weaver_command::CommandDescriptor;
	use weaver_eval::VariableRegistry;

	struct Echo(CommandDescriptor);

	impl Command for Echo {
		fn descriptor(&self) -> &CommandDescriptor {
			&self.0
		}

		fn execute(&self, _ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult {
			CommandResult::ok(args.join(" "))
		}
	}

	#[test]
	fn repeats_the_wrapped_call_count_times() {
		let echo = Echo(CommandDescriptor::new(None::<String>, "echo", "echo(text)", -1));
		let ext = SampleExtension;
		let catalog = vec![echo.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let base: Executor<'_> = &|ctx, args| echo.execute(ctx, args);
		let result = ext.invoke(&echo, &mut ctx, &["3".to_string()], &["hi".to_string()], base);
		assert_eq!(result.message, "hi\nhi\nhi");
	}

	#[test]
	fn defaults_to_a_single_run_when_no_count_given() {
		let echo = Echo(CommandDescriptor::new(None::<String>, "echo", "echo(text)", -1));
		let ext = SampleExtension;
		let catalog = vec![echo.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let base: Executor<'_> = &|ctx, args| echo.execute(ctx, args);
		let result = ext.invoke(&echo, &mut ctx, &[], &["hi".to_string()], base);
		assert_eq!(result.message, "hi");
	}
}
