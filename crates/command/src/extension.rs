//! Extensions decorate a command call: `tryrun` previews it, `sample` repeats it, and so on.
//! Each extension in a chain wraps the next, so it can run code before and after delegating.

use crate::context::CommandContext;
use crate::result::CommandResult;
use crate::Command;

/// The continuation an extension calls to invoke whatever sits inside it — the next
/// extension in the chain, or the command itself at the bottom.
///
/// Modeled as a plain function pointer over explicit state rather than a boxed closure, so
/// the chain can be driven by index-based recursion instead of nesting captures of
/// `&mut CommandContext`.
pub type Executor<'a> = &'a dyn Fn(&mut CommandContext<'_>, &[String]) -> CommandResult;

/// A decorator that wraps a command invocation (or another extension's invocation).
pub trait Extension {
	/// The bare name used in invocation text, e.g. `"tryrun"`.
	fn name(&self) -> &str;

	/// Run this extension's behavior, calling `next` to delegate further down the chain.
	///
	/// `ext_args` are the extension's own call arguments; `command_args` are the base
	/// command's arguments, forwarded through unchanged so every extension can see them.
	fn invoke(
		&self,
		command: &dyn Command,
		ctx: &mut CommandContext<'_>,
		ext_args: &[String],
		command_args: &[String],
		next: Executor<'_>,
	) -> CommandResult;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::CommandDescriptor;
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

	struct Loud;

	impl Extension for Loud {
		fn name(&self) -> &str {
			"loud"
		}

		fn invoke(&self, _command: &dyn Command, ctx: &mut CommandContext<'_>, _ext_args: &[String], command_args: &[String], next: Executor<'_>) -> CommandResult {
			let inner = next(ctx, command_args);
			CommandResult::ok(inner.message.to_uppercase())
		}
	}

	#[test]
	fn extension_can_transform_inner_result() {
		let descriptor = CommandDescriptor::new(None::<String>, "echo", "echo args", -1);
		let echo = Echo(descriptor.clone());
		let commands = [descriptor];
		let mut registry = VariableRegistry::new();
		let mut ctx = CommandContext::new(&commands, &mut registry);

		let base: Executor<'_> = &|ctx, args| echo.execute(ctx, args);
		let loud = Loud;
		let result = loud.invoke(&echo, &mut ctx, &[], &["hi".to_string()], base);
		assert_eq!(result.message, "HI");
	}
}
