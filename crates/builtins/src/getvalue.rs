//! Reads a stored variable back out of the registry.

use weaver_command::{Command, CommandContext, CommandDescriptor, CommandResult};

pub struct GetValueCommand(CommandDescriptor);

impl Default for GetValueCommand {
	fn default() -> Self {
		Self(CommandDescriptor::new(None::<String>, "getvalue", "getvalue(key)", 1))
	}
}

impl Command for GetValueCommand {
	fn descriptor(&self) -> &CommandDescriptor {
		&self.0
	}

	fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult {
		let key = &args[0];
		match ctx.variables.try_get(key) {
			Some((value, _)) => CommandResult::ok_value(format!("{key} = {value}"), value.clone()),
			None => CommandResult::fail(format!("Unknown variable '{key}'")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use weaver_eval::{VariableRegistry, WeaverValue};

	#[test]
	fn reads_back_a_stored_value() {
		let cmd = GetValueCommand::default();
		let catalog = vec![cmd.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		vars.set("x", WeaverValue::Int(14));
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let result = cmd.execute(&mut ctx, &["x".to_string()]);
		assert_eq!(result.value, Some(WeaverValue::Int(14)));
	}

	#[test]
	fn missing_variable_fails() {
		let cmd = GetValueCommand::default();
		let catalog = vec![cmd.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let result = cmd.execute(&mut ctx, &["missing".to_string()]);
		assert!(!result.success);
	}
}
