//! Stores an evaluated expression into the variable registry under a declared type.

use weaver_command::{Command, CommandContext, CommandDescriptor, CommandResult, ErrorKind};
use weaver_eval::{Evaluator, WeaverValue};

pub struct SetValueCommand(CommandDescriptor);

impl Default for SetValueCommand {
	fn default() -> Self {
		Self(CommandDescriptor::new(None::<String>, "setvalue", "setvalue(key, expression, type)", 3))
	}
}

impl Command for SetValueCommand {
	fn descriptor(&self) -> &CommandDescriptor {
		&self.0
	}

	fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult {
		let (key, expr, ty) = (args[0].as_str(), args[1].as_str(), args[2].as_str());

		let value = {
			let evaluator = Evaluator::new(&*ctx.variables);
			match ty {
				"string" => WeaverValue::Str(expr.trim().to_string()),
				"int" => match evaluator.evaluate_numeric(expr) {
					Ok(n) => WeaverValue::Int(n.round() as i64),
					Err(e) => return CommandResult::fail_kind(format!("Evaluation error: {e}"), ErrorKind::Evaluation),
				},
				"double" => match evaluator.evaluate_numeric(expr) {
					Ok(n) => WeaverValue::Double(n),
					Err(e) => return CommandResult::fail_kind(format!("Evaluation error: {e}"), ErrorKind::Evaluation),
				},
				"bool" => match evaluator.evaluate(expr) {
					Ok(b) => WeaverValue::Bool(b),
					Err(e) => return CommandResult::fail_kind(format!("Evaluation error: {e}"), ErrorKind::Evaluation),
				},
				other => return CommandResult::fail(format!("Unknown type '{other}', expected one of string, int, double, bool")),
			}
		};

		ctx.variables.set(key, value.clone());
		CommandResult::ok_value(format!("{key} = {value}"), value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use weaver_eval::VariableRegistry;

	#[test]
	fn arithmetic_expression_rounds_to_int() {
		let cmd = SetValueCommand::default();
		let catalog = vec![cmd.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let result = cmd.execute(&mut ctx, &["x".to_string(), "2 + 3 * 4".to_string(), "int".to_string()]);
		assert!(result.success);
		assert_eq!(result.value, Some(WeaverValue::Int(14)));
	}

	#[test]
	fn bad_expression_fails_with_evaluation_kind() {
		let cmd = SetValueCommand::default();
		let catalog = vec![cmd.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let result = cmd.execute(&mut ctx, &["x".to_string(), "missing + 1".to_string(), "int".to_string()]);
		assert_eq!(result.error_kind, Some(ErrorKind::Evaluation));
	}

	#[test]
	fn unknown_type_fails() {
		let cmd = SetValueCommand::default();
		let catalog = vec![cmd.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = CommandContext::new(&catalog, &mut vars);
		let result = cmd.execute(&mut ctx, &["x".to_string(), "1".to_string(), "float".to_string()]);
		assert!(!result.success);
	}
}
