//! Deletes a named value, but only after an interactive yes/no confirmation — the reference
//! demonstration of the feedback state machine.

use weaver_command::{names, Command, CommandContext, CommandDescriptor, CommandResult, FeedbackRequest};

pub struct DeleteCommand(CommandDescriptor);

impl Default for DeleteCommand {
	fn default() -> Self {
		Self(CommandDescriptor::new(None::<String>, "delete", "delete(path)", 1).with_extension(names::TRYRUN, 0))
	}
}

impl Command for DeleteCommand {
	fn descriptor(&self) -> &CommandDescriptor {
		&self.0
	}

	fn execute(&self, _ctx: &mut CommandContext<'_>, args: &[String]) -> CommandResult {
		let path = args[0].clone();
		CommandResult::pending(format!("Awaiting confirmation to delete '{path}'"), confirm_request(path))
	}

	fn preview(&self, _ctx: &mut CommandContext<'_>, args: &[String]) -> Option<CommandResult> {
		Some(CommandResult::ok(format!("Would delete '{}' (no confirmation prompt, no side effect)", args[0])))
	}
}

fn confirm_request(path: String) -> FeedbackRequest {
	FeedbackRequest::new(format!("Delete '{path}'? (yes/no)"), vec!["yes".into(), "no".into()], Box::new(move |input| respond(&path, input)))
}

fn respond(path: &str, input: &str) -> CommandResult {
	match input.trim() {
		"yes" => CommandResult::ok(format!("'{path}' deleted")),
		"no" => CommandResult::fail("cancelled"),
		_ => CommandResult::pending(
			"Unrecognized response, please answer yes or no",
			confirm_request(path.to_string()),
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use weaver_eval::VariableRegistry;

	fn ctx_with(catalog: &[CommandDescriptor], vars: &mut VariableRegistry) -> CommandContext<'_> {
		CommandContext::new(catalog, vars)
	}

	#[test]
	fn delete_requires_confirmation() {
		let delete = DeleteCommand::default();
		let catalog = vec![delete.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = ctx_with(&catalog, &mut vars);
		let result = delete.execute(&mut ctx, &["myfile.txt".to_string()]);
		assert!(result.requires_confirmation);
		assert!(result.feedback.as_ref().unwrap().prompt.contains("Delete 'myfile.txt'"));
	}

	#[test]
	fn yes_confirms_no_cancels_other_reprompts() {
		let path = "myfile.txt".to_string();
		assert!(respond(&path, "yes").success);
		assert!(!respond(&path, "no").success);
		let reprompt = respond(&path, "maybe");
		assert!(reprompt.requires_confirmation);
		assert!(reprompt.message.contains("Unrecognized"));
	}

	#[test]
	fn preview_does_not_require_confirmation() {
		let delete = DeleteCommand::default();
		let catalog = vec![delete.descriptor().clone()];
		let mut vars = VariableRegistry::new();
		let mut ctx = ctx_with(&catalog, &mut vars);
		let preview = delete.preview(&mut ctx, &["myfile.txt".to_string()]).unwrap();
		assert!(!preview.requires_confirmation);
		assert!(preview.message.contains("Would delete"));
	}
}
