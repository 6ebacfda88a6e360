//! The dispatcher: resolves a parsed invocation against the command/extension registries,
//! builds the extension chain, and runs it.

use weaver_command::{Command, CommandContext, CommandDescriptor, CommandResult, CommandSignature, ErrorKind, Executor, Extension, FeedbackRequest};
use weaver_eval::VariableRegistry;
use weaver_invocation::{parse, Call};

use crate::error::DispatchError;
use crate::mediator::FeedbackMediator;
use crate::registry::{CommandRegistry, ExtensionRegistry};

/// The dispatcher: owns the command/extension catalogs, the variable registry, and the
/// feedback mediator for one conversation.
pub struct Engine {
	commands: CommandRegistry,
	extensions: ExtensionRegistry,
	variables: VariableRegistry,
	mediator: FeedbackMediator,
	has_dispatched: bool,
}

impl Default for Engine {
	fn default() -> Self {
		Self::new()
	}
}

impl Engine {
	pub fn new() -> Self {
		Self {
			commands: CommandRegistry::new(),
			extensions: ExtensionRegistry::new(),
			variables: VariableRegistry::new(),
			mediator: FeedbackMediator::new(),
			has_dispatched: false,
		}
	}

	/// Registers a command. Rejects duplicates by `(namespace, name)`, and rejects any
	/// registration once the engine has dispatched at least once.
	pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), DispatchError> {
		if self.has_dispatched {
			return Err(DispatchError::RegistrationClosed);
		}
		self.commands.register(command)
	}

	/// Registers a globally available extension, subject to the same closed-after-dispatch
	/// rule as [`Engine::register`].
	pub fn register_extension(&mut self, extension: Box<dyn Extension>) -> Result<(), DispatchError> {
		if self.has_dispatched {
			return Err(DispatchError::RegistrationClosed);
		}
		self.extensions.register(extension)
	}

	/// The registered command catalog, in registration order.
	pub fn commands(&self) -> Vec<CommandDescriptor> {
		self.commands.descriptors()
	}

	pub fn variables(&self) -> &VariableRegistry {
		&self.variables
	}

	pub fn variables_mut(&mut self) -> &mut VariableRegistry {
		&mut self.variables
	}

	/// Top-level entry point. Recognizes the feedback-continuation shape
	/// `feedback(requestId, response)` and delegates to the mediator; otherwise parses and
	/// dispatches `text` as a command invocation.
	pub fn process_input(&mut self, text: &str) -> CommandResult {
		self.has_dispatched = true;

		let plan = match parse(text) {
			Ok(plan) => plan,
			Err(err) => return CommandResult::fail_kind(format!("Parse error: {err}"), ErrorKind::Parse),
		};

		if plan.extensions.is_empty() && plan.command.namespace.is_none() && plan.command.name.eq_ignore_ascii_case("feedback") && plan.command.args.len() == 2 {
			let request_id = plan.command.args[0].clone();
			let response = plan.command.args[1].clone();
			return self.continue_feedback(&request_id, &response);
		}

		let result = self.dispatch(&plan.command, &plan.extensions);
		self.finalize(result)
	}

	/// Mediator passthrough, used both by `processInput`'s `feedback(...)` shorthand and by
	/// hosts that already hold a parsed request id (e.g. a GUI confirmation dialog).
	pub fn continue_feedback(&mut self, request_id: &str, response: &str) -> CommandResult {
		self.has_dispatched = true;
		self.mediator.r#continue(request_id, response)
	}

	pub fn cancel_feedback(&mut self, request_id: &str) {
		self.mediator.cancel(request_id);
	}

	fn dispatch(&mut self, command_call: &Call, extension_chain: &[Call]) -> CommandResult {
		let namespace = command_call.namespace.as_deref();
		let Some(command) = self.commands.find(namespace, &command_call.name) else {
			let qualified = match namespace {
				Some(ns) => format!("{ns}:{}", command_call.name),
				None => command_call.name.clone(),
			};
			return CommandResult::fail_kind(format!("Unknown command '{qualified}'"), ErrorKind::UnknownCommand);
		};
		let descriptor = command.descriptor().clone();
		let signature = CommandSignature::new(descriptor.namespace.clone(), descriptor.name.clone(), descriptor.parameter_count);

		if !signature.accepts_arity(command_call.args.len()) {
			return CommandResult::fail_kind(format!("Usage: {}", descriptor.description), ErrorKind::ArityMismatch);
		}

		for call in extension_chain {
			if let Some(min_args) = declared_min_args(&descriptor, &call.name) {
				if (call.args.len() as i32) < min_args {
					return CommandResult::fail_kind(format!("Usage: {}", descriptor.description), ErrorKind::ArityMismatch);
				}
			}
		}

		let catalog = self.commands.descriptors();
		let mut ctx = CommandContext::new(&catalog, &mut self.variables);
		invoke_chain(&self.extensions, extension_chain, 0, command, &mut ctx, &command_call.args)
	}

	fn finalize(&mut self, mut result: CommandResult) -> CommandResult {
		if result.requires_confirmation {
			if let Some(feedback) = result.feedback.take() {
				let prompt = feedback.prompt.clone();
				let options = feedback.options.clone();
				let id = self.mediator.register(feedback);
				tracing::info!(request_id = %id, "feedback registered");
				result.feedback = Some(FeedbackRequest {
					request_id: Some(id),
					prompt,
					options,
					responder: Box::new(|_| CommandResult::fail("feedback already consumed")),
				});
			}
		}
		result
	}
}

fn declared_min_args(descriptor: &CommandDescriptor, extension_name: &str) -> Option<i32> {
	descriptor
		.extension_table
		.iter()
		.find(|(name, _)| name.eq_ignore_ascii_case(extension_name))
		.map(|(_, min_args)| *min_args)
}

fn invoke_chain(
	extensions: &ExtensionRegistry,
	chain: &[Call],
	idx: usize,
	command: &dyn Command,
	ctx: &mut CommandContext<'_>,
	command_args: &[String],
) -> CommandResult {
	if idx >= chain.len() {
		return command.execute(ctx, command_args);
	}
	let call = &chain[idx];
	let Some(extension) = extensions.find(&call.name) else {
		return CommandResult::fail_kind(format!("Unknown extension '{}'", call.name), ErrorKind::UnknownExtension);
	};
	let next: Executor<'_> = &|ctx, args| invoke_chain(extensions, chain, idx + 1, command, ctx, args);
	extension.invoke(command, ctx, &call.args, command_args, next)
}
