//! A compiled script: a flat instruction list with `goto` targets pre-resolved to indices.

use weaver_command::{CommandResult, ErrorKind};
use weaver_engine::Engine;

use crate::compiler::compile;
use crate::instruction::Instruction;
use crate::stepper::Stepper;

/// Compiles `source` and runs it against `engine` in one call, for hosts that want a single
/// `CommandResult` rather than handling `compile`'s `Result<WeaverProgram, CompileError>`
/// separately from `run`'s own failure modes.
pub fn run_source(source: &str, engine: &mut Engine, max_iterations: u64) -> CommandResult {
	match compile(source) {
		Ok(program) => program.run(engine, max_iterations),
		Err(err) => CommandResult::fail_kind(format!("Compile error: {err}"), ErrorKind::Compile),
	}
}

/// The compiled form of a script, produced by [`crate::compiler::compile`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeaverProgram {
	pub instructions: Vec<Instruction>,
}

impl WeaverProgram {
	/// Runs the program against `engine` to completion, `halt`, or `max_iterations`
	/// instruction dispatches, whichever comes first.
	pub fn run(&self, engine: &mut Engine, max_iterations: u64) -> CommandResult {
		let mut stepper = Stepper::new(self, engine);
		let mut iterations = 0u64;

		loop {
			if stepper.is_finished() {
				return CommandResult::ok("program halted");
			}
			if iterations >= max_iterations {
				tracing::warn!(max_iterations, "script run hit its iteration limit");
				return CommandResult::fail_kind("Iteration limit reached", ErrorKind::IterationLimit);
			}
			match stepper.execute_next() {
				Ok(Some(pending)) => return pending,
				Ok(None) => {}
				Err(err) => return CommandResult::fail_kind(err.to_string(), ErrorKind::Runtime),
			}
			iterations += 1;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use weaver_command::ErrorKind;

	#[test]
	fn run_source_surfaces_a_compile_error_as_a_command_result() {
		let mut engine = Engine::new();
		let result = run_source("if goto nowhere", &mut engine, 10);
		assert!(!result.success);
		assert_eq!(result.error_kind, Some(ErrorKind::Compile));
	}

	#[test]
	fn run_source_compiles_and_runs_in_one_call() {
		let mut engine = Engine::new();
		let result = run_source("let i : int = 7\nhalt", &mut engine, 10);
		assert!(result.success);
		let (value, _) = engine.variables().try_get("i").unwrap();
		assert_eq!(value, &weaver_eval::WeaverValue::Int(7));
	}
}
