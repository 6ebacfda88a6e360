//! Single-step execution cursor over a compiled [`WeaverProgram`].

use weaver_command::CommandResult;
use weaver_engine::Engine;
use weaver_eval::{Evaluator, WeaverValue};

use crate::error::RuntimeError;
use crate::instruction::{DeclaredType, Instruction};
use crate::program::WeaverProgram;

/// Holds the instruction pointer and drives one instruction at a time against an [`Engine`].
pub struct Stepper<'a> {
	program: &'a WeaverProgram,
	engine: &'a mut Engine,
	instruction_pointer: usize,
	finished: bool,
}

impl<'a> Stepper<'a> {
	pub fn new(program: &'a WeaverProgram, engine: &'a mut Engine) -> Self {
		let finished = program.instructions.is_empty();
		Self { program, engine, instruction_pointer: 0, finished }
	}

	pub fn is_finished(&self) -> bool {
		self.finished
	}

	pub fn instruction_pointer(&self) -> usize {
		self.instruction_pointer
	}

	/// Advances one instruction. Returns `Ok(Some(result))` when a `Call` surfaces a pending
	/// feedback request for an external caller to resolve before the stepper can usefully
	/// continue; `Ok(None)` otherwise.
	pub fn execute_next(&mut self) -> Result<Option<CommandResult>, RuntimeError> {
		if self.finished {
			return Ok(None);
		}

		let Some(instruction) = self.program.instructions.get(self.instruction_pointer) else {
			self.finished = true;
			return Ok(None);
		};

		match instruction {
			Instruction::Call(text) => {
				let result = self.engine.process_input(text);
				self.instruction_pointer += 1;
				if result.requires_confirmation {
					return Ok(Some(result));
				}
				Ok(None)
			}
			Instruction::Assign { key, expr, declared_type } => {
				let value = self.evaluate_assignment(expr, *declared_type)?;
				self.engine.variables_mut().set(key.clone(), value);
				self.instruction_pointer += 1;
				Ok(None)
			}
			Instruction::IfGoto { expr, target } => {
				let evaluator = Evaluator::new(self.engine.variables());
				let condition = evaluator.evaluate(expr).map_err(|e| RuntimeError::Evaluation(e.to_string()))?;
				self.instruction_pointer = if condition { *target } else { self.instruction_pointer + 1 };
				Ok(None)
			}
			Instruction::Goto { target } => {
				self.instruction_pointer = *target;
				Ok(None)
			}
			Instruction::Halt => {
				self.finished = true;
				Ok(None)
			}
		}
	}

	fn evaluate_assignment(&self, expr: &str, declared_type: DeclaredType) -> Result<WeaverValue, RuntimeError> {
		let evaluator = Evaluator::new(self.engine.variables());
		match declared_type {
			DeclaredType::String => Ok(WeaverValue::Str(expr.trim().to_string())),
			DeclaredType::Int => {
				let n = evaluator.evaluate_numeric(expr).map_err(|e| RuntimeError::Evaluation(e.to_string()))?;
				Ok(WeaverValue::Int(n.round() as i64))
			}
			DeclaredType::Double => {
				let n = evaluator.evaluate_numeric(expr).map_err(|e| RuntimeError::Evaluation(e.to_string()))?;
				Ok(WeaverValue::Double(n))
			}
			DeclaredType::Bool => {
				let b = evaluator.evaluate(expr).map_err(|e| RuntimeError::Evaluation(e.to_string()))?;
				Ok(WeaverValue::Bool(b))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compiler::compile;

	#[test]
	fn loop_script_runs_to_completion_and_stores_final_variable() {
		let program = compile("let i : int = 0\nloop:\nlet i : int = i + 1\nif i < 3 goto loop\nhalt").unwrap();
		let mut engine = Engine::new();
		let result = program.run(&mut engine, 100);
		assert!(result.success);
		let (value, _) = engine.variables().try_get("i").unwrap();
		assert_eq!(value, &WeaverValue::Int(3));
	}

	#[test]
	fn loop_script_hits_iteration_limit() {
		let program = compile("let i : int = 0\nloop:\nlet i : int = i + 1\nif i < 3 goto loop\nhalt").unwrap();
		let mut engine = Engine::new();
		let result = program.run(&mut engine, 2);
		assert!(!result.success);
		assert!(result.message.contains("Iteration limit"));
	}
}
