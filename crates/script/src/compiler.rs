//! Two-pass compiler: split source into instructions and index labels, then resolve every
//! `goto`/`if … goto` target against that index.

use indexmap::IndexMap;

use crate::error::CompileError;
use crate::instruction::{DeclaredType, Instruction};
use crate::program::WeaverProgram;

enum RawInstruction {
	Call(String),
	Assign { key: String, expr: String, declared_type: DeclaredType },
	IfGoto { expr: String, label: String },
	Goto { label: String },
	Halt,
}

/// Compiles line-oriented script source into a [`WeaverProgram`].
///
/// Blank lines and lines starting with `#` are comments. Recognized forms: `label:`,
/// `let <key> : <type> = <expr>`, `if <boolExpr> goto <label>`, `goto <label>`, `halt`. Any
/// other non-empty line is a command invocation, passed verbatim to the engine at run time.
pub fn compile(source: &str) -> Result<WeaverProgram, CompileError> {
	let mut raw = Vec::new();
	let mut labels: IndexMap<String, usize> = IndexMap::new();

	for line in source.lines() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}

		if let Some(name) = line.strip_suffix(':') {
			if name.is_empty() || !is_valid_label(name) {
				return Err(CompileError::MalformedLabel(line.to_string()));
			}
			if labels.insert(name.to_string(), raw.len()).is_some() {
				return Err(CompileError::DuplicateLabel(name.to_string()));
			}
			continue;
		}

		raw.push(parse_line(line)?);
	}

	let mut instructions = Vec::with_capacity(raw.len());
	for instr in raw {
		instructions.push(resolve(instr, &labels)?);
	}

	tracing::debug!(instructions = instructions.len(), labels = labels.len(), "script compiled");
	Ok(WeaverProgram { instructions })
}

fn is_valid_label(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_line(line: &str) -> Result<RawInstruction, CompileError> {
	if line == "halt" {
		return Ok(RawInstruction::Halt);
	}

	if let Some(rest) = line.strip_prefix("let ") {
		return parse_assign(rest);
	}

	if let Some(rest) = line.strip_prefix("if ") {
		return parse_if_goto(rest);
	}

	if let Some(rest) = line.strip_prefix("goto ") {
		let label = rest.trim();
		if label.is_empty() {
			return Err(CompileError::MalformedGoto(line.to_string()));
		}
		return Ok(RawInstruction::Goto { label: label.to_string() });
	}

	Ok(RawInstruction::Call(line.to_string()))
}

fn parse_assign(rest: &str) -> Result<RawInstruction, CompileError> {
	let (key, rest) = rest.split_once(':').ok_or_else(|| CompileError::MalformedAssignment(rest.to_string()))?;
	let (ty, expr) = rest.split_once('=').ok_or_else(|| CompileError::MalformedAssignment(rest.to_string()))?;
	let key = key.trim();
	let declared_type = DeclaredType::parse(ty.trim())?;
	if key.is_empty() {
		return Err(CompileError::MalformedAssignment(rest.to_string()));
	}
	Ok(RawInstruction::Assign { key: key.to_string(), expr: expr.trim().to_string(), declared_type })
}

fn parse_if_goto(rest: &str) -> Result<RawInstruction, CompileError> {
	let (expr, label) = rest.rsplit_once(" goto ").ok_or_else(|| CompileError::MalformedConditional(rest.to_string()))?;
	let label = label.trim();
	if expr.trim().is_empty() || label.is_empty() {
		return Err(CompileError::MalformedConditional(rest.to_string()));
	}
	Ok(RawInstruction::IfGoto { expr: expr.trim().to_string(), label: label.to_string() })
}

fn resolve(instr: RawInstruction, labels: &IndexMap<String, usize>) -> Result<Instruction, CompileError> {
	Ok(match instr {
		RawInstruction::Call(text) => Instruction::Call(text),
		RawInstruction::Assign { key, expr, declared_type } => Instruction::Assign { key, expr, declared_type },
		RawInstruction::Halt => Instruction::Halt,
		RawInstruction::Goto { label } => Instruction::Goto { target: resolve_label(&label, labels)? },
		RawInstruction::IfGoto { expr, label } => Instruction::IfGoto { expr, target: resolve_label(&label, labels)? },
	})
}

fn resolve_label(label: &str, labels: &IndexMap<String, usize>) -> Result<usize, CompileError> {
	labels.get(label).copied().ok_or_else(|| CompileError::UnknownLabel(label.to_string()))
}
