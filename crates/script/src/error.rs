//! Compile-time and run-time failures for the script layer.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
	#[error("duplicate label '{0}'")]
	DuplicateLabel(String),
	#[error("unknown label '{0}'")]
	UnknownLabel(String),
	#[error("malformed label declaration '{0}'")]
	MalformedLabel(String),
	#[error("malformed 'let' statement: {0}")]
	MalformedAssignment(String),
	#[error("malformed 'if' statement: {0}")]
	MalformedConditional(String),
	#[error("malformed 'goto' statement: {0}")]
	MalformedGoto(String),
	#[error("unknown type '{0}', expected one of string, int, double, bool")]
	UnknownType(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
	#[error("evaluation error: {0}")]
	Evaluation(String),
}
