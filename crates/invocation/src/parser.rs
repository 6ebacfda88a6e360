//! Recursive-descent parser for the invocation grammar:
//!
//! ```text
//! input   = call { "." call } ;
//! call    = [ ident ":" ] ident "(" [ args ] ")" ;
//! args    = arg { "," arg } ;
//! arg     = quoted | bareword ;
//! ```
//!
//! `bareword` is any run of characters excluding `, ( ) . :`, trimmed of surrounding
//! whitespace. `quoted` is a double-quoted string with `\\`, `\"`, `\n`, `\t` escapes.

use thiserror::Error;

use crate::{Call, InvocationPlan};

/// Errors produced while parsing an invocation string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("unterminated string literal")]
	UnterminatedString,
	#[error("unexpected character '{0}' at position {1}")]
	UnexpectedChar(char, usize),
	#[error("unmatched parenthesis")]
	UnmatchedParen,
	#[error("empty identifier")]
	EmptyIdentifier,
	#[error("unexpected end of input")]
	UnexpectedEof,
}

/// Parse an invocation string into an [`InvocationPlan`].
pub fn parse(text: &str) -> Result<InvocationPlan, ParseError> {
	let mut cursor = Cursor::new(text);
	let command = cursor.parse_call()?;
	let mut extensions = Vec::new();

	loop {
		cursor.skip_ws();
		if cursor.peek() == Some('.') {
			cursor.advance();
			extensions.push(cursor.parse_call()?);
		} else {
			break;
		}
	}

	cursor.skip_ws();
	if let Some(c) = cursor.peek() {
		return Err(ParseError::UnexpectedChar(c, cursor.pos));
	}

	Ok(InvocationPlan { command, extensions })
}

struct Cursor {
	chars: Vec<char>,
	pos: usize,
}

impl Cursor {
	fn new(text: &str) -> Self {
		Self { chars: text.chars().collect(), pos: 0 }
	}

	fn peek(&self) -> Option<char> {
		self.chars.get(self.pos).copied()
	}

	fn advance(&mut self) -> Option<char> {
		let c = self.peek();
		if c.is_some() {
			self.pos += 1;
		}
		c
	}

	fn skip_ws(&mut self) {
		while matches!(self.peek(), Some(c) if c.is_whitespace()) {
			self.advance();
		}
	}

	fn parse_call(&mut self) -> Result<Call, ParseError> {
		self.skip_ws();
		let first = self.parse_ident()?;
		self.skip_ws();

		let (namespace, name) = if self.peek() == Some(':') {
			self.advance();
			self.skip_ws();
			let name = self.parse_ident()?;
			(Some(first), name)
		} else {
			(None, first)
		};

		self.skip_ws();
		match self.peek() {
			Some('(') => {
				self.advance();
			}
			Some(c) => return Err(ParseError::UnexpectedChar(c, self.pos)),
			None => return Err(ParseError::UnexpectedEof),
		}

		let args = self.parse_args()?;

		match self.peek() {
			Some(')') => {
				self.advance();
			}
			_ => return Err(ParseError::UnmatchedParen),
		}

		Ok(Call { namespace, name, args })
	}

	fn parse_args(&mut self) -> Result<Vec<String>, ParseError> {
		self.skip_ws();
		if self.peek() == Some(')') {
			return Ok(Vec::new());
		}

		let mut args = vec![self.parse_arg()?];
		loop {
			self.skip_ws();
			match self.peek() {
				Some(',') => {
					self.advance();
					args.push(self.parse_arg()?);
				}
				Some(')') => break,
				Some(c) => return Err(ParseError::UnexpectedChar(c, self.pos)),
				None => return Err(ParseError::UnmatchedParen),
			}
		}
		Ok(args)
	}

	fn parse_arg(&mut self) -> Result<String, ParseError> {
		self.skip_ws();
		if self.peek() == Some('"') {
			self.parse_quoted()
		} else {
			Ok(self.parse_bareword())
		}
	}

	fn parse_quoted(&mut self) -> Result<String, ParseError> {
		self.advance(); // opening quote
		let mut s = String::new();
		loop {
			match self.advance() {
				None => return Err(ParseError::UnterminatedString),
				Some('"') => break,
				Some('\\') => match self.advance() {
					Some('\\') => s.push('\\'),
					Some('"') => s.push('"'),
					Some('n') => s.push('\n'),
					Some('t') => s.push('\t'),
					Some(c) => return Err(ParseError::UnexpectedChar(c, self.pos)),
					None => return Err(ParseError::UnterminatedString),
				},
				Some(c) => s.push(c),
			}
		}
		Ok(s)
	}

	fn parse_bareword(&mut self) -> String {
		let mut s = String::new();
		while let Some(c) = self.peek() {
			if matches!(c, ',' | '(' | ')' | '.' | ':') {
				break;
			}
			s.push(c);
			self.advance();
		}
		s.trim().to_string()
	}

	fn parse_ident(&mut self) -> Result<String, ParseError> {
		let mut s = String::new();
		while let Some(c) = self.peek() {
			if c.is_alphanumeric() || c == '_' || c == '-' {
				s.push(c);
				self.advance();
			} else {
				break;
			}
		}
		if s.is_empty() {
			return Err(ParseError::EmptyIdentifier);
		}
		Ok(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn call(namespace: Option<&str>, name: &str, args: &[&str]) -> Call {
		Call {
			namespace: namespace.map(str::to_string),
			name: name.to_string(),
			args: args.iter().map(|s| s.to_string()).collect(),
		}
	}

	#[test]
	fn parses_bare_command_no_args() {
		let plan = parse("help()").unwrap();
		assert_eq!(plan.command, call(None, "help", &[]));
		assert!(plan.extensions.is_empty());
	}

	#[test]
	fn parses_bareword_arg() {
		let plan = parse("help(delete)").unwrap();
		assert_eq!(plan.command, call(None, "help", &["delete"]));
	}

	#[test]
	fn parses_namespaced_command() {
		let plan = parse("namespace:command(arg1, arg2)").unwrap();
		assert_eq!(plan.command, call(Some("namespace"), "command", &["arg1", "arg2"]));
	}

	#[test]
	fn parses_extension_chain_in_source_order() {
		let plan = parse("delete(myfile.txt).tryrun()").unwrap();
		assert_eq!(plan.command, call(None, "delete", &["myfile.txt"]));
		assert_eq!(plan.extensions, vec![call(None, "tryrun", &[])]);
	}

	#[test]
	fn parses_quoted_arg_with_escapes() {
		let plan = parse(r#"sample("hello, \"world\"\n")"#).unwrap();
		assert_eq!(plan.command.args, vec!["hello, \"world\"\n"]);
	}

	#[test]
	fn parses_multiple_extensions() {
		let plan = parse(r#"system:sample("hello, world").sample()"#).unwrap();
		assert_eq!(plan.command, call(Some("system"), "sample", &["hello, world"]));
		assert_eq!(plan.extensions, vec![call(None, "sample", &[])]);
	}

	#[test]
	fn bareword_arg_is_trimmed() {
		let plan = parse("cmd( foo , bar )").unwrap();
		assert_eq!(plan.command.args, vec!["foo", "bar"]);
	}

	#[test]
	fn rejects_unterminated_string() {
		assert_eq!(parse(r#"cmd("oops)"#), Err(ParseError::UnterminatedString));
	}

	#[test]
	fn rejects_unmatched_paren() {
		assert_eq!(parse("cmd(a, b"), Err(ParseError::UnmatchedParen));
	}

	#[test]
	fn rejects_empty_identifier() {
		assert_eq!(parse("(a)"), Err(ParseError::EmptyIdentifier));
	}

	#[test]
	fn rejects_trailing_garbage() {
		assert_eq!(parse("cmd()x"), Err(ParseError::UnexpectedChar('x', 5)));
	}
}
