//! Lazy tokenizer for arithmetic/boolean expressions.
//!
//! Identifiers and numeric literals share a single token class (a run of
//! `is_alphanumeric() || c == '.'`); the evaluator distinguishes them by inspecting the first
//! character. The two-character operators `== != >= <=` are recognized greedily before
//! falling back to single-character tokens.

const TWO_CHAR_OPS: [&str; 4] = ["==", "!=", ">=", "<="];

/// A finite, non-restartable iterator over the tokens of an expression.
pub struct Tokenizer {
	chars: Vec<char>,
	pos: usize,
}

impl Tokenizer {
	pub fn new(source: &str) -> Self {
		Self { chars: source.chars().collect(), pos: 0 }
	}
}

impl Iterator for Tokenizer {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		while matches!(self.chars.get(self.pos), Some(c) if c.is_whitespace()) {
			self.pos += 1;
		}
		let c = *self.chars.get(self.pos)?;

		if c.is_alphanumeric() || c == '.' {
			let start = self.pos;
			while matches!(self.chars.get(self.pos), Some(c) if c.is_alphanumeric() || *c == '.') {
				self.pos += 1;
			}
			return Some(self.chars[start..self.pos].iter().collect());
		}

		if let Some(&next) = self.chars.get(self.pos + 1) {
			let pair: String = [c, next].iter().collect();
			if TWO_CHAR_OPS.contains(&pair.as_str()) {
				self.pos += 2;
				return Some(pair);
			}
		}

		self.pos += 1;
		Some(c.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(s: &str) -> Vec<String> {
		Tokenizer::new(s).collect()
	}

	#[test]
	fn tokenizes_arithmetic() {
		assert_eq!(tokens("2 + 3 * 4"), vec!["2", "+", "3", "*", "4"]);
	}

	#[test]
	fn tokenizes_two_char_operators_greedily() {
		assert_eq!(tokens("a >= b"), vec!["a", ">=", "b"]);
		assert_eq!(tokens("a<=b"), vec!["a", "<=", "b"]);
		assert_eq!(tokens("a==b!=c"), vec!["a", "==", "b", "!=", "c"]);
	}

	#[test]
	fn splits_double_ampersand_into_two_tokens() {
		assert_eq!(tokens("a && b"), vec!["a", "&", "&", "b"]);
	}

	#[test]
	fn numeric_literal_with_dot_is_one_token() {
		assert_eq!(tokens("3.14"), vec!["3.14"]);
	}
}
