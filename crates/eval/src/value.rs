//! The closed value-type universe shared by the variable registry and command results.

use std::fmt;

/// The closed set of value kinds a [`WeaverValue`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumType {
	Wstring,
	Wint,
	Wdouble,
	Wbool,
	Wnull,
}

impl fmt::Display for EnumType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Self::Wstring => "Wstring",
			Self::Wint => "Wint",
			Self::Wdouble => "Wdouble",
			Self::Wbool => "Wbool",
			Self::Wnull => "Wnull",
		};
		f.write_str(s)
	}
}

/// A typed value as stored in the registry or carried on a `CommandResult`.
#[derive(Debug, Clone, PartialEq)]
pub enum WeaverValue {
	Str(String),
	Int(i64),
	Double(f64),
	Bool(bool),
	Null,
}

impl WeaverValue {
	/// The [`EnumType`] tag for this value's variant.
	pub fn type_tag(&self) -> EnumType {
		match self {
			Self::Str(_) => EnumType::Wstring,
			Self::Int(_) => EnumType::Wint,
			Self::Double(_) => EnumType::Wdouble,
			Self::Bool(_) => EnumType::Wbool,
			Self::Null => EnumType::Wnull,
		}
	}

	/// Human-readable rendering used by `VariableRegistry::to_string` and command messages.
	pub fn display(&self) -> String {
		match self {
			Self::Str(s) => s.clone(),
			Self::Int(i) => i.to_string(),
			Self::Double(d) => d.to_string(),
			Self::Bool(b) => b.to_string(),
			Self::Null => "null".to_string(),
		}
	}
}

impl fmt::Display for WeaverValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display())
	}
}
