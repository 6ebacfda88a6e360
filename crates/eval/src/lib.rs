//! Typed variable storage and the recursive-descent expression evaluator that commands and
//! scripts use to read and compute over it.
//!
//! Layered bottom-up: [`tokenizer`] feeds [`evaluator`], which is the only consumer of
//! [`registry`]'s [`VariableRegistry`]. Nothing in this crate depends on command dispatch or
//! scripting — both of those are built on top.

pub mod evaluator;
pub mod registry;
pub mod tokenizer;
pub mod value;

pub use evaluator::{EvalError, Evaluator};
pub use registry::VariableRegistry;
pub use tokenizer::Tokenizer;
pub use value::{EnumType, WeaverValue};
