//! Line-oriented scripting on top of `weaver-engine`: a two-pass compiler and a bounded,
//! single-step interpreter over the resulting instruction list.

pub mod compiler;
pub mod error;
pub mod instruction;
pub mod program;
pub mod stepper;

pub use compiler::compile;
pub use error::{CompileError, RuntimeError};
pub use instruction::{DeclaredType, Instruction};
pub use program::{run_source, WeaverProgram};
pub use stepper::Stepper;
