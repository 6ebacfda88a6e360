//! Command-line surface for the `weaver` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "weaver", about = "Weaver Cmd: an embeddable command execution engine")]
pub struct Cli {
	/// Compile and run a script file instead of reading a stdin REPL.
	#[arg(long, value_name = "PATH")]
	pub script: Option<PathBuf>,

	/// Instruction-dispatch budget for `--script` runs, guarding against infinite loops.
	#[arg(long, default_value_t = 10_000)]
	pub max_iterations: u64,
}
