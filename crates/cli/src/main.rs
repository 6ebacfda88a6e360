//! Minimal host binary: wires a `tracing` subscriber, registers the reference builtins, and
//! offers a line-oriented REPL or a `--script <path>` mode. Carries no dispatch logic of its
//! own — everything here is plumbing over `weaver-engine`/`weaver-script`.

mod cli;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use weaver_engine::Engine;

use cli::Cli;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
		.init();

	let cli = Cli::parse();

	let mut engine = Engine::new();
	if let Err(err) = weaver_builtins::register_all(&mut engine) {
		tracing::error!(%err, "failed to register builtin commands");
		eprintln!("fatal: {err}");
		return ExitCode::FAILURE;
	}

	match cli.script {
		Some(path) => run_script(&mut engine, &path, cli.max_iterations),
		None => run_repl(&mut engine),
	}
}

fn run_script(engine: &mut Engine, path: &std::path::Path, max_iterations: u64) -> ExitCode {
	let source = match std::fs::read_to_string(path) {
		Ok(s) => s,
		Err(err) => {
			eprintln!("fatal: could not read '{}': {err}", path.display());
			return ExitCode::FAILURE;
		}
	};

	let result = weaver_script::run_source(&source, engine, max_iterations);
	println!("{}", result.message);
	if result.success {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}

fn run_repl(engine: &mut Engine) -> ExitCode {
	let stdin = io::stdin();
	let mut stdout = io::stdout();
	let mut pending_request_id: Option<String> = None;

	loop {
		print!("weaver> ");
		let _ = stdout.flush();

		let mut line = String::new();
		let bytes_read = match stdin.lock().read_line(&mut line) {
			Ok(n) => n,
			Err(err) => {
				eprintln!("fatal: {err}");
				return ExitCode::FAILURE;
			}
		};
		if bytes_read == 0 {
			return ExitCode::SUCCESS;
		}

		let line = line.trim();
		if line.is_empty() {
			continue;
		}

		let result = match pending_request_id.take() {
			Some(id) => engine.continue_feedback(&id, line),
			None => engine.process_input(line),
		};

		println!("{}", result.message);
		if result.requires_confirmation {
			if let Some(feedback) = &result.feedback {
				if !feedback.options.is_empty() {
					println!("({})", feedback.options.join("/"));
				}
				pending_request_id = feedback.request_id.clone();
			}
		} else if result.success && line.eq_ignore_ascii_case("exit()") {
			return ExitCode::SUCCESS;
		}
	}
}
