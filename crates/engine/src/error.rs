//! Registration-time failures — everything that can go wrong dispatching an invocation is
//! already folded into a [`CommandResult`](weaver_command::CommandResult) carrying an
//! [`ErrorKind`](weaver_command::ErrorKind); this enum covers only the setup-time calls
//! (`Engine::register`, `Engine::register_extension`) that return a `Result` directly.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
	#[error("Cannot register after dispatch has started")]
	RegistrationClosed,

	#[error("duplicate command '{0}'")]
	DuplicateCommand(String),

	#[error("duplicate extension '{0}'")]
	DuplicateExtension(String),
}
