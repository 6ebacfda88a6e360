//! The reference command and extension set: `help`, `list`, `delete`, `setvalue`,
//! `getvalue`, `exit`, and the `tryrun`/`sample` extensions from the canonical examples.

pub mod delete;
pub mod exit;
pub mod getvalue;
pub mod help;
pub mod list;
pub mod sample;
pub mod setvalue;
pub mod tryrun;

pub use delete::DeleteCommand;
pub use exit::ExitCommand;
pub use getvalue::GetValueCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use sample::SampleExtension;
pub use setvalue::SetValueCommand;
pub use tryrun::TryRunExtension;

use weaver_engine::{DispatchError, Engine};

/// Registers every reference command and extension with `engine`. Intended for hosts that
/// want the full canonical set rather than hand-picking a subset.
pub fn register_all(engine: &mut Engine) -> Result<(), DispatchError> {
	engine.register(Box::new(HelpCommand::default()))?;
	engine.register(Box::new(ListCommand::default()))?;
	engine.register(Box::new(DeleteCommand::default()))?;
	engine.register(Box::new(SetValueCommand::default()))?;
	engine.register(Box::new(GetValueCommand::default()))?;
	engine.register(Box::new(ExitCommand::default()))?;
	engine.register_extension(Box::new(TryRunExtension))?;
	engine.register_extension(Box::new(SampleExtension))?;
	tracing::info!("registered builtin commands and extensions");
	Ok(())
}
