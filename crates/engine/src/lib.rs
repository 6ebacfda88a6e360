//! The dispatcher layer: command/extension registries, the `Engine` itself, and the
//! feedback mediator that turns a synchronous call into a multi-turn conversation.

pub mod dispatch;
pub mod error;
pub mod mediator;
pub mod registry;

pub use dispatch::Engine;
pub use error::DispatchError;
pub use mediator::FeedbackMediator;
pub use registry::{CommandRegistry, ExtensionRegistry};
