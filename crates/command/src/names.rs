//! Well-known command, extension, and namespace names, exposed as a flat enumeration of
//! string constants with process lifetime.

/// Lists every registered command with its description.
pub const HELP: &str = "help";

/// Lists every registered command's qualified name, one per line.
pub const LIST: &str = "list";

/// Extension: runs a command's `preview` instead of its `execute`.
pub const TRYRUN: &str = "tryrun";

/// Extension: runs the wrapped call `count` times, where `count` is the extension's sole
/// argument.
pub const SAMPLE: &str = "sample";

/// Reserved namespace tag for commands that ship with the engine itself.
pub const BUILTIN_NAMESPACE: &str = "sys";
