//! Builtins, the registry they live in, and the context they run
//! against.

pub mod builtin;
mod context;
mod registry;
mod traits;

pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::Tool;
