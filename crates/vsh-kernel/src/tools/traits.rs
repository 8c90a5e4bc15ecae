//! The builtin-command seam.

use crate::exec::ControlFlow;
use crate::tools::ExecContext;

/// A builtin command.
///
/// Arguments arrive tokenized and environment-expanded; the context
/// carries the VFS cursor and the history. Builtins write nothing
/// themselves — output travels back in the [`ControlFlow`] and the
/// driver emits it.
pub trait Tool {
    /// Command name used for dispatch.
    fn name(&self) -> &str;

    /// Execute with the given arguments against the context.
    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ControlFlow;
}
