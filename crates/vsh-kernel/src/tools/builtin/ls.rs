//! ls — List the working directory.

use crate::exec::{ControlFlow, ExecResult};
use crate::tools::{ExecContext, Tool};

/// Ls tool: emits child names of the working directory, two-space
/// separated, in insertion order. An empty directory emits nothing.
///
/// If the working directory unexpectedly fails to list (it should
/// always resolve to a directory), the condition is reported but never
/// stops a run.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn execute(&self, _args: &[String], ctx: &mut ExecContext) -> ControlFlow {
        match ctx.vfs.list() {
            Ok(names) if names.is_empty() => ExecResult::silent().into(),
            Ok(names) => ExecResult::success(names.join("  ")).into(),
            Err(e) => ExecResult::warning(format!("ls: {e}")).into(),
        }
    }
}
