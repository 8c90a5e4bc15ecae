//! pwd — Print the working directory.

use crate::exec::{ControlFlow, ExecResult};
use crate::tools::{ExecContext, Tool};

/// Pwd tool: emits the working directory. Never fails.
pub struct Pwd;

impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn execute(&self, _args: &[String], ctx: &mut ExecContext) -> ControlFlow {
        ExecResult::success(ctx.vfs.pwd()).into()
    }
}
