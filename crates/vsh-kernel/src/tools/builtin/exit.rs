//! exit — Leave the shell.

use crate::exec::ControlFlow;
use crate::tools::{ExecContext, Tool};

/// Exit tool: signals stop unconditionally, in both modes.
pub struct Exit;

impl Tool for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> ControlFlow {
        ControlFlow::Exit
    }
}
