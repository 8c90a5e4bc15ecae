//! echo — Print arguments to stdout.

use crate::exec::{ControlFlow, ExecResult};
use crate::tools::{ExecContext, Tool};

/// Echo tool: emits its arguments space-joined. Always produces a line
/// of output, even with no arguments. Never fails.
pub struct Echo;

impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn execute(&self, args: &[String], _ctx: &mut ExecContext) -> ControlFlow {
        ExecResult::success(args.join(" ")).into()
    }
}
