//! help — List the builtin commands.

use crate::exec::{ControlFlow, ExecResult};
use crate::tools::{ExecContext, Tool};

const HELP_TEXT: &str = "\
Builtin commands:
  cd <path>      Change the working directory
  echo [args]    Print arguments
  exit           Leave the shell
  find <name>    Search the whole tree for nodes named <name>
  help           Show this listing
  history        Show the lines executed so far
  ls             List the working directory
  pwd            Print the working directory";

/// Help tool: emits a static listing of builtins. Never fails.
pub struct Help;

impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> ControlFlow {
        ExecResult::success(HELP_TEXT).into()
    }
}
