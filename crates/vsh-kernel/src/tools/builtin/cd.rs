//! cd — Change the working directory.

use crate::exec::{ControlFlow, ExecResult};
use crate::tools::{ExecContext, Tool};

/// Cd tool: moves the working-directory cursor.
///
/// Takes exactly one path argument; reports a missing argument
/// otherwise. A path that does not resolve to a directory is reported
/// as a failure and the cursor stays put.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ControlFlow {
        let Some(path) = args.first() else {
            return ExecResult::failure(1, "cd: missing argument").into();
        };
        match ctx.vfs.cd(path) {
            Ok(()) => ExecResult::silent().into(),
            Err(_) => ExecResult::failure(1, format!("cd: no such directory: {path}")).into(),
        }
    }
}
