//! history — Show the lines executed so far.

use std::fmt::Write as _;

use crate::exec::{ControlFlow, ExecResult};
use crate::tools::{ExecContext, Tool};

/// History tool: emits every recorded line, 1-indexed, index
/// right-justified to three columns. Never fails.
pub struct HistoryCmd;

impl Tool for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }

    fn execute(&self, _args: &[String], ctx: &mut ExecContext) -> ControlFlow {
        if ctx.history.is_empty() {
            return ExecResult::silent().into();
        }
        let mut out = String::new();
        for (idx, entry) in ctx.history.entries().iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{:>3}: {entry}", idx + 1);
        }
        ExecResult::success(out).into()
    }
}
