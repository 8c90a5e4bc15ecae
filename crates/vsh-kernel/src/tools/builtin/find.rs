//! find — Search the whole tree by exact name.

use crate::exec::{ControlFlow, ExecResult};
use crate::tools::{ExecContext, Tool};

/// Find tool: depth-first search from the root for every node (file or
/// directory) whose final name segment equals the argument, emitting
/// one full path per line in traversal order. Never fails; an absent
/// name emits nothing.
pub struct Find;

impl Tool for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ControlFlow {
        let Some(name) = args.first() else {
            return ExecResult::failure(1, "find: missing argument").into();
        };
        let matches = ctx.vfs.find(name);
        if matches.is_empty() {
            ExecResult::silent().into()
        } else {
            ExecResult::success(matches.join("\n")).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::Vfs;

    fn make_ctx() -> ExecContext {
        let mut vfs = Vfs::new();
        vfs.add_file("a/b/c.txt", b"x".to_vec()).unwrap();
        vfs.add_dir("d/b").unwrap();
        ExecContext::new(vfs)
    }

    #[test]
    fn find_emits_one_path_per_line() {
        let mut ctx = make_ctx();
        let flow = Find.execute(&["b".to_string()], &mut ctx);
        assert_eq!(flow, ExecResult::success("a/b\nd/b").into());
    }

    #[test]
    fn find_ignores_working_directory() {
        let mut ctx = make_ctx();
        ctx.vfs.cd("d").unwrap();
        let flow = Find.execute(&["c.txt".to_string()], &mut ctx);
        assert_eq!(flow, ExecResult::success("a/b/c.txt").into());
    }

    #[test]
    fn find_absent_name_emits_nothing() {
        let mut ctx = make_ctx();
        let flow = Find.execute(&["zzz".to_string()], &mut ctx);
        assert_eq!(flow, ExecResult::silent().into());
    }

    #[test]
    fn find_missing_argument() {
        let mut ctx = make_ctx();
        let flow = Find.execute(&[], &mut ctx);
        assert_eq!(flow, ExecResult::failure(1, "find: missing argument").into());
    }
}
