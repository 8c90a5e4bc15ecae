//! Execution context for builtins.

use crate::history::History;
use crate::vfs::Vfs;

/// State injected into every builtin execution.
///
/// Owned by the shell driver; builtins never touch ambient globals.
#[derive(Debug)]
pub struct ExecContext {
    /// The virtual filesystem and its working-directory cursor.
    pub vfs: Vfs,
    /// Command history for this run.
    pub history: History,
}

impl ExecContext {
    /// Create a context positioned at the VFS root with empty history.
    pub fn new(vfs: Vfs) -> Self {
        Self {
            vfs,
            history: History::new(),
        }
    }
}
