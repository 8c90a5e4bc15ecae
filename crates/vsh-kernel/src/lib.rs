//! vsh kernel — a POSIX-like shell emulated over an in-memory virtual
//! filesystem.
//!
//! The filesystem is materialized once, from a ZIP archive, and is
//! read-only afterwards; the shell never touches the host disk behind
//! it. Two execution modes share one dispatcher: interactive sessions
//! are forgiving, scripts are fail-fast.
//!
//! ```
//! use vsh_kernel::{ExecMode, Shell, Vfs};
//!
//! let mut vfs = Vfs::new();
//! vfs.add_file("a/b/c.txt", b"hello".to_vec()).unwrap();
//! let mut shell = Shell::new(vfs);
//! shell.execute_line("cd a/b", ExecMode::Interactive).unwrap();
//! assert_eq!(shell.vfs().pwd(), "/a/b");
//! ```

pub mod error;
pub mod exec;
pub mod expand;
pub mod history;
pub mod lexer;
pub mod prompt;
pub mod shell;
pub mod tools;
pub mod vfs;

pub use error::{ArchiveError, ParseError, ScriptError, VfsError};
pub use exec::{ControlFlow, ExecMode, ExecResult, Outcome};
pub use history::History;
pub use shell::Shell;
pub use vfs::{Node, Vfs, load_archive, load_archive_reader};
