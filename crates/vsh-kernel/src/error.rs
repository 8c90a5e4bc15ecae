//! Error types for the vsh kernel.

use thiserror::Error;

/// Failures from namespace-tree construction and path resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// A path segment is absent, or traversal hit a file mid-path.
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// The path resolved to a file where a directory was required.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// During loading, a file already occupies a segment that a
    /// directory (or vice versa) needs.
    #[error("conflicting entry at: {0}")]
    Conflict(String),

    /// During loading, a path tried to store `.` or `..` as a node
    /// name. Stored names are always concrete.
    #[error("invalid path segment in: {0}")]
    InvalidName(String),
}

/// Tokenization failures for a raw command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A quoted region was never closed.
    #[error("unbalanced quote: missing closing {0}")]
    UnbalancedQuote(char),

    /// The line ends with a bare backslash.
    #[error("trailing backslash")]
    TrailingEscape,
}

/// Failures that end a scripted run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// A line failed to tokenize.
    #[error("script parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// A command returned a stop signal mid-script.
    #[error("script stopped at: {line}")]
    Halted { line: String },
}

/// Failures while materializing the VFS from an archive.
///
/// Any of these is fatal to the process: a partially loaded VFS is
/// never handed to the shell.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read archive")]
    Io(#[from] std::io::Error),

    #[error("malformed archive")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Vfs(#[from] VfsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vfs_error_messages() {
        assert_eq!(
            VfsError::NotFound("a/b".into()).to_string(),
            "no such file or directory: a/b"
        );
        assert_eq!(
            VfsError::NotADirectory("a.txt".into()).to_string(),
            "not a directory: a.txt"
        );
        assert_eq!(
            VfsError::InvalidName("a/../b".into()).to_string(),
            "invalid path segment in: a/../b"
        );
    }

    #[test]
    fn script_halted_message_names_the_line() {
        let err = ScriptError::Halted {
            line: "cd /nope".into(),
        };
        assert_eq!(err.to_string(), "script stopped at: cd /nope");
    }

    #[test]
    fn parse_error_carries_quote_char() {
        let err = ParseError::UnbalancedQuote('"');
        assert!(err.to_string().contains('"'));
    }
}
