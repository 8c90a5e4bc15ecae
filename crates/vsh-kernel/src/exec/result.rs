//! ExecResult — the structured result of every command execution.

/// The result of executing one command.
///
/// `out` is the command's standard output: `None` means the command
/// produced no stdout at all, while `Some("")` is a real (empty) line
/// the driver must still emit. `err` goes to standard error; `code`
/// decides whether the driver keeps going in scripted mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output, when the command emits any.
    pub out: Option<String>,
    /// Standard error text.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: Some(out.into()),
            err: String::new(),
        }
    }

    /// Create a successful result with no output at all.
    pub fn silent() -> Self {
        Self {
            code: 0,
            out: None,
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: None,
            err: err.into(),
        }
    }

    /// Create a successful result whose only output is a diagnostic.
    pub fn warning(err: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: None,
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::silent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_creates_ok_result() {
        let result = ExecResult::success("hello world");
        assert!(result.ok());
        assert_eq!(result.code, 0);
        assert_eq!(result.out.as_deref(), Some("hello world"));
        assert!(result.err.is_empty());
    }

    #[test]
    fn empty_success_is_still_a_line_of_output() {
        let result = ExecResult::success("");
        assert_eq!(result.out.as_deref(), Some(""));
        assert_ne!(result, ExecResult::silent());
    }

    #[test]
    fn silent_has_no_output() {
        let result = ExecResult::silent();
        assert!(result.ok());
        assert_eq!(result.out, None);
    }

    #[test]
    fn failure_creates_non_ok_result() {
        let result = ExecResult::failure(127, "Command not found: foo");
        assert!(!result.ok());
        assert_eq!(result.code, 127);
        assert_eq!(result.err, "Command not found: foo");
    }

    #[test]
    fn warning_succeeds_with_a_diagnostic() {
        let result = ExecResult::warning("ls: degraded");
        assert!(result.ok());
        assert_eq!(result.out, None);
        assert_eq!(result.err, "ls: degraded");
    }
}
