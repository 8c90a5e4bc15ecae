//! Execution primitives shared by the dispatcher and the driver.

mod result;

pub use result::ExecResult;

/// Signal returned by a builtin to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlFlow {
    /// Normal completion; the driver applies the mode's error policy.
    Normal(ExecResult),
    /// Terminate the session unconditionally (`exit`).
    Exit,
}

impl From<ExecResult> for ControlFlow {
    fn from(result: ExecResult) -> Self {
        ControlFlow::Normal(result)
    }
}

/// Where command lines come from; decides the error policy.
///
/// Interactive sessions are forgiving: a failing builtin or an unknown
/// command is reported and the session keeps going. Scripts are
/// fail-fast: the same conditions halt the remaining lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    Interactive,
    Scripted,
}

/// Whether the driver should keep feeding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Stop,
}
