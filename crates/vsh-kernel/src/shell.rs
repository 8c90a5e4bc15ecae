//! The shell driver: wires tokenizer, expander, dispatcher, and
//! history together, and runs scripts.

use tracing::debug;

use crate::error::{ParseError, ScriptError};
use crate::exec::{ControlFlow, ExecMode, ExecResult, Outcome};
use crate::expand;
use crate::lexer;
use crate::prompt;
use crate::tools::{ExecContext, ToolRegistry, builtin};
use crate::vfs::Vfs;

/// One shell run: a registry of builtins plus the state they execute
/// against.
pub struct Shell {
    tools: ToolRegistry,
    ctx: ExecContext,
    prompt_override: Option<String>,
}

impl Shell {
    /// Create a shell over a loaded VFS, positioned at the root.
    pub fn new(vfs: Vfs) -> Self {
        let mut tools = ToolRegistry::new();
        builtin::register_builtins(&mut tools);
        Self {
            tools,
            ctx: ExecContext::new(vfs),
            prompt_override: None,
        }
    }

    /// Install an optional prompt template (`%u`, `%h`, `%d`).
    pub fn with_prompt(mut self, template: Option<String>) -> Self {
        self.prompt_override = template;
        self
    }

    /// Render the prompt for the current working directory.
    pub fn prompt(&self) -> String {
        prompt::render(&self.ctx.vfs.pwd(), self.prompt_override.as_deref())
    }

    /// Raw lines executed so far, in order.
    pub fn history(&self) -> &[String] {
        self.ctx.history.entries()
    }

    pub fn vfs(&self) -> &Vfs {
        &self.ctx.vfs
    }

    /// Feed one raw line through history, tokenization, expansion, and
    /// dispatch.
    ///
    /// The line lands in history before anything can fail.
    /// Tokenization failures surface as `Err`; the caller applies the
    /// mode's policy (report and keep going interactively, halt a
    /// script). A line that tokenizes to nothing is a no-op.
    pub fn execute_line(&mut self, line: &str, mode: ExecMode) -> Result<Outcome, ParseError> {
        self.ctx.history.push(line);
        let tokens = lexer::tokenize(line)?;
        let expanded: Vec<String> = tokens.iter().map(|t| expand::expand(t)).collect();
        let Some((name, args)) = expanded.split_first() else {
            return Ok(Outcome::Continue);
        };
        Ok(self.dispatch(name, args, mode))
    }

    /// Route a command to its builtin and fold the result into the
    /// mode's continue/stop policy. Output is emitted here.
    pub fn dispatch(&mut self, name: &str, args: &[String], mode: ExecMode) -> Outcome {
        debug!(command = name, ?mode, "dispatch");
        let flow = match self.tools.get(name) {
            Some(tool) => tool.execute(args, &mut self.ctx),
            None => {
                ControlFlow::Normal(ExecResult::failure(127, format!("Command not found: {name}")))
            }
        };
        match flow {
            ControlFlow::Exit => Outcome::Stop,
            ControlFlow::Normal(result) => {
                // Present stdout is emitted even when empty: a bare
                // `echo` prints a blank line.
                if let Some(out) = &result.out {
                    println!("{out}");
                }
                if !result.err.is_empty() {
                    eprintln!("{}", result.err);
                }
                if result.ok() {
                    Outcome::Continue
                } else {
                    match mode {
                        ExecMode::Interactive => Outcome::Continue,
                        ExecMode::Scripted => Outcome::Stop,
                    }
                }
            }
        }
    }

    /// Run a script source to completion or first failure.
    ///
    /// Comment lines (`#` after leading whitespace) are echoed and
    /// skipped — they reach neither history nor the dispatcher. Every
    /// other line is echoed behind the prompt, as if typed, then
    /// executed in scripted (fail-fast) mode.
    pub fn run_script(&mut self, source: &str) -> Result<(), ScriptError> {
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            let trimmed = line.trim();
            if let Some(comment) = trimmed.strip_prefix('#') {
                println!("# {}", comment.trim());
                continue;
            }
            println!("{}{}", self.prompt(), line);
            match self.execute_line(line, ExecMode::Scripted) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Stop) => {
                    return Err(ScriptError::Halted {
                        line: line.to_string(),
                    });
                }
                Err(e) => {
                    return Err(ScriptError::Parse {
                        line: idx + 1,
                        source: e,
                    });
                }
            }
        }
        Ok(())
    }
}
