//! Interactive front end for vsh.
//!
//! Reads lines with rustyline and feeds them to the kernel's shell
//! driver in interactive (forgiving) mode. End-of-input and interrupts
//! are clean halts, never errors.

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use vsh_kernel::{ExecMode, Outcome, Shell};

/// Run the interactive loop until `exit` or end of input.
pub fn run(shell: &mut Shell) -> Result<()> {
    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("failed to create line editor")?;

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match shell.execute_line(&line, ExecMode::Interactive) {
                    Ok(Outcome::Continue) => {}
                    Ok(Outcome::Stop) => break,
                    // Recoverable interactively: report and keep going.
                    Err(e) => eprintln!("vsh: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                eprintln!("vsh: {err}");
                break;
            }
        }
    }

    Ok(())
}
