//! vsh entry point.
//!
//! Loads the VFS from a ZIP archive, optionally runs a startup script,
//! then hands off to the interactive loop. The two startup failure
//! modes get distinct exit codes so callers can tell them apart.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vsh_kernel::{Shell, load_archive};

/// Shell emulator over an in-memory filesystem loaded from a ZIP
/// archive.
#[derive(Debug, Parser)]
#[command(name = "vsh", version, about)]
struct Args {
    /// ZIP archive to materialize the virtual filesystem from.
    #[arg(long = "vfs-path")]
    vfs_path: PathBuf,

    /// Prompt template; %u = user, %h = host, %d = current directory.
    #[arg(long)]
    prompt: Option<String>,

    /// Script to run before the interactive loop starts.
    #[arg(long = "startup-script")]
    startup_script: Option<PathBuf>,
}

const EXIT_ARCHIVE_FAILED: u8 = 1;
const EXIT_SCRIPT_FAILED: u8 = 2;

fn main() -> ExitCode {
    // Respects RUST_LOG.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!(
        vfs_path = %args.vfs_path.display(),
        prompt = ?args.prompt,
        startup_script = ?args.startup_script,
        "starting"
    );

    let vfs = match load_archive(&args.vfs_path) {
        Ok(vfs) => vfs,
        Err(e) => {
            eprintln!("vsh: VFS load error: {e}");
            return ExitCode::from(EXIT_ARCHIVE_FAILED);
        }
    };

    let mut shell = Shell::new(vfs).with_prompt(args.prompt);

    if let Some(script) = &args.startup_script {
        let source = match std::fs::read_to_string(script) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("vsh: script read error: {}: {e}", script.display());
                return ExitCode::from(EXIT_SCRIPT_FAILED);
            }
        };
        if let Err(e) = shell.run_script(&source) {
            eprintln!("vsh: {e}");
            return ExitCode::from(EXIT_SCRIPT_FAILED);
        }
    }

    if let Err(e) = vsh_repl::run(&mut shell) {
        eprintln!("vsh: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
