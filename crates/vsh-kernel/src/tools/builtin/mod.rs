//! Built-in commands for vsh.
//!
//! Every command in this shell is a builtin; there are no external
//! programs.

mod cd;
mod echo;
mod exit;
mod find;
mod help;
mod history;
mod ls;
mod pwd;

use super::ToolRegistry;

/// Register all builtins with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(echo::Echo);
    registry.register(pwd::Pwd);
    registry.register(ls::Ls);
    registry.register(cd::Cd);
    registry.register(find::Find);
    registry.register(history::HistoryCmd);
    registry.register(help::Help);
    registry.register(exit::Exit);
}
