pub mod interaction;
pub mod io;
pub mod output;
mod shell;
pub mod test_mode;

pub use interaction::TerminalInteraction;
pub use shell::{run_cli, CliArgs, USAGE};
