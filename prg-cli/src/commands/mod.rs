mod run;
mod state;

pub use run::{handle_run_command, RunArgs};
pub use state::{handle_state_command, StateCommands};
