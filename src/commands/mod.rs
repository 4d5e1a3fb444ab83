use clap::ValueEnum;
use meallab_core::ListStore;

mod config_cmd;
mod list;
mod meal;
mod search;

pub use config_cmd::ConfigCommand;
pub use list::{ListCommand, MoveArgs, RemoveArgs};
pub use meal::{RandomArgs, ShowArgs};
pub use search::SearchCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints queued persistence warnings to stderr.
pub fn report_warnings<S: meallab_core::ListStorage>(store: &mut ListStore<S>) {
    for warning in store.take_warnings() {
        eprintln!("Warning: {}", warning);
    }
}
