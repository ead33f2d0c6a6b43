mod args;
mod commands;
pub mod config;
mod handlers;
pub mod loader;
mod tui;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
