use std::sync::mpsc;

use anyhow::Result;

use crate::config::Config;
use crate::loader::{self, DataSource};
use crate::tui;

/// Launch the kiosk. The catalog fetch runs on a background thread while
/// the terminal shows the loading screen; the event loop picks up the
/// result from the channel.
pub fn handle(source: DataSource, config: Config, start: &str) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    loader::spawn_load(source, tx);
    tui::run(config, start, rx)
}
