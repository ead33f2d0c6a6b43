mod app;
mod ui;
mod views;

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::loader::LoadEvent;
use app::AppState;

/// Run the kiosk until the user quits. Drives a tick-based loop: draw,
/// poll the keyboard, then drain the loader channel.
pub fn run(config: Config, start: &str, rx: Receiver<LoadEvent>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut state = AppState::new(config, start);
    let tick_rate = Duration::from_millis(250);

    while !state.should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state.handle_key(key.code);
                }
            }
        }

        while let Ok(load_event) = rx.try_recv() {
            state.on_load(load_event);
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
