//! Interactive terminal view.
//!
//! Draws the grid and an info panel with ratatui and advances the selected
//! search by one step per tick (`display.fps` ticks per second).
//!
//! | Key | Action |
//! |-----|--------|
//! | `SPACE` | Start the selected search |
//! | `R` | Reset the grid |
//! | `←` / `→` | Change algorithm |
//! | `Q` / `Esc` / `Ctrl-C` | Quit |

mod app;
mod draw;
mod keymap;

pub use app::{Action, App};
pub use draw::{HELP_LINE, draw, palette};
pub use keymap::{Cmd, cmd_for_key};

use std::time::Instant;

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event};

/// Run the event loop until the user quits.
///
/// The caller owns terminal setup and restore.
pub fn run(mut terminal: DefaultTerminal, mut app: App) -> std::io::Result<()> {
    let tick_rate = app.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(cmd) = cmd_for_key(key) {
                    if app.on(cmd) == Action::Quit {
                        return Ok(());
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on(Cmd::Tick);
            last_tick = Instant::now();
        }
    }
}
