//! Key bindings for the interactive view.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Commands understood by [`App`](super::App)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Start the selected search (ignored while one is running)
    StartSearch,

    /// Rebuild the grid and drop any search
    ResetGrid,

    /// Select the previous algorithm
    PreviousAlgorithm,

    /// Select the next algorithm
    NextAlgorithm,

    /// Leave the view
    Quit,

    /// Advance the active search by one step
    Tick,
}

/// Map a key press to a [`Cmd`], or `None` for unbound keys.
pub fn cmd_for_key(event: KeyEvent) -> Option<Cmd> {
    // Some terminals report releases too
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let cmd = match event.code {
        KeyCode::Char(' ') => Cmd::StartSearch,
        KeyCode::Char('r') | KeyCode::Char('R') => Cmd::ResetGrid,
        KeyCode::Left => Cmd::PreviousAlgorithm,
        KeyCode::Right => Cmd::NextAlgorithm,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Cmd::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Cmd::Quit,
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_bindings() {
        assert_eq!(
            cmd_for_key(press(KeyCode::Char(' '))),
            Some(Cmd::StartSearch)
        );
        assert_eq!(cmd_for_key(press(KeyCode::Char('r'))), Some(Cmd::ResetGrid));
        assert_eq!(
            cmd_for_key(press(KeyCode::Left)),
            Some(Cmd::PreviousAlgorithm)
        );
        assert_eq!(cmd_for_key(press(KeyCode::Right)), Some(Cmd::NextAlgorithm));
        assert_eq!(cmd_for_key(press(KeyCode::Esc)), Some(Cmd::Quit));
        assert_eq!(cmd_for_key(press(KeyCode::Char('q'))), Some(Cmd::Quit));
        assert_eq!(cmd_for_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(cmd_for_key(event), Some(Cmd::Quit));
        assert_eq!(cmd_for_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut event = press(KeyCode::Char(' '));
        event.kind = KeyEventKind::Release;
        assert_eq!(cmd_for_key(event), None);
    }
}
