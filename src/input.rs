//! Keyboard input for the game screen.
//!
//! Space is the only game key. Quit keys end the loop and never reach the
//! simulation. Raw mode turns Ctrl+C into an ordinary key event, so it is
//! handled here as a quit.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// What a key press asks the loop driver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The action key: jump while playing, reset after game over.
    Action,
    Quit,
}

/// Map a key event to an action. Releases, repeats and other keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char(' ') => Some(KeyAction::Action),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Pick the action to deliver from a batch of pending events.
///
/// A quit anywhere in the batch wins; otherwise the first action key is
/// delivered and the rest of the batch is discarded.
pub fn select_action<I: IntoIterator<Item = Event>>(events: I) -> Option<KeyAction> {
    let mut selected = None;
    for event in events {
        if let Event::Key(key) = event {
            match map_key(key) {
                Some(KeyAction::Quit) => return Some(KeyAction::Quit),
                Some(KeyAction::Action) => {
                    selected.get_or_insert(KeyAction::Action);
                }
                None => {}
            }
        }
    }
    selected
}

/// Drain every pending terminal event without blocking.
pub fn poll_action() -> io::Result<Option<KeyAction>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(select_action(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_is_the_action_key() {
        assert_eq!(
            map_key(press(KeyCode::Char(' '))),
            Some(KeyAction::Action)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_other_keys_discarded() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
        assert_eq!(map_key(press(KeyCode::Up)), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_batch_delivers_at_most_one_action() {
        let events = vec![
            Event::Key(press(KeyCode::Char('x'))),
            Event::Key(press(KeyCode::Char(' '))),
            Event::Key(press(KeyCode::Char(' '))),
            Event::Resize(80, 24),
        ];
        assert_eq!(select_action(events), Some(KeyAction::Action));
        assert_eq!(select_action(Vec::new()), None);
    }

    #[test]
    fn test_quit_wins_over_action() {
        let events = vec![
            Event::Key(press(KeyCode::Char(' '))),
            Event::Key(press(KeyCode::Esc)),
        ];
        assert_eq!(select_action(events), Some(KeyAction::Quit));
    }
}
