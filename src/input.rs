use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::Point;
use crate::snake::Direction;

/// Keys the game tells apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Arrow(Direction),
    Pause,
    Other,
}

/// Terminal events boiled down to what the state machine understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Press(Key),
    Release(Key),
    Click(Point),
    Pointer(Point),
}

/// Translates one terminal event.
///
/// Most terminals only report key presses. When `reports_release` is
/// false every press is followed by a synthesized release so that
/// "on release" transitions still fire.
pub fn translate(event: &Event, reports_release: bool) -> Vec<Input> {
    match event {
        Event::Key(key_ev) => translate_key(key_ev, reports_release),
        Event::Mouse(mouse_ev) => translate_mouse(mouse_ev).into_iter().collect(),
        _ => vec![],
    }
}

fn translate_key(key_ev: &KeyEvent, reports_release: bool) -> Vec<Input> {
    if is_quit(key_ev) {
        // Quit fires on the press alone
        return match key_ev.kind {
            KeyEventKind::Release => vec![],
            _ => vec![Input::Quit],
        };
    }

    let key = match key_ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Key::Arrow(Direction::Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Key::Arrow(Direction::Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Key::Arrow(Direction::Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Key::Arrow(Direction::Right),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Key::Pause,
        _ => Key::Other,
    };

    match key_ev.kind {
        KeyEventKind::Release => vec![Input::Release(key)],
        KeyEventKind::Press | KeyEventKind::Repeat if reports_release => vec![Input::Press(key)],
        KeyEventKind::Press | KeyEventKind::Repeat => vec![Input::Press(key), Input::Release(key)],
    }
}

fn translate_mouse(mouse_ev: &MouseEvent) -> Option<Input> {
    let point = (mouse_ev.column, mouse_ev.row);

    match mouse_ev.kind {
        MouseEventKind::Up(_) => Some(Input::Click(point)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Input::Pointer(point)),
        _ => None,
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    match ev.code {
        KeyCode::Char('c') => ev.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
