//! Key mapping from terminal events to game actions.

use crate::types::{BlockAction, Direction, MazeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(Direction::Left),
        _ => None,
    }
}

/// Map keyboard input to maze commands. Key releases are ignored.
pub fn maze_action(key: KeyEvent) -> Option<MazeAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if let Some(dir) = direction_of(key.code) {
        return Some(MazeAction::Move(dir));
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('m' | 'M') => {
            Some(MazeAction::PlaceMine)
        }
        KeyCode::Char('r' | 'R') => Some(MazeAction::Restart),
        _ => None,
    }
}

/// Map keyboard input to block game commands. Key releases are ignored.
pub fn block_action(key: KeyEvent) -> Option<BlockAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(BlockAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(BlockAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(BlockAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K' | 'x' | 'X') => Some(BlockAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(BlockAction::HardDrop),
        KeyCode::Char('c' | 'C') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(BlockAction::Hold)
        }
        KeyCode::Char('r' | 'R') => Some(BlockAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
