//! Key mapping from terminal events to game actions.
//!
//! | Game | Keys |
//! |------|------|
//! | Neon Dash | Space / Up / W / K: jump |
//! | Neon Snake | arrows, WASD, HJKL: steer |
//! | Tic Tac Toe | 1-9: cell (row-major) |
//! | Memory Master | a-p: card |
//! | Ninja Trivia | 1-4 or a-d: option |
//! | Ninja Hangman | letters: guess |
//! | Code Breaker | type, Backspace, Enter submits, Tab hint |
//! | Speed Typer | type, Backspace, Space / Enter submits |
//! | Chess Lite | type `e2e4`, Enter plays |
//!
//! Esc returns to the hub and Ctrl+C quits everywhere. In games without
//! free text entry `q` also goes back and `r` restarts; text games use
//! Ctrl+R to restart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::line::MoveEntry;
use crate::types::{Action, Direction, GameId};

/// App-level intent, handled outside any game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Back,
    Restart,
}

/// Whether `game` consumes printable letters as input
pub fn captures_text(game: GameId) -> bool {
    matches!(
        game,
        GameId::Hangman | GameId::CodeBreaker | GameId::Typing | GameId::ChessLite
    )
}

/// App-level command for `key` while playing `game`
pub fn command_for(game: GameId, key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('r') if ctrl => Some(Command::Restart),
        KeyCode::Esc => Some(Command::Back),
        KeyCode::Char('q') | KeyCode::Char('Q') if !captures_text(game) => Some(Command::Back),
        KeyCode::Char('r') | KeyCode::Char('R') if !captures_text(game) => Some(Command::Restart),
        _ => None,
    }
}

/// Per-session key mapper; holds the chess entry line
#[derive(Debug, Clone, Default)]
pub struct KeyMapper {
    entry: MoveEntry,
}

impl KeyMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partially typed chess move
    pub fn pending_text(&self) -> &str {
        self.entry.text()
    }

    pub fn reset(&mut self) {
        self.entry.clear();
    }

    /// Map keyboard input to an action for `game`.
    pub fn map(&mut self, game: GameId, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match game {
            GameId::GeometryDash => match key.code {
                KeyCode::Char(' ') | KeyCode::Up => Some(Action::Jump),
                KeyCode::Char(c) if matches!(c.to_ascii_lowercase(), 'w' | 'k') => Some(Action::Jump),
                _ => None,
            },
            GameId::Snake => steer(key.code).map(Action::Steer),
            GameId::TicTacToe => match key.code {
                KeyCode::Char(c @ '1'..='9') => Some(Action::Pick(c as u8 - b'1')),
                _ => None,
            },
            GameId::Memory => match key.code {
                KeyCode::Char(c) if ('a'..='p').contains(&c.to_ascii_lowercase()) => {
                    Some(Action::Pick(c.to_ascii_lowercase() as u8 - b'a'))
                }
                _ => None,
            },
            GameId::Trivia => match key.code {
                KeyCode::Char(c @ '1'..='4') => Some(Action::Choose(c as u8 - b'1')),
                KeyCode::Char(c) if ('a'..='d').contains(&c.to_ascii_lowercase()) => {
                    Some(Action::Choose(c.to_ascii_lowercase() as u8 - b'a'))
                }
                _ => None,
            },
            GameId::Hangman => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Guess(c.to_ascii_uppercase())),
                _ => None,
            },
            GameId::CodeBreaker => match key.code {
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Backspace => Some(Action::Erase),
                KeyCode::Tab => Some(Action::Hint),
                KeyCode::Char(c) => Some(Action::Type(c)),
                _ => None,
            },
            GameId::Typing => match key.code {
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Backspace => Some(Action::Erase),
                KeyCode::Char(c) => Some(Action::Type(c)),
                _ => None,
            },
            GameId::ChessLite => {
                match key.code {
                    KeyCode::Enter => return self.entry.submit(),
                    KeyCode::Backspace => self.entry.pop(),
                    KeyCode::Char(c) => self.entry.push(c),
                    _ => {}
                }
                None
            }
        }
    }
}

fn steer(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' | 'k' => Some(Direction::Up),
            's' | 'j' => Some(Direction::Down),
            'a' | 'h' => Some(Direction::Left),
            'd' | 'l' => Some(Direction::Right),
            _ => None,
        },
        _ => None,
    }
}
