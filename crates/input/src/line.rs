//! Coordinate entry for chess moves (`e2e4`, `e2 e4`, `e2-e4`).

use crate::types::Action;

/// Longest text the entry line accepts
const MAX_LEN: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct MoveEntry {
    text: String,
}

impl MoveEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, c: char) {
        if self.text.len() < MAX_LEN && (c.is_ascii_alphanumeric() || c == ' ' || c == '-') {
            self.text.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Parse and clear the line; `None` (line kept) when it is not a move
    pub fn submit(&mut self) -> Option<Action> {
        let action = parse_move(&self.text)?;
        self.text.clear();
        Some(action)
    }
}

/// Parse `e2e4` style coordinates, ignoring spaces and dashes
pub fn parse_move(text: &str) -> Option<Action> {
    let squeezed: Vec<char> = text.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let [f1, r1, f2, r2] = squeezed.as_slice() else {
        return None;
    };
    Some(Action::Move {
        from: square(*f1, *r1)?,
        to: square(*f2, *r2)?,
    })
}

fn square(file: char, rank: char) -> Option<u8> {
    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Some((rank as u8 - b'1') * 8 + (file as u8 - b'a'))
}
