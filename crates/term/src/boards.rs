//! Painters for the board games: tic-tac-toe, memory and chess-lite.

use crate::core::games::chess::{square_name, ChessView, Color as Side};
use crate::core::games::memory::MemoryView;
use crate::core::games::tictactoe::{Mark, Opponent, TicTacToeView};
use crate::fb::{palette, FrameBuffer, Style};
use crate::view::Rect;

fn status_line(fb: &mut FrameBuffer, area: Rect, text: &str, style: Style) {
    if area.h > 0 {
        fb.put_centered(area.x, area.w, area.bottom() - 1, text, style);
    }
}

pub fn draw_tictactoe(fb: &mut FrameBuffer, area: Rect, view: &TicTacToeView) {
    const CELL_W: u16 = 7;
    const CELL_H: u16 = 3;
    let board_w = CELL_W * 3 + 2;
    let board_h = CELL_H * 3 + 2;
    let ox = area.x + area.w.saturating_sub(board_w) / 2;
    let oy = area.y + area.h.saturating_sub(board_h + 2) / 2;

    let grid = Style::fg(palette::MUTED);
    for i in 1..3 {
        let gx = ox + i * (CELL_W + 1) - 1;
        let gy = oy + i * (CELL_H + 1) - 1;
        for y in oy..oy + board_h {
            fb.put_char(gx, y, '│', grid);
        }
        for x in ox..ox + board_w {
            fb.put_char(x, gy, '─', grid);
        }
        for j in 1..3 {
            fb.put_char(ox + j * (CELL_W + 1) - 1, gy, '┼', grid);
        }
    }

    for (i, cell) in view.cells.iter().enumerate() {
        let (col, row) = (i as u16 % 3, i as u16 / 3);
        let cx = ox + col * (CELL_W + 1);
        let cy = oy + row * (CELL_H + 1) + 1;
        let winning = view.winning_line.is_some_and(|line| line.contains(&i));
        match cell {
            Some(mark) => {
                let color = match (winning, mark) {
                    (true, _) => palette::YELLOW,
                    (false, Mark::X) => palette::CYAN,
                    (false, Mark::O) => palette::MAGENTA,
                };
                fb.put_centered(cx, CELL_W, cy, &mark.as_char().to_string(), Style::fg(color).bold());
            }
            None => {
                let label = char::from(b'1' + i as u8).to_string();
                fb.put_centered(cx, CELL_W, cy, &label, Style::fg(palette::MUTED).dim());
            }
        }
    }

    let status = match (view.thinking, view.opponent) {
        (true, _) => "Computer is thinking...".to_string(),
        (false, Opponent::Computer) => "Your move (X)".to_string(),
        (false, Opponent::Local) => format!("{} to move", view.to_move.as_char()),
    };
    status_line(fb, area, &status, Style::fg(palette::TEXT));
}

pub fn draw_memory(fb: &mut FrameBuffer, area: Rect, view: &MemoryView) {
    const CARD_W: u16 = 7;
    const CARD_H: u16 = 3;
    let board_w = CARD_W * 4 + 3;
    let board_h = CARD_H * 4 + 3;
    let ox = area.x + area.w.saturating_sub(board_w) / 2;
    let oy = area.y + area.h.saturating_sub(board_h + 2) / 2;

    for (i, card) in view.cards.iter().enumerate() {
        let (col, row) = (i as u16 % 4, i as u16 / 4);
        let x = ox + col * (CARD_W + 1);
        let y = oy + row * (CARD_H + 1);
        let (border, face) = if card.solved {
            (Style::fg(palette::GREEN).dim(), Style::fg(palette::GREEN))
        } else if card.face_up {
            (Style::fg(palette::YELLOW), Style::fg(palette::YELLOW).bold())
        } else {
            (Style::fg(palette::CYAN).dim(), Style::fg(palette::MUTED))
        };
        fb.draw_box(x, y, CARD_W, CARD_H, border);
        let label = char::from(b'a' + i as u8);
        fb.put_char(x + 1, y, label, Style::fg(palette::MUTED));
        let face_char = if card.face_up { card.symbol } else { '?' };
        fb.put_centered(x, CARD_W, y + 1, &face_char.to_string(), face);
    }

    let status = format!("Moves {}   Pairs {}/{}", view.moves, view.pairs_found, view.cards.len() / 2);
    status_line(fb, area, &status, Style::fg(palette::TEXT));
}

pub fn draw_chess(fb: &mut FrameBuffer, area: Rect, view: &ChessView, entry: Option<&str>) {
    const SQ_W: u16 = 3;
    let board_w = SQ_W * 8 + 2;
    let ox = area.x + area.w.saturating_sub(board_w) / 2;
    let oy = area.y + area.h.saturating_sub(8 + 4) / 2;

    let light = palette::PANEL;
    let dark = crate::fb::Rgb::new(40, 40, 64);
    let highlight = crate::fb::Rgb::new(70, 60, 20);
    let last = view.last_move.map(|m| [m.from, m.to]);

    for rank in (0..8u16).rev() {
        let y = oy + (7 - rank);
        fb.put_char(ox, y, char::from(b'1' + rank as u8), Style::fg(palette::MUTED));
        for file in 0..8u16 {
            let sq = (rank * 8 + file) as u8;
            let mut bg = if (rank + file) % 2 == 0 { dark } else { light };
            if last.is_some_and(|m| m.contains(&sq)) {
                bg = highlight;
            }
            let x = ox + 2 + file * SQ_W;
            let (ch, fg) = match view.squares[sq as usize] {
                Some(p) if p.color == Side::White => (p.symbol(), palette::CYAN),
                Some(p) => (p.symbol(), palette::MAGENTA),
                None => (' ', palette::TEXT),
            };
            fb.fill_rect(x, y, SQ_W, 1, ' ', Style::fg(fg).on(bg));
            fb.put_char(x + 1, y, ch, Style::fg(fg).on(bg).bold());
        }
    }
    for file in 0..8u16 {
        let x = ox + 2 + file * SQ_W + 1;
        fb.put_char(x, oy + 8, char::from(b'a' + file as u8), Style::fg(palette::MUTED));
    }

    let mut y = oy + 10;
    if let Some(m) = view.last_move {
        let text = format!("Last move {}{}   Ply {}", square_name(m.from), square_name(m.to), view.plies);
        fb.put_centered(area.x, area.w, y, &text, Style::fg(palette::MUTED));
    }
    y += 1;
    let (status, style) = if view.thinking {
        ("Black is thinking...".to_string(), Style::fg(palette::TEXT))
    } else if view.in_check {
        ("CHECK! Your move".to_string(), Style::fg(palette::RED).bold())
    } else {
        ("Your move".to_string(), Style::fg(palette::TEXT))
    };
    fb.put_centered(area.x, area.w, y, &status, style);
    if let Some(text) = entry {
        fb.put_centered(area.x, area.w, y + 1, &format!("> {text}_"), Style::fg(palette::YELLOW));
    }
}
