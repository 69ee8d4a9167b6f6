//! Hub screen: the game catalog with personal bests and recent scores.

use crate::core::RecentScore;
use crate::fb::{palette, FrameBuffer, Style};
use crate::types::GameId;
use crate::view::Viewport;

#[derive(Debug, Clone, Copy)]
pub struct HubEntry {
    pub game: GameId,
    pub best: u32,
}

#[derive(Debug, Clone)]
pub struct HubView<'a> {
    pub entries: Vec<HubEntry>,
    pub selected: usize,
    pub player: &'a str,
    pub recent: Vec<&'a RecentScore>,
    /// One-line notice, e.g. a storage warning
    pub notice: Option<&'a str>,
}

pub fn render_hub_into(view: &HubView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Style::default());
    let w = viewport.width;

    fb.put_centered(0, w, 1, "F U N Z O N E   A R C A D E", Style::fg(palette::MAGENTA).bold());
    fb.put_centered(0, w, 2, &format!("Welcome, {}", view.player), Style::fg(palette::MUTED));

    let list_x = 2;
    let mut y = 4;
    for (i, entry) in view.entries.iter().enumerate() {
        if y + 1 >= viewport.height {
            break;
        }
        let info = entry.game.info();
        let selected = i == view.selected;
        let marker = if selected { '▶' } else { ' ' };
        let name_style = if selected {
            Style::fg(palette::CYAN).bold()
        } else {
            Style::fg(palette::TEXT)
        };
        fb.put_char(list_x, y, marker, Style::fg(palette::CYAN));
        let line = format!("{} {:<14}", i + 1, info.name);
        let mut x = fb.put_str(list_x + 2, y, &line, name_style);
        x = fb.put_str(x + 1, y, &format!("{:<10}", info.category), Style::fg(palette::MUTED));
        fb.put_str(x + 1, y, &format!("BEST {:>6}", entry.best), Style::fg(palette::YELLOW));
        y += 1;
        if selected {
            fb.put_str(list_x + 4, y, info.description, Style::fg(palette::MUTED).dim());
            y += 1;
        }
    }

    y += 1;
    if !view.recent.is_empty() && y + 2 < viewport.height {
        fb.put_str(list_x, y, "RECENT", Style::fg(palette::CYAN).bold());
        y += 1;
        for score in view.recent.iter().take(5) {
            if y + 1 >= viewport.height {
                break;
            }
            let line = format!("{:<14} {:<10} {:>6}", score.game.info().name, score.user, score.score);
            fb.put_str(list_x + 2, y, &line, Style::fg(palette::TEXT));
            y += 1;
        }
    }

    if let Some(notice) = view.notice {
        fb.put_str(list_x, viewport.height.saturating_sub(2), notice, Style::fg(palette::RED));
    }
    fb.put_str(
        0,
        viewport.height.saturating_sub(1),
        " ↑/↓ select · Enter or 1-9 play · q quit",
        Style::fg(palette::MUTED),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<HubEntry> {
        GameId::ALL.iter().map(|&game| HubEntry { game, best: 0 }).collect()
    }

    #[test]
    fn lists_every_game_with_its_best() {
        let mut list = entries();
        list[1].best = 120;
        let view = HubView {
            entries: list,
            selected: 0,
            player: "You",
            recent: Vec::new(),
            notice: None,
        };
        let mut fb = FrameBuffer::new(80, 30);
        render_hub_into(&view, Viewport::new(80, 30), &mut fb);
        for game in GameId::ALL {
            assert!(fb.contains_text(game.info().name), "{} missing", game.info().name);
        }
        assert!(fb.contains_text("BEST    120"));
        assert!(fb.contains_text("Welcome, You"));
    }

    #[test]
    fn notice_is_shown() {
        let view = HubView {
            entries: entries(),
            selected: 2,
            player: "You",
            recent: Vec::new(),
            notice: Some("high scores are not being saved"),
        };
        let mut fb = FrameBuffer::new(80, 30);
        render_hub_into(&view, Viewport::new(80, 30), &mut fb);
        assert!(fb.contains_text("not being saved"));
    }
}
