//! GameScreen: paints a [`GameSnapshot`] plus the HUD into a framebuffer.
//!
//! Pure (no I/O). Layout:
//!
//! ```text
//!  NEON SNAKE            SCORE 40   BEST 120   TIME 12
//! ┌──────────────────────────────┐  TOP 5
//! │                              │  1 You      120
//! │          play area           │  ...
//! │                              │  CONTROLS
//! └──────────────────────────────┘  ...
//! ```

use crate::core::{GameSnapshot, LeaderboardEntry, View};
use crate::fb::{palette, FrameBuffer, Style};
use crate::types::{GameId, SessionState};
use crate::{arcade, boards, words};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// The area inside a one-cell border
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.x + 1,
            self.y + 1,
            self.w.saturating_sub(2),
            self.h.saturating_sub(2),
        )
    }

    pub fn bottom(&self) -> u16 {
        self.y + self.h
    }
}

/// Everything drawn around the game that the module does not own
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub player: &'a str,
    pub best: u32,
    pub leaders: &'a [LeaderboardEntry],
    /// Reason shown when the session crashed
    pub crash: Option<&'a str>,
    /// Partially typed chess move
    pub pending_text: Option<&'a str>,
    pub new_best: bool,
}

const PANEL_W: u16 = 26;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameScreen;

impl GameScreen {
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default());
        if viewport.width < 30 || viewport.height < 12 {
            fb.put_str(0, 0, "Terminal too small", Style::fg(palette::RED));
            return;
        }

        self.draw_title(fb, snap, hud, viewport);

        let panel = viewport.width >= 60;
        let play_w = if panel { viewport.width - PANEL_W - 1 } else { viewport.width };
        let play = Rect::new(0, 1, play_w, viewport.height - 2);
        fb.draw_box(play.x, play.y, play.w, play.h, Style::fg(palette::CYAN).dim());

        let area = play.inner();
        match &snap.view {
            View::Runner(v) => arcade::draw_runner(fb, area, v),
            View::Snake(v) => arcade::draw_snake(fb, area, v),
            View::TicTacToe(v) => boards::draw_tictactoe(fb, area, v),
            View::Memory(v) => boards::draw_memory(fb, area, v),
            View::Chess(v) => boards::draw_chess(fb, area, v, hud.pending_text),
            View::Hangman(v) => words::draw_hangman(fb, area, v),
            View::Trivia(v) => words::draw_trivia(fb, area, v),
            View::CodeBreaker(v) => words::draw_codebreaker(fb, area, v),
            View::Typing(v) => words::draw_typing(fb, area, v),
        }

        if panel {
            self.draw_panel(fb, snap.game, hud, Rect::new(play_w + 1, 1, PANEL_W, viewport.height - 2));
        }
        self.draw_overlay(fb, snap, hud, play);
        fb.put_str(0, viewport.height - 1, footer(snap.game), Style::fg(palette::MUTED));
    }

    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) {
        let title = snap.game.info().name.to_uppercase();
        let mut x = fb.put_str(1, 0, &title, Style::fg(palette::MAGENTA).bold());
        x += 3;

        let label = Style::fg(palette::MUTED);
        let value = Style::fg(palette::TEXT).bold();
        x = fb.put_str(x, 0, "SCORE ", label);
        x = fb.put_u32(x, 0, snap.score, value);
        x += 3;
        x = fb.put_str(x, 0, "BEST ", label);
        x = fb.put_u32(x, 0, hud.best.max(snap.score), value);
        if let Some(secs) = snap.seconds_left() {
            x += 3;
            let style = if secs <= 5 { Style::fg(palette::RED).bold() } else { value };
            x = fb.put_str(x, 0, "TIME ", label);
            fb.put_u32(x, 0, secs, style);
        }
        if !hud.player.is_empty() {
            let len = hud.player.chars().count() as u16;
            fb.put_str(viewport.width.saturating_sub(len + 1), 0, hud.player, label);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, game: GameId, hud: &Hud<'_>, area: Rect) {
        let heading = Style::fg(palette::CYAN).bold();
        let text = Style::fg(palette::TEXT);
        let muted = Style::fg(palette::MUTED);

        let mut y = area.y;
        fb.put_str(area.x, y, "TOP 5", heading);
        y += 1;
        if hud.leaders.is_empty() {
            fb.put_str(area.x, y, "no scores yet", muted);
            y += 1;
        }
        for (i, entry) in hud.leaders.iter().enumerate() {
            let style = if entry.user == hud.player { text.bold() } else { text };
            let name: String = entry.user.chars().take(10).collect();
            fb.put_str(area.x, y, &format!("{} {:<10} {:>6}", i + 1, name, entry.score), style);
            y += 1;
        }

        y += 1;
        fb.put_str(area.x, y, game.info().category.to_uppercase().as_str(), muted);
        fb.put_str(area.x + 12, y, game.info().difficulty, muted);
        y += 2;
        fb.put_str(area.x, y, "CONTROLS", heading);
        y += 1;
        for line in controls(game) {
            if y >= area.bottom() {
                break;
            }
            fb.put_str(area.x, y, line, text);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &Hud<'_>, play: Rect) {
        let (headline, color) = match (hud.crash, snap.state) {
            (Some(_), _) => ("GAME CRASHED", palette::RED),
            (None, SessionState::Won) => ("YOU WIN!", palette::GREEN),
            (None, SessionState::Lost) => ("GAME OVER", palette::RED),
            (None, SessionState::Draw) => ("DRAW", palette::YELLOW),
            _ => return,
        };

        let box_w = 34.min(play.w);
        let box_h = 7.min(play.h);
        let x = play.x + (play.w - box_w) / 2;
        let y = play.y + (play.h - box_h) / 2;
        let bg = Style::default().on(palette::PANEL);
        fb.fill_rect(x, y, box_w, box_h, ' ', bg);
        fb.draw_box(x, y, box_w, box_h, Style::fg(color).on(palette::PANEL));

        fb.put_centered(x, box_w, y + 1, headline, Style::fg(color).on(palette::PANEL).bold());
        let detail = match hud.crash {
            Some(reason) => reason.chars().take(box_w.saturating_sub(4) as usize).collect(),
            None => format!("Final score {}", snap.score),
        };
        fb.put_centered(x, box_w, y + 3, &detail, bg);
        if hud.new_best && hud.crash.is_none() {
            fb.put_centered(x, box_w, y + 4, "NEW HIGH SCORE", Style::fg(palette::YELLOW).on(palette::PANEL).bold());
        }
        fb.put_centered(x, box_w, y + 5, "Enter restart · Esc hub", Style::fg(palette::MUTED).on(palette::PANEL));
    }
}

fn footer(game: GameId) -> &'static str {
    if funzone_input::map::captures_text(game) {
        " Esc hub · Ctrl+R restart · Ctrl+C quit"
    } else {
        " Esc/q hub · r restart · Ctrl+C quit"
    }
}

/// Help lines for the side panel
pub fn controls(game: GameId) -> &'static [&'static str] {
    match game {
        GameId::GeometryDash => &["Space/Up  jump", "avoid spikes & blocks"],
        GameId::Snake => &["arrows/WASD  steer", "eat ● to grow"],
        GameId::TicTacToe => &["1-9  place mark", "you are X"],
        GameId::Memory => &["a-p  flip card", "find all 8 pairs"],
        GameId::Hangman => &["A-Z  guess letter", "6 mistakes allowed"],
        GameId::Trivia => &["1-4 / a-d  answer", "15 s per question"],
        GameId::CodeBreaker => &["type answer, Enter", "Tab  hint (-10 s)", "wrong answer -5 s"],
        GameId::Typing => &["type the word", "Space/Enter  submit"],
        GameId::ChessLite => &["type e2e4, Enter", "Backspace  erase", "you play White"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::games::{Hangman, Snake};
    use crate::core::types::Action;
    use crate::core::GameModule;

    fn hud<'a>(leaders: &'a [LeaderboardEntry]) -> Hud<'a> {
        Hud {
            player: "You",
            best: 120,
            leaders,
            ..Hud::default()
        }
    }

    #[test]
    fn title_shows_score_and_best() {
        let mut s = Snake::new(1);
        s.start();
        let fb = GameScreen.render(&s.snapshot(), &hud(&[]), Viewport::new(80, 30));
        let top = fb.row_text(0);
        assert!(top.contains("NEON SNAKE"));
        assert!(top.contains("SCORE 0"));
        assert!(top.contains("BEST 120"));
        assert!(fb.contains_text("no scores yet"));
    }

    #[test]
    fn leaderboard_is_listed() {
        let leaders = vec![LeaderboardEntry {
            user: "Ada".into(),
            score: 90,
            date: "2024-05-01".into(),
        }];
        let mut s = Snake::new(1);
        s.start();
        let fb = GameScreen.render(&s.snapshot(), &hud(&leaders), Viewport::new(80, 30));
        assert!(fb.contains_text("1 Ada"));
    }

    #[test]
    fn finished_game_gets_an_overlay() {
        let mut h = Hangman::with_word(1, "CAT");
        h.start();
        for c in ['C', 'A', 'T'] {
            h.handle_action(Action::Guess(c));
        }
        let fb = GameScreen.render(&h.snapshot(), &hud(&[]), Viewport::new(80, 30));
        assert!(fb.contains_text("YOU WIN!"));
    }

    #[test]
    fn crash_overlay_wins_over_state() {
        let mut s = Snake::new(1);
        s.start();
        let h = Hud {
            crash: Some("game panicked: boom"),
            ..hud(&[])
        };
        let fb = GameScreen.render(&s.snapshot(), &h, Viewport::new(80, 30));
        assert!(fb.contains_text("GAME CRASHED"));
        assert!(fb.contains_text("boom"));
    }

    #[test]
    fn tiny_terminal_is_reported() {
        let mut s = Snake::new(1);
        s.start();
        let fb = GameScreen.render(&s.snapshot(), &hud(&[]), Viewport::new(20, 5));
        assert!(fb.contains_text("too small"));
    }
}
