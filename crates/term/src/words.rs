//! Painters for the word games: hangman, trivia, code-breaker, typing.

use crate::core::games::codebreaker::{CodeBreakerView, Feedback};
use crate::core::games::hangman::HangmanView;
use crate::core::games::trivia::TriviaView;
use crate::core::games::typing::TypingView;
use crate::fb::{palette, FrameBuffer, Style};
use crate::view::Rect;

/// Gallows and figure; one body part per mistake
const GALLOWS: [&str; 7] = [
    "  ┌───┐  ",
    "  │   │  ",
    "  │      ",
    "  │      ",
    "  │      ",
    "  │      ",
    "──┴──────",
];

/// `(row, column, glyph)` of each body part in reveal order
const BODY: [(usize, usize, char); 6] = [
    (2, 6, 'O'),
    (3, 6, '│'),
    (3, 5, '/'),
    (3, 7, '\\'),
    (4, 5, '/'),
    (4, 7, '\\'),
];

/// Gallows rows with the first `mistakes` body parts drawn in
pub fn hangman_figure(mistakes: u32) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = GALLOWS.iter().map(|r| r.chars().collect()).collect();
    for &(row, col, ch) in BODY.iter().take(mistakes as usize) {
        rows[row][col] = ch;
    }
    rows.into_iter().map(|r| r.into_iter().collect()).collect()
}

pub fn draw_hangman(fb: &mut FrameBuffer, area: Rect, view: &HangmanView) {
    let fig_w = GALLOWS[0].chars().count() as u16;
    let ox = area.x + area.w.saturating_sub(fig_w) / 2;
    let mut y = area.y + 1;
    let danger = view.mistakes + 2 >= view.max_mistakes;
    let figure = Style::fg(if danger { palette::RED } else { palette::TEXT });
    for row in hangman_figure(view.mistakes) {
        fb.put_str(ox, y, &row, figure);
        y += 1;
    }

    y += 1;
    let pattern: String = view
        .pattern
        .iter()
        .map(|slot| slot.unwrap_or('_'))
        .flat_map(|c| [c, ' '])
        .collect();
    fb.put_centered(area.x, area.w, y, pattern.trim_end(), Style::fg(palette::CYAN).bold());
    y += 2;

    let guessed: String = view.guessed.iter().collect();
    let line = format!("Guessed: {guessed}");
    fb.put_centered(area.x, area.w, y, &line, Style::fg(palette::MUTED));
    y += 1;
    let mistakes = format!("Mistakes {}/{}", view.mistakes, view.max_mistakes);
    fb.put_centered(area.x, area.w, y, &mistakes, figure);

    if let Some(word) = view.word {
        fb.put_centered(area.x, area.w, y + 2, &format!("The word was {word}"), Style::fg(palette::YELLOW));
    }
}

/// Wrap `text` at word boundaries to `width` columns
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn draw_trivia(fb: &mut FrameBuffer, area: Rect, view: &TriviaView) {
    let x = area.x + 2;
    let width = area.w.saturating_sub(4) as usize;
    let mut y = area.y + 1;

    let header = format!("Question {}/{}   Correct {}", view.number, view.total, view.correct_count);
    fb.put_str(x, y, &header, Style::fg(palette::MUTED));
    y += 2;
    for line in wrap(view.prompt, width) {
        fb.put_str(x, y, &line, Style::fg(palette::TEXT).bold());
        y += 1;
    }
    y += 1;

    for (i, option) in view.options.iter().enumerate() {
        let i = i as u8;
        let style = match (view.selected, view.correct) {
            (Some(_), Some(answer)) if answer == i => Style::fg(palette::GREEN).bold(),
            (Some(chosen), _) if chosen == i => Style::fg(palette::RED).bold(),
            (Some(_), _) => Style::fg(palette::MUTED).dim(),
            (None, _) => Style::fg(palette::TEXT),
        };
        let label = format!("{}) {option}", i + 1);
        fb.put_str(x + 2, y, &label, style);
        y += 2;
    }

    if view.selected.is_some() {
        let (text, style) = if view.selected == view.correct {
            ("Correct!", Style::fg(palette::GREEN).bold())
        } else {
            ("Wrong answer", Style::fg(palette::RED).bold())
        };
        fb.put_str(x, y, text, style);
    }
}

pub fn draw_codebreaker(fb: &mut FrameBuffer, area: Rect, view: &CodeBreakerView) {
    let x = area.x + 2;
    let width = area.w.saturating_sub(4) as usize;
    let mut y = area.y + 1;

    let header = format!("Level {}/{}", view.level, view.total);
    fb.put_str(x, y, &header, Style::fg(palette::MUTED));
    y += 2;
    for line in wrap(view.prompt, width) {
        fb.put_str(x, y, &line, Style::fg(palette::GREEN).bold());
        y += 1;
    }
    y += 1;

    match view.hint {
        Some(hint) => {
            fb.put_str(x, y, &format!("Hint: {hint}"), Style::fg(palette::YELLOW));
        }
        None => {
            fb.put_str(x, y, "Tab for a hint (-10 s)", Style::fg(palette::MUTED).dim());
        }
    }
    y += 2;

    let prompt = format!("> {}_", view.input);
    fb.put_str(x, y, &prompt, Style::fg(palette::CYAN).bold());
    y += 2;

    match view.feedback {
        Feedback::Granted => {
            fb.put_str(x, y, "ACCESS GRANTED", Style::fg(palette::GREEN).bold());
        }
        Feedback::Denied => {
            fb.put_str(x, y, "ACCESS DENIED  -5 s", Style::fg(palette::RED).bold());
        }
        Feedback::None => {}
    }
}

pub fn draw_typing(fb: &mut FrameBuffer, area: Rect, view: &TypingView) {
    let mut y = area.y + area.h / 3;

    let word_w = view.current.chars().count() as u16;
    let wx = area.x + area.w.saturating_sub(word_w) / 2;
    for (i, ch) in view.current.chars().enumerate() {
        let style = if i < view.matched {
            Style::fg(palette::GREEN).bold()
        } else {
            Style::fg(palette::TEXT).bold()
        };
        fb.put_char(wx + i as u16, y, ch, style);
    }
    y += 1;
    fb.put_centered(area.x, area.w, y, &format!("next: {}", view.next), Style::fg(palette::MUTED));
    y += 2;

    let wrong = view.input.chars().count() > view.matched;
    let style = if wrong { Style::fg(palette::RED) } else { Style::fg(palette::CYAN) };
    fb.put_centered(area.x, area.w, y, &format!("> {}_", view.input), style.bold());
    y += 2;
    fb.put_centered(
        area.x,
        area.w,
        y,
        &format!("Words {}", view.words_typed),
        Style::fg(palette::MUTED),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::games::{CodeBreaker, Hangman, Trivia};
    use crate::core::types::Action;
    use crate::core::{GameModule, View};

    #[test]
    fn figure_grows_with_mistakes() {
        let none = hangman_figure(0).concat();
        let all = hangman_figure(6).concat();
        assert!(!none.contains('O'));
        assert!(all.contains('O') && all.contains('/') && all.contains('\\'));
        let parts = |n| {
            let fig = hangman_figure(n).concat();
            BODY.iter().filter(|(_, _, c)| fig.contains(*c)).count()
        };
        assert!(parts(1) <= parts(3));
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("what is the capital of france", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "what is the capital of france");
    }

    #[test]
    fn hangman_pattern_is_spaced() {
        let mut h = Hangman::with_word(1, "CACHE");
        h.start();
        h.handle_action(Action::Guess('C'));
        let View::Hangman(view) = h.snapshot().view else {
            panic!("expected hangman view");
        };
        let mut fb = FrameBuffer::new(60, 24);
        draw_hangman(&mut fb, Rect::new(0, 0, 60, 24), &view);
        assert!(fb.contains_text("C _ C _ _"));
    }

    #[test]
    fn trivia_marks_the_answer() {
        let mut t = Trivia::new(0);
        t.start();
        t.handle_action(Action::Choose(0));
        let View::Trivia(view) = t.snapshot().view else {
            panic!("expected trivia view");
        };
        let mut fb = FrameBuffer::new(70, 24);
        draw_trivia(&mut fb, Rect::new(0, 0, 70, 24), &view);
        assert!(fb.contains_text("Question 1/10"));
        assert!(fb.contains_text("Correct!") || fb.contains_text("Wrong answer"));
    }

    #[test]
    fn codebreaker_echoes_input() {
        let mut c = CodeBreaker::new(0);
        c.start();
        c.handle_action(Action::Type('4'));
        let View::CodeBreaker(view) = c.snapshot().view else {
            panic!("expected code-breaker view");
        };
        let mut fb = FrameBuffer::new(70, 24);
        draw_codebreaker(&mut fb, Rect::new(0, 0, 70, 24), &view);
        assert!(fb.contains_text("> 4_"));
        assert!(fb.contains_text("Level 1/10"));
    }
}
