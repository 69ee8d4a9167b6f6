//! Painters for the continuous games: Neon Dash and Neon Snake.

use crate::core::games::runner::{ObstacleKind, RunnerView};
use crate::core::games::snake::SnakeView;
use crate::core::physics::Aabb;
use crate::fb::{palette, FrameBuffer, Style};
use crate::view::Rect;

/// Maps runner world units onto a terminal area
struct WorldScale {
    area: Rect,
    sx: f32,
    sy: f32,
}

impl WorldScale {
    fn new(area: Rect, width: f32, height: f32) -> Self {
        Self {
            area,
            sx: area.w as f32 / width,
            sy: area.h as f32 / height,
        }
    }

    fn col(&self, x: f32) -> Option<u16> {
        let c = (x * self.sx).floor();
        (c >= 0.0 && c < self.area.w as f32).then(|| self.area.x + c as u16)
    }

    fn row(&self, y: f32) -> Option<u16> {
        let r = (y * self.sy).floor();
        (r >= 0.0 && r < self.area.h as f32).then(|| self.area.y + r as u16)
    }

    /// Cells covered by `b`, at least one
    fn fill(&self, fb: &mut FrameBuffer, b: &Aabb, ch: char, style: Style) {
        let max = b.max();
        let c0 = (b.min.x * self.sx).floor().max(0.0) as u16;
        let c1 = ((max.x * self.sx).ceil() as u16).max(c0 + 1).min(self.area.w);
        let r0 = (b.min.y * self.sy).floor().max(0.0) as u16;
        let r1 = ((max.y * self.sy).ceil() as u16).max(r0 + 1).min(self.area.h);
        for r in r0..r1 {
            for c in c0..c1 {
                fb.put_char(self.area.x + c, self.area.y + r, ch, style);
            }
        }
    }
}

pub fn draw_runner(fb: &mut FrameBuffer, area: Rect, view: &RunnerView) {
    if area.w == 0 || area.h == 0 {
        return;
    }
    let scale = WorldScale::new(area, view.width, view.height);

    if let Some(ground) = scale.row(view.ground_y) {
        let style = Style::fg(palette::CYAN).dim();
        for x in area.x..area.x + area.w {
            fb.put_char(x, ground, '▔', style);
        }
    }

    for dot in &view.trail {
        if let (Some(c), Some(r)) = (scale.col(dot.x), scale.row(dot.y)) {
            let style = Style::fg(palette::CYAN);
            fb.put_char(c, r, '·', if dot.life < 10 { style.dim() } else { style });
        }
    }

    for obstacle in &view.obstacles {
        match obstacle.kind {
            ObstacleKind::Spike => scale.fill(fb, &obstacle.bounds, '▲', Style::fg(palette::MAGENTA).bold()),
            ObstacleKind::Block => scale.fill(fb, &obstacle.bounds, '█', Style::fg(palette::YELLOW)),
        }
    }

    let glyph = if view.grounded { '■' } else { '◆' };
    scale.fill(fb, &view.player, glyph, Style::fg(palette::CYAN).bold());

    let speed = format!("speed {:.1}", view.speed);
    fb.put_str(area.x + 1, area.y, &speed, Style::fg(palette::MUTED));
}

pub fn draw_snake(fb: &mut FrameBuffer, area: Rect, view: &SnakeView) {
    let cols = view.cols.max(0) as u16;
    let rows = view.rows.max(0) as u16;
    let cell_w: u16 = if area.w >= cols * 2 { 2 } else { 1 };
    let board_w = (cols * cell_w).min(area.w);
    let board_h = rows.min(area.h);
    let ox = area.x + (area.w - board_w) / 2;
    let oy = area.y + (area.h - board_h) / 2;

    let floor = Style::fg(palette::MUTED).dim().on(palette::PANEL);
    fb.fill_rect(ox, oy, board_w, board_h, ' ', floor);

    let mut paint = |cx: i16, cy: i16, ch: char, style: Style| {
        if cx < 0 || cy < 0 {
            return;
        }
        let (x, y) = (cx as u16 * cell_w, cy as u16);
        if x >= board_w || y >= board_h {
            return;
        }
        for dx in 0..cell_w {
            fb.put_char(ox + x + dx, oy + y, ch, style);
        }
    };

    paint(view.food.x, view.food.y, '●', Style::fg(palette::MAGENTA).bold().on(palette::PANEL));
    for (i, cell) in view.body.iter().enumerate() {
        let style = Style::fg(palette::GREEN).on(palette::PANEL);
        if i == 0 {
            paint(cell.x, cell.y, '█', style.bold());
        } else {
            paint(cell.x, cell.y, '▓', style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::games::{Runner, Snake};
    use crate::core::{GameModule, View};

    fn area() -> Rect {
        Rect::new(1, 2, 70, 20)
    }

    #[test]
    fn runner_draws_player_and_ground() {
        let mut r = Runner::new(1);
        r.start();
        let View::Runner(view) = r.snapshot().view else {
            panic!("expected runner view");
        };
        let mut fb = FrameBuffer::new(80, 24);
        draw_runner(&mut fb, area(), &view);
        assert!(fb.contains_text("■"));
        assert!(fb.contains_text("▔▔▔"));
    }

    #[test]
    fn snake_head_and_food_are_visible() {
        let mut s = Snake::new(2);
        s.start();
        let View::Snake(view) = s.snapshot().view else {
            panic!("expected snake view");
        };
        let mut fb = FrameBuffer::new(80, 24);
        draw_snake(&mut fb, area(), &view);
        assert!(fb.contains_text("██"));
        assert!(fb.contains_text("●●"));
    }
}
