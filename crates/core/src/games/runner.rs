//! Neon Dash - side-scrolling runner
//!
//! The square sits at a fixed `x` and jumps over obstacles scrolling in from
//! the right. Each tick runs in order:
//!
//! 1. gravity and motion ([`physics::integrate`])
//! 2. a new obstacle every [`SPAWN_EVERY_TICKS`] ticks, spike or block 50/50
//! 3. a speed step every [`SPEED_RAMP_TICKS`] ticks
//! 4. obstacles scroll left; off-screen ones are dropped
//! 5. obstacles whose right edge cleared the player score once
//! 6. forgiving overlap with any obstacle ends the run
//!
//! The particle trail is cosmetic and never affects the simulation.

use crate::module::{GameFault, GameModule};
use crate::physics::{self, Aabb, Actor, PhysicsConfig, SpeedRamp};
use crate::rng::GameRng;
use crate::round::Outcome;
use crate::scoring::OBSTACLE_PASS_POINTS;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, View};
use crate::types::{Action, Delay, GameId, SessionState, FRAME_MS};

pub const ARENA_WIDTH: f32 = 700.0;
pub const ARENA_HEIGHT: f32 = 350.0;
pub const GROUND_Y: f32 = ARENA_HEIGHT - 50.0;
pub const PLAYER_X: f32 = 50.0;
pub const PLAYER_SIZE: f32 = 30.0;
pub const INITIAL_SPEED: f32 = 5.0;
pub const SPAWN_EVERY_TICKS: u64 = 90;
pub const SPEED_RAMP_TICKS: u64 = 500;
pub const SPEED_STEP: f32 = 0.5;
pub const TRAIL_EVERY_TICKS: u64 = 3;
pub const TRAIL_LIFE: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// 30×30 triangle
    Spike,
    /// 40×40 square
    Block,
}

impl ObstacleKind {
    pub fn side(&self) -> f32 {
        match self {
            ObstacleKind::Spike => 30.0,
            ObstacleKind::Block => 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub bounds: Aabb,
    pub passed: bool,
}

impl Obstacle {
    fn spawn(kind: ObstacleKind) -> Self {
        let side = kind.side();
        Self {
            kind,
            bounds: Aabb::new(ARENA_WIDTH, GROUND_Y - side, side, side),
            passed: false,
        }
    }
}

/// Fading particle left behind the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub x: f32,
    pub y: f32,
    pub life: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerView {
    pub player: Aabb,
    pub rotation: f32,
    pub grounded: bool,
    pub obstacles: Vec<Obstacle>,
    pub trail: Vec<TrailDot>,
    pub speed: f32,
    pub ground_y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct Runner {
    session: Session,
    cfg: PhysicsConfig,
    ramp: SpeedRamp,
    actor: Actor,
    obstacles: Vec<Obstacle>,
    trail: Vec<TrailDot>,
    speed: f32,
    rng: GameRng,
}

impl Runner {
    pub fn new(seed: u64) -> Self {
        let cfg = PhysicsConfig {
            ground_y: GROUND_Y,
            ..PhysicsConfig::default()
        };
        Self {
            session: Session::new(GameId::GeometryDash),
            actor: Actor::on_ground(PLAYER_X, PLAYER_SIZE, &cfg),
            cfg,
            ramp: SpeedRamp {
                every_ticks: SPEED_RAMP_TICKS,
                step: SPEED_STEP,
            },
            obstacles: Vec::new(),
            trail: Vec::new(),
            speed: INITIAL_SPEED,
            rng: GameRng::new(seed),
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn frame(&self) -> u64 {
        self.session.frame()
    }

    /// Place an obstacle at the right edge (tests and demos)
    pub fn inject_obstacle(&mut self, kind: ObstacleKind, x: f32) {
        let mut obstacle = Obstacle::spawn(kind);
        obstacle.bounds.min.x = x;
        self.obstacles.push(obstacle);
    }

    fn step_trail(&mut self, frame: u64) {
        for dot in &mut self.trail {
            dot.x -= self.speed;
            dot.life = dot.life.saturating_sub(1);
        }
        self.trail.retain(|d| d.life > 0);

        if frame % TRAIL_EVERY_TICKS == 0 {
            self.trail.push(TrailDot {
                x: self.actor.pos.x,
                y: self.actor.pos.y + PLAYER_SIZE / 2.0,
                life: TRAIL_LIFE,
            });
        }
    }
}

impl GameModule for Runner {
    fn game_id(&self) -> GameId {
        GameId::GeometryDash
    }

    fn start(&mut self) {
        self.session.start();
        self.actor = Actor::on_ground(PLAYER_X, PLAYER_SIZE, &self.cfg);
        self.obstacles.clear();
        self.trail.clear();
        self.speed = INITIAL_SPEED;
    }

    fn tick(&mut self, _dt_ms: u32) -> Result<Option<Delay>, GameFault> {
        if !self.session.is_active() {
            return Ok(None);
        }

        physics::integrate(&mut self.actor, &self.cfg);
        let frame = self.session.advance_frame();
        if !self.actor.is_finite() {
            return Err(GameFault::NonFinite { frame });
        }

        if frame % SPAWN_EVERY_TICKS == 0 {
            let kind = if self.rng.chance(0.5) {
                ObstacleKind::Spike
            } else {
                ObstacleKind::Block
            };
            self.obstacles.push(Obstacle::spawn(kind));
        }
        self.speed += self.ramp.bonus_at(frame);

        let player = self.actor.bounds();
        let mut passed = 0;
        let mut hit = false;
        for obstacle in &mut self.obstacles {
            obstacle.bounds.min.x -= self.speed;
            if !obstacle.passed && obstacle.bounds.max().x < player.min.x {
                obstacle.passed = true;
                passed += 1;
            }
            if physics::overlaps_forgiving(&player, &obstacle.bounds, self.cfg.forgiveness) {
                hit = true;
            }
        }
        self.obstacles.retain(|o| o.bounds.max().x >= 0.0);
        self.session.award(passed * OBSTACLE_PASS_POINTS);

        if hit {
            log::debug!("runner crashed at frame {frame}");
            self.session.resolve(Outcome::Lost);
            return Ok(None);
        }

        self.step_trail(frame);
        Ok(None)
    }

    fn handle_action(&mut self, action: Action) -> Option<Delay> {
        if self.session.is_active() && action == Action::Jump {
            physics::jump(&mut self.actor, &self.cfg);
        }
        None
    }

    fn admits(&self, action: &Action) -> bool {
        *action == Action::Jump
    }

    fn state(&self) -> SessionState {
        self.session.state()
    }

    fn current_score(&self) -> u32 {
        self.session.score()
    }

    fn tick_interval_ms(&self) -> Option<u32> {
        Some(FRAME_MS)
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game: GameId::GeometryDash,
            state: self.session.state(),
            score: self.session.score(),
            frame: self.session.frame(),
            view: View::Runner(RunnerView {
                player: self.actor.bounds(),
                rotation: self.actor.rotation,
                grounded: self.actor.grounded,
                obstacles: self.obstacles.clone(),
                trail: self.trail.clone(),
                speed: self.speed,
                ground_y: GROUND_Y,
                width: ARENA_WIDTH,
                height: ARENA_HEIGHT,
            }),
        }
    }
}
