//! Physics kernel - gravity, jumps, and forgiving collision
//!
//! Coordinates are arena pixels with `y` growing downward; the ground is a
//! horizontal line at [`PhysicsConfig::ground_y`]. The actor's `pos` is its
//! top-left corner, so it rests on the ground when `pos.y + size == ground_y`.

use glam::Vec2;

/// Tunables for one physics world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f32,
    /// Ground line
    pub ground_y: f32,
    /// Degrees of spin per airborne tick
    pub spin_per_tick: f32,
    /// Pixels trimmed from each side of both boxes before overlap tests
    pub forgiveness: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_velocity: -10.0,
            ground_y: 300.0,
            spin_per_tick: 5.0,
            forgiveness: 4.0,
        }
    }
}

/// Axis-aligned box, `min` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Box shrunk by `margin` on every side
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            size: self.size - Vec2::splat(2.0 * margin),
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Overlap test with both boxes trimmed by `margin`
pub fn overlaps_forgiving(a: &Aabb, b: &Aabb, margin: f32) -> bool {
    a.shrink(margin).intersects(&b.shrink(margin))
}

/// The player's square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees, kept in `[0, 360)` once landed
    pub rotation: f32,
    pub grounded: bool,
    pub size: f32,
}

impl Actor {
    /// Actor standing on the ground at horizontal position `x`
    pub fn on_ground(x: f32, size: f32, cfg: &PhysicsConfig) -> Self {
        Self {
            pos: Vec2::new(x, cfg.ground_y - size),
            vel: Vec2::ZERO,
            rotation: 0.0,
            grounded: true,
            size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: self.pos,
            size: Vec2::splat(self.size),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.rotation.is_finite()
    }
}

/// Result of one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Still in the air
    Airborne,
    /// Touched the ground this tick
    Landed,
    /// Already on the ground
    Resting,
}

/// Start a jump if the actor is grounded; airborne jumps are ignored
pub fn jump(actor: &mut Actor, cfg: &PhysicsConfig) -> bool {
    if !actor.grounded {
        return false;
    }
    actor.vel.y = cfg.jump_velocity;
    actor.grounded = false;
    true
}

/// Advance the actor one tick: gravity, motion, ground clamp, spin
pub fn integrate(actor: &mut Actor, cfg: &PhysicsConfig) -> Contact {
    let was_grounded = actor.grounded;

    actor.vel.y += cfg.gravity;
    actor.pos += actor.vel;

    let floor = cfg.ground_y - actor.size;
    if actor.pos.y >= floor {
        actor.pos.y = floor;
        actor.vel.y = 0.0;
        actor.grounded = true;
        actor.rotation = snap_rotation(actor.rotation);
        if was_grounded {
            Contact::Resting
        } else {
            Contact::Landed
        }
    } else {
        actor.grounded = false;
        actor.rotation += cfg.spin_per_tick;
        Contact::Airborne
    }
}

/// Nearest multiple of 90°, normalized to `[0, 360)`
pub fn snap_rotation(degrees: f32) -> f32 {
    ((degrees / 90.0).round() * 90.0).rem_euclid(360.0)
}

/// Step speed increase applied every `every_ticks` ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRamp {
    pub every_ticks: u64,
    pub step: f32,
}

impl SpeedRamp {
    /// Speed bonus due at `tick` (zero except on ramp boundaries)
    pub fn bonus_at(&self, tick: u64) -> f32 {
        if self.every_ticks > 0 && tick > 0 && tick % self.every_ticks == 0 {
            self.step
        } else {
            0.0
        }
    }
}
