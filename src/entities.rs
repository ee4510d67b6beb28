/// All game entity types — pure data, no logic.

use crate::audio::OneShot;
use crate::geom::{HitBox, Vector};

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    /// Initial state: everything drawn, nothing moves until the start input.
    AwaitingStart,
    Playing,
    GameOver,
}

// ── Sprite geometry tables ────────────────────────────────────────────────────
//
// Hitboxes are tighter than the full sprite bounding box: they trace the
// visual silhouette in unscaled sprite pixels, then get scaled and anchored
// at the entity position.  Keeping the insets here as data means the
// collision geometry never hides inside positioning arithmetic.

/// A rectangle in unscaled sprite-pixel coordinates.
#[derive(Clone, Copy, Debug)]
pub struct SpriteRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl SpriteRect {
    /// The hitbox this rectangle produces for a sprite drawn at `origin`
    /// with the given scale factor.
    pub fn scaled_at(&self, origin: Vector, scale: f64) -> HitBox {
        HitBox::new(
            origin.x + self.x0 * scale,
            origin.y + self.y0 * scale,
            (self.x1 - self.x0) * scale,
            (self.y1 - self.y0) * scale,
        )
    }
}

/// Silhouette of one pipe spire: a wide head cap plus a narrower body shaft.
#[derive(Clone, Copy, Debug)]
pub struct SpireGeometry {
    pub head: SpriteRect,
    pub body: SpriteRect,
}

pub const PIPE_SCALE: f64 = 0.5;
pub const PIPE_SPRITE_W: f64 = 215.0;
pub const PIPE_SPRITE_H: f64 = 852.0;

/// Upper spire hangs from the top of the screen; its head cap is at the bottom.
pub const UPPER_SPIRE: SpireGeometry = SpireGeometry {
    head: SpriteRect { x0: 0.0, y0: 775.0, x1: 215.0, y1: 852.0 },
    body: SpriteRect { x0: 31.0, y0: 0.0, x1: 185.0, y1: 775.0 },
};

/// Lower spire rises from below; its head cap is at the top.
pub const LOWER_SPIRE: SpireGeometry = SpireGeometry {
    head: SpriteRect { x0: 0.0, y0: 0.0, x1: 215.0, y1: 78.0 },
    body: SpriteRect { x0: 32.0, y0: 78.0, x1: 185.0, y1: 852.0 },
};

pub const BIRD_SCALE: f64 = 0.1;

/// The bird silhouette inside its 861×865 sprite — 67×49 px once scaled.
pub const BIRD_BODY: SpriteRect = SpriteRect {
    x0: 191.0,
    y0: 375.0,
    x1: 861.0,
    y1: 865.0,
};

// ── Entities ──────────────────────────────────────────────────────────────────

/// The player-controlled bird.  The hitbox tracks `position` with the fixed
/// offset from `BIRD_BODY`, so both move together.
#[derive(Clone, Debug)]
pub struct Bird {
    pub position: Vector,
    pub hitbox: HitBox,
}

/// One spire (upper or lower) of a pipe obstacle.
#[derive(Clone, Debug)]
pub struct PipeHalf {
    pub position: Vector,
    pub head_box: HitBox,
    pub body_box: HitBox,
}

impl PipeHalf {
    pub fn translated(&self, dx: f64, dy: f64) -> PipeHalf {
        PipeHalf {
            position: Vector::new(self.position.x + dx, self.position.y + dy),
            head_box: self.head_box.translated(dx, dy),
            body_box: self.body_box.translated(dx, dy),
        }
    }
}

/// A paired obstacle: upper spire, lower spire, and the passable gap between
/// them.  Invariant: `gap_box` sits exactly between the upper head's bottom
/// edge and the lower head's top edge.
#[derive(Clone, Debug)]
pub struct Pipe {
    pub upper: PipeHalf,
    pub lower: PipeHalf,
    pub gap_box: HitBox,
    /// Bird is currently (or was last seen) inside the gap — pending score.
    pub passed: bool,
    /// Fully behind the bird; skipped when picking the collision leader.
    pub ignored: bool,
    /// Fully past the left edge; evicted on the next frame.
    pub offscreen: bool,
}

impl Pipe {
    /// The whole obstacle shifted by (dx, dy): both spires and the gap.
    pub fn translated(&self, dx: f64, dy: f64) -> Pipe {
        Pipe {
            upper: self.upper.translated(dx, dy),
            lower: self.lower.translated(dx, dy),
            gap_box: self.gap_box.translated(dx, dy),
            ..*self
        }
    }
}

/// The ground strip.  Visually it scrolls, but the collision plane is static.
#[derive(Clone, Debug)]
pub struct Floor {
    pub position: Vector,
    pub hitbox: HitBox,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub bird: Bird,
    /// Active pipes in spawn order — index 0 is the oldest.
    pub pipes: Vec<Pipe>,
    pub floor: Floor,
    pub score: u32,
    /// The best score seen so far (updated live during play).
    pub high_score: u32,
    pub status: GameStatus,
    /// One-shot trigger for the collision sound; rearmed on restart.
    pub hit_sound: OneShot,
    pub frame: u64,
    /// Simulation-space dimensions in pixels.
    pub width: f64,
    pub height: f64,
}
