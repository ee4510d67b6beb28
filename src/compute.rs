/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameWorld` (and, where needed, an RNG handle) and returns a brand-new
/// `GameWorld`.  Side effects are limited to the injected RNG, so tests
/// drive the whole simulation with a seeded `StdRng`.

use rand::Rng;

use crate::audio::OneShot;
use crate::entities::{
    Bird, Floor, GameStatus, GameWorld, Pipe, PipeHalf, BIRD_BODY, BIRD_SCALE, LOWER_SPIRE,
    PIPE_SCALE, PIPE_SPRITE_H, PIPE_SPRITE_W, UPPER_SPIRE,
};
use crate::geom::{boxes_intersect, HitBox, Vector};

// ── Tuning constants ─────────────────────────────────────────────────────────

pub const WINDOW_WIDTH: f64 = 1024.0;
pub const WINDOW_HEIGHT: f64 = 768.0;

/// Constant fall per frame — simplified model, no acceleration.
pub const FALL_STEP: f64 = 1.0;
/// Instant upward displacement per flap.
pub const FLAP_IMPULSE: f64 = 6.0;
/// Horizontal scroll applied to every pipe per frame.
pub const SCROLL_SPEED: f64 = 2.0;
/// Pipes kept alive at any time; evicting one immediately spawns another.
pub const PIPE_COUNT: usize = 8;
/// Gap height is drawn from [bird height, bird height + GAP_SLACK].
pub const GAP_SLACK: f64 = 50.0;
/// Top edge of the floor collision plane.
pub const FLOOR_TOP: f64 = 704.0;

/// Horizontal spawn window past the previous pipe's trailing edge.
const SPAWN_LEAD_MIN: f64 = 200.0;
const SPAWN_LEAD_MAX: f64 = 320.0;
/// Vertical offset window for the upper spire, so visible length varies.
const SPAWN_RISE_MIN: f64 = -180.0;
const SPAWN_RISE_MAX: f64 = 20.0;

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn init_bird() -> Bird {
    let position = Vector::new(25.0, WINDOW_HEIGHT / 2.0);
    Bird {
        position,
        hitbox: BIRD_BODY.scaled_at(position, BIRD_SCALE),
    }
}

pub fn init_floor() -> Floor {
    let position = Vector::new(0.0, FLOOR_TOP);
    Floor {
        position,
        hitbox: HitBox::new(0.0, FLOOR_TOP, WINDOW_WIDTH, WINDOW_HEIGHT - FLOOR_TOP),
    }
}

/// Spawn one pipe past `min_start_x`.
///
/// The upper spire lands at a randomized horizontal lead and vertical
/// offset; the gap height is drawn from [bird_height, bird_height +
/// GAP_SLACK] so the bird always fits; the lower spire starts exactly at
/// upper-spire bottom + gap, keeping the three regions contiguous.
pub fn spawn_pipe(rng: &mut impl Rng, bird_height: f64, min_start_x: f64) -> Pipe {
    let x = min_start_x + rng.gen_range(SPAWN_LEAD_MIN..=SPAWN_LEAD_MAX);
    let y = rng.gen_range(SPAWN_RISE_MIN..=SPAWN_RISE_MAX);
    let gap = rng.gen_range(bird_height..=bird_height + GAP_SLACK);

    let spire_h = PIPE_SPRITE_H * PIPE_SCALE;

    let upper_pos = Vector::new(x, y);
    let upper = PipeHalf {
        position: upper_pos,
        head_box: UPPER_SPIRE.head.scaled_at(upper_pos, PIPE_SCALE),
        body_box: UPPER_SPIRE.body.scaled_at(upper_pos, PIPE_SCALE),
    };

    let gap_box = HitBox::new(x, y + spire_h, PIPE_SPRITE_W * PIPE_SCALE, gap);

    let lower_pos = Vector::new(x, y + spire_h + gap);
    let lower = PipeHalf {
        position: lower_pos,
        head_box: LOWER_SPIRE.head.scaled_at(lower_pos, PIPE_SCALE),
        body_box: LOWER_SPIRE.body.scaled_at(lower_pos, PIPE_SCALE),
    };

    Pipe {
        upper,
        lower,
        gap_box,
        passed: false,
        ignored: false,
        offscreen: false,
    }
}

/// Build the initial world: bird at screen centre, a full train of pipes
/// starting past the right edge, score 0, waiting for the start input.
pub fn init_world(high_score: u32, rng: &mut impl Rng) -> GameWorld {
    let bird = init_bird();

    let mut pipes = Vec::with_capacity(PIPE_COUNT);
    let mut min_start = WINDOW_WIDTH;
    for _ in 0..PIPE_COUNT {
        let pipe = spawn_pipe(rng, bird.hitbox.h, min_start);
        min_start = pipe.upper.position.x + pipe.upper.head_box.w;
        pipes.push(pipe);
    }

    GameWorld {
        bird,
        pipes,
        floor: init_floor(),
        score: 0,
        high_score,
        status: GameStatus::AwaitingStart,
        hit_sound: OneShot::Armed,
        frame: 0,
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Start input: arms the scrolling/scoring loop.  No-op outside
/// `AwaitingStart`.
pub fn start(state: &GameWorld) -> GameWorld {
    if state.status != GameStatus::AwaitingStart {
        return state.clone();
    }
    GameWorld {
        status: GameStatus::Playing,
        ..state.clone()
    }
}

/// Flap input: instant upward displacement, guarded so the bird cannot keep
/// climbing once its hitbox reaches the top edge.
pub fn flap(state: &GameWorld) -> GameWorld {
    if state.status != GameStatus::Playing || state.bird.hitbox.pos.y <= 0.0 {
        return state.clone();
    }
    let bird = Bird {
        position: Vector::new(state.bird.position.x, state.bird.position.y - FLAP_IMPULSE),
        hitbox: state.bird.hitbox.translated(0.0, -FLAP_IMPULSE),
    };
    GameWorld {
        bird,
        ..state.clone()
    }
}

/// Restart input from the game-over screen: a fresh session.  Only the best
/// score survives; the one-shot hit sound is rearmed by construction.
pub fn restart(state: &GameWorld, rng: &mut impl Rng) -> GameWorld {
    init_world(state.high_score, rng)
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one frame.  Outside `Playing` the world is a
/// frozen frame: only input transitions change anything.
pub fn tick(state: &GameWorld, rng: &mut impl Rng) -> GameWorld {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let frame = state.frame + 1;

    // ── 1. Evict the leading pipe once fully off-screen ──────────────────────
    let mut pipes = state.pipes.clone();
    if pipes.first().is_some_and(|p| p.offscreen) {
        pipes.remove(0);
        let min_start = pipes
            .last()
            .map(|p| p.upper.position.x + p.upper.head_box.w)
            .unwrap_or(WINDOW_WIDTH);
        pipes.push(spawn_pipe(rng, state.bird.hitbox.h, min_start));
    }

    // ── 2. Bird falls by the fixed step ──────────────────────────────────────
    let bird = Bird {
        position: Vector::new(state.bird.position.x, state.bird.position.y + FALL_STEP),
        hitbox: state.bird.hitbox.translated(0.0, FALL_STEP),
    };

    // ── 3. Pipes scroll left ─────────────────────────────────────────────────
    let mut pipes: Vec<Pipe> = pipes.iter().map(advance_pipe).collect();

    // ── 4. Scoring ───────────────────────────────────────────────────────────
    let mut score = state.score;
    for pipe in &mut pipes {
        if pipe.ignored {
            // Already counted.  The gap can still overlap the bird for many
            // frames after the head cap clears its right edge, so a cleared
            // pipe must never re-enter the passed/score cycle.
            continue;
        }
        if boxes_intersect(&bird.hitbox, &pipe.gap_box) {
            pipe.passed = true;
        }
        if pipe.passed && bird.hitbox.right() > pipe.upper.head_box.right() {
            score += 1;
            pipe.passed = false; // consumed — never count this pipe twice
            pipe.ignored = true; // collision checks move on to the next pipe
        }
    }
    let high_score = state.high_score.max(score);

    // ── 5. Collision against the leader pipe and the floor ───────────────────
    let status = if check_hazard_collision(&bird, &pipes, &state.floor) {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameWorld {
        bird,
        pipes,
        score,
        high_score,
        status,
        frame,
        ..state.clone()
    }
}

/// One scroll step: shift the whole obstacle left and flag it off-screen
/// once the upper head box has fully exited the left edge.
fn advance_pipe(pipe: &Pipe) -> Pipe {
    let mut moved = pipe.translated(-SCROLL_SPEED, 0.0);
    if moved.upper.head_box.right() < 0.0 {
        moved.offscreen = true;
    }
    moved
}

// ── Collision orchestration ──────────────────────────────────────────────────

/// Index of the nearest pipe the bird has not yet cleared — the only one
/// worth testing, since trailing pipes are unreachable before the leader.
pub fn leader_index(pipes: &[Pipe]) -> usize {
    pipes.iter().position(|p| !p.ignored).unwrap_or(0)
}

/// The five hazard pairs: bird vs. the leader's four spire boxes, and bird
/// vs. the floor.  Any overlap is a game-over condition.
pub fn check_hazard_collision(bird: &Bird, pipes: &[Pipe], floor: &Floor) -> bool {
    // The floor hazard stands on its own even with no pipes in flight.
    let Some(leader) = pipes.get(leader_index(pipes)) else {
        return boxes_intersect(&bird.hitbox, &floor.hitbox);
    };

    let hit_upper_head = boxes_intersect(&bird.hitbox, &leader.upper.head_box);
    let hit_upper_body = boxes_intersect(&bird.hitbox, &leader.upper.body_box);
    let hit_lower_head = boxes_intersect(&bird.hitbox, &leader.lower.head_box);
    let hit_lower_body = boxes_intersect(&bird.hitbox, &leader.lower.body_box);
    let hit_floor = boxes_intersect(&bird.hitbox, &floor.hitbox);

    hit_upper_head || hit_upper_body || hit_lower_head || hit_lower_body || hit_floor
}
