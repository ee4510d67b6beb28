use flappy_bird::compute::init_world;
use flappy_bird::entities::*;
use flappy_bird::geom::Vector;

use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

// ── Sprite geometry tables ─────────────────────────────────────────────────────

#[test]
fn sprite_rect_scales_and_anchors() {
    let r = SpriteRect { x0: 10.0, y0: 20.0, x1: 110.0, y1: 70.0 };
    let hb = r.scaled_at(Vector::new(100.0, 200.0), 0.5);
    assert!(close(hb.pos.x, 105.0));
    assert!(close(hb.pos.y, 210.0));
    assert!(close(hb.w, 50.0));
    assert!(close(hb.h, 25.0));
}

#[test]
fn bird_silhouette_is_tighter_than_sprite() {
    let hb = BIRD_BODY.scaled_at(Vector::new(25.0, 384.0), BIRD_SCALE);
    // Inset from the anchor on both axes, 67×49 px
    assert!(close(hb.pos.x, 25.0 + 19.1));
    assert!(close(hb.pos.y, 384.0 + 37.5));
    assert!(close(hb.w, 67.0));
    assert!(close(hb.h, 49.0));
}

#[test]
fn upper_spire_head_caps_the_bottom() {
    let origin = Vector::new(100.0, -50.0);
    let head = UPPER_SPIRE.head.scaled_at(origin, PIPE_SCALE);
    let body = UPPER_SPIRE.body.scaled_at(origin, PIPE_SCALE);

    // Head spans the full sprite width, body is narrower
    assert!(close(head.w, PIPE_SPRITE_W * PIPE_SCALE));
    assert!(body.w < head.w);
    // Head bottom is the spire bottom; body sits flush above it
    assert!(close(head.bottom(), origin.y + PIPE_SPRITE_H * PIPE_SCALE));
    assert!(close(body.bottom(), head.pos.y));
    assert!(close(body.pos.y, origin.y));
}

#[test]
fn lower_spire_head_caps_the_top() {
    let origin = Vector::new(300.0, 500.0);
    let head = LOWER_SPIRE.head.scaled_at(origin, PIPE_SCALE);
    let body = LOWER_SPIRE.body.scaled_at(origin, PIPE_SCALE);

    assert!(close(head.pos.y, origin.y));
    assert!(close(head.w, PIPE_SPRITE_W * PIPE_SCALE));
    assert!(body.w < head.w);
    // Body hangs directly below the head cap down to the sprite bottom
    assert!(close(body.pos.y, head.bottom()));
    assert!(close(body.bottom(), origin.y + PIPE_SPRITE_H * PIPE_SCALE));
}

// ── Entity behaviors ───────────────────────────────────────────────────────────

#[test]
fn pipe_translated_moves_every_box() {
    let mut rng = StdRng::seed_from_u64(7);
    let world = init_world(0, &mut rng);
    let pipe = &world.pipes[0];

    let moved = pipe.translated(-10.0, 4.0);
    assert!(close(moved.upper.position.x, pipe.upper.position.x - 10.0));
    assert!(close(moved.upper.head_box.pos.x, pipe.upper.head_box.pos.x - 10.0));
    assert!(close(moved.upper.body_box.pos.y, pipe.upper.body_box.pos.y + 4.0));
    assert!(close(moved.lower.position.y, pipe.lower.position.y + 4.0));
    assert!(close(moved.lower.head_box.pos.x, pipe.lower.head_box.pos.x - 10.0));
    assert!(close(moved.lower.body_box.pos.x, pipe.lower.body_box.pos.x - 10.0));
    assert!(close(moved.gap_box.pos.x, pipe.gap_box.pos.x - 10.0));
    assert!(close(moved.gap_box.pos.y, pipe.gap_box.pos.y + 4.0));
    // Flags carried over unchanged
    assert_eq!(moved.passed, pipe.passed);
    assert_eq!(moved.ignored, pipe.ignored);
    assert_eq!(moved.offscreen, pipe.offscreen);
}

#[test]
fn status_equality() {
    assert_eq!(GameStatus::AwaitingStart, GameStatus::AwaitingStart);
    assert_ne!(GameStatus::AwaitingStart, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
}

#[test]
fn game_world_clone_is_independent() {
    let mut rng = StdRng::seed_from_u64(7);
    let original = init_world(0, &mut rng);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.bird.position.y = 0.0;
    cloned.score = 999;
    cloned.pipes.clear();

    assert!(close(original.bird.position.y, 384.0));
    assert_eq!(original.score, 0);
    assert!(!original.pipes.is_empty());
}
