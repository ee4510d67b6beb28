mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use flappy_bird::audio::{Audio, Cue};
use flappy_bird::compute::{flap, init_world, restart, start, tick};
use flappy_bird::entities::GameStatus;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

const FLAP_VOLUME: f32 = 0.1;
const CUE_VOLUME: f32 = 0.2;

// ── High-score persistence ────────────────────────────────────────────────────

fn high_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".flappy_bird_score")
}

fn load_high_score() -> u32 {
    std::fs::read_to_string(high_score_path())
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn save_high_score(score: u32) {
    let _ = std::fs::write(high_score_path(), score.to_string());
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One cooperative frame per `FRAME`: drain input, apply the matching state
/// transitions, advance the simulation one tick, fire audio cues for the
/// transitions this frame produced, redraw, sleep the remainder.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    audio: &Audio,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut high_score = load_high_score();
    let mut state = init_world(high_score, &mut rng);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            // Repeats count as presses: a held Space keeps the bird climbing,
            // matching the held-key behavior of the desktop original.
            if !matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(());
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Enter => {
                    state = start(&state);
                }
                KeyCode::Char(' ') | KeyCode::Up => match state.status {
                    GameStatus::Playing => {
                        let flapped = flap(&state);
                        // Silent when the top-edge guard turned it into a no-op
                        if flapped.bird.position.y < state.bird.position.y {
                            audio.play(Cue::Flap, FLAP_VOLUME);
                        }
                        state = flapped;
                    }
                    GameStatus::GameOver if code == KeyCode::Char(' ') => {
                        state = restart(&state, &mut rng);
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        let score_before = state.score;
        state = tick(&state, &mut rng);

        if state.score > score_before {
            audio.play(Cue::Score, CUE_VOLUME);
        }
        if state.status == GameStatus::GameOver && state.hit_sound.fire() {
            audio.play(Cue::Hit, CUE_VOLUME);
            if state.score > high_score {
                high_score = state.score;
                save_high_score(high_score);
            }
        }

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Audio device failure is fatal, and happens before the terminal is
    // switched into raw mode so the error prints normally.
    let audio = Audio::new()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx, &audio);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
