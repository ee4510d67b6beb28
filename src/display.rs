/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only projects the
/// 1024×768 simulation space onto the terminal cell grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_bird::entities::{GameStatus, GameWorld, Pipe};
use flappy_bird::geom::HitBox;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_CLOUD: Color = Color::White;
const C_PIPE: Color = Color::Green;
const C_FLOOR: Color = Color::DarkYellow;
const C_BIRD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Decorative cloud anchors in simulation space — no collision role.
const CLOUDS: [(f64, f64); 5] = [
    (140.0, 110.0),
    (380.0, 60.0),
    (560.0, 170.0),
    (760.0, 90.0),
    (940.0, 140.0),
];

// ── Simulation-to-cell projection ─────────────────────────────────────────────

/// Scaling context for one frame.  Row 0 is reserved for the HUD and the
/// last row for the controls hint; the play area maps to everything between.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f64,
    sy: f64,
}

impl Viewport {
    fn new(cols: u16, rows: u16, state: &GameWorld) -> Self {
        let play_rows = rows.saturating_sub(2).max(1);
        Viewport {
            cols,
            rows,
            sx: cols as f64 / state.width,
            sy: play_rows as f64 / state.height,
        }
    }

    fn col(&self, x: f64) -> i32 {
        (x * self.sx).floor() as i32
    }

    fn row(&self, y: f64) -> i32 {
        1 + (y * self.sy).floor() as i32
    }

    /// Fill the cells covered by a hitbox, clipped to the play area.
    fn fill_box<W: Write>(
        &self,
        out: &mut W,
        hb: &HitBox,
        glyph: char,
        color: Color,
    ) -> std::io::Result<()> {
        let x0 = self.col(hb.pos.x).max(0);
        let x1 = self.col(hb.right()).min(self.cols as i32 - 1);
        let y0 = self.row(hb.pos.y).max(1);
        let y1 = self.row(hb.bottom()).min(self.rows as i32 - 2);
        if x1 < x0 || y1 < y0 {
            return Ok(());
        }

        out.queue(style::SetForegroundColor(color))?;
        let run: String = std::iter::repeat(glyph)
            .take((x1 - x0 + 1) as usize)
            .collect();
        for row in y0..=y1 {
            out.queue(cursor::MoveTo(x0 as u16, row as u16))?;
            out.queue(Print(&run))?;
        }
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameWorld) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let vp = Viewport::new(cols, rows, state);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_clouds(out, &vp)?;
    for pipe in &state.pipes {
        draw_pipe(out, &vp, pipe)?;
    }
    draw_floor(out, &vp, state)?;
    draw_bird(out, &vp, state)?;
    draw_hud(out, state)?;
    draw_controls_hint(out, state, rows)?;

    match state.status {
        GameStatus::AwaitingStart => draw_start_overlay(out, cols, rows)?,
        GameStatus::GameOver => draw_game_over(out, state, cols, rows)?,
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_clouds<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_CLOUD))?;
    for &(x, y) in &CLOUDS {
        let col = vp.col(x);
        let row = vp.row(y);
        if col >= 0 && row >= 1 && col < vp.cols as i32 - 3 && row < vp.rows as i32 - 2 {
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print("~~~"))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_pipe<W: Write>(out: &mut W, vp: &Viewport, pipe: &Pipe) -> std::io::Result<()> {
    // Body shafts are narrower than the head caps, matching the hitboxes.
    vp.fill_box(out, &pipe.upper.body_box, '▓', C_PIPE)?;
    vp.fill_box(out, &pipe.upper.head_box, '█', C_PIPE)?;
    vp.fill_box(out, &pipe.lower.body_box, '▓', C_PIPE)?;
    vp.fill_box(out, &pipe.lower.head_box, '█', C_PIPE)?;
    Ok(())
}

fn draw_floor<W: Write>(out: &mut W, vp: &Viewport, state: &GameWorld) -> std::io::Result<()> {
    let y0 = vp.row(state.floor.hitbox.pos.y).max(1);
    let y1 = vp.row(state.floor.hitbox.bottom()).min(vp.rows as i32 - 2);

    out.queue(style::SetForegroundColor(C_FLOOR))?;
    // Cosmetic scroll: the chequer pattern drifts with the frame counter.
    let phase = (state.frame / 4) as usize;
    for row in y0..=y1 {
        let line: String = (0..vp.cols as usize)
            .map(|c| if (c + phase) % 2 == 0 { '▚' } else { '▞' })
            .collect();
        out.queue(cursor::MoveTo(0, row as u16))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_bird<W: Write>(out: &mut W, vp: &Viewport, state: &GameWorld) -> std::io::Result<()> {
    vp.fill_box(out, &state.bird.hitbox, '█', C_BIRD)
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameWorld) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    if state.high_score > 0 {
        out.queue(Print(format!(
            "Score:{:>4}  Best:{:>4}",
            state.score, state.high_score
        )))?;
    } else {
        out.queue(Print(format!("Score:{:>4}", state.score)))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    state: &GameWorld,
    rows: u16,
) -> std::io::Result<()> {
    let hint = match state.status {
        GameStatus::AwaitingStart => "ENTER : Start   Q : Quit",
        GameStatus::Playing => "SPACE / ↑ : Flap   Q : Quit",
        GameStatus::GameOver => "SPACE : Play Again   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn centered_line<W: Write>(
    out: &mut W,
    msg: &str,
    color: Color,
    cols: u16,
    row: u16,
) -> std::io::Result<()> {
    let col = (cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

fn draw_start_overlay<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let start_row = (rows / 2).saturating_sub(2);
    centered_line(out, "╔══════════════════════╗", Color::Cyan, cols, start_row)?;
    centered_line(out, "║     FLAPPY  BIRD     ║", Color::Cyan, cols, start_row + 1)?;
    centered_line(out, "╚══════════════════════╝", Color::Cyan, cols, start_row + 2)?;
    centered_line(out, "Press ENTER to start", Color::White, cols, start_row + 3)?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameWorld,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>4}", state.score);
    let new_best = state.score >= state.high_score && state.score > 0;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>4} ★", state.high_score)
    } else {
        format!("Best Score:  {:>4}", state.high_score)
    };

    let start_row = (rows / 2).saturating_sub(3);
    centered_line(out, "╔════════════════════╗", Color::Red, cols, start_row)?;
    centered_line(out, "║    GAME  OVER      ║", Color::Red, cols, start_row + 1)?;
    centered_line(out, "╚════════════════════╝", Color::Red, cols, start_row + 2)?;
    centered_line(out, &score_line, Color::Yellow, cols, start_row + 3)?;
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };
    centered_line(out, &best_line, best_color, cols, start_row + 4)?;
    centered_line(
        out,
        "SPACE - Play Again  Q - Quit",
        Color::White,
        cols,
        start_row + 5,
    )?;
    Ok(())
}
