//! Rendering layer — all terminal output goes through here.
//!
//! The render pass only reads game state and turns it into draw requests on
//! a `Surface`; no game logic is performed.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Colors, Print},
    terminal, QueueableCommand,
};
use rand::Rng;

use crate::entities::{Entity, Grid, Style};
use crate::score::scoreboard_label;
use crate::session::Session;

// ── Colour palette ────────────────────────────────────────────────────────────

/// (foreground, background) for each style tag.
pub fn style_colors(style: Style) -> (Color, Color) {
    match style {
        Style::ActorDefault => (Color::Black, Color::Green),
        Style::Projectile => (Color::Red, Color::Black),
        Style::AdversaryDefault => (Color::Black, Color::Red),
        Style::Invisible => (Color::Black, Color::Black),
        Style::Scoreboard => (Color::Magenta, Color::Black),
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

/// Something the game can draw a frame onto.
pub trait Surface {
    fn clear(&mut self) -> std::io::Result<()>;
    fn draw(&mut self, row: i32, col: i32, glyph: &str, style: Style) -> std::io::Result<()>;
    fn flush(&mut self) -> std::io::Result<()>;
}

/// Surface that queues crossterm commands into a writer.
pub struct TermSurface<W: Write> {
    out: W,
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W) -> Self {
        TermSurface { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw(&mut self, row: i32, col: i32, glyph: &str, style: Style) -> std::io::Result<()> {
        let (fg, bg) = style_colors(style);
        self.out.queue(cursor::MoveTo(col.max(0) as u16, row.max(0) as u16))?;
        self.out.queue(style::SetColors(Colors::new(fg, bg)))?;
        self.out.queue(Print(glyph))?;
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

// ── Render pass ───────────────────────────────────────────────────────────────

fn draw_entity<S: Surface>(surface: &mut S, entity: &Entity) -> std::io::Result<()> {
    surface.draw(entity.pos.row, entity.pos.col, &entity.glyph, entity.style)
}

/// Draw one complete frame (without clearing or flushing).
pub fn render<S: Surface, R: Rng>(surface: &mut S, session: &Session<R>) -> std::io::Result<()> {
    if let Some(launched) = session.launched() {
        draw_entity(surface, launched)?;
    }
    for adversary in session.adversaries().iter().filter(|a| a.alive) {
        draw_entity(surface, &adversary.body)?;
    }
    for projectile in session.actor().projectiles.iter().filter(|p| p.fired) {
        draw_entity(surface, &projectile.body)?;
    }
    draw_entity(surface, &session.actor().body)?;

    draw_scoreboard(surface, session.grid(), session.kills())?;
    draw_reserved_cell(surface, session.grid())
}

fn draw_scoreboard<S: Surface>(surface: &mut S, grid: &Grid, kills: u32) -> std::io::Result<()> {
    let label = scoreboard_label(kills);
    let col = grid.width() - label.chars().count() as i32 - 1;
    surface.draw(0, col, &label, Style::Scoreboard)
}

fn draw_reserved_cell<S: Surface>(surface: &mut S, grid: &Grid) -> std::io::Result<()> {
    let cell = grid.reserved_cell();
    surface.draw(cell.row, cell.col, " ", Style::Invisible)
}
