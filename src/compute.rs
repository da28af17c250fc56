//! Game-logic functions.
//!
//! Everything here operates on the plain data in `entities` and never touches
//! the terminal. All randomness comes through an injected `Rng` so callers
//! control determinism (tests pass a seeded or scripted RNG).

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Actor, Adversary, Entity, Grid, Key, Position, Projectile};

/// Probability threshold above which an adversary stays put for the frame.
const STAND_STILL_ABOVE: f64 = 0.35;

/// Leftmost column a respawned adversary may appear in.
const SPAWN_MIN_COL: i32 = 5;

// ── Bounded motion ────────────────────────────────────────────────────────────

/// `value` bound to `[low, high]`. Unlike `i32::clamp` this does not panic when
/// a degenerate surface makes `low > high`.
pub fn clamp(value: i32, low: i32, high: i32) -> i32 {
    value.max(low).min(high)
}

/// Rightmost column an entity may occupy on `row`.
fn max_col(grid: &Grid, row: i32, glyph_len: i32) -> i32 {
    let offset = if row == grid.last_row() { 1 } else { 0 };
    grid.width() - (glyph_len + offset)
}

pub fn bound_col(grid: &Grid, entity: &Entity, col: i32) -> i32 {
    clamp(col, 0, max_col(grid, entity.pos.row, entity.glyph_len()))
}

pub fn bound_row(grid: &Grid, row: i32) -> i32 {
    clamp(row, 0, grid.last_row())
}

pub fn move_left(entity: &mut Entity, grid: &Grid, distance: i32) {
    entity.pos.col = bound_col(grid, entity, entity.pos.col - distance);
}

pub fn move_right(entity: &mut Entity, grid: &Grid, distance: i32) {
    entity.pos.col = bound_col(grid, entity, entity.pos.col + distance);
}

pub fn move_up(entity: &mut Entity, grid: &Grid, distance: i32) {
    move_to_row(entity, grid, entity.pos.row - distance);
}

pub fn move_down(entity: &mut Entity, grid: &Grid, distance: i32) {
    move_to_row(entity, grid, entity.pos.row + distance);
}

/// The column limit depends on the row, so landing on the last row can pull
/// the entity one cell left of the reserved cell.
fn move_to_row(entity: &mut Entity, grid: &Grid, row: i32) {
    entity.pos.row = bound_row(grid, row);
    entity.pos.col = bound_col(grid, entity, entity.pos.col);
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Launch an idle projectile from `origin`. A projectile already in flight is
/// left alone.
pub fn fire_projectile(projectile: &mut Projectile, origin: Position) {
    if projectile.fired {
        return;
    }
    projectile.body.pos = origin;
    projectile.fired = true;
}

/// True once the projectile can travel no further right.
pub fn at_right_wall(projectile: &Projectile, grid: &Grid) -> bool {
    let body = &projectile.body;
    let len = body.glyph_len();
    body.pos.col >= grid.width() - len
        || (body.pos.row == grid.last_row() && body.pos.col >= grid.width() - (len + 1))
}

pub fn advance_projectile(projectile: &mut Projectile, grid: &Grid) {
    if !projectile.fired {
        return;
    }
    if at_right_wall(projectile, grid) {
        stop_projectile(projectile);
    } else {
        move_right(&mut projectile.body, grid, projectile.speed);
    }
}

pub fn stop_projectile(projectile: &mut Projectile) {
    projectile.fired = false;
    projectile.body.pos = Position::ORIGIN;
}

pub fn new_projectile(config: &GameConfig, rng: &mut impl Rng) -> Projectile {
    Projectile::idle(pick_glyph(&config.projectile_glyphs, rng), config.projectile_speed)
}

// ── Adversaries ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
    Up,
    Down,
}

/// Erratic movement policy: stand still 65% of the time, otherwise
/// left 30% / right 20% / up 25% / down 25% of the moves.
pub fn roll_step(rng: &mut impl Rng) -> Option<Step> {
    let where_to: f64 = rng.gen();
    if where_to > STAND_STILL_ABOVE {
        return None;
    }
    let how: f64 = rng.gen();
    let step = if how > 0.5 {
        if how > 0.70 {
            Step::Left
        } else {
            Step::Right
        }
    } else if how > 0.25 {
        Step::Up
    } else {
        Step::Down
    };
    Some(step)
}

pub fn apply_step(entity: &mut Entity, grid: &Grid, step: Step) {
    match step {
        Step::Left => move_left(entity, grid, 1),
        Step::Right => move_right(entity, grid, 1),
        Step::Up => move_up(entity, grid, 1),
        Step::Down => move_down(entity, grid, 1),
    }
}

pub fn move_random(adversary: &mut Adversary, grid: &Grid, rng: &mut impl Rng) {
    if let Some(step) = roll_step(rng) {
        apply_step(&mut adversary.body, grid, step);
    }
}

pub fn kill(adversary: &mut Adversary) {
    adversary.alive = false;
}

/// Score for the session: every dead adversary is a kill.
pub fn kill_count(adversaries: &[Adversary]) -> u32 {
    adversaries.iter().filter(|a| !a.alive).count() as u32
}

/// Double the roster with fresh adversaries at random spots.
pub fn spawn_wave(
    adversaries: &mut Vec<Adversary>,
    grid: &Grid,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> usize {
    let count = adversaries.len();
    let max_col = grid.width() - 2;
    let min_col = SPAWN_MIN_COL.min(max_col);
    for _ in 0..count {
        let pos = Position::new(
            rng.gen_range(0..=grid.last_row()),
            rng.gen_range(min_col..=max_col),
        );
        adversaries.push(Adversary::spawn(pos, pick_glyph(&config.adversary_glyphs, rng)));
    }
    count
}

pub fn pick_glyph(palette: &[String], rng: &mut impl Rng) -> String {
    palette.choose(rng).cloned().unwrap_or_default()
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// Apply one key. Returns the launched projectile's body, as it stood at the
/// launch cell, when the key fired one.
pub fn handle_input(actor: &mut Actor, grid: &Grid, key: Option<Key>) -> Option<Entity> {
    match key {
        Some(Key::Up) => move_up(&mut actor.body, grid, 1),
        Some(Key::Down) => move_down(&mut actor.body, grid, 1),
        Some(Key::Left) => move_left(&mut actor.body, grid, 1),
        Some(Key::Right) => move_right(&mut actor.body, grid, 1),
        Some(Key::Fire) => return fire(actor).map(|p| p.body.clone()),
        Some(Key::Other) | None => {}
    }
    None
}

/// Fire the first idle projectile in the pool; no-op when all are in flight.
pub fn fire(actor: &mut Actor) -> Option<&Projectile> {
    let origin = actor.body.pos;
    let projectile = actor.projectiles.iter_mut().find(|p| !p.fired)?;
    fire_projectile(projectile, origin);
    Some(&*projectile)
}

/// What happened during one `advance_frame`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub kills: u32,
    /// Number of adversaries added by a respawn, zero if none happened.
    pub wave_spawned: usize,
    pub actor_died: bool,
}

/// Advance the world by one frame from the actor's point of view: move the
/// adversaries, resolve collisions, respawn when everything is dead and move
/// every projectile in flight.
///
/// Per adversary, contact with the actor is checked before projectile hits,
/// so an adversary overlapping both the actor and a projectile kills the
/// actor.
pub fn advance_frame(
    actor: &mut Actor,
    adversaries: &mut Vec<Adversary>,
    grid: &Grid,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> FrameEvents {
    let mut events = FrameEvents::default();

    for adversary in adversaries.iter_mut().filter(|a| a.alive) {
        move_random(adversary, grid, rng);

        if adversary.body.pos == actor.body.pos {
            actor.alive = false;
            events.actor_died = true;
            break;
        }

        let hit = actor
            .projectiles
            .iter_mut()
            .find(|p| p.fired && p.body.pos == adversary.body.pos);
        if let Some(projectile) = hit {
            kill(adversary);
            stop_projectile(projectile);
            actor.projectiles.push(new_projectile(config, rng));
            events.kills += 1;
        }
    }

    if !adversaries.iter().any(|a| a.alive) {
        events.wave_spawned = spawn_wave(adversaries, grid, config, rng);
        debug!("wave of {} adversaries spawned", events.wave_spawned);
    }

    for projectile in actor.projectiles.iter_mut().filter(|p| p.fired) {
        advance_projectile(projectile, grid);
    }

    events
}
