//! All game entity types — pure data, no logic.

use crate::error::GameError;

/// Smallest surface the game will run on: the scoreboard needs ten columns
/// and the adversary spawn band starts at column 5.
pub const MIN_WIDTH: i32 = 10;
pub const MIN_HEIGHT: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    ActorDefault,
    Projectile,
    AdversaryDefault,
    /// Masks the reserved bottom-right cell.
    Invisible,
    Scoreboard,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::ActorDefault,
        Style::Projectile,
        Style::AdversaryDefault,
        Style::Invisible,
        Style::Scoreboard,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Logical keys the actor understands. The terminal layer folds WASD and the
/// arrow keys into these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Other,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }
}

/// Dimensions of the rendering surface, fixed for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, GameError> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(GameError::GridTooSmall { width, height });
        }
        Ok(Grid { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn last_row(&self) -> i32 {
        self.height - 1
    }

    /// The bottom-right cell that is kept clear of entities.
    pub fn reserved_cell(&self) -> Position {
        Position::new(self.last_row(), self.width - 2)
    }
}

// ── On-screen objects ─────────────────────────────────────────────────────────

/// Positional and visual state shared by everything drawn on the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub pos: Position,
    pub glyph: String,
    pub style: Style,
}

impl Entity {
    pub fn new(pos: Position, glyph: impl Into<String>, style: Style) -> Self {
        Entity {
            pos,
            glyph: glyph.into(),
            style,
        }
    }

    /// Width of the glyph in cells.
    pub fn glyph_len(&self) -> i32 {
        self.glyph.chars().count() as i32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: Entity,
    pub fired: bool,
    /// Cells travelled to the right per frame.
    pub speed: i32,
}

impl Projectile {
    /// An idle projectile parked at the origin.
    pub fn idle(glyph: impl Into<String>, speed: i32) -> Self {
        Projectile {
            body: Entity::new(Position::ORIGIN, glyph, Style::Projectile),
            fired: false,
            speed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Adversary {
    pub body: Entity,
    pub alive: bool,
}

impl Adversary {
    pub fn spawn(pos: Position, glyph: impl Into<String>) -> Self {
        Adversary {
            body: Entity::new(pos, glyph, Style::AdversaryDefault),
            alive: true,
        }
    }
}

/// The player-controlled entity and its projectile pool.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub body: Entity,
    pub alive: bool,
    /// Append-only; grows by one per kill.
    pub projectiles: Vec<Projectile>,
}

impl Actor {
    pub fn new(pos: Position, glyph: impl Into<String>, projectiles: Vec<Projectile>) -> Self {
        Actor {
            body: Entity::new(pos, glyph, Style::ActorDefault),
            alive: true,
            projectiles,
        }
    }

    pub fn idle_projectiles(&self) -> usize {
        self.projectiles.iter().filter(|p| !p.fired).count()
    }
}
