//! The simulation loop: one `Session` per game, running until the actor dies.

use std::thread;
use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::compute::{advance_frame, handle_input, kill_count, new_projectile, pick_glyph};
use crate::config::GameConfig;
use crate::display::{self, Surface};
use crate::entities::{Actor, Adversary, Entity, GameStatus, Grid, Key, Position};
use crate::error::GameError;

/// Non-blocking key source. `Ok(None)` means no key this frame.
pub trait InputSource {
    fn poll_key(&mut self) -> Result<Option<Key>, GameError>;
}

pub struct Session<R: Rng> {
    config: GameConfig,
    grid: Grid,
    actor: Actor,
    adversaries: Vec<Adversary>,
    kills: u32,
    /// Projectile launched this frame, at its launch cell.
    launched: Option<Entity>,
    status: GameStatus,
    frame: u64,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Actor at the configured start with one idle projectile, and a single
    /// adversary in the middle of the bottom row.
    pub fn new(config: GameConfig, grid: Grid, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let projectile = new_projectile(&config, &mut rng);
        let actor = Actor::new(config.actor_start, config.actor_glyph.clone(), vec![projectile]);

        let glyph = pick_glyph(&config.adversary_glyphs, &mut rng);
        let first = Adversary::spawn(Position::new(grid.last_row(), grid.width() / 2), glyph);

        Ok(Session {
            config,
            grid,
            actor,
            adversaries: vec![first],
            kills: 0,
            launched: None,
            status: GameStatus::Running,
            frame: 0,
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn adversaries(&self) -> &[Adversary] {
        &self.adversaries
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn launched(&self) -> Option<&Entity> {
        self.launched.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulate one frame for `key`. Does nothing once the game is over.
    pub fn step(&mut self, key: Option<Key>) {
        if self.status == GameStatus::GameOver {
            return;
        }
        self.frame += 1;

        self.launched = handle_input(&mut self.actor, &self.grid, key);
        let events = advance_frame(
            &mut self.actor,
            &mut self.adversaries,
            &self.grid,
            &self.config,
            &mut self.rng,
        );
        self.kills = kill_count(&self.adversaries);

        if events.kills > 0 {
            debug!("frame {}: {} kill(s), total {}", self.frame, events.kills, self.kills);
        }
        if !self.actor.alive {
            info!("actor died on frame {} with {} kills", self.frame, self.kills);
            self.status = GameStatus::GameOver;
        }
    }

    /// Run frames until the actor dies and return the final kill count.
    pub fn run<S, I>(&mut self, surface: &mut S, input: &mut I) -> Result<u32, GameError>
    where
        S: Surface,
        I: InputSource,
    {
        let frame_budget = self.config.frame_duration();
        info!("session started on a {}x{} grid", self.grid.width(), self.grid.height());

        while self.status == GameStatus::Running {
            let frame_start = Instant::now();

            let key = input.poll_key()?;
            surface.clear()?;
            self.step(key);
            display::render(surface, self)?;
            surface.flush()?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                thread::sleep(frame_budget - elapsed);
            }
        }

        Ok(self.kills)
    }
}
