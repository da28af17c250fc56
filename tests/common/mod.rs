#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};

use term_blaster::entities::{Actor, Adversary, Grid, Position, Projectile};

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// RNG under which adversaries never move.
///
/// Float draws come from `next_u64`, which always returns `u64::MAX` (just
/// under 1.0, i.e. "stand still"). Integer ranges and slice picks come from
/// `next_u32`, which always returns 0, so they pick the low end.
pub struct StillRng;

impl RngCore for StillRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn grid() -> Grid {
    Grid::new(40, 20).unwrap()
}

pub fn actor_at(row: i32, col: i32) -> Actor {
    Actor::new(Position::new(row, col), " ", vec![Projectile::idle(".", 1)])
}

pub fn adversary_at(row: i32, col: i32) -> Adversary {
    Adversary::spawn(Position::new(row, col), "X")
}

pub fn fired_at(row: i32, col: i32) -> Projectile {
    let mut p = Projectile::idle(".", 1);
    p.body.pos = Position::new(row, col);
    p.fired = true;
    p
}
