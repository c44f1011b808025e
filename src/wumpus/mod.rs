//! Classic wumpus-world gold hunt, played by entailment
//!
//! The cave simulator and the knowledge-based explorer meet only through
//! percepts and moves: the world reports what the explorer's cell feels
//! like, the explorer answers with the next cell to enter. Everything the
//! explorer believes is derived by refutation queries against its store.

pub mod explorer;
pub mod world;

pub use explorer::{Choice, Explorer};
pub use world::{Cell, GameResult, Percept, WumpusWorld};

use crate::error::Result;

/// Drive one hunt until it settles or the move budget runs out
pub fn hunt(
    world: &mut WumpusWorld,
    explorer: &mut Explorer,
    max_moves: usize,
) -> Result<GameResult> {
    for _ in 0..max_moves {
        if let Some(result) = world.outcome() {
            return Ok(result);
        }
        let percept = world.percept();
        explorer.perceive(percept);
        if percept.glitter {
            world.grab_gold();
            continue;
        }
        match explorer.choose()? {
            Choice::Safe(target) | Choice::Risky(target) => {
                explorer.relocate(target);
                world.enter(target);
            }
            Choice::Exhausted => world.give_up(),
        }
    }
    world.give_up();
    Ok(world.outcome().unwrap_or(GameResult::GiveUp))
}
