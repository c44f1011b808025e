//! Cave simulator for the gold hunt
//!
//! The world holds the ground truth the explorer reasons about: pit and
//! wumpus placement, the gold cell, and the explorer's position. Percepts
//! are strictly local so they line up with the neighbor axioms the
//! explorer asserts: a breeze or stench is felt in a cell exactly when an
//! orthogonal neighbor holds a pit or the wumpus.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Grid position, 1-based on both axes
///
/// The derived ordering is row-major (x first, then y), which is the
/// order the explorer breaks ties in when several targets qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub fn new(x: u8, y: u8) -> Self {
        Cell { x, y }
    }

    /// Orthogonal neighbors clipped to a `size` × `size` grid
    pub fn neighbors(self, size: u8) -> Vec<Cell> {
        const DELTAS: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        DELTAS
            .iter()
            .map(|&(dx, dy)| (i16::from(self.x) + dx, i16::from(self.y) + dy))
            .filter(|&(x, y)| x >= 1 && x <= i16::from(size) && y >= 1 && y <= i16::from(size))
            .map(|(x, y)| Cell::new(x as u8, y as u8))
            .collect()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What the explorer senses in its current cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percept {
    pub stench: bool,
    pub breeze: bool,
    pub glitter: bool,
}

/// Terminal state of a hunt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Walked into a pit or the wumpus
    Death,
    /// No reachable cell was worth the risk
    GiveUp,
    /// Picked up the gold
    Win,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WumpusWorld {
    size: u8,
    pits: HashSet<Cell>,
    wumpus: Cell,
    gold: Cell,
    explorer: Cell,
    outcome: Option<GameResult>,
}

impl WumpusWorld {
    /// The classic 4 × 4 cave: three pits, wumpus at (1, 3), gold at (2, 3)
    pub fn fixed() -> Self {
        let pits = [Cell::new(3, 1), Cell::new(3, 3), Cell::new(4, 4)]
            .into_iter()
            .collect();
        WumpusWorld {
            size: 4,
            pits,
            wumpus: Cell::new(1, 3),
            gold: Cell::new(2, 3),
            explorer: Cell::new(1, 1),
            outcome: None,
        }
    }

    /// A cave with every placement chosen by the caller
    pub fn with_layout(size: u8, pits: &[Cell], wumpus: Cell, gold: Cell) -> Self {
        let entrance = Cell::new(1, 1);
        debug_assert!(!pits.contains(&entrance) && wumpus != entrance);
        WumpusWorld {
            size,
            pits: pits.iter().copied().collect(),
            wumpus,
            gold,
            explorer: entrance,
            outcome: None,
        }
    }

    /// A seeded random 4 × 4 cave. The entrance (1, 1) is always clear;
    /// every other cell holds a pit with `pit_probability`.
    pub fn random(seed: u64, pit_probability: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let pit_probability = pit_probability.clamp(0.0, 1.0);
        let entrance = Cell::new(1, 1);
        let size = 4u8;

        let mut open: Vec<Cell> = Vec::new();
        let mut pits = HashSet::new();
        for x in 1..=size {
            for y in 1..=size {
                let cell = Cell::new(x, y);
                if cell == entrance {
                    continue;
                }
                if rng.gen_bool(pit_probability) {
                    pits.insert(cell);
                } else {
                    open.push(cell);
                }
            }
        }

        let wumpus = loop {
            let cell = Cell::new(rng.gen_range(1..=size), rng.gen_range(1..=size));
            if cell != entrance {
                break cell;
            }
        };
        // Degenerate all-pit layouts keep the gold with the wumpus
        let gold = if open.is_empty() {
            wumpus
        } else {
            open[rng.gen_range(0..open.len())]
        };

        WumpusWorld {
            size,
            pits,
            wumpus,
            gold,
            explorer: entrance,
            outcome: None,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn explorer(&self) -> Cell {
        self.explorer
    }

    pub fn outcome(&self) -> Option<GameResult> {
        self.outcome
    }

    /// Senses at the explorer's cell. Stench and breeze report strictly
    /// adjacent hazards, matching the axioms the explorer reasons with.
    pub fn percept(&self) -> Percept {
        let neighbors = self.explorer.neighbors(self.size);
        Percept {
            stench: neighbors.contains(&self.wumpus),
            breeze: neighbors.iter().any(|cell| self.pits.contains(cell)),
            glitter: self.explorer == self.gold,
        }
    }

    /// Relocate the explorer. Pits and the wumpus kill on entry.
    pub fn enter(&mut self, cell: Cell) {
        debug_assert!(self.outcome.is_none());
        debug_assert!(cell.x >= 1 && cell.x <= self.size && cell.y >= 1 && cell.y <= self.size);
        self.explorer = cell;
        if self.pits.contains(&cell) || self.wumpus == cell {
            self.outcome = Some(GameResult::Death);
        }
    }

    /// Pick up the gold, which ends the hunt if the explorer stands on it
    pub fn grab_gold(&mut self) {
        if self.outcome.is_none() && self.explorer == self.gold {
            self.outcome = Some(GameResult::Win);
        }
    }

    pub fn give_up(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(GameResult::GiveUp);
        }
    }
}

impl fmt::Display for WumpusWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (1..=self.size).rev() {
            for x in 1..=self.size {
                let cell = Cell::new(x, y);
                let mark = if cell == self.explorer {
                    'E'
                } else if self.pits.contains(&cell) {
                    'P'
                } else if cell == self.wumpus {
                    'W'
                } else if cell == self.gold {
                    'G'
                } else {
                    '.'
                };
                if x > 1 {
                    write!(f, " ")?;
                }
                write!(f, "{}", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
