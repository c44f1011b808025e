//! Knowledge-based explorer
//!
//! The explorer never sees the cave layout. It starts from the neighbor
//! axioms alone (a cell is breezy exactly when a neighbor holds a pit,
//! smelly exactly when a neighbor holds the wumpus), folds every percept
//! into its knowledge base as literal facts, and derives everything else
//! by entailment queries. Visited cells are tracked the same way, through
//! `L` location literals, so the store is the single source of truth.

use log::debug;
use std::collections::HashSet;

use crate::config::EngineConfig;
use crate::engine::entails_with;
use crate::error::Result;
use crate::kb::KnowledgeBase;
use crate::logic::Interner;
use crate::parser::Formula;
use crate::wumpus::world::{Cell, Percept};

/// Outcome of one round of target selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// An unvisited cell proven free of pit and wumpus
    Safe(Cell),
    /// An unvisited cell not provably dangerous, entered on faith
    Risky(Cell),
    /// Every remaining cell is provably dangerous or already seen
    Exhausted,
}

pub struct Explorer {
    interner: Interner,
    kb: KnowledgeBase,
    config: EngineConfig,
    size: u8,
    location: Cell,
}

fn cell_atom(interner: &mut Interner, prefix: char, cell: Cell) -> Formula {
    Formula::atom(interner.intern(&format!("{}{}_{}", prefix, cell.x, cell.y)))
}

impl Explorer {
    pub fn new(size: u8) -> Self {
        Explorer::with_config(size, EngineConfig::default())
    }

    pub fn with_config(size: u8, config: EngineConfig) -> Self {
        let mut interner = Interner::new();
        let mut kb = KnowledgeBase::new();

        for x in 1..=size {
            for y in 1..=size {
                let cell = Cell::new(x, y);
                let pits: Vec<Formula> = cell
                    .neighbors(size)
                    .into_iter()
                    .map(|n| cell_atom(&mut interner, 'P', n))
                    .collect();
                kb.tell(Formula::iff(
                    cell_atom(&mut interner, 'B', cell),
                    Formula::disjunction(pits),
                ));

                let wumpuses: Vec<Formula> = cell
                    .neighbors(size)
                    .into_iter()
                    .map(|n| cell_atom(&mut interner, 'W', n))
                    .collect();
                kb.tell(Formula::iff(
                    cell_atom(&mut interner, 'S', cell),
                    Formula::disjunction(wumpuses),
                ));
            }
        }

        debug!("explorer starts with {} axiom clauses", kb.len());
        Explorer {
            interner,
            kb,
            config,
            size,
            location: Cell::new(1, 1),
        }
    }

    pub fn location(&self) -> Cell {
        self.location
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Fold a percept into the store as facts about the current cell.
    /// Absence of a sense is as informative as its presence, and being
    /// alive here rules out a pit and the wumpus.
    pub fn perceive(&mut self, percept: Percept) {
        let here = self.location;
        debug!("at {} perceiving {:?}", here, percept);

        self.kb.tell(cell_atom(&mut self.interner, 'L', here));

        let stench = cell_atom(&mut self.interner, 'S', here);
        self.kb.tell(if percept.stench {
            stench
        } else {
            Formula::not(stench)
        });

        let breeze = cell_atom(&mut self.interner, 'B', here);
        self.kb.tell(if percept.breeze {
            breeze
        } else {
            Formula::not(breeze)
        });

        self.kb
            .tell(Formula::not(cell_atom(&mut self.interner, 'P', here)));
        self.kb
            .tell(Formula::not(cell_atom(&mut self.interner, 'W', here)));
    }

    fn proves(&mut self, prefix: char, cell: Cell, positive: bool) -> Result<bool> {
        let atom = cell_atom(&mut self.interner, prefix, cell);
        let query = if positive { atom } else { Formula::not(atom) };
        entails_with(&self.kb, &query, &self.config)
    }

    fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for x in 1..=self.size {
            for y in 1..=self.size {
                cells.push(Cell::new(x, y));
            }
        }
        cells
    }

    /// Cells provably harmless: visited cells, cells proven free of both
    /// hazards, and every neighbor of a cell proven quiet on both senses
    pub fn proven_safe(&mut self) -> Result<HashSet<Cell>> {
        let mut safe = HashSet::new();
        for cell in self.cells() {
            if self.proves('L', cell, true)? {
                safe.insert(cell);
            }
            if self.proves('P', cell, false)? && self.proves('W', cell, false)? {
                safe.insert(cell);
            }
            if self.proves('S', cell, false)? && self.proves('B', cell, false)? {
                safe.extend(cell.neighbors(self.size));
            }
        }
        Ok(safe)
    }

    /// Cells not provably dangerous: candidates for a desperate move.
    /// A proven pit or wumpus location is excluded no matter how it was
    /// gathered.
    pub fn not_provably_unsafe(&mut self) -> Result<HashSet<Cell>> {
        let mut spots = HashSet::new();
        let mut dangerous = HashSet::new();
        for cell in self.cells() {
            if !self.proves('L', cell, true)? {
                spots.insert(cell);
            }
            if self.proves('P', cell, true)? || self.proves('W', cell, true)? {
                dangerous.insert(cell);
            }
            if self.proves('S', cell, false)? && self.proves('B', cell, false)? {
                spots.extend(cell.neighbors(self.size));
            }
        }
        spots.retain(|cell| !dangerous.contains(cell));
        Ok(spots)
    }

    /// Cells the store cannot prove visited
    pub fn unvisited(&mut self) -> Result<HashSet<Cell>> {
        let mut unvisited = HashSet::new();
        for cell in self.cells() {
            if !self.proves('L', cell, true)? {
                unvisited.insert(cell);
            }
        }
        Ok(unvisited)
    }

    /// Pick the next cell to explore: the lowest unvisited cell proven
    /// safe, else the lowest unvisited cell not provably unsafe
    pub fn choose(&mut self) -> Result<Choice> {
        let unvisited = self.unvisited()?;

        let safe = self.proven_safe()?;
        if let Some(target) = safe.intersection(&unvisited).copied().min() {
            debug!("moving to safe cell {}", target);
            return Ok(Choice::Safe(target));
        }

        let tolerable = self.not_provably_unsafe()?;
        if let Some(target) = tolerable.intersection(&unvisited).copied().min() {
            debug!("taking a risk on {}", target);
            return Ok(Choice::Risky(target));
        }

        debug!("nowhere left to go");
        Ok(Choice::Exhausted)
    }

    pub fn relocate(&mut self, cell: Cell) {
        self.location = cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Percept {
        Percept::default()
    }

    #[test]
    fn test_quiet_start_proves_neighbors_safe() {
        let mut explorer = Explorer::new(4);
        explorer.perceive(quiet());

        let safe = explorer.proven_safe().unwrap();
        assert!(safe.contains(&Cell::new(1, 1)));
        assert!(safe.contains(&Cell::new(2, 1)));
        assert!(safe.contains(&Cell::new(1, 2)));
        // Nothing is known about cells beyond the sensed horizon
        assert!(!safe.contains(&Cell::new(3, 3)));
    }

    #[test]
    fn test_breezy_start_leaves_neighbors_uncertain() {
        let mut explorer = Explorer::new(4);
        explorer.perceive(Percept {
            breeze: true,
            ..quiet()
        });

        let safe = explorer.proven_safe().unwrap();
        assert!(!safe.contains(&Cell::new(2, 1)));
        assert!(!safe.contains(&Cell::new(1, 2)));

        // But neither neighbor is provably a pit either
        let tolerable = explorer.not_provably_unsafe().unwrap();
        assert!(tolerable.contains(&Cell::new(2, 1)));
        assert!(tolerable.contains(&Cell::new(1, 2)));
    }

    #[test]
    fn test_visited_cells_drop_out_of_unvisited() {
        let mut explorer = Explorer::new(4);
        assert_eq!(explorer.unvisited().unwrap().len(), 16);

        explorer.perceive(quiet());
        let unvisited = explorer.unvisited().unwrap();
        assert_eq!(unvisited.len(), 15);
        assert!(!unvisited.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_choose_prefers_lowest_safe_cell() {
        let mut explorer = Explorer::new(4);
        explorer.perceive(quiet());

        // (1, 2) and (2, 1) are both safe and unvisited; row-major order
        // breaks the tie toward (1, 2)
        assert_eq!(explorer.choose().unwrap(), Choice::Safe(Cell::new(1, 2)));
    }

    #[test]
    fn test_choose_falls_back_to_risky() {
        let mut explorer = Explorer::new(2);
        explorer.perceive(Percept {
            breeze: true,
            stench: true,
            ..quiet()
        });

        // Every unvisited cell borders the start, so none is provably
        // safe, but the far corner is not provably dangerous either
        match explorer.choose().unwrap() {
            Choice::Risky(_) => {}
            other => panic!("expected a risky move, got {:?}", other),
        }
    }

    #[test]
    fn test_cornered_pits_are_deduced() {
        let mut explorer = Explorer::new(2);
        // Breeze at (1, 1) puts a pit at (2, 1) or (1, 2)
        explorer.perceive(Percept {
            breeze: true,
            ..quiet()
        });
        // Standing alive on (2, 1) rules it out, pinning the pit to (1, 2)
        explorer.relocate(Cell::new(2, 1));
        explorer.perceive(quiet());

        assert!(explorer.proves('P', Cell::new(1, 2), true).unwrap());
        let tolerable = explorer.not_provably_unsafe().unwrap();
        assert!(!tolerable.contains(&Cell::new(1, 2)));
    }
}
