//! Per-round literal index
//!
//! Maps each literal to the clauses containing it, over the round's view
//! of tainted ∪ knowledge-base clauses. The index is rebuilt from scratch
//! every round rather than maintained incrementally: the tainted set grows
//! between rounds, and a full rebuild keeps the "known clauses" view the
//! subsumption filter sees trivially consistent with the pair schedule.

use crate::logic::{Clause, Literal};
use std::collections::HashMap;

/// Literal occurrence index over one round's clause view
pub struct LiteralIndex {
    map: HashMap<Literal, Vec<usize>>,
}

impl LiteralIndex {
    /// Build the index over a slice of clause references
    ///
    /// Positions in the slice are the clause handles the index hands back.
    pub fn build(clauses: &[&Clause]) -> Self {
        let mut map: HashMap<Literal, Vec<usize>> = HashMap::new();
        for (idx, clause) in clauses.iter().enumerate() {
            for &lit in clause.iter() {
                map.entry(lit).or_default().push(idx);
            }
        }
        LiteralIndex { map }
    }

    /// All clauses containing the given literal
    pub fn clauses_with(&self, literal: Literal) -> &[usize] {
        match self.map.get(&literal) {
            Some(indices) => indices,
            None => &[],
        }
    }
}
