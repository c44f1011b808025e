//! Clauses: canonical disjunctions of literals

use super::interner::Interner;
use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A clause (disjunction of literals) in canonical form
///
/// The literal vector is strictly sorted by code with duplicates collapsed,
/// so two clauses are the same disjunction iff they compare equal, subset
/// tests are a merge walk, and a literal sits directly next to its
/// complement when both are present. Every constructor normalizes; code
/// holding a `Clause` may rely on the invariant.
///
/// The empty clause stands for the contradiction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Normalize a disjunction into a clause: sort, collapse duplicates
    pub fn new(mut literals: Vec<Literal>) -> Self {
        literals.sort_unstable();
        literals.dedup();
        Clause { literals }
    }

    /// The empty clause (contradiction)
    pub fn empty() -> Self {
        Clause {
            literals: Vec::new(),
        }
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// The literals in canonical order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Iterate the literals in canonical order
    pub fn iter(&self) -> std::slice::Iter<'_, Literal> {
        self.literals.iter()
    }

    /// Membership test for a single literal
    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.binary_search(&literal).is_ok()
    }

    /// Check if this clause holds some literal together with its complement
    ///
    /// Complementary codes differ only in the low bit, so in the sorted
    /// vector they are adjacent and one windowed pass suffices.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .windows(2)
            .any(|pair| pair[0].complement() == pair[1])
    }

    /// Check if every literal of this clause occurs in `other`
    ///
    /// Subset means `other` is implied by this clause, which is exactly the
    /// subsumption test the engine filters with.
    pub fn is_subset_of(&self, other: &Clause) -> bool {
        if self.literals.len() > other.literals.len() {
            return false;
        }
        let mut candidates = other.literals.iter();
        'literals: for lit in &self.literals {
            for candidate in candidates.by_ref() {
                if candidate == lit {
                    continue 'literals;
                }
                if candidate > lit {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// Format this clause with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> ClauseDisplay<'a> {
        ClauseDisplay {
            clause: self,
            interner,
        }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter.into_iter().collect())
    }
}

/// Display wrapper for Clause that includes an interner for name resolution
pub struct ClauseDisplay<'a> {
    clause: &'a Clause,
    interner: &'a Interner,
}

impl<'a> fmt::Display for ClauseDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clause.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.clause.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit.display(self.interner))?;
            }
            Ok(())
        }
    }
}

// Display implementation that shows codes (for debugging without interner)
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}
