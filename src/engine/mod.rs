//! Refutation engine: set-of-support resolution to a fixpoint
//!
//! A query is proved by refutation: the negated query is CNF-decomposed
//! into a "tainted" seed set, and each round resolves tainted clauses
//! against the union of tainted and knowledge-base clauses. Only tainted
//! clauses initiate pairs, so the engine never wastes effort resolving
//! knowledge-base clauses against each other. Derived clauses pass a
//! subsumption filter before joining the tainted set; deriving the empty
//! clause proves the query, a round that adds nothing disproves it.
//!
//! The loop always terminates: the literal alphabet is fixed once a call
//! starts, so only finitely many distinct clauses exist, and the tainted
//! set grows strictly on every round that does not exit. The optional
//! config limits exist to cut long runs short with a distinguishable
//! error, never to make termination possible.
//!
//! The knowledge base is borrowed shared for the whole call and must not
//! change mid-query; per-query state lives entirely in this module and is
//! dropped on return, so every call reprocesses the current snapshot.

pub mod index;
pub mod resolve;
pub mod subsumption;

#[cfg(test)]
mod proptest_tests;

pub use resolve::{resolve, Resolvent};

use crate::config::EngineConfig;
use crate::error::{ResoluteError, Result};
use crate::kb::KnowledgeBase;
use crate::logic::Clause;
use crate::parser::{cnf, Formula};
use index::LiteralIndex;
use indexmap::IndexSet;
use log::{debug, trace};

/// Terminal state of one refutation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefutationOutcome {
    /// Empty clause derived: the query is entailed (rounds taken)
    Proved(usize),
    /// Fixpoint reached with no contradiction: not entailed
    /// (rounds taken, tainted clauses retained)
    Saturated(usize, usize),
    /// Gave up after the configured number of rounds
    RoundLimit(usize),
    /// Gave up after retaining the configured number of clauses
    ClauseLimit(usize),
}

impl RefutationOutcome {
    pub fn is_proved(&self) -> bool {
        matches!(self, RefutationOutcome::Proved(_))
    }
}

/// Decide whether the knowledge base entails the sentence
pub fn entails(kb: &KnowledgeBase, query: &Formula) -> Result<bool> {
    entails_with(kb, query, &EngineConfig::default())
}

/// Decide entailment under explicit engine limits
///
/// Hitting a limit is an error distinct from a `false` answer: absence of
/// a proof only means "not entailed" after genuine saturation.
pub fn entails_with(kb: &KnowledgeBase, query: &Formula, config: &EngineConfig) -> Result<bool> {
    let seed = cnf::clauses(query.clone().negated());
    match refute(kb, seed, config) {
        RefutationOutcome::Proved(_) => Ok(true),
        RefutationOutcome::Saturated(..) => Ok(false),
        RefutationOutcome::RoundLimit(rounds) => Err(ResoluteError::RoundLimitExceeded { rounds }),
        RefutationOutcome::ClauseLimit(clauses) => {
            Err(ResoluteError::ClauseLimitExceeded { clauses })
        }
    }
}

/// Run refutation from a pre-normalized goal seed
///
/// The seed is the CNF decomposition of the negated query. Tautological
/// seed clauses carry no information and are discarded; an empty seed
/// clause means the negated query is already false, which proves the
/// query before any resolution.
pub fn refute(kb: &KnowledgeBase, seed: Vec<Clause>, config: &EngineConfig) -> RefutationOutcome {
    let mut tainted: IndexSet<Clause> = IndexSet::new();
    for clause in seed {
        if clause.is_empty() {
            return RefutationOutcome::Proved(0);
        }
        if clause.is_tautology() {
            continue;
        }
        tainted.insert(clause);
    }

    // A store holding the empty clause entails anything; the tainted
    // frontier would never touch it, so it is checked once up front
    if kb.clauses().iter().any(|c| c.is_empty()) {
        return RefutationOutcome::Proved(0);
    }

    debug!(
        "refutation seeded with {} tainted clauses against {} stored",
        tainted.len(),
        kb.len()
    );

    let refutation = Refutation {
        kb,
        tainted,
        config: *config,
        rounds: 0,
    };
    let outcome = refutation.run();
    debug!("refutation finished: {:?}", outcome);
    outcome
}

struct Refutation<'a> {
    kb: &'a KnowledgeBase,
    tainted: IndexSet<Clause>,
    config: EngineConfig,
    rounds: usize,
}

impl<'a> Refutation<'a> {
    fn check_limits(&self) -> Option<RefutationOutcome> {
        if self.config.max_rounds != 0 && self.rounds >= self.config.max_rounds {
            return Some(RefutationOutcome::RoundLimit(self.rounds));
        }
        if self.config.max_clauses != 0 && self.tainted.len() > self.config.max_clauses {
            return Some(RefutationOutcome::ClauseLimit(self.tainted.len()));
        }
        None
    }

    fn run(mut self) -> RefutationOutcome {
        'outer: loop {
            if let Some(outcome) = self.check_limits() {
                break outcome;
            }
            self.rounds += 1;

            let (batch, pairs) = {
                // === Step 1: Rebuild the literal index over tainted ∪ store ===
                let view: Vec<&Clause> = self.tainted.iter().chain(self.kb.clauses()).collect();
                let idx = LiteralIndex::build(&view);

                // === Step 2: Resolve every pair a tainted clause initiates ===
                let mut batch: IndexSet<Clause> = IndexSet::new();
                let mut pairs = 0usize;
                for clause in self.tainted.iter() {
                    for &lit in clause.iter() {
                        for &partner in idx.clauses_with(lit.complement()) {
                            pairs += 1;
                            match resolve(lit, clause, view[partner]) {
                                Resolvent::Contradiction => {
                                    break 'outer RefutationOutcome::Proved(self.rounds);
                                }
                                Resolvent::Tautology => {}
                                Resolvent::Derived(derived) => {
                                    batch.insert(derived);
                                }
                            }
                        }
                    }
                }
                (batch, pairs)
            };

            // === Step 3: Keep candidates no known clause subsumes ===
            // Survivors join immediately, so later candidates are also
            // filtered against earlier survivors of the same round
            let derived = batch.len();
            let mut added = 0usize;
            for candidate in batch {
                if subsumption::is_redundant(
                    &candidate,
                    self.tainted.iter().chain(self.kb.clauses()),
                ) {
                    continue;
                }
                self.tainted.insert(candidate);
                added += 1;
            }

            trace!(
                "round {}: {} pairs resolved, {} derived, {} added, {} tainted",
                self.rounds,
                pairs,
                derived,
                added,
                self.tainted.len()
            );

            // === Step 4: Fixpoint means no proof exists from this support ===
            if added == 0 {
                break RefutationOutcome::Saturated(self.rounds, self.tainted.len());
            }
        }
    }
}
