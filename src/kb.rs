//! Knowledge base: the clause store queries run against

use crate::logic::Clause;
use crate::parser::{cnf, Formula};
use serde::{Deserialize, Serialize};

/// An append-only store of asserted clauses
///
/// Sentences are decomposed to CNF on assertion, so the engine only ever
/// sees flat clauses. The store must not change while a query runs; the
/// engine borrows it shared for the whole call, which lets the compiler
/// enforce that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        KnowledgeBase {
            clauses: Vec::new(),
        }
    }

    /// Assert a sentence
    ///
    /// The sentence is CNF-decomposed and each conjunct appended.
    /// Tautological conjuncts carry no information and are dropped;
    /// duplicates of already-asserted clauses are dropped too.
    pub fn tell(&mut self, sentence: Formula) {
        for clause in cnf::clauses(sentence) {
            if clause.is_tautology() || self.clauses.contains(&clause) {
                continue;
            }
            self.clauses.push(clause);
        }
    }

    /// Assert a batch of sentences
    pub fn tell_all<I: IntoIterator<Item = Formula>>(&mut self, sentences: I) {
        for sentence in sentences {
            self.tell(sentence);
        }
    }

    /// The asserted clauses, in assertion order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of stored clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True if nothing has been asserted
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
