//! Resolute: a propositional entailment engine built on refutation resolution
//!
//! Sentences are parsed into formulas, clausified into conjunctive normal
//! form, and stored in a knowledge base of canonical clauses. A query is
//! answered by negating it and resolving the negation against the store
//! until the empty clause appears (entailed) or no new clause survives
//! subsumption (not entailed). The wumpus module puts the engine to work
//! steering an explorer through the classic cave.

pub mod config;
pub mod engine;
pub mod error;
pub mod kb;
pub mod logic;
pub mod parser;
pub mod wumpus;

// Re-export the clause-level types
pub use logic::{Clause, ClauseDisplay, Interner, Literal, LiteralDisplay, PropositionId};

// Re-export the engine entry points
pub use engine::{entails, entails_with, refute, resolve, RefutationOutcome, Resolvent};

pub use config::EngineConfig;
pub use error::{ResoluteError, Result};
pub use kb::KnowledgeBase;
pub use parser::{parse_kb, parse_kb_file, parse_sentence, Formula, FormulaDisplay};
