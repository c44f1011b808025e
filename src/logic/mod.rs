//! Propositional logic data structures
//!
//! This module provides the fundamental types the engine computes with:
//! interned propositions, packed literals, and canonical clauses.

pub mod clause;
pub mod interner;
pub mod literal;

// Re-export commonly used types
pub use clause::{Clause, ClauseDisplay};
pub use interner::{Interner, PropositionId};
pub use literal::{Literal, LiteralDisplay};
