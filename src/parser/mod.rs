//! Sentence parsing and CNF conversion

pub mod cnf;
pub mod formula;
pub mod text;

// Re-export main parsing functions and types
pub use formula::{Formula, FormulaDisplay};
pub use text::{parse_kb, parse_kb_file, parse_sentence};
