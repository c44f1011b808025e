//! Propositional formula representation
//!
//! Structures for representing full propositional sentences before
//! conversion to CNF.

use crate::logic::{Interner, PropositionId};
use std::collections::HashSet;
use std::fmt;

/// Propositional formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// Truth constant
    True,
    /// Falsity constant
    False,
    /// Atomic proposition
    Atom(PropositionId),
    /// Negation
    Not(Box<Formula>),
    /// Conjunction
    And(Box<Formula>, Box<Formula>),
    /// Disjunction
    Or(Box<Formula>, Box<Formula>),
    /// Implication
    Implies(Box<Formula>, Box<Formula>),
    /// Biconditional
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Atomic proposition
    pub fn atom(p: PropositionId) -> Formula {
        Formula::Atom(p)
    }

    pub fn not(f: Formula) -> Formula {
        Formula::Not(Box::new(f))
    }

    pub fn and(f1: Formula, f2: Formula) -> Formula {
        Formula::And(Box::new(f1), Box::new(f2))
    }

    pub fn or(f1: Formula, f2: Formula) -> Formula {
        Formula::Or(Box::new(f1), Box::new(f2))
    }

    pub fn implies(f1: Formula, f2: Formula) -> Formula {
        Formula::Implies(Box::new(f1), Box::new(f2))
    }

    pub fn iff(f1: Formula, f2: Formula) -> Formula {
        Formula::Iff(Box::new(f1), Box::new(f2))
    }

    /// Conjoin a sequence of formulas; empty input yields `True`
    pub fn conjunction<I: IntoIterator<Item = Formula>>(formulas: I) -> Formula {
        let mut iter = formulas.into_iter();
        match iter.next() {
            None => Formula::True,
            Some(first) => iter.fold(first, Formula::and),
        }
    }

    /// Disjoin a sequence of formulas; empty input yields `False`
    pub fn disjunction<I: IntoIterator<Item = Formula>>(formulas: I) -> Formula {
        let mut iter = formulas.into_iter();
        match iter.next() {
            None => Formula::False,
            Some(first) => iter.fold(first, Formula::or),
        }
    }

    /// The negation of this formula
    pub fn negated(self) -> Formula {
        Formula::Not(Box::new(self))
    }

    /// Get all atomic propositions in the formula
    pub fn atoms(&self) -> HashSet<PropositionId> {
        match self {
            Formula::True | Formula::False => HashSet::new(),
            Formula::Atom(p) => HashSet::from([*p]),
            Formula::Not(f) => f.atoms(),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => {
                let mut atoms = f1.atoms();
                atoms.extend(f2.atoms());
                atoms
            }
        }
    }

    /// Evaluate under an assignment (the set of propositions that are true)
    pub fn evaluate(&self, truth: &HashSet<PropositionId>) -> bool {
        match self {
            Formula::True => true,
            Formula::False => false,
            Formula::Atom(p) => truth.contains(p),
            Formula::Not(f) => !f.evaluate(truth),
            Formula::And(f1, f2) => f1.evaluate(truth) && f2.evaluate(truth),
            Formula::Or(f1, f2) => f1.evaluate(truth) || f2.evaluate(truth),
            Formula::Implies(f1, f2) => !f1.evaluate(truth) || f2.evaluate(truth),
            Formula::Iff(f1, f2) => f1.evaluate(truth) == f2.evaluate(truth),
        }
    }

    /// Convert to negation normal form (NNF) using iterative approach to avoid stack overflow
    ///
    /// Eliminates Implies/Iff, pushes negation down to atoms, and folds
    /// truth constants away as subtrees combine, so the result contains
    /// `True`/`False` only as the whole formula.
    pub fn to_nnf(self) -> Formula {
        // Pure stack-based algorithm - result stack holds intermediate formulas
        enum WorkItem {
            Process(Formula, bool), // (formula, negate)
            CombineAnd,
            CombineOr,
        }

        let mut stack: Vec<WorkItem> = vec![WorkItem::Process(self, false)];
        let mut results: Vec<Formula> = Vec::new();

        while let Some(item) = stack.pop() {
            match item {
                WorkItem::Process(formula, negate) => {
                    match (formula, negate) {
                        // Truth constants - base case
                        (Formula::True, false) | (Formula::False, true) => {
                            results.push(Formula::True);
                        }
                        (Formula::True, true) | (Formula::False, false) => {
                            results.push(Formula::False);
                        }

                        // Atom - base case
                        (Formula::Atom(p), false) => {
                            results.push(Formula::Atom(p));
                        }
                        (Formula::Atom(p), true) => {
                            results.push(Formula::Not(Box::new(Formula::Atom(p))));
                        }

                        // Double negation - just flip and continue
                        (Formula::Not(f), neg) => {
                            stack.push(WorkItem::Process(*f, !neg));
                        }

                        // Conjunction
                        (Formula::And(f1, f2), false) => {
                            stack.push(WorkItem::CombineAnd);
                            stack.push(WorkItem::Process(*f2, false));
                            stack.push(WorkItem::Process(*f1, false));
                        }
                        (Formula::And(f1, f2), true) => {
                            // De Morgan: ~(A & B) = ~A | ~B
                            stack.push(WorkItem::CombineOr);
                            stack.push(WorkItem::Process(*f2, true));
                            stack.push(WorkItem::Process(*f1, true));
                        }

                        // Disjunction
                        (Formula::Or(f1, f2), false) => {
                            stack.push(WorkItem::CombineOr);
                            stack.push(WorkItem::Process(*f2, false));
                            stack.push(WorkItem::Process(*f1, false));
                        }
                        (Formula::Or(f1, f2), true) => {
                            // De Morgan: ~(A | B) = ~A & ~B
                            stack.push(WorkItem::CombineAnd);
                            stack.push(WorkItem::Process(*f2, true));
                            stack.push(WorkItem::Process(*f1, true));
                        }

                        // Implication: A => B = ~A | B
                        (Formula::Implies(f1, f2), false) => {
                            stack.push(WorkItem::CombineOr);
                            stack.push(WorkItem::Process(*f2, false));
                            stack.push(WorkItem::Process(*f1, true));
                        }
                        (Formula::Implies(f1, f2), true) => {
                            // ~(A => B) = A & ~B
                            stack.push(WorkItem::CombineAnd);
                            stack.push(WorkItem::Process(*f2, true));
                            stack.push(WorkItem::Process(*f1, false));
                        }

                        // Biconditional: A <=> B = (~A | B) & (A | ~B)
                        (Formula::Iff(f1, f2), false) => {
                            let f1_clone = (*f1).clone();
                            let f2_clone = (*f2).clone();

                            // Structure: And(Or(~A, B), Or(A, ~B))
                            stack.push(WorkItem::CombineAnd);
                            // Second Or: (A | ~B)
                            stack.push(WorkItem::CombineOr);
                            stack.push(WorkItem::Process(f2_clone, true));
                            stack.push(WorkItem::Process(f1_clone, false));
                            // First Or: (~A | B)
                            stack.push(WorkItem::CombineOr);
                            stack.push(WorkItem::Process(*f2, false));
                            stack.push(WorkItem::Process(*f1, true));
                        }
                        (Formula::Iff(f1, f2), true) => {
                            // ~(A <=> B) = (A & ~B) | (~A & B)
                            let f1_clone = (*f1).clone();
                            let f2_clone = (*f2).clone();

                            // Structure: Or(And(A, ~B), And(~A, B))
                            stack.push(WorkItem::CombineOr);
                            // Second And: (~A & B)
                            stack.push(WorkItem::CombineAnd);
                            stack.push(WorkItem::Process(f2_clone, false));
                            stack.push(WorkItem::Process(f1_clone, true));
                            // First And: (A & ~B)
                            stack.push(WorkItem::CombineAnd);
                            stack.push(WorkItem::Process(*f2, true));
                            stack.push(WorkItem::Process(*f1, false));
                        }
                    }
                }

                WorkItem::CombineAnd => {
                    let child2 = results.pop().unwrap();
                    let child1 = results.pop().unwrap();
                    results.push(match (child1, child2) {
                        (Formula::False, _) | (_, Formula::False) => Formula::False,
                        (Formula::True, f) | (f, Formula::True) => f,
                        (f1, f2) => Formula::And(Box::new(f1), Box::new(f2)),
                    });
                }

                WorkItem::CombineOr => {
                    let child2 = results.pop().unwrap();
                    let child1 = results.pop().unwrap();
                    results.push(match (child1, child2) {
                        (Formula::True, _) | (_, Formula::True) => Formula::True,
                        (Formula::False, f) | (f, Formula::False) => f,
                        (f1, f2) => Formula::Or(Box::new(f1), Box::new(f2)),
                    });
                }
            }
        }

        debug_assert_eq!(results.len(), 1);
        results.pop().unwrap()
    }

    /// Format this formula with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> FormulaDisplay<'a> {
        FormulaDisplay {
            formula: self,
            interner,
        }
    }
}

/// Display wrapper for Formula that includes an interner for name resolution
///
/// Binary connectives print fully parenthesized.
pub struct FormulaDisplay<'a> {
    formula: &'a Formula,
    interner: &'a Interner,
}

impl<'a> fmt::Display for FormulaDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formula {
            Formula::True => write!(f, "$true"),
            Formula::False => write!(f, "$false"),
            Formula::Atom(p) => write!(f, "{}", self.interner.resolve(*p)),
            Formula::Not(inner) => write!(f, "~{}", inner.display(self.interner)),
            Formula::And(f1, f2) => write!(
                f,
                "({} & {})",
                f1.display(self.interner),
                f2.display(self.interner)
            ),
            Formula::Or(f1, f2) => write!(
                f,
                "({} | {})",
                f1.display(self.interner),
                f2.display(self.interner)
            ),
            Formula::Implies(f1, f2) => write!(
                f,
                "({} => {})",
                f1.display(self.interner),
                f2.display(self.interner)
            ),
            Formula::Iff(f1, f2) => write!(
                f,
                "({} <=> {})",
                f1.display(self.interner),
                f2.display(self.interner)
            ),
        }
    }
}
