//! Conversion from formulas to CNF
//!
//! Implements the standard algorithm for converting propositional
//! formulas to Conjunctive Normal Form: negation normal form first, then
//! distribution of disjunction over conjunction. Distribution is complete:
//! the output is always a flat list of clauses with no connective left
//! inside a clause. The refutation loop's fixpoint answer is only sound
//! because of that completeness.
//!
//! Tautological clauses are not filtered here; callers decide their fate
//! (the knowledge base drops them on assertion, the engine at seeding).

use super::formula::Formula;
use crate::logic::{Clause, Literal};

/// Convert a formula to its CNF clause set
///
/// Degenerate results: a trivially true formula yields no clauses, a
/// trivially false one yields the single empty clause.
pub fn clauses(formula: Formula) -> Vec<Clause> {
    // Step 1: NNF - eliminates Implies/Iff, pushes negation to atoms,
    // folds truth constants
    let nnf = formula.to_nnf();

    // Step 2: handle degenerate cases
    match nnf {
        Formula::True => return Vec::new(),
        Formula::False => return vec![Clause::empty()],
        _ => {}
    }

    // Step 3: distribute Or over And
    distribute(nnf)
}

fn distribute(formula: Formula) -> Vec<Clause> {
    // Iterative CNF distribution - works with Vec<Clause> directly,
    // distributing OR over AND inline
    enum WorkItem {
        Process(Formula),
        CombineAnd,     // Concatenate clause lists
        CombineOrCross, // Cross-product of clause lists
    }

    let mut stack: Vec<WorkItem> = vec![WorkItem::Process(formula)];
    let mut results: Vec<Vec<Clause>> = Vec::new();

    while let Some(item) = stack.pop() {
        match item {
            WorkItem::Process(f) => match f {
                Formula::And(f1, f2) => {
                    stack.push(WorkItem::CombineAnd);
                    stack.push(WorkItem::Process(*f2));
                    stack.push(WorkItem::Process(*f1));
                }

                Formula::Or(f1, f2) => {
                    // Check if we need to distribute OR over AND
                    match (*f1, *f2) {
                        (Formula::And(a1, a2), f2) => {
                            // (A & B) | C => (A | C) & (B | C)
                            let c1 = Formula::Or(a1, Box::new(f2.clone()));
                            let c2 = Formula::Or(a2, Box::new(f2));
                            stack.push(WorkItem::CombineAnd);
                            stack.push(WorkItem::Process(c2));
                            stack.push(WorkItem::Process(c1));
                        }
                        (f1, Formula::And(a1, a2)) => {
                            // C | (A & B) => (C | A) & (C | B)
                            let c1 = Formula::Or(Box::new(f1.clone()), a1);
                            let c2 = Formula::Or(Box::new(f1), a2);
                            stack.push(WorkItem::CombineAnd);
                            stack.push(WorkItem::Process(c2));
                            stack.push(WorkItem::Process(c1));
                        }
                        (f1, f2) => {
                            // No And at top level of either child -
                            // recurse and take the cross product
                            stack.push(WorkItem::CombineOrCross);
                            stack.push(WorkItem::Process(f2));
                            stack.push(WorkItem::Process(f1));
                        }
                    }
                }

                Formula::Atom(_) | Formula::Not(_) => {
                    results.push(vec![Clause::new(collect_literals(f))]);
                }

                _ => panic!("Unexpected formula in CNF distribution: {:?}", f),
            },

            WorkItem::CombineAnd => {
                let right = results.pop().unwrap();
                let mut left = results.pop().unwrap();
                left.extend(right);
                results.push(left);
            }

            WorkItem::CombineOrCross => {
                let clauses2 = results.pop().unwrap();
                let clauses1 = results.pop().unwrap();

                let mut result = Vec::new();
                for c1 in &clauses1 {
                    for c2 in &clauses2 {
                        result.push(c1.iter().chain(c2.iter()).copied().collect());
                    }
                }
                results.push(result);
            }
        }
    }

    results.pop().unwrap_or_default()
}

fn collect_literals(formula: Formula) -> Vec<Literal> {
    // Iterative literal collection over a conjunction-free subtree
    let mut stack: Vec<Formula> = vec![formula];
    let mut literals: Vec<Literal> = Vec::new();

    while let Some(f) = stack.pop() {
        match f {
            Formula::Or(f1, f2) => {
                stack.push(*f2);
                stack.push(*f1);
            }

            Formula::Atom(p) => {
                literals.push(Literal::positive(p));
            }

            Formula::Not(inner) => match *inner {
                Formula::Atom(p) => {
                    literals.push(Literal::negative(p));
                }
                _ => panic!("Negation of non-atom in CNF: {:?}", inner),
            },

            _ => panic!("Non-disjunctive formula in clause: {:?}", f),
        }
    }

    literals
}
