//! Property-based tests for the refutation engine.

use proptest::prelude::*;
use std::collections::HashSet;

use super::entails;
use crate::kb::KnowledgeBase;
use crate::logic::{Clause, Interner, PropositionId};
use crate::parser::{cnf, parse_sentence, Formula};

/// Number of propositions the generated formulas draw from. Small enough
/// that a full truth table stays cheap, large enough for real structure.
const ALPHABET: u8 = 4;

/// Formula description before interning
#[derive(Debug, Clone)]
enum FormulaDesc {
    Atom(u8),
    Not(Box<FormulaDesc>),
    And(Box<FormulaDesc>, Box<FormulaDesc>),
    Or(Box<FormulaDesc>, Box<FormulaDesc>),
    Implies(Box<FormulaDesc>, Box<FormulaDesc>),
    Iff(Box<FormulaDesc>, Box<FormulaDesc>),
}

fn arb_formula_desc(max_depth: u32) -> BoxedStrategy<FormulaDesc> {
    if max_depth == 0 {
        (0..ALPHABET).prop_map(FormulaDesc::Atom).boxed()
    } else {
        let sub = || arb_formula_desc(max_depth - 1);
        prop_oneof![
            3 => (0..ALPHABET).prop_map(FormulaDesc::Atom),
            2 => sub().prop_map(|f| FormulaDesc::Not(Box::new(f))),
            2 => (sub(), sub()).prop_map(|(a, b)| FormulaDesc::And(Box::new(a), Box::new(b))),
            2 => (sub(), sub()).prop_map(|(a, b)| FormulaDesc::Or(Box::new(a), Box::new(b))),
            1 => (sub(), sub()).prop_map(|(a, b)| FormulaDesc::Implies(Box::new(a), Box::new(b))),
            1 => (sub(), sub()).prop_map(|(a, b)| FormulaDesc::Iff(Box::new(a), Box::new(b))),
        ]
        .boxed()
    }
}

fn build_formula(desc: &FormulaDesc, interner: &mut Interner) -> Formula {
    match desc {
        FormulaDesc::Atom(i) => {
            let name = format!("p{}", i);
            Formula::atom(interner.intern(&name))
        }
        FormulaDesc::Not(f) => Formula::not(build_formula(f, interner)),
        FormulaDesc::And(a, b) => {
            Formula::and(build_formula(a, interner), build_formula(b, interner))
        }
        FormulaDesc::Or(a, b) => {
            Formula::or(build_formula(a, interner), build_formula(b, interner))
        }
        FormulaDesc::Implies(a, b) => {
            Formula::implies(build_formula(a, interner), build_formula(b, interner))
        }
        FormulaDesc::Iff(a, b) => {
            Formula::iff(build_formula(a, interner), build_formula(b, interner))
        }
    }
}

/// Interns the whole alphabet up front so every case shares one universe
fn alphabet(interner: &mut Interner) -> Vec<PropositionId> {
    (0..ALPHABET)
        .map(|i| interner.intern(&format!("p{}", i)))
        .collect()
}

fn arb_entailment_case(max_depth: u32) -> impl Strategy<Value = (KnowledgeBase, Formula, Interner)> {
    (
        proptest::collection::vec(arb_formula_desc(max_depth), 0..=3),
        arb_formula_desc(max_depth),
    )
        .prop_map(|(kb_descs, query_desc)| {
            let mut interner = Interner::new();
            alphabet(&mut interner);
            let mut kb = KnowledgeBase::new();
            for desc in &kb_descs {
                kb.tell(build_formula(desc, &mut interner));
            }
            let query = build_formula(&query_desc, &mut interner);
            (kb, query, interner)
        })
}

fn arb_formula_with_interner(max_depth: u32) -> impl Strategy<Value = (Formula, Interner)> {
    arb_formula_desc(max_depth).prop_map(|desc| {
        let mut interner = Interner::new();
        alphabet(&mut interner);
        let formula = build_formula(&desc, &mut interner);
        (formula, interner)
    })
}

fn model_for(mask: u32, props: &[PropositionId]) -> HashSet<PropositionId> {
    props
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, &p)| p)
        .collect()
}

fn eval_clauses(clauses: &[Clause], model: &HashSet<PropositionId>) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|lit| lit.is_positive() == model.contains(&lit.proposition()))
    })
}

/// Exhaustive truth-table oracle over the fixed alphabet. Returns whether
/// the knowledge base has any model at all, and whether every model of it
/// also models the query.
fn truth_table(kb: &KnowledgeBase, query: &Formula, props: &[PropositionId]) -> (bool, bool) {
    let mut satisfiable = false;
    let mut entailed = true;
    for mask in 0..(1u32 << props.len()) {
        let model = model_for(mask, props);
        if eval_clauses(kb.clauses(), &model) {
            satisfiable = true;
            if !query.evaluate(&model) {
                entailed = false;
            }
        }
    }
    (satisfiable, entailed)
}

proptest! {
    /// Against a satisfiable store, refutation answers exactly what the
    /// truth table answers. Unsatisfiable stores are excluded here: with
    /// no model everything is vacuously entailed, but only the goal side
    /// seeds the search, so a contradiction buried in the store can stay
    /// untouched.
    #[test]
    fn entailment_matches_truth_table((kb, query, mut interner) in arb_entailment_case(3)) {
        let props = alphabet(&mut interner);
        let (satisfiable, expected) = truth_table(&kb, &query, &props);
        prop_assume!(satisfiable);

        let verdict = entails(&kb, &query).unwrap();
        prop_assert_eq!(verdict, expected,
            "engine and truth table disagree on {}", query.display(&interner));
    }

    /// A proof is never wrong, no matter the store
    #[test]
    fn proofs_are_sound((kb, query, mut interner) in arb_entailment_case(3)) {
        let props = alphabet(&mut interner);
        let (_, expected) = truth_table(&kb, &query, &props);

        let verdict = entails(&kb, &query).unwrap();
        if verdict {
            prop_assert!(expected,
                "engine proved {} but the truth table rejects it", query.display(&interner));
        }
    }

    /// Repeating a query leaves the store untouched and the answer fixed
    #[test]
    fn queries_are_repeatable((kb, query, _interner) in arb_entailment_case(3)) {
        let first = entails(&kb, &query).unwrap();
        let second = entails(&kb, &query).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Clausification preserves models across every assignment
    #[test]
    fn cnf_preserves_models((formula, mut interner) in arb_formula_with_interner(3)) {
        let props = alphabet(&mut interner);
        let clauses = cnf::clauses(formula.clone());

        for mask in 0..(1u32 << props.len()) {
            let model = model_for(mask, &props);
            prop_assert_eq!(formula.evaluate(&model), eval_clauses(&clauses, &model),
                "model mask {:#06b} separates {} from its clauses", mask, formula.display(&interner));
        }
    }

    /// Printing and reparsing a formula changes nothing observable
    #[test]
    fn display_reparses_to_same_function((formula, mut interner) in arb_formula_with_interner(3)) {
        let props = alphabet(&mut interner);
        let text = format!("{}", formula.display(&interner));
        let reparsed = parse_sentence(&text, &mut interner).unwrap();

        for mask in 0..(1u32 << props.len()) {
            let model = model_for(mask, &props);
            prop_assert_eq!(formula.evaluate(&model), reparsed.evaluate(&model),
                "reparse of {} diverges", text);
        }
    }
}
